//! Rendering of the status line
//!
//! Everything here is pure: state, seconds left and configuration in, text out.

pub mod clock;
pub mod color;
pub mod progress;
pub mod status_line;

pub use status_line::StatusLine;

use crate::{
    config::Config,
    state::{Durations, TimerState},
};
use progress::progress_bar;

/// Text of the status line for one tick
pub fn render_text(
    state: TimerState,
    seconds_left: Option<i64>,
    durations: Durations,
    config: &Config,
) -> String {
    let labels = &config.labels;
    let left = seconds_left.unwrap_or_default();

    match state {
        TimerState::Idle if config.auto_hide => String::new(),
        TimerState::Idle => format!("{}-{}", labels.pomodoro_prefix, labels.pomodoro_suffix),
        TimerState::Active => {
            let bar = progress_bar(durations.session, left, &config.bar, &config.bar.session_mark);
            timed(&labels.pomodoro_prefix, &bar, &clock::clock(left), &labels.pomodoro_suffix)
        }
        TimerState::Break => {
            let break_left = durations.break_.saturating_add(left);
            let bar = progress_bar(durations.break_, break_left, &config.bar, &config.bar.break_mark);
            timed(&labels.break_prefix, &bar, &clock::clock(break_left), &labels.break_suffix)
        }
        TimerState::Wait => format!(
            "{} {}{}",
            labels.break_prefix,
            clock::waiting(left.saturating_neg()),
            labels.break_suffix
        ),
    }
}

/// Color hint for i3bar output
pub fn render_color(state: TimerState, seconds_left: Option<i64>, durations: Durations) -> String {
    match (state, seconds_left) {
        (TimerState::Active, Some(left)) => color::session_color(durations.session, left).hex(),
        (TimerState::Active, None) => color::START.hex(),
        _ => color::BREAK.hex(),
    }
}

/// Full status line for one tick
pub fn render(
    state: TimerState,
    seconds_left: Option<i64>,
    durations: Durations,
    config: &Config,
) -> StatusLine {
    StatusLine::new(
        render_text(state, seconds_left, durations, config),
        render_color(state, seconds_left, durations),
    )
}

fn timed(prefix: &str, bar: &str, clock: &str, suffix: &str) -> String {
    if bar.is_empty() {
        format!("{prefix} {clock}{suffix}")
    } else {
        format!("{prefix} {bar} {clock}{suffix}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Dirs;

    fn config() -> Config {
        let mut config = Config::defaults(&Dirs::rooted("/c".into(), "/k".into(), "/d".into()));
        config.bar.empty_mark = ".".to_string();
        config
    }

    const DURATIONS: Durations = Durations { session: 1500, break_: 300 };

    #[test]
    fn idle_shows_a_dash_unless_hidden() {
        let mut config = config();
        assert_eq!(render_text(TimerState::Idle, None, DURATIONS, &config), "P-");
        config.auto_hide = true;
        assert_eq!(render_text(TimerState::Idle, None, DURATIONS, &config), "");
    }

    #[test]
    fn active_shows_bar_and_clock() {
        let text = render_text(TimerState::Active, Some(750), DURATIONS, &config());
        assert_eq!(text, "P #####..... 12:30");
    }

    #[test]
    fn active_uses_pomodoro_labels() {
        let mut config = config();
        config.labels.pomodoro_prefix = "<w>".to_string();
        config.labels.pomodoro_suffix = "</w>".to_string();
        let text = render_text(TimerState::Active, Some(1500), DURATIONS, &config);
        assert_eq!(text, "<w> ########## 25:00</w>");
    }

    #[test]
    fn break_counts_its_own_duration() {
        let text = render_text(TimerState::Break, Some(-60), DURATIONS, &config());
        assert_eq!(text, "B ||||||||.. 04:00");
    }

    #[test]
    fn no_bar_means_single_space() {
        let mut config = config();
        config.bar.total_marks = 0;
        let text = render_text(TimerState::Active, Some(61), DURATIONS, &config);
        assert_eq!(text, "P 01:01");
    }

    #[test]
    fn wait_shows_elapsed_since_break() {
        let text = render_text(TimerState::Wait, Some(-3600), DURATIONS, &config());
        assert_eq!(text, "B 01:00 h");
        let text = render_text(TimerState::Wait, Some(-8 * 86400), DURATIONS, &config());
        assert_eq!(text, "B Over a week");
    }

    #[test]
    fn colors_follow_state() {
        assert_eq!(render_color(TimerState::Active, Some(1500), DURATIONS), "#8bf09b");
        assert_eq!(render_color(TimerState::Active, Some(0), DURATIONS), "#e94d44");
        assert_eq!(render_color(TimerState::Break, Some(-10), DURATIONS), "#ddee5c");
        assert_eq!(render_color(TimerState::Idle, None, DURATIONS), "#ddee5c");
    }

    #[test]
    fn extreme_values_saturate() {
        let huge = Durations { session: i64::MAX, break_: i64::MAX };
        let text = render_text(TimerState::Break, Some(5), huge, &config());
        assert!(text.starts_with("B |||||||||| "));
        assert_eq!(render_text(TimerState::Wait, Some(i64::MIN), DURATIONS, &config()), "B Over a week");
    }
}
