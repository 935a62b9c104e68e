//! Timer states and the rules that classify a tick

use serde::{Deserialize, Serialize};

/// Where the current session stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TimerState {
    /// No marker file, nothing is running
    #[default]
    Idle,
    /// Inside the work interval
    Active,
    /// Past the work interval, inside the break
    Break,
    /// Break is over, waiting for the next session
    Wait,
}

impl TimerState {
    /// State shown on the status line for this tick.
    ///
    /// `seconds_left == 0` still renders as active.
    pub fn displayed(seconds_left: Option<i64>, break_duration: i64) -> Self {
        match seconds_left {
            None => TimerState::Idle,
            Some(left) if left >= 0 => TimerState::Active,
            Some(left) if break_elapsed(left) <= break_duration => TimerState::Break,
            Some(_) => TimerState::Wait,
        }
    }

    /// State used to detect transitions.
    ///
    /// Runs one second ahead of [`TimerState::displayed`] on both edges so
    /// that transition effects never fire on an exact zero-crossing tick.
    pub fn transition_target(seconds_left: Option<i64>, break_duration: i64) -> Self {
        match seconds_left {
            None => TimerState::Idle,
            Some(left) if left > 1 => TimerState::Active,
            Some(left) if break_elapsed(left).saturating_add(1) < break_duration || left == 1 => TimerState::Break,
            Some(_) => TimerState::Wait,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TimerState::Idle => "IDLE",
            TimerState::Active => "ACTIVE",
            TimerState::Break => "BREAK",
            TimerState::Wait => "WAIT",
        }
    }
}

impl std::fmt::Display for TimerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Work and break lengths in effect for the current session, in seconds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Durations {
    pub session: i64,
    pub break_: i64,
}

/// Seconds spent past the end of the session
fn break_elapsed(seconds_left: i64) -> i64 {
    seconds_left.saturating_abs()
}
