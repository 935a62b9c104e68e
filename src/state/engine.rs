//! Timer engine: owns the runtime state and dispatches transition effects

use chrono::{DateTime, Utc};
use std::{io, path::Path};
use tracing::{debug, error, info, warn};

use super::{Durations, TimerState};
use crate::{
    config::Config,
    error::SessionError,
    render::{self, StatusLine},
    services::{marker_file, DurationOverrides, Effects, MarkerFile},
};

const SESSION_DONE: (&str, &str) = ("Worked enough.", "Time for a break!");
const BREAK_DONE: (&str, &str) = ("Break is over.", "Back to work!");

/// The pomodoro timer.
///
/// Call [`Engine::update_state`] once per update interval, then render. The
/// engine never writes the marker file; it only stats it every tick and
/// re-reads its first line when the modification time changes.
///
/// A fresh engine has no committed state. Its first update takes the state
/// displayed for that tick as the previous one, so a process started per
/// poll behaves like one long-running loop.
#[derive(Debug)]
pub struct Engine {
    config: Config,
    marker: MarkerFile,
    effects: Effects,
    /// Last state a transition was committed to, `None` before the first update
    state: Option<TimerState>,
    /// State rendered for the current tick
    displayed: TimerState,
    last_seen_mtime: Option<DateTime<Utc>>,
    seconds_left: Option<i64>,
    durations: Durations,
    marker_reads: u64,
}

impl Engine {
    pub fn new(config: Config, effects: Effects) -> Self {
        let marker = MarkerFile::new(config.session_file.clone());
        let durations = Durations {
            session: config.session_duration,
            break_: config.break_duration,
        };

        Self {
            config,
            marker,
            effects,
            state: None,
            displayed: TimerState::Idle,
            last_seen_mtime: None,
            seconds_left: None,
            durations,
            marker_reads: 0,
        }
    }

    /// Update, render and play the tick sound as if it were `now`
    pub fn tick_at(&mut self, now: DateTime<Utc>) -> Result<StatusLine, SessionError> {
        self.update_state_at(now)?;
        let line = self.render();
        self.tick_sound();
        Ok(line)
    }

    pub fn update_state(&mut self) -> Result<TimerState, SessionError> {
        self.update_state_at(Utc::now())
    }

    /// Recompute seconds left and the state for this tick.
    ///
    /// Fires transition effects when the transition target differs from the
    /// last committed state. Returns the state to render.
    pub fn update_state_at(&mut self, now: DateTime<Utc>) -> Result<TimerState, SessionError> {
        self.seconds_left = self.read_seconds_left(now)?;

        let break_duration = self.durations.break_;
        self.displayed = TimerState::displayed(self.seconds_left, break_duration);
        let next = TimerState::transition_target(self.seconds_left, break_duration);

        let previous = self.state.unwrap_or(self.displayed);
        if next != previous {
            self.transition(previous, next);
        }
        self.state = Some(next);

        Ok(self.displayed)
    }

    /// Status line for the state computed by the last update
    pub fn render(&self) -> StatusLine {
        render::render(self.displayed, self.seconds_left, self.durations, &self.config)
    }

    /// Play the tick sound if enabled and a session is running
    pub fn tick_sound(&self) {
        if self.config.sound.tick && self.displayed == TimerState::Active {
            self.play(&self.config.sound.tick_file);
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Last committed transition state
    pub fn state(&self) -> TimerState {
        self.state.unwrap_or_default()
    }

    /// State rendered on the last tick
    pub fn displayed_state(&self) -> TimerState {
        self.displayed
    }

    pub fn seconds_left(&self) -> Option<i64> {
        self.seconds_left
    }

    pub fn durations(&self) -> Durations {
        self.durations
    }

    pub fn session_duration(&self) -> i64 {
        self.durations.session
    }

    pub fn break_duration(&self) -> i64 {
        self.durations.break_
    }

    /// How many times the marker file content has been parsed
    pub fn marker_reads(&self) -> u64 {
        self.marker_reads
    }

    fn read_seconds_left(&mut self, now: DateTime<Utc>) -> Result<Option<i64>, SessionError> {
        let Some(start) = self.marker.modified() else {
            return Ok(None);
        };

        if self.last_seen_mtime != Some(start) {
            match self.marker.first_line() {
                Ok(line) => {
                    self.marker_reads += 1;
                    self.start_session(&line)?;
                    self.last_seen_mtime = Some(start);
                }
                Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
                Err(e) => warn!("Cannot read {}: {}", self.marker.path().display(), e),
            }
        }

        Ok(Some(marker_file::seconds_left(now, start, self.durations.session)))
    }

    /// Take the durations for a freshly touched marker file
    fn start_session(&mut self, first_line: &str) -> Result<(), SessionError> {
        let overrides = DurationOverrides::parse(first_line)?;
        self.durations = Durations {
            session: overrides.session.unwrap_or(self.config.session_duration),
            break_: overrides.break_.unwrap_or(self.config.break_duration),
        };
        info!(
            "Marker file changed: session {}s, break {}s",
            self.durations.session, self.durations.break_
        );
        Ok(())
    }

    fn transition(&self, from: TimerState, to: TimerState) {
        info!("State transition: {} -> {}", from, to);

        match (from, to) {
            (TimerState::Active, TimerState::Break) => {
                self.play(&self.config.sound.session_file);
                self.effects.notifier.notify(SESSION_DONE.0, SESSION_DONE.1);
            }
            (TimerState::Break, TimerState::Wait) if self.durations.break_ != 0 => {
                self.play(&self.config.sound.break_file);
                self.effects.notifier.notify(BREAK_DONE.0, BREAK_DONE.1);
            }
            _ => {}
        }

        if from == TimerState::Active && to == TimerState::Break {
            self.run_hook(&self.config.hooks.complete_pomodoro);
        } else if from != TimerState::Active && to == TimerState::Active {
            self.run_hook(&self.config.hooks.start_pomodoro);
        }
    }

    fn play(&self, sound_file: &Path) {
        if self.config.sound.enabled {
            self.effects.sound.play(sound_file);
        }
    }

    fn run_hook(&self, hook: &Path) {
        if !hook.exists() {
            debug!("No hook at {}", hook.display());
            return;
        }
        if let Err(e) = self.effects.hooks.run(hook) {
            error!("{}", e);
        }
    }
}
