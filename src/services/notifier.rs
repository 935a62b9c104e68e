//! Desktop notifications

use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

/// Best-effort two-line desktop notification
pub trait Notifier {
    fn notify(&self, summary: &str, body: &str);
}

/// Shells out to `notify-send`. A missing binary is silently ignored.
#[derive(Debug, Clone)]
pub struct NotifySend {
    program: String,
    app_name: String,
}

impl NotifySend {
    pub fn new(app_name: impl Into<String>) -> Self {
        Self {
            program: "notify-send".to_string(),
            app_name: app_name.into(),
        }
    }

    /// Use another `notify-send`-compatible executable
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }
}

impl Default for NotifySend {
    fn default() -> Self {
        Self::new(env!("CARGO_PKG_NAME"))
    }
}

impl Notifier for NotifySend {
    fn notify(&self, summary: &str, body: &str) {
        let spawned = Command::new(&self.program)
            .args(["--app-name", &self.app_name, summary, body])
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();

        if let Err(e) = spawned {
            debug!("{} unavailable: {}", self.program, e);
        }
    }
}

/// Sends nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct Quiet;

impl Notifier for Quiet {
    fn notify(&self, _summary: &str, _body: &str) {}
}
