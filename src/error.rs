//! Error types for pomobar.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type returned by the library.
#[derive(Error, Debug)]
pub enum PomobarError {
    /// Configuration could not be resolved
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The marker file carried something we refuse to run with
    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while building the configuration snapshot.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to write default config to {}: {message}", .path.display())]
    Write { path: PathBuf, message: String },

    #[error("Sound file not found: {} (use --silent to disable sounds)", .0.display())]
    MissingSound(PathBuf),

    #[error("Sound command must contain exactly one '%s' slot: {0:?}")]
    SoundCommand(String),

    #[error("Update interval must be at least one second")]
    ZeroInterval,
}

/// Errors raised while reading duration overrides from the marker file.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SessionError {
    #[error("Invalid {field} duration: {token:?}. Try deleting your session file.")]
    InvalidDuration { field: DurationField, token: String },
}

/// Which duration an override token applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DurationField {
    Session,
    Break,
}

impl std::fmt::Display for DurationField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DurationField::Session => write!(f, "session"),
            DurationField::Break => write!(f, "break"),
        }
    }
}

pub type Result<T> = std::result::Result<T, PomobarError>;

/// A hook script that did not complete successfully.
#[derive(Error, Debug)]
pub enum HookError {
    #[error("Failed to launch hook {}: {source}", .path.display())]
    Launch {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Hook {} exited with {}", .path.display(), exit_description(.code))]
    Exit { path: PathBuf, code: Option<i32> },
}

fn exit_description(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {code}"),
        None => "a signal".to_string(),
    }
}
