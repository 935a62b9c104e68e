//! Configuration handling
//!
//! The engine consumes one immutable [`Config`] snapshot. It is built in
//! three layers, each producing a complete struct: built-in defaults, the
//! TOML config file, then command-line flags.

pub mod cli;
pub mod file;
pub mod paths;

use std::path::PathBuf;
use tracing::{debug, info};

use crate::error::ConfigError;
pub use cli::Cli;
pub use file::FileConfig;
pub use paths::Dirs;

/// Progress bar geometry and characters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarConfig {
    pub total_marks: usize,
    pub session_mark: String,
    pub break_mark: String,
    pub empty_mark: String,
    /// Fill marks as time passes instead of draining them
    pub left_to_right: bool,
}

/// Strings wrapped around the rendered line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    pub pomodoro_prefix: String,
    pub pomodoro_suffix: String,
    pub break_prefix: String,
    pub break_suffix: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoundConfig {
    /// Session-end and break-end sounds
    pub enabled: bool,
    /// Play the tick sound on every active tick
    pub tick: bool,
    pub session_file: PathBuf,
    pub break_file: PathBuf,
    pub tick_file: PathBuf,
    /// Shell command with a single `%s` slot for the sound path
    pub command: String,
}

/// Executables run on session transitions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HookConfig {
    pub start_pomodoro: PathBuf,
    pub complete_pomodoro: PathBuf,
}

/// Fully resolved configuration snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Marker file whose mtime marks the session start
    pub session_file: PathBuf,
    /// Print an empty line instead of the idle marker
    pub auto_hide: bool,
    /// Render a single tick and exit
    pub one_line: bool,
    /// Emit i3bar-style JSON objects instead of plain lines
    pub json: bool,
    /// Work interval in seconds
    pub session_duration: i64,
    /// Break interval in seconds, 0 disables the break
    pub break_duration: i64,
    /// Polling period in seconds
    pub update_interval: u64,
    pub bar: BarConfig,
    pub labels: Labels,
    pub sound: SoundConfig,
    pub hooks: HookConfig,
}

impl Config {
    /// Built-in defaults for the given directory layout
    pub fn defaults(dirs: &Dirs) -> Self {
        Self {
            session_file: dirs.cache_dir.join("pomodoro_session"),
            auto_hide: false,
            one_line: false,
            json: false,
            session_duration: 25 * 60 + 1,
            break_duration: 5 * 60,
            update_interval: 1,
            bar: BarConfig {
                total_marks: 10,
                session_mark: "#".to_string(),
                break_mark: "|".to_string(),
                empty_mark: "·".to_string(),
                left_to_right: false,
            },
            labels: Labels {
                pomodoro_prefix: "P".to_string(),
                pomodoro_suffix: String::new(),
                break_prefix: "B".to_string(),
                break_suffix: String::new(),
            },
            sound: SoundConfig {
                enabled: false,
                tick: false,
                session_file: dirs.data_dir.join("session.wav"),
                break_file: dirs.data_dir.join("break.wav"),
                tick_file: dirs.data_dir.join("tick.wav"),
                command: "aplay -q %s &".to_string(),
            },
            hooks: HookConfig {
                start_pomodoro: dirs.hooks_dir.join("start-pomodoro"),
                complete_pomodoro: dirs.hooks_dir.join("complete-pomodoro"),
            },
        }
    }

    /// Resolve defaults, the config file and the command line into one snapshot.
    ///
    /// Creates missing directories and writes the default config file on
    /// first run.
    pub fn load(cli: Cli) -> Result<Self, ConfigError> {
        let dirs = Dirs::locate();
        dirs.ensure().map_err(|e| ConfigError::Write {
            path: dirs.config_dir.clone(),
            message: e.to_string(),
        })?;

        let defaults = Self::defaults(&dirs);
        let config_file = cli
            .config
            .as_deref()
            .map(paths::expand_home)
            .unwrap_or_else(|| dirs.config_file());

        let file = if config_file.exists() {
            FileConfig::read(&config_file)?
        } else {
            info!("Writing default config to {}", config_file.display());
            let file = FileConfig::from(&defaults);
            file.write(&config_file)?;
            file
        };

        let config = cli.overlay(file.overlay(defaults));
        config.validate()?;
        debug!("Resolved configuration: {:?}", config);
        Ok(config)
    }

    /// Reject settings the engine cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.update_interval == 0 {
            return Err(ConfigError::ZeroInterval);
        }
        if self.sound.command.matches("%s").count() != 1 {
            return Err(ConfigError::SoundCommand(self.sound.command.clone()));
        }
        if self.sound.enabled {
            let mut required = vec![&self.sound.session_file];
            if self.break_duration != 0 {
                required.push(&self.sound.break_file);
            }
            if let Some(missing) = required.into_iter().find(|p| !p.exists()) {
                return Err(ConfigError::MissingSound(missing.clone()));
            }
        }
        if self.sound.enabled && self.sound.tick && !self.sound.tick_file.exists() {
            return Err(ConfigError::MissingSound(self.sound.tick_file.clone()));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults(&Dirs::locate())
    }
}
