//! TOML-based configuration file.
//!
//! Stored at `~/.config/pomobar/config.toml`. Every key is optional; a key
//! that is absent leaves the built-in default in place.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::{paths::expand_home, Config};
use crate::error::ConfigError;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeneralSection {
    pub session: Option<PathBuf>,
    pub autohide: Option<bool>,
    pub one_line: Option<bool>,
    pub json: Option<bool>,
    pub session_minutes: Option<u32>,
    pub break_minutes: Option<u32>,
    pub update_interval: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LabelsSection {
    pub pomodoro_prefix: Option<String>,
    pub pomodoro_suffix: Option<String>,
    pub break_prefix: Option<String>,
    pub break_suffix: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProgressBarSection {
    pub left_to_right: Option<bool>,
    pub total_marks: Option<usize>,
    pub session_character: Option<String>,
    pub break_character: Option<String>,
    pub empty_character: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SoundSection {
    pub enable: Option<bool>,
    pub tick: Option<bool>,
    pub sound_command: Option<String>,
    pub session_file: Option<PathBuf>,
    pub break_file: Option<PathBuf>,
    pub tick_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HooksSection {
    pub start_pomodoro: Option<PathBuf>,
    pub complete_pomodoro: Option<PathBuf>,
}

/// On-disk configuration, one optional value per setting
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub general: GeneralSection,
    #[serde(default)]
    pub labels: LabelsSection,
    #[serde(default)]
    pub progress_bar: ProgressBarSection,
    #[serde(default)]
    pub sound: SoundSection,
    #[serde(default)]
    pub hooks: HooksSection,
}

impl FileConfig {
    pub fn read(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(path, &content)
    }

    pub fn parse(path: &Path, content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Persist to disk, creating the parent directory if needed
    pub fn write(&self, path: &Path) -> Result<(), ConfigError> {
        let to_write_error = |message: String| ConfigError::Write {
            path: path.to_path_buf(),
            message,
        };
        let content = toml::to_string_pretty(self).map_err(|e| to_write_error(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| to_write_error(e.to_string()))?;
        }
        std::fs::write(path, content).map_err(|e| to_write_error(e.to_string()))
    }

    /// Apply every value present in the file on top of `base`
    pub fn overlay(self, base: Config) -> Config {
        let Self { general, labels, progress_bar, sound, hooks } = self;
        let mut config = base;

        if let Some(session) = general.session {
            config.session_file = expand_home(&session);
        }
        config.auto_hide = general.autohide.unwrap_or(config.auto_hide);
        config.one_line = general.one_line.unwrap_or(config.one_line);
        config.json = general.json.unwrap_or(config.json);
        if let Some(minutes) = general.session_minutes {
            config.session_duration = i64::from(minutes) * 60;
        }
        if let Some(minutes) = general.break_minutes {
            config.break_duration = i64::from(minutes) * 60;
        }
        config.update_interval = general.update_interval.unwrap_or(config.update_interval);

        config.labels.pomodoro_prefix = labels.pomodoro_prefix.unwrap_or(config.labels.pomodoro_prefix);
        config.labels.pomodoro_suffix = labels.pomodoro_suffix.unwrap_or(config.labels.pomodoro_suffix);
        config.labels.break_prefix = labels.break_prefix.unwrap_or(config.labels.break_prefix);
        config.labels.break_suffix = labels.break_suffix.unwrap_or(config.labels.break_suffix);

        config.bar.left_to_right = progress_bar.left_to_right.unwrap_or(config.bar.left_to_right);
        config.bar.total_marks = progress_bar.total_marks.unwrap_or(config.bar.total_marks);
        config.bar.session_mark = progress_bar.session_character.unwrap_or(config.bar.session_mark);
        config.bar.break_mark = progress_bar.break_character.unwrap_or(config.bar.break_mark);
        config.bar.empty_mark = progress_bar.empty_character.unwrap_or(config.bar.empty_mark);

        config.sound.enabled = sound.enable.unwrap_or(config.sound.enabled);
        config.sound.tick = sound.tick.unwrap_or(config.sound.tick);
        config.sound.command = sound.sound_command.unwrap_or(config.sound.command);
        if let Some(path) = sound.session_file {
            config.sound.session_file = expand_home(&path);
        }
        if let Some(path) = sound.break_file {
            config.sound.break_file = expand_home(&path);
        }
        if let Some(path) = sound.tick_file {
            config.sound.tick_file = expand_home(&path);
        }

        if let Some(path) = hooks.start_pomodoro {
            config.hooks.start_pomodoro = expand_home(&path);
        }
        if let Some(path) = hooks.complete_pomodoro {
            config.hooks.complete_pomodoro = expand_home(&path);
        }

        config
    }
}

impl From<&Config> for FileConfig {
    fn from(config: &Config) -> Self {
        Self {
            general: GeneralSection {
                session: Some(config.session_file.clone()),
                autohide: Some(config.auto_hide),
                one_line: Some(config.one_line),
                json: Some(config.json),
                session_minutes: None,
                break_minutes: Some((config.break_duration / 60) as u32),
                update_interval: Some(config.update_interval),
            },
            labels: LabelsSection {
                pomodoro_prefix: Some(config.labels.pomodoro_prefix.clone()),
                pomodoro_suffix: Some(config.labels.pomodoro_suffix.clone()),
                break_prefix: Some(config.labels.break_prefix.clone()),
                break_suffix: Some(config.labels.break_suffix.clone()),
            },
            progress_bar: ProgressBarSection {
                left_to_right: Some(config.bar.left_to_right),
                total_marks: Some(config.bar.total_marks),
                session_character: Some(config.bar.session_mark.clone()),
                break_character: Some(config.bar.break_mark.clone()),
                empty_character: Some(config.bar.empty_mark.clone()),
            },
            sound: SoundSection {
                enable: Some(config.sound.enabled),
                tick: Some(config.sound.tick),
                sound_command: Some(config.sound.command.clone()),
                session_file: Some(config.sound.session_file.clone()),
                break_file: Some(config.sound.break_file.clone()),
                tick_file: Some(config.sound.tick_file.clone()),
            },
            hooks: HooksSection {
                start_pomodoro: Some(config.hooks.start_pomodoro.clone()),
                complete_pomodoro: Some(config.hooks.complete_pomodoro.clone()),
            },
        }
    }
}
