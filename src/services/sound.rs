//! Sound playback through a configurable shell command

use std::{path::Path, process::Stdio};
use tokio::process::Command;
use tracing::{debug, warn};

/// Something that can play a sound file without blocking the tick
pub trait SoundPlayer {
    fn play(&self, sound_file: &Path);
}

/// Runs a shell command template such as `aplay -q %s &`.
///
/// The child is spawned detached with its output discarded; the Tokio
/// runtime reaps it. Must be called from within a Tokio runtime.
#[derive(Debug, Clone)]
pub struct ShellSoundPlayer {
    command: String,
}

impl ShellSoundPlayer {
    pub fn new(command: impl Into<String>) -> Self {
        Self { command: command.into() }
    }

    /// Command line with the sound path substituted into the `%s` slot
    pub fn command_for(&self, sound_file: &Path) -> String {
        self.command.replacen("%s", &sound_file.to_string_lossy(), 1)
    }
}

impl SoundPlayer for ShellSoundPlayer {
    fn play(&self, sound_file: &Path) {
        let command_line = self.command_for(sound_file);
        debug!("Playing sound: {}", command_line);

        let spawned = Command::new("sh")
            .args(["-c", &command_line])
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();

        if let Err(e) = spawned {
            warn!("Failed to launch sound player '{}': {}", command_line, e);
        }
    }
}

/// Plays nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl SoundPlayer for Silent {
    fn play(&self, _sound_file: &Path) {}
}
