//! External collaborators of the engine
//!
//! The marker file is the only input. Sounds, notifications and hooks are
//! capabilities behind traits so the engine can run against fakes.

pub mod hooks;
pub mod marker_file;
pub mod notifier;
pub mod sound;

pub use hooks::{HookRunner, ProcessHookRunner};
pub use marker_file::{DurationOverrides, MarkerFile};
pub use notifier::{Notifier, NotifySend, Quiet};
pub use sound::{ShellSoundPlayer, Silent, SoundPlayer};

use crate::config::Config;

/// Side-effect capabilities handed to the engine
pub struct Effects {
    pub sound: Box<dyn SoundPlayer>,
    pub notifier: Box<dyn Notifier>,
    pub hooks: Box<dyn HookRunner>,
}

impl Effects {
    /// Real processes: the configured sound command, `notify-send`, hook executables
    pub fn system(config: &Config) -> Self {
        Self {
            sound: Box::new(ShellSoundPlayer::new(config.sound.command.clone())),
            notifier: Box::new(NotifySend::default()),
            hooks: Box::new(ProcessHookRunner),
        }
    }

    /// No sounds, no notifications; hooks still run
    pub fn quiet() -> Self {
        Self {
            sound: Box::new(Silent),
            notifier: Box::new(Quiet),
            hooks: Box::new(ProcessHookRunner),
        }
    }
}

impl std::fmt::Debug for Effects {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Effects").finish_non_exhaustive()
    }
}
