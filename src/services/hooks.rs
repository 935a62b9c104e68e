//! User hook scripts run on session start and completion

use std::{
    path::Path,
    process::{Command, Stdio},
};
use tracing::{debug, info};

use crate::error::HookError;

/// Runs a hook executable and waits for it
pub trait HookRunner {
    fn run(&self, hook: &Path) -> Result<(), HookError>;
}

/// Executes the hook with no arguments and blocks until it exits.
///
/// Hook output goes to our stderr so it cannot corrupt the status line.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessHookRunner;

impl HookRunner for ProcessHookRunner {
    fn run(&self, hook: &Path) -> Result<(), HookError> {
        info!("Running hook {}", hook.display());

        let status = Command::new(hook)
            .stdin(Stdio::null())
            .stdout(Stdio::from(std::io::stderr()))
            .status()
            .map_err(|source| HookError::Launch {
                path: hook.to_path_buf(),
                source,
            })?;

        if !status.success() {
            return Err(HookError::Exit {
                path: hook.to_path_buf(),
                code: status.code(),
            });
        }

        debug!("Hook {} finished", hook.display());
        Ok(())
    }
}
