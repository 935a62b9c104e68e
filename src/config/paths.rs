//! Filesystem locations used by pomobar

use std::path::{Path, PathBuf};
use tracing::debug;

const APP_DIR: &str = "pomobar";

/// Directories pomobar reads from and writes to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dirs {
    /// `$XDG_CONFIG_HOME/pomobar`
    pub config_dir: PathBuf,
    /// Hook scripts live here
    pub hooks_dir: PathBuf,
    /// Holds the default marker file
    pub cache_dir: PathBuf,
    /// Default location of the sound files
    pub data_dir: PathBuf,
}

impl Dirs {
    /// Resolve the XDG locations, falling back to the working directory
    pub fn locate() -> Self {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR);
        let cache_dir = dirs::cache_dir().unwrap_or_else(|| PathBuf::from("."));
        let data_dir = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR);

        Self::rooted(config_dir, cache_dir, data_dir)
    }

    /// Build the layout from explicit roots
    pub fn rooted(config_dir: PathBuf, cache_dir: PathBuf, data_dir: PathBuf) -> Self {
        Self {
            hooks_dir: config_dir.join("hooks"),
            config_dir,
            cache_dir,
            data_dir,
        }
    }

    /// Default config file path
    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join("config.toml")
    }

    /// Create any missing directory
    pub fn ensure(&self) -> std::io::Result<()> {
        for dir in [&self.cache_dir, &self.config_dir, &self.hooks_dir] {
            if !dir.exists() {
                debug!("Creating directory {}", dir.display());
                std::fs::create_dir_all(dir)?;
            }
        }
        Ok(())
    }
}

/// Expand a leading `~` to the home directory
pub fn expand_home(path: &Path) -> PathBuf {
    match path.strip_prefix("~") {
        Ok(rest) => match dirs::home_dir() {
            Some(home) => home.join(rest),
            None => path.to_path_buf(),
        },
        Err(_) => path.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rooted_layout_nests_hooks_under_config() {
        let dirs = Dirs::rooted("/c".into(), "/k".into(), "/d".into());
        assert_eq!(dirs.hooks_dir, PathBuf::from("/c/hooks"));
        assert_eq!(dirs.config_file(), PathBuf::from("/c/config.toml"));
    }

    #[test]
    fn expand_home_leaves_absolute_paths_alone() {
        assert_eq!(expand_home(Path::new("/tmp/x")), PathBuf::from("/tmp/x"));
    }

    #[test]
    fn expand_home_replaces_tilde() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_home(Path::new("~/session")), home.join("session"));
        }
    }
}
