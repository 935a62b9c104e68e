//! CLI argument handling

use clap::Parser;
use std::path::PathBuf;

use super::{paths::expand_home, Config};

/// CLI argument parsing structure
#[derive(Parser, Debug)]
#[command(name = "pomobar")]
#[command(about = "Create a Pomodoro display for a status bar")]
#[command(version)]
pub struct Cli {
    /// Pomodoro duration in minutes (default: 25)
    #[arg(value_name = "POMODORO_DURATION")]
    pub session_duration: Option<u32>,

    /// Break duration in minutes (default: 5)
    #[arg(value_name = "BREAK_DURATION")]
    pub break_duration: Option<u32>,

    /// Read the positional durations as seconds instead of minutes
    #[arg(short, long)]
    pub seconds: bool,

    /// Pomodoro session file (default: ~/.cache/pomodoro_session)
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Config file (default: ~/.config/pomobar/config.toml)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// No break and no break sound
    #[arg(short, long)]
    pub no_break: bool,

    /// Hide output when the session file is removed
    #[arg(short, long)]
    pub auto_hide: bool,

    /// Update interval in seconds (default: 1)
    #[arg(short, long, value_name = "SECONDS")]
    pub interval: Option<u64>,

    /// Bar length in characters (default: 10)
    #[arg(short, long, value_name = "CHARACTERS")]
    pub length: Option<usize>,

    /// Pomodoro full mark characters (default: #)
    #[arg(short, long, value_name = "CHARACTER")]
    pub pomodoro: Option<String>,

    /// Break full mark characters (default: |)
    #[arg(short, long = "break", value_name = "CHARACTER")]
    pub break_mark: Option<String>,

    /// Empty mark characters (default: ·)
    #[arg(short, long, value_name = "CHARACTER")]
    pub empty: Option<String>,

    /// Pomodoro end sound file
    #[arg(long, value_name = "PATH")]
    pub pomodoro_sound: Option<PathBuf>,

    /// Break end sound file
    #[arg(long, value_name = "PATH")]
    pub break_sound: Option<PathBuf>,

    /// Ticking sound file
    #[arg(long, value_name = "PATH")]
    pub tick_sound: Option<PathBuf>,

    /// Play no sounds at all
    #[arg(long)]
    pub silent: bool,

    /// Play the tick sound at every interval
    #[arg(short, long)]
    pub tick: bool,

    /// Command used to play a sound, %s is replaced with the file name
    #[arg(long, value_name = "COMMAND")]
    pub sound_command: Option<String>,

    /// Fill markers from left to right instead of draining them
    #[arg(long)]
    pub left_to_right: bool,

    /// String to display before the timer during a pomodoro
    #[arg(long, value_name = "PREFIX", allow_hyphen_values = true)]
    pub pomodoro_prefix: Option<String>,

    /// String to display after the timer during a pomodoro
    #[arg(long, value_name = "SUFFIX", allow_hyphen_values = true)]
    pub pomodoro_suffix: Option<String>,

    /// String to display before the timer during a break
    #[arg(long, value_name = "PREFIX", allow_hyphen_values = true)]
    pub break_prefix: Option<String>,

    /// String to display after the timer during a break
    #[arg(long, value_name = "SUFFIX", allow_hyphen_values = true)]
    pub break_suffix: Option<String>,

    /// Print one line of output and quit
    #[arg(short, long)]
    pub one_line: bool,

    /// Emit i3bar JSON objects with a color hint
    #[arg(short, long)]
    pub json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }

    /// Apply every flag that was given on top of `base`
    pub fn overlay(self, base: Config) -> Config {
        let mut config = base;
        let scale = if self.seconds { 1 } else { 60 };

        if let Some(duration) = self.session_duration.filter(|d| *d > 0) {
            config.session_duration = i64::from(duration) * scale;
        }
        if let Some(duration) = self.break_duration.filter(|d| *d > 0) {
            config.break_duration = i64::from(duration) * scale;
        }
        if let Some(path) = self.file {
            config.session_file = expand_home(&path);
        }
        if self.no_break {
            config.break_duration = 0;
        }
        config.auto_hide |= self.auto_hide;
        if let Some(interval) = self.interval {
            config.update_interval = interval;
        }
        if let Some(length) = self.length {
            config.bar.total_marks = length;
        }
        if let Some(mark) = self.pomodoro {
            config.bar.session_mark = mark;
        }
        if let Some(mark) = self.break_mark {
            config.bar.break_mark = mark;
        }
        if let Some(mark) = self.empty {
            config.bar.empty_mark = mark;
        }
        if let Some(path) = self.pomodoro_sound {
            config.sound.session_file = expand_home(&path);
        }
        if let Some(path) = self.break_sound {
            config.sound.break_file = expand_home(&path);
        }
        if let Some(path) = self.tick_sound {
            config.sound.tick_file = expand_home(&path);
        }
        if self.silent {
            config.sound.enabled = false;
            config.sound.tick = false;
        }
        if self.tick {
            config.sound.tick = true;
        }
        if let Some(command) = self.sound_command {
            config.sound.command = command;
        }
        config.bar.left_to_right |= self.left_to_right;
        if let Some(prefix) = self.pomodoro_prefix {
            config.labels.pomodoro_prefix = prefix;
        }
        if let Some(suffix) = self.pomodoro_suffix {
            config.labels.pomodoro_suffix = suffix;
        }
        if let Some(prefix) = self.break_prefix {
            config.labels.break_prefix = prefix;
        }
        if let Some(suffix) = self.break_suffix {
            config.labels.break_suffix = suffix;
        }
        config.one_line |= self.one_line;
        config.json |= self.json;

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Dirs;

    fn defaults() -> Config {
        Config::defaults(&Dirs::rooted("/cfg".into(), "/cache".into(), "/data".into()))
    }

    fn overlay(args: &[&str]) -> Config {
        let cli = Cli::try_parse_from(std::iter::once("pomobar").chain(args.iter().copied())).unwrap();
        cli.overlay(defaults())
    }

    #[test]
    fn no_flags_keep_lower_layers() {
        assert_eq!(overlay(&[]), defaults());
    }

    #[test]
    fn positional_durations_are_minutes() {
        let config = overlay(&["50", "10"]);
        assert_eq!(config.session_duration, 3000);
        assert_eq!(config.break_duration, 600);
    }

    #[test]
    fn seconds_flag_changes_unit() {
        let config = overlay(&["-s", "90", "30"]);
        assert_eq!(config.session_duration, 90);
        assert_eq!(config.break_duration, 30);
    }

    #[test]
    fn no_break_zeroes_break_duration() {
        assert_eq!(overlay(&["25", "5", "--no-break"]).break_duration, 0);
    }

    #[test]
    fn bar_and_label_flags() {
        let config = overlay(&[
            "-l", "4", "-p", "*", "--break", "~", "-e", ".", "--left-to-right",
            "--pomodoro-prefix", "W", "--break-suffix", "]",
        ]);
        assert_eq!(config.bar.total_marks, 4);
        assert_eq!(config.bar.session_mark, "*");
        assert_eq!(config.bar.break_mark, "~");
        assert_eq!(config.bar.empty_mark, ".");
        assert!(config.bar.left_to_right);
        assert_eq!(config.labels.pomodoro_prefix, "W");
        assert_eq!(config.labels.break_suffix, "]");
    }

    #[test]
    fn silent_disables_all_sounds() {
        let mut base = defaults();
        base.sound.enabled = true;
        let cli = Cli::try_parse_from(["pomobar", "--silent", "--tick"]).unwrap();
        let config = cli.overlay(base);
        assert!(!config.sound.enabled);
        assert!(config.sound.tick);
    }

    #[test]
    fn log_level_follows_verbose() {
        assert_eq!(Cli::try_parse_from(["pomobar"]).unwrap().log_level(), "info");
        assert_eq!(Cli::try_parse_from(["pomobar", "-v"]).unwrap().log_level(), "debug");
    }

    #[test]
    fn mode_flags() {
        let config = overlay(&["-o", "-j", "-a", "-i", "5"]);
        assert!(config.one_line);
        assert!(config.json);
        assert!(config.auto_hide);
        assert_eq!(config.update_interval, 5);
    }
}
