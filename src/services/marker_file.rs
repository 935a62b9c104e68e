//! Marker file access and duration overrides
//!
//! The marker file is written by someone else (usually `touch`). Its mtime
//! is the session start; its first line may hold `<minutes> <break minutes>`.

use chrono::{DateTime, Utc};
use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::{Path, PathBuf},
};
use tracing::debug;

use crate::error::{DurationField, SessionError};

/// Read-only handle on the marker file
#[derive(Debug, Clone)]
pub struct MarkerFile {
    path: PathBuf,
}

impl MarkerFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Last modification time, `None` when the file does not exist.
    ///
    /// A file deleted between the existence check and the stat counts as
    /// absent.
    pub fn modified(&self) -> Option<DateTime<Utc>> {
        match std::fs::metadata(&self.path).and_then(|meta| meta.modified()) {
            Ok(mtime) => Some(DateTime::<Utc>::from(mtime)),
            Err(e) => {
                if e.kind() != io::ErrorKind::NotFound {
                    debug!("Cannot stat {}: {}", self.path.display(), e);
                }
                None
            }
        }
    }

    /// First line of the file, read in one go
    pub fn first_line(&self) -> io::Result<String> {
        let mut line = String::new();
        BufReader::new(File::open(&self.path)?).read_line(&mut line)?;
        Ok(line)
    }
}

/// Duration overrides carried by the marker file, in seconds
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DurationOverrides {
    pub session: Option<i64>,
    pub break_: Option<i64>,
}

impl DurationOverrides {
    /// Parse `"<minutes> <break minutes>"`, both tokens optional.
    ///
    /// Tokens must be plain digits; anything else is an error naming the
    /// offending token. Tokens past the second are ignored.
    pub fn parse(line: &str) -> Result<Self, SessionError> {
        let mut tokens = line.split_whitespace();
        Ok(Self {
            session: tokens
                .next()
                .map(|t| minutes_token(t, DurationField::Session))
                .transpose()?,
            break_: tokens
                .next()
                .map(|t| minutes_token(t, DurationField::Break))
                .transpose()?,
        })
    }
}

fn minutes_token(token: &str, field: DurationField) -> Result<i64, SessionError> {
    let invalid = || SessionError::InvalidDuration {
        field,
        token: token.to_string(),
    };
    if !token.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }
    token
        .parse::<i64>()
        .ok()
        .and_then(|minutes| minutes.checked_mul(60))
        .ok_or_else(invalid)
}

/// Seconds remaining in a session of `session_duration` seconds started at `start`
pub fn seconds_left(now: DateTime<Utc>, start: DateTime<Utc>, session_duration: i64) -> i64 {
    session_duration.saturating_sub((now - start).num_seconds())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use std::io::Write;

    #[test]
    fn empty_line_overrides_nothing() {
        assert_eq!(DurationOverrides::parse("").unwrap(), DurationOverrides::default());
        assert_eq!(DurationOverrides::parse("  \n").unwrap(), DurationOverrides::default());
    }

    #[test]
    fn tokens_are_minutes() {
        let overrides = DurationOverrides::parse("30 10\n").unwrap();
        assert_eq!(overrides.session, Some(1800));
        assert_eq!(overrides.break_, Some(600));

        let overrides = DurationOverrides::parse("45").unwrap();
        assert_eq!(overrides.session, Some(2700));
        assert_eq!(overrides.break_, None);
    }

    #[test]
    fn extra_tokens_are_ignored() {
        let overrides = DurationOverrides::parse("1 2 three").unwrap();
        assert_eq!(overrides.session, Some(60));
        assert_eq!(overrides.break_, Some(120));
    }

    #[test]
    fn non_numeric_token_names_field_and_token() {
        assert_eq!(
            DurationOverrides::parse("abc 5").unwrap_err(),
            SessionError::InvalidDuration {
                field: DurationField::Session,
                token: "abc".to_string(),
            }
        );
        assert_eq!(
            DurationOverrides::parse("25 -5").unwrap_err(),
            SessionError::InvalidDuration {
                field: DurationField::Break,
                token: "-5".to_string(),
            }
        );
    }

    #[test]
    fn error_message_mentions_token() {
        let err = DurationOverrides::parse("abc").unwrap_err();
        assert!(err.to_string().contains("\"abc\""));
        assert!(err.to_string().contains("session"));
    }

    #[test]
    fn seconds_left_counts_down_and_goes_negative() {
        let start = Utc::now();
        assert_eq!(seconds_left(start, start, 1500), 1500);
        assert_eq!(seconds_left(start + Duration::seconds(100), start, 1500), 1400);
        assert_eq!(seconds_left(start + Duration::seconds(1600), start, 1500), -100);
    }

    #[test]
    fn missing_file_has_no_mtime() {
        let dir = tempfile::tempdir().unwrap();
        let marker = MarkerFile::new(dir.path().join("absent"));
        assert!(marker.modified().is_none());
        assert!(marker.first_line().is_err());
    }

    #[test]
    fn reads_only_the_first_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session");
        let mut file = File::create(&path).unwrap();
        writeln!(file, "50 10").unwrap();
        writeln!(file, "ignored").unwrap();

        let marker = MarkerFile::new(&path);
        assert!(marker.modified().is_some());
        assert_eq!(marker.first_line().unwrap(), "50 10\n");
    }

    #[test]
    fn seconds_left_saturates_for_future_marker() {
        let now = Utc::now();
        let start = now + Duration::days(1);
        assert_eq!(seconds_left(now, start, i64::MAX), i64::MAX);
        assert_eq!(seconds_left(now, start, 60), 60 + 86_400);
    }
}
