//! One rendered status line

use serde::{Deserialize, Serialize};
use std::io::{self, Write};

/// Output of a single tick, in the shape i3bar blocks expect
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusLine {
    pub full_text: String,
    pub color: String,
}

impl StatusLine {
    pub fn new(full_text: String, color: String) -> Self {
        Self { full_text, color }
    }

    /// Write the line (plain text or a JSON object) and flush
    pub fn emit<W: Write>(&self, out: &mut W, json: bool) -> io::Result<()> {
        if json {
            serde_json::to_writer(&mut *out, self).map_err(io::Error::from)?;
            writeln!(out)?;
        } else {
            writeln!(out, "{}", self.full_text)?;
        }
        out.flush()
    }
}
