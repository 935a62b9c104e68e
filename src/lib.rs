//! Pomobar - a pomodoro countdown for status bars
//!
//! The timer is driven by a marker file: touching it starts a session, its
//! modification time is the session start, and its first line may override
//! the session and break lengths. Every tick the engine renders one line of
//! text with a progress bar and a clock, and fires notifications, sounds and
//! hooks when the session or break ends.

pub mod config;
pub mod error;
pub mod render;
pub mod services;
pub mod state;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use config::{Cli, Config};
pub use error::{PomobarError, SessionError};
pub use render::StatusLine;
pub use services::Effects;
pub use state::{Engine, TimerState};
pub use utils::signals::shutdown_signal;
