//! Timer state machine
//!
//! This module contains the timer states, the rules that classify a tick,
//! and the engine that owns the runtime state.

pub mod engine;
pub mod timer_state;

// Re-export main types
pub use engine::Engine;
pub use timer_state::{Durations, TimerState};
