//! Background tasks module
//!
//! This module contains the polling loop that drives the engine.

pub mod ticker;

// Re-export main functions
pub use ticker::{run, run_once};
