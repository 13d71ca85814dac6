//! Common types shared by every part of the harness.
//!
//! This module currently holds the error taxonomy and the crate-wide `Result` alias.

/// Error types for initialization, waveform I/O, and argument parsing.
pub mod error;

pub use error::{HarnessError, Result};
