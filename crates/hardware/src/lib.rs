//! Clock-driving testbench harness library.
//!
//! This crate drives a cycle-based hardware model through reset and free-run with the following:
//! 1. **Design:** The `Design` trait a model implements, plus a small reference `Top` counter.
//! 2. **Simulation:** A two-phase clock and the `Driver` that sequences init, reset, run, and teardown.
//! 3. **Tracing:** Signal binding at a detail level and waveform recorders (VCD and in-memory).
//! 4. **Configuration:** Clock period, reset hold, horizon, and trace settings with classic defaults.
//! 5. **Statistics:** A run summary of steps, samples, and simulated time.

/// Common types (errors and the crate-wide `Result`).
pub mod common;
/// Harness configuration (defaults, hierarchical config structures).
pub mod config;
/// Simulated design trait and reference design.
pub mod design;
/// Clock, plusargs, and simulation driver.
pub mod sim;
/// Run statistics collection and reporting.
pub mod stats;
/// Signal binding and waveform recorders.
pub mod trace;

/// Error type for every fallible harness operation.
pub use crate::common::{HarnessError, Result};
/// Root configuration type; use `Config::default()` or `Config::from_json`.
pub use crate::config::Config;
/// Contract implemented by simulated designs.
pub use crate::design::Design;
/// Phase-sequencing driver; construct with `Driver::new` and call `run`.
pub use crate::sim::Driver;
/// Summary returned by `Driver::run`.
pub use crate::stats::RunSummary;
/// Contract implemented by waveform recorders.
pub use crate::trace::WaveformRecorder;
