//! Configuration system for the testbench harness.
//!
//! This module defines the configuration structures used to parameterize a run. It provides:
//! 1. **Defaults:** The classic testbench literals (10-unit clock, 5 reset steps, 1000-unit horizon).
//! 2. **Structures:** Hierarchical config for the clock, the run horizon, and waveform tracing.
//! 3. **Validation:** Rejects settings that would stall simulated time.
//!
//! Configuration is supplied via JSON or use `Config::default()` for the CLI.

use std::path::PathBuf;

use serde::Deserialize;

use crate::common::{HarnessError, Result};

/// Default configuration constants for the harness.
mod defaults {
    /// Full clock period in simulation time units.
    ///
    /// Each half-period step advances time by `CLOCK_PERIOD / 2`.
    pub const CLOCK_PERIOD: u64 = 10;

    /// Number of half-period steps during which `rst_n` is held low.
    pub const RESET_CYCLES: u32 = 5;

    /// Simulation horizon; the run phase stops once time reaches it.
    pub const MAX_SIM_TIME: u64 = 1000;

    /// Waveform destination, relative to the working directory.
    pub const TRACE_PATH: &str = "waveform.vcd";

    /// Hierarchy levels captured by the recorder (99 = everything).
    pub const TRACE_DEPTH: u32 = 99;
}

/// Root configuration structure containing all harness settings.
///
/// # Examples
///
/// Creating a default configuration:
///
/// ```
/// use tbsim_core::config::Config;
///
/// let config = Config::default();
/// assert_eq!(config.clock.period, 10);
/// assert_eq!(config.clock.reset_cycles, 5);
/// assert_eq!(config.run.max_sim_time, 1000);
/// ```
///
/// Deserializing from JSON; omitted fields keep their defaults:
///
/// ```
/// use tbsim_core::config::Config;
///
/// let config = Config::from_json(r#"{ "run": { "max_sim_time": 200 } }"#).unwrap();
/// assert_eq!(config.run.max_sim_time, 200);
/// assert_eq!(config.clock.period, 10);
/// assert_eq!(config.trace.path.to_str(), Some("waveform.vcd"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Clock period and reset hold.
    pub clock: ClockConfig,
    /// Simulation horizon.
    pub run: RunConfig,
    /// Waveform tracing.
    pub trace: TraceConfig,
}

impl Config {
    /// Parses a configuration from a JSON document.
    ///
    /// # Arguments
    ///
    /// * `json` - JSON text; every section and field is optional.
    ///
    /// # Returns
    ///
    /// The parsed configuration, or `HarnessError::Config` if the document is malformed.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Checks that the configuration can drive a terminating run.
    ///
    /// A period below 2 gives a zero half-period, so time would never reach the horizon.
    pub fn validate(&self) -> Result<()> {
        if self.clock.half_period() == 0 {
            return Err(HarnessError::Initialization(format!(
                "clock period {} is too short; it must be at least 2 time units",
                self.clock.period
            )));
        }
        if self.trace.enabled && self.trace.path.as_os_str().is_empty() {
            return Err(HarnessError::Initialization(
                "tracing is enabled but no waveform path is set".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Clock generation settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ClockConfig {
    /// Full clock period in time units. Odd periods round the half-period down.
    #[serde(default = "ClockConfig::default_period")]
    pub period: u64,

    /// Half-period steps spent with reset asserted.
    #[serde(default = "ClockConfig::default_reset_cycles")]
    pub reset_cycles: u32,
}

impl ClockConfig {
    fn default_period() -> u64 {
        defaults::CLOCK_PERIOD
    }

    fn default_reset_cycles() -> u32 {
        defaults::RESET_CYCLES
    }

    /// Time advanced by one half-period step.
    pub const fn half_period(&self) -> u64 {
        self.period / 2
    }
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            period: defaults::CLOCK_PERIOD,
            reset_cycles: defaults::RESET_CYCLES,
        }
    }
}

/// Run-length settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RunConfig {
    /// The run phase continues while simulated time is below this value.
    #[serde(default = "RunConfig::default_max_sim_time")]
    pub max_sim_time: u64,
}

impl RunConfig {
    fn default_max_sim_time() -> u64 {
        defaults::MAX_SIM_TIME
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            max_sim_time: defaults::MAX_SIM_TIME,
        }
    }
}

/// Waveform tracing settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TraceConfig {
    /// Enable waveform capture. When false no trace file is created.
    #[serde(default = "TraceConfig::default_enabled")]
    pub enabled: bool,

    /// Trace file destination.
    #[serde(default = "TraceConfig::default_path")]
    pub path: PathBuf,

    /// Number of hierarchy levels captured; top-level ports are level 1.
    #[serde(default = "TraceConfig::default_depth")]
    pub depth: u32,
}

impl TraceConfig {
    fn default_enabled() -> bool {
        true
    }

    fn default_path() -> PathBuf {
        PathBuf::from(defaults::TRACE_PATH)
    }

    fn default_depth() -> u32 {
        defaults::TRACE_DEPTH
    }
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: Self::default_path(),
            depth: defaults::TRACE_DEPTH,
        }
    }
}
