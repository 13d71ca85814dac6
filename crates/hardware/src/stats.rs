//! Run statistics collection and reporting.
//!
//! This module tracks what a testbench run did. It provides:
//! 1. **Step counts:** Half-period steps spent in reset and in free-run.
//! 2. **Trace counts:** Waveform samples recorded and their time range.
//! 3. **Timing:** Final simulation time and host wall-clock time.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

/// Summary of one completed run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Half-period steps performed with reset asserted.
    pub reset_steps: u64,
    /// Half-period steps performed after reset was released.
    pub run_steps: u64,
    /// Waveform samples handed to the recorder.
    pub samples: u64,
    /// Timestamp of the first step, if any step ran.
    pub first_time: Option<u64>,
    /// Timestamp of the last step, if any step ran.
    pub last_time: Option<u64>,
    /// Simulation time after the last step.
    pub final_time: u64,
    /// Trace destination, when tracing was enabled.
    pub trace_path: Option<PathBuf>,
    /// Host wall-clock time spent in the reset and run phases.
    pub host_time: Duration,
}

impl RunSummary {
    /// Total half-period steps across both phases.
    pub const fn steps(&self) -> u64 {
        self.reset_steps + self.run_steps
    }

    pub(crate) fn record_step(&mut self, time: u64, in_reset: bool) {
        if in_reset {
            self.reset_steps += 1;
        } else {
            self.run_steps += 1;
        }
        if self.first_time.is_none() {
            self.first_time = Some(time);
        }
        self.last_time = Some(time);
    }

    /// Prints the summary to stdout.
    pub fn print(&self) {
        println!("{self}");
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let range = match (self.first_time, self.last_time) {
            (Some(first), Some(last)) => format!("{first}..={last}"),
            _ => "-".to_owned(),
        };
        writeln!(f, "==========================================================")?;
        writeln!(f, "TESTBENCH RUN SUMMARY")?;
        writeln!(f, "==========================================================")?;
        writeln!(f, "host_seconds             {:.4} s", self.host_time.as_secs_f64())?;
        writeln!(f, "sim_time                 {}", self.final_time)?;
        writeln!(f, "steps.reset              {}", self.reset_steps)?;
        writeln!(f, "steps.run                {}", self.run_steps)?;
        writeln!(f, "trace.samples            {}", self.samples)?;
        writeln!(f, "trace.range              {range}")?;
        match &self.trace_path {
            Some(path) => write!(f, "trace.file               {}", path.display()),
            None => write!(f, "trace.file               (disabled)"),
        }
    }
}
