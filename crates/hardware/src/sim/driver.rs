//! Simulation driver: owns the design and the waveform recorder side-by-side.
//!
//! A run sequences four phases:
//! 1. **Init:** Forward plusargs, bind the design's signals, open the recorder.
//! 2. **Reset:** Hold `rst_n` low for a fixed number of half-period steps, then release it.
//! 3. **Run:** Step until simulated time reaches the horizon.
//! 4. **Teardown:** Close the recorder; it is closed on error paths too.

use std::time::Instant;

use tracing::{debug, info, trace};

use super::clock::SimClock;
use super::plusargs::PlusArgs;
use crate::common::{HarnessError, Result};
use crate::config::Config;
use crate::design::Design;
use crate::stats::RunSummary;
use crate::trace::{self as waveform, TraceLayout, WaveformRecorder};

/// Driver state machine position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Constructed, not yet started.
    Init,
    /// Reset asserted, counting steps.
    Reset,
    /// Reset released, free-running until the horizon.
    Run,
    /// Closing the recorder.
    Teardown,
    /// Finished; the driver cannot run again.
    Exit,
}

/// Top-level testbench: design + recorder + clock.
#[derive(Debug)]
pub struct Driver<D, R> {
    design: D,
    recorder: R,
    config: Config,
    args: PlusArgs,
    clock: SimClock,
    phase: Phase,
    layout: Option<TraceLayout>,
    sample: Vec<u64>,
    kept: Vec<u64>,
    summary: RunSummary,
}

impl<D: Design, R: WaveformRecorder> Driver<D, R> {
    /// Creates a driver with no plusargs.
    pub fn new(design: D, recorder: R, config: Config) -> Self {
        let clock = SimClock::new(config.clock.half_period());
        Self {
            design,
            recorder,
            config,
            args: PlusArgs::default(),
            clock,
            phase: Phase::Init,
            layout: None,
            sample: Vec::new(),
            kept: Vec::new(),
            summary: RunSummary::default(),
        }
    }

    /// Sets the arguments forwarded to the design during init.
    #[must_use]
    pub fn with_args(mut self, args: PlusArgs) -> Self {
        self.args = args;
        self
    }

    /// Current phase.
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Current clock state.
    pub const fn clock(&self) -> &SimClock {
        &self.clock
    }

    /// The driven design.
    pub const fn design(&self) -> &D {
        &self.design
    }

    /// The waveform recorder.
    pub const fn recorder(&self) -> &R {
        &self.recorder
    }

    /// Trace layout, once bound.
    pub const fn layout(&self) -> Option<&TraceLayout> {
        self.layout.as_ref()
    }

    /// Releases the design and recorder.
    pub fn into_parts(self) -> (D, R) {
        (self.design, self.recorder)
    }

    /// Runs all phases to completion.
    ///
    /// # Returns
    ///
    /// The run summary, or the first error raised. If the recorder was opened it is
    /// closed before returning, whatever the outcome.
    pub fn run(&mut self) -> Result<RunSummary> {
        if self.phase != Phase::Init {
            return Err(HarnessError::Initialization(
                "driver has already been run".to_owned(),
            ));
        }

        let started = Instant::now();
        let result = self
            .initialize()
            .and_then(|()| self.reset_phase())
            .and_then(|()| self.run_phase());
        self.summary.host_time = started.elapsed();

        let closed = self.teardown();
        self.phase = Phase::Exit;
        result?;
        closed?;

        info!(
            samples = self.summary.samples,
            final_time = self.summary.final_time,
            "simulation finished"
        );
        Ok(self.summary.clone())
    }

    fn initialize(&mut self) -> Result<()> {
        self.config.validate()?;
        self.design.command_args(&self.args)?;

        let trace = &self.config.trace;
        if trace.enabled {
            let layout = waveform::bind(&self.design, trace.depth)?;
            self.recorder.open(&trace.path, &layout)?;
            self.summary.trace_path = Some(trace.path.clone());
            self.layout = Some(layout);
        } else {
            debug!("waveform tracing disabled");
        }

        info!(
            design = self.design.name(),
            period = self.config.clock.period,
            reset_cycles = self.config.clock.reset_cycles,
            max_sim_time = self.config.run.max_sim_time,
            "testbench initialized"
        );
        Ok(())
    }

    fn reset_phase(&mut self) -> Result<()> {
        self.phase = Phase::Reset;
        self.design.set_rst_n(false);
        for _ in 0..self.config.clock.reset_cycles {
            self.step(true)?;
        }
        self.design.set_rst_n(true);
        info!(time = self.clock.time(), "reset released");
        Ok(())
    }

    fn run_phase(&mut self) -> Result<()> {
        self.phase = Phase::Run;
        while self.clock.time() < self.config.run.max_sim_time {
            self.step(false)?;
        }
        Ok(())
    }

    /// One half-period: apply the clock, evaluate, record, advance.
    fn step(&mut self, in_reset: bool) -> Result<()> {
        let time = self.clock.time();
        let level = self.clock.level();

        self.design.set_clk(level);
        self.design.eval();

        if let Some(layout) = &self.layout {
            self.sample.clear();
            self.design.sample(&mut self.sample);
            layout.project(&self.sample, &mut self.kept);
            self.recorder.dump(time, &self.kept)?;
            self.summary.samples += 1;
        }
        trace!(time, clk = level, rst_n = !in_reset, "step");

        self.summary.record_step(time, in_reset);
        self.clock.advance();
        self.summary.final_time = self.clock.time();
        Ok(())
    }

    fn teardown(&mut self) -> Result<()> {
        self.phase = Phase::Teardown;
        if self.recorder.is_open() {
            self.recorder.close()?;
        }
        Ok(())
    }
}
