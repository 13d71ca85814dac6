//! Simulated design interface and the bundled reference design.
//!
//! This module defines the contract between the harness and a cycle-based model. It provides:
//! 1. **Inputs:** Single-bit clock and active-low reset levels written by the driver.
//! 2. **Evaluation:** `eval` propagates the current inputs through the model.
//! 3. **Introspection:** Signal declaration (`trace`) and value sampling (`sample`) for waveforms.
//! 4. **Configuration:** Optional plusarg handling for model-specific options.

use crate::common::Result;
use crate::sim::PlusArgs;
use crate::trace::TraceSink;

/// Reference counter design used by the `tb_top` binary.
pub mod top;

pub use top::Top;

/// A simulated design driven by the testbench.
///
/// The driver owns the design for the whole run and is the only writer of its inputs.
pub trait Design {
    /// Name of the top-level module (e.g., `"top"`).
    fn name(&self) -> &str;

    /// Drives the clock input.
    fn set_clk(&mut self, level: bool);

    /// Drives the active-low reset input; `false` holds the design in reset.
    fn set_rst_n(&mut self, level: bool);

    /// Propagates the current inputs to internal state and outputs.
    fn eval(&mut self);

    /// Declares every traceable signal, top scope first, in sampling order.
    fn trace(&self, sink: &mut dyn TraceSink);

    /// Appends the current value of every declared signal to `values`.
    fn sample(&self, values: &mut Vec<u64>);

    /// Applies model options from the process arguments. Default: ignores them.
    fn command_args(&mut self, _args: &PlusArgs) -> Result<()> {
        Ok(())
    }
}

impl<D: Design + ?Sized> Design for Box<D> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn set_clk(&mut self, level: bool) {
        (**self).set_clk(level);
    }

    fn set_rst_n(&mut self, level: bool) {
        (**self).set_rst_n(level);
    }

    fn eval(&mut self) {
        (**self).eval();
    }

    fn trace(&self, sink: &mut dyn TraceSink) {
        (**self).trace(sink);
    }

    fn sample(&self, values: &mut Vec<u64>) {
        (**self).sample(values);
    }

    fn command_args(&mut self, args: &PlusArgs) -> Result<()> {
        (**self).command_args(args)
    }
}
