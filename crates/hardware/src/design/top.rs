//! Reference top-level design: a free-running 8-bit counter.
//!
//! Hierarchy:
//!
//! ```text
//! top            clk_i, rst_ni, count_o[8], tick_o
//! └─ u_counter   count_q[8], wrap_q
//! ```
//!
//! On every rising edge of `clk_i` the counter loads its reset value while `rst_ni`
//! is low, and otherwise increments with wrap-around. `tick_o` is high for the cycle
//! after the counter wraps to zero. The reset value is taken from `+reset_value=<n>`.

use super::Design;
use crate::common::Result;
use crate::sim::PlusArgs;
use crate::trace::TraceSink;

/// Registered state of the `u_counter` instance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Counter {
    count_q: u8,
    wrap_q: bool,
}

impl Counter {
    const fn posedge(&mut self, rst_n: bool, reset_value: u8) {
        if rst_n {
            self.count_q = self.count_q.wrapping_add(1);
            self.wrap_q = self.count_q == 0;
        } else {
            self.count_q = reset_value;
            self.wrap_q = false;
        }
    }
}

/// The `top` module.
#[derive(Debug, Clone, Default)]
pub struct Top {
    clk_i: bool,
    rst_ni: bool,
    prev_clk: bool,
    reset_value: u8,
    evals: u64,
    u_counter: Counter,
}

impl Top {
    /// Creates the design with all inputs and registers low.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of the `count_o` output.
    pub const fn count(&self) -> u8 {
        self.u_counter.count_q
    }

    /// Current value of the `tick_o` output.
    pub const fn tick(&self) -> bool {
        self.u_counter.wrap_q
    }

    /// Value loaded into the counter while reset is held.
    pub const fn reset_value(&self) -> u8 {
        self.reset_value
    }

    /// Number of `eval` calls so far.
    pub const fn evals(&self) -> u64 {
        self.evals
    }
}

impl Design for Top {
    fn name(&self) -> &str {
        "top"
    }

    fn set_clk(&mut self, level: bool) {
        self.clk_i = level;
    }

    fn set_rst_n(&mut self, level: bool) {
        self.rst_ni = level;
    }

    fn eval(&mut self) {
        self.evals += 1;
        if self.clk_i && !self.prev_clk {
            self.u_counter.posedge(self.rst_ni, self.reset_value);
        }
        self.prev_clk = self.clk_i;
    }

    fn trace(&self, sink: &mut dyn TraceSink) {
        sink.push_scope("top");
        sink.declare("clk_i", 1);
        sink.declare("rst_ni", 1);
        sink.declare("count_o", 8);
        sink.declare("tick_o", 1);
        sink.push_scope("u_counter");
        sink.declare("count_q", 8);
        sink.declare("wrap_q", 1);
        sink.pop_scope();
        sink.pop_scope();
    }

    fn sample(&self, values: &mut Vec<u64>) {
        values.extend([
            u64::from(self.clk_i),
            u64::from(self.rst_ni),
            u64::from(self.u_counter.count_q),
            u64::from(self.u_counter.wrap_q),
            u64::from(self.u_counter.count_q),
            u64::from(self.u_counter.wrap_q),
        ]);
    }

    fn command_args(&mut self, args: &PlusArgs) -> Result<()> {
        if let Some(value) = args.value_as::<u8>("reset_value")? {
            self.reset_value = value;
        }
        Ok(())
    }
}
