use tbsim_core::common::{HarnessError, Result};
use tbsim_core::design::Design;
use tbsim_core::sim::PlusArgs;
use tbsim_core::trace::TraceSink;

/// Inputs seen by one `eval` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvalRecord {
    pub clk: bool,
    pub rst_n: bool,
}

/// Design that records the inputs of every evaluation.
///
/// Declares `probe.clk`, `probe.rst_n`, and `probe.inner.evals[16]`, sampled in that order.
#[derive(Debug, Default)]
pub struct ProbeDesign {
    pub clk: bool,
    pub rst_n: bool,
    pub evals: Vec<EvalRecord>,
    pub args: Option<PlusArgs>,
    /// Declare one more signal than `sample` produces.
    pub misdeclare: bool,
    /// Fail `command_args` with an initialization error.
    pub reject_args: bool,
}

impl ProbeDesign {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clk_levels(&self) -> Vec<bool> {
        self.evals.iter().map(|e| e.clk).collect()
    }

    pub fn rst_levels(&self) -> Vec<bool> {
        self.evals.iter().map(|e| e.rst_n).collect()
    }
}

impl Design for ProbeDesign {
    fn name(&self) -> &str {
        "probe"
    }

    fn set_clk(&mut self, level: bool) {
        self.clk = level;
    }

    fn set_rst_n(&mut self, level: bool) {
        self.rst_n = level;
    }

    fn eval(&mut self) {
        self.evals.push(EvalRecord {
            clk: self.clk,
            rst_n: self.rst_n,
        });
    }

    fn trace(&self, sink: &mut dyn TraceSink) {
        sink.push_scope("probe");
        sink.declare("clk", 1);
        sink.declare("rst_n", 1);
        sink.push_scope("inner");
        sink.declare("evals", 16);
        if self.misdeclare {
            sink.declare("ghost", 1);
        }
        sink.pop_scope();
        sink.pop_scope();
    }

    fn sample(&self, values: &mut Vec<u64>) {
        values.push(u64::from(self.clk));
        values.push(u64::from(self.rst_n));
        values.push(self.evals.len() as u64);
    }

    fn command_args(&mut self, args: &PlusArgs) -> Result<()> {
        if self.reject_args {
            return Err(HarnessError::Initialization("probe rejects arguments".into()));
        }
        self.args = Some(args.clone());
        Ok(())
    }
}
