//! Waveform tracing: signal binding and recorder interface.
//!
//! This module sits between a design and a waveform file. It provides:
//! 1. **Binding:** `TraceSink` receives a design's signal declarations; `bind` turns them into a `TraceLayout`.
//! 2. **Detail level:** Signals nested deeper than the requested level are dropped from the layout.
//! 3. **Recording:** The `WaveformRecorder` trait with file-backed (`VcdRecorder`) and in-memory (`MemoryRecorder`) implementations.

use std::path::Path;

use tracing::debug;

use crate::common::{HarnessError, Result};
use crate::design::Design;

/// In-memory recorder used by tests and dry runs.
pub mod memory;
/// Value Change Dump recorder.
pub mod vcd;

pub use memory::MemoryRecorder;
pub use vcd::VcdRecorder;

/// Receiver for a design's signal declarations.
///
/// Designs walk their hierarchy top-down, opening a scope per instance. The order of
/// `declare` calls must match the order of values written by [`Design::sample`].
pub trait TraceSink {
    /// Enters a named instance scope.
    fn push_scope(&mut self, name: &str);
    /// Leaves the innermost scope.
    fn pop_scope(&mut self);
    /// Declares a signal of `width` bits in the current scope.
    fn declare(&mut self, name: &str, width: u32);
}

/// A declared signal kept in a trace layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignalDecl {
    /// Instance path from the top scope down to the owning scope.
    pub scope: Vec<String>,
    /// Signal name within its scope.
    pub name: String,
    /// Width in bits (1..=64).
    pub width: u32,
}

impl SignalDecl {
    /// Dotted hierarchical name, e.g. `top.u_counter.count_q`.
    pub fn path(&self) -> String {
        let mut path = self.scope.join(".");
        if !path.is_empty() {
            path.push('.');
        }
        path.push_str(&self.name);
        path
    }
}

/// Signals selected for recording, and where to find them in a design sample.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TraceLayout {
    signals: Vec<SignalDecl>,
    keep: Vec<usize>,
    declared: usize,
}

impl TraceLayout {
    /// Kept signals in declaration order.
    pub fn signals(&self) -> &[SignalDecl] {
        &self.signals
    }

    /// Number of signals the design declared, kept or not.
    pub const fn declared(&self) -> usize {
        self.declared
    }

    /// Copies the kept values out of a full design sample into `out`.
    pub fn project(&self, sample: &[u64], out: &mut Vec<u64>) {
        out.clear();
        out.extend(self.keep.iter().filter_map(|&i| sample.get(i).copied()));
    }
}

/// `TraceSink` that builds a `TraceLayout` limited to a hierarchy depth.
#[derive(Debug)]
struct LayoutBuilder {
    levels: u32,
    scope: Vec<String>,
    layout: TraceLayout,
}

impl TraceSink for LayoutBuilder {
    fn push_scope(&mut self, name: &str) {
        self.scope.push(name.to_owned());
    }

    fn pop_scope(&mut self) {
        let _ = self.scope.pop();
    }

    fn declare(&mut self, name: &str, width: u32) {
        let index = self.layout.declared;
        self.layout.declared += 1;
        if u32::try_from(self.scope.len()).unwrap_or(u32::MAX) > self.levels {
            return;
        }
        self.layout.keep.push(index);
        self.layout.signals.push(SignalDecl {
            scope: self.scope.clone(),
            name: name.to_owned(),
            width,
        });
    }
}

/// Binds a design to a trace at the given detail level.
///
/// Top-level ports sit at level 1, signals of a direct child instance at level 2, and so on.
///
/// # Arguments
///
/// * `design` - The design whose signals are declared.
/// * `levels` - Deepest hierarchy level to keep.
///
/// # Returns
///
/// The resulting layout, or `HarnessError::Initialization` if a declaration is malformed
/// or the design's sample does not match its declarations.
pub fn bind<D: Design + ?Sized>(design: &D, levels: u32) -> Result<TraceLayout> {
    let mut builder = LayoutBuilder {
        levels,
        scope: Vec::new(),
        layout: TraceLayout::default(),
    };
    design.trace(&mut builder);

    if let Some(bad) = builder
        .layout
        .signals
        .iter()
        .find(|s| s.width == 0 || s.width > 64)
    {
        return Err(HarnessError::Initialization(format!(
            "signal {} has unsupported width {}",
            bad.path(),
            bad.width
        )));
    }

    let mut sample = Vec::with_capacity(builder.layout.declared);
    design.sample(&mut sample);
    if sample.len() != builder.layout.declared {
        return Err(HarnessError::Initialization(format!(
            "design {} declares {} signals but samples {}",
            design.name(),
            builder.layout.declared,
            sample.len()
        )));
    }

    debug!(
        design = design.name(),
        levels,
        declared = builder.layout.declared,
        kept = builder.layout.signals.len(),
        "bound design to trace"
    );
    Ok(builder.layout)
}

/// Destination for waveform samples.
///
/// A recorder is opened once against a destination and a layout, receives one `dump` per
/// half-period step with values aligned to `layout.signals()`, and is closed once.
pub trait WaveformRecorder {
    /// Opens the destination and writes any header the format needs.
    fn open(&mut self, path: &Path, layout: &TraceLayout) -> Result<()>;

    /// Records the kept signal values at `time`.
    fn dump(&mut self, time: u64, values: &[u64]) -> Result<()>;

    /// Flushes and finalises the destination. Closing a closed recorder is a no-op.
    fn close(&mut self) -> Result<()>;

    /// Whether the recorder is between `open` and `close`.
    fn is_open(&self) -> bool;
}

/// Masks a value to the low `width` bits.
pub(crate) const fn mask(value: u64, width: u32) -> u64 {
    if width >= 64 {
        value
    } else {
        value & ((1u64 << width) - 1)
    }
}
