//! In-memory waveform recorder.
//!
//! Keeps every dump as a `(time, values)` pair instead of writing a file. The destination
//! path passed to `open` is remembered but never touched.

use std::path::{Path, PathBuf};

use super::{TraceLayout, WaveformRecorder, mask};
use crate::common::{HarnessError, Result};

/// One recorded dump.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sample {
    /// Simulation time of the dump.
    pub time: u64,
    /// Kept signal values, aligned with the layout's signals.
    pub values: Vec<u64>,
}

/// Recorder that stores samples in a vector.
#[derive(Debug, Default)]
pub struct MemoryRecorder {
    path: Option<PathBuf>,
    layout: TraceLayout,
    samples: Vec<Sample>,
    open: bool,
    closed: bool,
}

impl MemoryRecorder {
    /// Creates an unopened recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Samples recorded so far.
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Layout received at `open`.
    pub const fn layout(&self) -> &TraceLayout {
        &self.layout
    }

    /// Destination received at `open`, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Whether `close` has been called after a successful `open`.
    pub const fn was_closed(&self) -> bool {
        self.closed
    }

    /// Values of one signal across all samples, looked up by dotted path.
    pub fn series(&self, path: &str) -> Option<Vec<u64>> {
        let index = self
            .layout
            .signals()
            .iter()
            .position(|s| s.path() == path)?;
        Some(
            self.samples
                .iter()
                .filter_map(|s| s.values.get(index).copied())
                .collect(),
        )
    }
}

impl WaveformRecorder for MemoryRecorder {
    fn open(&mut self, path: &Path, layout: &TraceLayout) -> Result<()> {
        self.path = Some(path.to_path_buf());
        self.layout = layout.clone();
        self.samples.clear();
        self.open = true;
        self.closed = false;
        Ok(())
    }

    fn dump(&mut self, time: u64, values: &[u64]) -> Result<()> {
        if !self.open {
            return Err(HarnessError::RecorderClosed);
        }
        let values = values
            .iter()
            .zip(self.layout.signals())
            .map(|(&v, s)| mask(v, s.width))
            .collect();
        self.samples.push(Sample { time, values });
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        if self.open {
            self.open = false;
            self.closed = true;
        }
        Ok(())
    }

    fn is_open(&self) -> bool {
        self.open
    }
}
