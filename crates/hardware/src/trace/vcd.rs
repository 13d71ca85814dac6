//! Value Change Dump (IEEE 1364) recorder.
//!
//! The file format itself is produced by the `vcd` crate; this recorder maps a
//! `TraceLayout` onto VCD scopes and wires and emits only the values that changed
//! between dumps. Output is buffered and flushed on `close`.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::debug;
use vcd::{IdCode, SimulationCommand, TimescaleUnit, Value};

use super::{TraceLayout, WaveformRecorder, mask};
use crate::common::{HarnessError, Result};

/// Open file state: writer, one id code per kept signal, and the last value written.
struct OpenTrace {
    path: PathBuf,
    writer: vcd::Writer<BufWriter<File>>,
    ids: Vec<(IdCode, u32)>,
    last: Vec<Option<u64>>,
}

impl std::fmt::Debug for OpenTrace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenTrace")
            .field("path", &self.path)
            .field("signals", &self.ids.len())
            .finish_non_exhaustive()
    }
}

impl OpenTrace {
    fn write_dump(&mut self, time: u64, values: &[u64], first: bool) -> std::io::Result<()> {
        self.writer.timestamp(time)?;
        if first {
            self.writer.begin(SimulationCommand::Dumpvars)?;
        }
        for ((&(id, width), &raw), prev) in self.ids.iter().zip(values).zip(&mut self.last) {
            let value = mask(raw, width);
            if *prev != Some(value) {
                write_value(&mut self.writer, id, width, value)?;
                *prev = Some(value);
            }
        }
        if first {
            self.writer.end()?;
        }
        Ok(())
    }
}

/// Recorder writing a VCD file with a 1 ns timescale.
#[derive(Debug, Default)]
pub struct VcdRecorder {
    trace: Option<OpenTrace>,
    dumps: u64,
}

impl VcdRecorder {
    /// Creates an unopened recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `dump` calls since the last `open`.
    pub const fn dumps(&self) -> u64 {
        self.dumps
    }
}

fn write_header(
    writer: &mut vcd::Writer<BufWriter<File>>,
    layout: &TraceLayout,
) -> std::io::Result<Vec<(IdCode, u32)>> {
    writer.timescale(1, TimescaleUnit::NS)?;

    let mut ids = Vec::with_capacity(layout.signals().len());
    let mut open: Vec<&str> = Vec::new();
    for signal in layout.signals() {
        let common = open
            .iter()
            .zip(&signal.scope)
            .take_while(|(a, b)| **a == b.as_str())
            .count();
        while open.len() > common {
            writer.upscope()?;
            let _ = open.pop();
        }
        for name in &signal.scope[common..] {
            writer.add_module(name)?;
            open.push(name.as_str());
        }
        ids.push((writer.add_wire(signal.width, &signal.name)?, signal.width));
    }
    for _ in &open {
        writer.upscope()?;
    }

    writer.enddefinitions()?;
    Ok(ids)
}

fn write_value(
    writer: &mut vcd::Writer<BufWriter<File>>,
    id: IdCode,
    width: u32,
    value: u64,
) -> std::io::Result<()> {
    let bit = |b: u32| {
        if (value >> b) & 1 == 1 {
            Value::V1
        } else {
            Value::V0
        }
    };
    if width == 1 {
        writer.change_scalar(id, bit(0))
    } else {
        writer.change_vector(id, (0..width).rev().map(bit))
    }
}

impl WaveformRecorder for VcdRecorder {
    fn open(&mut self, path: &Path, layout: &TraceLayout) -> Result<()> {
        self.close()?;

        let file = File::create(path).map_err(|e| HarnessError::io(path, e))?;
        let mut writer = vcd::Writer::new(BufWriter::new(file));
        let ids = write_header(&mut writer, layout).map_err(|e| HarnessError::io(path, e))?;

        debug!(path = %path.display(), signals = ids.len(), "opened VCD trace");
        self.trace = Some(OpenTrace {
            path: path.to_path_buf(),
            writer,
            last: vec![None; ids.len()],
            ids,
        });
        self.dumps = 0;
        Ok(())
    }

    fn dump(&mut self, time: u64, values: &[u64]) -> Result<()> {
        let trace = self.trace.as_mut().ok_or(HarnessError::RecorderClosed)?;
        let first = self.dumps == 0;
        self.dumps += 1;

        trace
            .write_dump(time, values, first)
            .map_err(|e| HarnessError::io(&trace.path, e))
    }

    fn close(&mut self) -> Result<()> {
        let Some(mut trace) = self.trace.take() else {
            return Ok(());
        };
        trace
            .writer
            .writer()
            .flush()
            .map_err(|e| HarnessError::io(&trace.path, e))?;
        debug!(path = %trace.path.display(), dumps = self.dumps, "closed VCD trace");
        Ok(())
    }

    fn is_open(&self) -> bool {
        self.trace.is_some()
    }
}

impl Drop for VcdRecorder {
    fn drop(&mut self) {
        if let Some(mut trace) = self.trace.take() {
            let _ = trace.writer.writer().flush();
        }
    }
}
