//! Harness error definitions.
//!
//! This module defines the failure points of a testbench run. It provides:
//! 1. **Initialization failures:** The design or the run configuration cannot be used.
//! 2. **I/O failures:** The waveform recorder cannot open, write, or close its destination.
//! 3. **Input failures:** Malformed JSON configuration or plusarg values.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while setting up, running, or tearing down a testbench.
#[derive(Debug, Error)]
pub enum HarnessError {
    /// The simulated design or the run configuration cannot be used.
    ///
    /// The associated value describes which check failed.
    #[error("initialization failed: {0}")]
    Initialization(String),

    /// The waveform destination could not be opened, written, or finalised.
    #[error("waveform I/O error on {}: {source}", path.display())]
    Io {
        /// Destination the recorder was bound to.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// The recorder was used outside its open/close window.
    #[error("waveform recorder is not open")]
    RecorderClosed,

    /// A JSON configuration document could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// A `+name=value` argument carried a value of the wrong type.
    #[error("invalid value {value:?} for plusarg +{name}")]
    PlusArg {
        /// Plusarg name without the leading `+`.
        name: String,
        /// Raw value as given on the command line.
        value: String,
    },
}

impl HarnessError {
    /// Wraps an I/O error together with the destination it occurred on.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result alias used throughout the harness.
pub type Result<T> = std::result::Result<T, HarnessError>;
