//! Error taxonomy for one analysis run.
//!
//! The run is single-shot and all-or-nothing: configuration and load failures
//! abort before anything is written, output failures abort after assembly with
//! no partial file left behind. Unrecognized top-level constructs are not
//! errors at all; the walker logs them and keeps going.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FlavorError {
    /// Missing or invalid required input, detected before any loading happens.
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// The front end could not produce a package set. Fatal to the run.
    #[error("failed to load packages from {}: {message}", .path.display())]
    Load { path: PathBuf, message: String },

    /// The destination could not be written after assembly.
    #[error("failed to write output to {}", .path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The assembled document could not be encoded.
    #[error("failed to serialize document")]
    Serialize(#[from] quick_xml::DeError),
}

impl FlavorError {
    pub fn load(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Load {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn output(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Output {
            path: path.into(),
            source,
        }
    }
}
