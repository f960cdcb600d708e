//! Error types for the planning pipeline
//!
//! Every variant is fatal to the run: the input is machine-generated, so any
//! deviation means an upstream tooling change that must surface immediately.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::report::RecordError;

/// Fatal pipeline errors
#[derive(Error, Debug)]
pub enum PlanError {
    /// A report line could not be parsed into a test record.
    #[error("report line {number}: {source}")]
    MalformedLine {
        number: usize,
        #[source]
        source: RecordError,
    },

    /// The class-name scan found no qualifying segment.
    #[error("cannot derive a class name from `{name}`")]
    UnresolvableClassName { name: String },

    /// The report file or master list file could not be read.
    #[error("cannot read {}: {source}", path.display())]
    MissingFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
