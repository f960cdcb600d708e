//! Report file reading
//!
//! Walks the report line by line, discarding the header and internal marker
//! lines, and turns every remaining line into a test record. The first
//! malformed line aborts the run.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use super::{extract_payload, parse_record};
use crate::error::PlanError;
use crate::models::TestRecord;

/// Read and parse an execution report.
///
/// Line 1 is a header and is discarded. Payloads starting with `_` are
/// synthetic markers and are skipped. Errors carry the 1-based file line
/// number of the offending line.
pub fn read_report(path: &Path) -> Result<Vec<TestRecord>, PlanError> {
    let file = File::open(path).map_err(|source| PlanError::MissingFile {
        path: path.to_path_buf(),
        source,
    })?;

    let mut records = Vec::new();
    for (index, line) in BufReader::new(file).lines().enumerate() {
        let line = line.map_err(|source| PlanError::MissingFile {
            path: path.to_path_buf(),
            source,
        })?;

        let number = index + 1;
        if number == 1 {
            continue;
        }

        let payload =
            extract_payload(&line).map_err(|source| PlanError::MalformedLine { number, source })?;
        if payload.starts_with('_') {
            continue;
        }

        let record =
            parse_record(payload).map_err(|source| PlanError::MalformedLine { number, source })?;
        records.push(record);
    }

    debug!("parsed {} records from {}", records.len(), path.display());
    Ok(records)
}
