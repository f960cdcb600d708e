//! Test record models
//!
//! Defines the per-test and per-class record types produced by the
//! parsing and aggregation stages.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One executed test, as parsed from a single report line
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestRecord {
    /// Fully-qualified test name (may contain commas)
    pub full_name: String,

    /// Whether the result field was the literal `OK`
    pub passed: bool,

    /// Execution time in milliseconds
    pub duration_ms: u64,
}

impl TestRecord {
    pub fn new(full_name: impl Into<String>, passed: bool, duration_ms: u64) -> Self {
        Self {
            full_name: full_name.into(),
            passed,
            duration_ms,
        }
    }
}

impl fmt::Display for TestRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let outcome = if self.passed { "OK" } else { "FAILED" };
        write!(f, "{} {} [{}ms]", outcome, self.full_name, self.duration_ms)
    }
}

/// A test class with the summed duration of its consecutive test records
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassRecord {
    /// Fully-qualified class name
    pub class_name: String,

    /// Summed duration of the class's tests in milliseconds
    pub total_duration_ms: u64,
}

impl ClassRecord {
    pub fn new(class_name: impl Into<String>, total_duration_ms: u64) -> Self {
        Self {
            class_name: class_name.into(),
            total_duration_ms,
        }
    }
}

impl fmt::Display for ClassRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}ms]", self.class_name, self.total_duration_ms)
    }
}
