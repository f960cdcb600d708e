//! Execution bucket model
//!
//! A bucket is one of the K groups a balanced run is split into. Buckets are
//! append-only: once a class is assigned it never moves.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ClassRecord;
use crate::utils::millis_to_minutes;

/// One of the K execution groups produced by the distributor
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Bucket {
    /// Zero-based bucket index
    pub index: usize,

    /// Assigned classes, in assignment order
    pub members: Vec<ClassRecord>,

    /// Summed duration of all members in milliseconds
    pub total_duration_ms: u64,
}

impl Bucket {
    /// Create an empty bucket
    pub fn new(index: usize) -> Self {
        Self {
            index,
            members: Vec::new(),
            total_duration_ms: 0,
        }
    }

    /// Append a class and add its duration to the running total
    pub fn push(&mut self, record: ClassRecord) {
        self.total_duration_ms += record.total_duration_ms;
        self.members.push(record);
    }

    /// Total duration in whole minutes
    pub fn minutes(&self) -> u64 {
        millis_to_minutes(self.total_duration_ms)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "bucket {}: {} classes, {} mins",
            self.index,
            self.members.len(),
            self.minutes()
        )
    }
}
