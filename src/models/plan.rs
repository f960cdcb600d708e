//! Plan summary model
//!
//! Roll-up of one complete planning run: overall timings, skip-time figures,
//! and the final buckets. This is what the formatter renders and the storage
//! layer persists.

use serde::{Deserialize, Serialize};

use super::Bucket;
use crate::filter::FilterOutcome;
use crate::utils::{millis_to_hours, millis_to_minutes_f64};

/// Summary of a completed planning run
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlanSummary {
    /// Sum of all parsed record durations, before aggregation
    pub raw_total_ms: u64,

    /// Sum of aggregated class durations
    pub aggregated_total_ms: u64,

    /// Total duration of classes matching the exact-case category marker
    pub marked_skip_ms: u64,

    /// Total duration of classes excluded by the lower-case category check
    pub excluded_skip_ms: u64,

    /// Total duration of classes absent from the master list
    pub missing_skip_ms: u64,

    /// The K buckets, in index order
    pub buckets: Vec<Bucket>,
}

impl PlanSummary {
    /// Build a summary from the pipeline stage outputs
    pub fn new(raw_total_ms: u64, outcome: &FilterOutcome, buckets: Vec<Bucket>) -> Self {
        let aggregated_total_ms = outcome.aggregated_total_ms();

        Self {
            raw_total_ms,
            aggregated_total_ms,
            marked_skip_ms: outcome.marked_ms,
            excluded_skip_ms: outcome.excluded_total_ms(),
            missing_skip_ms: outcome.missing_total_ms(),
            buckets,
        }
    }

    /// Smallest bucket total in milliseconds
    pub fn min_bucket_ms(&self) -> u64 {
        self.buckets
            .iter()
            .map(|b| b.total_duration_ms)
            .min()
            .unwrap_or(0)
    }

    /// Largest bucket total in milliseconds
    pub fn max_bucket_ms(&self) -> u64 {
        self.buckets
            .iter()
            .map(|b| b.total_duration_ms)
            .max()
            .unwrap_or(0)
    }

    /// Raw report total in whole hours
    pub fn raw_total_hours(&self) -> u64 {
        millis_to_hours(self.raw_total_ms)
    }

    /// Aggregated total in whole hours
    pub fn aggregated_total_hours(&self) -> u64 {
        millis_to_hours(self.aggregated_total_ms)
    }

    /// Exact-case category skip time in floating-point minutes
    pub fn marked_skip_minutes(&self) -> f64 {
        millis_to_minutes_f64(self.marked_skip_ms)
    }

    /// Excluded-category skip time in floating-point minutes
    pub fn excluded_skip_minutes(&self) -> f64 {
        millis_to_minutes_f64(self.excluded_skip_ms)
    }

    /// Not-found skip time in floating-point minutes
    pub fn missing_skip_minutes(&self) -> f64 {
        millis_to_minutes_f64(self.missing_skip_ms)
    }

    /// Total classes distributed across all buckets
    pub fn distributed_classes(&self) -> usize {
        self.buckets.iter().map(Bucket::len).sum()
    }
}
