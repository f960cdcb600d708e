//! Data models for test suite balancing
//!
//! This module contains all data structures used throughout the application.

mod bucket;
mod plan;
mod record;

pub use bucket::Bucket;
pub use plan::PlanSummary;
pub use record::{ClassRecord, TestRecord};
