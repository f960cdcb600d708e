//! Plan output
//!
//! Bucket file writing and console formatting for plan results.

mod formatter;
mod writer;

pub use formatter::{OutputFormat, PlanFormatter};
pub use writer::{export_classes_csv, ReportWriter};
