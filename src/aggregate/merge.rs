//! Consecutive-merge aggregation
//!
//! Single-pass fold over the parsed records. Relies on the report emitting
//! all records of one class contiguously; it is not a general group-by.

use tracing::debug;

use super::extract_class_name;
use crate::error::PlanError;
use crate::models::{ClassRecord, TestRecord};

/// Fold consecutive records of the same class into one record each.
pub fn aggregate(records: &[TestRecord]) -> Result<Vec<ClassRecord>, PlanError> {
    let mut classes: Vec<ClassRecord> = Vec::new();

    for record in records {
        let class_name = extract_class_name(&record.full_name)?;
        match classes.last_mut() {
            Some(last) if last.class_name == class_name => {
                last.total_duration_ms += record.duration_ms;
            }
            _ => classes.push(ClassRecord::new(class_name, record.duration_ms)),
        }
    }

    debug!("aggregated {} records into {} classes", records.len(), classes.len());
    Ok(classes)
}
