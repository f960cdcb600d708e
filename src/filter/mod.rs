//! Inclusion filter
//!
//! Partitions aggregated classes into the set that proceeds to distribution
//! and the sets that are skipped, with skip-time totals for reporting.
//!
//! The excluded-category marker is checked twice on purpose: once exact-case
//! for the reported figure, once lower-cased to decide actual exclusion.
//! These select different classes and are kept as two separate checks (see
//! DESIGN.md).

use tracing::debug;

use crate::master::MasterTestSet;
use crate::models::ClassRecord;

/// Result of partitioning the aggregated classes
#[derive(Clone, Debug, Default)]
pub struct FilterOutcome {
    /// Classes that proceed to bucket distribution
    pub included: Vec<ClassRecord>,

    /// Classes removed by the lower-case category check
    pub excluded: Vec<ClassRecord>,

    /// Classes absent from the master list
    pub missing: Vec<ClassRecord>,

    /// Summed duration of classes matching the marker exact-case
    pub marked_ms: u64,
}

impl FilterOutcome {
    /// Total duration across every partition, equal to the aggregated total
    pub fn aggregated_total_ms(&self) -> u64 {
        self.included_total_ms() + self.excluded_total_ms() + self.missing_total_ms()
    }

    pub fn included_total_ms(&self) -> u64 {
        sum_durations(&self.included)
    }

    pub fn excluded_total_ms(&self) -> u64 {
        sum_durations(&self.excluded)
    }

    pub fn missing_total_ms(&self) -> u64 {
        sum_durations(&self.missing)
    }
}

fn sum_durations(classes: &[ClassRecord]) -> u64 {
    classes.iter().map(|c| c.total_duration_ms).sum()
}

/// Partition aggregated classes against the master list and category marker.
///
/// Category exclusion is checked before master-list membership, so a class
/// matching both counts only toward the excluded figure.
pub fn partition(
    classes: Vec<ClassRecord>,
    master: &MasterTestSet,
    category: &str,
) -> FilterOutcome {
    let lower_marker = category.to_lowercase();
    let mut outcome = FilterOutcome::default();

    for class in classes {
        if class.class_name.contains(category) {
            outcome.marked_ms += class.total_duration_ms;
        }

        if class.class_name.contains(&lower_marker) {
            outcome.excluded.push(class);
        } else if !master.contains(&class.class_name) {
            outcome.missing.push(class);
        } else {
            outcome.included.push(class);
        }
    }

    debug!(
        "filter kept {} classes ({} excluded, {} not in master list)",
        outcome.included.len(),
        outcome.excluded.len(),
        outcome.missing.len()
    );
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    fn master(names: &[&str]) -> MasterTestSet {
        MasterTestSet::from_names(names.iter().copied())
    }

    #[test]
    fn test_known_classes_survive() {
        let classes = vec![
            ClassRecord::new("org.acme.CartTest", 100),
            ClassRecord::new("org.acme.StockTest", 200),
        ];
        let outcome = partition(
            classes,
            &master(&["org.acme.CartTest", "org.acme.StockTest"]),
            "Slow",
        );

        assert_eq!(outcome.included.len(), 2);
        assert!(outcome.excluded.is_empty());
        assert!(outcome.missing.is_empty());
        assert_eq!(outcome.included_total_ms(), 300);
    }

    #[test]
    fn test_unknown_class_counts_as_missing_skip_time() {
        let classes = vec![
            ClassRecord::new("org.acme.CartTest", 100),
            ClassRecord::new("org.acme.GoneTest", 250),
        ];
        let outcome = partition(classes, &master(&["org.acme.CartTest"]), "Slow");

        assert_eq!(outcome.included.len(), 1);
        assert_eq!(outcome.missing.len(), 1);
        assert_eq!(outcome.missing_total_ms(), 250);
    }

    #[test]
    fn test_exact_case_marker_is_reported_not_excluded() {
        // "Slow" appears exact-case, but "slow" does not, so the class is
        // counted in the marked figure yet still distributed
        let classes = vec![ClassRecord::new("org.acme.SlowCartTest", 400)];
        let outcome = partition(classes, &master(&["org.acme.SlowCartTest"]), "Slow");

        assert_eq!(outcome.marked_ms, 400);
        assert_eq!(outcome.included.len(), 1);
        assert!(outcome.excluded.is_empty());
    }

    #[test]
    fn test_lower_case_marker_excludes() {
        let classes = vec![ClassRecord::new("org.acme.slowtests.CartTest", 500)];
        let outcome = partition(classes, &master(&["org.acme.slowtests.CartTest"]), "Slow");

        assert_eq!(outcome.marked_ms, 0);
        assert_eq!(outcome.excluded.len(), 1);
        assert_eq!(outcome.excluded_total_ms(), 500);
        assert!(outcome.included.is_empty());
    }

    #[test]
    fn test_excluded_wins_over_missing() {
        let classes = vec![ClassRecord::new("org.acme.slowtests.CartTest", 500)];
        let outcome = partition(classes, &master(&[]), "Slow");

        assert_eq!(outcome.excluded.len(), 1);
        assert!(outcome.missing.is_empty());
    }

    #[test]
    fn test_aggregated_total_spans_all_partitions() {
        let classes = vec![
            ClassRecord::new("org.acme.CartTest", 100),
            ClassRecord::new("org.acme.slowtests.X", 200),
            ClassRecord::new("org.acme.GoneTest", 50),
        ];
        let outcome = partition(classes, &master(&["org.acme.CartTest"]), "Slow");

        assert_eq!(outcome.aggregated_total_ms(), 350);
    }
}
