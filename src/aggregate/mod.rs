//! Class aggregation
//!
//! Maps test records to their owning class and merges consecutive records of
//! the same class into per-class totals.

mod class_name;
mod merge;

pub use class_name::extract_class_name;
pub use merge::aggregate;
