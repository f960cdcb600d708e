//! Millisecond conversion helpers

/// Whole minutes, truncating
pub fn millis_to_minutes(ms: u64) -> u64 {
    ms / 1000 / 60
}

/// Whole hours, truncating
pub fn millis_to_hours(ms: u64) -> u64 {
    ms / 1000 / 60 / 60
}

/// Fractional minutes, for skip-time reporting
pub fn millis_to_minutes_f64(ms: u64) -> f64 {
    ms as f64 / 60_000.0
}
