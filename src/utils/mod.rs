//! Shared utilities
//!
//! Logging setup, stage timing, and millisecond conversions.

mod logger;
mod time;
mod timer;

pub use logger::{init_logger, LogLevel};
pub use time::{millis_to_hours, millis_to_minutes, millis_to_minutes_f64};
pub use timer::Timer;
