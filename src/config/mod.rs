//! Configuration module
//!
//! Handles loading and managing configuration.

#![allow(dead_code)]

mod env;
mod file;

pub use env::{print_env_help, EnvBuilder, EnvConfig};
pub use file::ConfigFile;

use serde::{Deserialize, Serialize};

/// Application configuration
///
/// Defaults reproduce the fixed constants of the original report workflow.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AppConfig {
    /// Execution report file
    pub report_file: String,

    /// Master test list file
    pub master_list_file: String,

    /// Number of buckets to balance into
    pub bucket_count: usize,

    /// Directory for bucket and pattern files
    pub output_dir: String,

    /// Excluded-category marker
    pub category: String,

    /// Default output format
    pub format: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            report_file: "AllTests.csv".to_string(),
            master_list_file: "KnownTests.txt".to_string(),
            bucket_count: 4,
            output_dir: "result".to_string(),
            category: "Slow".to_string(),
            format: "table".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.report_file, "AllTests.csv");
        assert_eq!(config.bucket_count, 4);
        assert_eq!(config.output_dir, "result");
        assert_eq!(config.category, "Slow");
    }
}
