//! Environment variable configuration
//!
//! Provides environment variable overrides for configuration.

use std::env;

/// Environment variable prefix
const ENV_PREFIX: &str = "TEST_BALANCER";

/// Environment configuration from environment variables
#[derive(Clone, Debug, Default)]
pub struct EnvConfig {
    /// Report file from TEST_BALANCER_REPORT
    pub report: Option<String>,
    /// Master list file from TEST_BALANCER_MASTER_LIST
    pub master_list: Option<String>,
    /// Bucket count from TEST_BALANCER_BUCKETS
    pub buckets: Option<usize>,
    /// Output directory from TEST_BALANCER_OUTPUT_DIR
    pub output_dir: Option<String>,
    /// Category marker from TEST_BALANCER_CATEGORY
    pub category: Option<String>,
    /// Output format from TEST_BALANCER_FORMAT
    pub format: Option<String>,
    /// Verbose from TEST_BALANCER_VERBOSE
    pub verbose: Option<bool>,
    /// Config file from TEST_BALANCER_CONFIG
    pub config_file: Option<String>,
}

impl EnvConfig {
    /// Load configuration from environment variables
    pub fn load() -> Self {
        Self {
            report: get_env("REPORT"),
            master_list: get_env("MASTER_LIST"),
            buckets: get_env_parse("BUCKETS"),
            output_dir: get_env("OUTPUT_DIR"),
            category: get_env("CATEGORY"),
            format: get_env("FORMAT"),
            verbose: get_env_bool("VERBOSE"),
            config_file: get_env("CONFIG"),
        }
    }

    /// Check if any environment variables are set
    pub fn has_any(&self) -> bool {
        self.report.is_some()
            || self.master_list.is_some()
            || self.buckets.is_some()
            || self.output_dir.is_some()
            || self.category.is_some()
            || self.format.is_some()
            || self.verbose.is_some()
            || self.config_file.is_some()
    }

    /// Get report file with fallback
    pub fn report_or(&self, default: &str) -> String {
        self.report.clone().unwrap_or_else(|| default.to_string())
    }

    /// Get master list file with fallback
    pub fn master_list_or(&self, default: &str) -> String {
        self.master_list
            .clone()
            .unwrap_or_else(|| default.to_string())
    }

    /// Get bucket count with fallback
    pub fn buckets_or(&self, default: usize) -> usize {
        self.buckets.unwrap_or(default)
    }

    /// Get output directory with fallback
    pub fn output_dir_or(&self, default: &str) -> String {
        self.output_dir
            .clone()
            .unwrap_or_else(|| default.to_string())
    }

    /// Get category marker with fallback
    pub fn category_or(&self, default: &str) -> String {
        self.category.clone().unwrap_or_else(|| default.to_string())
    }

    /// Print current environment configuration
    pub fn print_summary(&self) {
        println!("Environment Configuration:");
        println!("  {}_REPORT:      {:?}", ENV_PREFIX, self.report);
        println!("  {}_MASTER_LIST: {:?}", ENV_PREFIX, self.master_list);
        println!("  {}_BUCKETS:     {:?}", ENV_PREFIX, self.buckets);
        println!("  {}_OUTPUT_DIR:  {:?}", ENV_PREFIX, self.output_dir);
        println!("  {}_CATEGORY:    {:?}", ENV_PREFIX, self.category);
        println!("  {}_FORMAT:      {:?}", ENV_PREFIX, self.format);
        println!("  {}_VERBOSE:     {:?}", ENV_PREFIX, self.verbose);
        println!("  {}_CONFIG:      {:?}", ENV_PREFIX, self.config_file);
    }
}

/// Get environment variable with prefix
fn get_env(name: &str) -> Option<String> {
    env::var(format!("{ENV_PREFIX}_{name}")).ok()
}

/// Get environment variable and parse to type
fn get_env_parse<T: std::str::FromStr>(name: &str) -> Option<T> {
    get_env(name).and_then(|v| v.parse().ok())
}

/// Get environment variable as boolean
fn get_env_bool(name: &str) -> Option<bool> {
    get_env(name).map(|v| {
        matches!(
            v.to_lowercase().as_str(),
            "1" | "true" | "yes" | "on" | "enabled"
        )
    })
}

/// Builder for setting environment variables (useful for testing)
pub struct EnvBuilder {
    vars: Vec<(String, String)>,
}

impl EnvBuilder {
    pub fn new() -> Self {
        Self { vars: Vec::new() }
    }

    /// Set report file
    pub fn report(mut self, report: impl Into<String>) -> Self {
        self.vars.push((format!("{ENV_PREFIX}_REPORT"), report.into()));
        self
    }

    /// Set master list file
    pub fn master_list(mut self, master_list: impl Into<String>) -> Self {
        self.vars
            .push((format!("{ENV_PREFIX}_MASTER_LIST"), master_list.into()));
        self
    }

    /// Set bucket count
    pub fn buckets(mut self, buckets: usize) -> Self {
        self.vars
            .push((format!("{ENV_PREFIX}_BUCKETS"), buckets.to_string()));
        self
    }

    /// Set output directory
    pub fn output_dir(mut self, dir: impl Into<String>) -> Self {
        self.vars
            .push((format!("{ENV_PREFIX}_OUTPUT_DIR"), dir.into()));
        self
    }

    /// Set category marker
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.vars
            .push((format!("{ENV_PREFIX}_CATEGORY"), category.into()));
        self
    }

    /// Set verbose
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.vars
            .push((format!("{ENV_PREFIX}_VERBOSE"), verbose.to_string()));
        self
    }

    /// Apply environment variables
    pub fn apply(self) {
        for (key, value) in self.vars {
            env::set_var(key, value);
        }
    }

    /// Apply and return guard that restores on drop
    pub fn apply_scoped(self) -> EnvGuard {
        let previous: Vec<_> = self
            .vars
            .iter()
            .map(|(k, _)| (k.clone(), env::var(k).ok()))
            .collect();

        self.apply();

        EnvGuard { previous }
    }
}

impl Default for EnvBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Guard that restores environment variables on drop
pub struct EnvGuard {
    previous: Vec<(String, Option<String>)>,
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, value) in &self.previous {
            match value {
                Some(v) => env::set_var(key, v),
                None => env::remove_var(key),
            }
        }
    }
}

/// Print all TEST_BALANCER environment variables
pub fn print_env_help() {
    println!("Environment Variables:");
    println!();
    println!("  {ENV_PREFIX}_REPORT       Execution report file");
    println!("  {ENV_PREFIX}_MASTER_LIST  Master test list file");
    println!("  {ENV_PREFIX}_BUCKETS      Number of buckets");
    println!("  {ENV_PREFIX}_OUTPUT_DIR   Output directory for bucket files");
    println!("  {ENV_PREFIX}_CATEGORY     Excluded-category marker");
    println!("  {ENV_PREFIX}_FORMAT       Output format (table, json, json-pretty, summary)");
    println!("  {ENV_PREFIX}_VERBOSE      Enable verbose output (true/false)");
    println!("  {ENV_PREFIX}_CONFIG       Path to configuration file");
    println!();
    println!("Example:");
    println!("  export {ENV_PREFIX}_REPORT=nightly.csv");
    println!("  export {ENV_PREFIX}_BUCKETS=8");
    println!("  test-balancer plan");
}
