//! CLI argument parsing
//!
//! Defines command-line interface using clap.

use clap::{Parser, Subcommand};

/// Test Suite Execution-Time Balancer
#[derive(Parser, Debug)]
#[command(name = "test-balancer")]
#[command(version = "0.1.0")]
#[command(about = "Plan parallel CI buckets from test execution reports")]
#[command(long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compute a balanced bucket plan from an execution report
    Plan(PlanArgs),

    /// Show per-class timing statistics for a report
    Stats(StatsArgs),

    /// View stored plans
    Plans(PlansArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

/// Arguments for plan command
#[derive(Parser, Debug)]
pub struct PlanArgs {
    /// Execution report file
    #[arg(short, long)]
    pub report: Option<String>,

    /// Master test list file
    #[arg(short, long)]
    pub master_list: Option<String>,

    /// Number of buckets to balance into
    #[arg(short, long)]
    pub buckets: Option<usize>,

    /// Output directory for bucket and pattern files
    #[arg(short, long)]
    pub output_dir: Option<String>,

    /// Excluded-category marker
    #[arg(short, long)]
    pub category: Option<String>,

    /// Output format (table, json, json-pretty, summary)
    #[arg(short, long)]
    pub format: Option<String>,

    /// Save the computed plan for later inspection
    #[arg(short, long)]
    pub save: bool,

    /// Skip writing bucket and pattern files
    #[arg(long)]
    pub dry_run: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<String>,
}

/// Arguments for stats command
#[derive(Parser, Debug)]
pub struct StatsArgs {
    /// Execution report file
    #[arg(short, long)]
    pub report: Option<String>,

    /// Output format (table, json, json-pretty)
    #[arg(short, long, default_value = "table")]
    pub format: String,

    /// Export per-class timings to a CSV file
    #[arg(short, long)]
    pub export: Option<String>,
}

/// Arguments for plans command
#[derive(Parser, Debug)]
pub struct PlansArgs {
    /// Show a specific plan by ID
    #[arg(short, long)]
    pub id: Option<String>,

    /// Output format (table, json, json-pretty, summary)
    #[arg(short, long, default_value = "table")]
    pub format: String,

    /// Delete a plan by ID
    #[arg(long)]
    pub delete: Option<String>,
}

/// Arguments for config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create an example configuration file
    Init {
        /// Output path
        #[arg(short, long, default_value = "./test-balancer.yaml")]
        output: String,

        /// Overwrite existing file
        #[arg(short, long)]
        force: bool,
    },

    /// Show effective configuration
    Show {
        /// Show environment variable overrides instead
        #[arg(short, long)]
        env: bool,

        /// Output format (yaml, json)
        #[arg(short, long, default_value = "yaml")]
        format: String,
    },

    /// Validate a configuration file
    Validate {
        /// Path to validate (defaults to first discovered config)
        file: Option<String>,
    },

    /// List supported environment variables
    Env,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_args_parsing() {
        let args = Args::parse_from([
            "test-balancer",
            "plan",
            "--report",
            "nightly.csv",
            "--buckets",
            "8",
            "--save",
        ]);
        match args.command {
            Command::Plan(plan_args) => {
                assert_eq!(plan_args.report.as_deref(), Some("nightly.csv"));
                assert_eq!(plan_args.buckets, Some(8));
                assert!(plan_args.save);
                assert!(!plan_args.dry_run);
            }
            _ => panic!("Expected Plan command"),
        }
    }

    #[test]
    fn test_plan_defaults_unset() {
        let args = Args::parse_from(["test-balancer", "plan"]);
        match args.command {
            Command::Plan(plan_args) => {
                assert!(plan_args.report.is_none());
                assert!(plan_args.buckets.is_none());
                assert!(plan_args.category.is_none());
            }
            _ => panic!("Expected Plan command"),
        }
    }

    #[test]
    fn test_config_init_args() {
        let args = Args::parse_from(["test-balancer", "config", "init", "--force"]);
        match args.command {
            Command::Config(config_args) => match config_args.action {
                ConfigAction::Init { output, force } => {
                    assert_eq!(output, "./test-balancer.yaml");
                    assert!(force);
                }
                _ => panic!("Expected Init action"),
            },
            _ => panic!("Expected Config command"),
        }
    }

    #[test]
    fn test_global_verbose() {
        let args = Args::parse_from(["test-balancer", "stats", "--verbose"]);
        assert!(args.verbose);
    }
}
