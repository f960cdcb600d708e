//! Test Balancer - Test Suite Execution-Time Balancer
//!
//! A CLI tool that reads a test execution report, aggregates per-class
//! timings, filters against a master test list, and balances the surviving
//! classes into K buckets for parallel CI execution.
//!
//! ## Features
//!
//! - CSV-like execution report parsing with noise-line skipping
//! - Consecutive-record aggregation into per-class totals
//! - Master-list and category filtering with skip-time reporting
//! - Greedy least-loaded bucket balancing
//! - Bucket member and `||`-pattern file generation
//! - Multiple output formats (Table, JSON, Summary)
//! - Plan storage for later inspection
//!
//! ## Usage
//!
//! ```bash
//! # Plan 4 buckets from the default report
//! test-balancer plan
//!
//! # Plan 8 buckets from a nightly report and save the result
//! test-balancer plan --report nightly.csv --buckets 8 --save
//!
//! # Show per-class timings
//! test-balancer stats --report nightly.csv
//!
//! # Inspect stored plans
//! test-balancer plans
//! test-balancer plans --id 20260806_120000_0042
//!
//! # Manage configuration
//! test-balancer config init
//! test-balancer config show
//! ```

use anyhow::Result;
use clap::Parser;
use std::path::Path;
use tracing::{debug, info};

mod aggregate;
mod cli;
mod config;
mod distribute;
mod error;
mod filter;
mod master;
mod models;
mod output;
mod report;
mod results;
mod utils;

use cli::Args;
use config::{AppConfig, ConfigFile, EnvConfig};
use models::PlanSummary;
use output::{OutputFormat, PlanFormatter};
use utils::{init_logger, LogLevel, Timer};

fn main() -> Result<()> {
    let args = Args::parse();

    let env = EnvConfig::load();
    let verbose = args.verbose || env.verbose.unwrap_or(false);
    init_logger(if verbose {
        LogLevel::Debug
    } else {
        LogLevel::Info
    });

    match args.command {
        cli::Command::Plan(plan_args) => {
            run_plan(plan_args)?;
        }
        cli::Command::Stats(stats_args) => {
            run_stats(stats_args)?;
        }
        cli::Command::Plans(plans_args) => {
            show_plans(plans_args)?;
        }
        cli::Command::Config(config_args) => {
            manage_config(config_args)?;
        }
    }

    Ok(())
}

/// Load the configuration file, preferring an explicit path over discovery
fn load_settings(cli_config: Option<&str>, env: &EnvConfig) -> Result<AppConfig> {
    let explicit = cli_config.or(env.config_file.as_deref());

    let config = match explicit {
        Some(path) => ConfigFile::load(path)?,
        None => ConfigFile::load_default()?,
    };

    Ok(config.app)
}

fn parse_format(name: &str) -> Result<OutputFormat> {
    OutputFormat::from_str(name).ok_or_else(|| anyhow::anyhow!("Unknown output format: {name}"))
}

fn run_plan(args: cli::PlanArgs) -> Result<()> {
    let env = EnvConfig::load();
    let app = load_settings(args.config.as_deref(), &env)?;

    if env.has_any() {
        debug!("environment overrides active");
    }

    let report_file = args
        .report
        .unwrap_or_else(|| env.report_or(&app.report_file));
    let master_list_file = args
        .master_list
        .unwrap_or_else(|| env.master_list_or(&app.master_list_file));
    let bucket_count = args.buckets.unwrap_or_else(|| env.buckets_or(app.bucket_count));
    let output_dir = args
        .output_dir
        .unwrap_or_else(|| env.output_dir_or(&app.output_dir));
    let category = args
        .category
        .unwrap_or_else(|| env.category_or(&app.category));
    let format_name = args
        .format
        .or_else(|| env.format.clone())
        .unwrap_or_else(|| app.format.clone());

    if bucket_count == 0 {
        anyhow::bail!("buckets must be at least 1");
    }
    let format = parse_format(&format_name)?;

    info!(
        "Planning {} buckets from {} (master list: {})",
        bucket_count, report_file, master_list_file
    );

    let timer = Timer::start("plan");

    let records = report::read_report(Path::new(&report_file))?;
    let raw_total_ms: u64 = records.iter().map(|r| r.duration_ms).sum();

    let classes = aggregate::aggregate(&records)?;
    debug!("{} classes aggregated from {} records", classes.len(), records.len());

    let master = master::MasterTestSet::load(Path::new(&master_list_file))?;
    let outcome = filter::partition(classes, &master, &category);

    let buckets = distribute::distribute(bucket_count, outcome.included.clone());

    if !args.dry_run {
        let writer = output::ReportWriter::new(&output_dir);
        writer.write_all(&buckets)?;
        info!("bucket files written to {output_dir}");
    }

    let summary = PlanSummary::new(raw_total_ms, &outcome, buckets);
    debug!("plan computed in {} ms", timer.elapsed_ms());

    let formatter = PlanFormatter::new(format);
    println!("{}", formatter.format_plan(&summary));

    if args.save {
        let storage = results::PlanStorage::default_dir()?;
        let stored = results::StoredPlan::new(
            Path::new(&report_file),
            Path::new(&master_list_file),
            &category,
            summary,
        );
        let path = storage.save(&stored)?;
        println!("✓ Plan saved: {} ({})", stored.id, path.display());
    }

    Ok(())
}

fn run_stats(args: cli::StatsArgs) -> Result<()> {
    let env = EnvConfig::load();
    let app = load_settings(None, &env)?;

    let report_file = args
        .report
        .unwrap_or_else(|| env.report_or(&app.report_file));
    let format = parse_format(&args.format)?;

    let records = report::read_report(Path::new(&report_file))?;
    let classes = aggregate::aggregate(&records)?;

    let formatter = PlanFormatter::new(format);
    println!("{}", formatter.format_classes(&classes));

    if let Some(export_path) = &args.export {
        output::export_classes_csv(Path::new(export_path), &classes)?;
        println!("✓ Exported to: {export_path}");
    }

    Ok(())
}

fn show_plans(args: cli::PlansArgs) -> Result<()> {
    let storage = results::PlanStorage::default_dir()?;

    if let Some(id) = &args.delete {
        storage.delete(id)?;
        println!("✓ Plan deleted: {id}");
        return Ok(());
    }

    if let Some(id) = &args.id {
        let plan = storage.load(id)?;
        let format = parse_format(&args.format)?;

        println!("Plan {} ({})", plan.id, plan.created_at.format("%Y-%m-%d %H:%M:%S"));
        println!("  Report:      {}", plan.report_file);
        println!("  Master list: {}", plan.master_list_file);
        println!("  Category:    {}", plan.category);

        let formatter = PlanFormatter::new(format);
        println!("{}", formatter.format_plan(&plan.summary));
        return Ok(());
    }

    let plans = storage.list()?;
    if plans.is_empty() {
        println!("No stored plans found.");
        println!("Run a plan with: test-balancer plan --save");
        return Ok(());
    }

    println!("\n Stored Plans");
    println!(" ───────────────────────────────────────────────────────────");
    for info in &plans {
        println!(
            " {:22} {} │ {:2} buckets │ {:4} classes",
            info.id,
            info.created_at.format("%Y-%m-%d %H:%M"),
            info.bucket_count,
            info.distributed_classes
        );
    }
    println!(" ───────────────────────────────────────────────────────────");
    println!("\nUse --id <id> to view a specific plan.\n");

    Ok(())
}

fn manage_config(args: cli::ConfigArgs) -> Result<()> {
    match args.action {
        cli::ConfigAction::Init { output, force } => {
            let path = Path::new(&output);
            if path.exists() && !force {
                anyhow::bail!(
                    "Configuration file already exists: {output}. Use --force to overwrite."
                );
            }

            let config = ConfigFile::example();
            config.save(path)?;
            println!("✓ Configuration file created: {output}");
            println!("\nEdit the file to customize your settings.");
        }

        cli::ConfigAction::Show { env, format } => {
            if env {
                let env_config = EnvConfig::load();
                env_config.print_summary();
            } else {
                let config = ConfigFile::load_default()?;
                let output = if format == "json" {
                    serde_json::to_string_pretty(&config)?
                } else {
                    serde_yaml::to_string(&config)?
                };
                println!("{output}");
            }
        }

        cli::ConfigAction::Validate { file } => {
            let path = file.unwrap_or_else(|| {
                ConfigFile::find()
                    .map(|p| p.to_string_lossy().to_string())
                    .unwrap_or_else(|| "./test-balancer.yaml".to_string())
            });

            match ConfigFile::load(&path) {
                Ok(_) => {
                    println!("✓ Configuration file is valid: {path}");
                }
                Err(e) => {
                    println!("✗ Configuration file is invalid: {path}");
                    println!("  Error: {e}");
                    return Err(e);
                }
            }
        }

        cli::ConfigAction::Env => {
            config::print_env_help();
        }
    }

    Ok(())
}
