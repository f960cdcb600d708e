//! Console formatters for plan results
//!
//! Provides JSON, Table, and summary output formats.

#![allow(dead_code)]

use crate::models::{ClassRecord, PlanSummary};

/// Output format options
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
    JsonPretty,
    Summary,
}

impl OutputFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "table" => Some(OutputFormat::Table),
            "json" => Some(OutputFormat::Json),
            "json-pretty" | "jsonpretty" => Some(OutputFormat::JsonPretty),
            "summary" => Some(OutputFormat::Summary),
            _ => None,
        }
    }
}

/// Plan formatter
pub struct PlanFormatter {
    format: OutputFormat,
    colorize: bool,
}

impl PlanFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            colorize: true,
        }
    }

    pub fn no_color(mut self) -> Self {
        self.colorize = false;
        self
    }

    /// Format a complete plan summary
    pub fn format_plan(&self, summary: &PlanSummary) -> String {
        match self.format {
            OutputFormat::Table => self.format_plan_table(summary),
            OutputFormat::Json => serde_json::to_string(summary).unwrap_or_default(),
            OutputFormat::JsonPretty => serde_json::to_string_pretty(summary).unwrap_or_default(),
            OutputFormat::Summary => self.format_plan_brief(summary),
        }
    }

    fn format_plan_table(&self, summary: &PlanSummary) -> String {
        let mut output = String::new();

        output.push_str("\n═══════════════════════════════════════════════════════════════\n");
        output.push_str(&format!(
            " Suite Plan: {} classes across {} buckets\n",
            summary.distributed_classes(),
            summary.buckets.len()
        ));
        output.push_str("═══════════════════════════════════════════════════════════════\n");

        output.push_str(&format!(" Total {} h\n", summary.raw_total_hours()));
        output.push_str(&format!(" Total {} h\n\n", summary.aggregated_total_hours()));

        for bucket in &summary.buckets {
            output.push_str(&format!(
                " Time for: {} : {} mins ({} classes)\n",
                bucket.index,
                bucket.minutes(),
                bucket.len()
            ));
        }

        output.push_str(" ───────────────────────────────────────────────────────────\n");
        output.push_str(&format!(
            " Skipped (category, reported): {:.2} mins\n",
            summary.marked_skip_minutes()
        ));
        output.push_str(&format!(
            " Skipped (category, excluded): {:.2} mins\n",
            summary.excluded_skip_minutes()
        ));
        output.push_str(&format!(
            " Skipped (not in master list): {:.2} mins\n",
            summary.missing_skip_minutes()
        ));
        output.push_str(" ───────────────────────────────────────────────────────────\n");

        let min = crate::utils::millis_to_minutes(summary.min_bucket_ms());
        let max = crate::utils::millis_to_minutes(summary.max_bucket_ms());
        let spread = if self.colorize {
            format!(
                " Min time: \x1b[32m{min}\x1b[0m Max time: \x1b[33m{max}\x1b[0m\n"
            )
        } else {
            format!(" Min time: {min} Max time: {max}\n")
        };
        output.push_str(&spread);

        output
    }

    fn format_plan_brief(&self, summary: &PlanSummary) -> String {
        format!(
            "{} buckets from {} classes: min {} mins, max {} mins ({} h raw, {} h aggregated)",
            summary.buckets.len(),
            summary.distributed_classes(),
            crate::utils::millis_to_minutes(summary.min_bucket_ms()),
            crate::utils::millis_to_minutes(summary.max_bucket_ms()),
            summary.raw_total_hours(),
            summary.aggregated_total_hours()
        )
    }

    /// Format aggregated per-class totals
    pub fn format_classes(&self, classes: &[ClassRecord]) -> String {
        match self.format {
            OutputFormat::Json => serde_json::to_string(classes).unwrap_or_default(),
            OutputFormat::JsonPretty => serde_json::to_string_pretty(classes).unwrap_or_default(),
            _ => self.format_classes_table(classes),
        }
    }

    fn format_classes_table(&self, classes: &[ClassRecord]) -> String {
        let mut output = String::new();

        output.push_str(&format!(" {} classes\n", classes.len()));
        output.push_str(" ───────────────────────────────────────────────────────────\n");
        for class in classes {
            output.push_str(&format!(
                " {:60} {:>9} ms\n",
                class.class_name, class.total_duration_ms
            ));
        }

        let total: u64 = classes.iter().map(|c| c.total_duration_ms).sum();
        output.push_str(" ───────────────────────────────────────────────────────────\n");
        output.push_str(&format!(
            " Total: {} ms ({} mins)\n",
            total,
            crate::utils::millis_to_minutes(total)
        ));
        output
    }
}

impl Default for PlanFormatter {
    fn default() -> Self {
        Self::new(OutputFormat::Table)
    }
}
