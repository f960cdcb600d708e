//! Bucket file writing
//!
//! Emits the per-bucket member and pattern files consumed by downstream
//! test runners.

use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::models::{Bucket, ClassRecord};

/// Writes bucket files under one output directory
pub struct ReportWriter {
    output_dir: PathBuf,
}

impl ReportWriter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Write member and pattern files for every bucket.
    ///
    /// The output directory is created if absent. Files already present are
    /// overwritten.
    pub fn write_all(&self, buckets: &[Bucket]) -> Result<()> {
        fs::create_dir_all(&self.output_dir).with_context(|| {
            format!("failed to create output dir {}", self.output_dir.display())
        })?;

        for bucket in buckets {
            self.write_members(bucket)?;
            self.write_pattern(bucket)?;
        }

        info!(
            "wrote {} bucket file pairs to {}",
            buckets.len(),
            self.output_dir.display()
        );
        Ok(())
    }

    /// Path of a bucket's member file
    pub fn member_path(&self, index: usize) -> PathBuf {
        self.output_dir.join(format!("bucket-{index}.txt"))
    }

    /// Path of a bucket's pattern file
    pub fn pattern_path(&self, index: usize) -> PathBuf {
        self.output_dir.join(format!("bucket-{index}.pattern"))
    }

    fn write_members(&self, bucket: &Bucket) -> Result<()> {
        let path = self.member_path(bucket.index);
        let file = File::create(&path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        let mut writer = BufWriter::new(file);

        for member in &bucket.members {
            writeln!(writer, "{}", member.class_name)?;
        }
        writer.flush()?;
        Ok(())
    }

    fn write_pattern(&self, bucket: &Bucket) -> Result<()> {
        let path = self.pattern_path(bucket.index);
        let file = File::create(&path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        let mut writer = BufWriter::new(file);

        // every name is followed by `||`, including the last, with no
        // trailing newline
        for member in &bucket.members {
            write!(writer, "{}||", member.class_name)?;
        }
        writer.flush()?;
        Ok(())
    }
}

/// Export per-class totals as CSV
pub fn export_classes_csv(path: &Path, classes: &[ClassRecord]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("failed to create {}", path.display()))?;

    writer.write_record(["class_name", "total_duration_ms"])?;
    for class in classes {
        writer.write_record([
            class.class_name.as_str(),
            &class.total_duration_ms.to_string(),
        ])?;
    }
    writer.flush()?;

    info!("exported {} classes to {}", classes.len(), path.display());
    Ok(())
}
