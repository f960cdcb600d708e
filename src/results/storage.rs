//! Plan storage
//!
//! Saves each computed plan as one JSON file under a data directory so past
//! runs can be listed and inspected.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::models::PlanSummary;

/// One persisted planning run
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StoredPlan {
    /// Unique plan ID
    pub id: String,

    /// Timestamp when the plan was computed
    pub created_at: DateTime<Utc>,

    /// Report file the plan was built from
    pub report_file: String,

    /// Master list file used for filtering
    pub master_list_file: String,

    /// Excluded-category marker used for filtering
    pub category: String,

    /// Number of buckets requested
    pub bucket_count: usize,

    /// The computed plan
    pub summary: PlanSummary,
}

impl StoredPlan {
    pub fn new(
        report_file: &Path,
        master_list_file: &Path,
        category: &str,
        summary: PlanSummary,
    ) -> Self {
        Self {
            id: generate_plan_id(),
            created_at: Utc::now(),
            report_file: report_file.display().to_string(),
            master_list_file: master_list_file.display().to_string(),
            category: category.to_string(),
            bucket_count: summary.buckets.len(),
            summary,
        }
    }
}

/// Generate unique plan ID
pub fn generate_plan_id() -> String {
    let timestamp = Utc::now().format("%Y%m%d_%H%M%S");
    let random: u32 = rand::random::<u32>() % 10000;
    format!("{timestamp}_{random:04}")
}

/// Brief plan information for listings
#[derive(Clone, Debug)]
pub struct PlanInfo {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub bucket_count: usize,
    pub distributed_classes: usize,
}

/// Plan storage manager
pub struct PlanStorage {
    base_dir: PathBuf,
}

impl PlanStorage {
    /// Create a storage rooted at an explicit directory
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Create with the default per-user data directory
    pub fn default_dir() -> Result<Self> {
        let base_dir = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("test-balancer")
            .join("plans");
        Ok(Self::new(base_dir))
    }

    fn plan_path(&self, id: &str) -> PathBuf {
        self.base_dir.join(format!("{id}.json"))
    }

    /// Save a plan
    pub fn save(&self, plan: &StoredPlan) -> Result<PathBuf> {
        fs::create_dir_all(&self.base_dir).with_context(|| {
            format!("failed to create plan dir {}", self.base_dir.display())
        })?;

        let path = self.plan_path(&plan.id);
        let file = File::create(&path).context("failed to create plan file")?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, plan).context("failed to write plan")?;

        info!("saved plan {} to {}", plan.id, path.display());
        Ok(path)
    }

    /// Load a plan by ID
    pub fn load(&self, id: &str) -> Result<StoredPlan> {
        let path = self.plan_path(id);
        let file = File::open(&path)
            .with_context(|| format!("failed to open plan {}", path.display()))?;
        let reader = BufReader::new(file);

        let plan: StoredPlan = serde_json::from_reader(reader).context("failed to parse plan")?;
        debug!("loaded plan from {}", path.display());
        Ok(plan)
    }

    fn load_from_path(&self, path: &Path) -> Result<StoredPlan> {
        let file = File::open(path).context("failed to open plan file")?;
        let reader = BufReader::new(file);
        serde_json::from_reader(reader).context("failed to parse plan")
    }

    /// List all stored plans, newest first
    pub fn list(&self) -> Result<Vec<PlanInfo>> {
        if !self.base_dir.exists() {
            return Ok(Vec::new());
        }

        let mut plans = Vec::new();
        for entry in fs::read_dir(&self.base_dir)? {
            let entry = entry?;
            let path = entry.path();

            if path.extension().map(|e| e == "json").unwrap_or(false) {
                match self.load_from_path(&path) {
                    Ok(plan) => plans.push(PlanInfo {
                        id: plan.id,
                        created_at: plan.created_at,
                        bucket_count: plan.bucket_count,
                        distributed_classes: plan.summary.distributed_classes(),
                    }),
                    Err(e) => {
                        debug!("skipping {}: {}", path.display(), e);
                    }
                }
            }
        }

        plans.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(plans)
    }

    /// Load the most recent plan, if any
    pub fn latest(&self) -> Result<Option<StoredPlan>> {
        match self.list()?.first() {
            Some(info) => Ok(Some(self.load(&info.id)?)),
            None => Ok(None),
        }
    }

    /// Delete a plan by ID
    pub fn delete(&self, id: &str) -> Result<()> {
        let path = self.plan_path(id);
        if path.exists() {
            fs::remove_file(&path)?;
            info!("deleted plan {}", path.display());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Bucket, ClassRecord};
    use tempfile::tempdir;

    fn sample_plan() -> StoredPlan {
        let mut bucket = Bucket::new(0);
        bucket.push(ClassRecord::new("org.acme.CartTest", 300));

        let summary = PlanSummary {
            raw_total_ms: 300,
            aggregated_total_ms: 300,
            marked_skip_ms: 0,
            excluded_skip_ms: 0,
            missing_skip_ms: 0,
            buckets: vec![bucket],
        };

        StoredPlan::new(
            Path::new("AllTests.csv"),
            Path::new("KnownTests.txt"),
            "Slow",
            summary,
        )
    }

    #[test]
    fn test_generate_plan_id() {
        let id1 = generate_plan_id();
        let id2 = generate_plan_id();
        assert!(!id1.is_empty());
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempdir().unwrap();
        let storage = PlanStorage::new(dir.path());

        let plan = sample_plan();
        storage.save(&plan).unwrap();
        let loaded = storage.load(&plan.id).unwrap();

        assert_eq!(loaded.id, plan.id);
        assert_eq!(loaded.bucket_count, 1);
        assert_eq!(loaded.summary.raw_total_ms, 300);
    }

    #[test]
    fn test_list_empty_storage() {
        let dir = tempdir().unwrap();
        let storage = PlanStorage::new(dir.path().join("never-created"));
        assert!(storage.list().unwrap().is_empty());
        assert!(storage.latest().unwrap().is_none());
    }

    #[test]
    fn test_latest_returns_a_plan() {
        let dir = tempdir().unwrap();
        let storage = PlanStorage::new(dir.path());

        let plan = sample_plan();
        storage.save(&plan).unwrap();

        let latest = storage.latest().unwrap().unwrap();
        assert_eq!(latest.id, plan.id);
    }

    #[test]
    fn test_delete() {
        let dir = tempdir().unwrap();
        let storage = PlanStorage::new(dir.path());

        let plan = sample_plan();
        storage.save(&plan).unwrap();
        storage.delete(&plan.id).unwrap();

        assert!(storage.list().unwrap().is_empty());
    }
}
