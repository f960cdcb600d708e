//! Plan storage and retrieval
//!
//! Provides persistent storage for computed plans in JSON format.

#![allow(dead_code)]

mod storage;

pub use storage::{generate_plan_id, PlanInfo, PlanStorage, StoredPlan};
