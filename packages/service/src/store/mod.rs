//! Data-access boundary
//!
//! Raw student and activity rows come in loosely typed, the way the records
//! table stores them. [`accessors`] turns them into the engine's inputs and is
//! the only place where coercion happens.

pub mod accessors;
pub mod memory;

use std::future::Future;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;

pub const STATUS_ACTIVE: &str = "active";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub current_hifz_in_juz: Option<String>,
    #[serde(default)]
    pub current_hifz_in_pages: Option<String>,
    /// `YYYY-MM-DD`
    #[serde(default)]
    pub date_joined: Option<String>,
}

impl StudentRecord {
    pub fn is_active(&self) -> bool {
        self.status == STATUS_ACTIVE
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityRecord {
    pub id: String,
    pub student_id: String,
    /// "memorization", "revision", ...
    pub activity_type: String,
    #[serde(default)]
    pub juz: Option<i32>,
    /// "excellent", "good", "fair", "needs_improvement"
    #[serde(default)]
    pub activity_grade: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Read side of the student records store
pub trait ProgressStore: Send + Sync {
    fn student(&self, id: &str) -> impl Future<Output = Result<Option<StudentRecord>>> + Send;

    fn students(&self) -> impl Future<Output = Result<Vec<StudentRecord>>> + Send;

    /// Every activity of one student, any order
    fn activities_for(
        &self,
        student_id: &str,
    ) -> impl Future<Output = Result<Vec<ActivityRecord>>> + Send;

    /// Every activity in the store, any order
    fn activities(&self) -> impl Future<Output = Result<Vec<ActivityRecord>>> + Send;
}
