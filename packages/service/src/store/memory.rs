use std::collections::HashMap;

use parking_lot::RwLock;
use serde::Deserialize;

use super::{ActivityRecord, ProgressStore, StudentRecord};
use crate::error::Result;

/// JSON seed layout accepted by [`InMemoryStore::from_json_str`]
#[derive(Debug, Default, Deserialize)]
struct Fixture {
    #[serde(default)]
    students: Vec<StudentRecord>,
    #[serde(default)]
    activities: Vec<ActivityRecord>,
}

/// Process-local store for tests, demos and desktop mode
#[derive(Debug, Default)]
pub struct InMemoryStore {
    students: RwLock<HashMap<String, StudentRecord>>,
    activities: RwLock<Vec<ActivityRecord>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let fixture: Fixture = serde_json::from_str(json)?;
        let store = Self::new();
        for student in fixture.students {
            store.upsert_student(student);
        }
        for activity in fixture.activities {
            store.record_activity(activity);
        }
        tracing::debug!(
            students = store.students.read().len(),
            activities = store.activities.read().len(),
            "in-memory store seeded"
        );
        Ok(store)
    }

    pub fn upsert_student(&self, student: StudentRecord) {
        self.students.write().insert(student.id.clone(), student);
    }

    pub fn record_activity(&self, activity: ActivityRecord) {
        self.activities.write().push(activity);
    }
}

impl ProgressStore for InMemoryStore {
    async fn student(&self, id: &str) -> Result<Option<StudentRecord>> {
        Ok(self.students.read().get(id).cloned())
    }

    async fn students(&self) -> Result<Vec<StudentRecord>> {
        let mut students: Vec<StudentRecord> = self.students.read().values().cloned().collect();
        students.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        Ok(students)
    }

    async fn activities_for(&self, student_id: &str) -> Result<Vec<ActivityRecord>> {
        Ok(self
            .activities
            .read()
            .iter()
            .filter(|a| a.student_id == student_id)
            .cloned()
            .collect())
    }

    async fn activities(&self) -> Result<Vec<ActivityRecord>> {
        Ok(self.activities.read().clone())
    }
}
