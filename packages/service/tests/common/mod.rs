#![allow(dead_code)]

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};

use hifz_service::InMemoryStore;

pub const FIXTURE: &str = r#"{
    "students": [
        { "id": "s-steady", "name": "Bilal", "status": "active",
          "current_hifz_in_juz": "12", "current_hifz_in_pages": "3", "date_joined": "2025-09-01" },
        { "id": "s-flat", "name": "Aminah", "status": "active",
          "current_hifz_in_juz": "10", "current_hifz_in_pages": "15" },
        { "id": "s-garbled", "name": "Yusuf", "status": "active",
          "current_hifz_in_juz": "juz amma" },
        { "id": "s-left", "name": "Khadijah", "status": "inactive",
          "current_hifz_in_juz": "20" },
        { "id": "s-unlogged", "name": "Hafsah", "status": "active",
          "current_hifz_in_juz": "10" }
    ],
    "activities": [
        { "id": "a-1", "student_id": "s-steady", "activity_type": "memorization", "juz": 8,
          "activity_grade": "good", "created_at": "2026-05-10T14:00:00Z" },
        { "id": "a-2", "student_id": "s-steady", "activity_type": "memorization", "juz": 10,
          "activity_grade": "excellent", "created_at": "2026-08-10T14:00:00Z" },
        { "id": "a-3", "student_id": "s-steady", "activity_type": "memorization", "juz": 11,
          "activity_grade": "good", "created_at": "2026-09-10T14:00:00Z" },
        { "id": "a-4", "student_id": "s-steady", "activity_type": "revision",
          "created_at": "2026-09-05T09:00:00Z" },
        { "id": "a-5", "student_id": "s-steady", "activity_type": "revision", "juz": 11,
          "created_at": "2026-10-02T09:00:00Z" },
        { "id": "a-6", "student_id": "s-left", "activity_type": "revision",
          "created_at": "2026-10-03T09:00:00Z" },
        { "id": "a-7", "student_id": "s-unlogged", "activity_type": "memorization",
          "created_at": "2026-08-12T14:00:00Z" },
        { "id": "a-8", "student_id": "s-flat", "activity_type": "revision",
          "activity_grade": "excellent", "created_at": "2026-10-14T08:00:00Z" },
        { "id": "a-9", "student_id": "s-flat", "activity_type": "revision",
          "created_at": "2026-10-14T09:00:00Z" },
        { "id": "a-10", "student_id": "s-steady", "activity_type": "memorization", "juz": 12,
          "activity_grade": "good", "created_at": "2026-10-14T07:00:00Z" }
    ]
}"#;

pub fn seeded_store() -> Arc<InMemoryStore> {
    Arc::new(InMemoryStore::from_json_str(FIXTURE).unwrap())
}

pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 14, 11, 20, 0).unwrap()
}
