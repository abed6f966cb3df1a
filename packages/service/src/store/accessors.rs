//! `get_snapshot` / `list_milestones`
//!
//! Unset or unparseable juz and page fields become `0` here, an unreadable
//! join date becomes today, and only memorization activities reach the
//! engine, sorted by time in school-local wall-clock. A memorization logged
//! without a juz is kept as a milestone with no juz.

use chrono::{FixedOffset, NaiveDate};

use hifz_algo::sanitize::{
    coerce_int, coerce_join_date, coerce_juz, coerce_optional_juz, sort_milestones,
};
use hifz_algo::{ActivityKind, ActivityStamp, MilestoneEvent, StudentSummary, SubjectSnapshot};

use super::{ActivityRecord, ProgressStore, StudentRecord};
use crate::error::{ProgressError, Result};

pub async fn get_snapshot<S: ProgressStore>(
    store: &S,
    student_id: &str,
    today: NaiveDate,
) -> Result<SubjectSnapshot> {
    let record = store
        .student(student_id)
        .await?
        .ok_or_else(|| ProgressError::SubjectNotFound(student_id.to_string()))?;
    Ok(snapshot_from_record(&record, today))
}

pub async fn list_milestones<S: ProgressStore>(
    store: &S,
    student_id: &str,
    offset: FixedOffset,
) -> Result<Vec<MilestoneEvent>> {
    let activities = store.activities_for(student_id).await?;
    Ok(milestones_from_activities(&activities, offset))
}

pub fn snapshot_from_record(record: &StudentRecord, today: NaiveDate) -> SubjectSnapshot {
    let raw_juz = record.current_hifz_in_juz.as_deref();
    let current_juz = coerce_juz(raw_juz);

    if current_juz == 0 && raw_juz.is_some_and(|s| !s.trim().is_empty()) {
        tracing::warn!(
            student_id = %record.id,
            raw = raw_juz.unwrap_or_default(),
            "unparseable current juz coerced to 0"
        );
    }

    SubjectSnapshot::new(
        current_juz,
        coerce_int(record.current_hifz_in_pages.as_deref()),
        coerce_join_date(record.date_joined.as_deref(), today),
    )
}

pub fn milestones_from_activities(
    activities: &[ActivityRecord],
    offset: FixedOffset,
) -> Vec<MilestoneEvent> {
    let mut milestones: Vec<MilestoneEvent> = activities
        .iter()
        .filter(|a| ActivityKind::parse(&a.activity_type) == ActivityKind::Memorization)
        .map(|a| MilestoneEvent {
            occurred_at: a.created_at.with_timezone(&offset).naive_local(),
            achieved_juz: a.juz,
        })
        .collect();
    sort_milestones(&mut milestones);
    milestones
}

pub fn summary_from_record(record: &StudentRecord, activity_count: usize) -> StudentSummary {
    StudentSummary {
        id: record.id.clone(),
        name: record.name.clone(),
        is_active: record.is_active(),
        current_juz: coerce_optional_juz(record.current_hifz_in_juz.as_deref()),
        current_pages: coerce_int(record.current_hifz_in_pages.as_deref()),
        activity_count,
    }
}

pub fn stamp_from_activity(activity: &ActivityRecord, offset: FixedOffset) -> ActivityStamp {
    ActivityStamp {
        student_id: activity.student_id.clone(),
        kind: ActivityKind::parse(&activity.activity_type),
        grade: activity.activity_grade.clone(),
        occurred_at: activity.created_at.with_timezone(&offset).naive_local(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Offset, TimeZone, Utc};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 14).unwrap()
    }

    fn record(juz: Option<&str>, pages: Option<&str>, joined: Option<&str>) -> StudentRecord {
        StudentRecord {
            id: "s-1".to_string(),
            name: "Aisyah".to_string(),
            status: "active".to_string(),
            current_hifz_in_juz: juz.map(str::to_string),
            current_hifz_in_pages: pages.map(str::to_string),
            date_joined: joined.map(str::to_string),
        }
    }

    fn activity(kind: &str, juz: Option<i32>, day: u32, hour: u32) -> ActivityRecord {
        ActivityRecord {
            id: format!("a-{kind}-{day}-{hour}"),
            student_id: "s-1".to_string(),
            activity_type: kind.to_string(),
            juz,
            activity_grade: Some("good".to_string()),
            created_at: Utc.with_ymd_and_hms(2026, 8, day, hour, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_snapshot_coerces_unset_fields() {
        let snapshot = snapshot_from_record(&record(None, None, None), today());
        assert_eq!(snapshot.current_juz, 0);
        assert_eq!(snapshot.current_page, 0);
        assert_eq!(snapshot.join_date, today());
    }

    #[test]
    fn test_snapshot_coerces_garbage_to_zero() {
        let record = record(Some("juz amma"), Some("n/a"), Some("soon"));
        let snapshot = snapshot_from_record(&record, today());
        assert_eq!(snapshot.current_juz, 0);
        assert_eq!(snapshot.current_page, 0);
        assert_eq!(snapshot.join_date, today());
    }

    #[test]
    fn test_snapshot_parses_valid_fields() {
        let record = record(Some("12"), Some("7"), Some("2025-01-15"));
        let snapshot = snapshot_from_record(&record, today());
        assert_eq!(snapshot.current_juz, 12);
        assert_eq!(snapshot.current_page, 7);
        assert_eq!(snapshot.join_date, NaiveDate::from_ymd_opt(2025, 1, 15).unwrap());
    }

    #[test]
    fn test_milestones_keep_memorization_only() {
        let activities = vec![
            activity("revision", Some(9), 3, 8),
            activity("memorization", Some(5), 20, 8),
            activity("memorization", None, 21, 8),
            activity("Memorization", Some(4), 2, 8),
        ];

        let milestones = milestones_from_activities(&activities, Utc.fix());

        let juz: Vec<Option<i32>> = milestones.iter().map(|m| m.achieved_juz).collect();
        assert_eq!(juz, vec![Some(4), Some(5), None]);
    }

    #[test]
    fn test_stamp_carries_student_and_grade() {
        let stamp = stamp_from_activity(&activity("Revision", None, 4, 9), Utc.fix());
        assert_eq!(stamp.student_id, "s-1");
        assert_eq!(stamp.kind, ActivityKind::Revision);
        assert_eq!(stamp.grade.as_deref(), Some("good"));
    }

    #[test]
    fn test_milestones_use_school_local_time() {
        let offset = FixedOffset::east_opt(8 * 3600).unwrap();
        let activities = vec![ActivityRecord {
            created_at: Utc.with_ymd_and_hms(2026, 8, 31, 18, 0, 0).unwrap(),
            ..activity("memorization", Some(6), 1, 0)
        }];

        let milestones = milestones_from_activities(&activities, offset);

        assert_eq!(
            milestones[0].occurred_at,
            NaiveDate::from_ymd_opt(2026, 9, 1).unwrap().and_hms_opt(2, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_summary_keeps_blank_juz_as_none() {
        let summary = summary_from_record(&record(Some(""), Some("3"), None), 4);
        assert_eq!(summary.current_juz, None);
        assert_eq!(summary.current_pages, 3);
        assert_eq!(summary.activity_count, 4);
        assert!(summary.is_active);
    }
}
