use std::sync::Arc;

use chrono::{DateTime, Utc};
use futures::future::try_join_all;
use serde::Serialize;

use hifz_algo::{
    build_timeline, build_timelines, grade_distribution, monthly_activity, progress_percent,
    type_distribution, DistributionSlice, MonthlyActivity, Timeline, TimelineInput,
    MONTHLY_ACTIVITY_MONTHS,
};

use crate::config::Config;
use crate::error::{ProgressError, Result};
use crate::store::accessors::{
    get_snapshot, list_milestones, milestones_from_activities, snapshot_from_record,
    stamp_from_activity,
};
use crate::store::ProgressStore;

/// Everything the student page charts
#[derive(Debug, Clone, Serialize)]
pub struct StudentProgress {
    pub student_id: String,
    pub current_juz: i32,
    /// Percentage of the Quran memorized
    pub progress: i32,
    pub total_activities: usize,
    pub monthly_progress: Timeline,
    pub grade_distribution: Vec<DistributionSlice>,
    pub type_distribution: Vec<DistributionSlice>,
    pub monthly_activities: Vec<MonthlyActivity>,
}

pub struct ProgressService<S> {
    store: Arc<S>,
    config: Config,
}

impl<S: ProgressStore> ProgressService<S> {
    pub fn new(store: Arc<S>, config: Config) -> Self {
        Self { store, config }
    }

    /// 7-month progress timeline for one student as of `now`
    pub async fn monthly_progress(&self, student_id: &str, now: DateTime<Utc>) -> Result<Timeline> {
        let input = self.load_input(student_id, now).await?;
        let local_now = self.config.local_time(now);
        let timeline = build_timeline(&input.snapshot, &input.milestones, local_now);

        tracing::debug!(
            student_id,
            milestones = input.milestones.len(),
            rate = timeline.rate().per_month(),
            "monthly progress built"
        );

        Ok(timeline)
    }

    /// Timelines for several students, in input order
    ///
    /// Inputs are fetched concurrently; the timelines are built off the async
    /// runtime. The first accessor failure aborts the batch.
    pub async fn monthly_progress_many(
        &self,
        student_ids: &[String],
        now: DateTime<Utc>,
    ) -> Result<Vec<Timeline>> {
        let inputs = try_join_all(student_ids.iter().map(|id| self.load_input(id, now))).await?;
        let local_now = self.config.local_time(now);

        let timelines =
            tokio::task::spawn_blocking(move || build_timelines(&inputs, local_now)).await?;

        tracing::debug!(students = timelines.len(), "monthly progress batch built");
        Ok(timelines)
    }

    /// Timeline plus the summary figures of the student page
    pub async fn student_progress(
        &self,
        student_id: &str,
        now: DateTime<Utc>,
    ) -> Result<StudentProgress> {
        let (record, activities) = tokio::try_join!(
            self.store.student(student_id),
            self.store.activities_for(student_id),
        )?;
        let record = record.ok_or_else(|| ProgressError::SubjectNotFound(student_id.to_string()))?;

        let offset = self.config.school_offset;
        let local_now = self.config.local_time(now);

        let snapshot = snapshot_from_record(&record, local_now.date());
        let milestones = milestones_from_activities(&activities, offset);
        let stamps: Vec<_> = activities
            .iter()
            .map(|a| stamp_from_activity(a, offset))
            .collect();

        let timeline = build_timeline(&snapshot, &milestones, local_now);

        Ok(StudentProgress {
            student_id: record.id,
            current_juz: snapshot.current_juz,
            progress: progress_percent(snapshot.current_juz),
            total_activities: activities.len(),
            monthly_progress: timeline,
            grade_distribution: grade_distribution(&stamps),
            type_distribution: type_distribution(&stamps),
            monthly_activities: monthly_activity(&stamps, local_now, MONTHLY_ACTIVITY_MONTHS),
        })
    }

    async fn load_input(&self, student_id: &str, now: DateTime<Utc>) -> Result<TimelineInput> {
        let store = self.store.as_ref();
        let (snapshot, milestones) = tokio::try_join!(
            get_snapshot(store, student_id, self.config.today(now)),
            list_milestones(store, student_id, self.config.school_offset),
        )?;
        Ok(TimelineInput {
            snapshot,
            milestones,
        })
    }
}
