use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use hifz_algo::{
    daily_submissions, default_submission_range, juz_distribution, monthly_activity,
    today_activity, top_students, DailySubmissions, JuzBucket, MonthlyActivity, RankedStudent,
    StudentSummary, MONTHLY_ACTIVITY_MONTHS, TOP_STUDENTS_LIMIT,
};

use crate::config::Config;
use crate::error::Result;
use crate::store::accessors::{stamp_from_activity, summary_from_record};
use crate::store::ProgressStore;

/// Dashboard cards
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub today_submissions: usize,
    pub students_revising_today: usize,
    pub students_memorizing_today: usize,
    pub total_active_students: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardOverview {
    pub stats: DashboardStats,
    pub top_students: Vec<RankedStudent>,
    pub total_activities_count: usize,
    pub daily_submissions: Vec<DailySubmissions>,
    pub juz_distribution: Vec<JuzBucket>,
    pub monthly_activity: Vec<MonthlyActivity>,
}

pub struct DashboardService<S> {
    store: Arc<S>,
    config: Config,
}

impl<S: ProgressStore> DashboardService<S> {
    pub fn new(store: Arc<S>, config: Config) -> Self {
        Self { store, config }
    }

    /// Overview with the daily submissions chart over the last week
    pub async fn overview(&self, now: DateTime<Utc>) -> Result<DashboardOverview> {
        self.overview_with_range(now, None, None).await
    }

    /// Overview with the daily submissions chart over `from..=to`
    ///
    /// A missing bound defaults to the matching end of the last-week range.
    pub async fn overview_with_range(
        &self,
        now: DateTime<Utc>,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Result<DashboardOverview> {
        let (students, activities) =
            tokio::try_join!(self.store.students(), self.store.activities())?;

        let mut activity_counts: HashMap<&str, usize> = HashMap::new();
        for activity in &activities {
            *activity_counts.entry(activity.student_id.as_str()).or_insert(0) += 1;
        }

        let summaries: Vec<StudentSummary> = students
            .iter()
            .map(|s| {
                let count = activity_counts.get(s.id.as_str()).copied().unwrap_or(0);
                summary_from_record(s, count)
            })
            .collect();

        let offset = self.config.school_offset;
        let stamps: Vec<_> = activities
            .iter()
            .map(|a| stamp_from_activity(a, offset))
            .collect();

        let local_now = self.config.local_time(now);
        let today = local_now.date();
        let (default_from, default_to) = default_submission_range(today);
        let from = from.unwrap_or(default_from);
        let to = to.unwrap_or(default_to);

        let counters = today_activity(&stamps, today);
        let stats = DashboardStats {
            today_submissions: counters.today_submissions,
            students_revising_today: counters.students_revising_today,
            students_memorizing_today: counters.students_memorizing_today,
            total_active_students: summaries.iter().filter(|s| s.is_active).count(),
        };

        let overview = DashboardOverview {
            stats,
            top_students: top_students(&summaries, TOP_STUDENTS_LIMIT),
            total_activities_count: activities.len(),
            daily_submissions: daily_submissions(&stamps, from, to),
            juz_distribution: juz_distribution(&summaries),
            monthly_activity: monthly_activity(&stamps, local_now, MONTHLY_ACTIVITY_MONTHS),
        };

        tracing::debug!(
            students = students.len(),
            activities = activities.len(),
            active = overview.stats.total_active_students,
            %from,
            %to,
            "dashboard overview built"
        );

        Ok(overview)
    }
}
