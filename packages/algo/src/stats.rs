//! Dashboard aggregates
//!
//! Summary figures shown next to the timeline on the staff dashboard.

use std::cmp::Reverse;
use std::collections::{BTreeMap, HashMap, HashSet};

use chrono::{Days, NaiveDate, NaiveDateTime};
use serde::Serialize;

use crate::calendar::{month_label, month_of, month_window};
use crate::types::{
    ActivityKind, ActivityStamp, StudentSummary, DAILY_SUBMISSION_DAYS, MAX_JUZ, MIN_JUZ,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JuzBucket {
    /// "Juz N"
    pub juz: String,
    pub students: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedStudent {
    pub id: String,
    pub name: String,
    pub current_juz: i32,
    pub activity_count: usize,
    /// Percentage of the 30 juz memorized
    pub progress: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyActivity {
    pub month: String,
    pub revision: usize,
    pub memorization: usize,
}

/// Counters for the dashboard cards
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TodayActivity {
    pub today_submissions: usize,
    /// Distinct students
    pub students_revising_today: usize,
    /// Distinct students
    pub students_memorizing_today: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailySubmissions {
    /// "%m/%d"
    pub date: String,
    pub submissions: usize,
}

/// One pie slice
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DistributionSlice {
    pub name: String,
    pub value: usize,
    pub color: &'static str,
}

/// Share of the Quran memorized, as a rounded percentage
pub fn progress_percent(current_juz: i32) -> i32 {
    (f64::from(current_juz) / f64::from(MAX_JUZ) * 100.0).round() as i32
}

/// Active students per juz, skipping empty buckets
pub fn juz_distribution(students: &[StudentSummary]) -> Vec<JuzBucket> {
    let mut counts: HashMap<i32, usize> = HashMap::new();
    for student in students.iter().filter(|s| s.is_active) {
        if let Some(juz) = student.current_juz {
            *counts.entry(juz).or_insert(0) += 1;
        }
    }

    (MIN_JUZ..=MAX_JUZ)
        .filter_map(|juz| {
            counts.get(&juz).map(|&students| JuzBucket {
                juz: format!("Juz {juz}"),
                students,
            })
        })
        .collect()
}

/// Active students ranked by juz, then pages, highest first
///
/// Students with a blank juz are left out. Ties keep input order.
pub fn top_students(students: &[StudentSummary], limit: usize) -> Vec<RankedStudent> {
    let mut ranked: Vec<(&StudentSummary, i32)> = students
        .iter()
        .filter(|s| s.is_active)
        .filter_map(|s| s.current_juz.map(|juz| (s, juz)))
        .collect();

    ranked.sort_by_key(|(s, juz)| (Reverse(*juz), Reverse(s.current_pages)));

    ranked
        .into_iter()
        .take(limit)
        .map(|(s, juz)| RankedStudent {
            id: s.id.clone(),
            name: s.name.clone(),
            current_juz: juz,
            activity_count: s.activity_count,
            progress: progress_percent(juz),
        })
        .collect()
}

/// Revision and memorization counts for the `months` months ending with the month of `now`
pub fn monthly_activity(
    activities: &[ActivityStamp],
    now: NaiveDateTime,
    months: u32,
) -> Vec<MonthlyActivity> {
    if months == 0 {
        return Vec::new();
    }

    let mut counts: HashMap<NaiveDate, (usize, usize)> = HashMap::new();
    for activity in activities {
        let entry = counts.entry(month_of(activity.occurred_at)).or_insert((0, 0));
        match activity.kind {
            ActivityKind::Revision => entry.0 += 1,
            ActivityKind::Memorization => entry.1 += 1,
            ActivityKind::Other(_) => {}
        }
    }

    month_window(month_of(now), months - 1, 0)
        .into_iter()
        .map(|month| {
            let (revision, memorization) = counts.get(&month).copied().unwrap_or((0, 0));
            MonthlyActivity {
                month: month_label(month),
                revision,
                memorization,
            }
        })
        .collect()
}

/// Submissions on `today`, and how many distinct students revised or memorized
pub fn today_activity(activities: &[ActivityStamp], today: NaiveDate) -> TodayActivity {
    let mut submissions = 0;
    let mut revising: HashSet<&str> = HashSet::new();
    let mut memorizing: HashSet<&str> = HashSet::new();

    for activity in activities.iter().filter(|a| a.occurred_at.date() == today) {
        submissions += 1;
        match activity.kind {
            ActivityKind::Revision => {
                revising.insert(activity.student_id.as_str());
            }
            ActivityKind::Memorization => {
                memorizing.insert(activity.student_id.as_str());
            }
            ActivityKind::Other(_) => {}
        }
    }

    TodayActivity {
        today_submissions: submissions,
        students_revising_today: revising.len(),
        students_memorizing_today: memorizing.len(),
    }
}

/// Default chart range: the last `DAILY_SUBMISSION_DAYS` days through `today`
pub fn default_submission_range(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let from = today
        .checked_sub_days(Days::new(DAILY_SUBMISSION_DAYS - 1))
        .unwrap_or(today);
    (from, today)
}

/// Submissions per day over `from..=to`; empty when `from` is after `to`
pub fn daily_submissions(
    activities: &[ActivityStamp],
    from: NaiveDate,
    to: NaiveDate,
) -> Vec<DailySubmissions> {
    let mut counts: HashMap<NaiveDate, usize> = HashMap::new();
    for activity in activities {
        *counts.entry(activity.occurred_at.date()).or_insert(0) += 1;
    }

    from.iter_days()
        .take_while(|day| *day <= to)
        .map(|day| DailySubmissions {
            date: day.format("%m/%d").to_string(),
            submissions: counts.get(&day).copied().unwrap_or(0),
        })
        .collect()
}

/// Activities per grade, ungraded ones left out, ordered by grade key
pub fn grade_distribution(activities: &[ActivityStamp]) -> Vec<DistributionSlice> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for grade in activities.iter().filter_map(|a| a.grade.as_deref()) {
        *counts.entry(grade).or_insert(0) += 1;
    }

    counts
        .into_iter()
        .map(|(grade, value)| DistributionSlice {
            name: humanize(grade),
            value,
            color: grade_color(grade),
        })
        .collect()
}

/// Activities per type, ordered by type key
pub fn type_distribution(activities: &[ActivityStamp]) -> Vec<DistributionSlice> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for activity in activities {
        *counts.entry(activity.kind.as_str()).or_insert(0) += 1;
    }

    counts
        .into_iter()
        .map(|(kind, value)| DistributionSlice {
            name: humanize(kind),
            value,
            color: type_color(kind),
        })
        .collect()
}

/// "needs_improvement" -> "Needs improvement"
pub fn humanize(key: &str) -> String {
    let key = key.strip_suffix("_id").unwrap_or(key);
    let words = key.replace('_', " ").trim().to_lowercase();

    let mut chars = words.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn grade_color(grade: &str) -> &'static str {
    match grade {
        "excellent" => "#10b981",
        "good" => "#3b82f6",
        "fair" => "#f59e0b",
        "needs_improvement" => "#ef4444",
        _ => "#6b7280",
    }
}

pub fn type_color(kind: &str) -> &'static str {
    match kind {
        "memorization" => "#3b82f6",
        "revision" => "#10b981",
        _ => "#6b7280",
    }
}
