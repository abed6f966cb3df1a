//! Common Types and Constants
//!
//! Shared data structures used across all algorithm modules.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize, Serializer};

// ==================== Constants ====================

/// Lowest juz value a timeline point may carry
pub const MIN_JUZ: i32 = 1;

/// Number of juz in the Quran; highest value a timeline point may carry
pub const MAX_JUZ: i32 = 30;

/// Assumed progress before the first recorded milestone
pub const BASELINE_JUZ: i32 = 1;

/// Length of the trailing window used for rate estimation, in months
pub const RATE_WINDOW_MONTHS: u32 = 3;

/// Minimum projected growth, juz per month
pub const MIN_RATE: f64 = 0.5;

/// Maximum projected growth, juz per month
pub const MAX_RATE: f64 = 2.0;

/// Months shown before the current month
pub const MONTHS_BEFORE: u32 = 3;

/// Months shown after the current month
pub const MONTHS_AFTER: u32 = 3;

/// Points in every timeline
pub const TIMELINE_LEN: usize = (MONTHS_BEFORE + 1 + MONTHS_AFTER) as usize;

/// Default size of the top students ranking
pub const TOP_STUDENTS_LIMIT: usize = 10;

/// Months covered by the monthly activity chart (current month included)
pub const MONTHLY_ACTIVITY_MONTHS: u32 = 6;

/// Days in the default daily submissions chart (today included)
pub const DAILY_SUBMISSION_DAYS: u64 = 7;

// ==================== Engine Inputs ====================

/// One recorded memorization milestone
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MilestoneEvent {
    /// Local wall-clock time the milestone was recorded
    pub occurred_at: NaiveDateTime,
    /// Juz reached; `None` when the activity was logged without one
    pub achieved_juz: Option<i32>,
}

impl MilestoneEvent {
    pub fn new(occurred_at: NaiveDateTime, achieved_juz: i32) -> Self {
        Self {
            occurred_at,
            achieved_juz: Some(achieved_juz),
        }
    }

    /// Memorization logged without a juz
    pub fn unrecorded(occurred_at: NaiveDateTime) -> Self {
        Self {
            occurred_at,
            achieved_juz: None,
        }
    }
}

/// Live progress state of a subject, independent of the event log
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectSnapshot {
    /// Current juz; 0 when unset upstream
    pub current_juz: i32,
    /// Current page within the juz
    pub current_page: i32,
    pub join_date: NaiveDate,
}

impl SubjectSnapshot {
    pub fn new(current_juz: i32, current_page: i32, join_date: NaiveDate) -> Self {
        Self {
            current_juz,
            current_page,
            join_date,
        }
    }
}

// ==================== Timeline Types ====================

/// Position of a month relative to the evaluation month
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MonthKind {
    Historical,
    Current,
    Future,
}

/// Growth rate used for projection
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum GrowthRate {
    /// No milestone in the trailing window; future months stay flat
    Hold,
    /// Juz per month, always within `[MIN_RATE, MAX_RATE]`
    PerMonth(f64),
}

impl GrowthRate {
    /// Numeric rate, `0.0` for [`GrowthRate::Hold`]
    pub fn per_month(&self) -> f64 {
        match self {
            GrowthRate::Hold => 0.0,
            GrowthRate::PerMonth(rate) => *rate,
        }
    }

    pub fn is_hold(&self) -> bool {
        matches!(self, GrowthRate::Hold)
    }
}

/// One derived point of the timeline
///
/// Serializes as `{ "month", "completed", "is_projected" }`, in that order.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MonthPoint {
    #[serde(rename = "month")]
    pub label: String,
    #[serde(rename = "completed")]
    pub completed_juz: i32,
    pub is_projected: bool,
    /// First day of the month this point describes
    #[serde(skip)]
    pub month: NaiveDate,
    #[serde(skip)]
    pub kind: MonthKind,
}

/// Ordered monthly series centred on the evaluation month
#[derive(Clone, Debug, PartialEq)]
pub struct Timeline {
    points: Vec<MonthPoint>,
    rate: GrowthRate,
}

impl Timeline {
    pub(crate) fn new(points: Vec<MonthPoint>, rate: GrowthRate) -> Self {
        Self { points, rate }
    }

    pub fn points(&self) -> &[MonthPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Rate that produced the future points
    pub fn rate(&self) -> GrowthRate {
        self.rate
    }

    /// Point for the evaluation month
    pub fn current(&self) -> Option<&MonthPoint> {
        self.points.iter().find(|p| p.kind == MonthKind::Current)
    }

    pub fn historical(&self) -> impl Iterator<Item = &MonthPoint> {
        self.points
            .iter()
            .filter(|p| p.kind == MonthKind::Historical)
    }

    pub fn future(&self) -> impl Iterator<Item = &MonthPoint> {
        self.points.iter().filter(|p| p.kind == MonthKind::Future)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MonthPoint> {
        self.points.iter()
    }
}

impl<'a> IntoIterator for &'a Timeline {
    type Item = &'a MonthPoint;
    type IntoIter = std::slice::Iter<'a, MonthPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// The chart consumes the bare list of points
impl Serialize for Timeline {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.points.serialize(serializer)
    }
}

// ==================== Dashboard Types ====================

/// Activity category as recorded by teachers
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ActivityKind {
    Memorization,
    Revision,
    Other(String),
}

impl ActivityKind {
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "memorization" => ActivityKind::Memorization,
            "revision" => ActivityKind::Revision,
            other => ActivityKind::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ActivityKind::Memorization => "memorization",
            ActivityKind::Revision => "revision",
            ActivityKind::Other(other) => other,
        }
    }
}

/// Activity view used by the activity charts and counters
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActivityStamp {
    pub student_id: String,
    pub kind: ActivityKind,
    /// "excellent", "good", "fair", "needs_improvement", ...
    pub grade: Option<String>,
    /// Local wall-clock time
    pub occurred_at: NaiveDateTime,
}

/// Student view used by dashboard aggregates
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StudentSummary {
    pub id: String,
    pub name: String,
    pub is_active: bool,
    /// Coerced current juz; `None` when the field is blank upstream
    pub current_juz: Option<i32>,
    pub current_pages: i32,
    pub activity_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_point() -> MonthPoint {
        MonthPoint {
            label: "Oct".to_string(),
            completed_juz: 12,
            is_projected: false,
            month: NaiveDate::from_ymd_opt(2026, 10, 1).unwrap(),
            kind: MonthKind::Current,
        }
    }

    #[test]
    fn test_constants() {
        assert_eq!(TIMELINE_LEN, 7);
        assert_eq!(MIN_JUZ, 1);
        assert_eq!(MAX_JUZ, 30);
        assert!(MIN_RATE < MAX_RATE);
        assert_eq!(RATE_WINDOW_MONTHS, 3);
    }

    #[test]
    fn test_month_point_serializes_contract_fields_in_order() {
        let json = serde_json::to_string(&sample_point()).unwrap();
        assert_eq!(json, r#"{"month":"Oct","completed":12,"is_projected":false}"#);
    }

    #[test]
    fn test_timeline_serializes_as_plain_list() {
        let timeline = Timeline::new(vec![sample_point()], GrowthRate::Hold);
        let value = serde_json::to_value(&timeline).unwrap();
        assert!(value.is_array());
        assert_eq!(value[0]["completed"], 12);
    }

    #[test]
    fn test_growth_rate_per_month() {
        assert_eq!(GrowthRate::Hold.per_month(), 0.0);
        assert!(GrowthRate::Hold.is_hold());
        assert_eq!(GrowthRate::PerMonth(1.5).per_month(), 1.5);
        assert!(!GrowthRate::PerMonth(1.5).is_hold());
    }

    #[test]
    fn test_activity_kind_parse() {
        assert_eq!(ActivityKind::parse("memorization"), ActivityKind::Memorization);
        assert_eq!(ActivityKind::parse(" Revision "), ActivityKind::Revision);
        assert_eq!(
            ActivityKind::parse("tasmi"),
            ActivityKind::Other("tasmi".to_string())
        );
        assert_eq!(ActivityKind::parse("Memorization").as_str(), "memorization");
        assert_eq!(ActivityKind::parse("Tasmi").as_str(), "tasmi");
    }

    #[test]
    fn test_milestone_event_json_uses_naive_datetime() {
        let at = NaiveDate::from_ymd_opt(2026, 7, 3)
            .unwrap()
            .and_hms_opt(8, 30, 0)
            .unwrap();
        let event = MilestoneEvent::new(at, 7);
        let json = serde_json::to_value(event).unwrap();
        assert_eq!(json["achieved_juz"], 7);
        assert_eq!(json["occurred_at"], "2026-07-03T08:30:00");

        let json = serde_json::to_value(MilestoneEvent::unrecorded(at)).unwrap();
        assert!(json["achieved_juz"].is_null());
    }
}
