//! Recent growth rate
//!
//! The window covers `[start(C - RATE_WINDOW_MONTHS), start(C)]`, both ends
//! inclusive, where `C` is the current month. The starting point of recent
//! growth is the smallest juz seen in the window, not the oldest event.
//! Milestones without a juz still make the window non-empty.

use chrono::{NaiveDate, NaiveDateTime};

use crate::calendar::{month_distance, shift_months, start_of_month};
use crate::sanitize::clamp_rate;
use crate::types::{GrowthRate, MilestoneEvent, SubjectSnapshot, RATE_WINDOW_MONTHS};

/// Inclusive instant bounds of the trailing window for `current_month`
pub fn rate_window(current_month: NaiveDate) -> (NaiveDateTime, NaiveDateTime) {
    let window_start = shift_months(current_month, -(RATE_WINDOW_MONTHS as i32));
    (start_of_month(window_start), start_of_month(current_month))
}

/// Milestones that fall inside the trailing window
pub fn window_milestones(
    milestones: &[MilestoneEvent],
    current_month: NaiveDate,
) -> impl Iterator<Item = &MilestoneEvent> {
    let (from, to) = rate_window(current_month);
    milestones
        .iter()
        .filter(move |m| m.occurred_at >= from && m.occurred_at <= to)
}

/// Bounded juz-per-month rate, or [`GrowthRate::Hold`] with an empty window
pub fn estimate_rate(
    snapshot: &SubjectSnapshot,
    milestones: &[MilestoneEvent],
    current_month: NaiveDate,
) -> GrowthRate {
    let mut recent = window_milestones(milestones, current_month).peekable();
    if recent.peek().is_none() {
        return GrowthRate::Hold;
    }
    // no juz recorded in the window: zero growth
    let earliest_recent_juz = recent
        .filter_map(|m| m.achieved_juz)
        .min()
        .unwrap_or(snapshot.current_juz);

    let window_start = shift_months(current_month, -(RATE_WINDOW_MONTHS as i32));
    let months_span = month_distance(window_start, current_month).max(1);

    let growth = i64::from(snapshot.current_juz) - i64::from(earliest_recent_juz);
    let raw_rate = growth as f64 / f64::from(months_span);

    GrowthRate::PerMonth(clamp_rate(raw_rate))
}
