//! Historical reconstruction
//!
//! A past month's value is the best juz reached by the end of that month, not
//! the latest one recorded. Progress therefore never appears to regress when a
//! later event reports a lower juz.

use chrono::NaiveDate;

use crate::calendar::{end_of_month, month_of};
use crate::types::{MilestoneEvent, BASELINE_JUZ};

/// Month of the earliest milestone, if any
pub fn first_milestone_month(milestones: &[MilestoneEvent]) -> Option<NaiveDate> {
    milestones.iter().map(|m| m.occurred_at).min().map(month_of)
}

/// High-water mark of `achieved_juz` as of the end of `month`
///
/// Months before the first milestone's month start at [`BASELINE_JUZ`], as do
/// months whose milestones so far carry no juz.
pub fn reconstruct(month: NaiveDate, milestones: &[MilestoneEvent]) -> i32 {
    let Some(first_month) = first_milestone_month(milestones) else {
        return BASELINE_JUZ;
    };
    if month < first_month {
        return BASELINE_JUZ;
    }

    let cutoff = end_of_month(month);
    milestones
        .iter()
        .filter(|m| m.occurred_at <= cutoff)
        .filter_map(|m| m.achieved_juz)
        .max()
        .unwrap_or(BASELINE_JUZ)
}
