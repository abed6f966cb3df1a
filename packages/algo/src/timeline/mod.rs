//! Progress timeline
//!
//! Builds the 7-point monthly series shown on a student's page: three
//! reconstructed months, the current month, and three projected months.
//!
//! Each month is dispatched by its position relative to the evaluation month:
//! - historical: [`watermark::reconstruct`]
//! - current: the snapshot's juz
//! - future: [`forecast::forecast`] with the rate from [`rate::estimate_rate`]
//!
//! Every value is clamped to `[MIN_JUZ, MAX_JUZ]` before it is emitted.

pub mod forecast;
pub mod rate;
pub mod watermark;

use std::cmp::Ordering;

use chrono::{NaiveDate, NaiveDateTime};
use rayon::prelude::*;

use crate::calendar::{month_label, month_of, month_window};
use crate::sanitize::clamp_juz;
use crate::types::{
    GrowthRate, MilestoneEvent, MonthKind, MonthPoint, SubjectSnapshot, Timeline, MONTHS_AFTER,
    MONTHS_BEFORE,
};

/// One subject's inputs for batch building
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimelineInput {
    pub snapshot: SubjectSnapshot,
    /// Memorization milestones, ascending by `occurred_at`
    pub milestones: Vec<MilestoneEvent>,
}

/// Build the timeline for one subject as of `now`
pub fn build_timeline(
    snapshot: &SubjectSnapshot,
    milestones: &[MilestoneEvent],
    now: NaiveDateTime,
) -> Timeline {
    let current_month = month_of(now);
    let months = month_window(current_month, MONTHS_BEFORE, MONTHS_AFTER);

    // No log at all: flat line. Past months are still reported as not
    // projected even though nothing supports them.
    if milestones.is_empty() {
        let points = months
            .into_iter()
            .map(|month| {
                let kind = classify(month, current_month);
                make_point(month, kind, snapshot.current_juz, kind == MonthKind::Future)
            })
            .collect();
        return Timeline::new(points, GrowthRate::Hold);
    }

    let rate = rate::estimate_rate(snapshot, milestones, current_month);

    let points = months
        .into_iter()
        .map(|month| {
            let kind = classify(month, current_month);
            let (value, is_projected) = match kind {
                MonthKind::Historical => (watermark::reconstruct(month, milestones), false),
                MonthKind::Current => (snapshot.current_juz, false),
                MonthKind::Future => (
                    forecast::forecast(month, current_month, snapshot, rate),
                    true,
                ),
            };
            make_point(month, kind, value, is_projected)
        })
        .collect();

    Timeline::new(points, rate)
}

/// Build timelines for independent subjects in parallel, sharing one `now`
///
/// Output order matches input order.
pub fn build_timelines(inputs: &[TimelineInput], now: NaiveDateTime) -> Vec<Timeline> {
    inputs
        .par_iter()
        .map(|input| build_timeline(&input.snapshot, &input.milestones, now))
        .collect()
}

fn classify(month: NaiveDate, current_month: NaiveDate) -> MonthKind {
    match month.cmp(&current_month) {
        Ordering::Less => MonthKind::Historical,
        Ordering::Equal => MonthKind::Current,
        Ordering::Greater => MonthKind::Future,
    }
}

fn make_point(month: NaiveDate, kind: MonthKind, value: i32, is_projected: bool) -> MonthPoint {
    MonthPoint {
        label: month_label(month),
        completed_juz: clamp_juz(value),
        is_projected,
        month,
        kind,
    }
}
