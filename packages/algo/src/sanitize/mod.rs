//! Data Sanitization
//!
//! Bounds enforcement and boundary coercion.
//!
//! Functions:
//! - Juz and rate clamping
//! - Lenient integer coercion for loosely typed upstream fields
//! - Milestone ordering

use chrono::NaiveDate;

use crate::types::{MilestoneEvent, MAX_JUZ, MAX_RATE, MIN_JUZ, MIN_RATE};

/// Clamp a juz value into `[MIN_JUZ, MAX_JUZ]`
pub fn clamp_juz(value: i32) -> i32 {
    value.clamp(MIN_JUZ, MAX_JUZ)
}

/// Clamp a raw growth rate into `[MIN_RATE, MAX_RATE]`
///
/// The floor applies to zero and negative rates as well. NaN maps to the floor.
pub fn clamp_rate(raw: f64) -> f64 {
    if raw.is_nan() {
        return MIN_RATE;
    }
    raw.clamp(MIN_RATE, MAX_RATE)
}

/// Round half away from zero to the nearest juz
pub fn round_juz(value: f64) -> i32 {
    if !value.is_finite() {
        return if value == f64::INFINITY { MAX_JUZ } else { 0 };
    }
    // `as` saturates at the i32 bounds
    value.round() as i32
}

/// Parse the leading integer of a loosely typed field
///
/// Leading whitespace and an optional sign are accepted. Parsing stops at the
/// first non-digit. Missing, blank or digit-less input yields `0`.
pub fn coerce_int(raw: Option<&str>) -> i32 {
    let Some(raw) = raw else { return 0 };
    let s = raw.trim_start();

    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut value: i64 = 0;
    let mut seen = false;
    for b in digits.bytes() {
        if !b.is_ascii_digit() {
            break;
        }
        seen = true;
        value = (value * 10 + i64::from(b - b'0')).min(i64::from(i32::MAX) + 1);
    }

    if !seen {
        return 0;
    }
    let value = if negative { -value } else { value };
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// Current juz as read at the data-access boundary; unset or unparseable is `0`
pub fn coerce_juz(raw: Option<&str>) -> i32 {
    coerce_int(raw)
}

/// Like [`coerce_juz`], but keeps blank fields distinguishable
pub fn coerce_optional_juz(raw: Option<&str>) -> Option<i32> {
    match raw {
        Some(s) if !s.trim().is_empty() => Some(coerce_int(Some(s))),
        _ => None,
    }
}

/// Parse a `YYYY-MM-DD` join date, falling back to `today`
pub fn coerce_join_date(raw: Option<&str>, today: NaiveDate) -> NaiveDate {
    raw.and_then(|s| NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok())
        .unwrap_or(today)
}

/// Whether milestones are out of `occurred_at` order
pub fn has_unordered_milestones(milestones: &[MilestoneEvent]) -> bool {
    milestones
        .windows(2)
        .any(|pair| pair[0].occurred_at > pair[1].occurred_at)
}

/// Stable ascending sort by `occurred_at`
pub fn sort_milestones(milestones: &mut [MilestoneEvent]) {
    if has_unordered_milestones(milestones) {
        milestones.sort_by_key(|m| m.occurred_at);
    }
}
