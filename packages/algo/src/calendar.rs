//! Calendar helpers
//!
//! Months are represented by the `NaiveDate` of their first day. All
//! arithmetic saturates instead of panicking at the edges of chrono's range.

use chrono::{Datelike, Months, NaiveDate, NaiveDateTime, NaiveTime};

/// First day of the month containing `date`
pub fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Month containing the instant `at`
pub fn month_of(at: NaiveDateTime) -> NaiveDate {
    month_start(at.date())
}

/// Shift a month by `delta` calendar months
pub fn shift_months(month: NaiveDate, delta: i32) -> NaiveDate {
    let month = month_start(month);
    let step = Months::new(delta.unsigned_abs());
    let shifted = if delta >= 0 {
        month.checked_add_months(step)
    } else {
        month.checked_sub_months(step)
    };
    shifted.unwrap_or(month)
}

/// Whole calendar months from `from` to `to`; negative when `to` is earlier
pub fn month_distance(from: NaiveDate, to: NaiveDate) -> i32 {
    (to.year() - from.year()) * 12 + to.month() as i32 - from.month() as i32
}

/// Midnight on the first day of `month`
pub fn start_of_month(month: NaiveDate) -> NaiveDateTime {
    month_start(month).and_time(NaiveTime::MIN)
}

/// Last representable instant of `month`
pub fn end_of_month(month: NaiveDate) -> NaiveDateTime {
    let month = month_start(month);
    let next = shift_months(month, 1);
    let last_day = if next == month {
        // no following month to step back from
        NaiveDate::MAX
    } else {
        next.pred_opt().unwrap_or(next)
    };
    let last_tick =
        NaiveTime::from_hms_nano_opt(23, 59, 59, 999_999_999).unwrap_or(NaiveTime::MIN);
    last_day.and_time(last_tick)
}

/// Short English month name ("Jan" .. "Dec")
pub fn month_label(month: NaiveDate) -> String {
    month.format("%b").to_string()
}

/// Consecutive months from `center - before` through `center + after`
pub fn month_window(center: NaiveDate, before: u32, after: u32) -> Vec<NaiveDate> {
    let first = shift_months(center, -(before as i32));
    (0..=(before + after) as i32)
        .map(|offset| shift_months(first, offset))
        .collect()
}
