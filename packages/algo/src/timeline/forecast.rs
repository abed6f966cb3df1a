//! Forward projection
//!
//! `round(current_juz + months_forward * rate)`, or flat at the current juz
//! when the rate is [`GrowthRate::Hold`]. Values are returned unclamped.

use chrono::NaiveDate;

use crate::calendar::month_distance;
use crate::sanitize::round_juz;
use crate::types::{GrowthRate, SubjectSnapshot};

pub fn forecast(
    month: NaiveDate,
    current_month: NaiveDate,
    snapshot: &SubjectSnapshot,
    rate: GrowthRate,
) -> i32 {
    match rate {
        GrowthRate::Hold => snapshot.current_juz,
        GrowthRate::PerMonth(per_month) => {
            let months_forward = month_distance(current_month, month);
            round_juz(f64::from(snapshot.current_juz) + f64::from(months_forward) * per_month)
        }
    }
}
