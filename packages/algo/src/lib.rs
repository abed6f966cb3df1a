//! # hifz-algo - hifz progress core algorithms
//!
//! Pure Rust building blocks behind the student progress dashboard:
//!
//! - **Timeline** - a fixed 7-month series around the current month, blending
//!   reconstructed history with a bounded-rate forecast
//! - **Watermark** - historical reconstruction via running maximum
//! - **Rate** - bounded growth rate from the trailing milestone window
//! - **Stats** - dashboard aggregates (counters, rankings, distributions, activity charts)
//!
//! ## Design
//!
//! - **Pure** - no I/O, no global state; every call is `(snapshot, milestones, now) -> Timeline`
//! - **Bounded** - every emitted juz value lies in `[MIN_JUZ, MAX_JUZ]`
//! - **Parallel** - independent subjects can be built together via [`build_timelines`]
//!
//! ## Modules
//!
//! - [`timeline`] - builder, watermark reconstructor, rate estimator, forecaster
//! - [`calendar`] - month arithmetic and labels
//! - [`sanitize`] - clamping and boundary coercion
//! - [`stats`] - dashboard aggregates
//! - [`types`] - shared types and constants
//!
//! ## Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use hifz_algo::{build_timeline, SubjectSnapshot};
//!
//! let snapshot = SubjectSnapshot::new(10, 4, NaiveDate::from_ymd_opt(2024, 1, 8).unwrap());
//! let now = NaiveDate::from_ymd_opt(2026, 10, 14).unwrap().and_hms_opt(9, 0, 0).unwrap();
//!
//! let timeline = build_timeline(&snapshot, &[], now);
//! assert_eq!(timeline.len(), 7);
//! assert!(timeline.points().iter().all(|p| p.completed_juz == 10));
//! ```

// ============================================================================
// Modules
// ============================================================================

pub mod calendar;
pub mod sanitize;
pub mod stats;
pub mod timeline;
pub mod types;

// ============================================================================
// Re-exports
// ============================================================================

pub use types::*;

pub use timeline::{build_timeline, build_timelines, TimelineInput};

pub use stats::{
    daily_submissions, default_submission_range, grade_distribution, juz_distribution,
    monthly_activity, progress_percent, today_activity, top_students, type_distribution,
    DailySubmissions, DistributionSlice, JuzBucket, MonthlyActivity, RankedStudent, TodayActivity,
};
