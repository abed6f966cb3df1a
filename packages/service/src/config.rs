use std::path::PathBuf;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Offset, Utc};

use crate::error::{ProgressError, Result};

/// Largest accepted school offset from UTC, in minutes
const MAX_OFFSET_MINUTES: i32 = 24 * 60;

#[derive(Debug, Clone)]
pub struct Config {
    pub log_level: String,
    pub file_logs: bool,
    pub log_dir: PathBuf,
    /// Offset of the school's wall clock; decides which month "now" falls in
    pub school_offset: FixedOffset,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            file_logs: false,
            log_dir: PathBuf::from("./logs"),
            school_offset: Utc.fix(),
        }
    }
}

impl Config {
    /// Read configuration from the environment (and `.env`), defaulting bad values
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`Config::from_env`], but rejects an out-of-range school offset
    pub fn validated_from_env() -> Result<Self> {
        let _ = dotenvy::dotenv();
        Self::validated_from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let log_level = lookup("RUST_LOG").unwrap_or(defaults.log_level);

        let file_logs = lookup("ENABLE_FILE_LOGS")
            .map(|v| v == "true" || v == "1")
            .unwrap_or(defaults.file_logs);

        let log_dir = lookup("LOG_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.log_dir);

        let school_offset = lookup("SCHOOL_UTC_OFFSET_MINUTES")
            .and_then(|value| value.trim().parse::<i32>().ok())
            .and_then(offset_from_minutes)
            .unwrap_or(defaults.school_offset);

        Self {
            log_level,
            file_logs,
            log_dir,
            school_offset,
        }
    }

    pub fn validated_from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup("SCHOOL_UTC_OFFSET_MINUTES") {
            let minutes = raw.trim().parse::<i32>().map_err(|_| {
                ProgressError::Config(format!("SCHOOL_UTC_OFFSET_MINUTES is not an integer: {raw}"))
            })?;
            if offset_from_minutes(minutes).is_none() {
                return Err(ProgressError::Config(format!(
                    "SCHOOL_UTC_OFFSET_MINUTES out of range: {minutes}"
                )));
            }
        }
        Ok(Self::from_lookup(lookup))
    }

    /// School wall-clock time for a UTC instant
    pub fn local_time(&self, at: DateTime<Utc>) -> NaiveDateTime {
        at.with_timezone(&self.school_offset).naive_local()
    }

    /// School calendar date for a UTC instant
    pub fn today(&self, now: DateTime<Utc>) -> NaiveDate {
        self.local_time(now).date()
    }
}

fn offset_from_minutes(minutes: i32) -> Option<FixedOffset> {
    if minutes.abs() >= MAX_OFFSET_MINUTES {
        return None;
    }
    FixedOffset::east_opt(minutes * 60)
}
