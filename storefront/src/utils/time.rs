//! Date helpers

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use super::{AppError, AppResult};

/// Parse a `YYYY-MM-DD` date string
pub fn parse_date(date: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
        .map_err(|_| AppError::validation(format!("Invalid date format: {}", date)))
}

/// `00:00:00` of `date`
pub fn day_start(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// Last representable instant of `date`, for inclusive range checks
pub fn day_end(date: NaiveDate) -> NaiveDateTime {
    date.succ_opt()
        .map(|next| day_start(next) - chrono::Duration::nanoseconds(1))
        .unwrap_or_else(|| day_start(date))
}
