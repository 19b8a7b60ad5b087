//! Report date range

use chrono::{NaiveDate, NaiveDateTime};
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::NO_PERIOD_LABEL;

use crate::utils::time::parse_date;

/// Inclusive calendar-date range of a sales report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl ReportRange {
    /// Both dates are required and `start <= end`
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> AppResult<Self> {
        let start = start.ok_or_else(|| AppError::required("start date"))?;
        let end = end.ok_or_else(|| AppError::required("end date"))?;
        if start > end {
            return Err(AppError::new(ErrorCode::ReportRangeInvalid)
                .with_detail("start", start.to_string())
                .with_detail("end", end.to_string()));
        }
        Ok(Self { start, end })
    }

    /// Parse `YYYY-MM-DD` strings
    pub fn parse(start: Option<&str>, end: Option<&str>) -> AppResult<Self> {
        let start = start.map(parse_date).transpose()?;
        let end = end.map(parse_date).transpose()?;
        Self::new(start, end)
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// `2024-05-01 to 2024-05-31`
    pub fn label(&self) -> String {
        format!(
            "{} to {}",
            self.start.format("%Y-%m-%d"),
            self.end.format("%Y-%m-%d")
        )
    }

    /// Whether `at` falls on a day inside the range
    pub fn contains(&self, at: NaiveDateTime) -> bool {
        let day = at.date();
        day >= self.start && day <= self.end
    }
}

/// Label for an optional range
pub fn range_label(range: Option<&ReportRange>) -> String {
    range
        .map(ReportRange::label)
        .unwrap_or_else(|| NO_PERIOD_LABEL.to_string())
}
