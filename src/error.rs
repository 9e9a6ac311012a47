use chrono::NaiveDate;
use thiserror::Error;

/// Everything that can go wrong when building a report configuration.
///
/// All three variants are validation failures raised by `build()` — the
/// setters themselves never fail. PartialEq lets callers (and tests)
/// branch on the exact failure.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReportError {
    #[error("title required")]
    MissingTitle,

    #[error("invalid date range: {start} is after {end}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    #[error("at least one column required")]
    MissingColumns,
}
