//! Rows of the weekly-aggregated rental table and helpers that connect them
//! to the period windows and the smoothing pass.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{Error, Result};
use crate::period::PeriodLabel;
use crate::series::TimeSeries;

/// One row of the weekly table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyRecord {
    /// Date-like label of the week
    #[serde(rename = "dteday_")]
    pub date: String,
    /// Mean rental count for the week
    pub cnt_mean: f64,
    #[serde(rename = "workingday_", deserialize_with = "flag_from_number")]
    pub working_day: bool,
}

// The table stores the indicator as 0/1
pub(crate) fn flag_from_number<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = f64::deserialize(deserializer)?;
    Ok(value != 0.0)
}

impl WeeklyRecord {
    pub fn new(date: impl Into<String>, cnt_mean: f64, working_day: bool) -> Self {
        WeeklyRecord {
            date: date.into(),
            cnt_mean,
            working_day,
        }
    }
}

/// Rows of `rows` that fall in the window for `label`
///
/// # Errors
/// `InvalidArgument` for an unknown label or a table with fewer rows than the
/// window's upper bound.
pub fn slice_window<'a>(rows: &'a [WeeklyRecord], label: &str) -> Result<&'a [WeeklyRecord]> {
    slice_period(rows, PeriodLabel::parse(label)?)
}

/// Rows of `rows` that fall in the window for `period`
pub fn slice_period(rows: &[WeeklyRecord], period: PeriodLabel) -> Result<&[WeeklyRecord]> {
    let window = period.window();
    rows.get(window.range()).ok_or_else(|| {
        Error::InvalidArgument(format!(
            "weekly table has {} rows but {} needs rows {}..{}",
            rows.len(),
            period,
            window.lower(),
            window.upper()
        ))
    })
}

/// The `cnt_mean` column as a series for the smoothing pass
pub fn cnt_mean_series(rows: &[WeeklyRecord]) -> TimeSeries {
    TimeSeries::new(rows.iter().map(|r| r.cnt_mean).collect())
}

/// Split rows into (working days, non-working days), keeping order
pub fn split_by_working_day(rows: &[WeeklyRecord]) -> (Vec<&WeeklyRecord>, Vec<&WeeklyRecord>) {
    rows.iter().partition(|r| r.working_day)
}
