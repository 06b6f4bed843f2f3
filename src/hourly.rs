//! Rows of the hour-of-day rental table, split by working day.
//!
//! The table holds one mean count per (hour, working-day) pair; the dashboard
//! compares the two daily profiles hour by hour.

use serde::{de, Deserialize, Deserializer, Serialize};

use crate::weekly::flag_from_number;

/// Hours in a day
pub const HOURS_PER_DAY: u8 = 24;

/// One row of the hourly table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyRecord {
    /// Hour of day, 0..=23
    #[serde(rename = "hr_", deserialize_with = "hour_of_day")]
    pub hour: u8,
    /// Mean rental count for the hour
    pub cnt_mean: f64,
    #[serde(rename = "workingday_", deserialize_with = "flag_from_number")]
    pub working_day: bool,
}

fn hour_of_day<'de, D>(deserializer: D) -> std::result::Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let hour = u8::deserialize(deserializer)?;
    if hour >= HOURS_PER_DAY {
        return Err(de::Error::custom(format!(
            "hour {} is outside 0..{}",
            hour, HOURS_PER_DAY
        )));
    }
    Ok(hour)
}

impl HourlyRecord {
    pub fn new(hour: u8, cnt_mean: f64, working_day: bool) -> Self {
        HourlyRecord {
            hour,
            cnt_mean,
            working_day,
        }
    }
}

/// Split rows into (working days, non-working days), keeping order
pub fn split_by_working_day(rows: &[HourlyRecord]) -> (Vec<&HourlyRecord>, Vec<&HourlyRecord>) {
    rows.iter().partition(|r| r.working_day)
}

/// `(hour, cnt_mean)` pairs for one kind of day, ordered by hour
pub fn daily_profile(rows: &[HourlyRecord], working_day: bool) -> Vec<(u8, f64)> {
    let mut profile: Vec<(u8, f64)> = rows
        .iter()
        .filter(|r| r.working_day == working_day)
        .map(|r| (r.hour, r.cnt_mean))
        .collect();
    profile.sort_by_key(|&(hour, _)| hour);
    profile
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> Vec<HourlyRecord> {
        (0..HOURS_PER_DAY)
            .rev()
            .flat_map(|h| {
                vec![
                    HourlyRecord::new(h, 100.0 + h as f64, true),
                    HourlyRecord::new(h, 50.0 + h as f64, false),
                ]
            })
            .collect()
    }

    #[test]
    fn test_split_by_working_day() {
        let rows = table();
        let (work, off) = split_by_working_day(&rows);
        assert_eq!(work.len(), 24);
        assert_eq!(off.len(), 24);
        assert!(work.iter().all(|r| r.working_day));
        assert!(off.iter().all(|r| !r.working_day));
        // input order is kept
        assert_eq!(work[0].hour, 23);
    }

    #[test]
    fn test_daily_profile_sorted_by_hour() {
        let rows = table();
        let profile = daily_profile(&rows, false);
        assert_eq!(profile.len(), 24);
        assert_eq!(profile[0], (0, 50.0));
        assert_eq!(profile[23], (23, 73.0));
        assert!(profile.windows(2).all(|p| p[0].0 < p[1].0));
    }

    #[test]
    fn test_hour_out_of_range_rejected() {
        let err = serde_json::from_str::<HourlyRecord>(r#"{"hr_":24,"cnt_mean":1.0,"workingday_":1}"#);
        assert!(err.is_err());

        let row: HourlyRecord =
            serde_json::from_str(r#"{"hr_":8,"cnt_mean":477.0,"workingday_":1}"#).unwrap();
        assert_eq!(row, HourlyRecord::new(8, 477.0, true));
    }
}
