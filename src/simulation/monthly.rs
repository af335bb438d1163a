// src/simulation/monthly.rs

use crate::error::{Result, SimulationError};
use crate::simulation::config::WEEKS_PER_MONTH;
use crate::simulation::engine::WeekRecord;
use chrono::{Months, NaiveDate};
use serde::Serialize;

/// Four consecutive weeks rolled up under a calendar month label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthRecord {
    /// e.g. "Jan 2025"
    pub label: String,
    pub monthly_revenue: f64,
    pub cumulative_revenue: f64,
}

/// Groups weeks into 4-week buckets labelled with successive calendar months,
/// starting at `anchor_year`/`anchor_month` (1-based month).
///
/// A trailing bucket with fewer than four weeks is kept so the monthly view
/// always accounts for the full revenue.
pub fn aggregate_monthly(
    weeks: &[WeekRecord],
    anchor_year: i32,
    anchor_month: u32,
) -> Result<Vec<MonthRecord>> {
    let anchor = NaiveDate::from_ymd_opt(anchor_year, anchor_month, 1).ok_or_else(|| {
        SimulationError::invalid_parameter(format!(
            "anchor month {anchor_year}-{anchor_month:02} is not a calendar month"
        ))
    })?;

    weeks
        .chunks(WEEKS_PER_MONTH)
        .enumerate()
        .map(|(i, bucket)| -> Result<MonthRecord> {
            let month = anchor
                .checked_add_months(Months::new(i as u32))
                .ok_or_else(|| {
                    SimulationError::invalid_parameter("monthly labels run past the calendar range")
                })?;

            Ok(MonthRecord {
                label: month.format("%b %Y").to_string(),
                monthly_revenue: bucket.iter().map(|w| w.weekly_revenue).sum(),
                cumulative_revenue: bucket
                    .iter()
                    .map(|w| w.cumulative_revenue)
                    .fold(0.0, f64::max),
            })
        })
        .collect()
}

/// Parses a `YYYY-MM` anchor into a year and 1-based month.
pub fn parse_anchor(raw: &str) -> Result<(i32, u32)> {
    let bad = || {
        SimulationError::invalid_parameter(format!("anchor must be YYYY-MM, got {raw:?}"))
    };

    let (year, month) = raw.split_once('-').ok_or_else(bad)?;
    let year: i32 = year.parse().map_err(|_| bad())?;
    let month: u32 = month.parse().map_err(|_| bad())?;
    if !(1..=12).contains(&month) {
        return Err(SimulationError::invalid_parameter(format!(
            "anchor month must be 01-12, got {raw:?}"
        )));
    }
    Ok((year, month))
}
