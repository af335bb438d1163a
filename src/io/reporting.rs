// src/io/reporting.rs

use crate::error::Result;
use crate::simulation::engine::{SimulationResult, WeekRecord};
use crate::simulation::monthly::MonthRecord;
use serde::Serialize;
use std::path::Path;
use tracing::info;

/// Formats a dollar amount as `$1,234.56`.
pub fn format_currency(value: f64) -> String {
    // Round once to whole cents so the dollar and cent parts agree
    let cents = (value.abs() * 100.0).round() as u64;
    let dollars = (cents / 100).to_string();

    // Insert a comma before every group of three digits counted from the right
    let mut grouped = String::with_capacity(dollars.len() + dollars.len() / 3);
    for (i, digit) in dollars.chars().enumerate() {
        if i > 0 && (dollars.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    // A value that rounds to zero cents prints without a sign
    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    format!("{sign}${grouped}.{:02}", cents % 100)
}

/// Renders the weekly series as a fixed-width text table.
pub fn render_weekly_table(weeks: &[WeekRecord]) -> String {
    let header = format!(
        "{:>6}  {:>16}  {:>20}  {:>24}",
        "Week", "Guitars per Week", "Weekly Revenue ($)", "Cumulative Revenue ($)"
    );
    let rows = weeks.iter().map(|w| {
        format!(
            "{:>6}  {:>16}  {:>20}  {:>24}",
            w.week,
            w.guitars_produced,
            format_currency(w.weekly_revenue),
            format_currency(w.cumulative_revenue)
        )
    });
    join_lines(header, rows)
}

/// Renders the monthly roll-up as a fixed-width text table.
pub fn render_monthly_table(months: &[MonthRecord]) -> String {
    let header = format!(
        "{:>8}  {:>20}  {:>24}",
        "Month", "Monthly Revenue ($)", "Cumulative Revenue ($)"
    );
    let rows = months.iter().map(|m| {
        format!(
            "{:>8}  {:>20}  {:>24}",
            m.label,
            format_currency(m.monthly_revenue),
            format_currency(m.cumulative_revenue)
        )
    });
    join_lines(header, rows)
}

/// Header plus rows, each terminated by a newline.
fn join_lines(header: String, rows: impl Iterator<Item = String>) -> String {
    let mut out = header;
    out.push('\n');
    for row in rows {
        out.push_str(&row);
        out.push('\n');
    }
    out
}

/// The two headline metrics of a run.
pub fn render_summary(result: &SimulationResult) -> String {
    format!(
        "Total Revenue ($): {}\nAverage Weekly Revenue ($): {}\n",
        format_currency(result.total_revenue),
        format_currency(result.average_weekly_revenue)
    )
}

/// Writes the weekly series to a CSV file with a header row.
pub fn write_weekly_csv(file_path: impl AsRef<Path>, weeks: &[WeekRecord]) -> Result<()> {
    write_records(file_path.as_ref(), weeks)
}

/// Writes the monthly roll-up to a CSV file with a header row.
pub fn write_monthly_csv(file_path: impl AsRef<Path>, months: &[MonthRecord]) -> Result<()> {
    write_records(file_path.as_ref(), months)
}

fn write_records<T: Serialize>(path: &Path, data: &[T]) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    for record in data {
        wtr.serialize(record)?;
    }
    wtr.flush()?;

    info!(rows = data.len(), path = %path.display(), "exported CSV");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_groups_thousands() {
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(175.0), "$175.00");
        assert_eq!(format_currency(1575.0), "$1,575.00");
        assert_eq!(format_currency(123456.789), "$123,456.79");
        assert_eq!(format_currency(1_000_000.0), "$1,000,000.00");
        assert_eq!(format_currency(-42.5), "-$42.50");
    }

    #[test]
    fn weekly_table_has_header_and_rows() {
        let weeks = vec![WeekRecord {
            week: 1,
            guitars_produced: 9,
            weekly_revenue: 1575.0,
            cumulative_revenue: 1575.0,
        }];
        let table = render_weekly_table(&weeks);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("Cumulative Revenue ($)"));
        assert!(lines[1].contains("$1,575.00"));
    }

    #[test]
    fn monthly_table_rows_end_with_newline() {
        let months = vec![
            MonthRecord {
                label: "Jan 2025".into(),
                monthly_revenue: 700.0,
                cumulative_revenue: 700.0,
            },
            MonthRecord {
                label: "Feb 2025".into(),
                monthly_revenue: 1400.0,
                cumulative_revenue: 2100.0,
            },
        ];
        let table = render_monthly_table(&months);
        assert!(table.ends_with('\n'));
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[2].contains("Feb 2025"));
        assert!(lines[2].contains("$2,100.00"));
        assert_eq!(render_monthly_table(&[]).lines().count(), 1);
    }
}
