//! CSV export and summary rendering against real simulation output.

use plek_revenue_sim::io::reporting::{
    render_monthly_table, render_summary, write_monthly_csv, write_weekly_csv,
};
use plek_revenue_sim::{aggregate_monthly, simulate, SimulationParams};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn one_year() -> SimulationParams {
    SimulationParams {
        max_guitars_per_week: 9,
        ramp_up_months: 12,
        price_per_guitar: 175.0,
        variability_percent: 0.0,
        timeframe_years: 1,
    }
}

#[test]
fn weekly_csv_has_header_and_one_row_per_week() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("weekly.csv");
    let result = simulate(&one_year(), &mut StdRng::seed_from_u64(1)).unwrap();

    write_weekly_csv(&path, &result.weeks).unwrap();

    let mut reader = csv::Reader::from_path(&path).unwrap();
    let headers = reader.headers().unwrap().clone();
    assert_eq!(
        headers.iter().collect::<Vec<_>>(),
        ["week", "guitars_produced", "weekly_revenue", "cumulative_revenue"]
    );
    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 52);
    assert_eq!(&rows[51][0], "52");
    assert_eq!(&rows[51][1], "9");
    assert_eq!(rows[51][2].parse::<f64>().unwrap(), 1575.0);
}

#[test]
fn monthly_csv_round_trips_labels() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("monthly.csv");
    let result = simulate(&one_year(), &mut StdRng::seed_from_u64(1)).unwrap();
    let months = aggregate_monthly(&result.weeks, 2025, 6).unwrap();

    write_monthly_csv(&path, &months).unwrap();

    let mut reader = csv::Reader::from_path(&path).unwrap();
    let labels: Vec<String> = reader
        .records()
        .map(|r| r.unwrap()[0].to_string())
        .collect();
    assert_eq!(labels.len(), 13);
    assert_eq!(labels[0], "Jun 2025");
    assert_eq!(labels[12], "Jun 2026");
    assert!(render_monthly_table(&months).contains("Dec 2025"));
}

#[test]
fn export_to_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("weekly.csv");
    let result = simulate(&one_year(), &mut StdRng::seed_from_u64(1)).unwrap();
    assert!(write_weekly_csv(&path, &result.weeks).is_err());
}

#[test]
fn summary_formats_both_metrics_as_currency() {
    let result = simulate(&one_year(), &mut StdRng::seed_from_u64(1)).unwrap();
    let summary = render_summary(&result);
    assert!(summary.contains("Total Revenue ($): $"));
    assert!(summary.contains("Average Weekly Revenue ($): $"));
}
