// src/main.rs

use anyhow::{Context, Result};
use chrono::{Datelike, Local};
use clap::Parser;
use plek_revenue_sim::io::reporting;
use plek_revenue_sim::{aggregate_monthly, parse_anchor, RevenueSimulator, SimulationParams};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "plek-sim",
    version,
    about = "Weekly revenue simulation for a Plek fret-leveling machine."
)]
struct Cli {
    /// TOML file with simulation parameters; flags override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    max_guitars: Option<u32>,

    #[arg(long)]
    ramp_up_months: Option<u32>,

    /// Price charged per guitar, in dollars.
    #[arg(long)]
    price: Option<f64>,

    /// Weekly production variability, in percent (0-100).
    #[arg(long)]
    variability: Option<f64>,

    #[arg(long)]
    years: Option<u32>,

    /// Seed for a reproducible run.
    #[arg(long)]
    seed: Option<u64>,

    /// Print the 4-week monthly roll-up instead of the weekly table.
    #[arg(long)]
    monthly: bool,

    /// First month label of the monthly view, as YYYY-MM (default: this month).
    #[arg(long)]
    anchor: Option<String>,

    #[arg(long)]
    csv: Option<PathBuf>,

    #[arg(long)]
    monthly_csv: Option<PathBuf>,
}

impl Cli {
    /// File values (or defaults) first, then any flag that was given.
    ///
    /// Ranges are checked later, by `RevenueSimulator::new`, so a flag can
    /// correct an out-of-range file value.
    fn params(&self) -> Result<SimulationParams> {
        let mut params = match &self.config {
            Some(path) => SimulationParams::load(path)?,
            None => SimulationParams::default(),
        };
        if let Some(v) = self.max_guitars {
            params.max_guitars_per_week = v;
        }
        if let Some(v) = self.ramp_up_months {
            params.ramp_up_months = v;
        }
        if let Some(v) = self.price {
            params.price_per_guitar = v;
        }
        if let Some(v) = self.variability {
            params.variability_percent = v;
        }
        if let Some(v) = self.years {
            params.timeframe_years = v;
        }
        Ok(params)
    }

    fn anchor(&self) -> Result<(i32, u32)> {
        match &self.anchor {
            Some(raw) => Ok(parse_anchor(raw)?),
            None => {
                let today = Local::now().date_naive();
                Ok((today.year(), today.month()))
            }
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let params = cli.params()?;
    let simulator = RevenueSimulator::new(params).context("invalid simulation parameters")?;

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    info!(params = ?simulator.params(), seed = ?cli.seed, "running simulation");
    let result = simulator.run(&mut rng);

    let months = if cli.monthly || cli.monthly_csv.is_some() {
        let (year, month) = cli.anchor()?;
        Some(aggregate_monthly(&result.weeks, year, month)?)
    } else {
        None
    };

    match (&months, cli.monthly) {
        (Some(months), true) => print!("{}", reporting::render_monthly_table(months)),
        _ => print!("{}", reporting::render_weekly_table(&result.weeks)),
    }
    println!();
    print!("{}", reporting::render_summary(&result));

    if let Some(path) = &cli.csv {
        reporting::write_weekly_csv(path, &result.weeks)
            .with_context(|| format!("failed to write {}", path.display()))?;
    }
    if let (Some(path), Some(months)) = (&cli.monthly_csv, &months) {
        reporting::write_monthly_csv(path, months)
            .with_context(|| format!("failed to write {}", path.display()))?;
    }

    Ok(())
}
