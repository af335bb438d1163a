// src/simulation/engine.rs

use crate::error::Result;
use crate::model::production::baseline_schedule;
use crate::model::variability::ProductionVariability;
use crate::simulation::config::{SimulationParams, WEEKS_PER_YEAR};
use rand::Rng;
use serde::Serialize;
use tracing::{debug, info};

/// One simulated week. Serialized as a CSV row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeekRecord {
    /// 1-based week number.
    pub week: usize,
    pub guitars_produced: u32,
    pub weekly_revenue: f64,
    pub cumulative_revenue: f64,
}

/// Output of a single run: the weekly series plus summary totals.
#[derive(Debug, Clone)]
pub struct SimulationResult {
    pub params: SimulationParams,
    /// Ramp-up length actually used, after clamping to the timeframe.
    pub ramp_weeks: usize,
    pub weeks: Vec<WeekRecord>,
    pub total_revenue: f64,
    pub average_weekly_revenue: f64,
}

impl SimulationResult {
    /// Weeks at full capacity in the baseline schedule.
    pub fn steady_state_weeks(&self) -> usize {
        self.weeks.len() - self.ramp_weeks
    }
}

/// Weekly revenue model for a single Plek machine.
#[derive(Debug, Clone)]
pub struct RevenueSimulator {
    params: SimulationParams,
    baseline: Vec<u32>,
    variability: ProductionVariability,
}

impl RevenueSimulator {
    /// Validates `params` and precomputes the baseline production schedule.
    pub fn new(params: SimulationParams) -> Result<Self> {
        params.validate()?;

        let baseline = baseline_schedule(
            params.max_guitars_per_week,
            params.requested_ramp_weeks(),
            params.total_weeks(),
        );
        debug!(
            total_weeks = baseline.len(),
            requested_ramp_weeks = params.requested_ramp_weeks(),
            max_guitars_per_week = params.max_guitars_per_week,
            "baseline schedule built"
        );

        let variability =
            ProductionVariability::new(params.variability_percent, params.max_guitars_per_week);

        Ok(Self {
            params,
            baseline,
            variability,
        })
    }

    pub fn params(&self) -> &SimulationParams {
        &self.params
    }

    /// Guitars per week before variability is applied.
    pub fn baseline(&self) -> &[u32] {
        &self.baseline
    }

    /// Runs the simulation, drawing one multiplier per week from `rng`.
    pub fn run<R: Rng + ?Sized>(&self, rng: &mut R) -> SimulationResult {
        // 1. Perturb the baseline: one multiplier per week, in week order
        let produced = self.variability.apply(&self.baseline, rng);
        let price = self.params.price_per_guitar;

        // 2. Price each week and carry the running total forward
        let mut cumulative = 0.0;
        let mut weeks = Vec::with_capacity(produced.len());
        for (i, guitars) in produced.into_iter().enumerate() {
            let weekly_revenue = guitars as f64 * price;
            cumulative += weekly_revenue;
            weeks.push(WeekRecord {
                week: i + 1,
                guitars_produced: guitars,
                weekly_revenue,
                cumulative_revenue: cumulative,
            });

            if (i + 1) % WEEKS_PER_YEAR == 0 {
                debug!(
                    week = i + 1,
                    cumulative_revenue = cumulative,
                    "year complete"
                );
            }
        }

        // 3. Summaries; an empty run reports zero for both
        let total_revenue = weeks.last().map_or(0.0, |w| w.cumulative_revenue);
        let average_weekly_revenue = if weeks.is_empty() {
            0.0
        } else {
            weeks.iter().map(|w| w.weekly_revenue).sum::<f64>() / weeks.len() as f64
        };

        info!(
            weeks = weeks.len(),
            total_revenue, average_weekly_revenue, "simulation complete"
        );

        SimulationResult {
            ramp_weeks: self.params.requested_ramp_weeks().min(weeks.len()),
            params: self.params.clone(),
            weeks,
            total_revenue,
            average_weekly_revenue,
        }
    }
}

/// Validates `params` and runs one simulation with the supplied randomness.
pub fn simulate<R: Rng + ?Sized>(
    params: &SimulationParams,
    rng: &mut R,
) -> Result<SimulationResult> {
    Ok(RevenueSimulator::new(params.clone())?.run(rng))
}
