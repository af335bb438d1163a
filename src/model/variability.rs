// src/model/variability.rs

use rand::Rng;
use rand_distr::{Distribution, Uniform};

/// Uniform multiplicative noise applied to weekly production.
///
/// Each week draws a multiplier from `[1 - p/100, 1 + p/100]`; the perturbed
/// count is truncated toward zero and clamped to `[0, capacity]`.
#[derive(Debug, Clone)]
pub struct ProductionVariability {
    multiplier: Uniform<f64>,
    capacity: u32,
}

impl ProductionVariability {
    /// `variability_percent` must already be validated to lie in [0, 100].
    pub fn new(variability_percent: f64, capacity: u32) -> Self {
        let spread = variability_percent / 100.0;
        Self {
            multiplier: Uniform::new_inclusive(1.0 - spread, 1.0 + spread),
            capacity,
        }
    }

    /// Perturbs one week's baseline, consuming exactly one draw.
    pub fn perturb<R: Rng + ?Sized>(&self, baseline: u32, rng: &mut R) -> u32 {
        let scaled = baseline as f64 * self.multiplier.sample(rng);
        // `as` saturates, so anything below zero truncates to 0
        let produced = scaled.trunc() as u32;
        produced.min(self.capacity)
    }

    /// Perturbs a whole schedule in week order.
    pub fn apply<R: Rng + ?Sized>(&self, schedule: &[u32], rng: &mut R) -> Vec<u32> {
        schedule.iter().map(|&g| self.perturb(g, rng)).collect()
    }
}
