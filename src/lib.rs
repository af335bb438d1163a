// src/lib.rs

//! Weekly revenue model for a guitar fret-leveling (Plek) machine business.
//!
//! Production ramps linearly from zero to capacity, then holds steady; each
//! week is perturbed by bounded uniform noise drawn from a caller-supplied
//! RNG, and revenue is accumulated week by week.

pub mod error;
pub mod io;
pub mod model;
pub mod simulation;

pub use error::{Result, SimulationError};
pub use simulation::config::SimulationParams;
pub use simulation::engine::{simulate, RevenueSimulator, SimulationResult, WeekRecord};
pub use simulation::monthly::{aggregate_monthly, parse_anchor, MonthRecord};
