pub mod production;
pub mod variability;
