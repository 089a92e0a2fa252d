//! Numerical utilities: sample statistics and price time-series transforms.

pub mod stats;
pub mod timeseries;

pub use stats::{mean, population_variance, std_dev};
pub use timeseries::{log_returns, validate_prices};
