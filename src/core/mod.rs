//! Common domain types and library-wide error structures.

use crate::math::stats;

/// Errors surfaced by the simulation API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimulationError {
    /// Input validation error.
    InvalidInput(String),
    /// Numerical issue (overflow, invalid state, etc.).
    NumericalError(String),
}

impl std::fmt::Display for SimulationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            Self::NumericalError(msg) => write!(f, "numerical error: {msg}"),
        }
    }
}

impl std::error::Error for SimulationError {}

/// Distribution summary of a sample, typically an ensemble's terminal prices.
///
/// Variance uses the population convention (divisor `n`). Recomputed per run,
/// never persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SummaryStatistics {
    /// Arithmetic mean.
    pub mean: f64,
    /// Population variance.
    pub variance: f64,
    /// Square root of the population variance.
    pub std_dev: f64,
}

impl SummaryStatistics {
    /// Reduces a non-empty sample to mean, variance, and standard deviation.
    pub fn from_sample(data: &[f64]) -> Result<Self, SimulationError> {
        let mean = stats::mean(data)?;
        let variance = stats::population_variance(data)?;
        Ok(Self {
            mean,
            variance,
            std_dev: variance.sqrt(),
        })
    }
}
