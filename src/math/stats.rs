//! Sample statistics over `f64` slices.
//!
//! All estimators use the population convention (divisor `n`), which is the
//! convention the calibration layer expects for per-step drift and volatility.

use crate::core::SimulationError;

fn validate_sample(data: &[f64]) -> Result<(), SimulationError> {
    if data.is_empty() {
        return Err(SimulationError::InvalidInput(
            "statistics require a non-empty sample".to_string(),
        ));
    }
    if data.iter().any(|x| !x.is_finite()) {
        return Err(SimulationError::InvalidInput(
            "sample contains a non-finite value".to_string(),
        ));
    }
    Ok(())
}

/// Arithmetic mean of a non-empty sample.
pub fn mean(data: &[f64]) -> Result<f64, SimulationError> {
    validate_sample(data)?;
    Ok(data.iter().sum::<f64>() / data.len() as f64)
}

/// Population variance (divisor `n`, not `n - 1`) of a non-empty sample.
pub fn population_variance(data: &[f64]) -> Result<f64, SimulationError> {
    let m = mean(data)?;
    let sum_sq = data.iter().map(|x| (x - m) * (x - m)).sum::<f64>();
    Ok(sum_sq / data.len() as f64)
}

/// Population standard deviation of a non-empty sample.
pub fn std_dev(data: &[f64]) -> Result<f64, SimulationError> {
    Ok(population_variance(data)?.sqrt())
}
