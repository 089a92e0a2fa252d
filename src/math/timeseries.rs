//! Price time-series transforms used for model calibration.

use crate::core::SimulationError;

/// Validates a price series: at least two observations, all finite and
/// strictly positive.
///
/// Positivity is required because calibration takes logarithms; a zero or
/// negative price would otherwise turn into NaN deep inside the estimator.
pub fn validate_prices(prices: &[f64]) -> Result<(), SimulationError> {
    if prices.len() < 2 {
        return Err(SimulationError::InvalidInput(
            "price series needs at least 2 observations".to_string(),
        ));
    }
    if let Some(p) = prices.iter().find(|p| !p.is_finite() || **p <= 0.0) {
        return Err(SimulationError::InvalidInput(format!(
            "price must be positive and finite, got {p}"
        )));
    }
    Ok(())
}

/// Computes log returns from a price series.
///
/// `r_t = ln(P_t / P_{t-1})`, so a series of length `n` yields `n - 1`
/// returns.
pub fn log_returns(prices: &[f64]) -> Result<Vec<f64>, SimulationError> {
    validate_prices(prices)?;
    Ok(prices.windows(2).map(|w| (w[1] / w[0]).ln()).collect())
}
