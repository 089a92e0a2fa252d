//! Stochastic process models used by the Monte Carlo engine.

use rand::Rng;

use crate::core::SimulationError;
use crate::math::{stats, timeseries};

/// Geometric Brownian motion parameters.
///
/// Both fields are per-step quantities at the step size implicit in the
/// calibration series; nothing here is annualized.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gbm {
    /// Mean log return (drift).
    pub mu: f64,
    /// Population standard deviation of log returns (volatility).
    pub sigma: f64,
}

impl Gbm {
    /// Estimates drift and volatility from a historical price series.
    pub fn estimate(prices: &[f64]) -> Result<Self, SimulationError> {
        let returns = timeseries::log_returns(prices)?;
        let mu = stats::mean(&returns)?;
        let sigma = stats::std_dev(&returns)?;
        Ok(Self { mu, sigma })
    }

    /// One-step growth factor for timestep `dt` and shock `z`:
    /// `exp(mu - 0.5 sigma^2 dt + sigma sqrt(dt) z)`.
    ///
    /// The half-variance term is the Ito correction; the drift is per-step
    /// and enters unscaled by `dt`.
    pub fn step_factor(&self, dt: f64, z: f64) -> f64 {
        (self.mu - 0.5 * self.sigma * self.sigma * dt + self.sigma * dt.sqrt() * z).exp()
    }
}

/// Multiplicative random walk producing synthetic seed price histories.
///
/// Each step multiplies the previous price by `1 + u` with `u` uniform in
/// `[-fluctuation/2, +fluctuation/2]`. This is not GBM (no log-normal
/// structure); it only provides a plausible history to calibrate from when no
/// real prices are available.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MultiplicativeWalk {
    fluctuation: f64,
}

impl MultiplicativeWalk {
    /// Creates a walk with the given fluctuation window width.
    ///
    /// Requires `0 <= fluctuation < 2` so every per-step factor stays
    /// strictly positive.
    pub fn new(fluctuation: f64) -> Result<Self, SimulationError> {
        if !fluctuation.is_finite() || !(0.0..2.0).contains(&fluctuation) {
            return Err(SimulationError::InvalidInput(format!(
                "fluctuation must lie in [0, 2), got {fluctuation}"
            )));
        }
        Ok(Self { fluctuation })
    }

    /// Width of the uniform fluctuation window.
    pub fn fluctuation(&self) -> f64 {
        self.fluctuation
    }

    /// Generates `n` prices starting at `starting_price`.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        starting_price: f64,
        n: usize,
    ) -> Result<Vec<f64>, SimulationError> {
        if !starting_price.is_finite() || starting_price <= 0.0 {
            return Err(SimulationError::InvalidInput(format!(
                "starting price must be positive, got {starting_price}"
            )));
        }
        if n < 2 {
            return Err(SimulationError::InvalidInput(
                "series length must be at least 2".to_string(),
            ));
        }

        let mut prices = Vec::with_capacity(n);
        prices.push(starting_price);
        for i in 1..n {
            let u = rng.random::<f64>() * self.fluctuation - self.fluctuation / 2.0;
            prices.push(prices[i - 1] * (1.0 + u));
        }
        Ok(prices)
    }
}
