//! Monte Carlo path generation and ensemble reduction.
//!
//! One trial is: synthetic seed series, parameter estimation, one GBM path.
//! Trials are independent and each owns a stream-seeded generator, so a run is
//! reproducible from a single base seed and produces the same ensemble whether
//! trials execute sequentially or on the rayon pool (`parallel` feature).

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, StandardNormal};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::core::{SimulationError, SummaryStatistics};
use crate::math::timeseries;
use crate::models::{Gbm, MultiplicativeWalk};

/// Stride between per-trial stream seeds.
const SEED_STRIDE: u64 = 7_919;

/// GBM path generator over a fixed number of steps.
///
/// `steps` is the total path length including the initial price and must be
/// at least 2; the timestep is normalized to `dt = 1 / (steps - 1)`.
#[derive(Debug, Clone, Copy)]
pub struct GbmPathGenerator {
    pub model: Gbm,
    pub s0: f64,
    pub steps: usize,
}

impl GbmPathGenerator {
    /// Builds one path from a pre-drawn shock sequence of length `steps - 1`.
    ///
    /// `path[0] = s0`; each later element applies one growth factor from
    /// `Gbm::step_factor`. Deterministic, so tests can feed fixed shocks.
    ///
    /// # Panics
    /// Panics if `steps < 2` or `shocks.len() != steps - 1`.
    pub fn generate_from_shocks(&self, shocks: &[f64]) -> Vec<f64> {
        assert!(self.steps >= 2, "steps must be at least 2");
        assert_eq!(
            shocks.len(),
            self.steps - 1,
            "need one shock per step after the start"
        );

        let dt = 1.0 / (self.steps - 1) as f64;
        let mut path = Vec::with_capacity(self.steps);
        let mut s = self.s0;
        path.push(s);
        for &z in shocks {
            s *= self.model.step_factor(dt, z);
            path.push(s);
        }
        path
    }

    /// Draws independent standard-normal shocks from `rng` and builds one
    /// path.
    ///
    /// # Panics
    /// Panics if `steps < 2`.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<f64> {
        assert!(self.steps >= 2, "steps must be at least 2");
        let mut shocks = Vec::with_capacity(self.steps - 1);
        for _ in 0..self.steps - 1 {
            shocks.push(StandardNormal.sample(&mut *rng));
        }
        self.generate_from_shocks(&shocks)
    }
}

/// Simulates one GBM path calibrated from `prices`.
///
/// The input series is used only to estimate drift and volatility; the output
/// path has the same length as the input and starts at `prices[0]` exactly.
pub fn simulate_gbm<R: Rng + ?Sized>(
    prices: &[f64],
    rng: &mut R,
) -> Result<Vec<f64>, SimulationError> {
    timeseries::validate_prices(prices)?;
    let generator = GbmPathGenerator {
        model: Gbm::estimate(prices)?,
        s0: prices[0],
        steps: prices.len(),
    };
    Ok(generator.generate(rng))
}

/// Validated Monte Carlo run parameters.
#[derive(Debug, Clone, Copy)]
pub struct MonteCarloConfig {
    /// Number of independent trials.
    pub num_simulations: usize,
    /// Length of every seed series and simulated path, including the start.
    pub num_steps: usize,
    /// First price of every seed series.
    pub initial_price: f64,
    /// Uniform fluctuation window width of the synthetic seed generator,
    /// in `[0, 2)`.
    pub fluctuation: f64,
    /// Base seed; trial `i` draws from its own stream seeded at
    /// `seed + i * 7919`.
    pub seed: u64,
}

impl MonteCarloConfig {
    /// Rejects invalid parameters before any simulation work begins.
    pub fn validate(&self) -> Result<(), SimulationError> {
        if self.num_simulations == 0 {
            return Err(SimulationError::InvalidInput(
                "number of simulations must be positive".to_string(),
            ));
        }
        if self.num_steps < 2 {
            return Err(SimulationError::InvalidInput(
                "number of steps must be at least 2".to_string(),
            ));
        }
        if !self.initial_price.is_finite() || self.initial_price <= 0.0 {
            return Err(SimulationError::InvalidInput(format!(
                "initial price must be positive, got {}",
                self.initial_price
            )));
        }
        MultiplicativeWalk::new(self.fluctuation).map(|_| ())
    }
}

/// Collection of simulated paths of equal length.
///
/// Read-only after creation; the only operations are accessors and the
/// terminal-price reduction.
#[derive(Debug, Clone, PartialEq)]
pub struct Ensemble {
    paths: Vec<Vec<f64>>,
    num_steps: usize,
}

impl Ensemble {
    pub fn paths(&self) -> &[Vec<f64>] {
        &self.paths
    }

    pub fn num_simulations(&self) -> usize {
        self.paths.len()
    }

    pub fn num_steps(&self) -> usize {
        self.num_steps
    }

    /// Final price of every path, in simulation order.
    pub fn terminal_prices(&self) -> Vec<f64> {
        self.paths.iter().map(|p| p[self.num_steps - 1]).collect()
    }

    /// Mean, population variance, and standard deviation of the terminal
    /// prices.
    pub fn summary(&self) -> Result<SummaryStatistics, SimulationError> {
        SummaryStatistics::from_sample(&self.terminal_prices())
    }
}

/// Monte Carlo orchestrator: runs N independent seed-then-simulate trials.
#[derive(Debug, Clone)]
pub struct MonteCarloEngine {
    config: MonteCarloConfig,
}

impl MonteCarloEngine {
    /// Validates the configuration and builds an engine.
    pub fn new(config: MonteCarloConfig) -> Result<Self, SimulationError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &MonteCarloConfig {
        &self.config
    }

    /// One independent trial: seed series, estimation, one GBM path.
    ///
    /// Trial `i` owns its own stream-seeded generator, so the result depends
    /// only on the configuration and `i`, never on scheduling.
    fn run_trial(&self, walk: &MultiplicativeWalk, i: usize) -> Result<Vec<f64>, SimulationError> {
        let cfg = self.config;
        let mut rng = StdRng::seed_from_u64(cfg.seed.wrapping_add(i as u64 * SEED_STRIDE));
        let seed_series = walk.generate(&mut rng, cfg.initial_price, cfg.num_steps)?;
        simulate_gbm(&seed_series, &mut rng)
    }

    /// Runs all trials and collects the resulting paths.
    ///
    /// Each trial generates a fresh synthetic seed series, estimates GBM
    /// parameters from it, and simulates one path. With the `parallel`
    /// feature trials run on the rayon pool; paths are collected in trial
    /// order, so the ensemble is identical to `run_sequential` either way.
    pub fn run(&self) -> Result<Ensemble, SimulationError> {
        let cfg = self.config;
        let walk = MultiplicativeWalk::new(cfg.fluctuation)?;

        #[cfg(feature = "parallel")]
        let paths = (0..cfg.num_simulations)
            .into_par_iter()
            .map(|i| self.run_trial(&walk, i))
            .collect::<Result<Vec<_>, _>>()?;
        #[cfg(not(feature = "parallel"))]
        let paths = (0..cfg.num_simulations)
            .map(|i| self.run_trial(&walk, i))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Ensemble {
            paths,
            num_steps: cfg.num_steps,
        })
    }

    /// Runs all trials on the calling thread, regardless of feature flags.
    ///
    /// Produces the same ensemble as `run` for a given configuration.
    pub fn run_sequential(&self) -> Result<Ensemble, SimulationError> {
        let cfg = self.config;
        let walk = MultiplicativeWalk::new(cfg.fluctuation)?;

        let paths = (0..cfg.num_simulations)
            .map(|i| self.run_trial(&walk, i))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Ensemble {
            paths,
            num_steps: cfg.num_steps,
        })
    }
}
