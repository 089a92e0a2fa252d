//! `gbmcarlo` simulates asset price paths under geometric Brownian motion and
//! aggregates many independent paths into a Monte Carlo ensemble to estimate
//! the distribution of a future price.
//!
//! The pipeline has three stages:
//! - calibration: per-step drift and volatility estimated from the log returns
//!   of a price series (`models::Gbm::estimate`),
//! - path generation: the discretized log-normal GBM recurrence with an Ito
//!   correction (`mc::GbmPathGenerator`),
//! - aggregation: N independent trials collected into an `mc::Ensemble` and
//!   reduced to terminal-price summary statistics.
//!
//! When no real price history is available, `models::MultiplicativeWalk`
//! produces a synthetic seed series to calibrate from.
//!
//! Numerical considerations:
//! - shocks are standard normal, so paths stay strictly positive for any
//!   positive starting price;
//! - drift and volatility are per-step quantities (not annualized), matching
//!   the step size implicit in the calibration series;
//! - every trial owns an independently stream-seeded generator, so a run is
//!   reproducible from a single base seed, sequentially or in parallel.
//!
//! # Feature Flags
//! - `parallel`: runs Monte Carlo trials on the Rayon thread pool.
//!
//! # Quick Start
//! ```rust
//! use gbmcarlo::{MonteCarloConfig, MonteCarloEngine};
//!
//! let engine = MonteCarloEngine::new(MonteCarloConfig {
//!     num_simulations: 200,
//!     num_steps: 50,
//!     initial_price: 100.0,
//!     fluctuation: 0.02,
//!     seed: 42,
//! })
//! .unwrap();
//!
//! let ensemble = engine.run().unwrap();
//! let summary = ensemble.summary().unwrap();
//! assert!(summary.mean > 0.0 && summary.std_dev >= 0.0);
//! ```

pub mod core;
pub mod math;
pub mod mc;
pub mod models;
pub mod report;

pub use crate::core::{SimulationError, SummaryStatistics};
pub use crate::mc::{Ensemble, GbmPathGenerator, MonteCarloConfig, MonteCarloEngine, simulate_gbm};
pub use crate::models::{Gbm, MultiplicativeWalk};
