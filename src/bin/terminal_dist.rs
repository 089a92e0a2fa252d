//! Terminal-price distribution demo.
//!
//! Seeds a synthetic price history, runs the GBM Monte Carlo ensemble, prints
//! the terminal-price summary, and writes the full ensemble as CSV when an
//! output path is given as the first argument.

use gbmcarlo::report;
use gbmcarlo::{MonteCarloConfig, MonteCarloEngine};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = MonteCarloConfig {
        num_simulations: 1_000,
        num_steps: 500,
        initial_price: 140.0,
        fluctuation: 0.02,
        seed: rand::random(),
    };

    let engine = MonteCarloEngine::new(config)?;
    let ensemble = engine.run()?;
    let summary = ensemble.summary()?;

    println!(
        "{} paths x {} steps from initial price {:.2}",
        ensemble.num_simulations(),
        ensemble.num_steps(),
        config.initial_price
    );
    let mut stdout = std::io::stdout().lock();
    report::write_summary_text(&mut stdout, &summary)?;

    if let Some(out) = std::env::args().nth(1) {
        report::export_csv(&out, &ensemble)?;
        println!("wrote ensemble CSV to {out}");
    }

    Ok(())
}
