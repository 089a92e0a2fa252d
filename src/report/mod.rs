//! Text and CSV export of simulated ensembles.
//!
//! Pure formatting over `io::Write`; the simulation core never performs I/O,
//! so export always happens after all trials complete.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::core::SummaryStatistics;
use crate::mc::Ensemble;

/// Writes one line per path, prices space-delimited.
pub fn write_paths_text<W: Write>(w: &mut W, ensemble: &Ensemble) -> io::Result<()> {
    for path in ensemble.paths() {
        let mut first = true;
        for p in path {
            if first {
                write!(w, "{p}")?;
                first = false;
            } else {
                write!(w, " {p}")?;
            }
        }
        writeln!(w)?;
    }
    Ok(())
}

/// Writes the terminal-price summary as labelled lines.
pub fn write_summary_text<W: Write>(w: &mut W, summary: &SummaryStatistics) -> io::Result<()> {
    writeln!(w, "mean final price:     {:.6}", summary.mean)?;
    writeln!(w, "variance final price: {:.6}", summary.variance)?;
    writeln!(w, "std dev final price:  {:.6}", summary.std_dev)
}

/// Writes the ensemble as CSV.
///
/// Header row is `Time Step,Simulation 1,...,Simulation N`, followed by one
/// row per time step holding the step index and each simulation's price at
/// that step. Columns are in simulation order, rows in step order; downstream
/// consumers rely on this exact layout.
pub fn write_csv<W: Write>(w: &mut W, ensemble: &Ensemble) -> io::Result<()> {
    write!(w, "Time Step")?;
    for i in 1..=ensemble.num_simulations() {
        write!(w, ",Simulation {i}")?;
    }
    writeln!(w)?;

    for step in 0..ensemble.num_steps() {
        write!(w, "{step}")?;
        for path in ensemble.paths() {
            write!(w, ",{}", path[step])?;
        }
        writeln!(w)?;
    }
    Ok(())
}

/// Writes the ensemble CSV to `path`, creating or truncating the file.
pub fn export_csv<P: AsRef<Path>>(path: P, ensemble: &Ensemble) -> io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    write_csv(&mut w, ensemble)?;
    w.flush()
}
