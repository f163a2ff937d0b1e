//! Consumers of simulation results.
//!
//! The simulation never depends on a renderer. [`ResultRenderer`] is the seam
//! for anything that displays [`Results`] (charts, tables, dashboards), and
//! [`TableRenderer`] is a plain-text implementation for terminals and logs.

use std::io::{self, Write};

use uom::si::{thermodynamic_temperature::degree_celsius, time::second};

use crate::models::thermal::lumped::Results;

/// Something that presents a completed run.
pub trait ResultRenderer {
    type Error;

    /// Presents `results`.
    ///
    /// # Errors
    ///
    /// Implementation-specific; callers may ignore rendering failures.
    fn render(&mut self, results: &Results) -> Result<(), Self::Error>;
}

/// Writes results as a whitespace-aligned table, one row per time step.
///
/// ```text
///   time [s]  block [°C]
///        0.0      80.000
///       10.0      79.939
/// ```
///
/// Series are assumed to share sample times, which holds for every
/// [`Results`] produced by the engine.
#[derive(Debug)]
pub struct TableRenderer<W> {
    writer: W,
    precision: usize,
}

impl<W: Write> TableRenderer<W> {
    /// Creates a renderer printing temperatures with three decimals.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            precision: 3,
        }
    }

    /// Sets the number of decimals printed for temperatures.
    #[must_use]
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ResultRenderer for TableRenderer<W> {
    type Error = io::Error;

    fn render(&mut self, results: &Results) -> Result<(), Self::Error> {
        let headers: Vec<String> = results
            .series
            .iter()
            .map(|s| format!("{} [°C]", s.name))
            .collect();

        write!(self.writer, "{:>10}", "time [s]")?;
        for header in &headers {
            write!(self.writer, "  {header:>12}")?;
        }
        writeln!(self.writer)?;

        let rows = results
            .series
            .iter()
            .map(|s| s.samples.len())
            .min()
            .unwrap_or(0);

        for row in 0..rows {
            let time = results.series[0].samples[row].time.get::<second>();
            write!(self.writer, "{time:>10.1}")?;
            for (series, header) in results.series.iter().zip(&headers) {
                let t = series.samples[row].temperature.get::<degree_celsius>();
                let width = header.chars().count().max(12);
                write!(self.writer, "  {t:>width$.prec$}", prec = self.precision)?;
            }
            writeln!(self.writer)?;
        }

        self.writer.flush()
    }
}
