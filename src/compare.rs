//! Comparison harness aligning raw and smoothed signals.

use std::io::Write;

use crate::error::Error;
use crate::signal::Signal;

/// Collects a noisy reference signal and labelled smoothed traces for
/// side-by-side comparison.
///
/// Every added trace must match the reference in length and sample rate, so
/// all collected signals share one time axis by construction. The harness
/// derives that axis and exports aligned rows for external plotting;
/// rendering itself stays outside the crate.
///
/// # Examples
///
/// ```
/// use smoothtrack::{Comparison, Ewma, Signal, Smoother};
///
/// let raw = Signal::new(vec![0.0, 1.0, 0.5], 1000.0).unwrap();
/// let smoothed = Ewma::new(0.5).unwrap().smooth(&raw);
///
/// let mut comparison = Comparison::new(raw);
/// comparison.add_trace("ewma", smoothed).unwrap();
///
/// let mut csv = Vec::new();
/// comparison.write_csv(&mut csv).unwrap();
/// ```
#[derive(Debug)]
pub struct Comparison {
    reference: Signal,
    traces: Vec<(String, Signal)>,
}

impl Comparison {
    /// Creates a harness around the raw reference signal.
    pub fn new(reference: Signal) -> Self {
        Self {
            reference,
            traces: Vec::new(),
        }
    }

    /// The raw reference signal.
    pub fn reference(&self) -> &Signal {
        &self.reference
    }

    /// Labelled smoothed traces in insertion order.
    pub fn traces(&self) -> impl Iterator<Item = (&str, &Signal)> {
        self.traces
            .iter()
            .map(|(label, signal)| (label.as_str(), signal))
    }

    /// Adds a smoothed trace.
    ///
    /// # Errors
    ///
    /// A trace whose length or sample rate differs from the reference is
    /// rejected and not stored.
    pub fn add_trace(&mut self, label: impl Into<String>, signal: Signal) -> Result<(), Error> {
        if signal.len() != self.reference.len() {
            return Err(Error::LengthMismatch {
                expected: self.reference.len(),
                got: signal.len(),
            });
        }
        if signal.sample_rate() != self.reference.sample_rate() {
            return Err(Error::SampleRateMismatch {
                expected: self.reference.sample_rate(),
                got: signal.sample_rate(),
            });
        }
        self.traces.push((label.into(), signal));
        Ok(())
    }

    /// The shared time axis in seconds.
    pub fn time_axis(&self) -> Vec<f64> {
        self.reference.time_axis()
    }

    /// Writes the aligned signals as CSV: a header row
    /// (`time,reference,<labels...>`), then one row per sample.
    pub fn write_csv<W: Write>(&self, writer: &mut W) -> Result<(), Error> {
        write!(writer, "time,reference")?;
        for (label, _) in &self.traces {
            write!(writer, ",{label}")?;
        }
        writeln!(writer)?;

        let sample_rate = self.reference.sample_rate();
        for (index, &raw) in self.reference.samples().iter().enumerate() {
            write!(writer, "{},{raw}", index as f64 / sample_rate)?;
            for (_, trace) in &self.traces {
                write!(writer, ",{}", trace.samples()[index])?;
            }
            writeln!(writer)?;
        }
        Ok(())
    }
}
