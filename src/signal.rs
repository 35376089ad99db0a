//! The `Signal` record: a finite sampled sequence with its sample rate.

use crate::error::Error;

/// An ordered, finite sequence of samples taken at a fixed rate.
///
/// The sample rate travels with the samples as explicit metadata rather than
/// being re-derived from file names or ambient constants; the file-name
/// convention lives only at the persistence boundary (see [`crate::io`]).
/// A `Signal` is immutable once produced; deriving a processed version goes
/// through [`Signal::with_samples`], which preserves the rate.
///
/// # Examples
///
/// ```
/// use smoothtrack::Signal;
///
/// let signal = Signal::new(vec![0.0, 0.5, 1.0], 1000.0).unwrap();
/// assert_eq!(signal.len(), 3);
/// assert_eq!(signal.sample_rate(), 1000.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Signal {
    samples: Vec<f64>,
    sample_rate: f64,
}

impl Signal {
    /// Creates a signal from raw samples and a sample rate in Hz.
    ///
    /// The sample sequence may be empty (a degenerate but valid signal).
    ///
    /// # Errors
    ///
    /// A non-positive or non-finite sample rate is a configuration error.
    pub fn new(samples: Vec<f64>, sample_rate: f64) -> Result<Self, Error> {
        if !(sample_rate.is_finite() && sample_rate > 0.0) {
            return Err(Error::NonPositive {
                name: "sample rate",
                value: sample_rate,
            });
        }
        Ok(Self {
            samples,
            sample_rate,
        })
    }

    /// The samples in temporal order.
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Sample rate in Hz.
    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the signal holds no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Signal duration in seconds.
    pub fn duration(&self) -> f64 {
        self.samples.len() as f64 / self.sample_rate
    }

    /// First sample, if any.
    pub fn first(&self) -> Option<f64> {
        self.samples.first().copied()
    }

    /// The time in seconds of each sample index (`index / sample_rate`).
    ///
    /// Signals of equal length and rate share the same axis, which is what
    /// the comparison harness overlays traces on.
    pub fn time_axis(&self) -> Vec<f64> {
        (0..self.samples.len())
            .map(|index| index as f64 / self.sample_rate)
            .collect()
    }

    /// Derives a new signal at the same sample rate from processed samples.
    pub fn with_samples(&self, samples: Vec<f64>) -> Self {
        Self {
            samples,
            sample_rate: self.sample_rate,
        }
    }
}
