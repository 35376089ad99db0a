//! Exponentially weighted moving average smoother.

use super::Smoother;
use crate::error::Error;

/// Single-gain exponential smoother (EWMA).
///
/// Each update moves the estimate toward the measurement by the fixed
/// fraction `alpha`:
///
/// ```text
/// estimate += alpha * (measurement - estimate)
/// ```
///
/// `alpha = 1` is an exact pass-through (zero smoothing); `alpha = 0` never
/// updates, so the output stays at the first measurement. The first
/// measurement seeds the estimate and is returned unchanged.
///
/// # Examples
///
/// ```
/// use smoothtrack::{Ewma, Smoother};
///
/// let mut ewma = Ewma::new(0.5).unwrap();
/// assert_eq!(ewma.update(0.0), 0.0); // seeds
/// assert_eq!(ewma.update(1.0), 0.5);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Ewma {
    alpha: f64,
    estimate: f64,
    initialized: bool,
}

impl Ewma {
    /// Creates an EWMA smoother with the given gain.
    ///
    /// # Errors
    ///
    /// `alpha` outside `[0, 1]` is a configuration error; no update will
    /// run with an out-of-domain gain.
    pub fn new(alpha: f64) -> Result<Self, Error> {
        if !(0.0..=1.0).contains(&alpha) {
            return Err(Error::GainOutOfRange {
                name: "alpha",
                value: alpha,
            });
        }
        Ok(Self {
            alpha,
            estimate: 0.0,
            initialized: false,
        })
    }

    /// Derives the gain from a smoothing time constant and a sample rate.
    ///
    /// `alpha = 1 - exp(-1 / (sample_rate * time_constant))`, the discrete
    /// equivalent of a one-pole RC smoother with the given time constant in
    /// seconds. Longer time constants give smaller gains and heavier
    /// smoothing.
    ///
    /// # Errors
    ///
    /// Both arguments must be positive and finite.
    pub fn from_time_constant(time_constant: f64, sample_rate: f64) -> Result<Self, Error> {
        if !(time_constant.is_finite() && time_constant > 0.0) {
            return Err(Error::NonPositive {
                name: "time constant",
                value: time_constant,
            });
        }
        if !(sample_rate.is_finite() && sample_rate > 0.0) {
            return Err(Error::NonPositive {
                name: "sample rate",
                value: sample_rate,
            });
        }
        Self::new(1.0 - (-1.0 / (sample_rate * time_constant)).exp())
    }

    /// The smoothing gain.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }
}

impl Smoother for Ewma {
    fn update(&mut self, measurement: f64) -> f64 {
        if self.initialized {
            self.estimate += self.alpha * (measurement - self.estimate);
        } else {
            self.estimate = measurement;
            self.initialized = true;
        }
        self.estimate
    }

    fn reset(&mut self) {
        self.estimate = 0.0;
        self.initialized = false;
    }
}
