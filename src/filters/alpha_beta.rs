//! Alpha-beta (g-h) tracking filter.

use super::Smoother;
use crate::error::Error;

/// Two-gain tracker maintaining a position and a rate estimate.
///
/// Each step predicts the position forward by the current rate estimate,
/// measures the prediction residual, and corrects both estimates from it:
///
/// ```text
/// predicted = position + rate * dt
/// residual  = measurement - predicted
/// position  = predicted + alpha * residual
/// rate     += (beta / dt) * residual
/// ```
///
/// Tracking the rate lets the filter follow a sloped signal without the
/// permanent lag of a single-gain smoother, at the cost of a second tunable
/// gain: `beta` controls how aggressively each residual corrects the rate
/// estimate. With `beta = 0` the rate stays at its initial 0 and the filter
/// degenerates to position-only correction.
///
/// The first measurement seeds the position estimate (rate starts at 0) and
/// is returned unchanged.
///
/// # Examples
///
/// ```
/// use smoothtrack::{AlphaBeta, Smoother};
///
/// let mut tracker = AlphaBeta::new(0.5, 0.2).unwrap();
/// assert_eq!(tracker.update(0.0), 0.0); // seeds
/// let estimate = tracker.update(1.0);
/// assert!(estimate > 0.0 && estimate < 1.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct AlphaBeta {
    alpha: f64,
    beta: f64,
    dt: f64,
    position: f64,
    rate: f64,
    initialized: bool,
}

impl AlphaBeta {
    /// Creates a tracker with a unit time step.
    ///
    /// Use [`AlphaBeta::with_dt`] when the signal's sample spacing is
    /// tracked in seconds.
    ///
    /// # Errors
    ///
    /// Either gain outside `[0, 1]` is a configuration error; no update
    /// will run with an out-of-domain gain.
    pub fn new(alpha: f64, beta: f64) -> Result<Self, Error> {
        Self::with_dt(alpha, beta, 1.0)
    }

    /// Creates a tracker with an explicit time step in seconds
    /// (typically `1 / sample_rate`).
    ///
    /// # Errors
    ///
    /// Gains outside `[0, 1]` or a non-positive time step are configuration
    /// errors.
    pub fn with_dt(alpha: f64, beta: f64, dt: f64) -> Result<Self, Error> {
        if !(0.0..=1.0).contains(&alpha) {
            return Err(Error::GainOutOfRange {
                name: "alpha",
                value: alpha,
            });
        }
        if !(0.0..=1.0).contains(&beta) {
            return Err(Error::GainOutOfRange {
                name: "beta",
                value: beta,
            });
        }
        if !(dt.is_finite() && dt > 0.0) {
            return Err(Error::NonPositive {
                name: "dt",
                value: dt,
            });
        }
        Ok(Self {
            alpha,
            beta,
            dt,
            position: 0.0,
            rate: 0.0,
            initialized: false,
        })
    }

    /// Derives both gains from time constants, one per estimate.
    ///
    /// Each gain follows the same one-pole mapping as
    /// [`Ewma::from_time_constant`](crate::Ewma::from_time_constant):
    /// `tau_position` sets `alpha`, `tau_velocity` sets `beta`, and the
    /// time step is `1 / sample_rate`.
    ///
    /// # Errors
    ///
    /// All three arguments must be positive and finite.
    pub fn from_time_constants(
        tau_position: f64,
        tau_velocity: f64,
        sample_rate: f64,
    ) -> Result<Self, Error> {
        if !(tau_position.is_finite() && tau_position > 0.0) {
            return Err(Error::NonPositive {
                name: "position time constant",
                value: tau_position,
            });
        }
        if !(tau_velocity.is_finite() && tau_velocity > 0.0) {
            return Err(Error::NonPositive {
                name: "velocity time constant",
                value: tau_velocity,
            });
        }
        if !(sample_rate.is_finite() && sample_rate > 0.0) {
            return Err(Error::NonPositive {
                name: "sample rate",
                value: sample_rate,
            });
        }
        let alpha = 1.0 - (-1.0 / (sample_rate * tau_position)).exp();
        let beta = 1.0 - (-1.0 / (sample_rate * tau_velocity)).exp();
        Self::with_dt(alpha, beta, 1.0 / sample_rate)
    }

    /// The position gain.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// The rate gain.
    pub fn beta(&self) -> f64 {
        self.beta
    }

    /// The time step between successive samples in seconds.
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Current rate-of-change estimate (0 until updates lock onto a slope).
    pub fn rate(&self) -> f64 {
        self.rate
    }
}

impl Smoother for AlphaBeta {
    fn update(&mut self, measurement: f64) -> f64 {
        if !self.initialized {
            self.position = measurement;
            self.rate = 0.0;
            self.initialized = true;
            return self.position;
        }

        let predicted = self.position + self.rate * self.dt;
        let residual = measurement - predicted;
        self.position = predicted + self.alpha * residual;
        self.rate += self.beta / self.dt * residual;
        self.position
    }

    fn reset(&mut self) {
        self.position = 0.0;
        self.rate = 0.0;
        self.initialized = false;
    }
}
