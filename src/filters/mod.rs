//! Recursive smoothing filters.
//!
//! This module contains the causal smoothing strategies, the single-gain
//! [`Ewma`] and the two-gain [`AlphaBeta`] tracker, behind the common
//! [`Smoother`] contract. Each variant is an independent strategy with its
//! own exclusively-owned state; adding a further variant (say an
//! alpha-beta-gamma tracker) does not touch the existing ones.

mod alpha_beta;
mod ewma;

pub use alpha_beta::AlphaBeta;
pub use ewma::Ewma;

use crate::signal::Signal;

/// Common interface for causal recursive smoothers.
///
/// A smoother folds measurements in one at a time and returns the updated
/// estimate after each. Because every step depends on the previous step's
/// state, the recurrence is inherently serial; `smooth` processes a whole
/// signal in temporal order.
///
/// Gain parameters are validated when a filter is constructed, so every
/// method here is total: no update can fail, and a run can never abort
/// part-way through a signal.
pub trait Smoother {
    /// Folds one measurement into the filter state and returns the updated
    /// estimate.
    ///
    /// The first measurement after construction or [`reset`](Smoother::reset)
    /// seeds the state and is returned unchanged, which avoids the biased
    /// startup transient of seeding toward zero.
    fn update(&mut self, measurement: f64) -> f64;

    /// Clears the filter memory so the next measurement seeds a fresh run.
    fn reset(&mut self);

    /// Smooths an entire signal, producing an output of equal length and
    /// sample rate.
    ///
    /// State is reset first, so repeated calls on the same filter are
    /// independent runs. An empty input yields an empty output, not an
    /// error.
    fn smooth(&mut self, input: &Signal) -> Signal {
        self.reset();
        let estimates = input.samples().iter().map(|&x| self.update(x)).collect();
        input.with_samples(estimates)
    }
}
