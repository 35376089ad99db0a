//! Configuration for synthetic signal generation.

use crate::error::Error;

/// Tunable constants for the synthetic noisy reference signal.
///
/// All generation parameters live here instead of in ambient globals, and a
/// config is validated as a whole before any sample is produced. The
/// defaults reproduce the reference experiment: a 4 Hz symmetric sawtooth
/// sampled at 1 kHz for two seconds with 0.1-sigma additive Gaussian noise.
///
/// Filter gains are deliberately not part of this struct; they belong to
/// the filter the experimenter constructs, see [`crate::Ewma::new`] and
/// [`crate::AlphaBeta::new`].
///
/// # Examples
///
/// ```
/// use smoothtrack::GeneratorConfig;
///
/// let config = GeneratorConfig {
///     seed: Some(7),
///     ..GeneratorConfig::default()
/// };
/// assert_eq!(config.sample_count(), 2000);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    /// Sample rate in Hz.
    pub sample_rate: f64,
    /// Signal duration in seconds.
    pub duration: f64,
    /// Waveform frequency in Hz.
    pub frequency: f64,
    /// Standard deviation of the additive Gaussian noise.
    pub noise_std: f64,
    /// Rising fraction of each waveform period: 0.5 is the symmetric
    /// triangle shape of the reference waveform, 1.0 a classic rising
    /// sawtooth.
    pub width: f64,
    /// Noise seed; `None` draws from the thread-local RNG.
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            sample_rate: 1000.0,
            duration: 2.0,
            frequency: 4.0,
            noise_std: 0.1,
            width: 0.5,
            seed: None,
        }
    }
}

impl GeneratorConfig {
    /// Checks every parameter against its domain.
    ///
    /// # Errors
    ///
    /// Non-positive or non-finite sample rate, duration, or frequency;
    /// negative or non-finite noise deviation; width outside `[0, 1]`.
    pub fn validate(&self) -> Result<(), Error> {
        if !(self.sample_rate.is_finite() && self.sample_rate > 0.0) {
            return Err(Error::NonPositive {
                name: "sample rate",
                value: self.sample_rate,
            });
        }
        if !(self.duration.is_finite() && self.duration > 0.0) {
            return Err(Error::NonPositive {
                name: "duration",
                value: self.duration,
            });
        }
        if !(self.frequency.is_finite() && self.frequency >= 0.0) {
            return Err(Error::NonPositive {
                name: "frequency",
                value: self.frequency,
            });
        }
        if !(self.noise_std.is_finite() && self.noise_std >= 0.0) {
            return Err(Error::InvalidNoiseStd(self.noise_std));
        }
        if !(0.0..=1.0).contains(&self.width) {
            return Err(Error::InvalidWidth(self.width));
        }
        Ok(())
    }

    /// Number of samples a generated signal will contain,
    /// `round(sample_rate * duration)`.
    pub fn sample_count(&self) -> usize {
        (self.sample_rate * self.duration).round() as usize
    }
}
