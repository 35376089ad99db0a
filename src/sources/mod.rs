//! Synthetic signal sources.
//!
//! This module contains the per-sample producers (waveform oscillator,
//! Gaussian noise) and the [`noisy_sawtooth`] generator that combines them
//! into the finite noisy reference [`Signal`] the filter engine consumes.

mod noise;
mod sawtooth;

pub use noise::GaussianNoise;
pub use sawtooth::SawtoothOscillator;

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::debug;

use crate::config::GeneratorConfig;
use crate::error::Error;
use crate::signal::Signal;

/// Common interface for per-sample signal producers.
///
/// The trait provides two fundamental operations:
/// - Single sample generation via `next_sample()`
/// - Batch generation via `fill()`
pub trait SampleSource {
    /// Generates the next sample from the source.
    fn next_sample(&mut self) -> f64;

    /// Generates multiple samples into a buffer.
    ///
    /// Default implementation calls `next_sample()` for each element.
    fn fill(&mut self, buffer: &mut [f64]) {
        for sample in buffer.iter_mut() {
            *sample = self.next_sample();
        }
    }
}

/// Generates the noisy reference signal described by `config`.
///
/// The deterministic waveform and the additive Gaussian noise come from
/// independent sources; each sample is `waveform + noise`. The returned
/// signal holds `round(sample_rate * duration)` samples. A seeded config
/// yields an identical signal on every call.
///
/// # Errors
///
/// Any out-of-domain config parameter is reported before a single sample is
/// produced.
///
/// # Examples
///
/// ```
/// use smoothtrack::{GeneratorConfig, noisy_sawtooth};
///
/// let config = GeneratorConfig {
///     seed: Some(42),
///     ..GeneratorConfig::default()
/// };
/// let signal = noisy_sawtooth(&config).unwrap();
/// assert_eq!(signal.len(), 2000);
/// ```
pub fn noisy_sawtooth(config: &GeneratorConfig) -> Result<Signal, Error> {
    config.validate()?;
    match config.seed {
        Some(seed) => synthesize(config, StdRng::seed_from_u64(seed)),
        None => synthesize(config, rand::thread_rng()),
    }
}

fn synthesize<R: Rng>(config: &GeneratorConfig, rng: R) -> Result<Signal, Error> {
    let mut wave =
        SawtoothOscillator::with_width(config.frequency, config.sample_rate, config.width);
    let mut noise = GaussianNoise::with_rng(config.noise_std, rng)?;

    let count = config.sample_count();
    let mut samples = Vec::with_capacity(count);
    for _ in 0..count {
        samples.push(wave.next_sample() + noise.next_sample());
    }

    debug!(
        samples = count,
        sample_rate = config.sample_rate,
        "generated noisy sawtooth"
    );
    Signal::new(samples, config.sample_rate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_matches_config() {
        let config = GeneratorConfig {
            seed: Some(1),
            ..GeneratorConfig::default()
        };
        let signal = noisy_sawtooth(&config).unwrap();
        assert_eq!(signal.len(), config.sample_count());
        assert_eq!(signal.sample_rate(), config.sample_rate);
    }

    #[test]
    fn test_seeded_generation_is_deterministic() {
        let config = GeneratorConfig {
            seed: Some(99),
            ..GeneratorConfig::default()
        };
        let first = noisy_sawtooth(&config).unwrap();
        let second = noisy_sawtooth(&config).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_different_seeds_differ() {
        let base = GeneratorConfig::default();
        let a = noisy_sawtooth(&GeneratorConfig {
            seed: Some(1),
            ..base.clone()
        })
        .unwrap();
        let b = noisy_sawtooth(&GeneratorConfig {
            seed: Some(2),
            ..base
        })
        .unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_zero_noise_is_pure_waveform() {
        let config = GeneratorConfig {
            noise_std: 0.0,
            seed: Some(5),
            ..GeneratorConfig::default()
        };
        let signal = noisy_sawtooth(&config).unwrap();
        for &sample in signal.samples() {
            assert!((-1.0..=1.0).contains(&sample));
        }
    }

    #[test]
    fn test_invalid_config_produces_no_signal() {
        let config = GeneratorConfig {
            duration: 0.0,
            ..GeneratorConfig::default()
        };
        assert!(noisy_sawtooth(&config).is_err());
    }

    #[test]
    fn test_fill_default_implementation() {
        struct Ramp(f64);
        impl SampleSource for Ramp {
            fn next_sample(&mut self) -> f64 {
                self.0 += 1.0;
                self.0
            }
        }

        let mut ramp = Ramp(0.0);
        let mut buffer = [0.0; 3];
        ramp.fill(&mut buffer);
        assert_eq!(buffer, [1.0, 2.0, 3.0]);
    }
}
