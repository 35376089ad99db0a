//! Error types for signal generation, smoothing, and persistence.

use std::num::ParseFloatError;

use thiserror::Error;

/// Errors reported by smoothtrack operations.
///
/// Configuration variants are surfaced before any filtering step runs, so a
/// failed run never yields a partially-smoothed signal. I/O variants carry
/// enough context (path, line number, offending content) to diagnose a bad
/// signal file without reopening it.
#[derive(Debug, Error)]
pub enum Error {
    /// A filter gain lies outside its `[0, 1]` domain.
    #[error("{name} must be within [0, 1], got {value}")]
    GainOutOfRange {
        /// Name of the offending gain (`"alpha"` or `"beta"`).
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// A quantity that must be strictly positive and finite was not.
    #[error("{name} must be positive and finite, got {value}")]
    NonPositive {
        /// Name of the offending quantity (sample rate, duration, dt, ...).
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// Noise standard deviation must be finite and non-negative.
    #[error("noise standard deviation must be finite and non-negative, got {0}")]
    InvalidNoiseStd(f64),

    /// Waveform width must lie in `[0, 1]`.
    #[error("waveform width must be within [0, 1], got {0}")]
    InvalidWidth(f64),

    /// Underlying file I/O failure (missing or unreadable signal file).
    #[error("signal file I/O failed")]
    Io(#[from] std::io::Error),

    /// A line of a signal file did not parse as a floating-point number.
    #[error("line {line} of {path} is not a number: {content:?}")]
    MalformedSample {
        /// Path of the offending file.
        path: String,
        /// One-based line number.
        line: usize,
        /// The raw line content.
        content: String,
        /// The parse failure itself.
        #[source]
        source: ParseFloatError,
    },

    /// The file name does not carry the `_fs<rate>Hz` sample-rate tag.
    #[error("no _fs<rate>Hz tag in file name {0:?}")]
    MissingSampleRateTag(String),

    /// Signals being compared have different lengths.
    #[error("signal length mismatch: expected {expected} samples, got {got}")]
    LengthMismatch {
        /// Length of the reference signal.
        expected: usize,
        /// Length of the rejected signal.
        got: usize,
    },

    /// Signals being compared have different sample rates.
    #[error("sample rate mismatch: expected {expected} Hz, got {got} Hz")]
    SampleRateMismatch {
        /// Rate of the reference signal.
        expected: f64,
        /// Rate of the rejected signal.
        got: f64,
    },
}
