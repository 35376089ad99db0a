//! Sawtooth wave oscillator implementation.

use super::SampleSource;

/// A phase-accumulator oscillator producing a periodic sawtooth wave.
///
/// Each period rises linearly from -1.0 to 1.0 over the first `width`
/// fraction of the period, then falls linearly back to -1.0 over the rest.
/// `width = 1.0` gives the classic rising sawtooth; `width = 0.5` the
/// symmetric triangle used by the reference waveform. Phase continuity is
/// maintained across calls to `next_sample()`.
pub struct SawtoothOscillator {
    /// Current phase of the oscillator (0.0 to 1.0)
    phase: f64,
    /// Phase increment per sample (frequency / sample_rate)
    phase_increment: f64,
    /// Rising fraction of each period
    width: f64,
    /// Sample rate in Hz
    sample_rate: f64,
}

impl SawtoothOscillator {
    /// Creates a classic rising sawtooth oscillator.
    ///
    /// # Arguments
    ///
    /// * `frequency` - Frequency of the sawtooth wave in Hz
    /// * `sample_rate` - Sample rate in Hz
    ///
    /// # Examples
    ///
    /// ```
    /// use smoothtrack::{SampleSource, SawtoothOscillator};
    ///
    /// let mut osc = SawtoothOscillator::new(4.0, 1000.0);
    /// let sample = osc.next_sample();
    /// ```
    pub fn new(frequency: f64, sample_rate: f64) -> Self {
        Self::with_width(frequency, sample_rate, 1.0)
    }

    /// Creates an oscillator with an explicit rising fraction.
    ///
    /// `width` is clamped to `[0, 1]`: 1.0 rises the whole period, 0.5 is a
    /// symmetric triangle, 0.0 falls the whole period.
    pub fn with_width(frequency: f64, sample_rate: f64, width: f64) -> Self {
        Self {
            phase: 0.0,
            phase_increment: frequency / sample_rate,
            width: width.clamp(0.0, 1.0),
            sample_rate,
        }
    }

    /// Sets the frequency of the oscillator.
    pub fn set_frequency(&mut self, frequency: f64) {
        self.phase_increment = frequency / self.sample_rate;
    }

    /// Gets the current frequency of the oscillator.
    pub fn frequency(&self) -> f64 {
        self.phase_increment * self.sample_rate
    }

    /// Resets the oscillator phase to the start of a period.
    pub fn reset(&mut self) {
        self.phase = 0.0;
    }
}

impl SampleSource for SawtoothOscillator {
    fn next_sample(&mut self) -> f64 {
        // Rising segment covers [0, width), falling segment the rest.
        let sample = if self.phase < self.width {
            2.0 * self.phase / self.width - 1.0
        } else {
            1.0 - 2.0 * (self.phase - self.width) / (1.0 - self.width)
        };

        // Increment phase and wrap to [0.0, 1.0)
        self.phase += self.phase_increment;
        if self.phase >= 1.0 {
            self.phase -= 1.0;
        }

        sample
    }
}
