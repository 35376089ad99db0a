//! Flat-file signal persistence.
//!
//! Signals are stored as plain text, one floating-point value per line, in
//! temporal order, with no header. The sample rate is not stored in the
//! file body; by convention it is carried in the file name as an
//! `_fs<rate>Hz` tag (e.g. `noisy_input_fs1000Hz.txt`). [`read_signal`]
//! parses the tag back into explicit [`Signal`] metadata and fails loudly
//! when it is missing, so a nonconforming rename cannot silently produce a
//! wrong rate.

use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use tracing::debug;

use crate::error::Error;
use crate::signal::Signal;

/// Builds a file name carrying the sample-rate tag.
///
/// The rate is rounded to a whole number of Hz, matching the tag grammar.
///
/// # Examples
///
/// ```
/// use smoothtrack::io::tagged_file_name;
///
/// assert_eq!(
///     tagged_file_name("noisy_input", 1000.0, "txt"),
///     "noisy_input_fs1000Hz.txt"
/// );
/// ```
pub fn tagged_file_name(stem: &str, sample_rate: f64, extension: &str) -> String {
    format!("{stem}_fs{}Hz.{extension}", sample_rate.round() as u64)
}

/// Parses the sample rate from a file name following the
/// `..._fs<integer>Hz.<ext>` convention.
///
/// # Errors
///
/// A name whose stem does not end in the tag is rejected rather than
/// guessed at.
pub fn sample_rate_from_path(path: impl AsRef<Path>) -> Result<f64, Error> {
    let stem = path
        .as_ref()
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or_default();
    let missing = || Error::MissingSampleRateTag(stem.to_string());

    let tag = stem.rfind("_fs").ok_or_else(missing)?;
    let digits = stem[tag + 3..].strip_suffix("Hz").ok_or_else(missing)?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(missing());
    }
    let rate: u64 = digits.parse().map_err(|_| missing())?;
    Ok(rate as f64)
}

/// Reads the raw sample sequence from a flat signal file.
///
/// # Errors
///
/// A missing or unreadable file, or any line that does not parse as a
/// floating-point number.
pub fn read_samples(path: impl AsRef<Path>) -> Result<Vec<f64>, Error> {
    let path = path.as_ref();
    let reader = BufReader::new(File::open(path)?);

    let mut samples = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let value: f64 = line.trim().parse().map_err(|source| Error::MalformedSample {
            path: path.display().to_string(),
            line: index + 1,
            content: line.clone(),
            source,
        })?;
        samples.push(value);
    }

    debug!(path = %path.display(), samples = samples.len(), "read signal file");
    Ok(samples)
}

/// Reads a signal, recovering the sample rate from the file-name tag.
pub fn read_signal(path: impl AsRef<Path>) -> Result<Signal, Error> {
    let path = path.as_ref();
    let sample_rate = sample_rate_from_path(path)?;
    Signal::new(read_samples(path)?, sample_rate)
}

/// Reads a signal with an explicitly supplied sample rate, bypassing the
/// file-name convention.
pub fn read_signal_with_rate(path: impl AsRef<Path>, sample_rate: f64) -> Result<Signal, Error> {
    Signal::new(read_samples(path)?, sample_rate)
}

/// Writes a signal as flat text, one sample per line.
///
/// Missing parent directories are created. The file name is the caller's
/// concern; [`tagged_file_name`] produces names [`read_signal`] can recover
/// the rate from.
pub fn write_signal(path: impl AsRef<Path>, signal: &Signal) -> Result<(), Error> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut writer = BufWriter::new(File::create(path)?);
    for sample in signal.samples() {
        writeln!(writer, "{sample}")?;
    }
    writer.flush()?;

    debug!(path = %path.display(), samples = signal.len(), "wrote signal file");
    Ok(())
}
