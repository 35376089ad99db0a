//! Smooths the noisy reference signal with both filter variants and writes
//! the raw and smoothed sequences plus an aligned CSV for plotting.
//!
//! Run with `cargo run --example compare_filters`. If the noisy input file
//! from `generate_signal` exists it is read back (exercising the file-name
//! convention); otherwise a fresh signal is generated and saved first.

use std::fs::File;
use std::path::Path;

use anyhow::Result;
use smoothtrack::{AlphaBeta, Comparison, Ewma, GeneratorConfig, Smoother, io, noisy_sawtooth};

/// EWMA smoothing time constant in seconds.
const TIME_CONSTANT: f64 = 10e-3;
/// Alpha-beta position time constant in seconds.
const TIME_CONSTANT_POSITION: f64 = 10e-3;
/// Alpha-beta velocity time constant in seconds.
const TIME_CONSTANT_VELOCITY: f64 = 10e-6;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = GeneratorConfig {
        seed: Some(7),
        ..GeneratorConfig::default()
    };
    let input_path = format!(
        "data/{}",
        io::tagged_file_name("noisy_input", config.sample_rate, "txt")
    );

    let signal = if Path::new(&input_path).exists() {
        io::read_signal(&input_path)?
    } else {
        let signal = noisy_sawtooth(&config)?;
        io::write_signal(&input_path, &signal)?;
        signal
    };

    let mut ewma = Ewma::from_time_constant(TIME_CONSTANT, signal.sample_rate())?;
    let ewma_smoothed = ewma.smooth(&signal);
    io::write_signal(
        format!(
            "data/{}",
            io::tagged_file_name("ewma_smoothed_output", signal.sample_rate(), "txt")
        ),
        &ewma_smoothed,
    )?;

    let mut tracker = AlphaBeta::from_time_constants(
        TIME_CONSTANT_POSITION,
        TIME_CONSTANT_VELOCITY,
        signal.sample_rate(),
    )?;
    let tracked = tracker.smooth(&signal);
    io::write_signal(
        format!(
            "data/{}",
            io::tagged_file_name("alpha_beta_smoothed_output", signal.sample_rate(), "txt")
        ),
        &tracked,
    )?;

    println!(
        "smoothed {} samples: ewma alpha = {:.4}, alpha-beta gains = ({:.4}, {:.4})",
        signal.len(),
        ewma.alpha(),
        tracker.alpha(),
        tracker.beta()
    );

    let mut comparison = Comparison::new(signal);
    comparison.add_trace("ewma", ewma_smoothed)?;
    comparison.add_trace("alpha_beta", tracked)?;
    comparison.write_csv(&mut File::create("data/comparison.csv")?)?;

    println!("wrote data/comparison.csv");
    Ok(())
}
