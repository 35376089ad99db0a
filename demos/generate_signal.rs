//! Generates the synthetic noisy reference signal and writes it to disk
//! under the `_fs<rate>Hz` naming convention.
//!
//! Run with `cargo run --example generate_signal`.

use anyhow::Result;
use smoothtrack::{GeneratorConfig, io, noisy_sawtooth};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = GeneratorConfig {
        seed: Some(7),
        ..GeneratorConfig::default()
    };
    let signal = noisy_sawtooth(&config)?;

    let path = format!(
        "data/{}",
        io::tagged_file_name("noisy_input", signal.sample_rate(), "txt")
    );
    io::write_signal(&path, &signal)?;

    println!(
        "wrote {} samples ({}s at {} Hz) to {path}",
        signal.len(),
        signal.duration(),
        signal.sample_rate()
    );
    Ok(())
}
