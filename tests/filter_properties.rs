//! Behavioral properties of the smoothing filters over whole signals.

use smoothtrack::{AlphaBeta, Error, Ewma, GeneratorConfig, Signal, Smoother, noisy_sawtooth};

fn signal(samples: Vec<f64>) -> Signal {
    Signal::new(samples, 1000.0).unwrap()
}

/// Sum of squared successive differences, a simple roughness measure.
fn roughness(signal: &Signal) -> f64 {
    signal
        .samples()
        .windows(2)
        .map(|pair| (pair[1] - pair[0]).powi(2))
        .sum()
}

#[test]
fn output_length_matches_input_length() {
    for len in [1, 2, 17, 2000] {
        let input = signal((0..len).map(|t| (t as f64 * 0.1).sin()).collect());
        let ewma_out = Ewma::new(0.3).unwrap().smooth(&input);
        let tracker_out = AlphaBeta::new(0.3, 0.1).unwrap().smooth(&input);
        assert_eq!(ewma_out.len(), len);
        assert_eq!(tracker_out.len(), len);
    }
}

#[test]
fn first_output_equals_first_input() {
    let input = signal(vec![42.0, 41.0, 40.0]);
    assert_eq!(Ewma::new(0.7).unwrap().smooth(&input).first(), Some(42.0));
    assert_eq!(
        AlphaBeta::new(0.7, 0.3).unwrap().smooth(&input).first(),
        Some(42.0)
    );
}

#[test]
fn ewma_alpha_one_is_identity() {
    let input = signal(vec![0.3, -2.0, 5.5, 0.0, 1.0e-7]);
    let output = Ewma::new(1.0).unwrap().smooth(&input);
    assert_eq!(output.samples(), input.samples());
}

#[test]
fn ewma_alpha_zero_is_constant_at_seed() {
    let input = signal(vec![3.0, 100.0, -50.0, 0.0]);
    let output = Ewma::new(0.0).unwrap().smooth(&input);
    assert!(output.samples().iter().all(|&x| x == 3.0));
}

#[test]
fn alpha_beta_zero_gains_is_constant_at_seed() {
    let input = signal(vec![3.0, 100.0, -50.0, 0.0]);
    let output = AlphaBeta::new(0.0, 0.0).unwrap().smooth(&input);
    assert!(output.samples().iter().all(|&x| x == 3.0));
}

#[test]
fn ewma_concrete_scenario() {
    let input = signal(vec![0.0, 1.0, 2.0, 3.0, 4.0]);
    let output = Ewma::new(0.5).unwrap().smooth(&input);
    let expected = [0.0, 0.5, 1.25, 2.125, 3.0625];
    for (got, want) in output.samples().iter().zip(expected.iter()) {
        assert!((got - want).abs() < 1e-12, "expected {want}, got {got}");
    }
}

#[test]
fn empty_input_yields_empty_output() {
    let input = Signal::new(vec![], 1000.0).unwrap();
    assert!(Ewma::new(0.5).unwrap().smooth(&input).is_empty());
    assert!(AlphaBeta::new(0.5, 0.2).unwrap().smooth(&input).is_empty());
}

#[test]
fn out_of_domain_gain_is_a_configuration_error() {
    assert!(matches!(
        Ewma::new(-0.1),
        Err(Error::GainOutOfRange { name: "alpha", .. })
    ));
    assert!(matches!(
        AlphaBeta::new(0.5, 1.2),
        Err(Error::GainOutOfRange { name: "beta", .. })
    ));
}

#[test]
fn ewma_retains_steady_state_lag_on_a_ramp() {
    // x_t = x_0 + k * t with k = 0.5; the EWMA lag converges to
    // k * (1 - alpha) / alpha.
    let alpha = 0.4;
    let k = 0.5;
    let input = signal((0..2000).map(|t| 2.0 + k * t as f64).collect());
    let output = Ewma::new(alpha).unwrap().smooth(&input);

    let lag = input.samples().last().unwrap() - output.samples().last().unwrap();
    let expected = k * (1.0 - alpha) / alpha;
    assert!(
        (lag - expected).abs() < 1e-9,
        "expected lag {expected}, got {lag}"
    );
}

#[test]
fn alpha_beta_tracks_a_ramp_without_lag() {
    // Same ramp: once the rate estimate locks onto the slope, the tracking
    // error converges toward zero.
    let k = 0.5;
    let input = signal((0..2000).map(|t| 2.0 + k * t as f64).collect());
    let output = AlphaBeta::new(0.4, 0.2).unwrap().smooth(&input);

    let error = input.samples().last().unwrap() - output.samples().last().unwrap();
    assert!(error.abs() < 1e-9, "expected no steady-state lag, got {error}");
}

#[test]
fn smoothing_reduces_noise_roughness() {
    let config = GeneratorConfig {
        seed: Some(21),
        ..GeneratorConfig::default()
    };
    let noisy = noisy_sawtooth(&config).unwrap();

    let mut ewma = Ewma::from_time_constant(10e-3, noisy.sample_rate()).unwrap();
    let smoothed = ewma.smooth(&noisy);

    assert!(roughness(&smoothed) < roughness(&noisy) / 4.0);
}
