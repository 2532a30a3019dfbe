use polydist::{Beta, Exponential, ExtremeValue, Gamma, GenericDistribution, Laplace, Weibull};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::{assert_pdf, sample_mean};

#[test]
fn test_exponential() {
    let dist = GenericDistribution::from(Exponential::new(2.0).unwrap());
    assert_pdf(&dist, &[0.0, 1.0], &[2.0, 2.0 * (-2.0_f64).exp()]);
    let mean = sample_mean(&dist, 1, 20_000);
    assert!((mean - 0.5).abs() < 0.02, "mean {mean} should be near 0.5");
}

#[test]
fn test_exponential_truncates_at_negative_point() {
    let dist = GenericDistribution::from(Exponential::new(1.0).unwrap());
    let density = dist.pdf(&[1.0, 2.0, -1.0, 3.0]);
    assert_eq!(density.values.len(), 2);
    assert!(density.is_truncated());
}

#[test]
fn test_gamma_shape_and_scale() {
    let dist = GenericDistribution::from(Gamma::new(2.0, 3.0).unwrap());
    assert_pdf(&dist, &[3.0], &[(-1.0_f64).exp() / 3.0]);
    let mean = sample_mean(&dist, 2, 20_000);
    assert!((mean - 6.0).abs() < 0.15, "mean {mean} should be near 6");
}

#[test]
fn test_weibull_shape_and_scale() {
    let dist = GenericDistribution::from(Weibull::new(2.0, 1.0).unwrap());
    assert_pdf(&dist, &[1.0], &[2.0 * (-1.0_f64).exp()]);

    // scale * Gamma(1 + 1 / shape) = sqrt(pi) / 2
    let mean = sample_mean(&dist, 3, 20_000);
    let expected = core::f64::consts::PI.sqrt() / 2.0;
    assert!((mean - expected).abs() < 0.02, "mean {mean} should be near {expected}");
}

#[test]
fn test_extreme_value() {
    let dist = GenericDistribution::from(ExtremeValue::new(1.0, 2.0).unwrap());
    // at the location: exp(-1) / scale
    assert_pdf(&dist, &[1.0], &[(-1.0_f64).exp() / 2.0]);

    // location + scale * euler_gamma
    let mean = sample_mean(&dist, 4, 20_000);
    let expected = 1.0 + 2.0 * 0.577_215_664_901_532_9;
    assert!((mean - expected).abs() < 0.06, "mean {mean} should be near {expected}");
}

#[test]
fn test_beta() {
    let dist = GenericDistribution::from(Beta::new(2.0, 2.0).unwrap());
    assert_pdf(&dist, &[0.25, 0.5], &[1.125, 1.5]);

    let mut rng = StdRng::seed_from_u64(5);
    for x in dist.sample_n(&mut rng, 1000) {
        assert!((0.0..=1.0).contains(&x), "sample {x} outside [0, 1]");
    }

    let density = dist.pdf(&[0.5, 1.5]);
    assert_eq!(density.values.len(), 1);
    assert!(density.is_truncated());
}

#[test]
fn test_laplace() {
    let dist = GenericDistribution::from(Laplace::new(2.0, 0.5).unwrap());
    assert_pdf(&dist, &[2.0, 2.5], &[1.0, (-1.0_f64).exp()]);
    let mean = sample_mean(&dist, 6, 20_000);
    assert!((mean - 2.0).abs() < 0.03, "mean {mean} should be near 2");
}

#[test]
fn test_gamma_pole_truncates_evaluation() {
    let dist = GenericDistribution::from(Gamma::new(0.5, 1.0).unwrap());
    let density = dist.pdf(&[1.0, 0.0, 2.0]);
    assert_eq!(density.values.len(), 1);
    assert!(matches!(
        density.error,
        Some(polydist::Error::Domain { family: "Gamma", x, .. }) if x == 0.0
    ));
}
