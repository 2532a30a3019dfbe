use polydist::{Binomial, Error, GenericDistribution, Geometric, NegativeBinomial, Poisson};

use crate::{assert_pdf, sample_mean};

#[test]
fn test_binomial_pdf() {
    let dist = GenericDistribution::from(Binomial::new(10, 0.5).unwrap());
    assert_pdf(
        &dist,
        &[0.0, 5.0, 10.0, 2.5],
        &[1.0 / 1024.0, 252.0 / 1024.0, 1.0 / 1024.0, 0.0],
    );
}

#[test]
fn test_binomial_pdf_truncates_past_trials() {
    let dist = GenericDistribution::from(Binomial::new(4, 0.5).unwrap());
    let density = dist.pdf(&[1.0, 2.0, 5.0, 3.0]);
    assert_eq!(density.values.len(), 2);
    assert!(matches!(
        density.error,
        Some(Error::Domain {
            family: "Binomial",
            x,
            ..
        }) if x == 5.0
    ));
}

#[test]
fn test_binomial_sample_mean() {
    let dist = GenericDistribution::from(Binomial::new(20, 0.3).unwrap());
    let mean = sample_mean(&dist, 7, 20_000);
    assert!((mean - 6.0).abs() < 0.1, "mean {mean} should be near 6");
}

#[test]
fn test_geometric_pdf_and_mean() {
    let dist = GenericDistribution::from(Geometric::new(0.25).unwrap());
    assert_pdf(&dist, &[0.0, 1.0, 2.0], &[0.25, 0.1875, 0.140_625]);

    // failures before the first success: (1 - p) / p
    let mean = sample_mean(&dist, 8, 20_000);
    assert!((mean - 3.0).abs() < 0.15, "mean {mean} should be near 3");
}

#[test]
fn test_negative_binomial_pdf_and_mean() {
    let dist = GenericDistribution::from(NegativeBinomial::new(2.0, 0.5).unwrap());
    assert_pdf(&dist, &[0.0, 1.0, 2.0], &[0.25, 0.25, 0.1875]);

    // k (1 - p) / p
    let dist = GenericDistribution::from(NegativeBinomial::new(3.0, 0.4).unwrap());
    let mean = sample_mean(&dist, 9, 20_000);
    assert!((mean - 4.5).abs() < 0.15, "mean {mean} should be near 4.5");
}

#[test]
fn test_negative_binomial_certain_success_samples_zero() {
    let dist = GenericDistribution::from(NegativeBinomial::new(3.0, 1.0).unwrap());
    assert_eq!(sample_mean(&dist, 10, 100), 0.0);
}

#[test]
fn test_poisson_pdf_and_mean() {
    let dist = GenericDistribution::from(Poisson::new(3.0).unwrap());
    assert_pdf(
        &dist,
        &[0.0, 2.0],
        &[(-3.0_f64).exp(), 4.5 * (-3.0_f64).exp()],
    );
    let mean = sample_mean(&dist, 11, 20_000);
    assert!((mean - 3.0).abs() < 0.1, "mean {mean} should be near 3");
}

#[test]
fn test_count_families_reject_negative_points() {
    for dist in [
        GenericDistribution::from(Poisson::new(1.0).unwrap()),
        GenericDistribution::from(Geometric::new(0.5).unwrap()),
        GenericDistribution::from(NegativeBinomial::new(1.0, 0.5).unwrap()),
    ] {
        let density = dist.pdf(&[1.0, -1.0]);
        assert_eq!(density.values.len(), 1, "{} kept too many values", dist.family());
        assert!(density.is_truncated());
    }
}
