use polydist::{
    Cauchy, ChiSquared, FisherF, GenericDistribution, Lognormal, NCChiSquared, Normal, StudentT,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::{assert_pdf, sample_mean};

#[test]
fn test_standard_normal_pdf() {
    let dist = GenericDistribution::from(Normal::new(0.0, 1.0).unwrap());
    assert_pdf(
        &dist,
        &[0.0, 1.0, -1.0],
        &[
            0.398_942_280_401_432_7,
            0.241_970_724_519_143_37,
            0.241_970_724_519_143_37,
        ],
    );
}

#[test]
fn test_normal_sample_moments() {
    let dist = GenericDistribution::from(Normal::new(5.0, 2.0).unwrap());
    let mut rng = StdRng::seed_from_u64(1);
    let draws = dist.sample_n(&mut rng, 20_000);
    let n = draws.len() as f64;
    let mean = draws.iter().sum::<f64>() / n;
    let var = draws.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;
    assert!((mean - 5.0).abs() < 0.05, "mean {mean} should be near 5");
    assert!((var - 4.0).abs() < 0.2, "variance {var} should be near 4");
}

#[test]
fn test_lognormal() {
    let dist = GenericDistribution::from(Lognormal::new(0.0, 1.0).unwrap());
    assert_pdf(&dist, &[1.0], &[0.398_942_280_401_432_7]);
    let mut rng = StdRng::seed_from_u64(2);
    assert!(dist.sample_n(&mut rng, 1000).iter().all(|&x| x > 0.0));
}

#[test]
fn test_chi_squared() {
    let dist = GenericDistribution::from(ChiSquared::new(2.0).unwrap());
    assert_pdf(&dist, &[0.0, 2.0], &[0.5, 0.5 * (-1.0_f64).exp()]);
    let mean = sample_mean(&dist, 3, 20_000);
    assert!((mean - 2.0).abs() < 0.06, "mean {mean} should be near 2");
}

#[test]
fn test_non_central_chi_squared() {
    let dist = GenericDistribution::from(NCChiSquared::new(2.0, 1.0).unwrap());
    assert_pdf(&dist, &[1.0], &[0.232_879_803_796_820_2]);

    // k + lambda
    let dist = GenericDistribution::from(NCChiSquared::new(3.0, 4.0).unwrap());
    let mean = sample_mean(&dist, 4, 20_000);
    assert!((mean - 7.0).abs() < 0.15, "mean {mean} should be near 7");
}

#[test]
fn test_cauchy() {
    let dist = GenericDistribution::from(Cauchy::new(1.0, 2.0).unwrap());
    let peak = 1.0 / (2.0 * core::f64::consts::PI);
    assert_pdf(&dist, &[1.0, 3.0], &[peak, peak / 2.0]);

    // heavy tails: check the median instead of the mean
    let mut rng = StdRng::seed_from_u64(5);
    let mut draws = dist.sample_n(&mut rng, 10_001);
    draws.sort_by(|a, b| a.partial_cmp(b).unwrap());
    let median = draws[5000];
    assert!((median - 1.0).abs() < 0.15, "median {median} should be near 1");
}

#[test]
fn test_fisher_f() {
    let dist = GenericDistribution::from(FisherF::new(2.0, 2.0).unwrap());
    assert_pdf(&dist, &[0.0, 1.0, 3.0], &[1.0, 0.25, 0.0625]);
}

#[test]
fn test_student_t() {
    let dist = GenericDistribution::from(StudentT::new(1.0).unwrap());
    assert_pdf(&dist, &[0.0], &[core::f64::consts::FRAC_1_PI]);

    let dist = GenericDistribution::from(StudentT::new(10.0).unwrap());
    let mean = sample_mean(&dist, 6, 20_000);
    assert!(mean.abs() < 0.05, "mean {mean} should be near 0");
}

#[test]
fn test_non_central_chi_squared_large_non_centrality() {
    let dist = GenericDistribution::from(NCChiSquared::new(2.0, 50_000.0).unwrap());
    let density = dist.pdf(&[50_000.0]);
    assert!(density.error.is_none(), "{:?}", density.error);
    let expected = 8.920_4e-4;
    assert!(((density.values[0] - expected) / expected).abs() < 1e-2);
}
