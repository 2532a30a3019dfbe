use polydist::{
    Constant, Discrete, GenericDistribution, PiecewiseConstant, PiecewiseLinear, Triangle,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::{assert_pdf, sample_mean};

#[test]
fn test_discrete_pdf_is_the_probability_table() {
    let dist = GenericDistribution::from(Discrete::new(vec![1.0, 2.0, 1.0]).unwrap());
    let expected = vec![0.25, 0.5, 0.25];
    assert_eq!(dist.pdf(&[]).values, expected);
    assert_eq!(dist.pdf(&[7.0, -3.0, 0.5, 100.0, 2.0]).values, expected);
    assert!(!dist.pdf(&[f64::NAN]).is_truncated());
}

#[test]
fn test_discrete_samples_follow_weights() {
    let dist = GenericDistribution::from(Discrete::new(vec![1.0, 2.0, 1.0]).unwrap());
    let mut rng = StdRng::seed_from_u64(1);
    let mut counts = [0u32; 3];
    for x in dist.sample_n(&mut rng, 8000) {
        counts[x as usize] += 1;
    }
    assert!((1800..2200).contains(&counts[0]), "counts {counts:?}");
    assert!((3700..4300).contains(&counts[1]), "counts {counts:?}");
    assert!((1800..2200).contains(&counts[2]), "counts {counts:?}");
}

#[test]
fn test_piecewise_constant_pdf_is_the_density_table() {
    let dist = GenericDistribution::from(
        PiecewiseConstant::new(vec![0.0, 1.0, 3.0], vec![1.0, 1.0]).unwrap(),
    );
    assert_eq!(dist.pdf(&[0.5, 1.5, 2.5, 10.0]).values, vec![0.5, 0.25]);
}

#[test]
fn test_piecewise_constant_samples() {
    let dist = GenericDistribution::from(
        PiecewiseConstant::new(vec![0.0, 1.0, 3.0], vec![1.0, 1.0]).unwrap(),
    );
    let mut rng = StdRng::seed_from_u64(2);
    let draws = dist.sample_n(&mut rng, 10_000);
    assert!(draws.iter().all(|x| (0.0..3.0).contains(x)));
    let below_one = draws.iter().filter(|&&x| x < 1.0).count();
    assert!(
        (4700..5300).contains(&below_one),
        "{below_one} of 10000 draws below 1, expected about half"
    );
}

#[test]
fn test_piecewise_linear_pdf_and_mean() {
    // density 2x on [0, 1]
    let dist =
        GenericDistribution::from(PiecewiseLinear::new(vec![0.0, 1.0], vec![0.0, 1.0]).unwrap());
    assert_eq!(dist.pdf(&[0.1, 0.2, 0.3]).values, vec![0.0, 2.0]);

    let mean = sample_mean(&dist, 3, 20_000);
    assert!((mean - 2.0 / 3.0).abs() < 0.01, "mean {mean} should be near 2/3");
}

#[test]
fn test_triangle() {
    let dist = GenericDistribution::from(Triangle::new(0.0, 1.0, 2.0).unwrap());
    assert_pdf(&dist, &[-1.0, 0.5, 1.0, 1.5, 3.0], &[0.0, 0.5, 1.0, 0.5, 0.0]);
    let mean = sample_mean(&dist, 4, 20_000);
    assert!((mean - 1.0).abs() < 0.02, "mean {mean} should be near 1");
}

#[test]
fn test_constant_pdf_repeats_value() {
    let dist = GenericDistribution::from(Constant::new(5.0));
    assert_eq!(dist.pdf(&[0.0, 100.0]).values, vec![5.0, 5.0]);
    assert!(dist.pdf(&[]).values.is_empty());
}

#[test]
fn test_constant_sample_ignores_rng() {
    let dist = GenericDistribution::from(Constant::new(5.0));
    let mut rng = StdRng::seed_from_u64(99);
    assert_eq!(dist.sample(&mut rng), 5.0);
    assert_eq!(dist.sample_n(&mut rng, 4), vec![5.0; 4]);
}
