use polydist::{GenericDistribution, UniformInt, UniformReal};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::{assert_pdf, sample_mean};

#[test]
fn test_uniform_int_pdf_is_flat_over_range() {
    let dist = GenericDistribution::from(UniformInt::new(0, 4).unwrap());
    assert_pdf(
        &dist,
        &[-1.0, 0.5, 2.0, 4.0, 5.0],
        &[0.0, 0.25, 0.25, 0.25, 0.0],
    );
}

#[test]
fn test_uniform_int_degenerate_range_truncates() {
    let dist = GenericDistribution::from(UniformInt::new(2, 2).unwrap());
    let density = dist.pdf(&[2.0, 3.0]);
    assert!(density.values.is_empty());
    assert!(density.is_truncated());

    let mut rng = StdRng::seed_from_u64(8);
    assert_eq!(dist.sample_n(&mut rng, 3), vec![2.0; 3]);
}

#[test]
fn test_uniform_int_widest_range_evaluates() {
    let dist = GenericDistribution::from(UniformInt::new(i32::MIN, i32::MAX).unwrap());
    let density = dist.pdf(&[0.0]);
    assert!(density.error.is_none());
    assert!(density.values[0] > 0.0);
}

#[test]
fn test_uniform_int_samples_cover_range() {
    let dist = GenericDistribution::from(UniformInt::new(1, 6).unwrap());
    let mut rng = StdRng::seed_from_u64(123);
    let mut counts = [0u32; 6];
    for x in dist.sample_n(&mut rng, 6000) {
        assert_eq!(x.fract(), 0.0, "sample {x} is not an integer");
        assert!((1.0..=6.0).contains(&x), "sample {x} out of range [1, 6]");
        counts[x as usize - 1] += 1;
    }
    for (face, &count) in counts.iter().enumerate() {
        assert!(
            (800..1200).contains(&count),
            "face {} drawn {count} times, expected about 1000",
            face + 1
        );
    }
}

#[test]
fn test_uniform_real_pdf_and_samples() {
    let dist = GenericDistribution::from(UniformReal::new(-1.0, 3.0).unwrap());
    assert_pdf(&dist, &[-2.0, 0.0, 2.9], &[0.0, 0.25, 0.25]);

    let mut rng = StdRng::seed_from_u64(42);
    for x in dist.sample_n(&mut rng, 1000) {
        assert!((-1.0..3.0).contains(&x), "sample {x} out of range [-1, 3)");
    }
    let mean = sample_mean(&dist, 1, 10_000);
    assert!((mean - 1.0).abs() < 0.05, "mean {mean} should be near 1");
}
