#![allow(clippy::cast_precision_loss)]

mod continuous;
mod count;
mod normal;
mod sampling;
mod uniform;

use polydist::GenericDistribution;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Asserts that `pdf` over `xs` returns every value and that each matches `expected`.
pub(crate) fn assert_pdf(dist: &GenericDistribution, xs: &[f64], expected: &[f64]) {
    let density = dist.pdf(xs);
    assert!(
        density.error.is_none(),
        "{} pdf failed: {:?}",
        dist.family(),
        density.error
    );
    assert_eq!(density.values.len(), xs.len());
    for ((x, got), want) in xs.iter().zip(&density.values).zip(expected) {
        assert!(
            (got - want).abs() <= 1e-9 * want.abs().max(1.0),
            "{} pdf({x}) = {got}, expected {want}",
            dist.family()
        );
    }
}

/// Mean of `n` draws from a seeded source.
pub(crate) fn sample_mean(dist: &GenericDistribution, seed: u64, n: usize) -> f64 {
    let mut rng = StdRng::seed_from_u64(seed);
    let draws = dist.sample_n(&mut rng, n);
    draws.iter().sum::<f64>() / n as f64
}
