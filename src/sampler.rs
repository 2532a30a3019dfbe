//! Drawing samples from a generic distribution.

use rand::Rng;
use rand::distr::Distribution;

use crate::generic::GenericDistribution;

/// Draws `n` values from `variate`, continuing the sequence of `rng`.
pub(crate) fn draw<D, R>(variate: &D, rng: &mut R, n: usize) -> Vec<f64>
where
    D: Distribution<f64> + ?Sized,
    R: Rng + ?Sized,
{
    (0..n).map(|_| variate.sample(rng)).collect()
}

impl Distribution<f64> for GenericDistribution {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        GenericDistribution::sample(self, rng)
    }
}
