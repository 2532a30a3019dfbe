//! Variate generators for families that `rand_distr` does not cover directly.
//!
//! Each adapter is built once at family construction and implements
//! [`Distribution<f64>`], so the sampler draws from every family the same way.

use rand::Rng;
use rand::distr::Distribution;
use rand::distr::weighted::WeightedIndex;
use rand::distr::Uniform;
use rand_distr::{ChiSquared, Exp, Gamma, Poisson};

use crate::rng_util;

/// Wraps an integer-valued generator so that it yields `f64`.
#[derive(Clone, Debug)]
pub struct Lattice<D>(pub(crate) D);

macro_rules! lattice {
    ($($inner:ty => $int:ty),+ $(,)?) => {$(
        impl Distribution<f64> for Lattice<$inner> {
            #[allow(clippy::cast_lossless, clippy::cast_precision_loss)]
            fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
                let k: $int = self.0.sample(rng);
                k as f64
            }
        }
    )+};
}

lattice!(
    Uniform<i32> => i32,
    rand_distr::Binomial => u64,
    rand_distr::Geometric => u64,
    WeightedIndex<f64> => usize,
);

/// Laplace variates as a symmetric exponential around the mean.
#[derive(Clone, Debug)]
pub struct LaplaceVariate {
    pub(crate) mean: f64,
    pub(crate) tail: Exp<f64>,
}

impl Distribution<f64> for LaplaceVariate {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let magnitude = self.tail.sample(rng);
        if rng.random::<bool>() {
            self.mean + magnitude
        } else {
            self.mean - magnitude
        }
    }
}

/// Failures before the k-th success, drawn as a gamma-Poisson mixture.
///
/// `rate` is `None` when the success probability is one and every draw is 0.
#[derive(Clone, Debug)]
pub struct NegativeBinomialVariate {
    pub(crate) rate: Option<Gamma<f64>>,
}

impl Distribution<f64> for NegativeBinomialVariate {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let Some(rate) = &self.rate else {
            return 0.0;
        };
        let lambda = rate.sample(rng);
        match Poisson::new(lambda) {
            Ok(poisson) => poisson.sample(rng),
            // zero rate, or a rate past the generator's range
            Err(_) => lambda.max(0.0).round(),
        }
    }
}

/// Non-central chi-squared variates as a Poisson mixture of central ones.
///
/// A draw is `chi2(k)` plus `j` independent `chi2(2)` increments, with
/// `j ~ Poisson(lambda / 2)`.
#[derive(Clone, Debug)]
pub struct NonCentralVariate {
    pub(crate) central: ChiSquared<f64>,
    pub(crate) mixing: Option<Poisson<f64>>,
    pub(crate) increment: Exp<f64>,
}

impl Distribution<f64> for NonCentralVariate {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let mut x = self.central.sample(rng);
        if let Some(mixing) = &self.mixing {
            let j = mixing.sample(rng) as u64;
            for _ in 0..j {
                x += self.increment.sample(rng);
            }
        }
        x
    }
}

/// Picks an interval by weight, then a uniform point inside it.
#[derive(Clone, Debug)]
pub struct PiecewiseConstantVariate {
    pub(crate) intervals: Vec<f64>,
    pub(crate) pick: WeightedIndex<f64>,
}

impl Distribution<f64> for PiecewiseConstantVariate {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let i = self.pick.sample(rng);
        rng_util::f64_range(rng, self.intervals[i], self.intervals[i + 1])
    }
}

/// Picks an interval by trapezoid area, then inverts the linear density
/// inside it.
#[derive(Clone, Debug)]
pub struct PiecewiseLinearVariate {
    pub(crate) intervals: Vec<f64>,
    pub(crate) weights: Vec<f64>,
    pub(crate) pick: WeightedIndex<f64>,
}

impl Distribution<f64> for PiecewiseLinearVariate {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let i = self.pick.sample(rng);
        let (x0, x1) = (self.intervals[i], self.intervals[i + 1]);
        let (y0, y1) = (self.weights[i], self.weights[i + 1]);
        let u = rng_util::unit(rng);

        let slope = y1 - y0;
        let t = if slope.abs() <= f64::EPSILON * (y0 + y1) {
            u
        } else {
            // solve y0 t + slope t^2 / 2 = u (y0 + y1) / 2 for t in [0, 1]
            let disc = y0 * y0 + u * (y1 * y1 - y0 * y0);
            ((disc.max(0.0).sqrt() - y0) / slope).clamp(0.0, 1.0)
        };
        x0 + t * (x1 - x0)
    }
}
