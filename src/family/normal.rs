//! The normal family and the distributions derived from it.

use core::f64::consts::LN_2;

use statrs::distribution::{self as sd, Continuous};
use statrs::function::gamma::ln_gamma;

use super::variate::NonCentralVariate;
use super::{Family, bounded, fixed, non_negative, not_nan};
use crate::error::{Error, Result};

/// Upper bound on Poisson-weighted terms summed on each side of the largest
/// term of one non-central density.
const MAX_SERIES_TERMS: u32 = 10_000;

/// Normal distribution with the given mean and standard deviation `sigma`.
#[derive(Clone, Debug)]
pub struct Normal {
    mean: f64,
    sigma: f64,
    pdf: sd::Normal,
    variate: rand_distr::Normal<f64>,
}

impl Normal {
    /// # Errors
    ///
    /// Returns `Error::InvalidParameter` unless `sigma > 0` and `mean` is finite.
    pub fn new(mean: f64, sigma: f64) -> Result<Self> {
        let pdf = sd::Normal::new(mean, sigma).map_err(Error::invalid(Self::NAME))?;
        let variate = rand_distr::Normal::new(mean, sigma).map_err(Error::invalid(Self::NAME))?;
        Ok(Self {
            mean,
            sigma,
            pdf,
            variate,
        })
    }

    /// Returns the mean.
    #[must_use]
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Returns the standard deviation.
    #[must_use]
    pub fn sigma(&self) -> f64 {
        self.sigma
    }
}

impl Family for Normal {
    const NAME: &'static str = "Normal";
    type Variate = rand_distr::Normal<f64>;

    fn params(&self) -> Vec<f64> {
        vec![self.mean, self.sigma]
    }

    fn from_params(params: &[f64]) -> Result<Self> {
        let [mean, sigma] = fixed(Self::NAME, params)?;
        Self::new(mean, sigma)
    }

    fn density(&self, x: f64) -> Result<f64> {
        not_nan(Self::NAME, x)?;
        Ok(self.pdf.pdf(x))
    }

    fn variate(&self) -> &Self::Variate {
        &self.variate
    }
}

/// Distribution of `exp(X)` for `X ~ Normal(m, s)`.
#[derive(Clone, Debug)]
pub struct Lognormal {
    m: f64,
    s: f64,
    pdf: sd::LogNormal,
    variate: rand_distr::LogNormal<f64>,
}

impl Lognormal {
    /// # Errors
    ///
    /// Returns `Error::InvalidParameter` unless `s > 0`.
    pub fn new(m: f64, s: f64) -> Result<Self> {
        let pdf = sd::LogNormal::new(m, s).map_err(Error::invalid(Self::NAME))?;
        let variate = rand_distr::LogNormal::new(m, s).map_err(Error::invalid(Self::NAME))?;
        Ok(Self { m, s, pdf, variate })
    }

    /// Returns the mean of the underlying normal.
    #[must_use]
    pub fn m(&self) -> f64 {
        self.m
    }

    /// Returns the standard deviation of the underlying normal.
    #[must_use]
    pub fn s(&self) -> f64 {
        self.s
    }
}

impl Family for Lognormal {
    const NAME: &'static str = "Lognormal";
    type Variate = rand_distr::LogNormal<f64>;

    fn params(&self) -> Vec<f64> {
        vec![self.m, self.s]
    }

    fn from_params(params: &[f64]) -> Result<Self> {
        let [m, s] = fixed(Self::NAME, params)?;
        Self::new(m, s)
    }

    fn density(&self, x: f64) -> Result<f64> {
        non_negative(Self::NAME, x)?;
        Ok(self.pdf.pdf(x))
    }

    fn variate(&self) -> &Self::Variate {
        &self.variate
    }
}

/// Chi-squared distribution with `n` degrees of freedom.
#[derive(Clone, Debug)]
pub struct ChiSquared {
    n: f64,
    pdf: sd::ChiSquared,
    variate: rand_distr::ChiSquared<f64>,
}

impl ChiSquared {
    /// # Errors
    ///
    /// Returns `Error::InvalidParameter` unless `n > 0`.
    pub fn new(n: f64) -> Result<Self> {
        let pdf = sd::ChiSquared::new(n).map_err(Error::invalid(Self::NAME))?;
        let variate = rand_distr::ChiSquared::new(n).map_err(Error::invalid(Self::NAME))?;
        Ok(Self { n, pdf, variate })
    }

    /// Returns the degrees of freedom.
    #[must_use]
    pub fn n(&self) -> f64 {
        self.n
    }
}

impl Family for ChiSquared {
    const NAME: &'static str = "ChiSquared";
    type Variate = rand_distr::ChiSquared<f64>;

    fn params(&self) -> Vec<f64> {
        vec![self.n]
    }

    fn from_params(params: &[f64]) -> Result<Self> {
        let [n] = fixed(Self::NAME, params)?;
        Self::new(n)
    }

    fn density(&self, x: f64) -> Result<f64> {
        non_negative(Self::NAME, x)?;
        bounded(Self::NAME, x, self.pdf.pdf(x))
    }

    fn variate(&self) -> &Self::Variate {
        &self.variate
    }
}

/// Non-central chi-squared distribution with `k` degrees of freedom and
/// non-centrality `lambda`.
///
/// The density is the Poisson(`lambda / 2`) mixture of central chi-squared
/// densities with `k + 2i` degrees of freedom. The mixture is summed outward
/// from its largest term in both directions until the terms stop
/// contributing, scaled by that term so that far tails do not underflow.
#[derive(Clone, Debug)]
pub struct NCChiSquared {
    k: f64,
    lambda: f64,
    central: sd::ChiSquared,
    variate: NonCentralVariate,
}

impl NCChiSquared {
    /// # Errors
    ///
    /// Returns `Error::InvalidParameter` unless `k > 0` and `lambda >= 0`.
    pub fn new(k: f64, lambda: f64) -> Result<Self> {
        if !(lambda >= 0.0 && lambda.is_finite()) {
            return Err(Error::InvalidParameter {
                family: Self::NAME,
                reason: format!("non-centrality must be finite and non-negative, got {lambda}"),
            });
        }
        let central = sd::ChiSquared::new(k).map_err(Error::invalid(Self::NAME))?;
        let mixing = if lambda > 0.0 {
            Some(rand_distr::Poisson::new(lambda / 2.0).map_err(Error::invalid(Self::NAME))?)
        } else {
            None
        };
        let variate = NonCentralVariate {
            central: rand_distr::ChiSquared::new(k).map_err(Error::invalid(Self::NAME))?,
            mixing,
            increment: rand_distr::Exp::new(0.5).map_err(Error::invalid(Self::NAME))?,
        };
        Ok(Self {
            k,
            lambda,
            central,
            variate,
        })
    }

    /// Returns the degrees of freedom.
    #[must_use]
    pub fn k(&self) -> f64 {
        self.k
    }

    /// Returns the non-centrality.
    #[must_use]
    pub fn lambda(&self) -> f64 {
        self.lambda
    }

    /// Log of the `i`-th mixture term at `x`.
    fn ln_term(&self, i: f64, x: f64) -> f64 {
        let half = self.lambda / 2.0;
        let dof = self.k / 2.0 + i;
        let ln_weight = -half + i * half.ln() - ln_gamma(i + 1.0);
        let ln_chi = (dof - 1.0) * x.ln() - x / 2.0 - dof * LN_2 - ln_gamma(dof);
        ln_weight + ln_chi
    }

    /// Index of the largest mixture term at `x`.
    ///
    /// The log terms are concave in `i`. With digamma approximated by `ln`,
    /// the peak solves `(i + 1)(k / 2 + i) = lambda x / 4`.
    fn peak(&self, x: f64) -> f64 {
        let b = 1.0 + self.k / 2.0;
        let c = self.k / 2.0 - self.lambda * x / 4.0;
        let disc = (b * b - 4.0 * c).max(0.0);
        ((disc.sqrt() - b) / 2.0).max(0.0).floor()
    }

    fn series(&self, x: f64) -> Result<f64> {
        let start = self.peak(x);
        let ln_peak = self.ln_term(start, x);
        let mut sum = 1.0;
        let up = self.sweep(x, start, ln_peak, 1.0, &mut sum);
        let down = self.sweep(x, start, ln_peak, -1.0, &mut sum);
        if !(up && down) {
            return Err(Error::domain(Self::NAME, x, "series did not converge"));
        }
        bounded(Self::NAME, x, (ln_peak + sum.ln()).exp())
    }

    /// Adds the terms after `start` in the direction of `step`, relative to
    /// `exp(ln_peak)`. Returns `false` if the term budget ran out first.
    fn sweep(&self, x: f64, start: f64, ln_peak: f64, step: f64, sum: &mut f64) -> bool {
        let mut ln_previous = ln_peak;
        for n in 1..=MAX_SERIES_TERMS {
            let i = start + step * f64::from(n);
            if i < 0.0 {
                return true;
            }
            let ln_t = self.ln_term(i, x);
            let term = (ln_t - ln_peak).exp();
            *sum += term;
            if ln_t < ln_previous && term <= *sum * f64::EPSILON {
                return true;
            }
            ln_previous = ln_t;
        }
        false
    }
}

impl Family for NCChiSquared {
    const NAME: &'static str = "NCChiSquared";
    type Variate = NonCentralVariate;

    fn params(&self) -> Vec<f64> {
        vec![self.k, self.lambda]
    }

    fn from_params(params: &[f64]) -> Result<Self> {
        let [k, lambda] = fixed(Self::NAME, params)?;
        Self::new(k, lambda)
    }

    fn density(&self, x: f64) -> Result<f64> {
        non_negative(Self::NAME, x)?;
        if x.is_infinite() {
            return Ok(0.0);
        }
        if self.lambda == 0.0 {
            return bounded(Self::NAME, x, self.central.pdf(x));
        }
        if x == 0.0 {
            // only the k degrees of freedom term is non-zero at the origin
            return bounded(Self::NAME, x, (-self.lambda / 2.0).exp() * self.central.pdf(x));
        }
        self.series(x)
    }

    fn variate(&self) -> &Self::Variate {
        &self.variate
    }
}

/// Cauchy distribution with the given median and scale `sigma`.
#[derive(Clone, Debug)]
pub struct Cauchy {
    median: f64,
    sigma: f64,
    pdf: sd::Cauchy,
    variate: rand_distr::Cauchy<f64>,
}

impl Cauchy {
    /// # Errors
    ///
    /// Returns `Error::InvalidParameter` unless `sigma > 0`.
    pub fn new(median: f64, sigma: f64) -> Result<Self> {
        let pdf = sd::Cauchy::new(median, sigma).map_err(Error::invalid(Self::NAME))?;
        let variate = rand_distr::Cauchy::new(median, sigma).map_err(Error::invalid(Self::NAME))?;
        Ok(Self {
            median,
            sigma,
            pdf,
            variate,
        })
    }

    /// Returns the median.
    #[must_use]
    pub fn median(&self) -> f64 {
        self.median
    }

    /// Returns the scale.
    #[must_use]
    pub fn sigma(&self) -> f64 {
        self.sigma
    }
}

impl Family for Cauchy {
    const NAME: &'static str = "Cauchy";
    type Variate = rand_distr::Cauchy<f64>;

    fn params(&self) -> Vec<f64> {
        vec![self.median, self.sigma]
    }

    fn from_params(params: &[f64]) -> Result<Self> {
        let [median, sigma] = fixed(Self::NAME, params)?;
        Self::new(median, sigma)
    }

    fn density(&self, x: f64) -> Result<f64> {
        not_nan(Self::NAME, x)?;
        Ok(self.pdf.pdf(x))
    }

    fn variate(&self) -> &Self::Variate {
        &self.variate
    }
}

/// Fisher's F distribution with `m` and `n` degrees of freedom.
#[derive(Clone, Debug)]
pub struct FisherF {
    m: f64,
    n: f64,
    pdf: sd::FisherSnedecor,
    variate: rand_distr::FisherF<f64>,
}

impl FisherF {
    /// # Errors
    ///
    /// Returns `Error::InvalidParameter` unless `m > 0` and `n > 0`.
    pub fn new(m: f64, n: f64) -> Result<Self> {
        let pdf = sd::FisherSnedecor::new(m, n).map_err(Error::invalid(Self::NAME))?;
        let variate = rand_distr::FisherF::new(m, n).map_err(Error::invalid(Self::NAME))?;
        Ok(Self { m, n, pdf, variate })
    }

    /// Returns the numerator degrees of freedom.
    #[must_use]
    pub fn m(&self) -> f64 {
        self.m
    }

    /// Returns the denominator degrees of freedom.
    #[must_use]
    pub fn n(&self) -> f64 {
        self.n
    }
}

impl Family for FisherF {
    const NAME: &'static str = "FisherF";
    type Variate = rand_distr::FisherF<f64>;

    fn params(&self) -> Vec<f64> {
        vec![self.m, self.n]
    }

    fn from_params(params: &[f64]) -> Result<Self> {
        let [m, n] = fixed(Self::NAME, params)?;
        Self::new(m, n)
    }

    fn density(&self, x: f64) -> Result<f64> {
        non_negative(Self::NAME, x)?;
        if x == 0.0 {
            // the closed form is 0/0 at the origin
            return match self.m {
                m if m < 2.0 => Err(Error::domain(
                    Self::NAME,
                    x,
                    "density is unbounded at this point",
                )),
                m if m == 2.0 => Ok(1.0),
                _ => Ok(0.0),
            };
        }
        Ok(self.pdf.pdf(x))
    }

    fn variate(&self) -> &Self::Variate {
        &self.variate
    }
}
