//! Count families: Bernoulli-trial and Poisson-process counts.
//!
//! Every query point must lie on `[0, inf)`; points between integers carry
//! no mass.

use statrs::distribution::{self as sd, Discrete as _};

use super::variate::{Lattice, NegativeBinomialVariate};
use super::{Family, fixed, lattice_point, whole};
use crate::error::{Error, Result};

/// Number of successes in `t` independent trials with success probability `p`.
#[derive(Clone, Debug)]
pub struct Binomial {
    t: u32,
    p: f64,
    mass: sd::Binomial,
    variate: Lattice<rand_distr::Binomial>,
}

impl Binomial {
    /// # Errors
    ///
    /// Returns `Error::InvalidParameter` unless `p` is in `[0, 1]`.
    pub fn new(t: u32, p: f64) -> Result<Self> {
        let mass = sd::Binomial::new(p, u64::from(t)).map_err(Error::invalid(Self::NAME))?;
        let variate =
            rand_distr::Binomial::new(u64::from(t), p).map_err(Error::invalid(Self::NAME))?;
        Ok(Self {
            t,
            p,
            mass,
            variate: Lattice(variate),
        })
    }

    /// Returns the number of trials.
    #[must_use]
    pub fn t(&self) -> u32 {
        self.t
    }

    /// Returns the success probability.
    #[must_use]
    pub fn p(&self) -> f64 {
        self.p
    }
}

impl Family for Binomial {
    const NAME: &'static str = "Binomial";
    type Variate = Lattice<rand_distr::Binomial>;

    fn params(&self) -> Vec<f64> {
        vec![f64::from(self.t), self.p]
    }

    fn from_params(params: &[f64]) -> Result<Self> {
        let [t, p] = fixed(Self::NAME, params)?;
        Self::new(whole(Self::NAME, "trials", t)?, p)
    }

    fn density(&self, x: f64) -> Result<f64> {
        match lattice_point(Self::NAME, x)? {
            Some(k) if k > u64::from(self.t) => Err(Error::domain(
                Self::NAME,
                x,
                "exceeds the number of trials",
            )),
            Some(k) => Ok(self.mass.pmf(k)),
            None => Ok(0.0),
        }
    }

    fn variate(&self) -> &Self::Variate {
        &self.variate
    }
}

/// Number of failures before the first success, with success probability `p`.
#[derive(Clone, Debug)]
pub struct Geometric {
    p: f64,
    mass: sd::Geometric,
    variate: Lattice<rand_distr::Geometric>,
}

impl Geometric {
    /// # Errors
    ///
    /// Returns `Error::InvalidParameter` unless `p` is in `(0, 1]`.
    pub fn new(p: f64) -> Result<Self> {
        let mass = sd::Geometric::new(p).map_err(Error::invalid(Self::NAME))?;
        let variate = rand_distr::Geometric::new(p).map_err(Error::invalid(Self::NAME))?;
        Ok(Self {
            p,
            mass,
            variate: Lattice(variate),
        })
    }

    /// Returns the success probability.
    #[must_use]
    pub fn p(&self) -> f64 {
        self.p
    }
}

impl Family for Geometric {
    const NAME: &'static str = "Geometric";
    type Variate = Lattice<rand_distr::Geometric>;

    fn params(&self) -> Vec<f64> {
        vec![self.p]
    }

    fn from_params(params: &[f64]) -> Result<Self> {
        let [p] = fixed(Self::NAME, params)?;
        Self::new(p)
    }

    fn density(&self, x: f64) -> Result<f64> {
        // statrs counts trials (support starts at 1), this family counts failures
        Ok(lattice_point(Self::NAME, x)?.map_or(0.0, |k| self.mass.pmf(k.saturating_add(1))))
    }

    fn variate(&self) -> &Self::Variate {
        &self.variate
    }
}

/// Number of failures before the `k`-th success, with success probability `p`.
#[derive(Clone, Debug)]
pub struct NegativeBinomial {
    k: f64,
    p: f64,
    mass: sd::NegativeBinomial,
    variate: NegativeBinomialVariate,
}

impl NegativeBinomial {
    /// # Errors
    ///
    /// Returns `Error::InvalidParameter` unless `k > 0` and `p` is in `(0, 1]`.
    pub fn new(k: f64, p: f64) -> Result<Self> {
        let mass = sd::NegativeBinomial::new(k, p).map_err(Error::invalid(Self::NAME))?;
        if !(k > 0.0 && p > 0.0) {
            return Err(Error::InvalidParameter {
                family: Self::NAME,
                reason: format!("k and p must be positive, got k = {k}, p = {p}"),
            });
        }
        let rate = if p < 1.0 {
            Some(rand_distr::Gamma::new(k, (1.0 - p) / p).map_err(Error::invalid(Self::NAME))?)
        } else {
            None
        };
        Ok(Self {
            k,
            p,
            mass,
            variate: NegativeBinomialVariate { rate },
        })
    }

    /// Returns the number of successes to wait for.
    #[must_use]
    pub fn k(&self) -> f64 {
        self.k
    }

    /// Returns the success probability.
    #[must_use]
    pub fn p(&self) -> f64 {
        self.p
    }
}

impl Family for NegativeBinomial {
    const NAME: &'static str = "NegativeBinomial";
    type Variate = NegativeBinomialVariate;

    fn params(&self) -> Vec<f64> {
        vec![self.k, self.p]
    }

    fn from_params(params: &[f64]) -> Result<Self> {
        let [k, p] = fixed(Self::NAME, params)?;
        Self::new(k, p)
    }

    fn density(&self, x: f64) -> Result<f64> {
        Ok(lattice_point(Self::NAME, x)?.map_or(0.0, |n| self.mass.pmf(n)))
    }

    fn variate(&self) -> &Self::Variate {
        &self.variate
    }
}

/// Number of events in a unit interval of a Poisson process with the given mean.
#[derive(Clone, Debug)]
pub struct Poisson {
    mean: f64,
    mass: sd::Poisson,
    variate: rand_distr::Poisson<f64>,
}

impl Poisson {
    /// # Errors
    ///
    /// Returns `Error::InvalidParameter` unless `mean > 0`.
    pub fn new(mean: f64) -> Result<Self> {
        let mass = sd::Poisson::new(mean).map_err(Error::invalid(Self::NAME))?;
        let variate = rand_distr::Poisson::new(mean).map_err(Error::invalid(Self::NAME))?;
        Ok(Self {
            mean,
            mass,
            variate,
        })
    }

    /// Returns the mean.
    #[must_use]
    pub fn mean(&self) -> f64 {
        self.mean
    }
}

impl Family for Poisson {
    const NAME: &'static str = "Poisson";
    type Variate = rand_distr::Poisson<f64>;

    fn params(&self) -> Vec<f64> {
        vec![self.mean]
    }

    fn from_params(params: &[f64]) -> Result<Self> {
        let [mean] = fixed(Self::NAME, params)?;
        Self::new(mean)
    }

    fn density(&self, x: f64) -> Result<f64> {
        Ok(lattice_point(Self::NAME, x)?.map_or(0.0, |k| self.mass.pmf(k)))
    }

    fn variate(&self) -> &Self::Variate {
        &self.variate
    }
}
