//! Uniform families over an integer range and a real interval.

use rand::distr::Uniform;
use statrs::distribution::{self as sd, Continuous};

use super::variate::Lattice;
use super::{Family, fixed, integer, not_nan};
use crate::error::{Error, Result};

/// Integers drawn uniformly from `[a, b]`, both ends included.
///
/// The density is that of the real interval `[a, b]`, `1 / (b - a)`, so it
/// is flat between the integers and undefined when `a == b`.
#[derive(Clone, Debug)]
pub struct UniformInt {
    a: i32,
    b: i32,
    variate: Lattice<Uniform<i32>>,
}

impl UniformInt {
    /// Creates a uniform distribution over the integers `a..=b`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidParameter` if `a > b`.
    pub fn new(a: i32, b: i32) -> Result<Self> {
        let variate = Uniform::new_inclusive(a, b).map_err(Error::invalid(Self::NAME))?;
        Ok(Self {
            a,
            b,
            variate: Lattice(variate),
        })
    }

    /// Returns the smallest value.
    #[must_use]
    pub fn a(&self) -> i32 {
        self.a
    }

    /// Returns the largest value.
    #[must_use]
    pub fn b(&self) -> i32 {
        self.b
    }
}

impl Family for UniformInt {
    const NAME: &'static str = "UniformInt";
    type Variate = Lattice<Uniform<i32>>;

    fn params(&self) -> Vec<f64> {
        vec![f64::from(self.a), f64::from(self.b)]
    }

    fn from_params(params: &[f64]) -> Result<Self> {
        let [a, b] = fixed(Self::NAME, params)?;
        Self::new(integer(Self::NAME, "a", a)?, integer(Self::NAME, "b", b)?)
    }

    fn density(&self, x: f64) -> Result<f64> {
        not_nan(Self::NAME, x)?;
        if self.a == self.b {
            return Err(Error::domain(Self::NAME, x, "the range [a, b] has zero width"));
        }
        let (a, b) = (f64::from(self.a), f64::from(self.b));
        if x < a || x > b {
            return Ok(0.0);
        }
        Ok(1.0 / (b - a))
    }

    fn variate(&self) -> &Self::Variate {
        &self.variate
    }
}

/// Reals drawn uniformly from `[a, b)`.
#[derive(Clone, Debug)]
pub struct UniformReal {
    a: f64,
    b: f64,
    pdf: sd::Uniform,
    variate: Uniform<f64>,
}

impl UniformReal {
    /// Creates a uniform distribution over `[a, b)`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidParameter` unless `a < b` and both are finite.
    pub fn new(a: f64, b: f64) -> Result<Self> {
        let pdf = sd::Uniform::new(a, b).map_err(Error::invalid(Self::NAME))?;
        let variate = Uniform::new(a, b).map_err(Error::invalid(Self::NAME))?;
        Ok(Self { a, b, pdf, variate })
    }

    /// Returns the lower bound.
    #[must_use]
    pub fn a(&self) -> f64 {
        self.a
    }

    /// Returns the upper bound.
    #[must_use]
    pub fn b(&self) -> f64 {
        self.b
    }
}

impl Family for UniformReal {
    const NAME: &'static str = "UniformReal";
    type Variate = Uniform<f64>;

    fn params(&self) -> Vec<f64> {
        vec![self.a, self.b]
    }

    fn from_params(params: &[f64]) -> Result<Self> {
        let [a, b] = fixed(Self::NAME, params)?;
        Self::new(a, b)
    }

    fn density(&self, x: f64) -> Result<f64> {
        not_nan(Self::NAME, x)?;
        Ok(self.pdf.pdf(x))
    }

    fn variate(&self) -> &Self::Variate {
        &self.variate
    }
}
