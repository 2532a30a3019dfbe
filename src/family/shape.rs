use statrs::distribution::{self as sd, Continuous};

use super::{Family, fixed, not_nan};
use crate::error::{Error, Result};

/// Triangular distribution over `[a, c]` with mode `b`.
#[derive(Clone, Debug)]
pub struct Triangle {
    a: f64,
    b: f64,
    c: f64,
    pdf: sd::Triangular,
    variate: rand_distr::Triangular<f64>,
}

impl Triangle {
    /// # Errors
    ///
    /// Returns `Error::InvalidParameter` unless `a <= b <= c` and `a < c`.
    pub fn new(a: f64, b: f64, c: f64) -> Result<Self> {
        let pdf = sd::Triangular::new(a, c, b).map_err(Error::invalid(Self::NAME))?;
        let variate = rand_distr::Triangular::new(a, c, b).map_err(Error::invalid(Self::NAME))?;
        Ok(Self {
            a,
            b,
            c,
            pdf,
            variate,
        })
    }

    /// Returns the lower bound.
    #[must_use]
    pub fn a(&self) -> f64 {
        self.a
    }

    /// Returns the mode.
    #[must_use]
    pub fn b(&self) -> f64 {
        self.b
    }

    /// Returns the upper bound.
    #[must_use]
    pub fn c(&self) -> f64 {
        self.c
    }
}

impl Family for Triangle {
    const NAME: &'static str = "Triangle";
    type Variate = rand_distr::Triangular<f64>;

    fn params(&self) -> Vec<f64> {
        vec![self.a, self.b, self.c]
    }

    fn from_params(params: &[f64]) -> Result<Self> {
        let [a, b, c] = fixed(Self::NAME, params)?;
        Self::new(a, b, c)
    }

    fn density(&self, x: f64) -> Result<f64> {
        not_nan(Self::NAME, x)?;
        Ok(self.pdf.pdf(x))
    }

    fn variate(&self) -> &Self::Variate {
        &self.variate
    }
}
