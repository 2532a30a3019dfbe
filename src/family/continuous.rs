//! Continuous rate and shape families.

use statrs::distribution::{self as sd, Continuous};

use super::variate::LaplaceVariate;
use super::{Family, bounded, fixed, non_negative, not_nan};
use crate::error::{Error, Result};

/// Waiting time between events of a Poisson process with rate `lambda`.
#[derive(Clone, Debug)]
pub struct Exponential {
    lambda: f64,
    pdf: sd::Exp,
    variate: rand_distr::Exp<f64>,
}

impl Exponential {
    /// # Errors
    ///
    /// Returns `Error::InvalidParameter` unless `lambda > 0`.
    pub fn new(lambda: f64) -> Result<Self> {
        let pdf = sd::Exp::new(lambda).map_err(Error::invalid(Self::NAME))?;
        let variate = rand_distr::Exp::new(lambda).map_err(Error::invalid(Self::NAME))?;
        Ok(Self {
            lambda,
            pdf,
            variate,
        })
    }

    /// Returns the rate.
    #[must_use]
    pub fn lambda(&self) -> f64 {
        self.lambda
    }
}

impl Family for Exponential {
    const NAME: &'static str = "Exponential";
    type Variate = rand_distr::Exp<f64>;

    fn params(&self) -> Vec<f64> {
        vec![self.lambda]
    }

    fn from_params(params: &[f64]) -> Result<Self> {
        let [lambda] = fixed(Self::NAME, params)?;
        Self::new(lambda)
    }

    fn density(&self, x: f64) -> Result<f64> {
        non_negative(Self::NAME, x)?;
        Ok(self.pdf.pdf(x))
    }

    fn variate(&self) -> &Self::Variate {
        &self.variate
    }
}

/// Gamma distribution with shape `alpha` and scale `beta`.
#[derive(Clone, Debug)]
pub struct Gamma {
    alpha: f64,
    beta: f64,
    pdf: sd::Gamma,
    variate: rand_distr::Gamma<f64>,
}

impl Gamma {
    /// # Errors
    ///
    /// Returns `Error::InvalidParameter` unless `alpha > 0` and `beta > 0`.
    pub fn new(alpha: f64, beta: f64) -> Result<Self> {
        // statrs takes a rate, rand_distr a scale
        let pdf = sd::Gamma::new(alpha, 1.0 / beta).map_err(Error::invalid(Self::NAME))?;
        let variate = rand_distr::Gamma::new(alpha, beta).map_err(Error::invalid(Self::NAME))?;
        Ok(Self {
            alpha,
            beta,
            pdf,
            variate,
        })
    }

    /// Returns the shape.
    #[must_use]
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Returns the scale.
    #[must_use]
    pub fn beta(&self) -> f64 {
        self.beta
    }
}

impl Family for Gamma {
    const NAME: &'static str = "Gamma";
    type Variate = rand_distr::Gamma<f64>;

    fn params(&self) -> Vec<f64> {
        vec![self.alpha, self.beta]
    }

    fn from_params(params: &[f64]) -> Result<Self> {
        let [alpha, beta] = fixed(Self::NAME, params)?;
        Self::new(alpha, beta)
    }

    fn density(&self, x: f64) -> Result<f64> {
        non_negative(Self::NAME, x)?;
        bounded(Self::NAME, x, self.pdf.pdf(x))
    }

    fn variate(&self) -> &Self::Variate {
        &self.variate
    }
}

/// Weibull distribution with shape `a` and scale `b`.
#[derive(Clone, Debug)]
pub struct Weibull {
    a: f64,
    b: f64,
    pdf: sd::Weibull,
    variate: rand_distr::Weibull<f64>,
}

impl Weibull {
    /// # Errors
    ///
    /// Returns `Error::InvalidParameter` unless `a > 0` and `b > 0`.
    pub fn new(a: f64, b: f64) -> Result<Self> {
        let pdf = sd::Weibull::new(a, b).map_err(Error::invalid(Self::NAME))?;
        let variate = rand_distr::Weibull::new(b, a).map_err(Error::invalid(Self::NAME))?;
        Ok(Self { a, b, pdf, variate })
    }

    /// Returns the shape.
    #[must_use]
    pub fn a(&self) -> f64 {
        self.a
    }

    /// Returns the scale.
    #[must_use]
    pub fn b(&self) -> f64 {
        self.b
    }
}

impl Family for Weibull {
    const NAME: &'static str = "Weibull";
    type Variate = rand_distr::Weibull<f64>;

    fn params(&self) -> Vec<f64> {
        vec![self.a, self.b]
    }

    fn from_params(params: &[f64]) -> Result<Self> {
        let [a, b] = fixed(Self::NAME, params)?;
        Self::new(a, b)
    }

    fn density(&self, x: f64) -> Result<f64> {
        non_negative(Self::NAME, x)?;
        bounded(Self::NAME, x, self.pdf.pdf(x))
    }

    fn variate(&self) -> &Self::Variate {
        &self.variate
    }
}

/// Type I extreme value (Gumbel) distribution with location `a` and scale `b`.
///
/// `statrs` has no Gumbel density, so it is evaluated here:
/// `f(x) = exp(-(z + exp(-z))) / b` with `z = (x - a) / b`.
#[derive(Clone, Debug)]
pub struct ExtremeValue {
    a: f64,
    b: f64,
    variate: rand_distr::Gumbel<f64>,
}

impl ExtremeValue {
    /// # Errors
    ///
    /// Returns `Error::InvalidParameter` unless `b > 0` and `a` is finite.
    pub fn new(a: f64, b: f64) -> Result<Self> {
        let variate = rand_distr::Gumbel::new(a, b).map_err(Error::invalid(Self::NAME))?;
        Ok(Self { a, b, variate })
    }

    /// Returns the location.
    #[must_use]
    pub fn a(&self) -> f64 {
        self.a
    }

    /// Returns the scale.
    #[must_use]
    pub fn b(&self) -> f64 {
        self.b
    }
}

impl Family for ExtremeValue {
    const NAME: &'static str = "ExtremeValue";
    type Variate = rand_distr::Gumbel<f64>;

    fn params(&self) -> Vec<f64> {
        vec![self.a, self.b]
    }

    fn from_params(params: &[f64]) -> Result<Self> {
        let [a, b] = fixed(Self::NAME, params)?;
        Self::new(a, b)
    }

    fn density(&self, x: f64) -> Result<f64> {
        not_nan(Self::NAME, x)?;
        if x.is_infinite() {
            return Ok(0.0);
        }
        let z = (x - self.a) / self.b;
        Ok((-(z + (-z).exp())).exp() / self.b)
    }

    fn variate(&self) -> &Self::Variate {
        &self.variate
    }
}

/// Beta distribution on `[0, 1]` with shapes `alpha` and `beta`.
#[derive(Clone, Debug)]
pub struct Beta {
    alpha: f64,
    beta: f64,
    pdf: sd::Beta,
    variate: rand_distr::Beta<f64>,
}

impl Beta {
    /// # Errors
    ///
    /// Returns `Error::InvalidParameter` unless both shapes are positive.
    pub fn new(alpha: f64, beta: f64) -> Result<Self> {
        let pdf = sd::Beta::new(alpha, beta).map_err(Error::invalid(Self::NAME))?;
        let variate = rand_distr::Beta::new(alpha, beta).map_err(Error::invalid(Self::NAME))?;
        Ok(Self {
            alpha,
            beta,
            pdf,
            variate,
        })
    }

    /// Returns the first shape.
    #[must_use]
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Returns the second shape.
    #[must_use]
    pub fn beta(&self) -> f64 {
        self.beta
    }
}

impl Family for Beta {
    const NAME: &'static str = "Beta";
    type Variate = rand_distr::Beta<f64>;

    fn params(&self) -> Vec<f64> {
        vec![self.alpha, self.beta]
    }

    fn from_params(params: &[f64]) -> Result<Self> {
        let [alpha, beta] = fixed(Self::NAME, params)?;
        Self::new(alpha, beta)
    }

    fn density(&self, x: f64) -> Result<f64> {
        not_nan(Self::NAME, x)?;
        if !(0.0..=1.0).contains(&x) {
            return Err(Error::domain(Self::NAME, x, "outside the support [0, 1]"));
        }
        bounded(Self::NAME, x, self.pdf.pdf(x))
    }

    fn variate(&self) -> &Self::Variate {
        &self.variate
    }
}

/// Laplace (double exponential) distribution with the given mean and scale `beta`.
#[derive(Clone, Debug)]
pub struct Laplace {
    mean: f64,
    beta: f64,
    pdf: sd::Laplace,
    variate: LaplaceVariate,
}

impl Laplace {
    /// # Errors
    ///
    /// Returns `Error::InvalidParameter` unless `beta > 0`.
    pub fn new(mean: f64, beta: f64) -> Result<Self> {
        let pdf = sd::Laplace::new(mean, beta).map_err(Error::invalid(Self::NAME))?;
        let tail = rand_distr::Exp::new(1.0 / beta).map_err(Error::invalid(Self::NAME))?;
        Ok(Self {
            mean,
            beta,
            pdf,
            variate: LaplaceVariate { mean, tail },
        })
    }

    /// Returns the mean.
    #[must_use]
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Returns the scale.
    #[must_use]
    pub fn beta(&self) -> f64 {
        self.beta
    }
}

impl Family for Laplace {
    const NAME: &'static str = "Laplace";
    type Variate = LaplaceVariate;

    fn params(&self) -> Vec<f64> {
        vec![self.mean, self.beta]
    }

    fn from_params(params: &[f64]) -> Result<Self> {
        let [mean, beta] = fixed(Self::NAME, params)?;
        Self::new(mean, beta)
    }

    fn density(&self, x: f64) -> Result<f64> {
        not_nan(Self::NAME, x)?;
        Ok(self.pdf.pdf(x))
    }

    fn variate(&self) -> &Self::Variate {
        &self.variate
    }
}
