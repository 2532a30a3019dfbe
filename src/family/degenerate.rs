use rand::Rng;
use rand::distr::Distribution;

use super::{Family, fixed};
use crate::error::Result;

/// A fixed, non-random value.
///
/// Lets a generic distribution stand in for a plain number: its density is
/// the value itself at every query point, and every sample is the value.
#[derive(Clone, Copy, Debug, Default)]
pub struct Constant {
    a: f64,
}

impl Constant {
    /// Creates a constant with value `a`.
    #[must_use]
    pub fn new(a: f64) -> Self {
        Self { a }
    }

    /// Returns the value.
    #[must_use]
    pub fn a(&self) -> f64 {
        self.a
    }
}

impl Distribution<f64> for Constant {
    fn sample<R: Rng + ?Sized>(&self, _rng: &mut R) -> f64 {
        self.a
    }
}

impl Family for Constant {
    const NAME: &'static str = "Constant";
    type Variate = Self;

    fn params(&self) -> Vec<f64> {
        vec![self.a]
    }

    fn from_params(params: &[f64]) -> Result<Self> {
        let [a] = fixed(Self::NAME, params)?;
        Ok(Self::new(a))
    }

    fn density(&self, _x: f64) -> Result<f64> {
        Ok(self.a)
    }

    fn variate(&self) -> &Self::Variate {
        self
    }
}
