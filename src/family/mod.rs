//! The closed set of distribution families.
//!
//! Every family owns its parameters together with the math library objects
//! built from them: a `statrs` density for closed-form families and a
//! `rand`/`rand_distr` variate generator. Constructors hand the parameters
//! to both libraries, so a family that exists is always evaluable and
//! always sample-able.
//!
//! - [`uniform`] - [`UniformInt`], [`UniformReal`]
//! - [`count`] - [`Binomial`], [`Geometric`], [`NegativeBinomial`], [`Poisson`]
//! - [`continuous`] - [`Exponential`], [`Gamma`], [`Weibull`], [`ExtremeValue`], [`Beta`], [`Laplace`]
//! - [`normal`] - [`Normal`], [`Lognormal`], [`ChiSquared`], [`NCChiSquared`], [`Cauchy`], [`FisherF`], [`StudentT`]
//! - [`sampling`] - [`Discrete`], [`PiecewiseConstant`], [`PiecewiseLinear`]
//! - [`shape`] - [`Triangle`]
//! - [`degenerate`] - [`Constant`]

use core::fmt::Debug;

use rand::distr::Distribution;

use crate::error::{Error, Result};

pub mod continuous;
pub mod count;
pub mod degenerate;
pub mod normal;
pub mod sampling;
pub mod shape;
pub mod uniform;
pub mod variate;

pub use continuous::{Beta, Exponential, ExtremeValue, Gamma, Laplace, Weibull};
pub use count::{Binomial, Geometric, NegativeBinomial, Poisson};
pub use degenerate::Constant;
pub use normal::{Cauchy, ChiSquared, FisherF, Lognormal, NCChiSquared, Normal, StudentT};
pub use sampling::{Discrete, PiecewiseConstant, PiecewiseLinear};
pub use shape::Triangle;
pub use uniform::{UniformInt, UniformReal};

/// A single distribution kind with its own parameters and math.
///
/// The text codec, density evaluator and sampler are written once against
/// this trait; each family only states its parameter list, its pointwise
/// density and its variate generator.
pub trait Family: Clone + Debug + Send + Sync + Sized {
    /// The family's name, used as the tag in distribution tokens.
    const NAME: &'static str;

    /// The variate generator drawn from by the sampler.
    type Variate: Distribution<f64>;

    /// Returns the parameters in codec order.
    fn params(&self) -> Vec<f64>;

    /// Rebuilds the family from parameters in codec order.
    ///
    /// # Errors
    ///
    /// Returns `Error::Arity` if the number of parameters is wrong and
    /// `Error::InvalidParameter` if the family rejects their values.
    fn from_params(params: &[f64]) -> Result<Self>;

    /// Returns the density (or mass) at `x`.
    ///
    /// # Errors
    ///
    /// Returns `Error::Domain` if the density is undefined at `x`.
    fn density(&self, x: f64) -> Result<f64>;

    /// Returns the variate generator for this parameter set.
    fn variate(&self) -> &Self::Variate;

    /// Returns the stored density table of a sampling-based family.
    ///
    /// Families with a table report it here, and density evaluation returns
    /// it verbatim instead of evaluating query points.
    fn table(&self) -> Option<&[f64]> {
        None
    }
}

/// Splits `params` into exactly `N` values.
pub(crate) fn fixed<const N: usize>(family: &'static str, params: &[f64]) -> Result<[f64; N]> {
    <[f64; N]>::try_from(params).map_err(|_| Error::Arity {
        family,
        expected: N,
        got: params.len(),
    })
}

/// Splits a length-prefixed parameter list `[n, v_0, .., v_k]` into `n` and
/// the remaining values, checking that the prefix matches `len(n)`.
///
/// `len` returns `None` when the expected length overflows.
pub(crate) fn prefixed<'a>(
    family: &'static str,
    params: &'a [f64],
    len: impl Fn(usize) -> Option<usize>,
) -> Result<(usize, &'a [f64])> {
    let (&n, rest) = params.split_first().ok_or(Error::Arity {
        family,
        expected: 1,
        got: 0,
    })?;
    let n: usize = whole(family, "table size", n)?;
    let expected = len(n);
    match expected {
        Some(expected) if n <= rest.len() && expected == rest.len() => Ok((n, rest)),
        _ => Err(Error::Arity {
            family,
            expected: expected.and_then(|e| e.checked_add(1)).unwrap_or(usize::MAX),
            got: params.len(),
        }),
    }
}

/// Checks that `value` is a non-negative whole number that fits in `T`.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]
pub(crate) fn whole<T: TryFrom<u64>>(
    family: &'static str,
    name: &'static str,
    value: f64,
) -> Result<T> {
    // u64::MAX is not an f64, so the bound is exclusive
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value < u64::MAX as f64 {
        if let Ok(v) = T::try_from(value as u64) {
            return Ok(v);
        }
    }
    Err(Error::InvalidParameter {
        family,
        reason: format!("{name} must be a non-negative integer in range, got {value}"),
    })
}

/// Checks that `value` is a whole number that fits in `T`.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub(crate) fn integer<T: TryFrom<i64>>(
    family: &'static str,
    name: &'static str,
    value: f64,
) -> Result<T> {
    if value.is_finite()
        && value.fract() == 0.0
        && value >= i64::MIN as f64
        && value < i64::MAX as f64
    {
        if let Ok(v) = T::try_from(value as i64) {
            return Ok(v);
        }
    }
    Err(Error::InvalidParameter {
        family,
        reason: format!("{name} must be an integer in range, got {value}"),
    })
}

/// Rejects an unbounded density value, such as a pole at the edge of the
/// support.
pub(crate) fn bounded(family: &'static str, x: f64, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::domain(family, x, "density is unbounded at this point"))
    }
}

/// Maps a query point of a count family onto its lattice.
///
/// Returns `Ok(None)` for points between lattice points, which carry no mass.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn lattice_point(family: &'static str, x: f64) -> Result<Option<u64>> {
    if x.is_nan() {
        return Err(Error::domain(family, x, "query point is NaN"));
    }
    if x < 0.0 || x.is_infinite() {
        return Err(Error::domain(family, x, "outside the support [0, inf)"));
    }
    if x.fract() != 0.0 {
        return Ok(None);
    }
    Ok(Some(x as u64))
}

/// Rejects NaN and negative query points of families supported on `[0, inf)`.
pub(crate) fn non_negative(family: &'static str, x: f64) -> Result<()> {
    if x.is_nan() {
        return Err(Error::domain(family, x, "query point is NaN"));
    }
    if x < 0.0 {
        return Err(Error::domain(family, x, "outside the support [0, inf)"));
    }
    Ok(())
}

/// Rejects NaN query points.
pub(crate) fn not_nan(family: &'static str, x: f64) -> Result<()> {
    if x.is_nan() {
        return Err(Error::domain(family, x, "query point is NaN"));
    }
    Ok(())
}

/// Implements the text codec and parameter equality for each family.
macro_rules! text_codec {
    ($($family:ty),+ $(,)?) => {$(
        impl core::fmt::Display for $family {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(&crate::codec::serialize(self))
            }
        }

        impl core::str::FromStr for $family {
            type Err = Error;

            fn from_str(token: &str) -> Result<Self> {
                crate::codec::deserialize(token)
            }
        }

        impl PartialEq for $family {
            fn eq(&self, other: &Self) -> bool {
                self.params() == other.params()
            }
        }
    )+};
}

text_codec!(
    UniformInt,
    UniformReal,
    Binomial,
    Geometric,
    NegativeBinomial,
    Poisson,
    Exponential,
    Gamma,
    Weibull,
    ExtremeValue,
    Beta,
    Laplace,
    Normal,
    Lognormal,
    ChiSquared,
    NCChiSquared,
    Cauchy,
    FisherF,
    StudentT,
    Discrete,
    PiecewiseConstant,
    PiecewiseLinear,
    Triangle,
    Constant,
);
