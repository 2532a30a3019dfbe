//! The runtime-selected distribution value.

use core::fmt;
use core::str::FromStr;

use rand::Rng;

use crate::codec;
use crate::density::{self, Density};
use crate::error::{Error, Result};
use crate::family::{
    Beta, Binomial, Cauchy, ChiSquared, Constant, Discrete, Exponential, ExtremeValue, Family,
    FisherF, Gamma, Geometric, Laplace, Lognormal, NCChiSquared, NegativeBinomial, Normal,
    PiecewiseConstant, PiecewiseLinear, Poisson, StudentT, Triangle, UniformInt, UniformReal,
    Weibull,
};
use crate::sampler;

/// A probability distribution whose family is chosen at runtime.
///
/// Holds exactly one family instance. Build it from any family with
/// [`From`], reconfigure it by assigning another, and persist it through
/// its [`Display`](fmt::Display)/[`FromStr`] token `"<Family> <params>"`.
///
/// # Examples
///
/// ```
/// use polydist::{Constant, GenericDistribution, Normal};
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let mut dist = GenericDistribution::from(Normal::new(0.0, 1.0).unwrap());
/// let density = dist.pdf(&[0.0, 1.0, -1.0]);
/// assert_eq!(density.values.len(), 3);
/// assert!((density.values[0] - 0.398_942).abs() < 1e-6);
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let samples = dist.sample_n(&mut rng, 100);
/// assert_eq!(samples.len(), 100);
///
/// dist = Constant::new(5.0).into();
/// assert_eq!(dist.pdf(&[0.0, 100.0]).values, vec![5.0, 5.0]);
/// assert_eq!(dist.to_string(), "Constant 5");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum GenericDistribution {
    /// Integers uniform on `[a, b]`.
    UniformInt(UniformInt),
    /// Reals uniform on `[a, b)`.
    UniformReal(UniformReal),
    /// Successes in a fixed number of trials.
    Binomial(Binomial),
    /// Failures before the first success.
    Geometric(Geometric),
    /// Failures before the k-th success.
    NegativeBinomial(NegativeBinomial),
    /// Poisson counts.
    Poisson(Poisson),
    /// Exponential waiting times.
    Exponential(Exponential),
    /// Gamma with shape and scale.
    Gamma(Gamma),
    /// Weibull with shape and scale.
    Weibull(Weibull),
    /// Gumbel extreme values.
    ExtremeValue(ExtremeValue),
    /// Beta on `[0, 1]`.
    Beta(Beta),
    /// Double exponential.
    Laplace(Laplace),
    /// Normal.
    Normal(Normal),
    /// Log-normal.
    Lognormal(Lognormal),
    /// Chi-squared.
    ChiSquared(ChiSquared),
    /// Non-central chi-squared.
    NCChiSquared(NCChiSquared),
    /// Cauchy.
    Cauchy(Cauchy),
    /// Fisher's F.
    FisherF(FisherF),
    /// Student's t.
    StudentT(StudentT),
    /// Weighted choice among `0..n`; density is the probability table.
    Discrete(Discrete),
    /// Step density; density is the per-interval table.
    PiecewiseConstant(PiecewiseConstant),
    /// Piecewise linear density; density is the per-boundary table.
    PiecewiseLinear(PiecewiseLinear),
    /// Triangular.
    Triangle(Triangle),
    /// A fixed value.
    Constant(Constant),
}

/// Runs `$body` with `$family` bound to the active family instance.
///
/// The tag is matched once; `$body` is monomorphized per family.
macro_rules! dispatch {
    ($value:expr, $family:ident => $body:expr) => {
        match $value {
            GenericDistribution::UniformInt($family) => $body,
            GenericDistribution::UniformReal($family) => $body,
            GenericDistribution::Binomial($family) => $body,
            GenericDistribution::Geometric($family) => $body,
            GenericDistribution::NegativeBinomial($family) => $body,
            GenericDistribution::Poisson($family) => $body,
            GenericDistribution::Exponential($family) => $body,
            GenericDistribution::Gamma($family) => $body,
            GenericDistribution::Weibull($family) => $body,
            GenericDistribution::ExtremeValue($family) => $body,
            GenericDistribution::Beta($family) => $body,
            GenericDistribution::Laplace($family) => $body,
            GenericDistribution::Normal($family) => $body,
            GenericDistribution::Lognormal($family) => $body,
            GenericDistribution::ChiSquared($family) => $body,
            GenericDistribution::NCChiSquared($family) => $body,
            GenericDistribution::Cauchy($family) => $body,
            GenericDistribution::FisherF($family) => $body,
            GenericDistribution::StudentT($family) => $body,
            GenericDistribution::Discrete($family) => $body,
            GenericDistribution::PiecewiseConstant($family) => $body,
            GenericDistribution::PiecewiseLinear($family) => $body,
            GenericDistribution::Triangle($family) => $body,
            GenericDistribution::Constant($family) => $body,
        }
    };
}

/// Implements `From<F>` for each family and the name-to-codec lookup.
macro_rules! families {
    ($($family:ident),+ $(,)?) => {
        $(
            impl From<$family> for GenericDistribution {
                fn from(family: $family) -> Self {
                    GenericDistribution::$family(family)
                }
            }
        )+

        impl GenericDistribution {
            /// Names of all families, in declaration order.
            pub const FAMILIES: &'static [&'static str] = &[$(<$family as Family>::NAME),+];

            fn parse_family(name: &str, token: &str) -> Result<Self> {
                $(
                    if name == <$family as Family>::NAME {
                        return codec::deserialize::<$family>(token).map(Self::from);
                    }
                )+
                Err(Error::UnknownFamily(name.to_owned()))
            }
        }
    };
}

families!(
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

impl GenericDistribution {
    /// Returns the name of the active family.
    #[must_use]
    pub fn family(&self) -> &'static str {
        dispatch!(self, f => family_name(f))
    }

    /// Returns `true` if the active family's density is a stored table.
    #[must_use]
    pub fn is_sampling_based(&self) -> bool {
        dispatch!(self, f => f.table().is_some())
    }

    /// Evaluates the density at each query point.
    ///
    /// Sampling-based families ignore `x` and return their stored table.
    /// If a point cannot be evaluated, the values before it are returned
    /// together with the error; see [`Density`].
    #[must_use]
    pub fn pdf(&self, x: &[f64]) -> Density {
        let mut values = Vec::with_capacity(x.len());
        let error = self.pdf_into(x, &mut values);
        Density { values, error }
    }

    /// Appends the density at each query point to `y`.
    ///
    /// Existing contents of `y` are kept, including for sampling-based
    /// families, which append their stored table. Clear `y` first to reuse it
    /// as a fresh output buffer.
    ///
    /// Returns the error that stopped evaluation early, if any; the error is
    /// also logged.
    pub fn pdf_into(&self, x: &[f64], y: &mut Vec<f64>) -> Option<Error> {
        dispatch!(self, f => density::evaluate(f, x, y))
    }

    /// Draws one value, advancing `rng`.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        dispatch!(self, f => rand::distr::Distribution::sample(f.variate(), rng))
    }

    /// Draws `n` values in sequence from the same `rng`.
    ///
    /// Equivalent to `n` calls of [`sample`](Self::sample).
    pub fn sample_n<R: Rng + ?Sized>(&self, rng: &mut R, n: usize) -> Vec<f64> {
        dispatch!(self, f => sampler::draw(f.variate(), rng, n))
    }

    /// Returns the active family's parameter token, without the family name.
    #[must_use]
    pub fn params_token(&self) -> String {
        dispatch!(self, f => codec::serialize(f))
    }
}

fn family_name<F: Family>(_: &F) -> &'static str {
    F::NAME
}

impl Default for GenericDistribution {
    fn default() -> Self {
        Constant::default().into()
    }
}

impl fmt::Display for GenericDistribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.family(), self.params_token())
    }
}

impl FromStr for GenericDistribution {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let (name, token) = s.split_once(char::is_whitespace).unwrap_or((s, ""));
        Self::parse_family(name, token)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for GenericDistribution {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for GenericDistribution {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> core::result::Result<Self, D::Error> {
        let token = <String as serde::Deserialize>::deserialize(deserializer)?;
        token.parse().map_err(serde::de::Error::custom)
    }
}
