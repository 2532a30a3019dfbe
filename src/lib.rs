#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![deny(unreachable_pub)]
#![deny(clippy::correctness)]
#![deny(clippy::suspicious)]
#![deny(clippy::style)]
#![deny(clippy::complexity)]
#![deny(clippy::perf)]
#![deny(clippy::pedantic)]
#![deny(clippy::std_instead_of_core)]
#![allow(clippy::float_cmp, clippy::module_name_repetitions)]

//! A probability distribution chosen at runtime from a closed set of
//! families. One [`GenericDistribution`] value can be evaluated, sampled,
//! reassigned to another family and persisted as text, without the caller
//! knowing at compile time which family it holds.
//!
//! # Getting Started
//!
//! ```
//! use polydist::prelude::*;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let dist: GenericDistribution = Normal::new(0.0, 1.0).unwrap().into();
//!
//! let density = dist.pdf(&[0.0, 1.0, -1.0]);
//! assert!(!density.is_truncated());
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let draws = dist.sample_n(&mut rng, 10);
//! assert_eq!(draws.len(), 10);
//!
//! let token = dist.to_string();
//! assert_eq!(token, "Normal 0 1");
//! assert_eq!(token.parse::<GenericDistribution>().unwrap(), dist);
//! ```
//!
//! # Families
//!
//! | Category | Families |
//! |----------|----------|
//! | Uniform | [`UniformInt`], [`UniformReal`] |
//! | Count | [`Binomial`], [`Geometric`], [`NegativeBinomial`], [`Poisson`] |
//! | Continuous | [`Exponential`], [`Gamma`], [`Weibull`], [`ExtremeValue`], [`Beta`], [`Laplace`] |
//! | Normal-derived | [`Normal`], [`Lognormal`], [`ChiSquared`], [`NCChiSquared`], [`Cauchy`], [`FisherF`], [`StudentT`] |
//! | Sampling-based | [`Discrete`], [`PiecewiseConstant`], [`PiecewiseLinear`] |
//! | Shape | [`Triangle`] |
//! | Degenerate | [`Constant`] |
//!
//! Densities come from [`statrs`], variates from [`rand_distr`]. Each family
//! validates its parameters against both when it is constructed.
//!
//! # Density evaluation
//!
//! [`GenericDistribution::pdf`] never fails. A point the family cannot
//! evaluate ends the batch: the values computed so far are returned in
//! [`Density::values`], the failure in [`Density::error`], and a warning is
//! logged. Sampling-based families return their stored table regardless of
//! the query points.
//!
//! # Feature Flags
//!
//! | Flag | What it enables | Default |
//! |------|----------------|---------|
//! | `tracing` | Structured log events via [`tracing`](https://docs.rs/tracing) for truncated density evaluations | on |
//! | `serde` | `Serialize`/`Deserialize` for [`GenericDistribution`] as its text token | off |

/// Emit a `tracing::warn!` event when the `tracing` feature is enabled.
/// No-op otherwise.
#[cfg(feature = "tracing")]
macro_rules! trace_warn {
    ($($arg:tt)*) => { tracing::warn!(target: "polydist", $($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_warn {
    ($($arg:tt)*) => {};
}

/// Emit a `tracing::debug!` event when the `tracing` feature is enabled.
/// No-op otherwise.
#[cfg(feature = "tracing")]
macro_rules! trace_debug {
    ($($arg:tt)*) => { tracing::debug!(target: "polydist", $($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_debug {
    ($($arg:tt)*) => {};
}

pub mod codec;
mod density;
mod error;
pub mod family;
mod generic;
mod rng_util;
mod sampler;

pub use density::Density;
pub use error::{Error, Result};
pub use family::{
    Beta, Binomial, Cauchy, ChiSquared, Constant, Discrete, Exponential, ExtremeValue, Family,
    FisherF, Gamma, Geometric, Laplace, Lognormal, NCChiSquared, NegativeBinomial, Normal,
    PiecewiseConstant, PiecewiseLinear, Poisson, StudentT, Triangle, UniformInt, UniformReal,
    Weibull,
};
pub use generic::GenericDistribution;

/// Convenient wildcard import for the most common types.
///
/// ```
/// use polydist::prelude::*;
/// ```
pub mod prelude {
    pub use crate::density::Density;
    pub use crate::error::{Error, Result};
    pub use crate::family::{
        Beta, Binomial, Cauchy, ChiSquared, Constant, Discrete, Exponential, ExtremeValue, Family,
        FisherF, Gamma, Geometric, Laplace, Lognormal, NCChiSquared, NegativeBinomial, Normal,
        PiecewiseConstant, PiecewiseLinear, Poisson, StudentT, Triangle, UniformInt, UniformReal,
        Weibull,
    };
    pub use crate::generic::GenericDistribution;
}
