//! Sampling-based families, defined by a table rather than a formula.
//!
//! Each family keeps the weights it was built from (the codec persists
//! those) and the normalized table derived from them. Density evaluation
//! hands out the table as stored.

use rand::distr::weighted::WeightedIndex;

use super::variate::{Lattice, PiecewiseConstantVariate, PiecewiseLinearVariate};
use super::{Family, not_nan, prefixed};
use crate::error::{Error, Result};

/// Integers `0..n` drawn with probabilities proportional to `weights`.
#[derive(Clone, Debug)]
pub struct Discrete {
    weights: Vec<f64>,
    probabilities: Vec<f64>,
    variate: Lattice<WeightedIndex<f64>>,
}

impl Discrete {
    /// # Errors
    ///
    /// Returns `Error::InvalidParameter` if `weights` is empty, holds a
    /// negative or non-finite weight, or sums to zero.
    pub fn new(weights: Vec<f64>) -> Result<Self> {
        let pick = WeightedIndex::new(&weights).map_err(Error::invalid(Self::NAME))?;
        let total: f64 = weights.iter().sum();
        let probabilities = weights.iter().map(|w| w / total).collect();
        Ok(Self {
            weights,
            probabilities,
            variate: Lattice(pick),
        })
    }

    /// Returns the normalized probability of each index.
    #[must_use]
    pub fn probabilities(&self) -> &[f64] {
        &self.probabilities
    }
}

impl Family for Discrete {
    const NAME: &'static str = "Discrete";
    type Variate = Lattice<WeightedIndex<f64>>;

    #[allow(clippy::cast_precision_loss)]
    fn params(&self) -> Vec<f64> {
        let mut params = Vec::with_capacity(self.weights.len() + 1);
        params.push(self.weights.len() as f64);
        params.extend_from_slice(&self.weights);
        params
    }

    fn from_params(params: &[f64]) -> Result<Self> {
        let (_, weights) = prefixed(Self::NAME, params, Some)?;
        Self::new(weights.to_vec())
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn density(&self, x: f64) -> Result<f64> {
        not_nan(Self::NAME, x)?;
        if x < 0.0 || x.fract() != 0.0 {
            return Ok(0.0);
        }
        Ok(self.probabilities.get(x as usize).copied().unwrap_or(0.0))
    }

    fn variate(&self) -> &Self::Variate {
        &self.variate
    }

    fn table(&self) -> Option<&[f64]> {
        Some(&self.probabilities)
    }
}

/// A step density: constant on each interval `[b_i, b_{i+1})`, with interval
/// probabilities proportional to `weights`.
#[derive(Clone, Debug)]
pub struct PiecewiseConstant {
    intervals: Vec<f64>,
    weights: Vec<f64>,
    densities: Vec<f64>,
    variate: PiecewiseConstantVariate,
}

impl PiecewiseConstant {
    /// Creates a step density over `intervals` (`n + 1` boundaries) with one
    /// weight per interval.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidParameter` if the boundaries are not finite and
    /// strictly increasing, if the weight count does not match, or if the
    /// weights are rejected.
    pub fn new(intervals: Vec<f64>, weights: Vec<f64>) -> Result<Self> {
        check_intervals(Self::NAME, &intervals)?;
        if weights.len() + 1 != intervals.len() {
            return Err(Error::InvalidParameter {
                family: Self::NAME,
                reason: format!(
                    "{} intervals need {} weights, got {}",
                    intervals.len() - 1,
                    intervals.len() - 1,
                    weights.len()
                ),
            });
        }
        let pick = WeightedIndex::new(&weights).map_err(Error::invalid(Self::NAME))?;
        let total: f64 = weights.iter().sum();
        let densities = weights
            .iter()
            .zip(intervals.windows(2))
            .map(|(w, b)| w / (total * (b[1] - b[0])))
            .collect();
        Ok(Self {
            variate: PiecewiseConstantVariate {
                intervals: intervals.clone(),
                pick,
            },
            intervals,
            weights,
            densities,
        })
    }

    /// Returns the interval boundaries.
    #[must_use]
    pub fn intervals(&self) -> &[f64] {
        &self.intervals
    }

    /// Returns the normalized density on each interval.
    #[must_use]
    pub fn densities(&self) -> &[f64] {
        &self.densities
    }
}

impl Family for PiecewiseConstant {
    const NAME: &'static str = "PiecewiseConstant";
    type Variate = PiecewiseConstantVariate;

    #[allow(clippy::cast_precision_loss)]
    fn params(&self) -> Vec<f64> {
        let mut params = Vec::with_capacity(self.intervals.len() + self.weights.len() + 1);
        params.push(self.weights.len() as f64);
        params.extend_from_slice(&self.intervals);
        params.extend_from_slice(&self.weights);
        params
    }

    fn from_params(params: &[f64]) -> Result<Self> {
        let (n, rest) = prefixed(Self::NAME, params, |n| {
            n.checked_mul(2)?.checked_add(1)
        })?;
        let (intervals, weights) = rest.split_at(n + 1);
        Self::new(intervals.to_vec(), weights.to_vec())
    }

    fn density(&self, x: f64) -> Result<f64> {
        not_nan(Self::NAME, x)?;
        Ok(locate(&self.intervals, x).map_or(0.0, |(i, _)| self.densities[i]))
    }

    fn variate(&self) -> &Self::Variate {
        &self.variate
    }

    fn table(&self) -> Option<&[f64]> {
        Some(&self.densities)
    }
}

/// A density that is linear between boundaries, with the value at each
/// boundary proportional to `weights`.
#[derive(Clone, Debug)]
pub struct PiecewiseLinear {
    intervals: Vec<f64>,
    weights: Vec<f64>,
    densities: Vec<f64>,
    variate: PiecewiseLinearVariate,
}

impl PiecewiseLinear {
    /// Creates a piecewise linear density over `intervals` with one weight per
    /// boundary.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidParameter` if the boundaries are not finite and
    /// strictly increasing, if the weight count does not match, or if a
    /// weight is negative or the total area is zero.
    pub fn new(intervals: Vec<f64>, weights: Vec<f64>) -> Result<Self> {
        check_intervals(Self::NAME, &intervals)?;
        if weights.len() != intervals.len() {
            return Err(Error::InvalidParameter {
                family: Self::NAME,
                reason: format!(
                    "{} boundaries need {} weights, got {}",
                    intervals.len(),
                    intervals.len(),
                    weights.len()
                ),
            });
        }
        if let Some(w) = weights.iter().find(|w| !(w.is_finite() && **w >= 0.0)) {
            return Err(Error::InvalidParameter {
                family: Self::NAME,
                reason: format!("weights must be finite and non-negative, got {w}"),
            });
        }
        let areas: Vec<f64> = weights
            .windows(2)
            .zip(intervals.windows(2))
            .map(|(w, b)| (w[0] + w[1]) / 2.0 * (b[1] - b[0]))
            .collect();
        let pick = WeightedIndex::new(&areas).map_err(Error::invalid(Self::NAME))?;
        let total: f64 = areas.iter().sum();
        let densities = weights.iter().map(|w| w / total).collect();
        Ok(Self {
            variate: PiecewiseLinearVariate {
                intervals: intervals.clone(),
                weights: weights.clone(),
                pick,
            },
            intervals,
            weights,
            densities,
        })
    }

    /// Returns the interval boundaries.
    #[must_use]
    pub fn intervals(&self) -> &[f64] {
        &self.intervals
    }

    /// Returns the normalized density at each boundary.
    #[must_use]
    pub fn densities(&self) -> &[f64] {
        &self.densities
    }
}

impl Family for PiecewiseLinear {
    const NAME: &'static str = "PiecewiseLinear";
    type Variate = PiecewiseLinearVariate;

    #[allow(clippy::cast_precision_loss)]
    fn params(&self) -> Vec<f64> {
        let mut params = Vec::with_capacity(2 * self.weights.len() + 1);
        params.push(self.weights.len() as f64);
        params.extend_from_slice(&self.intervals);
        params.extend_from_slice(&self.weights);
        params
    }

    fn from_params(params: &[f64]) -> Result<Self> {
        let (n, rest) = prefixed(Self::NAME, params, |n| n.checked_mul(2))?;
        let (intervals, weights) = rest.split_at(n);
        Self::new(intervals.to_vec(), weights.to_vec())
    }

    fn density(&self, x: f64) -> Result<f64> {
        not_nan(Self::NAME, x)?;
        Ok(locate(&self.intervals, x).map_or(0.0, |(i, t)| {
            self.densities[i] + t * (self.densities[i + 1] - self.densities[i])
        }))
    }

    fn variate(&self) -> &Self::Variate {
        &self.variate
    }

    fn table(&self) -> Option<&[f64]> {
        Some(&self.densities)
    }
}

fn check_intervals(family: &'static str, intervals: &[f64]) -> Result<()> {
    if intervals.len() < 2 {
        return Err(Error::InvalidParameter {
            family,
            reason: format!("need at least 2 boundaries, got {}", intervals.len()),
        });
    }
    if intervals.iter().any(|b| !b.is_finite()) || intervals.windows(2).any(|b| b[0] >= b[1]) {
        return Err(Error::InvalidParameter {
            family,
            reason: "boundaries must be finite and strictly increasing".to_owned(),
        });
    }
    Ok(())
}

/// Finds the interval holding `x` and the relative position of `x` inside it.
///
/// The last boundary belongs to the last interval.
fn locate(intervals: &[f64], x: f64) -> Option<(usize, f64)> {
    let (&first, &last) = (intervals.first()?, intervals.last()?);
    if x < first || x > last {
        return None;
    }
    let i = intervals
        .partition_point(|&b| b <= x)
        .saturating_sub(1)
        .min(intervals.len() - 2);
    let (b0, b1) = (intervals[i], intervals[i + 1]);
    Some((i, (x - b0) / (b1 - b0)))
}
