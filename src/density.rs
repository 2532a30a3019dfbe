//! Density evaluation over a batch of query points.
//!
//! Evaluation is best effort: the first point a family cannot evaluate ends
//! the batch. The values computed before it are kept, the failure is logged
//! and reported alongside them, and nothing is raised to the caller. A
//! result shorter than the query is therefore the failure signal.

use crate::error::Error;
use crate::family::Family;

/// The outcome of evaluating a density over a batch of query points.
#[derive(Clone, Debug, PartialEq)]
pub struct Density {
    /// Values computed before evaluation stopped, in query order.
    ///
    /// For sampling-based families this is the stored table instead.
    pub values: Vec<f64>,
    /// The failure that stopped evaluation early, if any.
    pub error: Option<Error>,
}

impl Density {
    /// Returns `true` if evaluation stopped before the end of the query.
    #[must_use]
    pub fn is_truncated(&self) -> bool {
        self.error.is_some()
    }
}

/// Appends the density of `family` at each of `x` to `y`.
///
/// Sampling-based families append their stored table instead.
pub(crate) fn evaluate<F: Family>(family: &F, x: &[f64], y: &mut Vec<f64>) -> Option<Error> {
    if let Some(table) = family.table() {
        if table.len() != x.len() {
            trace_debug!(
                family = F::NAME,
                table = table.len(),
                query = x.len(),
                "density table length differs from query length"
            );
        }
        y.extend_from_slice(table);
        return None;
    }

    y.reserve(x.len());
    for (index, &point) in x.iter().enumerate() {
        match family.density(point) {
            Ok(value) => y.push(value),
            Err(error) => {
                trace_warn!(
                    family = F::NAME,
                    x = point,
                    index,
                    requested = x.len(),
                    error = %error,
                    "density evaluation truncated"
                );
                return Some(error);
            }
        }
    }
    None
}
