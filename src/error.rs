#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum Error {
    /// Returned when a family constructor rejects its parameters.
    #[error("invalid {family} parameters: {reason}")]
    InvalidParameter {
        /// The family being constructed.
        family: &'static str,
        /// The reason reported by the math library.
        reason: String,
    },

    /// Returned when a density cannot be evaluated at a query point.
    #[error("{family} density is undefined at x = {x}: {reason}")]
    Domain {
        /// The family being evaluated.
        family: &'static str,
        /// The offending query point.
        x: f64,
        /// Why the point was rejected.
        reason: &'static str,
    },

    /// Returned when a text token holds something other than a number.
    #[error("malformed {family} token {input:?}: {reason}")]
    Parse {
        /// The family whose codec rejected the token.
        family: &'static str,
        /// The token as received.
        input: String,
        /// The parser's complaint.
        reason: String,
    },

    /// Returned when a text token holds the wrong number of parameters.
    #[error("{family} expects {expected} parameters but got {got}")]
    Arity {
        /// The family whose codec rejected the token.
        family: &'static str,
        /// The number of parameters the family needs.
        expected: usize,
        /// The number of parameters found.
        got: usize,
    },

    /// Returned when a distribution token names no known family.
    #[error("unknown distribution family {0:?}")]
    UnknownFamily(String),
}

pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Wraps a math library constructor error for `family`.
    pub(crate) fn invalid<E: core::fmt::Display>(family: &'static str) -> impl FnOnce(E) -> Self {
        move |e| Error::InvalidParameter {
            family,
            reason: e.to_string(),
        }
    }

    pub(crate) fn domain(family: &'static str, x: f64, reason: &'static str) -> Self {
        Error::Domain { family, x, reason }
    }
}
