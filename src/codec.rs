//! Minimal text codec for family parameters.
//!
//! A family serializes to its parameter list (see [`Family::params`]),
//! each value written in its shortest round-trip decimal form and separated
//! by single spaces. Parsing splits on whitespace and hands the numbers back
//! to [`Family::from_params`], so a token that the family would reject as a
//! constructor argument is rejected here too.
//!
//! ```
//! use polydist::Normal;
//! use polydist::codec;
//!
//! let normal = Normal::new(0.5, 2.0).unwrap();
//! let token = codec::serialize(&normal);
//! assert_eq!(token, "0.5 2");
//!
//! let back: Normal = codec::deserialize(&token).unwrap();
//! assert_eq!(back, normal);
//! ```

use crate::error::{Error, Result};
use crate::family::Family;

/// Writes `family` as a single text token.
#[must_use]
pub fn serialize<F: Family>(family: &F) -> String {
    family
        .params()
        .iter()
        .map(f64::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Reads a family back from a token written by [`serialize`].
///
/// # Errors
///
/// Returns `Error::Parse` if a word is not a number, `Error::Arity` if the
/// parameter count is wrong, and `Error::InvalidParameter` if the family
/// rejects the values.
pub fn deserialize<F: Family>(token: &str) -> Result<F> {
    let params = token
        .split_whitespace()
        .map(|word| {
            word.parse::<f64>().map_err(|e| Error::Parse {
                family: F::NAME,
                input: token.to_owned(),
                reason: format!("{word:?}: {e}"),
            })
        })
        .collect::<Result<Vec<_>>>()?;
    F::from_params(&params)
}
