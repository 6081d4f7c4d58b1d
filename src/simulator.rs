//! The interface a puzzle state has to offer so that reconstructions can be checked against it.

use crate::error::Error;

/// A puzzle state that can follow canonical move strings.
///
/// A canonical move string is a whitespace separated list of quarter turns, each the letter of a
/// face, slice or rotation, optionally followed by `i` for the inverse (e.g. `"R Ui M M"`). This
/// is what [`Move333::canonical_string`](crate::cube333::moves::Move333::canonical_string)
/// produces.
pub trait Simulator: Sized {
    /// The solved state.
    fn solved() -> Self;

    /// Apply every quarter turn in `canonical`, in order.
    fn apply(self, canonical: &str) -> Result<Self, Error>;

    /// Determine whether the state is solved.
    fn is_solved(&self) -> bool;
}
