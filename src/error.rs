//! This module defines general error types used throughout the crate.

use thiserror::Error;

/// Errors produced while reading notation, simulating a cube or checking a reconstruction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A field that must contain moves had no recognisable move in it.
    #[error("no recognisable moves in the {field}")]
    UnrecognizedSymbol {
        /// Which field was empty, e.g. `"scramble"`.
        field: &'static str,
    },
    /// A string was looked up in the move catalog but is not exactly one move symbol.
    #[error("`{0}` is not a valid move")]
    InvalidMove(String),
    /// The simulator was given a token outside of the canonical primitive alphabet.
    #[error("`{0}` is not a primitive move the simulator understands")]
    UnknownPrimitive(String),
    /// Applying the scramble and then the solve did not leave the cube solved.
    #[error("solution for {url} does not produce a solved cube")]
    ValidationFailed {
        /// The source the reconstruction came from.
        url: String,
    },
}
