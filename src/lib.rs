//! A library for reading Rubik's cube move notation, expanding it into the quarter turns a cube
//! simulator understands, and checking that a solve really solves its scramble.

#![deny(missing_docs)]

pub mod cube333;
pub mod error;
pub mod moves;
pub mod reconstruction;
pub mod simulator;
