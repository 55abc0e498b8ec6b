//! Scalar field arithmetic shared by the Ember proof system crates.
#![allow(clippy::upper_case_acronyms)]

pub use ark_std::{fmt, iter, ops, rand, One, UniformRand, Zero};

#[macro_use]
mod macros;

/// Module for the BLS12-381 scalar field.
pub mod bls12_381;

/// Module for the BN254 scalar field.
pub mod bn254;

/// Module for error handling.
pub mod errors;

/// Module for the prelude.
pub mod prelude;

/// Module for the test rng.
pub mod rand_helper;

/// Module for serde support.
pub mod serialization;

/// Module for the scalar traits.
pub mod traits;

/// Module for field utilities.
pub mod utils;
