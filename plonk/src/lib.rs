//! The verification identity of a PLONK proof over a pairing-friendly scalar field,
//! together with the setup data and the challenge derivation it consumes.
#![allow(clippy::needless_borrow)]
#![allow(clippy::upper_case_acronyms)]

#[macro_use]
extern crate serde_derive;

/// Module for error handling.
pub mod errors;

/// Module for the PLONK verifier and its setup.
pub mod plonk;

/// Module for polynomials and their evaluation.
pub mod poly;
