//! The PLONK verification identity.

/// Module for the constraint system.
pub mod constraint_system;

/// Module for the evaluation domain.
pub mod domain;

/// Module for the sub-steps of the verification identity.
pub mod helpers;

/// Module for indexer.
pub mod indexer;

/// Module for challenge derivation.
pub mod transcript;

/// Module for verifier.
pub mod verifier;
