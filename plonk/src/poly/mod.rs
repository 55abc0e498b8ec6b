/// Module for the polynomial evaluation interface.
pub mod eval;

/// Module for field polynomials in coefficient form.
pub mod field_polynomial;

pub use eval::{LagrangePolynomial, PolyEvaluator};
pub use field_polynomial::FpPolynomial;
