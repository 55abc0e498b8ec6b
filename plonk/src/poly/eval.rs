use crate::errors::{PlonkError, Result};
use crate::plonk::domain::PlonkDomain;
use ember_algebra::prelude::*;

/// A polynomial that the verifier can open at a field point.
///
/// Implementations must be pure: evaluating twice at the same point
/// returns the same element.
pub trait PolyEvaluator {
    /// The scalar field of the polynomial.
    type Field: Scalar;

    /// Evaluate the polynomial at `point`.
    fn eval_at(&self, point: &Self::Field) -> Self::Field;
}

impl<T: PolyEvaluator> PolyEvaluator for &T {
    type Field = T::Field;

    fn eval_at(&self, point: &Self::Field) -> Self::Field {
        (**self).eval_at(point)
    }
}

/// A polynomial of degree below `n` given by its values on the domain of size `n`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "LagrangeParts<F>", bound(deserialize = "F: Scalar"))]
pub struct LagrangePolynomial<F> {
    evals: Vec<F>,
    domain: PlonkDomain<F>,
}

/// The unchecked wire form of a [`LagrangePolynomial`].
#[derive(Deserialize)]
struct LagrangeParts<F> {
    evals: Vec<F>,
    domain: PlonkDomain<F>,
}

impl<F: Scalar> TryFrom<LagrangeParts<F>> for LagrangePolynomial<F> {
    type Error = PlonkError;

    fn try_from(parts: LagrangeParts<F>) -> Result<Self> {
        Self::new(parts.domain, parts.evals)
    }
}

impl<F: Scalar> LagrangePolynomial<F> {
    /// Wrap `evals[i] = p(w^i)`.
    pub fn new(domain: PlonkDomain<F>, evals: Vec<F>) -> Result<Self> {
        if evals.len() != domain.size() {
            return Err(PlonkError::FuncParamsError);
        }
        Ok(Self { evals, domain })
    }

    /// Return the values on the domain.
    pub fn evals(&self) -> &[F] {
        &self.evals
    }

    /// Return the domain the values live on.
    pub fn domain(&self) -> &PlonkDomain<F> {
        &self.domain
    }
}

impl<F: Domain> PolyEvaluator for LagrangePolynomial<F> {
    type Field = F;

    /// Barycentric evaluation: `p(x) = (x^n - 1)/n * sum_i e_i w^i / (x - w^i)`.
    fn eval_at(&self, point: &F) -> F {
        let elements = self.domain.elements();
        let mut denominators: Vec<F> = elements.iter().map(|w| point.sub(w)).collect();
        if batch_inv(&mut denominators).is_err() {
            // `point = w^i`: the stored value is the evaluation
            return denominators
                .iter()
                .position(|d| d.is_zero())
                .and_then(|i| self.evals.get(i))
                .copied()
                .unwrap_or_else(F::zero);
        }

        let sum: F = self
            .evals
            .iter()
            .zip(elements.iter())
            .zip(denominators.iter())
            .map(|((e, w), d_inv)| e.mul(w).mul(d_inv))
            .sum();
        self.domain
            .vanishing_eval(point)
            .mul(self.domain.cardinality_inv())
            .mul(&sum)
    }
}
