use crate::errors::{PlonkError, Result};
use ark_poly::{EvaluationDomain, Radix2EvaluationDomain};
use ember_algebra::prelude::*;

/// The multiplicative subgroup `H = <generator>` indexing the gates of a circuit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlonkDomain<F> {
    cardinality: u64,
    generator: F,
    cardinality_inv: F,
}

impl<F: Domain> PlonkDomain<F> {
    /// Build the radix-2 subgroup of order `size`.
    pub fn new(size: usize) -> Result<Self> {
        if size == 0 || !size.is_power_of_two() {
            return Err(PlonkError::GroupNotFound(size));
        }
        let domain = Radix2EvaluationDomain::<F::Field>::new(size)
            .ok_or(PlonkError::GroupNotFound(size))?;
        if domain.size() != size {
            return Err(PlonkError::GroupNotFound(size));
        }
        Ok(Self {
            cardinality: size as u64,
            generator: F::from_field(domain.group_gen),
            cardinality_inv: F::from_field(domain.size_inv),
        })
    }
}

impl<F: Scalar> PlonkDomain<F> {
    /// Assemble a domain from its parts, checking that `generator` is a primitive
    /// `cardinality`-th root of unity and that `cardinality_inv` inverts `cardinality`.
    pub fn from_parts(cardinality: u64, generator: F, cardinality_inv: F) -> Result<Self> {
        if cardinality == 0 || !cardinality.is_power_of_two() {
            return Err(PlonkError::SetupError);
        }
        if usize::try_from(cardinality).is_err() {
            return Err(PlonkError::SetupError);
        }
        if generator.pow(&[cardinality]) != F::one() {
            return Err(PlonkError::SetupError);
        }
        if cardinality > 1 && generator.pow(&[cardinality / 2]) == F::one() {
            return Err(PlonkError::SetupError);
        }
        if cardinality_inv.mul(&F::from(cardinality)) != F::one() {
            return Err(PlonkError::SetupError);
        }
        Ok(Self {
            cardinality,
            generator,
            cardinality_inv,
        })
    }

    /// Return the number of points in the domain.
    pub fn cardinality(&self) -> u64 {
        self.cardinality
    }

    /// Return the number of points in the domain as an index bound,
    /// saturated at `usize::MAX`.
    pub fn size(&self) -> usize {
        usize::try_from(self.cardinality).unwrap_or(usize::MAX)
    }

    /// Return the primitive root of unity generating the domain.
    pub fn generator(&self) -> &F {
        &self.generator
    }

    /// Return `1 / cardinality`.
    pub fn cardinality_inv(&self) -> &F {
        &self.cardinality_inv
    }

    /// Evaluate `X^n - 1` at `point`.
    pub fn vanishing_eval(&self, point: &F) -> F {
        point.pow(&[self.cardinality]).sub(&F::one())
    }

    /// Whether `point` is one of the roots of unity in the domain.
    pub fn contains(&self, point: &F) -> bool {
        self.vanishing_eval(point).is_zero()
    }

    /// Return `[1, w, w^2, ..., w^{n-1}]`.
    pub fn elements(&self) -> Vec<F> {
        let mut elems = Vec::with_capacity(self.size());
        let mut current = F::one();
        for _ in 0..self.cardinality {
            elems.push(current);
            current.mul_assign(&self.generator);
        }
        elems
    }
}
