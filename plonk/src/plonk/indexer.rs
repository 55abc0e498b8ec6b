use crate::errors::{PlonkError, Result};
use crate::plonk::{
    constraint_system::{SparseR1CS, N_SELECTORS, N_WIRES_PER_GATE},
    domain::PlonkDomain,
};
use crate::poly::{FpPolynomial, LagrangePolynomial};
use ark_poly::Radix2EvaluationDomain;
use ark_std::{end_timer, start_timer};
use ember_algebra::prelude::*;

/// Plonk verifier parameters: the public data of one circuit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlonkVerifierParams<P, F> {
    /// The selector polynomials: left, right, multiplication, output, constant.
    pub q_polys: [P; N_SELECTORS],
    /// The permutation polynomials of the left, right and output wires.
    pub s_polys: [P; N_WIRES_PER_GATE],
    /// The evaluation domain.
    pub domain: PlonkDomain<F>,
    /// The coset shifters of the right and output wires.
    pub k: [F; N_WIRES_PER_GATE - 1],
    /// The number of public inputs declared by the circuit.
    pub num_public_inputs: usize,
}

/// Verifier parameters holding the polynomials in coefficient form.
pub type PlonkVK<F> = PlonkVerifierParams<FpPolynomial<F>, F>;

/// Verifier parameters holding the polynomials as their values on the domain.
pub type PlonkLagrangeVK<F> = PlonkVerifierParams<LagrangePolynomial<F>, F>;

impl<P, F: Scalar> PlonkVerifierParams<P, F> {
    /// Return the size of the circuit.
    pub fn cs_size(&self) -> usize {
        self.domain.size()
    }
}

/// Encode the permutation value, from an index to a group element.
/// Index `j * n + i` becomes `k[j] * w^i`.
pub fn encode_perm_to_group<F: Scalar>(group: &[F], perm: &[usize], k: &[F]) -> Vec<F> {
    let n = group.len();
    perm.iter()
        .map(|pi| {
            for (i, ki) in k.iter().enumerate().skip(1) {
                if *pi < (i + 1) * n && *pi >= i * n {
                    return ki.mul(&group[pi % n]);
                }
            }
            group[pi % n]
        })
        .collect()
}

/// Choose the shifters `u` and `u^2`, with `u` the multiplicative generator of the field,
/// so that `H`, `uH` and `u^2 H` are pairwise disjoint.
pub fn choose_ks<F: Scalar>(domain: &PlonkDomain<F>) -> Result<[F; N_WIRES_PER_GATE - 1]> {
    let u = F::multiplicative_generator();
    let u_square = u.square();
    let ratio = u_square.div(&u)?;
    if domain.contains(&u) || domain.contains(&u_square) || domain.contains(&ratio) {
        return Err(PlonkError::SetupError);
    }
    Ok([u, u_square])
}

/// Run the Plonk indexer.
/// Before invoking indexer function, the constraint system `cs` should pad the number of
/// constraints to a power of two.
pub fn indexer<F: Domain>(cs: &SparseR1CS<F>) -> Result<PlonkVK<F>> {
    index_with(cs, |ark_domain, _, evals| {
        Ok(FpPolynomial::ifft_with_domain(ark_domain, &evals))
    })
}

/// The Plonk indexer that keeps the polynomials in evaluation form.
pub fn indexer_with_lagrange<F: Domain>(cs: &SparseR1CS<F>) -> Result<PlonkLagrangeVK<F>> {
    index_with(cs, |_, domain, evals| LagrangePolynomial::new(*domain, evals))
}

fn index_with<F, P, B>(cs: &SparseR1CS<F>, build: B) -> Result<PlonkVerifierParams<P, F>>
where
    F: Domain,
    B: Fn(&Radix2EvaluationDomain<F::Field>, &PlonkDomain<F>, Vec<F>) -> Result<P>,
{
    let n = cs.size();
    if n == 0 || !n.is_power_of_two() {
        return Err(PlonkError::SetupError);
    }
    let setup_time = start_timer!(|| format!("Plonk indexer, size {}", n));

    let domain = PlonkDomain::<F>::new(n)?;
    let ark_domain =
        FpPolynomial::<F>::evaluation_domain(n).ok_or(PlonkError::GroupNotFound(n))?;
    let group = domain.elements();
    let k = choose_ks(&domain)?;

    // Step 1: compute the permutation polynomials.
    let raw_perm = cs.compute_permutation();
    let labels = [F::one(), k[0], k[1]];
    let mut s_polys = Vec::with_capacity(N_WIRES_PER_GATE);
    for i in 0..N_WIRES_PER_GATE {
        let encoded = encode_perm_to_group(&group, &raw_perm[i * n..(i + 1) * n], &labels);
        s_polys.push(build(&ark_domain, &domain, encoded)?);
    }

    // Step 2: compute the selector polynomials.
    let mut q_polys = Vec::with_capacity(N_SELECTORS);
    for i in 0..N_SELECTORS {
        q_polys.push(build(&ark_domain, &domain, cs.selector(i)?.to_vec())?);
    }

    let params = PlonkVerifierParams {
        q_polys: q_polys.try_into().map_err(|_| PlonkError::SetupError)?,
        s_polys: s_polys.try_into().map_err(|_| PlonkError::SetupError)?,
        domain,
        k,
        num_public_inputs: cs.num_public_inputs(),
    };
    log::debug!(
        "plonk setup: {} gates, {} variables, {} public inputs",
        n,
        cs.num_vars(),
        params.num_public_inputs
    );
    end_timer!(setup_time);
    Ok(params)
}
