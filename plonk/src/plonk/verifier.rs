use crate::errors::{PlonkError, Result};
use crate::plonk::{
    helpers::{
        combine_constraints, eval_boundary_constraint, eval_gate_constraint,
        eval_permutation_constraint, eval_permutations, eval_pi_poly, eval_pi_poly_batch_inv,
        eval_selectors, first_lagrange_eval,
    },
    indexer::PlonkVerifierParams,
    transcript::{PlonkChallengeSource, PlonkChallenges},
};
use crate::poly::PolyEvaluator;
use ark_std::{end_timer, start_timer};
use ember_algebra::prelude::*;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// The number of evaluations at `zeta` carried by a proof.
pub const N_EVALS_AT_ZETA: usize = 5;

/// The data structure of a Plonk proof.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlonkProof<F> {
    /// The openings at `zeta` of the left, right and output wires, the quotient
    /// and the grand product, in that order.
    lrohz: [F; N_EVALS_AT_ZETA],
    /// The opening of the grand product at `zeta * w`.
    z_eval_zeta_omega: F,
}

impl<F: Scalar> PlonkProof<F> {
    /// Build a proof from the openings at `zeta` and at `zeta * w`.
    pub fn new(lrohz: [F; N_EVALS_AT_ZETA], z_eval_zeta_omega: F) -> Self {
        Self {
            lrohz,
            z_eval_zeta_omega,
        }
    }

    /// Build a proof from a list of openings at `zeta`, which must hold exactly five.
    pub fn from_evals(evals: &[F], z_eval_zeta_omega: F) -> Result<Self> {
        let lrohz = evals
            .try_into()
            .map_err(|_| PlonkError::ProofShapeError(evals.len()))?;
        Ok(Self::new(lrohz, z_eval_zeta_omega))
    }

    /// Return the openings at `zeta`.
    pub fn lrohz(&self) -> &[F; N_EVALS_AT_ZETA] {
        &self.lrohz
    }

    /// Return the wire openings at `zeta`, without the public inputs on the left wire.
    pub fn w_polys_eval_zeta(&self) -> &[F] {
        &self.lrohz[..3]
    }

    /// Return the quotient opening at `zeta`.
    pub fn t_eval_zeta(&self) -> &F {
        &self.lrohz[3]
    }

    /// Return the grand product opening at `zeta`.
    pub fn z_eval_zeta(&self) -> &F {
        &self.lrohz[4]
    }

    /// Return the grand product opening at `zeta * w`.
    pub fn z_eval_zeta_omega(&self) -> &F {
        &self.z_eval_zeta_omega
    }
}

/// How the public inputs are folded into the left wire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PiEvaluation {
    /// One division per public input.
    #[default]
    Sequential,
    /// One batch inversion for all public inputs.
    BatchInversion,
}

/// Options of the verifier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifierOptions {
    /// The public input evaluation strategy.
    pub pi_eval: PiEvaluation,
}

/// Verify a proof against fixed challenges.
pub fn verify_with_challenges<P: PolyEvaluator<Field = F>, F: Domain>(
    params: &PlonkVerifierParams<P, F>,
    public_inputs: &[F],
    proof: &PlonkProof<F>,
    challenges: &PlonkChallenges<F>,
) -> Result<bool> {
    verify_with_options(
        params,
        public_inputs,
        proof,
        challenges,
        &VerifierOptions::default(),
    )
}

/// Verify a proof against fixed challenges with the given options.
///
/// Returns `Ok(false)` when the identity does not hold, when the number of
/// public inputs differs from the circuit's, or when `zeta` falls on the domain.
/// Fails when there are more public inputs than points in the domain.
pub fn verify_with_options<P: PolyEvaluator<Field = F>, F: Domain>(
    params: &PlonkVerifierParams<P, F>,
    public_inputs: &[F],
    proof: &PlonkProof<F>,
    challenges: &PlonkChallenges<F>,
    options: &VerifierOptions,
) -> Result<bool> {
    check_public_inputs_len(params, public_inputs)?;
    if public_inputs.len() != params.num_public_inputs {
        log::debug!(
            "plonk: got {} public inputs, the circuit declares {}",
            public_inputs.len(),
            params.num_public_inputs
        );
        return Ok(false);
    }

    let verify_time = start_timer!(|| "Plonk verifier");
    let res = match eval_identity(params, public_inputs, proof, challenges, options) {
        Ok(true) => Ok(true),
        Ok(false) => {
            log::debug!("plonk: verification identity does not hold");
            Ok(false)
        }
        Err(PlonkError::DivisionByZero)
        | Err(PlonkError::Algebra(AlgebraError::GroupInversionError)) => {
            log::warn!("plonk: degenerate challenge, rejecting the proof");
            Ok(false)
        }
        Err(e) => Err(e),
    };
    end_timer!(verify_time);
    res
}

/// Verify a proof, with the challenges produced by `source`.
pub fn verifier<S, P, F>(
    source: &mut S,
    params: &PlonkVerifierParams<P, F>,
    public_inputs: &[F],
    proof: &PlonkProof<F>,
) -> Result<bool>
where
    S: PlonkChallengeSource<F>,
    P: PolyEvaluator<Field = F>,
    F: Domain,
{
    check_public_inputs_len(params, public_inputs)?;
    let challenges = source.derive_challenges(params, public_inputs)?;
    verify_with_challenges(params, public_inputs, proof, &challenges)
}

/// Verify many independent proofs of the same circuit.
/// Returns `Ok(true)` iff all of them verify; the first error, in input order, is returned.
pub fn batch_verifier<P, F>(
    params: &PlonkVerifierParams<P, F>,
    instances: &[(&[F], &PlonkProof<F>, PlonkChallenges<F>)],
) -> Result<bool>
where
    P: PolyEvaluator<Field = F> + Sync,
    F: Domain,
{
    #[cfg(feature = "parallel")]
    let iter = instances.par_iter();
    #[cfg(not(feature = "parallel"))]
    let iter = instances.iter();

    let results: Vec<Result<bool>> = iter
        .map(|(public_inputs, proof, challenges)| {
            verify_with_challenges(params, public_inputs, proof, challenges)
        })
        .collect();

    let mut all_valid = true;
    for res in results {
        all_valid &= res?;
    }
    Ok(all_valid)
}

fn check_public_inputs_len<P, F: Scalar>(
    params: &PlonkVerifierParams<P, F>,
    public_inputs: &[F],
) -> Result<()> {
    if public_inputs.len() as u64 > params.domain.cardinality() {
        return Err(PlonkError::PublicInputsLengthError(
            params.domain.size(),
            public_inputs.len(),
        ));
    }
    Ok(())
}

fn eval_identity<P: PolyEvaluator<Field = F>, F: Domain>(
    params: &PlonkVerifierParams<P, F>,
    public_inputs: &[F],
    proof: &PlonkProof<F>,
    challenges: &PlonkChallenges<F>,
    options: &VerifierOptions,
) -> Result<bool> {
    let domain = &params.domain;
    let zeta = challenges.get_zeta();

    // 1. evaluate the selectors.
    let q = eval_selectors(params, zeta);

    // 2. compute Z_h(\zeta), which vanishes only on the domain.
    let zh = domain.vanishing_eval(zeta);
    if zh.is_zero() {
        return Err(PlonkError::DivisionByZero);
    }

    // 3. add PI(\zeta) to the left wire.
    let pi_eval = match options.pi_eval {
        PiEvaluation::Sequential => eval_pi_poly(domain, public_inputs, zeta, &zh)?,
        PiEvaluation::BatchInversion => {
            eval_pi_poly_batch_inv(domain, public_inputs, zeta, &zh)?
        }
    };
    let [l_private, r, o, t, z] = proof.lrohz;
    let l = l_private.add(&pi_eval);

    // 4. the gate constraint.
    let gate = eval_gate_constraint(&q, &l, &r, &o);

    // 5-6. the grand product step.
    let s = eval_permutations(params, zeta);
    let ordering = eval_permutation_constraint(
        &[l, r, o],
        &s,
        &params.k,
        &z,
        &proof.z_eval_zeta_omega,
        challenges,
    );

    // 7. Z starts at one.
    let first_lagrange = first_lagrange_eval(domain, zeta, &zh)?;
    let boundary = eval_boundary_constraint(&first_lagrange, &z);

    // 8. combine with alpha and compare against the quotient.
    let lhs = combine_constraints(&gate, &ordering, &boundary, challenges.get_alpha());
    let rhs = zh.mul(&t);
    Ok(lhs == rhs)
}
