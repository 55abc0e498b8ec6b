//! The sub-steps of the verification identity, all evaluated at `zeta`.
use crate::errors::{PlonkError, Result};
use crate::plonk::{
    constraint_system::{N_SELECTORS, N_WIRES_PER_GATE},
    domain::PlonkDomain,
    indexer::PlonkVerifierParams,
    transcript::PlonkChallenges,
};
use crate::poly::PolyEvaluator;
use ember_algebra::prelude::*;

fn eval_all<P: PolyEvaluator<Field = F>, F: Scalar, const N: usize>(
    polys: &[P; N],
    point: &F,
) -> [F; N] {
    let mut evals = [F::zero(); N];
    for (eval, poly) in evals.iter_mut().zip(polys.iter()) {
        *eval = poly.eval_at(point);
    }
    evals
}

/// Evaluate `ql, qr, qm, qo, qk` at `zeta`.
pub fn eval_selectors<P: PolyEvaluator<Field = F>, F: Scalar>(
    params: &PlonkVerifierParams<P, F>,
    zeta: &F,
) -> [F; N_SELECTORS] {
    eval_all(&params.q_polys, zeta)
}

/// Evaluate the three permutation polynomials at `zeta`.
pub fn eval_permutations<P: PolyEvaluator<Field = F>, F: Scalar>(
    params: &PlonkVerifierParams<P, F>,
    zeta: &F,
) -> [F; N_WIRES_PER_GATE] {
    eval_all(&params.s_polys, zeta)
}

/// Compute `L_1(zeta) = zh / (n * (zeta - 1))`, given `zh = zeta^n - 1`.
pub fn first_lagrange_eval<F: Scalar>(domain: &PlonkDomain<F>, zeta: &F, zh: &F) -> Result<F> {
    let denominator_inv = zeta
        .sub(&F::one())
        .inv()
        .map_err(|_| PlonkError::DivisionByZero)?;
    Ok(domain.cardinality_inv().mul(zh).mul(&denominator_inv))
}

/// Compute `sum_i public_inputs[i] * L_i(zeta)` with the recurrence
/// `L_{i+1} = L_i * w * (zeta - w^i) / (zeta - w^{i+1})`, one division per input.
pub fn eval_pi_poly<F: Scalar>(
    domain: &PlonkDomain<F>,
    public_inputs: &[F],
    zeta: &F,
    zh: &F,
) -> Result<F> {
    if public_inputs.is_empty() {
        return Ok(F::zero());
    }
    let generator = domain.generator();
    let mut lagrange = first_lagrange_eval(domain, zeta, zh)?;
    let mut root = F::one();
    let mut eval = F::zero();
    for (i, value) in public_inputs.iter().enumerate() {
        eval.add_assign(&value.mul(&lagrange));
        if i + 1 == public_inputs.len() {
            break;
        }
        let next_root = root.mul(generator);
        let denominator_inv = zeta
            .sub(&next_root)
            .inv()
            .map_err(|_| PlonkError::DivisionByZero)?;
        lagrange = lagrange
            .mul(generator)
            .mul(&zeta.sub(&root))
            .mul(&denominator_inv);
        root = next_root;
    }
    Ok(eval)
}

/// Same as [`eval_pi_poly`], with the denominators `zeta - w^i` inverted in one batch.
pub fn eval_pi_poly_batch_inv<F: Domain>(
    domain: &PlonkDomain<F>,
    public_inputs: &[F],
    zeta: &F,
    zh: &F,
) -> Result<F> {
    if public_inputs.is_empty() {
        return Ok(F::zero());
    }
    let generator = domain.generator();
    let mut roots = Vec::with_capacity(public_inputs.len());
    let mut root = F::one();
    for _ in 0..public_inputs.len() {
        roots.push(root);
        root.mul_assign(generator);
    }
    let mut denominators: Vec<F> = roots.iter().map(|r| zeta.sub(r)).collect();
    batch_inv(&mut denominators).map_err(|_| PlonkError::DivisionByZero)?;

    let mut lagrange = domain.cardinality_inv().mul(zh).mul(&denominators[0]);
    let mut eval = F::zero();
    for (i, value) in public_inputs.iter().enumerate() {
        eval.add_assign(&value.mul(&lagrange));
        if i + 1 == public_inputs.len() {
            break;
        }
        lagrange = lagrange
            .mul(generator)
            .mul(&zeta.sub(&roots[i]))
            .mul(&denominators[i + 1]);
    }
    Ok(eval)
}

/// Compute `ql*L + qr*R + qm*L*R + qo*O + qk`.
pub fn eval_gate_constraint<F: Scalar>(q: &[F; N_SELECTORS], l: &F, r: &F, o: &F) -> F {
    let [ql, qr, qm, qo, qk] = q;
    ql.mul(l)
        .add(&qr.mul(r))
        .add(&qm.mul(l).mul(r))
        .add(&qo.mul(o))
        .add(qk)
}

/// Compute the grand product step `g - f` with
/// `g = (L + s0 + gamma)(R + s1 + gamma)(O + s2 + gamma) * Z(zeta * w)` and
/// `f = (L + zeta + gamma)(R + k0 * zeta + gamma)(O + k1 * zeta + gamma) * Z(zeta)`.
pub fn eval_permutation_constraint<F: Scalar>(
    wires: &[F; N_WIRES_PER_GATE],
    s: &[F; N_WIRES_PER_GATE],
    k: &[F; N_WIRES_PER_GATE - 1],
    z: &F,
    z_shifted: &F,
    challenges: &PlonkChallenges<F>,
) -> F {
    let gamma = challenges.get_gamma();
    let zeta = challenges.get_zeta();

    let mut g = *z_shifted;
    for (w, s) in wires.iter().zip(s.iter()) {
        g.mul_assign(&w.add(s).add(gamma));
    }

    let mut f = *z;
    let shifts = [F::one(), k[0], k[1]];
    for (w, shift) in wires.iter().zip(shifts.iter()) {
        f.mul_assign(&w.add(&shift.mul(zeta)).add(gamma));
    }

    g.sub(&f)
}

/// Compute `L_1(zeta) * (Z(zeta) - 1)`.
pub fn eval_boundary_constraint<F: Scalar>(first_lagrange: &F, z: &F) -> F {
    first_lagrange.mul(&z.sub(&F::one()))
}

/// Compute `gate + alpha * ordering + alpha^2 * boundary` by Horner's rule.
pub fn combine_constraints<F: Scalar>(gate: &F, ordering: &F, boundary: &F, alpha: &F) -> F {
    alpha
        .mul(boundary)
        .add(ordering)
        .mul(alpha)
        .add(gate)
}

#[cfg(test)]
mod test {
    use crate::errors::PlonkError;
    use crate::plonk::{domain::PlonkDomain, helpers::*, transcript::PlonkChallenges};
    use crate::poly::{LagrangePolynomial, PolyEvaluator};
    use ember_algebra::bn254::BN254Scalar;

    type F = BN254Scalar;

    #[test]
    fn first_lagrange_matches_interpolation() {
        let mut prng = test_rng();
        let domain = PlonkDomain::<F>::new(8).unwrap();
        let mut evals = vec![F::zero(); 8];
        evals[0] = F::one();
        let l1 = LagrangePolynomial::new(domain, evals).unwrap();

        let zeta = F::random(&mut prng);
        let zh = domain.vanishing_eval(&zeta);
        assert_eq!(first_lagrange_eval(&domain, &zeta, &zh).unwrap(), l1.eval_at(&zeta));
        assert_eq!(
            first_lagrange_eval(&domain, &F::one(), &F::zero()).unwrap_err(),
            PlonkError::DivisionByZero
        );
    }

    #[test]
    fn pi_poly_matches_interpolation() {
        let mut prng = test_rng();
        let domain = PlonkDomain::<F>::new(16).unwrap();
        for m in 0..=16 {
            let public_inputs: Vec<F> = (0..m).map(|_| F::random(&mut prng)).collect();
            let mut evals = public_inputs.clone();
            evals.resize(16, F::zero());
            let pi_poly = LagrangePolynomial::new(domain, evals).unwrap();

            let zeta = F::random(&mut prng);
            let zh = domain.vanishing_eval(&zeta);
            let sequential = eval_pi_poly(&domain, &public_inputs, &zeta, &zh).unwrap();
            let batched = eval_pi_poly_batch_inv(&domain, &public_inputs, &zeta, &zh).unwrap();
            assert_eq!(sequential, pi_poly.eval_at(&zeta));
            assert_eq!(sequential.to_bytes(), batched.to_bytes());
        }
    }

    #[test]
    fn pi_poly_degenerate_zeta() {
        let domain = PlonkDomain::<F>::new(4).unwrap();
        let pi = [F::from(3u32), F::from(4u32)];
        let w = *domain.generator();
        let zh = domain.vanishing_eval(&w);
        assert!(zh.is_zero());
        assert_eq!(
            eval_pi_poly(&domain, &pi, &w, &zh).unwrap_err(),
            PlonkError::DivisionByZero
        );
        assert_eq!(
            eval_pi_poly_batch_inv(&domain, &pi, &w, &zh).unwrap_err(),
            PlonkError::DivisionByZero
        );
        // no input, no division
        assert!(eval_pi_poly(&domain, &[], &w, &zh).unwrap().is_zero());
    }

    #[test]
    fn gate_constraint() {
        let one = F::one();
        let zero = F::zero();
        let add = [one, one, zero, one.neg(), zero];
        let (l, r) = (F::from(2u32), F::from(3u32));
        assert!(eval_gate_constraint(&add, &l, &r, &F::from(5u32)).is_zero());
        assert_eq!(eval_gate_constraint(&add, &l, &r, &F::from(6u32)), one.neg());

        let mul = [zero, zero, one, one.neg(), zero];
        assert!(eval_gate_constraint(&mul, &l, &r, &F::from(6u32)).is_zero());

        let constant = [one, zero, zero, zero, F::from(7u32).neg()];
        assert!(eval_gate_constraint(&constant, &F::from(7u32), &zero, &zero).is_zero());
    }

    #[test]
    fn permutation_constraint_on_identity() {
        let mut prng = test_rng();
        let zeta = F::random(&mut prng);
        let challenges = PlonkChallenges::new(F::random(&mut prng), F::random(&mut prng), zeta);
        let k = [F::from(5u32), F::from(25u32)];
        let wires = [
            F::random(&mut prng),
            F::random(&mut prng),
            F::random(&mut prng),
        ];
        // sigma(X) = k_j * X on every column
        let s = [zeta, k[0].mul(&zeta), k[1].mul(&zeta)];
        let z = F::random(&mut prng);
        assert!(eval_permutation_constraint(&wires, &s, &k, &z, &z, &challenges).is_zero());
        assert!(!eval_permutation_constraint(&wires, &s, &k, &z, &z.add(&F::one()), &challenges)
            .is_zero());
    }

    #[test]
    fn horner_combination() {
        let mut prng = test_rng();
        let gate = F::random(&mut prng);
        let ordering = F::random(&mut prng);
        let boundary = F::random(&mut prng);
        let alpha = F::random(&mut prng);
        let expected = gate
            .add(&alpha.mul(&ordering))
            .add(&alpha.square().mul(&boundary));
        assert_eq!(
            combine_constraints(&gate, &ordering, &boundary, &alpha),
            expected
        );
        assert!(eval_boundary_constraint(&F::random(&mut prng), &F::one()).is_zero());
    }
}
