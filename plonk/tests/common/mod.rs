#![allow(dead_code)]
//! An honest prover for the tests: it builds every polynomial in the clear,
//! divides by the vanishing polynomial and opens the results at `zeta`.

use ember_algebra::prelude::*;
use ember_plonk::plonk::{
    constraint_system::{SparseR1CS, VarIndex},
    indexer::PlonkVK,
    transcript::PlonkChallenges,
    verifier::PlonkProof,
};
use ember_plonk::poly::FpPolynomial;

/// A circuit together with a satisfying witness.
pub struct Instance<F> {
    pub cs: SparseR1CS<F>,
    pub witness: Vec<F>,
    pub public_inputs: Vec<F>,
}

/// Produce the proof of `witness` for the challenges, as the prover of the
/// scheme would after committing to its polynomials.
/// The quotient is truncated when the witness does not satisfy the circuit.
pub fn prove<F: Domain>(
    cs: &SparseR1CS<F>,
    params: &PlonkVK<F>,
    witness: &[F],
    challenges: &PlonkChallenges<F>,
) -> PlonkProof<F> {
    let n = cs.size();
    let ark_domain = FpPolynomial::<F>::evaluation_domain(n).unwrap();
    let group = params.domain.elements();
    let gamma = challenges.get_gamma();
    let alpha = challenges.get_alpha();
    let zeta = challenges.get_zeta();

    // wire values, and the left wire without the public inputs
    let wires = cs.extend_witness(witness);
    let mut l_private_evals = wires[0].clone();
    for (row, var) in cs.public_vars_witness_indices().iter().enumerate() {
        l_private_evals[row] = l_private_evals[row].sub(&witness[*var]);
    }
    let w_polys: Vec<FpPolynomial<F>> = wires
        .iter()
        .map(|w| FpPolynomial::ifft_with_domain(&ark_domain, w))
        .collect();
    let l_private = FpPolynomial::ifft_with_domain(&ark_domain, &l_private_evals);

    // the grand product
    let labels = [F::one(), params.k[0], params.k[1]];
    let s_evals: Vec<Vec<F>> = params
        .s_polys
        .iter()
        .map(|s| s.fft_with_domain(&ark_domain))
        .collect();
    let mut z_evals = vec![F::one()];
    for i in 0..n - 1 {
        let mut num = F::one();
        let mut den = F::one();
        for j in 0..3 {
            num.mul_assign(&wires[j][i].add(&labels[j].mul(&group[i])).add(gamma));
            den.mul_assign(&wires[j][i].add(&s_evals[j][i]).add(gamma));
        }
        let next = z_evals[i].mul(&num).mul(&den.inv().unwrap());
        z_evals.push(next);
    }
    let z_poly = FpPolynomial::ifft_with_domain(&ark_domain, &z_evals);
    let z_shifted = z_poly.mul_var(&group[1 % n]);

    // ql*L + qr*R + qm*L*R + qo*O + qk
    let [ql, qr, qm, qo, qk] = &params.q_polys;
    let (l, r, o) = (&w_polys[0], &w_polys[1], &w_polys[2]);
    let gate = ql
        .mul(l)
        .add(&qr.mul(r))
        .add(&qm.mul(l).mul(r))
        .add(&qo.mul(o))
        .add(qk);

    // (L + S0 + gamma)(R + S1 + gamma)(O + S2 + gamma) Z(wX)
    //   - (L + X + gamma)(R + k0 X + gamma)(O + k1 X + gamma) Z(X)
    let mut g = z_shifted;
    let mut f = z_poly.clone();
    for j in 0..3 {
        let mut g_term = w_polys[j].add(&params.s_polys[j]);
        g_term.add_coef_assign(gamma, 0);
        g = g.mul(&g_term);

        let mut f_term = w_polys[j].clone();
        f_term.add_coef_assign(&labels[j], 1);
        f_term.add_coef_assign(gamma, 0);
        f = f.mul(&f_term);
    }
    let ordering = g.sub(&f);

    // L1 (Z - 1)
    let mut l1_evals = vec![F::zero(); n];
    l1_evals[0] = F::one();
    let l1 = FpPolynomial::ifft_with_domain(&ark_domain, &l1_evals);
    let mut z_minus_one = z_poly.clone();
    z_minus_one.add_coef_assign(&F::one().neg(), 0);
    let boundary = l1.mul(&z_minus_one);

    let numerator = boundary
        .mul_scalar(alpha)
        .add(&ordering)
        .mul_scalar(alpha)
        .add(&gate);
    let mut z_h_coefs = vec![F::zero(); n + 1];
    z_h_coefs[0] = F::one().neg();
    z_h_coefs[n] = F::one();
    let (t_poly, _) = numerator
        .div_rem(&FpPolynomial::from_coefs(z_h_coefs))
        .unwrap();

    let zeta_omega = zeta.mul(&group[1 % n]);
    PlonkProof::new(
        [
            l_private.eval(zeta),
            w_polys[1].eval(zeta),
            w_polys[2].eval(zeta),
            t_poly.eval(zeta),
            z_poly.eval(zeta),
        ],
        z_poly.eval(&zeta_omega),
    )
}

/// Sample challenges with `zeta` outside of any small domain.
pub fn random_challenges<F: Scalar, R: CryptoRng + RngCore>(prng: &mut R) -> PlonkChallenges<F> {
    PlonkChallenges::new(F::random(prng), F::random(prng), F::random(prng))
}

/// The circuit `x * y = 6` over a domain of four points, with `x = 2` public.
pub fn product_circuit<F: Scalar>() -> Instance<F> {
    let mut cs = SparseR1CS::new();
    let x = cs.new_variable(F::from(2u32));
    let y = cs.new_variable(F::from(3u32));
    let xy = cs.new_variable(F::from(6u32));
    cs.prepare_pi_variable(x);
    cs.insert_mul_gate(x, y, xy);
    cs.insert_constant_gate(xy, F::from(6u32));
    cs.pad();

    let witness = cs.get_witness();
    let public_inputs = cs.public_inputs();
    Instance {
        cs,
        witness,
        public_inputs,
    }
}

/// A random satisfiable circuit mixing additions, multiplications and constants.
pub fn random_circuit<F: Scalar, R: CryptoRng + RngCore>(
    prng: &mut R,
    num_public_inputs: usize,
    num_gates: usize,
) -> Instance<F> {
    let mut cs = SparseR1CS::new();
    let mut vars: Vec<VarIndex> = (0..3)
        .map(|_| cs.new_variable(F::random(prng)))
        .collect();
    let mut values = cs.get_witness();

    for _ in 0..num_gates {
        let a = vars[prng.gen_range(0..vars.len())];
        let b = vars[prng.gen_range(0..vars.len())];
        match prng.gen_range(0..3) {
            0 => {
                let c = cs.new_variable(values[a].add(&values[b]));
                cs.insert_add_gate(a, b, c);
                vars.push(c);
            }
            1 => {
                let c = cs.new_variable(values[a].mul(&values[b]));
                cs.insert_mul_gate(a, b, c);
                vars.push(c);
            }
            _ => cs.insert_constant_gate(a, values[a]),
        }
        values = cs.get_witness();
    }
    for _ in 0..num_public_inputs {
        let var = vars[prng.gen_range(0..vars.len())];
        cs.prepare_pi_variable(var);
    }
    cs.pad();

    let witness = cs.get_witness();
    let public_inputs = cs.public_inputs();
    Instance {
        cs,
        witness,
        public_inputs,
    }
}

/// Flip one bit of the canonical encoding, if the result is still a field element.
pub fn flip_bit<F: Scalar>(x: &F, bit: usize) -> Option<F> {
    let mut bytes = x.to_bytes();
    bytes[bit / 8] ^= 1 << (bit % 8);
    F::from_bytes(&bytes).ok()
}
