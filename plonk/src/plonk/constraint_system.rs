//! The sparse R1CS consumed by setup: one arithmetic gate
//! `ql*L + qr*R + qm*L*R + qo*O + qk = 0` per row, three wires per gate.
//! Public inputs occupy the first rows, one per row, on the left wire.
use crate::errors::{PlonkError, Result};
use ember_algebra::prelude::*;

/// Variable index
pub type VarIndex = usize;

/// The number of wires in a gate.
pub const N_WIRES_PER_GATE: usize = 3;

/// The number of selectors: left, right, multiplication, output, constant.
pub const N_SELECTORS: usize = 5;

/// The sparse R1CS constraint system.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SparseR1CS<F> {
    /// the selectors of the circuit.
    selectors: Vec<Vec<F>>,
    /// the wiring of the circuit: left, right and output variables.
    wiring: [Vec<VarIndex>; N_WIRES_PER_GATE],
    /// the number of variables.
    num_vars: usize,
    /// the size of circuit.
    size: usize,
    /// the public witness variables indices, in declaration order.
    public_vars_witness_indices: Vec<VarIndex>,
    /// A private witness for the circuit.
    witness: Vec<F>,
}

impl<F: Scalar> Default for SparseR1CS<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Scalar> SparseR1CS<F> {
    /// Create a constraint system holding only the constant zero variable.
    pub fn new() -> SparseR1CS<F> {
        SparseR1CS {
            selectors: vec![vec![]; N_SELECTORS],
            wiring: [vec![], vec![], vec![]],
            num_vars: 1,
            size: 0,
            public_vars_witness_indices: vec![],
            witness: vec![F::zero()],
        }
    }

    /// Return the number of constraints in the system.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Return number of variables in the constraint system.
    pub fn num_vars(&self) -> usize {
        self.num_vars
    }

    /// Return the number of public inputs.
    pub fn num_public_inputs(&self) -> usize {
        self.public_vars_witness_indices.len()
    }

    /// Return the wiring of the constraint system.
    pub fn wiring(&self) -> &[Vec<VarIndex>] {
        &self.wiring[..]
    }

    /// Return the witness indices of the public inputs.
    pub fn public_vars_witness_indices(&self) -> &[VarIndex] {
        &self.public_vars_witness_indices
    }

    /// Borrow the (index)-th selector vector.
    pub fn selector(&self, index: usize) -> Result<&[F]> {
        self.selectors
            .get(index)
            .map(|s| s.as_slice())
            .ok_or(PlonkError::FuncParamsError)
    }

    /// Add a variable with a witness value and return its index.
    pub fn new_variable(&mut self, value: F) -> VarIndex {
        self.num_vars += 1;
        self.witness.push(value);
        self.num_vars - 1
    }

    /// Declare `var` as the next public input.
    /// The row is inserted after the rows of the previously declared public inputs.
    pub fn prepare_pi_variable(&mut self, var: VarIndex) {
        assert!(var < self.num_vars, "variable index out of bound");
        let row = self.num_public_inputs();
        for selector in self.selectors.iter_mut() {
            selector.insert(row, F::zero());
        }
        self.wiring[0].insert(row, var);
        self.wiring[1].insert(row, 0);
        self.wiring[2].insert(row, 0);
        self.public_vars_witness_indices.push(var);
        self.size += 1;
    }

    /// Insert a gate with the given wires and selectors `[ql, qr, qm, qo, qk]`.
    pub fn insert_gate(&mut self, wires: [VarIndex; N_WIRES_PER_GATE], selectors: [F; N_SELECTORS]) {
        assert!(
            wires.iter().all(|var| *var < self.num_vars),
            "variable index out of bound"
        );
        for (column, var) in self.wiring.iter_mut().zip(wires.iter()) {
            column.push(*var);
        }
        for (column, q) in self.selectors.iter_mut().zip(selectors.iter()) {
            column.push(*q);
        }
        self.size += 1;
    }

    /// Insert an addition gate: `left + right = out`.
    pub fn insert_add_gate(&mut self, left_var: VarIndex, right_var: VarIndex, out_var: VarIndex) {
        let one = F::one();
        self.insert_gate(
            [left_var, right_var, out_var],
            [one, one, F::zero(), one.neg(), F::zero()],
        );
    }

    /// Insert a multiplication gate: `left * right = out`.
    pub fn insert_mul_gate(&mut self, left_var: VarIndex, right_var: VarIndex, out_var: VarIndex) {
        let zero = F::zero();
        self.insert_gate(
            [left_var, right_var, out_var],
            [zero, zero, F::one(), F::one().neg(), zero],
        );
    }

    /// Insert a constant gate: `var = constant`.
    pub fn insert_constant_gate(&mut self, var: VarIndex, constant: F) {
        let zero = F::zero();
        self.insert_gate([var, 0, 0], [F::one(), zero, zero, zero, constant.neg()]);
    }

    /// Pad the number of constraints to a power of two with empty gates.
    pub fn pad(&mut self) {
        let n = self.size.next_power_of_two();
        let diff = n - self.size;
        for selector in self.selectors.iter_mut() {
            selector.extend(vec![F::zero(); diff]);
        }
        for wire in self.wiring.iter_mut() {
            wire.extend(vec![0; diff]);
        }
        self.size += diff;
    }

    /// Compute the permutation implied by the copy constraints.
    /// Wire `j` of gate `i` is the flattened position `j * size + i`; the
    /// positions holding one variable form a single cycle.
    pub fn compute_permutation(&self) -> Vec<usize> {
        let n = self.size;
        let mut perm: Vec<usize> = (0..N_WIRES_PER_GATE * n).collect();
        let mut positions: Vec<Vec<usize>> = vec![vec![]; self.num_vars];
        for (j, column) in self.wiring.iter().enumerate() {
            for (i, var) in column.iter().enumerate() {
                positions[*var].push(j * n + i);
            }
        }
        for cycle in positions.iter().filter(|c| c.len() > 1) {
            for (from, to) in cycle.iter().zip(cycle.iter().cycle().skip(1)) {
                perm[*from] = *to;
            }
        }
        perm
    }

    /// Map the witness onto the wires: the `j`-th vector holds the values of wire `j` on each gate.
    pub fn extend_witness(&self, witness: &[F]) -> Vec<Vec<F>> {
        self.wiring
            .iter()
            .map(|column| column.iter().map(|var| witness[*var]).collect())
            .collect()
    }

    /// Evaluate the gate equation on one row.
    pub fn eval_gate_func(wire_vals: &[F; N_WIRES_PER_GATE], sel_vals: &[F; N_SELECTORS]) -> F {
        let [l, r, o] = wire_vals;
        let [ql, qr, qm, qo, qk] = sel_vals;
        ql.mul(l)
            .add(&qr.mul(r))
            .add(&qm.mul(l).mul(r))
            .add(&qo.mul(o))
            .add(qk)
    }

    /// Check that `witness` satisfies every gate and carries `public_inputs`
    /// on the public variables.
    pub fn verify_witness(&self, witness: &[F], public_inputs: &[F]) -> Result<()> {
        if witness.len() != self.num_vars {
            return Err(PlonkError::Message(format!(
                "witness len = {}, num_vars = {}",
                witness.len(),
                self.num_vars
            )));
        }
        if public_inputs.len() != self.num_public_inputs() {
            return Err(PlonkError::Message(format!(
                "public inputs len = {}, expected {}",
                public_inputs.len(),
                self.num_public_inputs()
            )));
        }
        if !witness[0].is_zero() {
            return Err(PlonkError::ProofErrorInvalidWitness);
        }
        for (var, value) in self.public_vars_witness_indices.iter().zip(public_inputs) {
            if witness[*var] != *value {
                return Err(PlonkError::ProofErrorInvalidWitness);
            }
        }
        for cs_index in 0..self.size {
            let wire_vals = [
                witness[self.wiring[0][cs_index]],
                witness[self.wiring[1][cs_index]],
                witness[self.wiring[2][cs_index]],
            ];
            let sel_vals = [
                self.selectors[0][cs_index],
                self.selectors[1][cs_index],
                self.selectors[2][cs_index],
                self.selectors[3][cs_index],
                self.selectors[4][cs_index],
            ];
            if !Self::eval_gate_func(&wire_vals, &sel_vals).is_zero() {
                return Err(PlonkError::ProofErrorInvalidWitness);
            }
        }
        Ok(())
    }

    /// Return a copy of the witness assigned through `new_variable`.
    pub fn get_witness(&self) -> Vec<F> {
        self.witness.clone()
    }

    /// Return the values of the public variables, in declaration order.
    pub fn public_inputs(&self) -> Vec<F> {
        self.public_vars_witness_indices
            .iter()
            .map(|var| self.witness[*var])
            .collect()
    }
}
