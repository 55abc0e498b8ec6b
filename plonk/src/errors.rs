use ark_std::{error, fmt, string::String};
use ember_algebra::prelude::AlgebraError;

pub(crate) type Result<T> = core::result::Result<T, PlonkError>;

#[derive(Debug, Clone, Eq, PartialEq)]
#[allow(missing_docs)]
pub enum PlonkError {
    /// Algebra error
    Algebra(AlgebraError),
    /// Error with message
    Message(String),
    /// No radix-2 subgroup of the requested size.
    GroupNotFound(usize),
    /// Error occurred when setup.
    SetupError,
    /// Division by zero.
    DivisionByZero,
    /// Function params error.
    FuncParamsError,
    /// Challenge error
    ChallengeError,
    /// The witness does not satisfy the circuit.
    ProofErrorInvalidWitness,
    /// The proof does not carry exactly five evaluations at zeta.
    ProofShapeError(usize),
    /// More public inputs than the domain has points.
    PublicInputsLengthError(usize, usize),
}

impl fmt::Display for PlonkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use PlonkError::*;
        match self {
            Algebra(e) => write!(f, "Algebra: {}", e),
            Message(e) => f.write_str(e),
            GroupNotFound(n) => write!(f, "Group of size {} not found.", n),
            SetupError => f.write_str("Setup error."),
            DivisionByZero => f.write_str("Division by zero."),
            FuncParamsError => f.write_str("Function params error"),
            ChallengeError => f.write_str("Challenge error"),
            ProofErrorInvalidWitness => f.write_str("Proof error invalid witness."),
            ProofShapeError(n) => write!(f, "Expected 5 evaluations at zeta, got {}.", n),
            PublicInputsLengthError(cardinality, got) => write!(
                f,
                "Got {} public inputs for a domain of cardinality {}.",
                got, cardinality
            ),
        }
    }
}

impl error::Error for PlonkError {}

impl From<AlgebraError> for PlonkError {
    fn from(e: AlgebraError) -> PlonkError {
        PlonkError::Algebra(e)
    }
}
