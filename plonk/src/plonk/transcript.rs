use crate::errors::{PlonkError, Result};
use crate::plonk::{domain::PlonkDomain, indexer::PlonkVerifierParams};
use ember_algebra::prelude::*;
use merlin::Transcript;
use rand_chacha::ChaChaRng;

/// The number of draws before giving up on a challenge outside the domain.
const MAX_CHALLENGE_ATTEMPTS: usize = 256;

/// The challenges binding the verification identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlonkChallenges<F> {
    gamma: F,
    alpha: F,
    zeta: F,
}

impl<F: Scalar> PlonkChallenges<F> {
    /// Bundle externally supplied challenges.
    pub fn new(gamma: F, alpha: F, zeta: F) -> Self {
        Self { gamma, alpha, zeta }
    }

    /// Return the permutation challenge.
    pub fn get_gamma(&self) -> &F {
        &self.gamma
    }

    /// Return the combination challenge.
    pub fn get_alpha(&self) -> &F {
        &self.alpha
    }

    /// Return the evaluation point.
    pub fn get_zeta(&self) -> &F {
        &self.zeta
    }
}

/// A way of obtaining the challenges of one verification.
pub trait PlonkChallengeSource<F: Scalar> {
    /// Produce `gamma`, `alpha` and `zeta` for the given circuit and public inputs.
    fn derive_challenges<P>(
        &mut self,
        params: &PlonkVerifierParams<P, F>,
        public_inputs: &[F],
    ) -> Result<PlonkChallenges<F>>;
}

/// Fixed challenges, agreed upon out of band.
impl<F: Scalar> PlonkChallengeSource<F> for PlonkChallenges<F> {
    fn derive_challenges<P>(
        &mut self,
        _params: &PlonkVerifierParams<P, F>,
        _public_inputs: &[F],
    ) -> Result<PlonkChallenges<F>> {
        Ok(*self)
    }
}

/// Fiat-Shamir challenges over the public data of the circuit.
impl<F: Scalar> PlonkChallengeSource<F> for Transcript {
    fn derive_challenges<P>(
        &mut self,
        params: &PlonkVerifierParams<P, F>,
        public_inputs: &[F],
    ) -> Result<PlonkChallenges<F>> {
        transcript_init_plonk(self, params, public_inputs);
        let domain = &params.domain;
        let gamma = self.get_challenge_outside_domain(b"gamma", domain)?;
        let alpha = self.get_challenge_outside_domain(b"alpha", domain)?;
        let zeta = self.get_challenge_outside_domain(b"zeta", domain)?;
        Ok(PlonkChallenges::new(gamma, alpha, zeta))
    }
}

/// Field element helpers for the transcript.
pub trait PlonkTranscript {
    /// Append the field element to the transcript.
    fn append_field_elem<F: Scalar>(&mut self, elem: &F);

    /// Get challenge result.
    fn get_challenge_field_elem<F: Scalar>(&mut self, label: &'static [u8]) -> F;

    /// Get a challenge that is not a point of `domain`.
    fn get_challenge_outside_domain<F: Scalar>(
        &mut self,
        label: &'static [u8],
        domain: &PlonkDomain<F>,
    ) -> Result<F>;
}

impl PlonkTranscript for Transcript {
    fn append_field_elem<F: Scalar>(&mut self, elem: &F) {
        self.append_message(b"append field point", &elem.to_bytes());
    }

    fn get_challenge_field_elem<F: Scalar>(&mut self, label: &'static [u8]) -> F {
        let mut buff = [0u8; 32];
        self.challenge_bytes(label, &mut buff[..]);
        F::random(&mut ChaChaRng::from_seed(buff))
    }

    fn get_challenge_outside_domain<F: Scalar>(
        &mut self,
        label: &'static [u8],
        domain: &PlonkDomain<F>,
    ) -> Result<F> {
        let mut buff = [0u8; 32];
        self.challenge_bytes(label, &mut buff[..]);
        let mut prng = ChaChaRng::from_seed(buff);
        for _ in 0..MAX_CHALLENGE_ATTEMPTS {
            let elem = F::random(&mut prng);
            // elem should not be root-of-unity
            if !domain.contains(&elem) {
                return Ok(elem);
            }
        }
        Err(PlonkError::ChallengeError)
    }
}

/// Initialize the transcript with the public data of a verification.
pub(crate) fn transcript_init_plonk<P, F: Scalar>(
    transcript: &mut Transcript,
    params: &PlonkVerifierParams<P, F>,
    public_inputs: &[F],
) {
    transcript.append_message(b"New Domain", b"PLONK");

    transcript.append_u64(b"CS size", params.domain.cardinality());
    transcript.append_message(b"field size", &F::get_field_size_le_bytes());
    transcript.append_field_elem(params.domain.generator());
    for generator in params.k.iter() {
        transcript.append_field_elem(generator);
    }

    transcript.append_u64(b"PI size", public_inputs.len() as u64);
    for pi in public_inputs.iter() {
        transcript.append_field_elem(pi);
    }
}
