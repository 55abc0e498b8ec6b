use crate::prelude::*;
use base64::alphabet::URL_SAFE;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;

const BASE64_PADDING_CONFIG: GeneralPurposeConfig =
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent);

const BASE64_ENGINE: GeneralPurpose = GeneralPurpose::new(&URL_SAFE, BASE64_PADDING_CONFIG);

/// Convert the input into the base64 encoding
pub fn b64enc<T: ?Sized + AsRef<[u8]>>(input: &T) -> String {
    BASE64_ENGINE.encode(input)
}

/// Reconstruct from the base64 encoding
pub fn b64dec<T: ?Sized + AsRef<[u8]>>(input: &T) -> Result<Vec<u8>> {
    BASE64_ENGINE
        .decode(input)
        .map_err(|_| AlgebraError::DeserializationError)
}

/// Invert every element of `v` in place with a single field inversion.
/// Fails with `GroupInversionError` if any element is zero, leaving `v` untouched.
pub fn batch_inv<F: Domain>(v: &mut [F]) -> Result<()> {
    // ark skips zeros instead of failing
    if v.iter().any(|x| x.is_zero()) {
        return Err(AlgebraError::GroupInversionError);
    }
    let mut fields: Vec<F::Field> = v.iter().map(|x| x.get_field()).collect();
    ark_ff::batch_inversion(&mut fields);
    for (x, inv) in v.iter_mut().zip(fields) {
        *x = F::from_field(inv);
    }
    Ok(())
}
