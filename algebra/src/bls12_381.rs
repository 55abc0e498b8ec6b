use crate::prelude::*;
use ark_bls12_381::Fr;
use ark_ff::{BigInteger, Field, PrimeField};

/// The number of bytes for a scalar value over BLS12-381.
pub const BLS12_381_SCALAR_LEN: usize = 32;

/// The wrapped struct for `ark_bls12_381::Fr`
#[derive(Copy, Clone, PartialEq, Eq, Default, PartialOrd, Ord, Hash)]
pub struct BLSScalar(pub(crate) Fr);

scalar_wrapper!(BLSScalar, Fr, BLS12_381_SCALAR_LEN);

#[cfg(test)]
mod bls12_381_scalar_test {
    use crate::bls12_381::BLSScalar;
    use crate::prelude::*;
    use crate::traits::scalar_tests::{test_scalar_operations, test_scalar_serialization};

    #[test]
    fn test_scalar_ops() {
        test_scalar_operations::<BLSScalar>();
    }

    #[test]
    fn scalar_deser() {
        test_scalar_serialization::<BLSScalar>();
    }

    #[test]
    fn field_size() {
        assert_eq!(
            BLSScalar::get_field_size_biguint().to_str_radix(16),
            "73eda753299d7d483339d80809a1d80553bda402fffe5bfeffffffff00000001"
        );
        assert_eq!(BLSScalar::capacity(), 254);
    }
}
