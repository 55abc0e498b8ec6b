use crate::prelude::*;
use ark_bn254::Fr;
use ark_ff::{BigInteger, Field, PrimeField};
use ark_std::str::FromStr;

/// The number of bytes for a scalar value over BN254.
pub const BN254_SCALAR_LEN: usize = 32;

/// The wrapped struct for `ark_bn254::Fr`
#[derive(Copy, Clone, PartialEq, Eq, Default, PartialOrd, Ord, Hash)]
pub struct BN254Scalar(pub(crate) Fr);

scalar_wrapper!(BN254Scalar, Fr, BN254_SCALAR_LEN);

impl FromStr for BN254Scalar {
    type Err = AlgebraError;

    fn from_str(string: &str) -> core::result::Result<Self, AlgebraError> {
        Fr::from_str(string)
            .map(Self)
            .map_err(|_| AlgebraError::DeserializationError)
    }
}

#[cfg(test)]
mod bn254_scalar_test {
    use crate::bn254::BN254Scalar;
    use crate::prelude::*;
    use crate::traits::scalar_tests::{test_scalar_operations, test_scalar_serialization};
    use ark_std::str::FromStr;

    #[test]
    fn test_scalar_ops() {
        test_scalar_operations::<BN254Scalar>();
    }

    #[test]
    fn scalar_deser() {
        test_scalar_serialization::<BN254Scalar>();
    }

    #[test]
    fn scalar_from_to_bytes() {
        let small_value = BN254Scalar::from(165747u32);
        let small_value_bytes = small_value.to_bytes();
        let expected_small_value_bytes: [u8; 32] = [
            115, 135, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
            0, 0, 0, 0,
        ];
        assert_eq!(small_value_bytes, expected_small_value_bytes);

        let small_value_from_bytes = BN254Scalar::from_bytes(&small_value_bytes).unwrap();
        assert_eq!(small_value_from_bytes, small_value);
        assert_eq!(BN254Scalar::from_bytes(&[115, 135, 2]).unwrap(), small_value);
    }

    #[test]
    fn field_size() {
        assert_eq!(
            BN254Scalar::get_field_size_biguint().to_str_radix(10),
            "21888242871839275222246405745257275088548364400416034343698204186575808495617"
        );
        assert_eq!(BN254Scalar::capacity(), 253);
        assert_eq!(
            BN254Scalar::from_str("21888242871839275222246405745257275088548364400416034343698204186575808495616")
                .unwrap(),
            BN254Scalar::one().neg()
        );
        assert!(BN254Scalar::from_str("not a number").is_err());
    }

    #[test]
    fn two_adicity_supports_radix2_domains() {
        // 2^28 divides r - 1 for the BN254 scalar field
        let g = BN254Scalar::multiplicative_generator();
        let exponent: num_bigint::BigUint = (BN254Scalar::get_field_size_biguint() - 1u64) >> 28;
        let root = g.pow(&exponent.to_u64_digits());
        let order = root.pow(&[1u64 << 27]);
        assert_ne!(order, BN254Scalar::one());
        assert_eq!(order.square(), BN254Scalar::one());
    }
}
