use crate::prelude::*;
use ark_ff::FftField;
use ark_std::fmt::Debug;
use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

/// The trait for scalars
pub trait Scalar:
    Copy
    + Default
    + Debug
    + PartialEq
    + Eq
    + Serialize
    + for<'de> Deserialize<'de>
    + Into<BigUint>
    + Clone
    + One
    + Zero
    + Sized
    + Add<Self, Output = Self>
    + Mul<Self, Output = Self>
    + Sum<Self>
    + for<'a> Add<&'a Self, Output = Self>
    + for<'a> AddAssign<&'a Self>
    + for<'a> Mul<&'a Self, Output = Self>
    + for<'a> MulAssign<&'a Self>
    + for<'a> Sub<&'a Self, Output = Self>
    + for<'a> SubAssign<&'a Self>
    + for<'a> Sum<&'a Self>
    + From<u32>
    + From<u64>
    + Neg<Output = Self>
    + Sync
    + Send
{
    /// Return a random scalar
    fn random<R: CryptoRng + RngCore>(rng: &mut R) -> Self;

    /// Return multiplicative generator of the full multiplicative group
    fn multiplicative_generator() -> Self;

    /// Return the capacity.
    fn capacity() -> usize;

    /// Return the little-endian byte representations of the field size
    fn get_field_size_le_bytes() -> Vec<u8>;

    /// Return the field size as a BigUint
    fn get_field_size_biguint() -> BigUint;

    /// Return the len of the byte representation
    fn bytes_len() -> usize;

    /// Convert to bytes (little-endian, canonical)
    fn to_bytes(&self) -> Vec<u8>;

    /// Convert from bytes, rejecting non-canonical encodings
    fn from_bytes(bytes: &[u8]) -> Result<Self>;

    /// Return the modular inverse of the scalar if it exists
    fn inv(&self) -> Result<Self>;

    /// Return `self / other`, failing when `other` is zero
    fn div(&self, other: &Self) -> Result<Self> {
        Ok(self.mul(&other.inv()?))
    }

    /// Return the square of the field element
    fn square(&self) -> Self;

    /// exponent form: least significant limb first, with u64 limbs
    fn pow(&self, exponent: &[u64]) -> Self {
        let mut base = *self;
        let mut result = Self::one();
        for exp_u64 in exponent {
            let mut e = *exp_u64;
            // we have to square the base for 64 times.
            for _ in 0..64 {
                if e % 2 == 1 {
                    result.mul_assign(&base);
                }
                base = base.mul(&base);
                e >>= 1;
            }
        }
        result
    }

    /// Convert into BigUint, often for debug.
    fn into_biguint(self) -> BigUint {
        self.into()
    }
}

/// The trait for scalars that support radix-2 evaluation domains.
pub trait Domain: Scalar {
    /// The field that is able to be used in FFTs.
    type Field: FftField;

    /// Return fft field.
    fn get_field(&self) -> Self::Field;

    /// Sample a domain element from an fft field element.
    fn from_field(field: Self::Field) -> Self;
}

#[cfg(test)]
pub(crate) mod scalar_tests {
    use crate::prelude::*;

    pub(crate) fn test_scalar_operations<S: Scalar>() {
        let a = S::from(40u32);
        let b = S::from(60u32);
        let c = a.add(&b);
        let d = S::from(100u32);
        assert_eq!(c, d);

        let mut x = S::from(0u32);
        x.add_assign(&a);
        x.add_assign(&b);
        assert_eq!(x, d);

        let a = S::from(10u32);
        let b = S::from(40u32);
        let c = a.mul(&b);
        let d = S::from(400u32);
        assert_eq!(c, d);

        let a = S::from(0xFFFFFFFFu32);
        let b = S::from(1u32);
        let c = a.add(&b);
        let d = S::from(0x100000000u64);
        assert_eq!(c, d);

        let a = S::from(40u32);
        let b = S::from(60u32);
        let c = b.sub(&a);
        let d = S::from(20u32);
        assert_eq!(c, d);

        let mut x = S::from(120u32);
        x.sub_assign(&b);
        x.sub_assign(&a);
        assert_eq!(x, d);

        let a = S::from(40u32);
        let b = a.neg();
        let c = b.add(&a);
        assert!(c.is_zero());

        let a = S::from(40u32);
        let b = a.inv().unwrap();
        let c = b.mul(&a);
        assert_eq!(c, S::one());

        let a = S::from(1000u32);
        let b = S::from(8u32);
        assert_eq!(a.div(&b).unwrap(), S::from(125u32));
        assert_eq!(
            S::zero().inv().unwrap_err(),
            AlgebraError::GroupInversionError
        );
        assert!(a.div(&S::zero()).is_err());

        let a = S::from(3u32);
        let c = a.pow(&[20]);
        let d = S::from(3486784401u64);
        assert_eq!(c, d);
        assert_eq!(a.pow(&[]), S::one());
        assert_eq!(a.square(), S::from(9u32));

        let minus_one = S::one().neg();
        let field_size_minus_one = S::get_field_size_biguint() - 1u64;
        assert_eq!(minus_one.into_biguint(), field_size_minus_one);

        let v = S::get_field_size_biguint().to_bytes_le();
        assert_eq!(v, S::get_field_size_le_bytes());
    }

    pub(crate) fn test_scalar_serialization<S: Scalar>() {
        let mut prng = test_rng();
        let a = S::random(&mut prng);
        let bytes = a.to_bytes();
        assert_eq!(bytes.len(), S::bytes_len());
        let b = S::from_bytes(bytes.as_slice()).unwrap();
        assert_eq!(a, b);

        // the modulus itself is not a canonical encoding
        let modulus = S::get_field_size_le_bytes();
        assert_eq!(
            S::from_bytes(&modulus).unwrap_err(),
            AlgebraError::DeserializationError
        );
        let too_long = vec![0u8; S::bytes_len() + 1];
        assert!(S::from_bytes(&too_long).is_err());

        let json = serde_json::to_string(&a).unwrap();
        let c: S = serde_json::from_str(&json).unwrap();
        assert_eq!(a, c);

        let bin = bincode::serialize(&a).unwrap();
        let d: S = bincode::deserialize(&bin).unwrap();
        assert_eq!(a, d);
    }
}
