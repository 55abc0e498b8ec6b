/// Implement the arithmetic, conversion and serde surface of a `Scalar`
/// wrapper around an arkworks prime field.
macro_rules! scalar_wrapper {
    ($scalar:ident, $fr:ty, $len:expr) => {
        impl ark_std::fmt::Debug for $scalar {
            fn fmt(&self, f: &mut ark_std::fmt::Formatter<'_>) -> ark_std::fmt::Result {
                let v: num_bigint::BigUint = self.0.into_bigint().into();
                <num_bigint::BigUint as ark_std::fmt::Debug>::fmt(&v, f)
            }
        }

        impl From<$scalar> for num_bigint::BigUint {
            #[inline]
            fn from(value: $scalar) -> Self {
                value.0.into_bigint().into()
            }
        }

        impl<'a> From<&'a num_bigint::BigUint> for $scalar {
            #[inline]
            fn from(src: &num_bigint::BigUint) -> Self {
                Self(<$fr>::from(src.clone()))
            }
        }

        impl One for $scalar {
            #[inline]
            fn one() -> Self {
                Self(<$fr>::one())
            }
        }

        impl Zero for $scalar {
            #[inline]
            fn zero() -> Self {
                Self(<$fr>::zero())
            }

            #[inline]
            fn is_zero(&self) -> bool {
                self.0.is_zero()
            }
        }

        impl Add for $scalar {
            type Output = $scalar;

            #[inline]
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Mul for $scalar {
            type Output = $scalar;

            #[inline]
            fn mul(self, rhs: Self) -> Self::Output {
                Self(self.0 * rhs.0)
            }
        }

        impl Sum<$scalar> for $scalar {
            #[inline]
            fn sum<I: Iterator<Item = $scalar>>(iter: I) -> Self {
                iter.fold(Self::zero(), Add::add)
            }
        }

        impl<'a> Add<&'a $scalar> for $scalar {
            type Output = $scalar;

            #[inline]
            fn add(self, rhs: &Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl<'a> AddAssign<&'a $scalar> for $scalar {
            #[inline]
            fn add_assign(&mut self, rhs: &Self) {
                self.0 += rhs.0;
            }
        }

        impl<'a> Sub<&'a $scalar> for $scalar {
            type Output = $scalar;

            #[inline]
            fn sub(self, rhs: &Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl<'a> SubAssign<&'a $scalar> for $scalar {
            #[inline]
            fn sub_assign(&mut self, rhs: &Self) {
                self.0 -= rhs.0;
            }
        }

        impl<'a> Mul<&'a $scalar> for $scalar {
            type Output = $scalar;

            #[inline]
            fn mul(self, rhs: &Self) -> Self::Output {
                Self(self.0 * rhs.0)
            }
        }

        impl<'a> MulAssign<&'a $scalar> for $scalar {
            #[inline]
            fn mul_assign(&mut self, rhs: &Self) {
                self.0 *= rhs.0;
            }
        }

        impl<'a> Sum<&'a $scalar> for $scalar {
            #[inline]
            fn sum<I: Iterator<Item = &'a $scalar>>(iter: I) -> Self {
                iter.fold(Self::zero(), Add::add)
            }
        }

        impl Neg for $scalar {
            type Output = $scalar;

            #[inline]
            fn neg(self) -> Self {
                Self(-self.0)
            }
        }

        impl From<u32> for $scalar {
            #[inline]
            fn from(value: u32) -> Self {
                Self::from(value as u64)
            }
        }

        impl From<u64> for $scalar {
            #[inline]
            fn from(value: u64) -> Self {
                Self(<$fr>::from(value))
            }
        }

        impl From<u128> for $scalar {
            #[inline]
            fn from(value: u128) -> Self {
                Self(<$fr>::from(value))
            }
        }

        impl Scalar for $scalar {
            #[inline]
            fn random<R: CryptoRng + RngCore>(rng: &mut R) -> Self {
                Self(<$fr as UniformRand>::rand(rng))
            }

            #[inline]
            fn multiplicative_generator() -> Self {
                Self(<$fr as ark_ff::FftField>::GENERATOR)
            }

            #[inline]
            fn capacity() -> usize {
                (<$fr as PrimeField>::MODULUS_BIT_SIZE - 1) as usize
            }

            #[inline]
            fn get_field_size_le_bytes() -> Vec<u8> {
                let mut bytes = <$fr as PrimeField>::MODULUS.to_bytes_le();
                while bytes.len() > 1 && bytes.last() == Some(&0) {
                    bytes.pop();
                }
                bytes
            }

            #[inline]
            fn get_field_size_biguint() -> num_bigint::BigUint {
                <$fr as PrimeField>::MODULUS.into()
            }

            #[inline]
            fn bytes_len() -> usize {
                $len
            }

            #[inline]
            fn to_bytes(&self) -> Vec<u8> {
                self.0.into_bigint().to_bytes_le()
            }

            #[inline]
            fn from_bytes(bytes: &[u8]) -> Result<Self> {
                if bytes.len() > Self::bytes_len() {
                    return Err(AlgebraError::DeserializationError);
                }
                let value = num_bigint::BigUint::from_bytes_le(bytes);
                if value >= Self::get_field_size_biguint() {
                    return Err(AlgebraError::DeserializationError);
                }
                Ok(Self(<$fr>::from(value)))
            }

            #[inline]
            fn inv(&self) -> Result<Self> {
                self.0
                    .inverse()
                    .map(Self)
                    .ok_or(AlgebraError::GroupInversionError)
            }

            #[inline]
            fn square(&self) -> Self {
                Self(self.0.square())
            }

            #[inline]
            fn pow(&self, exponent: &[u64]) -> Self {
                Self(self.0.pow(exponent))
            }
        }

        impl Domain for $scalar {
            type Field = $fr;

            #[inline]
            fn get_field(&self) -> Self::Field {
                self.0
            }

            #[inline]
            fn from_field(field: Self::Field) -> Self {
                Self(field)
            }
        }

        impl $crate::serialization::FromToBytes for $scalar {
            fn to_canonical_bytes(&self) -> Vec<u8> {
                self.to_bytes()
            }

            fn from_canonical_bytes(bytes: &[u8]) -> Result<Self> {
                if bytes.len() != Self::bytes_len() {
                    return Err(AlgebraError::DeserializationError);
                }
                Self::from_bytes(bytes)
            }
        }

        $crate::serialize_deserialize!($scalar);
    };
}
