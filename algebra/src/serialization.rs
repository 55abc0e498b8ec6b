use crate::prelude::*;
use ark_std::fmt;
use serde::de::{Error as DeError, SeqAccess, Visitor};

/// Canonical byte encoding used by the serde implementations of field wrappers.
pub trait FromToBytes: Sized {
    /// Convert to bytes.
    fn to_canonical_bytes(&self) -> Vec<u8>;
    /// Reconstruct from bytes.
    fn from_canonical_bytes(bytes: &[u8]) -> Result<Self>;
}

/// Visitor that accepts a base64 string, a byte buffer or a sequence of bytes.
pub struct BytesVisitor;

impl<'de> Visitor<'de> for BytesVisitor {
    type Value = Vec<u8>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a valid byte encoding")
    }

    fn visit_bytes<E: DeError>(self, v: &[u8]) -> core::result::Result<Vec<u8>, E> {
        Ok(v.to_vec())
    }

    fn visit_byte_buf<E: DeError>(self, v: Vec<u8>) -> core::result::Result<Vec<u8>, E> {
        Ok(v)
    }

    fn visit_str<E: DeError>(self, v: &str) -> core::result::Result<Vec<u8>, E> {
        b64dec(v).map_err(|_| E::custom("invalid base64 encoding"))
    }

    fn visit_seq<V>(self, mut seq: V) -> core::result::Result<Vec<u8>, V::Error>
    where
        V: SeqAccess<'de>,
    {
        let mut vec = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(x) = seq.next_element()? {
            vec.push(x);
        }
        Ok(vec)
    }
}

/// Implement `Serialize` and `Deserialize` on top of `FromToBytes`.
#[macro_export]
macro_rules! serialize_deserialize {
    ($t:ident) => {
        impl serde::Serialize for $t {
            fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                let bytes = $crate::serialization::FromToBytes::to_canonical_bytes(self);
                if serializer.is_human_readable() {
                    serializer.serialize_str(&$crate::utils::b64enc(&bytes))
                } else {
                    serializer.serialize_bytes(&bytes)
                }
            }
        }

        impl<'de> serde::Deserialize<'de> for $t {
            fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let bytes = if deserializer.is_human_readable() {
                    deserializer.deserialize_str($crate::serialization::BytesVisitor)?
                } else {
                    deserializer.deserialize_bytes($crate::serialization::BytesVisitor)?
                };
                <$t as $crate::serialization::FromToBytes>::from_canonical_bytes(bytes.as_slice())
                    .map_err(serde::de::Error::custom)
            }
        }
    };
}
