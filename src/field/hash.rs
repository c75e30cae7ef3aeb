//! Field hash: a BN254 scalar stored as 32 little-endian bytes.
//!
//! The trie keeps node hashes in storage byte order (least-significant byte
//! first) while every integer-facing API speaks big-endian. The two orders
//! are bridged by explicitly named conversions:
//!
//! - [`Hash::from_storage_bytes`] / [`Hash::as_storage_bytes`]: no reversal
//! - [`Hash::from_bytes`] / [`Hash::to_bytes`]: integer (big-endian) order
//!
//! Construction from bytes or text the caller computed itself is trusted.
//! Bytes from storage or the network go through
//! [`big_uint_from_hash_bytes`] or [`Hash::from_field_bytes`], which reject
//! values outside the field.

use super::{in_field, modulus, reverse_byte_order, ELEM_BYTES_LEN, NUM_CHAR_PRINT};
use crate::error::{ErrorCode, HashResult};
use num_bigint::BigUint;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A trie node hash.
///
/// Equality is byte equality of the storage representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hash([u8; ELEM_BYTES_LEN]);

impl Hash {
    /// The empty/sentinel hash (all zero bytes).
    pub const ZERO: Hash = Hash([0u8; ELEM_BYTES_LEN]);

    /// Wrap bytes that are already in storage (little-endian) order.
    pub const fn from_storage_bytes(bytes: [u8; ELEM_BYTES_LEN]) -> Hash {
        Hash(bytes)
    }

    /// Borrow the storage (little-endian) bytes.
    pub fn as_storage_bytes(&self) -> &[u8; ELEM_BYTES_LEN] {
        &self.0
    }

    /// Create a hash from integer-order (big-endian) bytes, as produced by
    /// [`Hash::to_bytes`].
    ///
    /// Only the length is checked. Use [`Hash::from_field_bytes`] for
    /// untrusted input.
    pub fn from_bytes(bytes: &[u8]) -> HashResult<Hash> {
        if bytes.len() != ELEM_BYTES_LEN {
            return Err(ErrorCode::E104_WrongByteLength(
                ELEM_BYTES_LEN as u64,
                bytes.len() as u64,
            ));
        }
        let mut storage = [0u8; ELEM_BYTES_LEN];
        storage.copy_from_slice(bytes);
        storage.reverse();
        Ok(Hash(storage))
    }

    /// Create a hash from untrusted integer-order bytes, rejecting values
    /// that are not canonical field elements.
    pub fn from_field_bytes(bytes: &[u8]) -> HashResult<Hash> {
        big_uint_from_hash_bytes(bytes)?;
        Self::from_bytes(bytes)
    }

    /// Integer-order (big-endian) bytes. Inverse of [`Hash::from_bytes`].
    pub fn to_bytes(&self) -> [u8; ELEM_BYTES_LEN] {
        let mut bytes = self.0;
        bytes.reverse();
        bytes
    }

    /// Create a hash from an integer.
    ///
    /// The caller is responsible for `value < Q`; no range check is done.
    /// Anything above 32 bytes is dropped.
    pub fn from_big_uint(value: &BigUint) -> Hash {
        let le = reverse_byte_order(&value.to_bytes_be());
        let len = le.len().min(ELEM_BYTES_LEN);
        let mut storage = [0u8; ELEM_BYTES_LEN];
        storage[..len].copy_from_slice(&le[..len]);
        Hash(storage)
    }

    /// Create a hash from a u64 value.
    pub fn from_u64(val: u64) -> Hash {
        Self::from_big_uint(&BigUint::from(val))
    }

    /// The integer value of the hash.
    pub fn to_big_uint(&self) -> BigUint {
        BigUint::from_bytes_be(&self.to_bytes())
    }

    /// Parse a hex string of storage bytes (optional `0x` prefix).
    pub fn from_hex(hex_str: &str) -> HashResult<Hash> {
        let hex_str = hex_str
            .strip_prefix("0x")
            .or_else(|| hex_str.strip_prefix("0X"))
            .unwrap_or(hex_str);

        let bytes = hex::decode(hex_str).map_err(|e| ErrorCode::E103_MalformedHex(e.to_string()))?;

        // Storage order in, storage order kept.
        let storage: [u8; ELEM_BYTES_LEN] = bytes.as_slice().try_into().map_err(|_| {
            ErrorCode::E104_WrongByteLength(ELEM_BYTES_LEN as u64, bytes.len() as u64)
        })?;
        Ok(Hash(storage))
    }

    /// Convert to 64-character lowercase hex of the storage bytes.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse a base-10 integer literal.
    ///
    /// Only ASCII digits are accepted: no sign, whitespace or separators.
    pub fn from_decimal_str(s: &str) -> HashResult<Hash> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ErrorCode::E105_MalformedDecimal(s.to_string()));
        }
        let value = BigUint::parse_bytes(s.as_bytes(), 10)
            .ok_or_else(|| ErrorCode::E105_MalformedDecimal(s.to_string()))?;
        Ok(Self::from_big_uint(&value))
    }

    /// Full decimal representation of the integer value.
    pub fn to_decimal(&self) -> String {
        self.to_big_uint().to_string()
    }

    /// Abbreviated decimal form for logs: the first eight digits followed by
    /// `...` once the value has eight or more digits.
    pub fn display_string(&self) -> String {
        let s = self.to_decimal();
        if s.len() < NUM_CHAR_PRINT {
            return s;
        }
        format!("{}...", &s[..NUM_CHAR_PRINT])
    }

    /// Whether this is the empty/sentinel hash.
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; ELEM_BYTES_LEN]
    }

    /// Whether the value is a canonical field element.
    pub fn is_in_field(&self) -> bool {
        in_field(&self.to_big_uint())
    }
}

/// Decode untrusted integer-order (big-endian) hash bytes into an integer.
///
/// This is the validating counterpart of [`Hash::from_bytes`]: the input must
/// be exactly 32 bytes and decode to a value below the field modulus.
pub fn big_uint_from_hash_bytes(bytes: &[u8]) -> HashResult<BigUint> {
    if bytes.len() != ELEM_BYTES_LEN {
        tracing::debug!(got = bytes.len(), "rejecting hash bytes with wrong length");
        return Err(ErrorCode::E104_WrongByteLength(
            ELEM_BYTES_LEN as u64,
            bytes.len() as u64,
        ));
    }
    let value = BigUint::from_bytes_be(bytes);
    if !in_field(&value) {
        tracing::debug!(value = %value, modulus = %modulus(), "rejecting hash outside the field");
        return Err(ErrorCode::E300_FieldOverflow(value.to_string()));
    }
    Ok(value)
}

impl Default for Hash {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<u64> for Hash {
    fn from(val: u64) -> Self {
        Hash::from_u64(val)
    }
}

impl FromStr for Hash {
    type Err = ErrorCode;

    fn from_str(s: &str) -> HashResult<Hash> {
        Hash::from_decimal_str(s)
    }
}

impl fmt::Display for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_string())
    }
}

// Text form is the full decimal integer, never the abbreviated display.
impl Serialize for Hash {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_decimal())
    }
}

impl<'de> Deserialize<'de> for Hash {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Hash::from_decimal_str(&s).map_err(serde::de::Error::custom)
    }
}

/// Serde adapter storing a [`Hash`] as storage-order hex.
///
/// ```ignore
/// #[derive(Serialize, Deserialize)]
/// struct Node {
///     #[serde(with = "zktrie_hash::field::serde_hex")]
///     root: Hash,
/// }
/// ```
pub mod serde_hex {
    use super::Hash;
    use serde::{Deserialize, Deserializer, Serializer};

    /// Serialize as 64 lowercase hex chars.
    pub fn serialize<S: Serializer>(hash: &Hash, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&hash.to_hex())
    }

    /// Deserialize from hex, accepting an optional `0x` prefix.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Hash, D::Error> {
        let s = String::deserialize(deserializer)?;
        Hash::from_hex(&s).map_err(serde::de::Error::custom)
    }
}
