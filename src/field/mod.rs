//! BN254 scalar field constants and the field hash type.
//!
//! Node hashes of the trie are elements of the scalar field of BN254, the
//! curve behind the trie's Poseidon hash. The modulus is fixed at compile
//! time; the `BigUint` form is built once on first use.

mod hash;

pub use hash::{big_uint_from_hash_bytes, serde_hex, Hash};

use num_bigint::BigUint;
use once_cell::sync::Lazy;

/// Length in bytes of a serialized field element.
pub const ELEM_BYTES_LEN: usize = 32;

/// Number of decimal digits kept by the abbreviated display form.
pub const NUM_CHAR_PRINT: usize = 8;

/// BN254 scalar field modulus as decimal string.
pub const MODULUS_DECIMAL: &str =
    "21888242871839275222246405745257275088548364400416711303398488365040033185281";

/// BN254 scalar field modulus as 64-char hex (big-endian bytes).
pub const MODULUS_HEX: &str = "30644e72e131a029b85045b68181585d2833e8487be9685c26de3f5a7fbdbe01";

/// BN254 scalar field modulus, big-endian bytes.
pub const MODULUS_BE_BYTES: [u8; ELEM_BYTES_LEN] = [
    0x30, 0x64, 0x4e, 0x72, 0xe1, 0x31, 0xa0, 0x29, 0xb8, 0x50, 0x45, 0xb6, 0x81, 0x81, 0x58, 0x5d,
    0x28, 0x33, 0xe8, 0x48, 0x7b, 0xe9, 0x68, 0x5c, 0x26, 0xde, 0x3f, 0x5a, 0x7f, 0xbd, 0xbe, 0x01,
];

static MODULUS: Lazy<BigUint> = Lazy::new(|| BigUint::from_bytes_be(&MODULUS_BE_BYTES));

/// The field modulus `Q`.
pub fn modulus() -> &'static BigUint {
    &MODULUS
}

/// Check that `value` is a canonical field element, i.e. `value < Q`.
pub fn in_field(value: &BigUint) -> bool {
    value < modulus()
}

/// Return a copy of `bytes` in the opposite byte order.
pub fn reverse_byte_order(bytes: &[u8]) -> Vec<u8> {
    bytes.iter().rev().copied().collect()
}
