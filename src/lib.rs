//! zktrie-hash - canonical field-element hashes for zk-trie nodes.
//!
//! Every node of the trie is identified by an element of the BN254 scalar
//! field. This crate owns that value and the lossless conversions between
//! its representations: little-endian storage bytes, big-endian integer
//! bytes, arbitrary-precision integers, hex and decimal text.
//!
//! # Architecture
//!
//! - [`field`] - field modulus and the [`Hash`] type
//! - [`error`] - error codes for rejected input
//! - [`report`] - JSON reports used by the `zkhash` CLI
//!
//! # Trust boundary
//!
//! Constructors taking values the caller computed itself do not check the
//! field bound. Bytes arriving from storage or the network must go through
//! [`big_uint_from_hash_bytes`] or [`Hash::from_field_bytes`].

// Node identifiers feed Merkle proofs; library code must not panic.
// Tests are checked separately with `cargo test`.
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(missing_docs)]

pub mod error;
pub mod field;
pub mod report;

// Re-export commonly used types
pub use error::{ErrorCode, HashResult};
pub use field::{big_uint_from_hash_bytes, Hash};
pub use report::{HashReport, Report};
