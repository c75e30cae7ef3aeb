//! JSON reports for the `zkhash` CLI.
//!
//! A report is one self-contained JSON object per invocation, tagged by
//! `"status"` so scripts can branch on success without parsing messages.

use crate::error::ErrorCode;
use crate::field::Hash;
use serde::Serialize;

/// Every representation of a single hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HashReport {
    /// Full decimal integer.
    pub decimal: String,
    /// Storage-order hex.
    pub hex: String,
    /// Integer-order (big-endian) hex.
    pub bytes: String,
    /// Abbreviated decimal used in logs.
    pub display: String,
    /// Whether the value is below the field modulus.
    pub in_field: bool,
}

impl HashReport {
    /// Build a report for `hash`.
    pub fn new(hash: &Hash) -> Self {
        HashReport {
            decimal: hash.to_decimal(),
            hex: hash.to_hex(),
            bytes: hex::encode(hash.to_bytes()),
            display: hash.display_string(),
            in_field: hash.is_in_field(),
        }
    }
}

/// Outcome of a CLI command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Report {
    /// The input converted cleanly.
    Ok(HashReport),
    /// The input was rejected.
    Error {
        /// Numeric error code.
        code: u32,
        /// Error name.
        name: String,
        /// Display form of the error, including its parameters.
        message: String,
    },
}

impl Report {
    /// Whether this report describes a failure.
    pub fn is_error(&self) -> bool {
        matches!(self, Report::Error { .. })
    }

    /// Render as a single JSON line.
    pub fn to_json(&self) -> String {
        // A report only holds strings, integers and bools.
        serde_json::to_string(self).unwrap_or_else(|e| {
            format!("{{\"status\":\"error\",\"code\":0,\"name\":\"Internal\",\"message\":\"{}\"}}", e)
        })
    }
}

impl From<&Hash> for Report {
    fn from(hash: &Hash) -> Self {
        Report::Ok(HashReport::new(hash))
    }
}

impl From<&ErrorCode> for Report {
    fn from(err: &ErrorCode) -> Self {
        Report::Error {
            code: err.code(),
            name: err.name().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<crate::error::HashResult<Hash>> for Report {
    fn from(result: crate::error::HashResult<Hash>) -> Self {
        match result {
            Ok(hash) => Report::from(&hash),
            Err(err) => Report::from(&err),
        }
    }
}
