//! Error codes for field hash conversions.
//!
//! Every failure is a recoverable value carrying a stable numeric code, so
//! callers (and the CLI) can tell a corrupt node identifier apart from a
//! malformed textual one without matching on messages.

use thiserror::Error;

/// All error codes produced by the codec.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[allow(non_camel_case_types)]
pub enum ErrorCode {
    /// E103_MalformedHex (code 103)
    #[error("E103_MalformedHex({0})")]
    E103_MalformedHex(/* reason */ String),

    /// E104_WrongByteLength (code 104)
    #[error("E104_WrongByteLength({0}, {1})")]
    E104_WrongByteLength(/* expected */ u64, /* got */ u64),

    /// E105_MalformedDecimal (code 105)
    #[error("E105_MalformedDecimal({0})")]
    E105_MalformedDecimal(/* value */ String),

    /// E300_FieldOverflow (code 300)
    #[error("E300_FieldOverflow({0})")]
    E300_FieldOverflow(/* value */ String),
}

impl ErrorCode {
    /// Get the numeric error code.
    pub fn code(&self) -> u32 {
        match self {
            ErrorCode::E103_MalformedHex(_) => 103,
            ErrorCode::E104_WrongByteLength(_, _) => 104,
            ErrorCode::E105_MalformedDecimal(_) => 105,
            ErrorCode::E300_FieldOverflow(_) => 300,
        }
    }

    /// Get the error name as a string.
    pub fn name(&self) -> &'static str {
        match self {
            ErrorCode::E103_MalformedHex(_) => "E103_MalformedHex",
            ErrorCode::E104_WrongByteLength(_, _) => "E104_WrongByteLength",
            ErrorCode::E105_MalformedDecimal(_) => "E105_MalformedDecimal",
            ErrorCode::E300_FieldOverflow(_) => "E300_FieldOverflow",
        }
    }
}

/// Result type for hash conversions.
pub type HashResult<T> = Result<T, ErrorCode>;
