//! # Wire Shapes
//!
//! Every component accepts a `RawRequest` (an opcode plus an ordered list of
//! byte-string arguments) and answers with a `Reply` (a success flag plus an
//! ordered list of emitted log records).
//!
//! Argument encoding: integers are 8-byte big-endian, accounts are raw
//! 32-byte strings, booleans are 8-byte big-endian 0/1. Every decoding
//! failure becomes a `DecodeError` and is reported to the caller as a
//! rejected transition, never a panic.

use crate::account::Account;
use crate::errors::ContractError;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Width of an encoded integer argument.
pub const INT_WIDTH: usize = 8;

// =============================================================================
// RAW REQUEST
// =============================================================================

/// An undecoded component request as it arrives on the wire.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRequest {
    /// Operation name, e.g. `"update_quantity"`.
    pub opcode: String,
    /// Ordered byte-string arguments (the opcode is not repeated here).
    pub args: Vec<Vec<u8>>,
}

impl RawRequest {
    /// Creates a raw request.
    #[must_use]
    pub fn new(opcode: impl Into<String>, args: Vec<Vec<u8>>) -> Self {
        Self {
            opcode: opcode.into(),
            args,
        }
    }
}

// =============================================================================
// DECODE ERRORS
// =============================================================================

/// A wire-level decoding failure. Always surfaces as `MalformedRequest`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DecodeError {
    /// The opcode is not part of the component's closed request set.
    #[error("unknown opcode: {0}")]
    UnknownOpcode(String),

    /// The argument list has the wrong length for this opcode.
    #[error("wrong argument count for {opcode}: expected {expected}, got {actual}")]
    WrongArity {
        /// Offending opcode.
        opcode: &'static str,
        /// Required argument count.
        expected: usize,
        /// Supplied argument count.
        actual: usize,
    },

    /// A fixed-width field has the wrong byte length.
    #[error("field {field}: expected {expected} bytes, got {actual}")]
    WrongWidth {
        /// Field name.
        field: &'static str,
        /// Required width.
        expected: usize,
        /// Supplied width.
        actual: usize,
    },

    /// A decoded value is outside its permitted range.
    #[error("field {field}: value {value} out of range")]
    OutOfRange {
        /// Field name.
        field: &'static str,
        /// Decoded value.
        value: u64,
    },
}

/// Checks the argument count for an opcode.
///
/// # Errors
/// Returns `DecodeError::WrongArity` on mismatch.
pub fn expect_arity(
    opcode: &'static str,
    args: &[Vec<u8>],
    expected: usize,
) -> Result<(), DecodeError> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(DecodeError::WrongArity {
            opcode,
            expected,
            actual: args.len(),
        })
    }
}

/// Decodes an 8-byte big-endian unsigned integer.
///
/// # Errors
/// Returns `DecodeError::WrongWidth` unless exactly 8 bytes are supplied.
pub fn decode_u64(field: &'static str, bytes: &[u8]) -> Result<u64, DecodeError> {
    let fixed: [u8; INT_WIDTH] = bytes.try_into().map_err(|_| DecodeError::WrongWidth {
        field,
        expected: INT_WIDTH,
        actual: bytes.len(),
    })?;
    Ok(u64::from_be_bytes(fixed))
}

/// Decodes a boolean encoded as an 8-byte big-endian 0 or 1.
///
/// # Errors
/// Returns `WrongWidth` for bad width, `OutOfRange` for values above 1.
pub fn decode_bool(field: &'static str, bytes: &[u8]) -> Result<bool, DecodeError> {
    match decode_u64(field, bytes)? {
        0 => Ok(false),
        1 => Ok(true),
        value => Err(DecodeError::OutOfRange { field, value }),
    }
}

/// Decodes a raw 32-byte account identifier.
///
/// # Errors
/// Returns `DecodeError::WrongWidth` unless exactly 32 bytes are supplied.
pub fn decode_account(field: &'static str, bytes: &[u8]) -> Result<Account, DecodeError> {
    Account::from_slice(bytes).ok_or(DecodeError::WrongWidth {
        field,
        expected: 32,
        actual: bytes.len(),
    })
}

/// Encodes an unsigned integer in the wire width (8-byte big-endian).
#[must_use]
pub fn encode_u64(value: u64) -> Vec<u8> {
    value.to_be_bytes().to_vec()
}

// =============================================================================
// LOG RECORD
// =============================================================================

/// A byte-string log record emitted by a state transition.
///
/// Records interleave ASCII labels with big-endian fixed-width integers,
/// matching the layout the ledger-execution environment concatenates. They
/// are returned to the caller and persisted by an external indexing sink.
#[derive(Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LogRecord(pub Vec<u8>);

impl LogRecord {
    /// Creates an empty record.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Appends an ASCII label.
    #[must_use]
    pub fn text(mut self, label: &str) -> Self {
        self.0.extend_from_slice(label.as_bytes());
        self
    }

    /// Appends an integer in the wire width (8-byte big-endian).
    #[must_use]
    pub fn uint(mut self, value: u64) -> Self {
        self.0.extend_from_slice(&value.to_be_bytes());
        self
    }

    /// Appends raw bytes verbatim.
    #[must_use]
    pub fn raw(mut self, bytes: &[u8]) -> Self {
        self.0.extend_from_slice(bytes);
        self
    }

    /// Returns the underlying bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Returns true if the record begins with the given prefix.
    #[must_use]
    pub fn starts_with(&self, prefix: &[u8]) -> bool {
        self.0.starts_with(prefix)
    }
}

impl fmt::Debug for LogRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LogRecord({:?})", String::from_utf8_lossy(&self.0))
    }
}

impl AsRef<[u8]> for LogRecord {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

// =============================================================================
// REPLY
// =============================================================================

/// The wire-visible outcome of one invocation.
///
/// Rejections carry a stable code so that callers can tell `UNAUTHORIZED`
/// apart from `NOT_YET_DUE` apart from `MALFORMED_REQUEST`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Reply {
    /// Whether the state transition was applied.
    pub success: bool,
    /// Ordered log records emitted by the transition (empty on rejection).
    pub logs: Vec<LogRecord>,
    /// Stable rejection code (None on success).
    pub code: Option<String>,
    /// Human-readable rejection detail (None on success).
    pub error: Option<String>,
}

impl Reply {
    /// A successful reply carrying the emitted logs.
    #[must_use]
    pub fn ok(logs: Vec<LogRecord>) -> Self {
        Self {
            success: true,
            logs,
            code: None,
            error: None,
        }
    }

    /// A rejected reply. The failed transition left state unchanged.
    #[must_use]
    pub fn rejected(err: &ContractError) -> Self {
        Self {
            success: false,
            logs: Vec::new(),
            code: Some(err.code().to_string()),
            error: Some(err.to_string()),
        }
    }
}

impl From<Result<Vec<LogRecord>, ContractError>> for Reply {
    fn from(result: Result<Vec<LogRecord>, ContractError>) -> Self {
        match result {
            Ok(logs) => Reply::ok(logs),
            Err(err) => Reply::rejected(&err),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
