//! # Machine Error Type
//!
//! The host-facing error shape for machine operations.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Error Flow in Teller                                │
//! │                                                                         │
//! │  Host                        Machine Layer                              │
//! │  ────                        ─────────────                              │
//! │                                                                         │
//! │  machine.withdraw(800, ..)                                             │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Result<WithdrawalReceipt, MachineError>                         │  │
//! │  │         │                                                        │  │
//! │  │  CoreError::UnreachableAmount ──► MachineError ─────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  e.code    = UNREACHABLE_AMOUNT   (machine-readable, match on this)    │
//! │  e.message = "no exact combination of held notes sums to 800"          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Serialization
//! Hosts ship errors over IPC as data, so `MachineError` carries both a
//! machine-readable `code` and a human-readable `message` and serializes to:
//! ```json
//! {
//!   "code": "CAPACITY_EXCEEDED",
//!   "message": "deposit of 30 notes of 100 exceeds remaining capacity (25)"
//! }
//! ```

use serde::Serialize;
use thiserror::Error;

use teller_core::CoreError;

// =============================================================================
// Machine Error
// =============================================================================

/// Error returned from machine operations.
#[derive(Debug, Clone, Error, Serialize)]
#[error("[{code:?}] {message}")]
#[serde(rename_all = "camelCase")]
pub struct MachineError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for machine responses.
///
/// One code per refusal in the cash-handling taxonomy; hosts switch on the
/// code and show the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// The note type is not configured in this machine
    UnknownDenomination,

    /// A zero or otherwise meaningless note count
    InvalidCount,

    /// A deposit would overflow a cassette
    CapacityExceeded,

    /// A batch deposit with no entries
    EmptyBatch,

    /// A withdrawal of zero
    ZeroAmount,

    /// No exact combination of held notes pays the requested amount
    UnreachableAmount,
}

impl MachineError {
    /// Creates a new machine error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        MachineError {
            code,
            message: message.into(),
        }
    }
}

/// Converts core errors to machine errors, preserving the message.
impl From<CoreError> for MachineError {
    fn from(err: CoreError) -> Self {
        let code = match err {
            CoreError::UnknownDenomination { .. } => ErrorCode::UnknownDenomination,
            CoreError::InvalidCount { .. } => ErrorCode::InvalidCount,
            CoreError::CapacityExceeded { .. } => ErrorCode::CapacityExceeded,
            CoreError::EmptyBatch => ErrorCode::EmptyBatch,
            CoreError::ZeroAmount => ErrorCode::ZeroAmount,
            CoreError::UnreachableAmount { .. } => ErrorCode::UnreachableAmount,
        };

        MachineError::new(code, err.to_string())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use teller_core::Denomination;

    #[test]
    fn test_code_mapping_covers_the_taxonomy() {
        let cases = [
            (
                CoreError::UnknownDenomination { value: 250 },
                ErrorCode::UnknownDenomination,
            ),
            (
                CoreError::InvalidCount { denomination: Denomination::Ten },
                ErrorCode::InvalidCount,
            ),
            (
                CoreError::CapacityExceeded {
                    denomination: Denomination::Ten,
                    requested: 5,
                    available: 1,
                },
                ErrorCode::CapacityExceeded,
            ),
            (CoreError::EmptyBatch, ErrorCode::EmptyBatch),
            (CoreError::ZeroAmount, ErrorCode::ZeroAmount),
            (
                CoreError::UnreachableAmount { requested: 800 },
                ErrorCode::UnreachableAmount,
            ),
        ];

        for (core, code) in cases {
            let err = MachineError::from(core);
            assert_eq!(err.code, code);
            assert!(!err.message.is_empty());
        }
    }

    #[test]
    fn test_display_includes_code_and_message() {
        let err = MachineError::from(CoreError::ZeroAmount);
        assert_eq!(err.to_string(), "[ZeroAmount] cannot withdraw an amount of zero");
    }

    #[test]
    fn test_serializes_with_screaming_snake_code() {
        let err = MachineError::from(CoreError::UnreachableAmount { requested: 800 });
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "UNREACHABLE_AMOUNT");
        assert_eq!(json["message"], "no exact combination of held notes sums to 800");
    }
}
