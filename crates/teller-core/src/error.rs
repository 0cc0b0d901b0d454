//! # Error Types
//!
//! Domain-specific error types for teller-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  teller-core errors (this file)                                        │
//! │  └── CoreError        - Every way a cash operation can be refused      │
//! │                                                                         │
//! │  teller-machine errors (separate crate)                                │
//! │  └── MachineError     - What the host sees (code + message)            │
//! │                                                                         │
//! │  Flow: CoreError → MachineError → host-facing message                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (denomination, counts, amounts)
//! 3. Errors are enum variants, never String
//! 4. Every variant is recoverable: a refused operation leaves the ledger
//!    untouched and the process running

use thiserror::Error;

use crate::denomination::Denomination;

// =============================================================================
// Core Error
// =============================================================================

/// Cash-handling errors.
///
/// Every refused deposit or withdrawal reports exactly one of these to the
/// immediate caller. None of them mutates the ledger.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The denomination is not part of this machine's configured set.
    ///
    /// ## When This Occurs
    /// - A raw face value fails to parse (`Denomination::try_from`)
    /// - A valid note type is offered to a machine whose cassettes were
    ///   never configured for it
    #[error("denomination {value} is not configured in this machine")]
    UnknownDenomination { value: u64 },

    /// A note count of zero (or otherwise meaningless) was supplied.
    #[error("note count for denomination {denomination} must be positive")]
    InvalidCount { denomination: Denomination },

    /// A deposit would overflow the denomination's cassette.
    ///
    /// ## User Workflow
    /// ```text
    /// Deposit (100, 30)
    ///      │
    ///      ▼
    /// Check headroom: capacity 50, held 25 → available 25
    ///      │
    ///      ▼
    /// CapacityExceeded { denomination: 100, requested: 30, available: 25 }
    ///      │
    ///      ▼
    /// Host shows: "Only 25 more notes of 100 fit"
    /// ```
    #[error("deposit of {requested} notes of {denomination} exceeds remaining capacity ({available})")]
    CapacityExceeded {
        denomination: Denomination,
        requested: u64,
        available: u64,
    },

    /// A batch deposit with no entries.
    #[error("a batch deposit must contain at least one note")]
    EmptyBatch,

    /// A withdrawal of zero.
    #[error("cannot withdraw an amount of zero")]
    ZeroAmount,

    /// No exact combination of held notes sums to the requested amount.
    ///
    /// Covers both "not enough total value in the machine" and "total value
    /// sufficient but no exact combination exists"; the planner discovers
    /// them the same way and callers cannot act differently on the two.
    #[error("no exact combination of held notes sums to {requested}")]
    UnreachableAmount { requested: u64 },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::CapacityExceeded {
            denomination: Denomination::OneHundred,
            requested: 30,
            available: 25,
        };
        assert_eq!(
            err.to_string(),
            "deposit of 30 notes of 100 exceeds remaining capacity (25)"
        );

        let err = CoreError::UnknownDenomination { value: 250 };
        assert_eq!(err.to_string(), "denomination 250 is not configured in this machine");

        let err = CoreError::UnreachableAmount { requested: 800 };
        assert_eq!(err.to_string(), "no exact combination of held notes sums to 800");
    }

    #[test]
    fn test_zero_paths_have_distinct_messages() {
        assert_eq!(
            CoreError::ZeroAmount.to_string(),
            "cannot withdraw an amount of zero"
        );
        assert_eq!(
            CoreError::EmptyBatch.to_string(),
            "a batch deposit must contain at least one note"
        );
    }
}
