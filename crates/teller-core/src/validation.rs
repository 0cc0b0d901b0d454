//! # Validation Module
//!
//! Boundary input validation for cash operations.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Host (UI shell)                                              │
//! │  ├── Keystroke filtering, number parsing                               │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Zero counts, zero amounts, empty batches                          │
//! │  └── Runs before any ledger state is touched                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Ledger invariants                                            │
//! │  ├── Denomination membership                                           │
//! │  └── Capacity headroom                                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::denomination::Denomination;
use crate::error::{CoreError, CoreResult};
use crate::types::NoteBatch;

// =============================================================================
// Count and Amount Validators
// =============================================================================

/// Validates a note count for a single-denomination deposit.
///
/// ## Rules
/// - Must be positive; feeding zero notes into the slot is a caller bug
pub fn validate_note_count(denomination: Denomination, count: u64) -> CoreResult<()> {
    if count == 0 {
        return Err(CoreError::InvalidCount { denomination });
    }

    Ok(())
}

/// Validates a requested withdrawal amount.
///
/// ## Rules
/// - Must be positive; a zero withdrawal is always refused, for any ledger
///   state, before any planning work happens
pub fn validate_request_amount(amount: u64) -> CoreResult<()> {
    if amount == 0 {
        return Err(CoreError::ZeroAmount);
    }

    Ok(())
}

// =============================================================================
// Batch Validators
// =============================================================================

/// Validates a deposit batch before it is checked against capacity.
///
/// ## Rules
/// - Must contain at least one entry
/// - Every entry's count must be positive; a zero row is rejected rather
///   than skipped, otherwise the all-or-nothing contract would be ambiguous
pub fn validate_batch(batch: &NoteBatch) -> CoreResult<()> {
    if batch.is_empty() {
        return Err(CoreError::EmptyBatch);
    }

    for (denomination, count) in batch.iter() {
        validate_note_count(denomination, count)?;
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_note_count() {
        assert!(validate_note_count(Denomination::Ten, 1).is_ok());
        assert!(validate_note_count(Denomination::Ten, 999).is_ok());

        let err = validate_note_count(Denomination::Ten, 0).unwrap_err();
        assert!(matches!(
            err,
            CoreError::InvalidCount { denomination: Denomination::Ten }
        ));
    }

    #[test]
    fn test_validate_request_amount() {
        assert!(validate_request_amount(10).is_ok());
        assert!(matches!(validate_request_amount(0), Err(CoreError::ZeroAmount)));
    }

    #[test]
    fn test_validate_batch_rejects_empty() {
        let batch = NoteBatch::new();
        assert!(matches!(validate_batch(&batch), Err(CoreError::EmptyBatch)));
    }

    #[test]
    fn test_validate_batch_rejects_zero_rows() {
        let batch: NoteBatch = [
            (Denomination::OneHundred, 3),
            (Denomination::FiveHundred, 0),
        ]
        .into_iter()
        .collect();

        let err = validate_batch(&batch).unwrap_err();
        assert!(matches!(
            err,
            CoreError::InvalidCount { denomination: Denomination::FiveHundred }
        ));
    }

    #[test]
    fn test_validate_batch_accepts_positive_rows() {
        let batch: NoteBatch = [
            (Denomination::OneHundred, 3),
            (Denomination::FiveHundred, 2),
        ]
        .into_iter()
        .collect();

        assert!(validate_batch(&batch).is_ok());
    }
}
