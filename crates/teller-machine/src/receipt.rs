//! # Receipts
//!
//! Audit records stamped for every successful deposit and withdrawal.
//!
//! ## Design Notes
//! - A receipt exists only for operations that changed the ledger; refusals
//!   produce a [`crate::MachineError`], never a receipt.
//! - `id` is a UUID v4: globally unique without coordination, so receipts
//!   from different machines can be merged into one audit stream.
//! - `created_at` is stamped here in the machine layer; `teller-core` stays
//!   clock-free and deterministic.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use teller_core::{NoteBatch, WithdrawalPlan};

// =============================================================================
// Deposit Receipt
// =============================================================================

/// Record of one accepted deposit (single-denomination or batch).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepositReceipt {
    /// Unique receipt identifier (UUID v4).
    pub id: String,

    /// The notes that entered the machine, smallest denomination first.
    pub notes: NoteBatch,

    /// Total value deposited.
    pub total: u64,

    /// When the deposit was applied.
    pub created_at: DateTime<Utc>,
}

impl DepositReceipt {
    /// Stamps a receipt for a batch of notes that was just applied.
    pub(crate) fn for_notes(notes: NoteBatch) -> Self {
        let total = notes.total();
        DepositReceipt {
            id: Uuid::new_v4().to_string(),
            notes,
            total,
            created_at: Utc::now(),
        }
    }
}

// =============================================================================
// Withdrawal Receipt
// =============================================================================

/// Record of one fulfilled withdrawal.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawalReceipt {
    /// Unique receipt identifier (UUID v4).
    pub id: String,

    /// The amount the customer asked for. Always equals `notes.total()`.
    pub amount: u64,

    /// The exact combination of notes dispensed.
    pub notes: WithdrawalPlan,

    /// When the withdrawal was applied.
    pub created_at: DateTime<Utc>,
}

impl WithdrawalReceipt {
    /// Stamps a receipt for a plan that was just applied.
    pub(crate) fn for_plan(amount: u64, notes: WithdrawalPlan) -> Self {
        WithdrawalReceipt {
            id: Uuid::new_v4().to_string(),
            amount,
            notes,
            created_at: Utc::now(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
