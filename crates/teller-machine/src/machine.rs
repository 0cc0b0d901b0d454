//! # Machine State
//!
//! The operable cash machine: one ledger, one lock, receipts and logs.
//!
//! ## Thread Safety
//! The ledger is wrapped in `Arc<Mutex<T>>` because:
//! 1. Hosts run machine operations from whatever thread handles the user
//! 2. A withdrawal must read holdings, plan, and apply under ONE lock
//!    acquisition - the plan is only valid against the holdings it was
//!    computed from
//! 3. Cloning a `CashMachine` clones the handle, not the ledger
//!
//! ## Operation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Machine Operations                                   │
//! │                                                                         │
//! │  Host Action              Machine Method          Ledger Change         │
//! │  ───────────              ──────────────          ─────────────         │
//! │                                                                         │
//! │  Feed notes ─────────────► deposit() ────────────► held += count       │
//! │                                                                         │
//! │  Feed a stack ───────────► deposit_batch() ──────► all rows or none    │
//! │                                                                         │
//! │  Request cash ───────────► withdraw() ───────────► plan applied once   │
//! │                                                                         │
//! │  Balance screen ─────────► holdings(), total_value()   (read only)     │
//! │                                                                         │
//! │  NOTE: Every operation takes the lock once and releases it at the end.  │
//! │        Withdraw keeps read-plan-apply inside that single hold.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex};

use tracing::{debug, info, warn};

use teller_core::{
    CoreResult, Denomination, DispenseOrder, HoldingsRow, Ledger, NoteBatch,
    DEFAULT_SLOT_CAPACITY,
};

use crate::error::MachineError;
use crate::receipt::{DepositReceipt, WithdrawalReceipt};

// =============================================================================
// Cash Machine
// =============================================================================

/// A cash machine: an exclusively-owned ledger behind one lock.
#[derive(Debug, Clone)]
pub struct CashMachine {
    ledger: Arc<Mutex<Ledger>>,
}

impl CashMachine {
    /// Provisions a machine from a `(denomination, capacity)` table.
    ///
    /// Every configured slot starts empty. Denominations missing from the
    /// table are rejected by every later operation.
    pub fn new<I>(capacities: I) -> Self
    where
        I: IntoIterator<Item = (Denomination, u64)>,
    {
        CashMachine {
            ledger: Arc::new(Mutex::new(Ledger::new(capacities))),
        }
    }

    /// Provisions a machine with every denomination at the same capacity.
    pub fn uniform(capacity: u64) -> Self {
        CashMachine {
            ledger: Arc::new(Mutex::new(Ledger::uniform(capacity))),
        }
    }

    /// Executes a function with read access to the ledger.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let rows = machine.with_ledger(|ledger| ledger.holdings());
    /// ```
    pub fn with_ledger<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Ledger) -> R,
    {
        let ledger = self.ledger.lock().expect("ledger mutex poisoned");
        f(&ledger)
    }

    /// Executes a function with write access to the ledger.
    ///
    /// The closure runs entirely inside the lock; this is the critical
    /// section every mutating operation goes through.
    pub fn with_ledger_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Ledger) -> R,
    {
        let mut ledger = self.ledger.lock().expect("ledger mutex poisoned");
        f(&mut ledger)
    }

    // =========================================================================
    // Deposits
    // =========================================================================

    /// Stores notes of one denomination and stamps a receipt.
    pub fn deposit(
        &self,
        denomination: Denomination,
        count: u64,
    ) -> Result<DepositReceipt, MachineError> {
        debug!(denomination = %denomination, count, "deposit requested");

        let result = self.with_ledger_mut(|ledger| ledger.deposit(denomination, count));

        match result {
            Ok(()) => {
                let notes: NoteBatch = [(denomination, count)].into_iter().collect();
                let receipt = DepositReceipt::for_notes(notes);
                info!(
                    receipt = %receipt.id,
                    denomination = %denomination,
                    count,
                    total = receipt.total,
                    "deposit accepted"
                );
                Ok(receipt)
            }
            Err(err) => {
                warn!(denomination = %denomination, count, error = %err, "deposit rejected");
                Err(err.into())
            }
        }
    }

    /// Stores a whole batch of notes, all-or-nothing, and stamps a receipt.
    pub fn deposit_batch(&self, notes: NoteBatch) -> Result<DepositReceipt, MachineError> {
        debug!(
            denominations = notes.len(),
            note_count = notes.note_count(),
            "batch deposit requested"
        );

        let result = self.with_ledger_mut(|ledger| ledger.deposit_batch(&notes));

        match result {
            Ok(()) => {
                let receipt = DepositReceipt::for_notes(notes);
                info!(receipt = %receipt.id, total = receipt.total, "batch deposit accepted");
                Ok(receipt)
            }
            Err(err) => {
                warn!(error = %err, "batch deposit rejected");
                Err(err.into())
            }
        }
    }

    // =========================================================================
    // Withdrawals
    // =========================================================================

    /// Withdraws an exact amount and stamps a receipt.
    ///
    /// Reading the holdings, planning the combination, and applying it all
    /// happen inside one lock hold, so no other operation can slip between
    /// the feasibility check and the commit.
    pub fn withdraw(
        &self,
        amount: u64,
        order: DispenseOrder,
    ) -> Result<WithdrawalReceipt, MachineError> {
        debug!(amount, ?order, "withdrawal requested");

        let result = self.with_ledger_mut(|ledger| ledger.withdraw(amount, order));

        match result {
            Ok(plan) => {
                let receipt = WithdrawalReceipt::for_plan(amount, plan);
                info!(
                    receipt = %receipt.id,
                    amount,
                    note_count = receipt.notes.note_count(),
                    "withdrawal dispensed"
                );
                Ok(receipt)
            }
            Err(err) => {
                warn!(amount, error = %err, "withdrawal rejected");
                Err(err.into())
            }
        }
    }

    // =========================================================================
    // Read-Only Queries
    // =========================================================================

    /// Notes currently stored for a denomination.
    pub fn held(&self, denomination: Denomination) -> CoreResult<u64> {
        self.with_ledger(|ledger| ledger.held(denomination))
    }

    /// Maximum notes storable for a denomination.
    pub fn capacity(&self, denomination: Denomination) -> CoreResult<u64> {
        self.with_ledger(|ledger| ledger.capacity(denomination))
    }

    /// Headroom left in a denomination's cassette.
    pub fn remaining_capacity(&self, denomination: Denomination) -> CoreResult<u64> {
        self.with_ledger(|ledger| ledger.remaining_capacity(denomination))
    }

    /// Total monetary value held.
    pub fn total_value(&self) -> u64 {
        self.with_ledger(|ledger| ledger.total_value())
    }

    /// Snapshot of every slot for balance displays.
    pub fn holdings(&self) -> Vec<HoldingsRow> {
        self.with_ledger(|ledger| ledger.holdings())
    }

    /// The configured denomination set in ascending face-value order.
    pub fn denominations(&self) -> Vec<Denomination> {
        self.with_ledger(|ledger| ledger.denominations())
    }
}

/// A machine with the reference cassettes in every slot.
impl Default for CashMachine {
    fn default() -> Self {
        CashMachine::uniform(DEFAULT_SLOT_CAPACITY)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
