//! # Capability Views
//!
//! Narrow views over one shared machine, so collaborators only see the
//! operations they are entitled to.
//!
//! ## Capability Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Capability Views                                   │
//! │                                                                         │
//! │                      ┌──────────────┐                                   │
//! │                      │   CashInfo   │   balance screens, audits         │
//! │                      │  (read only) │                                   │
//! │                      └──────┬───────┘                                   │
//! │                 ┌───────────┴───────────┐                               │
//! │         ┌───────┴───────┐       ┌───────┴────────┐                      │
//! │         │  CashDeposit  │       │ CashWithdrawal │                      │
//! │         │ (intake slot) │       │ (dispense tray)│                      │
//! │         └───────────────┘       └────────────────┘                      │
//! │                                                                         │
//! │  All three are implemented by ONE CashMachine; hosts pass a clone of    │
//! │  the machine as the narrower trait instead of constructing separate    │
//! │  objects per capability.                                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use teller_machine::{CashDeposit, CashMachine, Denomination};
//!
//! // The intake module only ever sees the deposit capability
//! fn intake(slot: &dyn CashDeposit) {
//!     let _ = slot.deposit(Denomination::OneHundred, 3);
//! }
//!
//! let machine = CashMachine::uniform(50);
//! intake(&machine);
//! assert_eq!(machine.total_value(), 300);
//! ```

use teller_core::{CoreResult, Denomination, DispenseOrder, HoldingsRow, NoteBatch};

use crate::error::MachineError;
use crate::machine::CashMachine;
use crate::receipt::{DepositReceipt, WithdrawalReceipt};

// =============================================================================
// Traits
// =============================================================================

/// Read-only view of a machine's holdings.
pub trait CashInfo {
    /// Notes currently stored for a denomination.
    fn held(&self, denomination: Denomination) -> CoreResult<u64>;

    /// Maximum notes storable for a denomination.
    fn capacity(&self, denomination: Denomination) -> CoreResult<u64>;

    /// Headroom left in a denomination's cassette.
    fn remaining_capacity(&self, denomination: Denomination) -> CoreResult<u64>;

    /// Total monetary value held.
    fn total_value(&self) -> u64;

    /// Snapshot of every slot, smallest note first.
    fn holdings(&self) -> Vec<HoldingsRow>;

    /// The configured denomination set in ascending face-value order.
    fn denominations(&self) -> Vec<Denomination>;
}

/// Deposit capability: the intake slot's view.
pub trait CashDeposit: CashInfo {
    /// Stores notes of one denomination.
    fn deposit(
        &self,
        denomination: Denomination,
        count: u64,
    ) -> Result<DepositReceipt, MachineError>;

    /// Stores a whole batch of notes, all-or-nothing.
    fn deposit_batch(&self, notes: NoteBatch) -> Result<DepositReceipt, MachineError>;
}

/// Withdrawal capability: the dispense tray's view.
pub trait CashWithdrawal: CashInfo {
    /// Withdraws an exact amount, choosing notes per the given order.
    fn withdraw(
        &self,
        amount: u64,
        order: DispenseOrder,
    ) -> Result<WithdrawalReceipt, MachineError>;
}

// =============================================================================
// Implementations for CashMachine
// =============================================================================

impl CashInfo for CashMachine {
    fn held(&self, denomination: Denomination) -> CoreResult<u64> {
        CashMachine::held(self, denomination)
    }

    fn capacity(&self, denomination: Denomination) -> CoreResult<u64> {
        CashMachine::capacity(self, denomination)
    }

    fn remaining_capacity(&self, denomination: Denomination) -> CoreResult<u64> {
        CashMachine::remaining_capacity(self, denomination)
    }

    fn total_value(&self) -> u64 {
        CashMachine::total_value(self)
    }

    fn holdings(&self) -> Vec<HoldingsRow> {
        CashMachine::holdings(self)
    }

    fn denominations(&self) -> Vec<Denomination> {
        CashMachine::denominations(self)
    }
}

impl CashDeposit for CashMachine {
    fn deposit(
        &self,
        denomination: Denomination,
        count: u64,
    ) -> Result<DepositReceipt, MachineError> {
        CashMachine::deposit(self, denomination, count)
    }

    fn deposit_batch(&self, notes: NoteBatch) -> Result<DepositReceipt, MachineError> {
        CashMachine::deposit_batch(self, notes)
    }
}

impl CashWithdrawal for CashMachine {
    fn withdraw(
        &self,
        amount: u64,
        order: DispenseOrder,
    ) -> Result<WithdrawalReceipt, MachineError> {
        CashMachine::withdraw(self, amount, order)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
