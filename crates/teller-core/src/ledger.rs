//! # Ledger Module
//!
//! The authoritative record of how many notes of each denomination a machine
//! holds and the maximum each cassette can take.
//!
//! ## Invariants
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Ledger Invariants                                 │
//! │                                                                         │
//! │  For every configured denomination d:                                   │
//! │      0 ≤ held(d) ≤ capacity(d)        after EVERY operation            │
//! │                                                                         │
//! │  total_value() = Σ held(d) × value(d)  recomputed on demand,           │
//! │                                        never cached, never drifts      │
//! │                                                                         │
//! │  A denomination not configured at construction time is permanently     │
//! │  unsupported: it can be neither deposited nor withdrawn.               │
//! │                                                                         │
//! │  NO failing operation leaves a partial mutation behind.                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Withdrawals are driven by the planner in [`crate::dispense`]; the ledger
//! itself only knows how to validate deposits and apply an already-verified
//! plan.

use std::collections::BTreeMap;

use crate::denomination::Denomination;
use crate::error::{CoreError, CoreResult};
use crate::types::{HoldingsRow, NoteBatch, WithdrawalPlan};
use crate::validation::{validate_batch, validate_note_count};

// =============================================================================
// Slot
// =============================================================================

/// One denomination's cassette: current fill level and physical limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Slot {
    held: u64,
    capacity: u64,
}

// =============================================================================
// Ledger
// =============================================================================

/// Capacity-constrained note inventory.
///
/// Created once with a fixed set of `(denomination, capacity)` pairs, all
/// fill levels starting at zero; mutated in place by every successful
/// deposit or withdrawal for the machine's whole operational lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ledger {
    slots: BTreeMap<Denomination, Slot>,
}

impl Ledger {
    /// Creates a ledger from a `(denomination, capacity)` table.
    ///
    /// Every configured denomination starts empty. An empty table is legal:
    /// the resulting machine refuses every deposit and withdrawal. A zero
    /// capacity is legal too: the denomination is configured but unfillable.
    ///
    /// ## Example
    /// ```rust
    /// use teller_core::{Denomination, Ledger};
    ///
    /// let ledger = Ledger::new([(Denomination::OneHundred, 10)]);
    /// assert_eq!(ledger.held(Denomination::OneHundred).unwrap(), 0);
    /// assert_eq!(ledger.capacity(Denomination::OneHundred).unwrap(), 10);
    /// ```
    pub fn new<I>(capacities: I) -> Self
    where
        I: IntoIterator<Item = (Denomination, u64)>,
    {
        let slots = capacities
            .into_iter()
            .map(|(denomination, capacity)| (denomination, Slot { held: 0, capacity }))
            .collect();

        Ledger { slots }
    }

    /// Creates a ledger holding every denomination at the same capacity.
    ///
    /// This is how field machines ship: identical cassettes in every slot.
    pub fn uniform(capacity: u64) -> Self {
        Ledger::new(Denomination::ALL.map(|denomination| (denomination, capacity)))
    }

    fn slot(&self, denomination: Denomination) -> CoreResult<&Slot> {
        self.slots
            .get(&denomination)
            .ok_or(CoreError::UnknownDenomination {
                value: denomination.value(),
            })
    }

    // =========================================================================
    // Read-Only Queries
    // =========================================================================

    /// Notes currently stored for a denomination.
    pub fn held(&self, denomination: Denomination) -> CoreResult<u64> {
        Ok(self.slot(denomination)?.held)
    }

    /// Maximum notes storable for a denomination.
    pub fn capacity(&self, denomination: Denomination) -> CoreResult<u64> {
        Ok(self.slot(denomination)?.capacity)
    }

    /// Headroom left in a denomination's cassette: `capacity - held`.
    pub fn remaining_capacity(&self, denomination: Denomination) -> CoreResult<u64> {
        let slot = self.slot(denomination)?;
        Ok(slot.capacity - slot.held)
    }

    /// Total monetary value held: `Σ held(d) × value(d)`.
    ///
    /// Recomputed from the authoritative counts on every call so it can
    /// never drift from them.
    pub fn total_value(&self) -> u64 {
        self.slots
            .iter()
            .map(|(denomination, slot)| denomination.value() * slot.held)
            .sum()
    }

    /// The configured denomination set in ascending face-value order.
    pub fn denominations(&self) -> Vec<Denomination> {
        self.slots.keys().copied().collect()
    }

    /// Snapshot of every slot for balance displays, smallest note first.
    pub fn holdings(&self) -> Vec<HoldingsRow> {
        self.slots
            .iter()
            .map(|(denomination, slot)| HoldingsRow {
                denomination: *denomination,
                held: slot.held,
                capacity: slot.capacity,
            })
            .collect()
    }

    // =========================================================================
    // Deposits
    // =========================================================================

    /// Stores `count` notes of one denomination.
    ///
    /// ## Behavior
    /// - `count == 0` → [`CoreError::InvalidCount`], ledger unchanged
    /// - unconfigured denomination → [`CoreError::UnknownDenomination`]
    /// - `count` over the remaining headroom → [`CoreError::CapacityExceeded`],
    ///   ledger unchanged
    /// - otherwise `held(denomination)` grows by `count`
    pub fn deposit(&mut self, denomination: Denomination, count: u64) -> CoreResult<()> {
        validate_note_count(denomination, count)?;

        let available = self.remaining_capacity(denomination)?;
        if count > available {
            return Err(CoreError::CapacityExceeded {
                denomination,
                requested: count,
                available,
            });
        }

        // Membership and headroom verified above; the entry must exist.
        if let Some(slot) = self.slots.get_mut(&denomination) {
            slot.held += count;
        }

        Ok(())
    }

    /// Stores a whole batch of notes, all-or-nothing.
    ///
    /// Every entry's headroom is checked against the *current* ledger state
    /// before any entry is applied: if one entry would overflow its cassette
    /// the whole batch is refused and the ledger stays untouched. Partial
    /// application would leave the ledger inconsistent with the reported
    /// failure, so the check and apply phases are strictly separated.
    ///
    /// ## Behavior
    /// - empty batch → [`CoreError::EmptyBatch`]
    /// - any zero-count entry → [`CoreError::InvalidCount`]
    /// - any entry over headroom → [`CoreError::CapacityExceeded`]
    /// - any unconfigured denomination → [`CoreError::UnknownDenomination`]
    pub fn deposit_batch(&mut self, batch: &NoteBatch) -> CoreResult<()> {
        validate_batch(batch)?;

        for (denomination, count) in batch.iter() {
            let available = self.remaining_capacity(denomination)?;
            if count > available {
                return Err(CoreError::CapacityExceeded {
                    denomination,
                    requested: count,
                    available,
                });
            }
        }

        for (denomination, count) in batch.iter() {
            // Every entry passed the membership and headroom checks above.
            if let Some(slot) = self.slots.get_mut(&denomination) {
                slot.held += count;
            }
        }

        Ok(())
    }

    // =========================================================================
    // Withdrawal Commit
    // =========================================================================

    /// Removes the notes of an already-verified plan.
    ///
    /// The planner guarantees `plan(d) ≤ held(d)` against this exact ledger
    /// state, with no mutation in between; this method does not re-validate.
    /// Crate-private so that only the dispenser's commit step can call it.
    pub(crate) fn withdraw_apply(&mut self, plan: &WithdrawalPlan) {
        for (denomination, count) in plan.iter() {
            if let Some(slot) = self.slots.get_mut(&denomination) {
                slot.held -= count;
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
