//! # Domain Types
//!
//! Note batches, withdrawal plans, and holdings snapshots.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   NoteBatch     │   │ WithdrawalPlan  │   │  HoldingsRow    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  denom → count  │   │  a NoteBatch    │   │  denomination   │       │
//! │  │  ordered map    │   │  produced by    │   │  held           │       │
//! │  │  total()        │   │  the dispenser  │   │  capacity       │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A `NoteBatch` is what a customer feeds into the deposit slot and what the
//! dispenser pushes out of the tray; the two directions share one shape.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::denomination::Denomination;

// =============================================================================
// Note Batch
// =============================================================================

/// An ordered denomination → count mapping.
///
/// Backed by a `BTreeMap` so iteration, logging, and receipts list notes in
/// ascending face-value order deterministically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteBatch(BTreeMap<Denomination, u64>);

impl NoteBatch {
    /// Creates an empty batch.
    pub fn new() -> Self {
        NoteBatch(BTreeMap::new())
    }

    /// Adds `count` notes of `denomination` to the batch.
    ///
    /// Adding to a denomination already present accumulates the count.
    pub fn add(&mut self, denomination: Denomination, count: u64) {
        *self.0.entry(denomination).or_insert(0) += count;
    }

    /// Returns the count for a denomination, zero if absent.
    pub fn count(&self, denomination: Denomination) -> u64 {
        self.0.get(&denomination).copied().unwrap_or(0)
    }

    /// Iterates entries in ascending face-value order.
    pub fn iter(&self) -> impl Iterator<Item = (Denomination, u64)> + '_ {
        self.0.iter().map(|(denomination, count)| (*denomination, *count))
    }

    /// Number of distinct denominations in the batch.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Checks whether the batch has no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Total number of physical notes in the batch.
    pub fn note_count(&self) -> u64 {
        self.0.values().sum()
    }

    /// Total monetary value of the batch: `Σ count(d) × value(d)`.
    pub fn total(&self) -> u64 {
        self.iter()
            .map(|(denomination, count)| denomination.value() * count)
            .sum()
    }
}

/// Builds a batch from `(denomination, count)` pairs, accumulating duplicates.
impl FromIterator<(Denomination, u64)> for NoteBatch {
    fn from_iter<I: IntoIterator<Item = (Denomination, u64)>>(iter: I) -> Self {
        let mut batch = NoteBatch::new();
        for (denomination, count) in iter {
            batch.add(denomination, count);
        }
        batch
    }
}

// =============================================================================
// Withdrawal Plan
// =============================================================================

/// The exact combination of notes selected for one withdrawal.
///
/// Produced transiently by the dispenser; on success its [`NoteBatch::total`]
/// equals the requested amount and every count is within the supply held at
/// the moment the plan is applied. It never outlives the withdrawal call that
/// created it.
pub type WithdrawalPlan = NoteBatch;

// =============================================================================
// Holdings Row
// =============================================================================

/// One denomination's line in a holdings snapshot.
///
/// This is the display shape for balance screens: the host reads a `Vec` of
/// these instead of poking at ledger internals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoldingsRow {
    /// The note type.
    pub denomination: Denomination,

    /// Notes currently stored.
    pub held: u64,

    /// Maximum notes storable.
    pub capacity: u64,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_accumulates() {
        let mut batch = NoteBatch::new();
        batch.add(Denomination::OneHundred, 2);
        batch.add(Denomination::OneHundred, 3);

        assert_eq!(batch.count(Denomination::OneHundred), 5);
        assert_eq!(batch.len(), 1);
    }

    #[test]
    fn test_count_defaults_to_zero() {
        let batch = NoteBatch::new();
        assert_eq!(batch.count(Denomination::Ten), 0);
        assert!(batch.is_empty());
    }

    #[test]
    fn test_total_and_note_count() {
        let batch: NoteBatch = [
            (Denomination::FiveHundred, 1),
            (Denomination::OneHundred, 4),
        ]
        .into_iter()
        .collect();

        assert_eq!(batch.total(), 900);
        assert_eq!(batch.note_count(), 5);
    }

    #[test]
    fn test_iteration_is_ascending() {
        let batch: NoteBatch = [
            (Denomination::FiveThousand, 1),
            (Denomination::Ten, 1),
            (Denomination::FiveHundred, 1),
        ]
        .into_iter()
        .collect();

        let order: Vec<Denomination> = batch.iter().map(|(d, _)| d).collect();
        assert_eq!(
            order,
            vec![Denomination::Ten, Denomination::FiveHundred, Denomination::FiveThousand]
        );
    }

    #[test]
    fn test_batch_serializes_as_map() {
        let batch: NoteBatch = [(Denomination::Ten, 5)].into_iter().collect();
        let json = serde_json::to_string(&batch).unwrap();
        assert_eq!(json, "{\"ten\":5}");

        let back: NoteBatch = serde_json::from_str(&json).unwrap();
        assert_eq!(back, batch);
    }
}
