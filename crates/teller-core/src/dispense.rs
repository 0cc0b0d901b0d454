//! # Dispense Module
//!
//! The exact-change withdrawal engine: given the ledger's current holdings
//! and a requested amount, select a combination of held notes that sums to
//! the amount exactly, or refuse.
//!
//! ## The Problem
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  EXACT CHANGE UNDER SUPPLY LIMITS                                       │
//! │                                                                         │
//! │  Held: 1 × 5000, 4 × 2000          Requested: 8000                     │
//! │                                                                         │
//! │  Greedy (largest note first):                                          │
//! │    take 5000 → remainder 3000 → take 2000 → remainder 1000 → STUCK ❌  │
//! │                                                                         │
//! │  Bounded subset sum:                                                   │
//! │    2000 + 2000 + 2000 + 2000 = 8000 ✓                                  │
//! │                                                                         │
//! │  Each note may be used at most as many times as the machine            │
//! │  actually holds it; the search must respect that bound.                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Algorithm
//! A reachable-sum table is grown from `{0}`. Denominations are processed in
//! the caller's preferred order; each held note of a denomination is one
//! *admission pass* that extends the current table by that note's value,
//! recording which denomination first reached each sum. Passes iterate the
//! table top-down so a sum created in a pass is never extended again within
//! the same pass - that is what bounds each denomination's contribution to
//! the supply actually held. The search stops the moment the requested
//! amount becomes reachable.
//!
//! The plan is then read back by walking the recorded producers down from
//! the requested amount to zero. Cost is pseudo-polynomial:
//! O(total note count × requested amount).

use serde::{Deserialize, Serialize};

use crate::denomination::Denomination;
use crate::error::{CoreError, CoreResult};
use crate::ledger::Ledger;
use crate::types::WithdrawalPlan;
use crate::validation::validate_request_amount;

// =============================================================================
// Dispense Order
// =============================================================================

/// Which end of the denomination range the planner tries first.
///
/// The reachable-sum search returns the *first* feasible combination it
/// finds, so the processing order biases the shape of the plan without ever
/// changing whether an amount is payable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DispenseOrder {
    /// Descending face value: fewer, larger notes. The tray default.
    LargestFirst,
    /// Ascending face value: more, smaller notes. For hosts whose customers
    /// ask for small bills.
    SmallestFirst,
}

/// Machines dispense large notes unless told otherwise.
impl Default for DispenseOrder {
    fn default() -> Self {
        DispenseOrder::LargestFirst
    }
}

// =============================================================================
// Planner
// =============================================================================

/// Computes an exact-change plan against a ledger snapshot, without mutating it.
///
/// ## Behavior
/// - `requested == 0` → [`CoreError::ZeroAmount`]
/// - no exact combination of held notes sums to `requested` →
///   [`CoreError::UnreachableAmount`]
/// - otherwise a plan with `plan.total() == requested` and every count
///   within the held supply
///
/// ## Example
/// ```rust
/// use teller_core::{plan_withdrawal, Denomination, DispenseOrder, Ledger};
///
/// let mut ledger = Ledger::uniform(50);
/// ledger.deposit(Denomination::TwoThousand, 4).unwrap();
/// ledger.deposit(Denomination::FiveThousand, 1).unwrap();
///
/// // 8000 is only payable as 2000 × 4; taking the 5000 note would strand
/// // the search at a remainder of 1000
/// let plan = plan_withdrawal(&ledger, 8000, DispenseOrder::LargestFirst).unwrap();
/// assert_eq!(plan.count(Denomination::TwoThousand), 4);
/// assert_eq!(plan.count(Denomination::FiveThousand), 0);
/// ```
pub fn plan_withdrawal(
    ledger: &Ledger,
    requested: u64,
    order: DispenseOrder,
) -> CoreResult<WithdrawalPlan> {
    validate_request_amount(requested)?;

    // Cheap upper bound; also caps the table allocation below.
    if requested > ledger.total_value() {
        return Err(CoreError::UnreachableAmount { requested });
    }

    let target = requested as usize;
    let mut rows = ledger.holdings();
    if order == DispenseOrder::LargestFirst {
        rows.reverse();
    }

    // reachable[s]: s is payable from the notes admitted so far.
    // producer[s]: the denomination whose admission first reached s.
    let mut reachable = vec![false; target + 1];
    let mut producer: Vec<Option<Denomination>> = vec![None; target + 1];
    reachable[0] = true;

    'search: for row in rows {
        let value = row.denomination.value() as usize;
        if value > target {
            continue;
        }

        for _ in 0..row.held {
            // One admission pass: extend the table by one note of this
            // denomination. Top-down iteration keeps sums created in this
            // pass out of this pass.
            let mut changed = false;
            for sum in (0..=target - value).rev() {
                if reachable[sum] && !reachable[sum + value] {
                    reachable[sum + value] = true;
                    producer[sum + value] = Some(row.denomination);
                    changed = true;
                    if sum + value == target {
                        break 'search;
                    }
                }
            }
            if !changed {
                // A saturated pass stays saturated; further notes of this
                // denomination cannot reach anything new.
                break;
            }
        }
    }

    if !reachable[target] {
        return Err(CoreError::UnreachableAmount { requested });
    }

    // Walk the producer chain back down from the target. Each step strictly
    // decreases the remainder, so this terminates at zero.
    let mut plan = WithdrawalPlan::new();
    let mut remaining = target;
    while remaining > 0 {
        let denomination =
            producer[remaining].expect("every reachable sum above zero records its producer");
        plan.add(denomination, 1);
        remaining -= denomination.value() as usize;
    }

    Ok(plan)
}

// =============================================================================
// Ledger Withdrawal
// =============================================================================

impl Ledger {
    /// Withdraws an exact amount, choosing notes per the given order.
    ///
    /// Planning and commit run against one consistent view of the holdings:
    /// the plan is computed from `self` and applied to `self` with no
    /// intervening mutation, so the supply bounds verified by the planner
    /// still hold at apply time. Hosts that share a ledger across threads
    /// must keep this whole call inside one critical section.
    ///
    /// The returned plan is the first combination reachable under `order`,
    /// not necessarily the one with the fewest notes.
    ///
    /// ## Behavior
    /// - on success the ledger shrinks by exactly `requested` and the plan
    ///   is returned for the host's receipt
    /// - on failure ([`CoreError::ZeroAmount`],
    ///   [`CoreError::UnreachableAmount`]) the ledger is untouched
    pub fn withdraw(&mut self, requested: u64, order: DispenseOrder) -> CoreResult<WithdrawalPlan> {
        let plan = plan_withdrawal(self, requested, order)?;
        self.withdraw_apply(&plan);
        Ok(plan)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::NoteBatch;

    fn ledger_with(entries: &[(Denomination, u64, u64)]) -> Ledger {
        // (denomination, capacity, held)
        let mut ledger = Ledger::new(entries.iter().map(|(d, cap, _)| (*d, *cap)));
        for (denomination, _, held) in entries {
            if *held > 0 {
                ledger.deposit(*denomination, *held).unwrap();
            }
        }
        ledger
    }

    #[test]
    fn test_largest_first_takes_big_notes() {
        let mut ledger = ledger_with(&[
            (Denomination::OneHundred, 10, 4),
            (Denomination::FiveHundred, 10, 1),
        ]);
        assert_eq!(ledger.total_value(), 900);

        let plan = ledger.withdraw(700, DispenseOrder::LargestFirst).unwrap();

        assert_eq!(plan.count(Denomination::FiveHundred), 1);
        assert_eq!(plan.count(Denomination::OneHundred), 2);
        assert_eq!(plan.total(), 700);
        assert_eq!(ledger.held(Denomination::OneHundred).unwrap(), 2);
        assert_eq!(ledger.held(Denomination::FiveHundred).unwrap(), 0);
        assert_eq!(ledger.total_value(), 200);
    }

    #[test]
    fn test_unreachable_amount_leaves_ledger_untouched() {
        let mut ledger = ledger_with(&[
            (Denomination::OneHundred, 10, 4),
            (Denomination::FiveHundred, 10, 1),
        ]);
        let before = ledger.clone();

        // 900 held, but 800 cannot be assembled from 4×100 + 1×500
        let err = ledger.withdraw(800, DispenseOrder::LargestFirst).unwrap_err();
        assert!(matches!(err, CoreError::UnreachableAmount { requested: 800 }));
        assert_eq!(ledger, before);

        let err = ledger.withdraw(800, DispenseOrder::SmallestFirst).unwrap_err();
        assert!(matches!(err, CoreError::UnreachableAmount { requested: 800 }));
        assert_eq!(ledger, before);
    }

    #[test]
    fn test_single_denomination_machine_pays_in_that_note() {
        let mut ledger = Ledger::new([(Denomination::Ten, 1000)]);
        let batch: NoteBatch = [(Denomination::Ten, 5)].into_iter().collect();
        ledger.deposit_batch(&batch).unwrap();

        let plan = ledger.withdraw(50, DispenseOrder::LargestFirst).unwrap();

        assert_eq!(plan.count(Denomination::Ten), 5);
        assert_eq!(ledger.total_value(), 0);
        assert_eq!(ledger.held(Denomination::Ten).unwrap(), 0);
    }

    #[test]
    fn test_insufficient_supply_fails_for_both_orders() {
        // 4 × 500 held: 8000 is simply more money than the machine has
        let ledger = ledger_with(&[
            (Denomination::TwoThousand, 4, 0),
            (Denomination::FiveHundred, 4, 4),
        ]);

        for order in [DispenseOrder::LargestFirst, DispenseOrder::SmallestFirst] {
            let mut machine = ledger.clone();
            let err = machine.withdraw(8000, order).unwrap_err();
            assert!(matches!(err, CoreError::UnreachableAmount { requested: 8000 }));
            assert_eq!(machine, ledger);
        }
    }

    #[test]
    fn test_planner_backtracks_where_greedy_would_strand() {
        // 8000 from {5000 × 1, 2000 × 4}: taking the 5000 note leaves a
        // remainder of 1000 that nothing can pay
        let mut ledger = ledger_with(&[
            (Denomination::FiveThousand, 10, 1),
            (Denomination::TwoThousand, 10, 4),
        ]);

        let plan = ledger.withdraw(8000, DispenseOrder::LargestFirst).unwrap();

        assert_eq!(plan.total(), 8000);
        assert_eq!(plan.count(Denomination::TwoThousand), 4);
        assert_eq!(plan.count(Denomination::FiveThousand), 0);
        assert_eq!(ledger.held(Denomination::FiveThousand).unwrap(), 1);
    }

    #[test]
    fn test_order_biases_note_size_not_feasibility() {
        let entries = &[
            (Denomination::Ten, 50, 10),
            (Denomination::OneHundred, 50, 1),
        ];

        let mut large = ledger_with(entries);
        let plan = large.withdraw(100, DispenseOrder::LargestFirst).unwrap();
        assert_eq!(plan.count(Denomination::OneHundred), 1);
        assert_eq!(plan.count(Denomination::Ten), 0);

        let mut small = ledger_with(entries);
        let plan = small.withdraw(100, DispenseOrder::SmallestFirst).unwrap();
        assert_eq!(plan.count(Denomination::Ten), 10);
        assert_eq!(plan.count(Denomination::OneHundred), 0);

        // Both orders removed the same value
        assert_eq!(large.total_value(), small.total_value());
    }

    #[test]
    fn test_zero_amount_always_fails() {
        let mut empty = Ledger::new([]);
        assert!(matches!(
            empty.withdraw(0, DispenseOrder::LargestFirst),
            Err(CoreError::ZeroAmount)
        ));

        let mut filled = ledger_with(&[(Denomination::OneHundred, 50, 10)]);
        let before = filled.clone();
        for order in [DispenseOrder::LargestFirst, DispenseOrder::SmallestFirst] {
            assert!(matches!(filled.withdraw(0, order), Err(CoreError::ZeroAmount)));
        }
        assert_eq!(filled, before);
    }

    #[test]
    fn test_empty_machine_refuses_any_positive_amount() {
        let mut ledger = Ledger::uniform(100);

        for amount in [1u64, 10, 200, 400, 999] {
            let err = ledger.withdraw(amount, DispenseOrder::LargestFirst).unwrap_err();
            assert!(matches!(err, CoreError::UnreachableAmount { .. }));
        }
        assert_eq!(ledger.total_value(), 0);
    }

    #[test]
    fn test_drain_by_repeated_withdrawals() {
        let mut ledger = Ledger::new([(Denomination::OneThousand, 100)]);
        ledger.deposit(Denomination::OneThousand, 100).unwrap();

        for round in 1..=10u64 {
            let plan = ledger.withdraw(10_000, DispenseOrder::LargestFirst).unwrap();
            assert_eq!(plan.count(Denomination::OneThousand), 10);
            assert_eq!(ledger.held(Denomination::OneThousand).unwrap(), 100 - 10 * round);
        }

        assert_eq!(ledger.total_value(), 0);
        assert!(matches!(
            ledger.withdraw(10_000, DispenseOrder::LargestFirst),
            Err(CoreError::UnreachableAmount { .. })
        ));
    }

    #[test]
    fn test_plan_is_exact_and_within_supply_for_many_amounts() {
        let ledger = ledger_with(&[
            (Denomination::Ten, 50, 7),
            (Denomination::Fifty, 50, 3),
            (Denomination::OneHundred, 50, 4),
            (Denomination::FiveHundred, 50, 2),
        ]);

        for amount in (10..=ledger.total_value()).step_by(10) {
            for order in [DispenseOrder::LargestFirst, DispenseOrder::SmallestFirst] {
                let mut machine = ledger.clone();
                match machine.withdraw(amount, order) {
                    Ok(plan) => {
                        assert_eq!(plan.total(), amount);
                        for (denomination, count) in plan.iter() {
                            assert!(count <= ledger.held(denomination).unwrap());
                        }
                        assert_eq!(machine.total_value(), ledger.total_value() - amount);
                    }
                    Err(CoreError::UnreachableAmount { requested }) => {
                        assert_eq!(requested, amount);
                        assert_eq!(machine, ledger);
                    }
                    Err(other) => panic!("unexpected error: {other}"),
                }
            }
        }
    }

    #[test]
    fn test_planner_does_not_mutate() {
        let ledger = ledger_with(&[(Denomination::OneHundred, 50, 5)]);
        let before = ledger.clone();

        let plan = plan_withdrawal(&ledger, 300, DispenseOrder::LargestFirst).unwrap();
        assert_eq!(plan.total(), 300);
        assert_eq!(ledger, before);
    }

    #[test]
    fn test_default_order_is_largest_first() {
        assert_eq!(DispenseOrder::default(), DispenseOrder::LargestFirst);
    }

    #[test]
    fn test_order_serializes_as_snake_case() {
        assert_eq!(
            serde_json::to_string(&DispenseOrder::SmallestFirst).unwrap(),
            "\"smallest_first\""
        );
    }
}
