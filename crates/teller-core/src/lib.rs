//! # teller-core: Pure Cash-Handling Logic for Teller
//!
//! This crate is the **heart** of Teller. It contains the ledger bookkeeping
//! and the exact-change withdrawal engine as pure functions with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Teller Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              Host (UI shell, service, test harness)             │   │
//! │  │    Deposit screen ──► Withdraw screen ──► Balance display       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    teller-machine                               │   │
//! │  │    Locked machine state, capability views, receipts, logs       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ teller-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────────┐  ┌──────────┐  ┌──────────┐  ┌───────────┐  │   │
//! │  │   │ denomination │  │  ledger  │  │ dispense │  │ validation│  │   │
//! │  │   │ Denomination │  │  Ledger  │  │  planner │  │   rules   │  │   │
//! │  │   └──────────────┘  └──────────┘  └──────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO CLOCKS • NO RANDOMNESS • PURE FUNCTIONS          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`denomination`] - The closed set of note face values
//! - [`ledger`] - Capacity-constrained note inventory
//! - [`dispense`] - Exact-change withdrawal planner
//! - [`types`] - Note batches, plans, holdings rows
//! - [`error`] - Domain error types
//! - [`validation`] - Boundary input validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Amounts**: All monetary values are whole note-units (u64), never floats
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//! 5. **Checked-Before-Applied**: No failing operation ever leaves a partial mutation
//!
//! ## Example Usage
//!
//! ```rust
//! use teller_core::{Denomination, DispenseOrder, Ledger};
//!
//! // A machine that can hold ten notes of each of two denominations
//! let mut ledger = Ledger::new([
//!     (Denomination::OneHundred, 10),
//!     (Denomination::FiveHundred, 10),
//! ]);
//!
//! ledger.deposit(Denomination::FiveHundred, 1).unwrap();
//! ledger.deposit(Denomination::OneHundred, 4).unwrap();
//! assert_eq!(ledger.total_value(), 900);
//!
//! // Exact change for 700: one 500 note and two 100 notes
//! let plan = ledger.withdraw(700, DispenseOrder::LargestFirst).unwrap();
//! assert_eq!(plan.total(), 700);
//! assert_eq!(ledger.total_value(), 200);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod denomination;
pub mod dispense;
pub mod error;
pub mod ledger;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use teller_core::Ledger` instead of
// `use teller_core::ledger::Ledger`

pub use denomination::Denomination;
pub use dispense::{plan_withdrawal, DispenseOrder};
pub use error::{CoreError, CoreResult};
pub use ledger::Ledger;
pub use types::{HoldingsRow, NoteBatch, WithdrawalPlan};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Default per-denomination slot capacity for a freshly provisioned machine.
///
/// ## Business Reason
/// Matches the note cassettes installed in the reference hardware: each slot
/// takes 50 notes before the drawer jams. Hosts with different cassettes pass
/// their own capacity table to [`Ledger::new`].
pub const DEFAULT_SLOT_CAPACITY: u64 = 50;
