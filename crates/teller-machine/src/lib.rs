//! # teller-machine: Machine State Layer for Teller
//!
//! This crate turns the pure logic of `teller-core` into an operable cash
//! machine: one exclusively-owned ledger behind one lock, capability-scoped
//! views for collaborators, receipts for the audit trail, and structured
//! logs for the operator.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Teller Data Flow                                │
//! │                                                                         │
//! │  Host action (deposit screen, withdraw screen, balance display)        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  teller-machine (THIS CRATE)                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │  CashMachine  │    │  Capability   │    │   Receipts   │  │   │
//! │  │   │ (machine.rs)  │    │    views      │    │ (receipt.rs) │  │   │
//! │  │   │               │    │  (access.rs)  │    │              │  │   │
//! │  │   │ Mutex<Ledger> │◄───│ CashInfo      │    │ uuid + time  │  │   │
//! │  │   │ one critical  │    │ CashDeposit   │    │ per success  │  │   │
//! │  │   │ section per op│    │ CashWithdrawal│    │              │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  teller-core: Ledger bookkeeping + exact-change planner                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`machine`] - The locked machine state and its operations
//! - [`access`] - Capability-scoped views (read-only / deposit / withdraw)
//! - [`receipt`] - Audit records for successful operations
//! - [`error`] - The host-facing error shape

// =============================================================================
// Module Declarations
// =============================================================================

pub mod access;
pub mod error;
pub mod machine;
pub mod receipt;

// =============================================================================
// Re-exports
// =============================================================================

pub use access::{CashDeposit, CashInfo, CashWithdrawal};
pub use error::{ErrorCode, MachineError};
pub use machine::CashMachine;
pub use receipt::{DepositReceipt, WithdrawalReceipt};

// Core re-exports so hosts can depend on this crate alone
pub use teller_core::{Denomination, DispenseOrder, HoldingsRow, NoteBatch, WithdrawalPlan};
