//! Per-visit payment ledger.
//!
//! This module implements the ordered payment collection for one visit:
//! monotonic entry ids, method-specific validation, hard over-payment
//! rejection, reversal without deletion, and derived running totals.
//!
//! # Modules
//!
//! - `types` - Entries, methods, statuses, inputs, derived totals
//! - `error` - Ledger-specific error types
//! - `ledger` - The `PaymentLedger` itself

pub mod error;
pub mod ledger;
pub mod types;

#[cfg(test)]
mod ledger_props;

pub use error::LedgerError;
pub use ledger::PaymentLedger;
pub use types::{EntryId, EntryStatus, LedgerTotals, PaymentEntry, PaymentInput, PaymentMethod};
