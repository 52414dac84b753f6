//! Payable/receivable accounts.
//!
//! This module implements aggregate status derivation over an append-only
//! payment list: paid/due totals, the Open/Partial/Paid/Overdue/Cancelled
//! status ladder, payment recording, and manual cancellation.
//!
//! # Modules
//!
//! - `types` - Account entity, payment lines, status enum, derived totals
//! - `error` - Account-specific error types
//! - `service` - Pure derivation functions and the mutating operations

pub mod error;
pub mod service;
pub mod types;

#[cfg(test)]
mod service_props;

pub use error::AccountError;
pub use service::AccountService;
pub use types::{
    AccountKind, AccountPayment, AccountPaymentInput, AccountStatus, AccountTotals,
    PayableReceivableAccount,
};
