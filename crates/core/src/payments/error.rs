//! Visit payment ledger error types.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::payments::types::EntryId;

/// Errors that can occur during ledger operations.
///
/// Every failure leaves the ledger exactly as it was before the call.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LedgerError {
    /// Payment amount must be positive.
    #[error("Payment amount must be positive")]
    NonPositiveAmount,

    /// Discount cannot be negative.
    #[error("Discount cannot be negative")]
    NegativeDiscount,

    /// Discount cannot exceed the payment amount.
    #[error("Discount cannot exceed the payment amount")]
    DiscountExceedsAmount,

    /// A required method-specific field was left blank.
    #[error("Payment method {method} requires field {field}")]
    MissingMethodField {
        /// The payment method label.
        method: String,
        /// The blank field.
        field: String,
    },

    /// The entry would push the outstanding balance below zero.
    #[error("Payment of {attempted} exceeds the pending balance of {pending}")]
    Overpayment {
        /// Net amount the caller tried to record.
        attempted: Decimal,
        /// Outstanding balance at the time of the call.
        pending: Decimal,
    },

    /// Edit attempted on a reversed entry.
    #[error("Payment entry {id} was reversed and can no longer be edited")]
    ImmutableEntry {
        /// The reversed entry.
        id: EntryId,
    },

    /// Reversal attempted on an already reversed entry.
    #[error("Payment entry {id} is already reversed")]
    AlreadyReversed {
        /// The reversed entry.
        id: EntryId,
    },

    /// No entry with the given id exists in this ledger.
    #[error("Payment entry {id} not found")]
    EntryNotFound {
        /// The unknown id.
        id: EntryId,
    },
}

impl LedgerError {
    /// Returns the stable error code for presentation-layer mapping.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NonPositiveAmount => "NON_POSITIVE_AMOUNT",
            Self::NegativeDiscount => "NEGATIVE_DISCOUNT",
            Self::DiscountExceedsAmount => "DISCOUNT_EXCEEDS_AMOUNT",
            Self::MissingMethodField { .. } => "MISSING_METHOD_FIELD",
            Self::Overpayment { .. } => "OVERPAYMENT",
            Self::ImmutableEntry { .. } => "IMMUTABLE_ENTRY",
            Self::AlreadyReversed { .. } => "ALREADY_REVERSED",
            Self::EntryNotFound { .. } => "ENTRY_NOT_FOUND",
        }
    }
}
