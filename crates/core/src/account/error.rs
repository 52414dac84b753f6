//! Payable/receivable account error types.

use thiserror::Error;

/// Errors that can occur during account operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AccountError {
    /// Payment amount must be positive.
    #[error("Payment amount must be positive")]
    NonPositiveAmount,

    /// Payment recorded against a cancelled account.
    #[error("Account {code} is cancelled and no longer accepts payments")]
    AccountCancelled {
        /// The account code.
        code: String,
    },

    /// Cancellation of an account that is already cancelled.
    #[error("Account {code} is already cancelled")]
    AlreadyCancelled {
        /// The account code.
        code: String,
    },
}

impl AccountError {
    /// Returns the stable error code for presentation-layer mapping.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NonPositiveAmount => "NON_POSITIVE_AMOUNT",
            Self::AccountCancelled { .. } => "ACCOUNT_CANCELLED",
            Self::AlreadyCancelled { .. } => "ALREADY_CANCELLED",
        }
    }
}
