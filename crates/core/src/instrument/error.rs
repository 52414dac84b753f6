//! Check lifecycle error types.

use thiserror::Error;

/// Errors that can occur during check lifecycle operations.
///
/// Every failure leaves the check exactly as it was before the call.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InstrumentError {
    /// Mutation attempted on a check in a terminal status.
    #[error("Check is {status} and can no longer be modified")]
    ImmutableState {
        /// The terminal status the check is in.
        status: String,
    },

    /// A status change not permitted from the current status.
    #[error("Invalid status transition from {from} to {to}")]
    InvalidTransition {
        /// The current status.
        from: String,
        /// The attempted target status.
        to: String,
    },

    /// An action outside the permitted set for the current status.
    #[error("Action {action} is not permitted while check is {status}")]
    ActionNotPermitted {
        /// The attempted action.
        action: String,
        /// The current status.
        status: String,
    },

    /// Check amount must be positive.
    #[error("Check amount must be positive")]
    NonPositiveAmount,
}

impl InstrumentError {
    /// Returns the stable error code for presentation-layer mapping.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::ImmutableState { .. } => "IMMUTABLE_STATE",
            Self::InvalidTransition { .. } => "INVALID_TRANSITION",
            Self::ActionNotPermitted { .. } => "ACTION_NOT_PERMITTED",
            Self::NonPositiveAmount => "NON_POSITIVE_AMOUNT",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_immutable_state_error() {
        let err = InstrumentError::ImmutableState {
            status: "compensado".to_string(),
        };
        assert_eq!(err.error_code(), "IMMUTABLE_STATE");
        assert!(err.to_string().contains("compensado"));
    }

    #[test]
    fn test_invalid_transition_error() {
        let err = InstrumentError::InvalidTransition {
            from: "devolvido".to_string(),
            to: "compensado".to_string(),
        };
        assert_eq!(err.error_code(), "INVALID_TRANSITION");
        assert!(err.to_string().contains("devolvido"));
        assert!(err.to_string().contains("compensado"));
    }

    #[test]
    fn test_action_not_permitted_error() {
        let err = InstrumentError::ActionNotPermitted {
            action: "editar".to_string(),
            status: "devolvido".to_string(),
        };
        assert_eq!(err.error_code(), "ACTION_NOT_PERMITTED");
    }

    #[test]
    fn test_non_positive_amount_error() {
        assert_eq!(
            InstrumentError::NonPositiveAmount.error_code(),
            "NON_POSITIVE_AMOUNT"
        );
    }
}
