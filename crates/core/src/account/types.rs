//! Payable/receivable account domain types.

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use finlab_shared::types::AccountId;

use crate::audit::AuditTrail;

/// Direction of an account: money the clinic owes or money owed to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountKind {
    /// Accounts payable (supplier invoices, rent, payroll adjuncts).
    Payable,
    /// Accounts receivable (insurers, corporate agreements, patients).
    Receivable,
}

/// Aggregate settlement status of an account.
///
/// Always derived from the payment list and dates; never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountStatus {
    /// Nothing paid yet, not past due.
    #[serde(rename = "aberto")]
    Open,
    /// Partially paid, not past due.
    #[serde(rename = "parcial")]
    Partial,
    /// Fully settled (over-payment also lands here).
    #[serde(rename = "pago")]
    Paid,
    /// Past due with an outstanding balance. Replaces Open/Partial.
    #[serde(rename = "vencido")]
    Overdue,
    /// Manually cancelled. Overrides everything else.
    #[serde(rename = "cancelado")]
    Cancelled,
}

impl AccountStatus {
    /// Returns the string representation of the status.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "aberto",
            Self::Partial => "parcial",
            Self::Paid => "pago",
            Self::Overdue => "vencido",
            Self::Cancelled => "cancelado",
        }
    }

    /// Parses a status from a string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "aberto" => Some(Self::Open),
            "parcial" => Some(Self::Partial),
            "pago" => Some(Self::Paid),
            "vencido" => Some(Self::Overdue),
            "cancelado" => Some(Self::Cancelled),
            _ => None,
        }
    }
}

impl fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A payment recorded against an account.
///
/// Lines are append-only and immutable once recorded. There is no line-level
/// reversal here; correction happens at the aggregate level (cancellation).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountPayment {
    /// Date the payment was made.
    pub date: NaiveDate,
    /// Amount paid.
    pub amount: Decimal,
    /// Payment method as free text (e.g., "pix", "boleto").
    pub method: String,
    /// Operator who recorded the payment.
    pub actor: String,
    /// Optional free-text note.
    pub note: Option<String>,
}

/// Input for recording a payment against an account.
#[derive(Debug, Clone)]
pub struct AccountPaymentInput {
    /// Date the payment was made.
    pub date: NaiveDate,
    /// Amount paid.
    pub amount: Decimal,
    /// Payment method as free text.
    pub method: String,
    /// Optional free-text note.
    pub note: Option<String>,
}

/// Derived account totals.
///
/// `amount_due` goes negative on over-payment; the status clamps to Paid but
/// the remainder stays visible for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountTotals {
    /// Sum of all recorded payments.
    pub amount_paid: Decimal,
    /// Original amount minus payments (may be negative).
    pub amount_due: Decimal,
}

/// A payable or receivable account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayableReceivableAccount {
    /// Unique identifier.
    pub id: AccountId,
    /// Human-facing code (e.g., `CP-2025-0042`).
    pub code: String,
    /// Payable or receivable.
    pub kind: AccountKind,
    /// Description of what the account is for.
    pub description: String,
    /// Counterpart display name.
    pub counterpart_name: String,
    /// Counterpart tax id (free text, unvalidated).
    pub counterpart_tax_id: String,
    /// Amount owed at creation. Fixed for the life of the account.
    pub original_amount: Decimal,
    /// Recorded payments, oldest first. Append-only; lines are immutable
    /// once recorded, so no public mutation exists.
    pub(crate) payments: Vec<AccountPayment>,
    /// Due date.
    pub due_date: NaiveDate,
    /// Manual cancellation override.
    pub cancelled: bool,
    /// Append-only audit history.
    pub history: AuditTrail,
}

impl PayableReceivableAccount {
    /// Creates a freshly registered account with no payments.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn register(
        id: AccountId,
        code: impl Into<String>,
        kind: AccountKind,
        description: impl Into<String>,
        counterpart_name: impl Into<String>,
        counterpart_tax_id: impl Into<String>,
        original_amount: Decimal,
        due_date: NaiveDate,
    ) -> Self {
        Self {
            id,
            code: code.into(),
            kind,
            description: description.into(),
            counterpart_name: counterpart_name.into(),
            counterpart_tax_id: counterpart_tax_id.into(),
            original_amount,
            payments: Vec::new(),
            due_date,
            cancelled: false,
            history: AuditTrail::new(),
        }
    }

    /// Returns the recorded payments, oldest first.
    #[must_use]
    pub fn payments(&self) -> &[AccountPayment] {
        &self.payments
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip() {
        for status in [
            AccountStatus::Open,
            AccountStatus::Partial,
            AccountStatus::Paid,
            AccountStatus::Overdue,
            AccountStatus::Cancelled,
        ] {
            assert_eq!(AccountStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(AccountStatus::parse("VENCIDO"), Some(AccountStatus::Overdue));
        assert_eq!(AccountStatus::parse("pendente"), None);
    }

    #[test]
    fn test_status_display() {
        assert_eq!(AccountStatus::Overdue.to_string(), "vencido");
        assert_eq!(AccountStatus::Paid.to_string(), "pago");
    }
}
