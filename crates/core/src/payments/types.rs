//! Visit payment ledger domain types.

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Sequential identifier of a payment entry, monotonic per ledger.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct EntryId(pub i64);

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Status of a payment entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryStatus {
    /// Counts toward the paid total.
    #[serde(rename = "normal")]
    Normal,
    /// Reversed; kept in the list but excluded from totals. Terminal.
    #[serde(rename = "estornado")]
    Reversed,
}

impl EntryStatus {
    /// Returns the string representation of the status.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Reversed => "estornado",
        }
    }
}

impl fmt::Display for EntryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How a visit payment was made, with the method-specific fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "forma", rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Cash.
    #[serde(rename = "dinheiro")]
    Cash,
    /// Credit card.
    #[serde(rename = "credito")]
    CreditCard {
        /// Card operator (e.g., "Visa", "Cielo").
        operator: String,
    },
    /// Debit card.
    #[serde(rename = "debito")]
    DebitCard {
        /// Card operator.
        operator: String,
    },
    /// Check, with its bank coordinates.
    #[serde(rename = "cheque")]
    Check {
        /// Who wrote the check.
        drawer: String,
        /// Bank name or code.
        bank: String,
        /// Branch number.
        branch: String,
        /// Account number.
        account: String,
        /// Check number.
        number: String,
        /// Expected clearing date, if known.
        clearing_date: Option<NaiveDate>,
    },
    /// Discount granted instead of money changing hands.
    #[serde(rename = "desconto")]
    Discount {
        /// Why the discount was granted.
        reason: String,
    },
}

impl PaymentMethod {
    /// Returns the method label.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cash => "dinheiro",
            Self::CreditCard { .. } => "credito",
            Self::DebitCard { .. } => "debito",
            Self::Check { .. } => "cheque",
            Self::Discount { .. } => "desconto",
        }
    }

    /// Returns the first required field left blank, if any.
    #[must_use]
    pub fn missing_field(&self) -> Option<&'static str> {
        fn blank(s: &str) -> bool {
            s.trim().is_empty()
        }

        match self {
            Self::Cash => None,
            Self::CreditCard { operator } | Self::DebitCard { operator } => {
                blank(operator).then_some("operator")
            }
            Self::Check {
                drawer,
                bank,
                branch,
                account,
                number,
                clearing_date: _,
            } => {
                if blank(drawer) {
                    Some("drawer")
                } else if blank(bank) {
                    Some("bank")
                } else if blank(branch) {
                    Some("branch")
                } else if blank(account) {
                    Some("account")
                } else if blank(number) {
                    Some("number")
                } else {
                    None
                }
            }
            Self::Discount { reason } => blank(reason).then_some("reason"),
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A payment entry in a visit ledger.
///
/// Entries are never removed. A reversed entry stays in place so totals at
/// any past point in time remain reconstructible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentEntry {
    /// Sequential id, assigned by the ledger.
    pub id: EntryId,
    /// Date the payment was taken.
    pub date: NaiveDate,
    /// Gross amount.
    pub amount: Decimal,
    /// Payment method with its specific fields.
    pub method: PaymentMethod,
    /// Secondary discount applied to this entry, independent of the
    /// Discount payment method.
    pub discount: Decimal,
    /// Optional free-text notes.
    pub notes: Option<String>,
    /// Normal or reversed.
    pub status: EntryStatus,
}

impl PaymentEntry {
    /// Returns the net value this entry contributes while Normal.
    #[must_use]
    pub fn net(&self) -> Decimal {
        self.amount - self.discount
    }

    /// Returns true if the entry has been reversed.
    #[must_use]
    pub fn is_reversed(&self) -> bool {
        self.status == EntryStatus::Reversed
    }
}

/// Input for adding or editing a payment entry.
///
/// The entry id and status are never part of the input; the ledger owns
/// both.
#[derive(Debug, Clone)]
pub struct PaymentInput {
    /// Date the payment was taken.
    pub date: NaiveDate,
    /// Gross amount.
    pub amount: Decimal,
    /// Payment method with its specific fields.
    pub method: PaymentMethod,
    /// Secondary discount applied to this entry.
    pub discount: Decimal,
    /// Optional free-text notes.
    pub notes: Option<String>,
}

/// Derived ledger totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerTotals {
    /// The amount the visit owes in total.
    pub total_due: Decimal,
    /// Net sum of the Normal entries.
    pub total_paid: Decimal,
    /// What is still outstanding.
    pub pending: Decimal,
}
