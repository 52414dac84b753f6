//! Check domain types.
//!
//! Two closely related instruments share this module: checks the clinic
//! receives from customers and checks the clinic issues to suppliers. Each
//! has its own closed status set; an unrecognized status string fails at
//! `parse` instead of falling through to a default.

use std::collections::BTreeSet;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use finlab_shared::types::{CheckId, Money};

use crate::audit::AuditTrail;

/// Lifecycle status of a received check.
///
/// `Cleared` is terminal: once a received check clears, nothing about it may
/// change again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReceivedCheckStatus {
    /// Check is on hand, not yet deposited.
    #[serde(rename = "aberto")]
    Open,
    /// Check has been sent to the bank.
    #[serde(rename = "depositado")]
    Deposited,
    /// Check bounced and came back.
    #[serde(rename = "devolvido")]
    Returned,
    /// Bounced check was presented again.
    #[serde(rename = "reapresentado")]
    Represented,
    /// Check cleared (immutable).
    #[serde(rename = "compensado")]
    Cleared,
}

impl ReceivedCheckStatus {
    /// Returns the string representation of the status.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "aberto",
            Self::Deposited => "depositado",
            Self::Returned => "devolvido",
            Self::Represented => "reapresentado",
            Self::Cleared => "compensado",
        }
    }

    /// Parses a status from a string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "aberto" => Some(Self::Open),
            "depositado" => Some(Self::Deposited),
            "devolvido" => Some(Self::Returned),
            "reapresentado" => Some(Self::Represented),
            "compensado" => Some(Self::Cleared),
            _ => None,
        }
    }

    /// Returns true if the status admits no further mutation.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Cleared)
    }

    /// Returns the location this status forces, if any.
    ///
    /// Deposited checks are in transit to the bank; cleared and returned
    /// checks track their status. Other statuses leave the location alone.
    #[must_use]
    pub fn cascaded_location(&self) -> Option<CheckLocation> {
        match self {
            Self::Deposited => Some(CheckLocation::InTransit),
            Self::Cleared => Some(CheckLocation::Cleared),
            Self::Returned => Some(CheckLocation::Returned),
            Self::Open | Self::Represented => None,
        }
    }
}

impl fmt::Display for ReceivedCheckStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Physical/process location of a received check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CheckLocation {
    /// In the office cash drawer.
    #[serde(rename = "em_caixa")]
    OnHand,
    /// In transit to the bank.
    #[serde(rename = "em_transicao")]
    InTransit,
    /// Held at the bank.
    #[serde(rename = "em_banco")]
    AtBank,
    /// Endorsed to a third party.
    #[serde(rename = "com_terceiro")]
    WithThirdParty,
    /// Cleared.
    #[serde(rename = "compensado")]
    Cleared,
    /// Returned by the bank.
    #[serde(rename = "devolvido")]
    Returned,
}

impl CheckLocation {
    /// Returns the string representation of the location.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OnHand => "em_caixa",
            Self::InTransit => "em_transicao",
            Self::AtBank => "em_banco",
            Self::WithThirdParty => "com_terceiro",
            Self::Cleared => "compensado",
            Self::Returned => "devolvido",
        }
    }

    /// Parses a location from a string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "em_caixa" => Some(Self::OnHand),
            "em_transicao" => Some(Self::InTransit),
            "em_banco" => Some(Self::AtBank),
            "com_terceiro" => Some(Self::WithThirdParty),
            "compensado" => Some(Self::Cleared),
            "devolvido" => Some(Self::Returned),
            _ => None,
        }
    }
}

impl fmt::Display for CheckLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Lifecycle status of an issued check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IssuedCheckStatus {
    /// Check has been written but not cleared.
    #[serde(rename = "aberto")]
    Open,
    /// Check cleared at the bank.
    #[serde(rename = "compensado")]
    Cleared,
    /// Check was returned unpaid.
    #[serde(rename = "devolvido")]
    Returned,
    /// Check was cancelled before clearing.
    #[serde(rename = "cancelado")]
    Canceled,
}

impl IssuedCheckStatus {
    /// Returns the string representation of the status.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "aberto",
            Self::Cleared => "compensado",
            Self::Returned => "devolvido",
            Self::Canceled => "cancelado",
        }
    }

    /// Parses a status from a string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "aberto" => Some(Self::Open),
            "compensado" => Some(Self::Cleared),
            "devolvido" => Some(Self::Returned),
            "cancelado" => Some(Self::Canceled),
            _ => None,
        }
    }

    /// Returns true if the status admits no further mutation.
    ///
    /// A cleared check can still be returned by the bank (see
    /// [`IssuedCheck::permitted_actions`]); that single edge is the only
    /// mutation allowed out of a terminal status.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Cleared | Self::Canceled)
    }
}

impl fmt::Display for IssuedCheckStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Actions a caller may attempt on an issued check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum IssuedCheckAction {
    /// Edit the check fields.
    #[serde(rename = "editar")]
    Edit,
    /// Mark the check as cleared.
    #[serde(rename = "compensar")]
    Clear,
    /// Mark the check as returned by the bank.
    #[serde(rename = "devolver")]
    Return,
    /// Cancel the check.
    #[serde(rename = "cancelar")]
    Cancel,
}

impl IssuedCheckAction {
    /// Returns the string representation of the action.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Edit => "editar",
            Self::Clear => "compensar",
            Self::Return => "devolver",
            Self::Cancel => "cancelar",
        }
    }
}

impl fmt::Display for IssuedCheckAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A check received from a customer, tracked through deposit and clearing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReceivedCheck {
    /// Unique identifier.
    pub id: CheckId,
    /// Check number in bank format (not validated).
    pub number: String,
    /// Bank code.
    pub bank_code: String,
    /// Bank display name.
    pub bank_name: String,
    /// Branch number.
    pub branch: String,
    /// Account number.
    pub account: String,
    /// Name of the person who wrote the check.
    pub drawer_name: String,
    /// Drawer tax id (free text, unvalidated).
    pub drawer_tax_id: String,
    /// Face amount. Immutable once the check reaches a terminal status.
    pub amount: Money,
    /// Date the check was written.
    pub issue_date: NaiveDate,
    /// Expected clearing date, if known.
    pub due_date: Option<NaiveDate>,
    /// Current lifecycle status.
    pub status: ReceivedCheckStatus,
    /// Current location, cascaded from the status where applicable.
    pub location: CheckLocation,
    /// Append-only audit history.
    pub history: AuditTrail,
}

impl ReceivedCheck {
    /// Creates a freshly registered check: open, on hand, empty history.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn open(
        id: CheckId,
        number: impl Into<String>,
        bank_code: impl Into<String>,
        bank_name: impl Into<String>,
        branch: impl Into<String>,
        account: impl Into<String>,
        drawer_name: impl Into<String>,
        drawer_tax_id: impl Into<String>,
        amount: Money,
        issue_date: NaiveDate,
    ) -> Self {
        Self {
            id,
            number: number.into(),
            bank_code: bank_code.into(),
            bank_name: bank_name.into(),
            branch: branch.into(),
            account: account.into(),
            drawer_name: drawer_name.into(),
            drawer_tax_id: drawer_tax_id.into(),
            amount,
            issue_date,
            due_date: None,
            status: ReceivedCheckStatus::Open,
            location: CheckLocation::OnHand,
            history: AuditTrail::new(),
        }
    }

    /// Returns true if no further mutation is allowed.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }
}

/// A check the clinic wrote to a supplier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssuedCheck {
    /// Unique identifier.
    pub id: CheckId,
    /// Check number in bank format (not validated).
    pub number: String,
    /// Bank code.
    pub bank_code: String,
    /// Bank display name.
    pub bank_name: String,
    /// Branch number.
    pub branch: String,
    /// Account number.
    pub account: String,
    /// Who the check was written to.
    pub payee_name: String,
    /// Payee tax id (free text, unvalidated).
    pub payee_tax_id: String,
    /// Face amount. Immutable once the check reaches a terminal status.
    pub amount: Money,
    /// Date the check was written.
    pub issue_date: NaiveDate,
    /// Expected clearing date, if known.
    pub due_date: Option<NaiveDate>,
    /// Current lifecycle status.
    pub status: IssuedCheckStatus,
    /// Append-only audit history.
    pub history: AuditTrail,
}

impl IssuedCheck {
    /// Creates a freshly issued check: open, empty history.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn open(
        id: CheckId,
        number: impl Into<String>,
        bank_code: impl Into<String>,
        bank_name: impl Into<String>,
        branch: impl Into<String>,
        account: impl Into<String>,
        payee_name: impl Into<String>,
        payee_tax_id: impl Into<String>,
        amount: Money,
        issue_date: NaiveDate,
    ) -> Self {
        Self {
            id,
            number: number.into(),
            bank_code: bank_code.into(),
            bank_name: bank_name.into(),
            branch: branch.into(),
            account: account.into(),
            payee_name: payee_name.into(),
            payee_tax_id: payee_tax_id.into(),
            amount,
            issue_date,
            due_date: None,
            status: IssuedCheckStatus::Open,
            history: AuditTrail::new(),
        }
    }

    /// Returns true if no further mutation is allowed.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// Returns the set of actions valid in the current status.
    ///
    /// An open check can be edited, cleared, returned, or cancelled. A
    /// cleared check can still be returned (bank-side reversal after
    /// clearing). Returned and cancelled checks allow nothing.
    #[must_use]
    pub fn permitted_actions(&self) -> BTreeSet<IssuedCheckAction> {
        match self.status {
            IssuedCheckStatus::Open => BTreeSet::from([
                IssuedCheckAction::Edit,
                IssuedCheckAction::Clear,
                IssuedCheckAction::Return,
                IssuedCheckAction::Cancel,
            ]),
            IssuedCheckStatus::Cleared => BTreeSet::from([IssuedCheckAction::Return]),
            IssuedCheckStatus::Returned | IssuedCheckStatus::Canceled => BTreeSet::new(),
        }
    }
}

/// Field edits for a received check. `None` fields are left untouched.
///
/// Status, location, and history are deliberately unreachable from here;
/// they change only through the lifecycle operations.
#[derive(Debug, Clone, Default)]
pub struct ReceivedCheckUpdate {
    /// New check number.
    pub number: Option<String>,
    /// New bank code.
    pub bank_code: Option<String>,
    /// New bank display name.
    pub bank_name: Option<String>,
    /// New branch number.
    pub branch: Option<String>,
    /// New account number.
    pub account: Option<String>,
    /// New drawer name.
    pub drawer_name: Option<String>,
    /// New drawer tax id.
    pub drawer_tax_id: Option<String>,
    /// New face amount.
    pub amount: Option<Money>,
    /// New issue date.
    pub issue_date: Option<NaiveDate>,
    /// New expected clearing date (`Some(None)` clears it).
    pub due_date: Option<Option<NaiveDate>>,
}

/// Field edits for an issued check. `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct IssuedCheckUpdate {
    /// New check number.
    pub number: Option<String>,
    /// New bank code.
    pub bank_code: Option<String>,
    /// New bank display name.
    pub bank_name: Option<String>,
    /// New branch number.
    pub branch: Option<String>,
    /// New account number.
    pub account: Option<String>,
    /// New payee name.
    pub payee_name: Option<String>,
    /// New payee tax id.
    pub payee_tax_id: Option<String>,
    /// New face amount.
    pub amount: Option<Money>,
    /// New issue date.
    pub issue_date: Option<NaiveDate>,
    /// New expected clearing date (`Some(None)` clears it).
    pub due_date: Option<Option<NaiveDate>>,
}
