//! Check lifecycle state machine.
//!
//! All operations validate against the current status before touching the
//! check, so a returned error means the check (including its history) is
//! unchanged. Successful operations apply the field change, the location
//! cascade where one exists, and the audit entry together.

use rust_decimal::Decimal;
use tracing::debug;

use crate::instrument::error::InstrumentError;
use crate::instrument::types::{
    CheckLocation, IssuedCheck, IssuedCheckAction, IssuedCheckStatus, IssuedCheckUpdate,
    ReceivedCheck, ReceivedCheckStatus, ReceivedCheckUpdate,
};

/// Stateless service for check lifecycle transitions.
pub struct InstrumentService;

impl InstrumentService {
    // ========== Received checks ==========

    /// Applies a status change to a received check.
    ///
    /// The dependent location is cascaded automatically: `Deposited` puts the
    /// check in transit, `Cleared` and `Returned` move the location with the
    /// status. Other statuses leave the location for [`Self::set_location`].
    ///
    /// # Errors
    ///
    /// Returns `InstrumentError::ImmutableState` if the check has cleared.
    pub fn transition_received(
        check: &mut ReceivedCheck,
        requested: ReceivedCheckStatus,
        actor: &str,
        note: Option<String>,
    ) -> Result<(), InstrumentError> {
        if check.is_terminal() {
            return Err(InstrumentError::ImmutableState {
                status: check.status.as_str().to_string(),
            });
        }

        let from = check.status;
        check.status = requested;
        if let Some(location) = requested.cascaded_location() {
            check.location = location;
        }
        check
            .history
            .record(actor, from.as_str(), requested.as_str(), note);

        debug!(
            check_id = %check.id,
            from = from.as_str(),
            to = requested.as_str(),
            location = check.location.as_str(),
            "received check status changed"
        );
        Ok(())
    }

    /// Moves a received check to a new location without touching its status.
    ///
    /// # Errors
    ///
    /// Returns `InstrumentError::ImmutableState` if the check has cleared.
    pub fn set_location(
        check: &mut ReceivedCheck,
        location: CheckLocation,
        actor: &str,
        note: Option<String>,
    ) -> Result<(), InstrumentError> {
        if check.is_terminal() {
            return Err(InstrumentError::ImmutableState {
                status: check.status.as_str().to_string(),
            });
        }

        let from = check.location;
        check.location = location;
        check
            .history
            .record(actor, from.as_str(), location.as_str(), note);

        debug!(
            check_id = %check.id,
            from = from.as_str(),
            to = location.as_str(),
            "received check moved"
        );
        Ok(())
    }

    /// Edits the descriptive fields of a received check. No cascade.
    ///
    /// # Errors
    ///
    /// Returns `InstrumentError::ImmutableState` if the check has cleared and
    /// `InstrumentError::NonPositiveAmount` for a non-positive new amount.
    pub fn update_received_fields(
        check: &mut ReceivedCheck,
        update: ReceivedCheckUpdate,
        actor: &str,
    ) -> Result<(), InstrumentError> {
        if check.is_terminal() {
            return Err(InstrumentError::ImmutableState {
                status: check.status.as_str().to_string(),
            });
        }
        if let Some(amount) = update.amount
            && amount.amount <= Decimal::ZERO
        {
            return Err(InstrumentError::NonPositiveAmount);
        }

        let ReceivedCheckUpdate {
            number,
            bank_code,
            bank_name,
            branch,
            account,
            drawer_name,
            drawer_tax_id,
            amount,
            issue_date,
            due_date,
        } = update;

        if let Some(number) = number {
            check.number = number;
        }
        if let Some(bank_code) = bank_code {
            check.bank_code = bank_code;
        }
        if let Some(bank_name) = bank_name {
            check.bank_name = bank_name;
        }
        if let Some(branch) = branch {
            check.branch = branch;
        }
        if let Some(account) = account {
            check.account = account;
        }
        if let Some(drawer_name) = drawer_name {
            check.drawer_name = drawer_name;
        }
        if let Some(drawer_tax_id) = drawer_tax_id {
            check.drawer_tax_id = drawer_tax_id;
        }
        if let Some(amount) = amount {
            check.amount = amount;
        }
        if let Some(issue_date) = issue_date {
            check.issue_date = issue_date;
        }
        if let Some(due_date) = due_date {
            check.due_date = due_date;
        }

        let status = check.status.as_str();
        check
            .history
            .record(actor, status, status, Some("dados do cheque atualizados".to_string()));

        debug!(check_id = %check.id, "received check fields updated");
        Ok(())
    }

    // ========== Issued checks ==========

    /// Marks an issued check as cleared.
    ///
    /// # Errors
    ///
    /// Returns `InstrumentError::ImmutableState` or
    /// `InstrumentError::InvalidTransition` if clearing is not permitted from
    /// the current status.
    pub fn clear_issued(
        check: &mut IssuedCheck,
        actor: &str,
        note: Option<String>,
    ) -> Result<(), InstrumentError> {
        Self::transition_issued(
            check,
            IssuedCheckAction::Clear,
            IssuedCheckStatus::Cleared,
            actor,
            note,
        )
    }

    /// Marks an issued check as returned by the bank.
    ///
    /// Permitted while open and, uniquely, after clearing: a bank can bounce
    /// a check back after it already cleared.
    ///
    /// # Errors
    ///
    /// Returns `InstrumentError::ImmutableState` or
    /// `InstrumentError::InvalidTransition` if returning is not permitted
    /// from the current status.
    pub fn return_issued(
        check: &mut IssuedCheck,
        actor: &str,
        note: Option<String>,
    ) -> Result<(), InstrumentError> {
        Self::transition_issued(
            check,
            IssuedCheckAction::Return,
            IssuedCheckStatus::Returned,
            actor,
            note,
        )
    }

    /// Cancels an open issued check.
    ///
    /// # Errors
    ///
    /// Returns `InstrumentError::ImmutableState` or
    /// `InstrumentError::InvalidTransition` if cancellation is not permitted
    /// from the current status.
    pub fn cancel_issued(
        check: &mut IssuedCheck,
        actor: &str,
        note: Option<String>,
    ) -> Result<(), InstrumentError> {
        Self::transition_issued(
            check,
            IssuedCheckAction::Cancel,
            IssuedCheckStatus::Canceled,
            actor,
            note,
        )
    }

    /// Edits the descriptive fields of an issued check. Only permitted while
    /// the check is open.
    ///
    /// # Errors
    ///
    /// Returns `InstrumentError::ImmutableState` for a terminal check,
    /// `InstrumentError::ActionNotPermitted` otherwise when editing is not
    /// allowed, and `InstrumentError::NonPositiveAmount` for a non-positive
    /// new amount.
    pub fn update_issued_fields(
        check: &mut IssuedCheck,
        update: IssuedCheckUpdate,
        actor: &str,
    ) -> Result<(), InstrumentError> {
        if !check.permitted_actions().contains(&IssuedCheckAction::Edit) {
            if check.is_terminal() {
                return Err(InstrumentError::ImmutableState {
                    status: check.status.as_str().to_string(),
                });
            }
            return Err(InstrumentError::ActionNotPermitted {
                action: IssuedCheckAction::Edit.as_str().to_string(),
                status: check.status.as_str().to_string(),
            });
        }
        if let Some(amount) = update.amount
            && amount.amount <= Decimal::ZERO
        {
            return Err(InstrumentError::NonPositiveAmount);
        }

        let IssuedCheckUpdate {
            number,
            bank_code,
            bank_name,
            branch,
            account,
            payee_name,
            payee_tax_id,
            amount,
            issue_date,
            due_date,
        } = update;

        if let Some(number) = number {
            check.number = number;
        }
        if let Some(bank_code) = bank_code {
            check.bank_code = bank_code;
        }
        if let Some(bank_name) = bank_name {
            check.bank_name = bank_name;
        }
        if let Some(branch) = branch {
            check.branch = branch;
        }
        if let Some(account) = account {
            check.account = account;
        }
        if let Some(payee_name) = payee_name {
            check.payee_name = payee_name;
        }
        if let Some(payee_tax_id) = payee_tax_id {
            check.payee_tax_id = payee_tax_id;
        }
        if let Some(amount) = amount {
            check.amount = amount;
        }
        if let Some(issue_date) = issue_date {
            check.issue_date = issue_date;
        }
        if let Some(due_date) = due_date {
            check.due_date = due_date;
        }

        let status = check.status.as_str();
        check
            .history
            .record(actor, status, status, Some("dados do cheque atualizados".to_string()));

        debug!(check_id = %check.id, "issued check fields updated");
        Ok(())
    }

    /// Shared guard + commit for issued-check status changes.
    fn transition_issued(
        check: &mut IssuedCheck,
        action: IssuedCheckAction,
        target: IssuedCheckStatus,
        actor: &str,
        note: Option<String>,
    ) -> Result<(), InstrumentError> {
        if !check.permitted_actions().contains(&action) {
            if check.is_terminal() {
                return Err(InstrumentError::ImmutableState {
                    status: check.status.as_str().to_string(),
                });
            }
            return Err(InstrumentError::InvalidTransition {
                from: check.status.as_str().to_string(),
                to: target.as_str().to_string(),
            });
        }

        let from = check.status;
        check.status = target;
        check
            .history
            .record(actor, from.as_str(), target.as_str(), note);

        debug!(
            check_id = %check.id,
            from = from.as_str(),
            to = target.as_str(),
            "issued check status changed"
        );
        Ok(())
    }
}
