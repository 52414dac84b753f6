//! Account aggregation and payment recording.
//!
//! Status and totals are pure functions over the payment list. They are
//! recomputed on every read with a caller-supplied observation date, never
//! cached: an account becomes overdue purely by the passage of time, with no
//! mutation involved.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::debug;

use crate::account::error::AccountError;
use crate::account::types::{
    AccountPayment, AccountPaymentInput, AccountStatus, AccountTotals, PayableReceivableAccount,
};

/// Stateless service for account status derivation and payment recording.
pub struct AccountService;

impl AccountService {
    /// Derives the paid/due totals from the payment list.
    ///
    /// `amount_due` is not clamped: an over-paid account shows a negative
    /// remainder even though its status reads Paid.
    #[must_use]
    pub fn derive_totals(account: &PayableReceivableAccount) -> AccountTotals {
        let amount_paid: Decimal = account.payments.iter().map(|p| p.amount).sum();
        AccountTotals {
            amount_paid,
            amount_due: account.original_amount - amount_paid,
        }
    }

    /// Derives the aggregate status from amounts and dates.
    ///
    /// Priority order:
    /// 1. Manual cancellation overrides everything.
    /// 2. Nothing due (including over-payment) is Paid.
    /// 3. Past due with an outstanding balance is Overdue, replacing what
    ///    would otherwise be Open or Partial.
    /// 4. Otherwise Partial when something was paid, Open when nothing was.
    #[must_use]
    pub fn derive_status(
        original_amount: Decimal,
        payments: &[AccountPayment],
        due_date: NaiveDate,
        cancelled: bool,
        today: NaiveDate,
    ) -> AccountStatus {
        if cancelled {
            return AccountStatus::Cancelled;
        }

        let amount_paid: Decimal = payments.iter().map(|p| p.amount).sum();
        let amount_due = original_amount - amount_paid;

        if amount_due <= Decimal::ZERO {
            return AccountStatus::Paid;
        }

        let candidate = if amount_paid > Decimal::ZERO {
            AccountStatus::Partial
        } else {
            AccountStatus::Open
        };

        if due_date < today {
            return AccountStatus::Overdue;
        }
        candidate
    }

    /// Derives the status of an account as observed on `today`.
    #[must_use]
    pub fn status_of(account: &PayableReceivableAccount, today: NaiveDate) -> AccountStatus {
        Self::derive_status(
            account.original_amount,
            &account.payments,
            account.due_date,
            account.cancelled,
            today,
        )
    }

    /// Records a payment against an account.
    ///
    /// The line is immutable once appended. Over-payment is accepted here:
    /// the status clamps to Paid and the negative remainder stays visible
    /// through [`Self::derive_totals`].
    ///
    /// # Errors
    ///
    /// Returns `AccountError::NonPositiveAmount` for a non-positive amount
    /// and `AccountError::AccountCancelled` when the account was cancelled.
    pub fn record_payment(
        account: &mut PayableReceivableAccount,
        input: AccountPaymentInput,
        actor: &str,
    ) -> Result<(), AccountError> {
        if input.amount <= Decimal::ZERO {
            return Err(AccountError::NonPositiveAmount);
        }
        if account.cancelled {
            return Err(AccountError::AccountCancelled {
                code: account.code.clone(),
            });
        }

        let amount = input.amount;
        let status_before = Self::status_of(account, input.date);
        account.payments.push(AccountPayment {
            date: input.date,
            amount: input.amount,
            method: input.method,
            actor: actor.to_string(),
            note: input.note.clone(),
        });
        let status_after = Self::status_of(account, input.date);

        account.history.record(
            actor,
            status_before.as_str(),
            status_after.as_str(),
            input.note,
        );

        debug!(
            account = %account.code,
            amount = %amount,
            from = status_before.as_str(),
            to = status_after.as_str(),
            "account payment recorded"
        );
        Ok(())
    }

    /// Cancels an account, overriding every derived status from then on.
    ///
    /// # Errors
    ///
    /// Returns `AccountError::AlreadyCancelled` on a second cancellation.
    pub fn cancel(
        account: &mut PayableReceivableAccount,
        actor: &str,
        today: NaiveDate,
        note: Option<String>,
    ) -> Result<(), AccountError> {
        if account.cancelled {
            return Err(AccountError::AlreadyCancelled {
                code: account.code.clone(),
            });
        }

        let status_before = Self::status_of(account, today);
        account.cancelled = true;
        account.history.record(
            actor,
            status_before.as_str(),
            AccountStatus::Cancelled.as_str(),
            note,
        );

        debug!(account = %account.code, from = status_before.as_str(), "account cancelled");
        Ok(())
    }
}
