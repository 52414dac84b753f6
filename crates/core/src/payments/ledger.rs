//! The per-visit payment ledger.
//!
//! One ledger per visit, created empty, never merged. Entries are ordered,
//! ids are monotonic, and nothing is ever removed: a mistaken payment is
//! reversed, which keeps it in the list but takes it out of the totals.
//!
//! Unlike payable/receivable accounts, this ledger hard-rejects any entry
//! that would push the outstanding balance below zero.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use finlab_shared::types::{LedgerId, VisitId};

use crate::audit::AuditTrail;
use crate::payments::error::LedgerError;
use crate::payments::types::{
    EntryId, EntryStatus, LedgerTotals, PaymentEntry, PaymentInput,
};

/// Ordered payment collection for a single visit.
///
/// The entry list is private; it changes only through [`PaymentLedger::add`],
/// [`PaymentLedger::edit`], and [`PaymentLedger::reverse`], each of which
/// validates fully before mutating anything.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentLedger {
    /// Unique identifier.
    pub id: LedgerId,
    /// The visit this ledger belongs to, for its entire life.
    pub visit_id: VisitId,
    total_due: Decimal,
    entries: Vec<PaymentEntry>,
    next_entry_id: i64,
    history: AuditTrail,
}

impl PaymentLedger {
    /// Creates an empty ledger for a visit with the given total.
    #[must_use]
    pub fn new(id: LedgerId, visit_id: VisitId, total_due: Decimal) -> Self {
        Self {
            id,
            visit_id,
            total_due,
            entries: Vec::new(),
            next_entry_id: 1,
            history: AuditTrail::new(),
        }
    }

    /// Returns the entries, oldest first, reversed ones included.
    #[must_use]
    pub fn entries(&self) -> &[PaymentEntry] {
        &self.entries
    }

    /// Returns the entry with the given id, if present.
    #[must_use]
    pub fn entry(&self, id: EntryId) -> Option<&PaymentEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Returns the audit history of this ledger.
    #[must_use]
    pub fn history(&self) -> &AuditTrail {
        &self.history
    }

    /// Derives the current totals from the entry list.
    ///
    /// Recomputed on every call; reversed entries contribute nothing.
    #[must_use]
    pub fn totals(&self) -> LedgerTotals {
        let total_paid: Decimal = self
            .entries
            .iter()
            .filter(|e| e.status == EntryStatus::Normal)
            .map(PaymentEntry::net)
            .sum();
        LedgerTotals {
            total_due: self.total_due,
            total_paid,
            pending: self.total_due - total_paid,
        }
    }

    /// Returns true when nothing is outstanding.
    ///
    /// This is the gate the finalize workflow checks; `add`, `edit`, and
    /// `reverse` all remain available on a complete ledger so corrections
    /// can still happen before finalization.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.totals().pending.is_zero()
    }

    /// Adds a payment entry and returns its id.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a non-positive amount, a bad discount,
    /// or a blank method field, and `LedgerError::Overpayment` if the net
    /// amount exceeds the outstanding balance.
    pub fn add(&mut self, input: PaymentInput, actor: &str) -> Result<EntryId, LedgerError> {
        let net = Self::validate_input(&input, self.totals().pending)?;

        let id = EntryId(self.next_entry_id);
        self.next_entry_id += 1;
        self.entries.push(PaymentEntry {
            id,
            date: input.date,
            amount: input.amount,
            method: input.method,
            discount: input.discount,
            notes: input.notes,
            status: EntryStatus::Normal,
        });
        self.history.record(
            actor,
            EntryStatus::Normal.as_str(),
            EntryStatus::Normal.as_str(),
            Some(format!("pagamento {id} adicionado")),
        );

        debug!(
            ledger_id = %self.id,
            entry_id = %id,
            net = %net,
            pending = %self.totals().pending,
            "payment added"
        );
        Ok(id)
    }

    /// Replaces the editable fields of an entry.
    ///
    /// The id and status are not editable; a reversed entry cannot be edited
    /// at all.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::EntryNotFound` for an unknown id,
    /// `LedgerError::ImmutableEntry` for a reversed entry, and the same
    /// validation/over-payment errors as [`Self::add`], evaluated with this
    /// entry excluded from the outstanding balance.
    pub fn edit(
        &mut self,
        id: EntryId,
        input: PaymentInput,
        actor: &str,
    ) -> Result<(), LedgerError> {
        let index = self
            .entries
            .iter()
            .position(|e| e.id == id)
            .ok_or(LedgerError::EntryNotFound { id })?;
        if self.entries[index].is_reversed() {
            return Err(LedgerError::ImmutableEntry { id });
        }

        // The entry being replaced no longer counts against the balance.
        let pending_without = self.totals().pending + self.entries[index].net();
        Self::validate_input(&input, pending_without)?;

        let entry = &mut self.entries[index];
        entry.date = input.date;
        entry.amount = input.amount;
        entry.method = input.method;
        entry.discount = input.discount;
        entry.notes = input.notes;

        self.history.record(
            actor,
            EntryStatus::Normal.as_str(),
            EntryStatus::Normal.as_str(),
            Some(format!("pagamento {id} editado")),
        );

        debug!(ledger_id = %self.id, entry_id = %id, "payment edited");
        Ok(())
    }

    /// Reverses an entry, excluding it from the totals without removing it.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::EntryNotFound` for an unknown id and
    /// `LedgerError::AlreadyReversed` on a second reversal — a double
    /// reversal is a caller bug worth surfacing, not a no-op.
    pub fn reverse(&mut self, id: EntryId, actor: &str) -> Result<(), LedgerError> {
        let index = self
            .entries
            .iter()
            .position(|e| e.id == id)
            .ok_or(LedgerError::EntryNotFound { id })?;
        if self.entries[index].is_reversed() {
            return Err(LedgerError::AlreadyReversed { id });
        }

        self.entries[index].status = EntryStatus::Reversed;
        self.history.record(
            actor,
            EntryStatus::Normal.as_str(),
            EntryStatus::Reversed.as_str(),
            Some(format!("estorno do pagamento {id}")),
        );

        debug!(
            ledger_id = %self.id,
            entry_id = %id,
            pending = %self.totals().pending,
            "payment reversed"
        );
        Ok(())
    }

    /// Validates an input against the given outstanding balance and returns
    /// the net amount it would contribute.
    fn validate_input(input: &PaymentInput, pending: Decimal) -> Result<Decimal, LedgerError> {
        if input.amount <= Decimal::ZERO {
            return Err(LedgerError::NonPositiveAmount);
        }
        if input.discount < Decimal::ZERO {
            return Err(LedgerError::NegativeDiscount);
        }
        if input.discount > input.amount {
            return Err(LedgerError::DiscountExceedsAmount);
        }
        if let Some(field) = input.method.missing_field() {
            return Err(LedgerError::MissingMethodField {
                method: input.method.as_str().to_string(),
                field: field.to_string(),
            });
        }

        let net = input.amount - input.discount;
        if net > pending {
            return Err(LedgerError::Overpayment {
                attempted: net,
                pending,
            });
        }
        Ok(net)
    }
}
