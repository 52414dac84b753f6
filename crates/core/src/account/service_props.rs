//! Property-based tests for account status derivation.

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;

use crate::account::service::AccountService;
use crate::account::types::{AccountPayment, AccountStatus};

/// Strategy for generating positive original amounts.
fn arb_original() -> impl Strategy<Value = Decimal> {
    (1i64..10_000_000i64).prop_map(|n| Decimal::new(n, 2))
}

/// Strategy for generating payment lists (amounts positive).
fn arb_payments() -> impl Strategy<Value = Vec<AccountPayment>> {
    prop::collection::vec(
        (1i64..5_000_000i64).prop_map(|n| AccountPayment {
            date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            amount: Decimal::new(n, 2),
            method: "pix".to_string(),
            actor: "Carla".to_string(),
            note: None,
        }),
        0..8,
    )
}

/// Strategy for generating day offsets around an observation date.
fn arb_day_offset() -> impl Strategy<Value = i64> {
    -120i64..120i64
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Cancellation wins over any combination of payments and dates.
    #[test]
    fn prop_cancelled_overrides_everything(
        original in arb_original(),
        payments in arb_payments(),
        offset in arb_day_offset(),
    ) {
        let today = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap();
        let due = today + chrono::Duration::days(offset);

        let status = AccountService::derive_status(original, &payments, due, true, today);
        prop_assert_eq!(status, AccountStatus::Cancelled);
    }

    /// Paid exactly when the payment sum covers the original amount, no
    /// matter how overdue the account is.
    #[test]
    fn prop_paid_iff_nothing_due(
        original in arb_original(),
        payments in arb_payments(),
        offset in arb_day_offset(),
    ) {
        let today = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap();
        let due = today + chrono::Duration::days(offset);

        let paid: Decimal = payments.iter().map(|p| p.amount).sum();
        let status = AccountService::derive_status(original, &payments, due, false, today);

        if paid >= original {
            prop_assert_eq!(status, AccountStatus::Paid);
        } else {
            prop_assert_ne!(status, AccountStatus::Paid);
        }
    }

    /// With an outstanding balance, a past due date always reads Overdue and
    /// a current one never does.
    #[test]
    fn prop_overdue_iff_past_due_and_outstanding(
        original in arb_original(),
        payments in arb_payments(),
        offset in arb_day_offset(),
    ) {
        let today = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap();
        let due = today + chrono::Duration::days(offset);

        let paid: Decimal = payments.iter().map(|p| p.amount).sum();
        prop_assume!(paid < original);

        let status = AccountService::derive_status(original, &payments, due, false, today);
        if due < today {
            prop_assert_eq!(status, AccountStatus::Overdue);
        } else if paid > Decimal::ZERO {
            prop_assert_eq!(status, AccountStatus::Partial);
        } else {
            prop_assert_eq!(status, AccountStatus::Open);
        }
    }

    /// The derivation is a pure function: same inputs, same output.
    #[test]
    fn prop_derivation_is_deterministic(
        original in arb_original(),
        payments in arb_payments(),
        offset in arb_day_offset(),
    ) {
        let today = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap();
        let due = today + chrono::Duration::days(offset);

        let first = AccountService::derive_status(original, &payments, due, false, today);
        let second = AccountService::derive_status(original, &payments, due, false, today);
        prop_assert_eq!(first, second);
    }
}
