//! Property-based tests for the visit payment ledger.

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;

use finlab_shared::types::{LedgerId, VisitId};

use crate::payments::ledger::PaymentLedger;
use crate::payments::types::{EntryId, PaymentInput, PaymentMethod};

/// A randomly generated ledger operation.
#[derive(Debug, Clone)]
enum Op {
    Add { amount: Decimal, discount: Decimal },
    Edit { target: i64, amount: Decimal },
    Reverse { target: i64 },
}

/// Strategy for generating cents in a workable range.
fn arb_cents() -> impl Strategy<Value = Decimal> {
    (1i64..100_000i64).prop_map(|n| Decimal::new(n, 2))
}

/// Strategy for generating a random operation.
fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (arb_cents(), 0i64..5_000i64).prop_map(|(amount, d)| Op::Add {
            amount,
            discount: Decimal::new(d, 2),
        }),
        (1i64..10i64, arb_cents()).prop_map(|(target, amount)| Op::Edit { target, amount }),
        (1i64..10i64).prop_map(|target| Op::Reverse { target }),
    ]
}

fn input(amount: Decimal, discount: Decimal) -> PaymentInput {
    PaymentInput {
        date: NaiveDate::from_ymd_opt(2025, 5, 20).unwrap(),
        amount,
        method: PaymentMethod::Cash,
        discount,
        notes: None,
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// After any sequence of operations, successful or not:
    /// total_paid + pending == total_due, pending never goes negative, the
    /// audit history never shrinks, and entry ids stay strictly increasing.
    #[test]
    fn prop_ledger_invariants_hold_under_any_op_sequence(
        total_due in (1i64..200_000i64).prop_map(|n| Decimal::new(n, 2)),
        ops in prop::collection::vec(arb_op(), 1..30),
    ) {
        let mut ledger = PaymentLedger::new(LedgerId::new(), VisitId::new(), total_due);
        let mut audit_len = 0usize;

        for op in ops {
            let result = match op {
                Op::Add { amount, discount } => {
                    ledger.add(input(amount, discount), "Ana").map(|_| ())
                }
                Op::Edit { target, amount } => {
                    ledger.edit(EntryId(target), input(amount, Decimal::ZERO), "Ana")
                }
                Op::Reverse { target } => ledger.reverse(EntryId(target), "Ana"),
            };

            let totals = ledger.totals();
            prop_assert_eq!(totals.total_paid + totals.pending, totals.total_due);
            prop_assert!(totals.pending >= Decimal::ZERO);
            prop_assert!(totals.total_due == total_due);

            // History only grows, and only on success.
            if result.is_ok() {
                prop_assert_eq!(ledger.history().len(), audit_len + 1);
            } else {
                prop_assert_eq!(ledger.history().len(), audit_len);
            }
            audit_len = ledger.history().len();

            let ids: Vec<i64> = ledger.entries().iter().map(|e| e.id.0).collect();
            prop_assert!(ids.windows(2).all(|w| w[0] < w[1]));
        }
    }

    /// Reversing an entry always succeeds once and only once.
    #[test]
    fn prop_reverse_succeeds_exactly_once(
        amounts in prop::collection::vec(1i64..1_000i64, 1..5),
    ) {
        let total: i64 = amounts.iter().sum();
        let mut ledger = PaymentLedger::new(
            LedgerId::new(),
            VisitId::new(),
            Decimal::new(total, 2),
        );

        let mut ids = Vec::new();
        for cents in amounts {
            ids.push(
                ledger
                    .add(input(Decimal::new(cents, 2), Decimal::ZERO), "Ana")
                    .unwrap(),
            );
        }

        for id in ids {
            prop_assert!(ledger.reverse(id, "Ana").is_ok());
            prop_assert!(ledger.reverse(id, "Ana").is_err());
        }

        // Everything reversed: back to square one, entries still present.
        prop_assert_eq!(ledger.totals().pending, ledger.totals().total_due);
        prop_assert!(!ledger.entries().is_empty());
    }

    /// `is_complete` is equivalent to a zero outstanding balance.
    #[test]
    fn prop_complete_iff_pending_zero(
        total_cents in 1i64..50_000i64,
        paid_cents in 1i64..50_000i64,
    ) {
        let mut ledger = PaymentLedger::new(
            LedgerId::new(),
            VisitId::new(),
            Decimal::new(total_cents, 2),
        );

        let payment = Decimal::new(paid_cents.min(total_cents), 2);
        ledger.add(input(payment, Decimal::ZERO), "Ana").unwrap();

        prop_assert_eq!(ledger.is_complete(), ledger.totals().pending.is_zero());
        prop_assert_eq!(ledger.is_complete(), paid_cents >= total_cents);
    }
}
