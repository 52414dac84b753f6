//! Property-based tests for the check state machine.

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;

use finlab_shared::types::{CheckId, Currency, Money};

use crate::instrument::error::InstrumentError;
use crate::instrument::service::InstrumentService;
use crate::instrument::types::{
    CheckLocation, IssuedCheck, IssuedCheckAction, IssuedCheckStatus, ReceivedCheck,
    ReceivedCheckStatus,
};

/// Strategy for generating random received-check statuses.
fn arb_received_status() -> impl Strategy<Value = ReceivedCheckStatus> {
    prop_oneof![
        Just(ReceivedCheckStatus::Open),
        Just(ReceivedCheckStatus::Deposited),
        Just(ReceivedCheckStatus::Returned),
        Just(ReceivedCheckStatus::Represented),
        Just(ReceivedCheckStatus::Cleared),
    ]
}

/// Strategy for generating random issued-check statuses.
fn arb_issued_status() -> impl Strategy<Value = IssuedCheckStatus> {
    prop_oneof![
        Just(IssuedCheckStatus::Open),
        Just(IssuedCheckStatus::Cleared),
        Just(IssuedCheckStatus::Returned),
        Just(IssuedCheckStatus::Canceled),
    ]
}

/// Strategy for generating random locations.
fn arb_location() -> impl Strategy<Value = CheckLocation> {
    prop_oneof![
        Just(CheckLocation::OnHand),
        Just(CheckLocation::InTransit),
        Just(CheckLocation::AtBank),
        Just(CheckLocation::WithThirdParty),
        Just(CheckLocation::Cleared),
        Just(CheckLocation::Returned),
    ]
}

/// Strategy for generating positive money amounts.
fn arb_amount() -> impl Strategy<Value = Money> {
    (1i64..10_000_000i64).prop_map(|n| Money::new(Decimal::new(n, 2), Currency::Brl))
}

fn received_with(status: ReceivedCheckStatus, location: CheckLocation, amount: Money) -> ReceivedCheck {
    let mut check = ReceivedCheck::open(
        CheckId::new(),
        "850123",
        "001",
        "Banco do Brasil",
        "1234",
        "56789-0",
        "Maria Souza",
        "123.456.789-09",
        amount,
        NaiveDate::from_ymd_opt(2025, 2, 1).unwrap(),
    );
    check.status = status;
    check.location = location;
    check
}

fn issued_with(status: IssuedCheckStatus, amount: Money) -> IssuedCheck {
    let mut check = IssuedCheck::open(
        CheckId::new(),
        "000321",
        "341",
        "Itau",
        "0456",
        "78901-2",
        "Diagnostica Insumos ME",
        "98.765.432/0001-10",
        amount,
        NaiveDate::from_ymd_opt(2025, 2, 1).unwrap(),
    );
    check.status = status;
    check
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// A cleared received check rejects every mutation and never changes.
    #[test]
    fn prop_terminal_received_check_is_immutable(
        requested in arb_received_status(),
        location in arb_location(),
        amount in arb_amount(),
    ) {
        let mut check = received_with(ReceivedCheckStatus::Cleared, CheckLocation::Cleared, amount);
        let before = check.clone();

        let transition =
            InstrumentService::transition_received(&mut check, requested, "Ana", None);
        let transition_immutable = matches!(transition, Err(InstrumentError::ImmutableState { .. }));
        prop_assert!(transition_immutable);
        prop_assert_eq!(&check, &before);

        let relocate = InstrumentService::set_location(&mut check, location, "Ana", None);
        let relocate_immutable = matches!(relocate, Err(InstrumentError::ImmutableState { .. }));
        prop_assert!(relocate_immutable);
        prop_assert_eq!(&check, &before);
    }

    /// After any successful transition the cascade invariant holds.
    #[test]
    fn prop_cascade_invariant(
        start in arb_received_status(),
        start_location in arb_location(),
        requested in arb_received_status(),
        amount in arb_amount(),
    ) {
        prop_assume!(!start.is_terminal());
        let mut check = received_with(start, start_location, amount);

        InstrumentService::transition_received(&mut check, requested, "Ana", None).unwrap();

        match check.status {
            ReceivedCheckStatus::Deposited => {
                prop_assert_eq!(check.location, CheckLocation::InTransit);
            }
            ReceivedCheckStatus::Cleared => {
                prop_assert_eq!(check.location, CheckLocation::Cleared);
            }
            ReceivedCheckStatus::Returned => {
                prop_assert_eq!(check.location, CheckLocation::Returned);
            }
            ReceivedCheckStatus::Open | ReceivedCheckStatus::Represented => {
                prop_assert_eq!(check.location, start_location);
            }
        }
    }

    /// Every successful transition appends exactly one audit entry; failed
    /// transitions append none.
    #[test]
    fn prop_audit_grows_only_on_success(
        start in arb_received_status(),
        start_location in arb_location(),
        requested in arb_received_status(),
        amount in arb_amount(),
    ) {
        let mut check = received_with(start, start_location, amount);
        let len_before = check.history.len();

        let result = InstrumentService::transition_received(&mut check, requested, "Ana", None);

        if result.is_ok() {
            prop_assert_eq!(check.history.len(), len_before + 1);
            let entry = check.history.last().unwrap();
            prop_assert_eq!(entry.from_state.as_str(), start.as_str());
            prop_assert_eq!(entry.to_state.as_str(), requested.as_str());
        } else {
            prop_assert_eq!(check.history.len(), len_before);
        }
    }

    /// Issued-check actions succeed exactly when the permitted-action table
    /// says so, and failures leave the check unchanged.
    #[test]
    fn prop_issued_actions_follow_permitted_table(
        status in arb_issued_status(),
        amount in arb_amount(),
    ) {
        for action in [
            IssuedCheckAction::Clear,
            IssuedCheckAction::Return,
            IssuedCheckAction::Cancel,
        ] {
            let mut check = issued_with(status, amount);
            let permitted = check.permitted_actions().contains(&action);
            let before = check.clone();

            let result = match action {
                IssuedCheckAction::Clear => InstrumentService::clear_issued(&mut check, "Bruno", None),
                IssuedCheckAction::Return => InstrumentService::return_issued(&mut check, "Bruno", None),
                IssuedCheckAction::Cancel => InstrumentService::cancel_issued(&mut check, "Bruno", None),
                IssuedCheckAction::Edit => unreachable!(),
            };

            prop_assert_eq!(result.is_ok(), permitted);
            if result.is_err() {
                prop_assert_eq!(&check, &before);
            }
        }
    }
}
