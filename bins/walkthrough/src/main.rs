//! Finlab engine walkthrough.
//!
//! Drives the financial core through its canonical flows with in-memory mock
//! data: a received check from deposit to clearing, an issued check bounced
//! after clearing, a payable aging into overdue, and a visit ledger settled,
//! reversed, and settled again.
//!
//! Usage: cargo run --bin walkthrough

use std::str::FromStr;

use anyhow::Context;
use chrono::{Duration, Utc};
use rust_decimal::Decimal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use finlab_core::account::{
    AccountKind, AccountPaymentInput, AccountService, PayableReceivableAccount,
};
use finlab_core::instrument::{
    InstrumentService, IssuedCheck, ReceivedCheck, ReceivedCheckStatus,
};
use finlab_core::payments::{PaymentInput, PaymentLedger, PaymentMethod};
use finlab_shared::AppConfig;
use finlab_shared::types::{AccountId, CheckId, Currency, LedgerId, Money, VisitId};

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "finlab=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load().context("Failed to load configuration")?;
    let currency = Currency::from_str(&config.finance.currency)
        .map_err(|e| anyhow::anyhow!(e))
        .context("Unsupported operating currency")?;
    info!(
        currency = %currency,
        money_scale = config.finance.money_scale,
        "Configuration loaded"
    );

    let today = Utc::now().date_naive();
    let operator = "Ana Ribeiro";

    println!("Walking through the received-check lifecycle...");
    let mut received = ReceivedCheck::open(
        CheckId::new(),
        "850123",
        "001",
        "Banco do Brasil",
        "1234",
        "56789-0",
        "Maria Souza",
        "123.456.789-09",
        Money::new(Decimal::new(50_000, 2), currency),
        today - Duration::days(3),
    );
    InstrumentService::transition_received(
        &mut received,
        ReceivedCheckStatus::Deposited,
        operator,
        Some("deposito no malote da manha".to_string()),
    )?;
    InstrumentService::transition_received(
        &mut received,
        ReceivedCheckStatus::Cleared,
        operator,
        None,
    )?;
    let rejected = InstrumentService::transition_received(
        &mut received,
        ReceivedCheckStatus::Returned,
        operator,
        None,
    );
    println!(
        "  cleared check rejects further changes: {}",
        rejected.unwrap_err()
    );
    println!(
        "  history: {}",
        serde_json::to_string_pretty(received.history.entries())?
    );

    println!("Walking through the issued-check action table...");
    let mut issued = IssuedCheck::open(
        CheckId::new(),
        "000321",
        "341",
        "Itau",
        "0456",
        "78901-2",
        "Diagnostica Insumos ME",
        "98.765.432/0001-10",
        Money::new(Decimal::new(230_000, 2), currency),
        today - Duration::days(10),
    );
    println!("  open check permits: {:?}", issued.permitted_actions());
    InstrumentService::clear_issued(&mut issued, operator, None)?;
    println!("  cleared check permits: {:?}", issued.permitted_actions());
    InstrumentService::return_issued(
        &mut issued,
        operator,
        Some("devolucao bancaria apos compensacao".to_string()),
    )?;
    println!("  final status: {}", issued.status);

    println!("Walking through payable aging...");
    let mut payable = PayableReceivableAccount::register(
        AccountId::new(),
        "CP-2025-0042",
        AccountKind::Payable,
        "Reagentes de hematologia",
        "Diagnostica Insumos ME",
        "98.765.432/0001-10",
        Decimal::new(100_000, 2),
        today - Duration::days(1),
    );
    AccountService::record_payment(
        &mut payable,
        AccountPaymentInput {
            date: today - Duration::days(5),
            amount: Decimal::new(40_000, 2),
            method: "pix".to_string(),
            note: Some("primeira parcela".to_string()),
        },
        operator,
    )?;
    let totals = AccountService::derive_totals(&payable);
    println!(
        "  paid {} of {}, status today: {}",
        totals.amount_paid,
        payable.original_amount,
        AccountService::status_of(&payable, today)
    );

    println!("Walking through the visit ledger...");
    let mut ledger = PaymentLedger::new(
        LedgerId::new(),
        VisitId::new(),
        Decimal::new(50_000, 2),
    );
    let first = ledger.add(
        PaymentInput {
            date: today,
            amount: Decimal::new(30_000, 2),
            method: PaymentMethod::Cash,
            discount: Decimal::ZERO,
            notes: None,
        },
        operator,
    )?;
    ledger.add(
        PaymentInput {
            date: today,
            amount: Decimal::new(20_000, 2),
            method: PaymentMethod::CreditCard {
                operator: "Cielo".to_string(),
            },
            discount: Decimal::ZERO,
            notes: None,
        },
        operator,
    )?;
    println!("  after two payments, complete = {}", ledger.is_complete());

    ledger.reverse(first, operator)?;
    let totals = ledger.totals();
    println!(
        "  after reversal: paid {}, pending {}, complete = {}",
        totals.total_paid,
        totals.pending,
        ledger.is_complete()
    );

    let overpay = ledger.add(
        PaymentInput {
            date: today,
            amount: Decimal::new(40_000, 2),
            method: PaymentMethod::Cash,
            discount: Decimal::ZERO,
            notes: None,
        },
        operator,
    );
    println!("  over-payment rejected: {}", overpay.unwrap_err());

    println!("Walkthrough complete!");
    Ok(())
}
