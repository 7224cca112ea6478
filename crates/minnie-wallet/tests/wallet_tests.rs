//! Tests for minnie-wallet: conversion table, ledger simulation, and
//! the session state machine

use minnie_core::{Error, MeetupId};
use minnie_wallet::*;
use std::sync::Arc;

fn manager(ledger: SimulatedLedger) -> SessionManager {
    SessionManager::new(Arc::new(ledger))
}

// ===========================================================================
// Conversion table
// ===========================================================================

#[test]
fn conversion_rates_are_fixed() {
    assert_eq!(Currency::Dot.rate(), RATE_DOT);
    assert_eq!(Currency::Ksm.rate(), RATE_KSM);
    assert_eq!(output_amount(100, Currency::Dot), 10.0);
    assert_eq!(output_amount(100, Currency::Ksm), 2.5);
    assert_eq!(output_amount(0, Currency::Dot), 0.0);
}

#[test]
fn currency_serde_is_lowercase() {
    assert_eq!(serde_json::to_string(&Currency::Dot).unwrap(), r#""dot""#);
    let back: Currency = serde_json::from_str(r#""ksm""#).unwrap();
    assert_eq!(back, Currency::Ksm);
}

#[test]
fn currency_displays_its_ticker() {
    assert_eq!(Currency::Dot.to_string(), "DOT");
    assert_eq!(Currency::Ksm.to_string(), "KSM");
}

// ===========================================================================
// Connect / disconnect
// ===========================================================================

#[tokio::test]
async fn connect_binds_account_and_session_balance() {
    let sessions = manager(SimulatedLedger::instant().with_initial_balance(500));
    let snapshot = sessions.connect().await.expect("connect succeeds");

    assert_eq!(snapshot.state, SessionState::Connected);
    assert!(snapshot.account.is_some());
    assert_eq!(snapshot.vibe_points, 500);
    assert!(!snapshot.verified);
}

#[tokio::test]
async fn connect_balance_stays_under_the_mock_ceiling() {
    let sessions = manager(SimulatedLedger::instant());
    let snapshot = sessions.connect().await.unwrap();
    assert!(snapshot.vibe_points < 1000);
}

#[tokio::test]
async fn connect_without_extension_reports_category() {
    let sessions = manager(SimulatedLedger::instant().without_extension());
    let err = sessions.connect().await.expect_err("no extension");
    assert!(matches!(err, Error::ExtensionMissing));
}

#[tokio::test]
async fn connect_without_accounts_reports_category() {
    let sessions = manager(SimulatedLedger::instant().without_accounts());
    let err = sessions.connect().await.expect_err("no accounts");
    assert!(matches!(err, Error::NoAccounts));
}

#[tokio::test]
async fn disconnect_unconditionally_clears() {
    let sessions = manager(SimulatedLedger::instant().with_initial_balance(400));
    let connected = sessions.connect().await.unwrap();

    let snapshot = sessions.disconnect(&connected.session_id).await.unwrap();
    assert_eq!(snapshot.state, SessionState::Disconnected);
    assert!(snapshot.account.is_none());
    assert_eq!(snapshot.vibe_points, 0);
    assert!(!snapshot.verified);
}

#[tokio::test]
async fn unknown_session_is_reported_not_found() {
    let sessions = manager(SimulatedLedger::instant());
    let err = sessions
        .snapshot(&minnie_core::SessionId::new("nope"))
        .await
        .expect_err("unknown session");
    assert!(matches!(err, Error::NotFound { .. }));
}

// ===========================================================================
// Point conversion
// ===========================================================================

#[tokio::test]
async fn convert_debits_exactly_and_reports_output() {
    let sessions = manager(SimulatedLedger::instant().with_initial_balance(400));
    let id = sessions.connect().await.unwrap().session_id;

    let receipt = sessions.convert(&id, 100, Currency::Dot).await.unwrap();
    assert_eq!(receipt.debited, 100);
    assert_eq!(receipt.output, 10.0);
    assert_eq!(receipt.new_balance, 300);
    assert_eq!(sessions.balance(&id).await.unwrap(), 300);
}

#[tokio::test]
async fn convert_rejects_zero_amount() {
    let sessions = manager(SimulatedLedger::instant().with_initial_balance(400));
    let id = sessions.connect().await.unwrap().session_id;

    let err = sessions.convert(&id, 0, Currency::Ksm).await.expect_err("zero");
    assert!(err.is_validation());
    assert_eq!(sessions.balance(&id).await.unwrap(), 400);
}

#[tokio::test]
async fn convert_rejects_amount_over_balance() {
    let sessions = manager(SimulatedLedger::instant().with_initial_balance(400));
    let id = sessions.connect().await.unwrap().session_id;

    let err = sessions
        .convert(&id, 401, Currency::Dot)
        .await
        .expect_err("over balance");
    assert!(matches!(
        err,
        Error::InsufficientBalance {
            available: 400,
            requested: 401
        }
    ));
    assert_eq!(sessions.balance(&id).await.unwrap(), 400);
}

#[tokio::test]
async fn convert_requires_a_connected_session() {
    let sessions = manager(SimulatedLedger::instant().with_initial_balance(400));
    let id = sessions.connect().await.unwrap().session_id;
    sessions.disconnect(&id).await.unwrap();

    let err = sessions
        .convert(&id, 10, Currency::Dot)
        .await
        .expect_err("disconnected");
    assert!(matches!(err, Error::NotConnected));
}

#[tokio::test]
async fn convert_mutates_nothing_when_the_ledger_fails() {
    let sessions = manager(
        SimulatedLedger::instant()
            .with_initial_balance(400)
            .with_confirm_failure("chain unavailable"),
    );
    let id = sessions.connect().await.unwrap().session_id;

    let err = sessions
        .convert(&id, 100, Currency::Dot)
        .await
        .expect_err("ledger down");
    assert!(matches!(err, Error::Ledger(_)));
    assert_eq!(sessions.balance(&id).await.unwrap(), 400);
}

// ===========================================================================
// Verification
// ===========================================================================

#[tokio::test]
async fn verification_flag_is_session_scoped() {
    let sessions = manager(SimulatedLedger::instant().with_initial_balance(100));
    let first = sessions.connect().await.unwrap().session_id;

    assert!(!sessions.is_verified(&first).await.unwrap());
    let snapshot = sessions.verify(&first).await.unwrap();
    assert!(snapshot.verified);
    assert!(sessions.is_verified(&first).await.unwrap());

    // A fresh session starts unverified again.
    let second = sessions.connect().await.unwrap().session_id;
    assert!(!sessions.is_verified(&second).await.unwrap());
}

#[tokio::test]
async fn verification_requires_a_connected_session() {
    let sessions = manager(SimulatedLedger::instant().with_initial_balance(100));
    let id = sessions.connect().await.unwrap().session_id;
    sessions.disconnect(&id).await.unwrap();
    assert!(matches!(
        sessions.verify(&id).await.expect_err("disconnected"),
        Error::NotConnected
    ));
}

// ===========================================================================
// Stake debiting
// ===========================================================================

#[tokio::test]
async fn stake_debits_the_staker_after_confirmation() {
    let sessions = manager(SimulatedLedger::instant().with_initial_balance(400));
    let id = sessions.connect().await.unwrap().session_id;

    let receipt = sessions
        .debit_stake(&id, &MeetupId::new("1"), 150)
        .await
        .expect("stake confirmed");
    assert_eq!(receipt.staked, 150);
    assert_eq!(receipt.new_balance, 250);
    assert_eq!(sessions.balance(&id).await.unwrap(), 250);
}

#[tokio::test]
async fn stake_rejects_amount_over_balance() {
    let sessions = manager(SimulatedLedger::instant().with_initial_balance(100));
    let id = sessions.connect().await.unwrap().session_id;

    let err = sessions
        .debit_stake(&id, &MeetupId::new("1"), 101)
        .await
        .expect_err("over balance");
    assert!(matches!(err, Error::InsufficientBalance { .. }));
    assert_eq!(sessions.balance(&id).await.unwrap(), 100);
}

#[tokio::test]
async fn stake_mutates_nothing_when_the_ledger_fails() {
    let sessions = manager(
        SimulatedLedger::instant()
            .with_initial_balance(400)
            .with_confirm_failure("chain unavailable"),
    );
    let id = sessions.connect().await.unwrap().session_id;

    assert!(sessions
        .debit_stake(&id, &MeetupId::new("1"), 100)
        .await
        .is_err());
    assert_eq!(sessions.balance(&id).await.unwrap(), 400);
}
