//! Tests for minnie-gateway: verification gating, staking flow, and
//! error mapping at the handler boundary

use axum::extract::{Path, State};
use axum::Json;
use chrono::NaiveDate;
use minnie_core::{Error, GatewayConfig};
use minnie_domain::{MeetupDraft, Store};
use minnie_gateway::{routes, AppState};
use minnie_oracle::CannedOracle;
use minnie_wallet::{SessionManager, SimulatedLedger};
use std::sync::Arc;

fn app_state(ledger: SimulatedLedger) -> Arc<AppState> {
    Arc::new(AppState {
        store: Arc::new(Store::seeded()),
        sessions: Arc::new(SessionManager::new(Arc::new(ledger))),
        oracle: Arc::new(CannedOracle::new()),
        config: GatewayConfig::default(),
    })
}

fn draft() -> MeetupDraft {
    MeetupDraft {
        title: "Album Night".into(),
        description: "Listening party for the new release".into(),
        location: "Studio 55, Los Angeles".into(),
        date: NaiveDate::from_ymd_opt(2026, 10, 1).unwrap(),
        fandom: "BeyHive".into(),
        staking_goal: 200,
    }
}

// ===========================================================================
// Meetup creation gating
// ===========================================================================

#[tokio::test]
async fn meetup_creation_requires_verification_first() {
    let state = app_state(SimulatedLedger::instant().with_initial_balance(400));
    let session = state.sessions.connect().await.unwrap();

    let err = routes::meetups::create_meetup(
        State(state.clone()),
        Json(routes::meetups::CreateMeetupRequest {
            session_id: session.session_id.clone(),
            draft: draft(),
        }),
    )
    .await
    .err()
    .expect("unverified organizer is rejected");
    assert!(matches!(err.0, Error::VerificationRequired));

    // After the simulated verification step the same call succeeds.
    state.sessions.verify(&session.session_id).await.unwrap();
    let Json(meetup) = routes::meetups::create_meetup(
        State(state.clone()),
        Json(routes::meetups::CreateMeetupRequest {
            session_id: session.session_id,
            draft: draft(),
        }),
    )
    .await
    .expect("verified organizer creates");

    assert_eq!(meetup.participants, 1);
    assert_eq!(meetup.current_staked, 100);
    assert_eq!(state.store.meetups().await.len(), 4);
}

#[tokio::test]
async fn meetup_creation_requires_a_connected_session() {
    let state = app_state(SimulatedLedger::instant().with_initial_balance(400));
    let session = state.sessions.connect().await.unwrap();
    state.sessions.verify(&session.session_id).await.unwrap();
    state.sessions.disconnect(&session.session_id).await.unwrap();

    let err = routes::meetups::create_meetup(
        State(state),
        Json(routes::meetups::CreateMeetupRequest {
            session_id: session.session_id,
            draft: draft(),
        }),
    )
    .await
    .err()
    .expect("disconnected");
    assert!(matches!(err.0, Error::NotConnected));
}

// ===========================================================================
// Staking flow
// ===========================================================================

#[tokio::test]
async fn stake_debits_the_session_and_grows_the_pool() {
    let state = app_state(SimulatedLedger::instant().with_initial_balance(400));
    let session = state.sessions.connect().await.unwrap();

    let Json(response) = routes::meetups::stake(
        State(state.clone()),
        Path("1".to_string()),
        Json(routes::meetups::StakeRequest {
            session_id: session.session_id.clone(),
            amount: 300,
        }),
    )
    .await
    .expect("stake succeeds");

    assert_eq!(response.receipt.staked, 300);
    assert_eq!(response.receipt.new_balance, 100);
    assert_eq!(response.meetup.current_staked, 650);
    assert_eq!(response.meetup.participants, 25);
    assert_eq!(
        state.sessions.balance(&session.session_id).await.unwrap(),
        100
    );
}

#[tokio::test]
async fn stake_over_balance_changes_nothing() {
    let state = app_state(SimulatedLedger::instant().with_initial_balance(200));
    let session = state.sessions.connect().await.unwrap();

    let err = routes::meetups::stake(
        State(state.clone()),
        Path("1".to_string()),
        Json(routes::meetups::StakeRequest {
            session_id: session.session_id.clone(),
            amount: 201,
        }),
    )
    .await
    .err()
    .expect("over balance");
    assert!(matches!(err.0, Error::InsufficientBalance { .. }));

    let meetup = state
        .store
        .meetup(&minnie_core::MeetupId::new("1"))
        .await
        .unwrap();
    assert_eq!(meetup.current_staked, 350);
    assert_eq!(meetup.participants, 24);
    assert_eq!(
        state.sessions.balance(&session.session_id).await.unwrap(),
        200
    );
}

#[tokio::test]
async fn stake_on_unknown_meetup_is_not_found() {
    let state = app_state(SimulatedLedger::instant().with_initial_balance(200));
    let session = state.sessions.connect().await.unwrap();

    let err = routes::meetups::stake(
        State(state.clone()),
        Path("missing".to_string()),
        Json(routes::meetups::StakeRequest {
            session_id: session.session_id.clone(),
            amount: 50,
        }),
    )
    .await
    .err()
    .expect("unknown meetup");
    assert!(matches!(err.0, Error::NotFound { .. }));
    assert_eq!(
        state.sessions.balance(&session.session_id).await.unwrap(),
        200,
        "no debit without a target"
    );
}

// ===========================================================================
// Fandom Q&A
// ===========================================================================

#[tokio::test]
async fn ask_rejects_an_empty_question() {
    let state = app_state(SimulatedLedger::instant());
    let err = routes::fandoms::ask(
        State(state),
        Json(routes::fandoms::AskRequest {
            fandom: minnie_domain::Fandom {
                name: "ARMY".into(),
                fanbase: "ARMY".into(),
                artist: "BTS".into(),
            },
            question: "   ".into(),
        }),
    )
    .await
    .err()
    .expect("blank question");
    assert!(err.0.is_validation());
}

#[tokio::test]
async fn ask_answers_through_the_configured_oracle() {
    let state = app_state(SimulatedLedger::instant());
    let Json(answer) = routes::fandoms::ask(
        State(state),
        Json(routes::fandoms::AskRequest {
            fandom: minnie_domain::Fandom {
                name: "ARMY".into(),
                fanbase: "ARMY".into(),
                artist: "BTS".into(),
            },
            question: "What records did they break?".into(),
        }),
    )
    .await
    .expect("canned oracle answers");
    assert!(answer.response.contains("ARMY"));
}

// ===========================================================================
// Referral scans
// ===========================================================================

#[tokio::test]
async fn qr_scan_is_recorded_for_known_referrers_only() {
    let state = app_state(SimulatedLedger::instant());

    let Json(scan) = routes::referral::scan(State(state.clone()), Path("u1".to_string()))
        .await
        .expect("alice exists");
    assert_eq!(scan.referrer.as_str(), "u1");

    let err = routes::referral::scan(State(state.clone()), Path("u404".to_string()))
        .await
        .err()
        .expect("invalid referral code");
    assert!(matches!(err.0, Error::NotFound { .. }));
    assert_eq!(state.store.referral_scans().await.len(), 1);
}
