//! Tests for minnie-oracle: error taxonomy, failure classification, and
//! the offline provider

use minnie_domain::Fandom;
use minnie_oracle::*;

fn fandom(name: &str, fanbase: &str, artist: &str) -> Fandom {
    Fandom {
        name: name.into(),
        fanbase: fanbase.into(),
        artist: artist.into(),
    }
}

// ===========================================================================
// Failure classification
// ===========================================================================

#[test]
fn http_429_is_quota() {
    let err = openai::classify_failure(429, r#"{"error":{"message":"Rate limit reached","code":"rate_limit_exceeded"}}"#);
    assert!(matches!(err, OracleError::QuotaExceeded(_)));
}

#[test]
fn insufficient_quota_code_is_quota_regardless_of_status() {
    let err = openai::classify_failure(
        400,
        r#"{"error":{"message":"You exceeded your current quota","code":"insufficient_quota"}}"#,
    );
    assert!(matches!(err, OracleError::QuotaExceeded(_)));
}

#[test]
fn quota_keyword_in_message_is_quota() {
    let err = openai::classify_failure(500, r#"{"error":{"message":"monthly quota reached"}}"#);
    assert!(matches!(err, OracleError::QuotaExceeded(_)));
}

#[test]
fn http_401_is_auth_failure() {
    let err = openai::classify_failure(401, r#"{"error":{"message":"Incorrect API key"}}"#);
    assert!(matches!(err, OracleError::AuthFailed(_)));
}

#[test]
fn other_failures_keep_status_and_message() {
    let err = openai::classify_failure(503, "upstream unavailable");
    match err {
        OracleError::RequestFailed(msg) => {
            assert!(msg.contains("503"));
            assert!(msg.contains("upstream unavailable"));
        }
        other => panic!("expected RequestFailed, got {:?}", other),
    }
}

#[test]
fn quota_maps_to_a_distinct_core_error() {
    let core: minnie_core::Error = OracleError::QuotaExceeded("quota".into()).into();
    assert!(matches!(core, minnie_core::Error::QuotaExhausted(_)));

    let core: minnie_core::Error = OracleError::RequestFailed("boom".into()).into();
    assert!(matches!(core, minnie_core::Error::Oracle(_)));
}

// ===========================================================================
// Canned provider
// ===========================================================================

#[tokio::test]
async fn known_fandom_answers_from_the_blurb_table() {
    let oracle = CannedOracle::new();
    let answer = oracle
        .ask(
            &fandom("BeyHive", "BeyHive", "Beyoncé"),
            "When did this fandom start?",
        )
        .await
        .expect("canned answer");
    assert!(answer.contains("BeyHive"));
    assert!(answer.contains("2011"));
    assert!(answer.contains("When did this fandom start?"));
}

#[tokio::test]
async fn unknown_fandom_gets_the_generic_answer() {
    let oracle = CannedOracle::new();
    let answer = oracle
        .ask(
            &fandom("Lunatics", "Moonwalkers", "Luna"),
            "What are they like?",
        )
        .await
        .expect("generic answer");
    assert!(answer.contains("Moonwalkers"));
    assert!(answer.contains("Luna"));
}

#[tokio::test]
async fn canned_provider_reports_its_name() {
    let oracle = CannedOracle::new();
    assert_eq!(oracle.name(), "canned");
}
