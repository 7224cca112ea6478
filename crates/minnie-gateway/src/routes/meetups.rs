//! Meetup browsing, creation, and staking

use crate::error::ApiResult;
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::Json;
use minnie_core::{Error, MeetupId, SessionId};
use minnie_domain::{Meetup, MeetupDraft, MeetupStatus};
use minnie_wallet::{SessionState, StakeReceipt};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub async fn list_meetups(State(state): State<Arc<AppState>>) -> Json<Vec<Meetup>> {
    Json(state.store.meetups().await)
}

pub async fn get_meetup(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Meetup>> {
    let meetup_id = MeetupId::new(id.as_str());
    state
        .store
        .meetup(&meetup_id)
        .await
        .map(Json)
        .ok_or_else(|| Error::not_found("meetup", id).into())
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMeetupRequest {
    pub session_id: SessionId,
    #[serde(flatten)]
    pub draft: MeetupDraft,
}

/// Creation is gated on the session's verification flag; an unverified
/// organizer is routed through the verification step first.
pub async fn create_meetup(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateMeetupRequest>,
) -> ApiResult<Json<Meetup>> {
    let snapshot = state.sessions.snapshot(&req.session_id).await?;
    if snapshot.state != SessionState::Connected {
        return Err(Error::NotConnected.into());
    }
    if !snapshot.verified {
        return Err(Error::VerificationRequired.into());
    }

    let account = snapshot.account.ok_or(Error::NotConnected)?;
    let organizer = match state.store.user_by_address(&account).await {
        Some(user) => user.name,
        None => account.to_string(),
    };

    let meetup = state.store.create_meetup(req.draft, &organizer).await?;
    Ok(Json(meetup))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StakeRequest {
    pub session_id: SessionId,
    pub amount: u64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StakeResponse {
    pub meetup: Meetup,
    pub receipt: StakeReceipt,
}

/// Stake session points on a meetup: validate the target, let the
/// ledger confirm and debit the session, then grow the meetup pool.
pub async fn stake(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<StakeRequest>,
) -> ApiResult<Json<StakeResponse>> {
    let meetup_id = MeetupId::new(id.as_str());
    let meetup = state
        .store
        .meetup(&meetup_id)
        .await
        .ok_or_else(|| Error::not_found("meetup", id))?;
    if meetup.status == MeetupStatus::Completed {
        return Err(Error::validation("meetup is already completed").into());
    }

    let receipt = state
        .sessions
        .debit_stake(&req.session_id, &meetup_id, req.amount)
        .await?;
    let meetup = state.store.commit_stake(&meetup_id, req.amount).await?;

    Ok(Json(StakeResponse { meetup, receipt }))
}
