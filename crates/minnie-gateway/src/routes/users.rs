//! User lookups, the leaderboard, and referral QR payloads

use crate::error::ApiResult;
use crate::state::AppState;
use axum::extract::{Path, Query, State};
use axum::Json;
use minnie_core::{Error, MissionId, UserId};
use minnie_domain::{referral_url, Mission, User};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

pub async fn leaderboard(State(state): State<Arc<AppState>>) -> Json<Vec<User>> {
    Json(state.store.leaderboard().await)
}

pub async fn get_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<User>> {
    let user_id = UserId::new(id.as_str());
    state
        .store
        .user(&user_id)
        .await
        .map(Json)
        .ok_or_else(|| Error::not_found("user", id).into())
}

pub async fn user_missions(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Json<Vec<Mission>> {
    Json(state.store.user_missions(&UserId::new(id)).await)
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferralUrlQuery {
    pub mission_id: Option<String>,
}

/// The URL a QR image encodes. Image rendering itself is the client's
/// concern.
pub async fn user_referral_url(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Query(query): Query<ReferralUrlQuery>,
) -> ApiResult<Json<Value>> {
    let user_id = UserId::new(id.as_str());
    if state.store.user(&user_id).await.is_none() {
        return Err(Error::not_found("user", id).into());
    }
    let mission = query.mission_id.map(MissionId::new);
    let url = referral_url(&state.config.origin, &user_id, mission.as_ref());
    Ok(Json(json!({ "url": url })))
}
