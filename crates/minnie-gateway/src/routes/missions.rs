//! Mission catalog and completion

use crate::error::ApiResult;
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::Json;
use minnie_core::{Error, MissionId, UserId};
use minnie_domain::{CompletionReceipt, Mission};
use serde::Deserialize;
use std::sync::Arc;

pub async fn list_missions(State(state): State<Arc<AppState>>) -> Json<Vec<Mission>> {
    Json(state.store.missions().await)
}

pub async fn active_missions(State(state): State<Arc<AppState>>) -> Json<Vec<Mission>> {
    Json(state.store.active_missions().await)
}

pub async fn featured_missions(State(state): State<Arc<AppState>>) -> Json<Vec<Mission>> {
    Json(state.store.featured_missions().await)
}

pub async fn get_mission(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Mission>> {
    let mission_id = MissionId::new(id.as_str());
    state
        .store
        .mission(&mission_id)
        .await
        .map(Json)
        .ok_or_else(|| Error::not_found("mission", id).into())
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompleteRequest {
    pub user_id: UserId,
}

pub async fn complete_mission(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<CompleteRequest>,
) -> ApiResult<Json<CompletionReceipt>> {
    let receipt = state
        .store
        .complete_mission(&req.user_id, &MissionId::new(id))
        .await?;
    Ok(Json(receipt))
}
