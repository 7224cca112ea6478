//! Fandom catalog and AI Q&A

use crate::error::ApiResult;
use crate::state::AppState;
use axum::extract::State;
use axum::Json;
use minnie_core::Error;
use minnie_domain::Fandom;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub async fn list_fandoms(State(state): State<Arc<AppState>>) -> Json<Vec<Fandom>> {
    Json(state.store.fandoms().to_vec())
}

#[derive(Deserialize)]
pub struct AskRequest {
    pub fandom: Fandom,
    pub question: String,
}

#[derive(Serialize)]
pub struct AskResponse {
    pub response: String,
}

pub async fn ask(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AskRequest>,
) -> ApiResult<Json<AskResponse>> {
    if req.question.trim().is_empty() {
        return Err(Error::validation("question must not be empty").into());
    }
    let response = state
        .oracle
        .ask(&req.fandom, req.question.trim())
        .await
        .map_err(Error::from)?;
    Ok(Json(AskResponse { response }))
}
