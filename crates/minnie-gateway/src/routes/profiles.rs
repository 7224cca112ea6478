//! Profile storage keyed by wallet account

use crate::error::ApiResult;
use crate::state::AppState;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::header::CONTENT_TYPE;
use axum::http::HeaderMap;
use axum::Json;
use minnie_core::{AccountId, Error};
use minnie_domain::{Profile, ProfileUpdate};
use serde_json::{json, Value};
use std::sync::Arc;

pub async fn get_profile(
    State(state): State<Arc<AppState>>,
    Path(account): Path<String>,
) -> Json<Profile> {
    Json(state.store.profile(&AccountId::new(account)).await)
}

pub async fn update_profile(
    State(state): State<Arc<AppState>>,
    Path(account): Path<String>,
    Json(update): Json<ProfileUpdate>,
) -> Json<Profile> {
    Json(
        state
            .store
            .update_profile(&AccountId::new(account), update)
            .await,
    )
}

/// Raw image upload; content type and size are validated before the
/// reference is stored.
pub async fn upload_avatar(
    State(state): State<Arc<AppState>>,
    Path(account): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> ApiResult<Json<Value>> {
    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| Error::validation("missing content-type header"))?;

    let url = state
        .store
        .set_avatar(&AccountId::new(account), content_type, body.len())
        .await?;
    Ok(Json(json!({ "avatarUrl": url })))
}
