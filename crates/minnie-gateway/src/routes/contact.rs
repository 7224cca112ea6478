//! Contact form submission

use crate::error::ApiResult;
use crate::state::AppState;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use minnie_domain::ContactSubmission;
use serde_json::{json, Value};
use std::sync::Arc;

pub async fn submit(
    State(state): State<Arc<AppState>>,
    Json(submission): Json<ContactSubmission>,
) -> ApiResult<(StatusCode, Json<Value>)> {
    state.store.submit_contact(submission).await?;
    Ok((StatusCode::CREATED, Json(json!({ "status": "received" }))))
}
