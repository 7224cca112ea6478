//! Wallet session lifecycle

use crate::error::ApiResult;
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::Json;
use minnie_core::{SessionId, UserId};
use minnie_domain::User;
use minnie_wallet::{ConversionReceipt, Currency, SessionSnapshot};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ConnectRequest {
    pub display_name: Option<String>,
    /// Referrer attribution carried over from a scanned QR link.
    pub referred_by: Option<UserId>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectResponse {
    pub session: SessionSnapshot,
    pub user: User,
}

/// Connect a wallet and make sure a user record exists for the
/// account. A name is derived from the address when none is given.
pub async fn connect(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ConnectRequest>,
) -> ApiResult<Json<ConnectResponse>> {
    let session = state.sessions.connect().await?;
    let account = session
        .account
        .clone()
        .ok_or(minnie_core::Error::NotConnected)?;

    let name = req.display_name.unwrap_or_else(|| {
        let prefix: String = account.as_str().chars().take(6).collect();
        format!("fan-{}", prefix)
    });
    let user = state
        .store
        .register_user(&name, &account, req.referred_by.as_ref())
        .await?;

    Ok(Json(ConnectResponse { session, user }))
}

pub async fn get_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<SessionSnapshot>> {
    Ok(Json(state.sessions.snapshot(&SessionId::new(id)).await?))
}

pub async fn disconnect(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<SessionSnapshot>> {
    Ok(Json(state.sessions.disconnect(&SessionId::new(id)).await?))
}

/// Run the simulated identity-verification flow for this session.
pub async fn verify(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<SessionSnapshot>> {
    Ok(Json(state.sessions.verify(&SessionId::new(id)).await?))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvertRequest {
    pub amount: u64,
    pub currency: Currency,
}

pub async fn convert(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<ConvertRequest>,
) -> ApiResult<Json<ConversionReceipt>> {
    let receipt = state
        .sessions
        .convert(&SessionId::new(id), req.amount, req.currency)
        .await?;
    Ok(Json(receipt))
}
