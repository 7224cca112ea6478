//! Referral QR landing paths
//!
//! Visiting `/qr/<userId>[/<missionId>]` records a scan against the
//! referrer and reports success or failure. Referral counts are never
//! mutated here; crediting happens on the referred user's first
//! mission completion.

use crate::error::ApiResult;
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::Json;
use minnie_core::{MissionId, UserId};
use minnie_domain::ReferralScan;
use std::sync::Arc;

pub async fn scan(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> ApiResult<Json<ReferralScan>> {
    let scan = state
        .store
        .record_referral_scan(&UserId::new(user_id), None)
        .await?;
    Ok(Json(scan))
}

pub async fn scan_mission(
    State(state): State<Arc<AppState>>,
    Path((user_id, mission_id)): Path<(String, String)>,
) -> ApiResult<Json<ReferralScan>> {
    let scan = state
        .store
        .record_referral_scan(&UserId::new(user_id), Some(MissionId::new(mission_id)))
        .await?;
    Ok(Json(scan))
}
