//! Router assembly and server startup

use crate::routes;
use crate::state::AppState;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/api/missions", get(routes::missions::list_missions))
        .route("/api/missions/active", get(routes::missions::active_missions))
        .route("/api/missions/featured", get(routes::missions::featured_missions))
        .route("/api/missions/:id", get(routes::missions::get_mission))
        .route("/api/missions/:id/complete", post(routes::missions::complete_mission))
        .route("/api/leaderboard", get(routes::users::leaderboard))
        .route("/api/users/:id", get(routes::users::get_user))
        .route("/api/users/:id/missions", get(routes::users::user_missions))
        .route("/api/users/:id/referral-url", get(routes::users::user_referral_url))
        .route("/api/fandoms", get(routes::fandoms::list_fandoms))
        .route("/api/fandoms/ask", post(routes::fandoms::ask))
        .route(
            "/api/meetups",
            get(routes::meetups::list_meetups).post(routes::meetups::create_meetup),
        )
        .route("/api/meetups/:id", get(routes::meetups::get_meetup))
        .route("/api/meetups/:id/stake", post(routes::meetups::stake))
        .route("/api/session/connect", post(routes::session::connect))
        .route("/api/session/:id", get(routes::session::get_session))
        .route("/api/session/:id/disconnect", post(routes::session::disconnect))
        .route("/api/session/:id/verify", post(routes::session::verify))
        .route("/api/session/:id/convert", post(routes::session::convert))
        .route("/qr/:user_id", get(routes::referral::scan))
        .route("/qr/:user_id/:mission_id", get(routes::referral::scan_mission))
        .route("/api/contact", post(routes::contact::submit))
        .route(
            "/api/profiles/:account",
            get(routes::profiles::get_profile).put(routes::profiles::update_profile),
        )
        .route("/api/profiles/:account/avatar", post(routes::profiles::upload_avatar))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

pub async fn start_gateway(state: Arc<AppState>) -> anyhow::Result<()> {
    let addr = SocketAddr::from((state.config.bind.host(), state.config.port));
    let app = build_router(state.clone());

    info!(
        "minnie-gateway listening on {} (oracle: {})",
        addr,
        state.oracle.name()
    );
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

async fn health_handler() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}
