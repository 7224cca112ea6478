//! Shared gateway state

use minnie_core::GatewayConfig;
use minnie_domain::Store;
use minnie_oracle::FandomOracle;
use minnie_wallet::SessionManager;
use std::sync::Arc;

pub struct AppState {
    pub store: Arc<Store>,
    pub sessions: Arc<SessionManager>,
    pub oracle: Arc<dyn FandomOracle>,
    pub config: GatewayConfig,
}
