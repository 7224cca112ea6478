//! Gateway configuration
//!
//! Loaded from CLI flags and environment at startup, falls back to
//! defaults everywhere.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    pub port: u16,
    pub bind: BindMode,
    /// Public origin embedded in referral QR payloads.
    pub origin: String,
}

fn default_port() -> u16 {
    8787
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            bind: BindMode::default(),
            origin: format!("http://localhost:{}", default_port()),
        }
    }
}

/// Bind mode for the gateway
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BindMode {
    /// Loopback only
    #[default]
    Local,
    /// All interfaces
    Lan,
}

impl BindMode {
    pub fn host(&self) -> [u8; 4] {
        match self {
            Self::Local => [127, 0, 0, 1],
            Self::Lan => [0, 0, 0, 0],
        }
    }
}

impl std::str::FromStr for BindMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "local" | "localhost" => Ok(Self::Local),
            "lan" | "all" => Ok(Self::Lan),
            other => Err(format!("unknown bind mode: {}", other)),
        }
    }
}
