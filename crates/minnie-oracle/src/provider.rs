//! Oracle provider trait

use minnie_domain::Fandom;

/// Result type for oracle operations
pub type OracleResult<T> = Result<T, OracleError>;

/// Oracle error types. Quota exhaustion is its own variant so callers
/// can surface it as a distinct user-facing condition.
#[derive(Debug, thiserror::Error)]
pub enum OracleError {
    #[error("request failed: {0}")]
    RequestFailed(String),

    #[error("authentication failed: {0}")]
    AuthFailed(String),

    #[error("quota exceeded: {0}")]
    QuotaExceeded(String),

    #[error("invalid response: {0}")]
    InvalidResponse(String),

    #[error("network error: {0}")]
    NetworkError(#[from] reqwest::Error),
}

impl From<OracleError> for minnie_core::Error {
    fn from(e: OracleError) -> Self {
        match e {
            OracleError::QuotaExceeded(message) => Self::QuotaExhausted(message),
            other => Self::Oracle(other.to_string()),
        }
    }
}

/// Fandom Q&A provider trait
#[async_trait::async_trait]
pub trait FandomOracle: Send + Sync {
    fn name(&self) -> &str;

    /// Answer a question about a fandom. Succeeds with the response
    /// text or fails with a categorized error; no partial output.
    async fn ask(&self, fandom: &Fandom, question: &str) -> OracleResult<String>;
}
