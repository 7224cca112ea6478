//! Error types for Minniemissions
//!
//! Three families, recovered at the boundary of the triggering action:
//! validation errors (no mutation performed), connectivity errors
//! (operation aborted with a user-readable category), and not-found
//! errors (reported failure, never a panic).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("validation failed: {0}")]
    Validation(String),

    #[error("insufficient balance: have {available} VP, need {requested} VP")]
    InsufficientBalance { available: u64, requested: u64 },

    #[error("wallet not connected")]
    NotConnected,

    #[error("no wallet extension found")]
    ExtensionMissing,

    #[error("no accounts found in wallet")]
    NoAccounts,

    #[error("wallet error: {0}")]
    Wallet(String),

    #[error("ledger error: {0}")]
    Ledger(String),

    #[error("identity verification required")]
    VerificationRequired,

    #[error("oracle error: {0}")]
    Oracle(String),

    #[error("oracle quota exhausted: {0}")]
    QuotaExhausted(String),

    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    #[error("json error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn validation(reason: impl Into<String>) -> Self {
        Self::Validation(reason.into())
    }

    pub fn not_found(kind: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            id: id.into(),
        }
    }

    pub fn wallet(message: impl Into<String>) -> Self {
        Self::Wallet(message.into())
    }

    pub fn ledger(message: impl Into<String>) -> Self {
        Self::Ledger(message.into())
    }

    /// Whether this error rejects bad input before any mutation.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::Validation(_) | Self::InsufficientBalance { .. }
        )
    }
}
