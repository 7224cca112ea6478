//! Error-to-response mapping
//!
//! Every failure recovers at the handler boundary as a JSON notice.
//! Wallet connectivity errors carry the user-facing hint the original
//! toasts showed.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use minnie_core::Error;
use serde_json::json;

#[derive(Debug)]
pub struct ApiError(pub Error);

pub type ApiResult<T> = std::result::Result<T, ApiError>;

impl From<Error> for ApiError {
    fn from(e: Error) -> Self {
        Self(e)
    }
}

fn hint_for(error: &Error) -> Option<&'static str> {
    match error {
        Error::ExtensionMissing => {
            Some("You can download it from https://polkadot.js.org/extension/")
        }
        Error::NoAccounts => {
            Some("Please create or import an account in your Polkadot wallet.")
        }
        _ => None,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            Error::Validation(_) | Error::InsufficientBalance { .. } => StatusCode::BAD_REQUEST,
            Error::NotConnected => StatusCode::UNAUTHORIZED,
            Error::VerificationRequired => StatusCode::FORBIDDEN,
            Error::NotFound { .. } => StatusCode::NOT_FOUND,
            Error::QuotaExhausted(_) => StatusCode::TOO_MANY_REQUESTS,
            Error::ExtensionMissing
            | Error::NoAccounts
            | Error::Wallet(_)
            | Error::Ledger(_)
            | Error::Oracle(_) => StatusCode::BAD_GATEWAY,
            Error::JsonError(_) | Error::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let mut body = json!({ "error": self.0.to_string() });
        if let Some(hint) = hint_for(&self.0) {
            body["hint"] = json!(hint);
        }
        (status, Json(body)).into_response()
    }
}
