use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// Errors returned by the Cosmic content API
#[derive(Error, Debug)]
pub enum CosmicError {
    #[error("Not authorized: {0}")]
    Unauthorized(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Server error: {0}")]
    ServerError(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

impl CosmicError {
    pub fn from_status(status: StatusCode, body: String) -> Self {
        // Cosmic answers with {"message": "...", "status": 404}; fall back to the raw body.
        let message = serde_json::from_str::<ErrorBody>(&body)
            .map(|b| b.message)
            .unwrap_or(body);
        let msg = if message.trim().is_empty() {
            status.canonical_reason().unwrap_or("Unknown error").to_string()
        } else {
            message
        };

        match status {
            StatusCode::UNAUTHORIZED => CosmicError::Unauthorized(msg),
            StatusCode::FORBIDDEN => CosmicError::Unauthorized(msg),
            StatusCode::NOT_FOUND => CosmicError::NotFound(msg),
            StatusCode::BAD_REQUEST => CosmicError::BadRequest(msg),
            status if status.is_server_error() => CosmicError::ServerError(msg),
            status if status.is_client_error() => CosmicError::BadRequest(msg),
            _ => CosmicError::Unknown(msg),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, CosmicError::NotFound(_))
    }
}
