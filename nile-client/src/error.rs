//! Client error types

use shared::error::{AppError, ErrorCode};
use thiserror::Error;

/// Errors from a backend call
///
/// Status and decode failures carry the endpoint path they came from.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport failure (connect, TLS, timeout, body read)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Base URL could not be combined with an endpoint
    #[error("Invalid backend URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    /// 401; the token is missing or expired
    #[error("Authentication required")]
    Unauthorized,

    /// 403
    #[error("Access to {path} denied: {body}")]
    Forbidden { path: String, body: String },

    /// 404
    #[error("{path} not found")]
    NotFound { path: String },

    /// 400; the backend refused the parameters
    #[error("{path} rejected the request: {body}")]
    Rejected { path: String, body: String },

    /// Any other non-success status
    #[error("{path} failed with status {status}: {body}")]
    Server {
        path: String,
        status: u16,
        body: String,
    },

    /// Success status with nothing to decode
    #[error("{path} returned an empty body")]
    EmptyResponse { path: String },

    /// Body was not the expected JSON shape
    #[error("Could not decode {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

impl From<ClientError> for AppError {
    fn from(err: ClientError) -> Self {
        let message = err.to_string();
        match err {
            ClientError::Http(e) if e.is_timeout() => {
                AppError::with_message(ErrorCode::TimeoutError, message)
            }
            ClientError::Http(_) => AppError::with_message(ErrorCode::NetworkError, message),
            ClientError::InvalidUrl { url, .. } => AppError::config(message).with_detail("url", url),
            ClientError::Unauthorized => AppError::new(ErrorCode::NotAuthenticated),
            ClientError::Forbidden { path, .. } => {
                AppError::permission_denied(message).with_detail("path", path)
            }
            ClientError::NotFound { path } => AppError::not_found(path),
            ClientError::Rejected { path, .. } => {
                AppError::validation(message).with_detail("path", path)
            }
            ClientError::Server { path, status, .. } => AppError::internal(message)
                .with_detail("path", path)
                .with_detail("status", status),
            ClientError::EmptyResponse { path } | ClientError::Decode { path, .. } => {
                AppError::with_message(ErrorCode::InvalidFormat, message).with_detail("path", path)
            }
        }
    }
}
