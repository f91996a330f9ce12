use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

pub const METHOD_NOT_ALLOWED_MSG: &str = "Method not allowed";
pub const INVALID_CLIENT_ID_MSG: &str = "Invalid client ID";
pub const CLIENT_NOT_FOUND_MSG: &str = "Client not found";
pub const BAD_REQUEST_MSG: &str = "Bad request";

/// Request failures surfaced to the caller as plain-text bodies.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AppError {
    #[error("method not allowed")]
    MethodNotAllowed,
    #[error("invalid client id: {0:?}")]
    InvalidClientId(String),
    #[error("malformed request body: {0}")]
    BadRequest(String),
    #[error("client {0} not found")]
    ClientNotFound(i64),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::InvalidClientId(_) | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::ClientNotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    pub fn public_message(&self) -> &'static str {
        match self {
            Self::MethodNotAllowed => METHOD_NOT_ALLOWED_MSG,
            Self::InvalidClientId(_) => INVALID_CLIENT_ID_MSG,
            Self::BadRequest(_) => BAD_REQUEST_MSG,
            Self::ClientNotFound(_) => CLIENT_NOT_FOUND_MSG,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::debug!(error = %self, "request rejected");
        (self.status(), self.public_message()).into_response()
    }
}
