//! Request extractors shared by the `/clients/{id}` handlers

use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use crate::domain::client::{parse_client_id, ClientId};
use crate::errors::AppError;

/// The validated id taken from the path suffix after `/clients/`.
///
/// A missing segment, extra segments, or undecodable percent-escapes all reject with
/// [`AppError::InvalidClientId`], the same as a non-positive number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClientIdParam(pub ClientId);

impl<S> FromRequestParts<S> for ClientIdParam
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let raw = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::InvalidClientId(rejection.body_text()))?;
        parse_client_id(&raw.0).map(Self)
    }
}
