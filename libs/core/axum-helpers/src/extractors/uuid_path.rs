//! UUID path parameter extractor.

use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
    response::{IntoResponse, Response},
};
use uuid::Uuid;

/// Extractor for a single UUID path parameter.
///
/// Parses the path segment into a [`Uuid`], rejecting with a 400
/// `{"error": ...}` body when the value is not a valid UUID.
///
/// # Example
/// ```ignore
/// async fn update(UuidPath(id): UuidPath) -> String {
///     format!("updating {id}")
/// }
/// ```
pub struct UuidPath(pub Uuid);

impl<S> FromRequestParts<S> for UuidPath
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| e.into_response())?;

        raw.parse::<Uuid>()
            .map(UuidPath)
            .map_err(|_| AppError::BadRequest(format!("Invalid id: {}", raw)).into_response())
    }
}
