use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum InventoryError {
    #[error("Product {0} not found")]
    NotFound(Uuid),

    #[error("Product with name '{0}' already exists")]
    Conflict(String),

    #[error("Invalid input: {0}")]
    Invalid(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Template error: {0}")]
    Render(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type InventoryResult<T> = Result<T, InventoryError>;

/// Convert InventoryError to AppError for standardized error responses
impl From<InventoryError> for AppError {
    fn from(err: InventoryError) -> Self {
        match err {
            InventoryError::NotFound(id) => AppError::NotFound(format!("Product {} not found", id)),
            // Duplicate names map to 400 on this surface, not 409.
            InventoryError::Conflict(name) => {
                AppError::BadRequest(format!("Product with name '{}' already exists", name))
            }
            InventoryError::Invalid(msg) => AppError::BadRequest(msg),
            InventoryError::Database(msg) => AppError::InternalServerError(msg),
            InventoryError::Render(msg) => AppError::InternalServerError(msg),
            InventoryError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for InventoryError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<mongodb::error::Error> for InventoryError {
    fn from(err: mongodb::error::Error) -> Self {
        InventoryError::Database(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_status_mapping() {
        let id = Uuid::now_v7();
        let cases = [
            (InventoryError::NotFound(id), StatusCode::NOT_FOUND),
            (
                InventoryError::Conflict("Apples".into()),
                StatusCode::BAD_REQUEST,
            ),
            (
                InventoryError::Invalid("bad".into()),
                StatusCode::BAD_REQUEST,
            ),
            (
                InventoryError::Database("down".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                InventoryError::Render("broken".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(err.into_response().status(), expected);
        }
    }
}
