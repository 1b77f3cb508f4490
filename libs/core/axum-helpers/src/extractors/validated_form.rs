//! Urlencoded form extractor with automatic validation.

use crate::errors::AppError;
use axum::{
    extract::{FromRequest, Request},
    response::{IntoResponse, Response},
    Form,
};
use serde::de::DeserializeOwned;
use validator::Validate;

/// Form extractor with automatic validation.
///
/// Deserializes an `application/x-www-form-urlencoded` body and runs the
/// `validator` rules on the result. Both a malformed body and a failed
/// validation reject with 400 and the standard `{"error": ...}` body.
///
/// # Example
/// ```ignore
/// #[derive(Deserialize, Validate)]
/// struct CreateWidget {
///     #[validate(length(min = 1))]
///     name: String,
/// }
///
/// async fn create(ValidatedForm(input): ValidatedForm<CreateWidget>) { /* ... */ }
/// ```
pub struct ValidatedForm<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedForm<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Form(data) = Form::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()).into_response())?;

        data.validate()
            .map_err(|e| AppError::BadRequest(e.to_string()).into_response())?;

        Ok(ValidatedForm(data))
    }
}
