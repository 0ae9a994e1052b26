//! Custom Extractors
//!
//! Axum extractors for request parsing.

use axum::{
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::application::dto::RequestBody;
use crate::shared::error::AppError;
use crate::shared::validation::validation_error;

/// Validated JSON extractor
///
/// Deserializes the body into `T` and runs its `validator` rules before the
/// handler sees it. Any failure (syntax, missing field, wrong type, failed
/// rule) becomes a 400 carrying `T::INVALID`.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate + RequestBody + Send,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                tracing::debug!(error = %rejection.body_text(), "Rejected request body");
                AppError::bad_request(T::INVALID)
            })?;

        value
            .validate()
            .map_err(|errors| validation_error(errors, T::INVALID))?;

        Ok(ValidatedJson(value))
    }
}
