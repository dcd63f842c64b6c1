//! JSON body extraction that keeps malformed input inside the error
//! envelope.

use crate::ApiError;

use std::panic::Location;

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use error_location::ErrorLocation;

/// Drop-in replacement for `axum::Json` on the request side. A body that
/// fails to deserialize (missing field, wrong type, invalid JSON) answers
/// 400 `VALIDATION_ERROR`, not axum's plain-text 422.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    axum::Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match axum::Json::<T>::from_request(req, state).await {
            Ok(axum::Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(ApiError::Validation {
                message: rejection.body_text(),
                field: None,
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}
