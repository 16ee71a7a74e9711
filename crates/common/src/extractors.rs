//! Custom axum extractors for Linkshelf

use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;

use crate::Error;

/// JSON extractor whose rejections go through the common error responder.
///
/// Replaces `Json<T>` in handlers so that malformed bodies, wrong field
/// types and missing content types all answer with a 400 plain-text message
/// instead of axum's default 415/422 responses.
#[derive(Debug)]
pub struct ApiJson<T>(pub T);

impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e: JsonRejection| {
                tracing::warn!(error = %e, "Rejected request body");
                Error::Validation(e.body_text())
            })?;
        Ok(ApiJson(value))
    }
}
