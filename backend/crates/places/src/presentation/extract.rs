//! Request Extractors

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

use crate::error::PlacesError;

/// JSON object body
///
/// Unlike `axum::Json` this ignores the `Content-Type` header and rejects
/// with [`PlacesError::NotJson`] when the body is empty, unparseable or not
/// an object. A well-formed object with the wrong shape is rejected with
/// [`PlacesError::InvalidBody`].
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = PlacesError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|e| {
            tracing::debug!(error = %e, "Failed to read request body");
            PlacesError::NotJson
        })?;

        let value: serde_json::Value = serde_json::from_slice(&bytes)?;
        if !value.is_object() {
            return Err(PlacesError::NotJson);
        }

        Ok(JsonBody(serde_json::from_value(value)?))
    }
}
