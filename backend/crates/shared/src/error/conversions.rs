//! Error conversions
//!
//! HTTP rendering of [`AppError`] behind the `axum` feature.

use serde::{Deserialize, Serialize};

use super::app_error::AppError;

/// Wire shape of every error response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl From<&AppError> for ErrorBody {
    fn from(err: &AppError) -> Self {
        Self {
            error: err.message().to_owned(),
        }
    }
}

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use axum::http::StatusCode;

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        (status, Json(ErrorBody::from(&self))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_body_shape() {
        let body = ErrorBody::from(&AppError::bad_request("Missing name"));
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"error":"Missing name"}"#
        );
    }

    #[cfg(feature = "axum")]
    #[tokio::test]
    async fn test_into_response() {
        use axum::http::StatusCode;
        use axum::response::IntoResponse;

        let response = AppError::not_found().into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: ErrorBody = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body.error, "Not found");
    }
}
