//! Places Error Types
//!
//! This module provides places-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Places-specific result type alias
pub type PlacesResult<T> = Result<T, PlacesError>;

/// Places-specific error variants
#[derive(Debug, Error)]
pub enum PlacesError {
    #[error("Place not found")]
    PlaceNotFound,

    #[error("City not found")]
    CityNotFound,

    #[error("User not found")]
    UserNotFound,

    #[error("Amenity not found")]
    AmenityNotFound,

    /// The amenity exists but is not linked to the place
    #[error("Amenity is not linked to place")]
    AmenityNotLinked,

    /// Body absent, unparseable, or not a JSON object
    #[error("Not a JSON")]
    NotJson,

    /// Required body field absent
    #[error("Missing {0}")]
    MissingField(&'static str),

    /// Body is JSON but does not have the expected shape
    #[error("{0}")]
    InvalidBody(String),

    /// Seed document could not be read or is inconsistent
    #[error("Invalid seed data: {0}")]
    Seed(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl PlacesError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            PlacesError::PlaceNotFound
            | PlacesError::CityNotFound
            | PlacesError::UserNotFound
            | PlacesError::AmenityNotFound
            | PlacesError::AmenityNotLinked => ErrorKind::NotFound,
            PlacesError::NotJson | PlacesError::MissingField(_) | PlacesError::InvalidBody(_) => {
                ErrorKind::BadRequest
            }
            PlacesError::Seed(_) | PlacesError::Internal(_) => ErrorKind::Internal,
        }
    }

    /// Convert to AppError
    ///
    /// Not-found errors all render as `Not found` so clients cannot tell
    /// which referenced entity was missing.
    pub fn to_app_error(&self) -> AppError {
        let kind = self.kind();
        match kind.public_message() {
            Some(_) => AppError::from_kind(kind),
            None => AppError::new(kind, self.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            PlacesError::Internal(msg) => {
                tracing::error!(message = %msg, "Places internal error");
            }
            PlacesError::Seed(msg) => {
                tracing::error!(message = %msg, "Places seed error");
            }
            _ => {
                tracing::debug!(error = %self, "Places request rejected");
            }
        }
    }
}

impl From<PlacesError> for AppError {
    fn from(err: PlacesError) -> Self {
        err.to_app_error()
    }
}

impl IntoResponse for PlacesError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<serde_json::Error> for PlacesError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_syntax() || err.is_eof() {
            PlacesError::NotJson
        } else {
            PlacesError::InvalidBody(err.to_string())
        }
    }
}
