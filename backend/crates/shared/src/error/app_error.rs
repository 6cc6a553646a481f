//! Application Error
//!
//! [`AppError`] is what every domain crate error turns into before it is
//! rendered as `{"error": "<message>"}`.

use std::borrow::Cow;
use std::fmt;

use super::kind::ErrorKind;

/// API エラー
///
/// `kind` が HTTP ステータスを決め、`message` がレスポンスの `error` に入る。
///
/// ```rust
/// use kernel::error::{app_error::AppError, kind::ErrorKind};
///
/// let err = AppError::from_kind(ErrorKind::NotFound);
/// assert_eq!(err.message(), "Not found");
///
/// let err = AppError::bad_request("Missing user_id");
/// assert_eq!(err.status_code(), 400);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppError {
    kind: ErrorKind,
    message: Cow<'static, str>,
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn new(kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// 固定メッセージ付きのエラー（固定メッセージがない分類は分類名）
    pub fn from_kind(kind: ErrorKind) -> Self {
        match kind.public_message() {
            Some(message) => Self::new(kind, message),
            None => Self::new(kind, kind.to_string()),
        }
    }

    pub fn bad_request(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::BadRequest, message)
    }

    /// `{"error": "Not found"}`
    pub fn not_found() -> Self {
        Self::from_kind(ErrorKind::NotFound)
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn status_code(&self) -> u16 {
        self.kind.status_code()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.status_code(), self.message)
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_kind_uses_public_message() {
        assert_eq!(AppError::not_found().message(), "Not found");
        assert_eq!(
            AppError::from_kind(ErrorKind::Internal).message(),
            "Internal server error"
        );
        assert_eq!(
            AppError::from_kind(ErrorKind::BadRequest).message(),
            "bad_request"
        );
    }

    #[test]
    fn test_bad_request_keeps_message() {
        let err = AppError::bad_request("Not a JSON");
        assert_eq!(err.kind(), ErrorKind::BadRequest);
        assert_eq!(err.message(), "Not a JSON");
    }

    #[test]
    fn test_display() {
        assert_eq!(AppError::not_found().to_string(), "404 Not found");
    }
}
