//! Error Kind
//!
//! The three outcomes the REST surface reports besides success.

use serde::Serialize;

/// エラー分類
///
/// API が返す失敗ステータスは 400 / 404 / 500 の三種のみ。
/// 404 と 500 は詳細をクライアントに見せず、固定メッセージを返す。
///
/// ```rust
/// use kernel::error::kind::ErrorKind;
///
/// assert_eq!(ErrorKind::NotFound.status_code(), 404);
/// assert_eq!(ErrorKind::NotFound.public_message(), Some("Not found"));
/// assert_eq!(ErrorKind::BadRequest.public_message(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// ボディが JSON オブジェクトでない、必須フィールドがない、など
    BadRequest,
    /// 参照先（place / city / user / amenity / リンク）が存在しない
    NotFound,
    /// ストレージ・シードの不整合
    Internal,
}

impl ErrorKind {
    pub const fn status_code(self) -> u16 {
        match self {
            ErrorKind::BadRequest => 400,
            ErrorKind::NotFound => 404,
            ErrorKind::Internal => 500,
        }
    }

    /// クライアントに返す固定メッセージ
    ///
    /// `None` の場合は個別のメッセージ（`"Missing name"` など）をそのまま返す。
    pub const fn public_message(self) -> Option<&'static str> {
        match self {
            ErrorKind::BadRequest => None,
            ErrorKind::NotFound => Some("Not found"),
            ErrorKind::Internal => Some("Internal server error"),
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ErrorKind::BadRequest => "bad_request",
            ErrorKind::NotFound => "not_found",
            ErrorKind::Internal => "internal",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(ErrorKind::BadRequest.status_code(), 400);
        assert_eq!(ErrorKind::NotFound.status_code(), 404);
        assert_eq!(ErrorKind::Internal.status_code(), 500);
    }

    #[test]
    fn test_only_bad_request_exposes_details() {
        assert!(ErrorKind::BadRequest.public_message().is_none());
        assert_eq!(
            ErrorKind::Internal.public_message(),
            Some("Internal server error")
        );
    }

    #[test]
    fn test_display_matches_serialized_name() {
        for kind in [ErrorKind::BadRequest, ErrorKind::NotFound, ErrorKind::Internal] {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{kind}\""));
        }
    }
}
