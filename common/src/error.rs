//! 共通ライブラリのエラー

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O: {0}")]
    Io(#[from] std::io::Error),

    /// フィクスチャJSONの形式違い
    #[error("invalid fixture JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// フィードバックの保存先に書けない
    #[error("feedback store: {0}")]
    Storage(String),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::FixtureSet;

    #[test]
    fn test_broken_fixture_json() {
        let err = FixtureSet::from_json(r#"{ "dashboardRows": 5 }"#).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
        assert!(err.to_string().starts_with("invalid fixture JSON"));
    }

    #[test]
    fn test_missing_fixture_file() {
        let err = FixtureSet::from_file(std::path::Path::new("/nonexistent/fixtures.json")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_storage_message() {
        let err = Error::Storage("quota exceeded".to_string());
        assert_eq!(err.to_string(), "feedback store: quota exceeded");
    }
}
