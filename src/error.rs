use thiserror::Error;

#[derive(Error, Debug)]
pub enum GuideError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ページが見つかりません: {0}（`intelleo-guide pages` で一覧を表示）")]
    UnknownPage(String),

    #[error("フィクスチャファイルが見つかりません: {0}")]
    FixturesNotFound(String),

    #[error("フィードバックの保存に失敗: {0}")]
    FeedbackStore(String),

    #[error("対話入力エラー: {0}")]
    Prompt(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] intelleo_guide_common::Error),
}

pub type Result<T> = std::result::Result<T, GuideError>;
