use thiserror::Error;

#[derive(Error, Debug)]
pub enum MatcherError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("未対応のファイル形式です: {0}（xlsx/xlsm/xlsb/xls/ods/csv に対応）")]
    UnsupportedFormat(String),

    #[error("Excel生成エラー: {0}")]
    ExcelGeneration(String),

    #[error("入力操作エラー: {0}")]
    Prompt(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] match_assigner_common::Error),
}

pub type Result<T> = std::result::Result<T, MatcherError>;
