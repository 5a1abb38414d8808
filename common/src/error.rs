//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    /// 行列の読み込み失敗（セッション状態は変更されない）
    #[error("読み込みエラー: {0}")]
    Load(String),

    /// 既に割り当て済み、または存在しない列を選択した
    #[error("列 '{column}' は割り当て可能ではありません")]
    NotAvailable { column: String },

    /// 選択内容が不正（N超過など）
    #[error("入力エラー: {0}")]
    Validation(String),

    /// 台帳に同じ列が二重登録されようとした（内部整合性エラー）
    #[error("列 '{column}' は既に台帳に記録されています")]
    DuplicateColumn { column: String },

    #[error("割り当ては終了しています")]
    SessionFinished,

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
