//! エクスポート機能（共通ライブラリ）

#[cfg(feature = "excel")]
pub mod excel_core;
