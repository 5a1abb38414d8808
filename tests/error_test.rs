//! エラーケーステスト
//!
//! 各種エラー条件でのエラーハンドリングを検証

use match_assigner::error::MatcherError;
use match_assigner::loader::{self, SheetSelector};
use std::path::Path;
use tempfile::tempdir;

/// 存在しないファイルを読み込んだ場合
#[test]
fn test_load_nonexistent_file() {
    let result = loader::load_matrix(Path::new("/nonexistent/path/12345.xlsx"), &SheetSelector::Index(0));
    assert!(matches!(result, Err(MatcherError::FileNotFound(_))));
}

/// 未対応の拡張子
#[test]
fn test_load_unsupported_extension() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("matrix.txt");
    std::fs::write(&path, ",X\nA,1\n").unwrap();

    let result = loader::load_matrix(&path, &SheetSelector::Index(0));
    assert!(matches!(result, Err(MatcherError::UnsupportedFormat(_))));
}

/// Excelとして壊れているファイル
#[test]
fn test_load_corrupt_workbook() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("broken.xlsx");
    std::fs::write(&path, b"this is not a zip").unwrap();

    let result = loader::load_matrix(&path, &SheetSelector::Index(0));
    assert!(matches!(
        result,
        Err(MatcherError::Common(match_assigner_common::Error::Load(_)))
    ));
}

/// ヘッダーのみで列がないCSV
#[test]
fn test_load_csv_without_columns() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("matrix.csv");
    std::fs::write(&path, "id\nA\nB\n").unwrap();

    let err = loader::load_matrix(&path, &SheetSelector::Index(0)).unwrap_err();
    assert!(format!("{}", err).contains("読み込みエラー"));
}

/// MatcherErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        MatcherError::Config("テスト設定エラー".to_string()),
        MatcherError::FileNotFound("matrix.xlsx".to_string()),
        MatcherError::UnsupportedFormat("matrix.txt".to_string()),
        MatcherError::ExcelGeneration("Excel生成エラー".to_string()),
        MatcherError::Prompt("入力中断".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラーメッセージが空: {:?}", err);
    }
}

/// IOエラーからの変換
#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: MatcherError = io_err.into();

    assert!(matches!(err, MatcherError::Io(_)));
    assert!(format!("{}", err).contains("IO"));
}

/// JSONエラーからの変換
#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{ invalid }").unwrap_err();
    let err: MatcherError = json_err.into();

    assert!(matches!(err, MatcherError::JsonParse(_)));
}

/// 共通ライブラリのエラーは透過的に表示される
#[test]
fn test_common_error_transparent() {
    let common_err = match_assigner_common::Error::NotAvailable { column: "X".to_string() };
    let expected = format!("{}", common_err);
    let err: MatcherError = common_err.into();

    assert!(matches!(err, MatcherError::Common(_)));
    assert_eq!(format!("{}", err), expected);
}
