//! Excel/JSON出力の統合テスト
//!
//! 出力したブックを calamine で読み戻して検証する

use calamine::{open_workbook_auto, Data, Reader};
use match_assigner::export::{self, excel};
use match_assigner_common::{AssignmentRecord, ScoreMatrix, Session, SessionReport};
use std::path::Path;
use tempfile::tempdir;

fn sample_session(max_passes: u32) -> Session {
    let matrix = ScoreMatrix::new(
        vec!["A".into(), "B".into()],
        vec!["X".into(), "Y".into(), "Z".into()],
        vec![vec![0.9, 0.5, 0.1], vec![0.8, 0.7, 0.2]],
    )
    .unwrap();
    Session::new(matrix, max_passes).unwrap()
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.clone(),
        Data::Float(f) => f.to_string(),
        Data::Int(i) => i.to_string(),
        other => format!("{:?}", other),
    }
}

fn cell_number(cell: &Data) -> f64 {
    match cell {
        Data::Float(f) => *f,
        Data::Int(i) => *i as f64,
        other => panic!("数値ではありません: {:?}", other),
    }
}

fn read_sheet(path: &Path, name: &str) -> Vec<Vec<Data>> {
    let mut workbook = open_workbook_auto(path).expect("ブックを開けない");
    let range = workbook.worksheet_range(name).expect("シートが読めない");
    range.rows().map(|r| r.to_vec()).collect()
}

#[test]
fn test_excel_has_two_sheets() {
    let dir = tempdir().expect("Failed to create temp dir");
    let output_path = dir.path().join("out.xlsx");

    let records = vec![AssignmentRecord {
        pass_number: 1,
        row_key: "A".into(),
        column_key: "X".into(),
        score: 0.9,
    }];
    excel::generate_excel(&records, &["Z".to_string(), "Y".to_string()], &output_path)
        .expect("Excel生成に失敗");

    let workbook = open_workbook_auto(&output_path).expect("ブックを開けない");
    assert_eq!(
        workbook.sheet_names(),
        vec!["Assignments".to_string(), "Unassigned".to_string()]
    );

    let assignments = read_sheet(&output_path, "Assignments");
    let header: Vec<String> = assignments[0].iter().map(cell_text).collect();
    assert_eq!(header, vec!["Pass", "Row", "Column", "Score"]);
    assert_eq!(cell_number(&assignments[1][0]), 1.0);
    assert_eq!(cell_text(&assignments[1][1]), "A");
    assert_eq!(cell_text(&assignments[1][2]), "X");
    assert!((cell_number(&assignments[1][3]) - 0.9).abs() < 1e-9);

    let unassigned = read_sheet(&output_path, "Unassigned");
    let values: Vec<String> = unassigned.iter().map(|r| cell_text(&r[0])).collect();
    assert_eq!(values, vec!["Column", "Y", "Z"]);
}

/// すべての行で0件 → 台帳は空、全列が未割り当てとして出力される
#[test]
fn test_export_with_empty_ledger() {
    let dir = tempdir().expect("Failed to create temp dir");
    let mut session = sample_session(2);
    while !session.is_finished() {
        session.confirm(0, &[]).unwrap();
    }

    let path = export::export_session(&session, dir.path(), "assignments.xlsx", None)
        .expect("出力に失敗");
    assert_eq!(path, dir.path().join("assignments.xlsx"));

    let assignments = read_sheet(&path, "Assignments");
    assert_eq!(assignments.len(), 1, "ヘッダーのみのはず");

    let unassigned = read_sheet(&path, "Unassigned");
    let values: Vec<String> = unassigned.iter().skip(1).map(|r| cell_text(&r[0])).collect();
    assert_eq!(values, vec!["X", "Y", "Z"]);
}

#[test]
fn test_export_writes_json_report() {
    let dir = tempdir().expect("Failed to create temp dir");
    let mut session = sample_session(1);
    session.confirm(1, &["X".to_string()]).unwrap();
    session.confirm(1, &["Y".to_string()]).unwrap();

    let report_path = dir.path().join("report.json");
    export::export_session(
        &session,
        &dir.path().join("result.xlsx"),
        "unused.xlsx",
        Some(&report_path),
    )
    .expect("出力に失敗");

    assert!(dir.path().join("result.xlsx").exists());
    let content = std::fs::read_to_string(&report_path).unwrap();
    let report: SessionReport = serde_json::from_str(&content).unwrap();
    assert!(report.finished);
    assert!(!report.generated_at.is_empty());
    assert_eq!(report.assignments.len(), 2);
    assert_eq!(report.unassigned, vec!["Z".to_string()]);
}

#[test]
fn test_export_creates_parent_directory() {
    let dir = tempdir().expect("Failed to create temp dir");
    let output_path = dir.path().join("nested").join("out.xlsx");

    excel::generate_excel(&[], &["X".to_string()], &output_path).expect("Excel生成に失敗");
    assert!(output_path.exists());
}
