//! Excel生成（共通ライブラリ）
//!
//! 割り当て結果を2シート構成のxlsxとしてバッファに書き出す:
//! - "Assignments": Pass / Row / Column / Score
//! - "Unassigned": Column（昇順）

use crate::ledger::AssignmentRecord;
use rust_xlsxwriter::*;

pub const ASSIGNMENTS_SHEET: &str = "Assignments";
pub const UNASSIGNED_SHEET: &str = "Unassigned";
pub const ASSIGNMENT_HEADERS: [&str; 4] = ["Pass", "Row", "Column", "Score"];
pub const UNASSIGNED_HEADER: &str = "Column";

/// Excelをバッファに生成
///
/// # Arguments
/// * `records` - 確定順の割り当て
/// * `unassigned` - 未割り当ての列（この関数内で昇順に並べ替える）
pub fn generate_assignments_buffer(
    records: &[AssignmentRecord],
    unassigned: &[String],
) -> Result<Vec<u8>, String> {
    let mut workbook = Workbook::new();

    let header_format = Format::new()
        .set_bold()
        .set_background_color(Color::RGB(0xF5F5F5))
        .set_border(FormatBorder::Thin)
        .set_border_color(Color::RGB(0xAAAAAA));

    let score_format = Format::new().set_num_format("0.0000");

    {
        let worksheet = workbook.add_worksheet();
        worksheet
            .set_name(ASSIGNMENTS_SHEET)
            .map_err(|e| format!("シート名設定エラー: {}", e))?;

        for (col, header) in ASSIGNMENT_HEADERS.iter().enumerate() {
            worksheet
                .write_string_with_format(0, col as u16, *header, &header_format)
                .map_err(|e| format!("ヘッダー書き込みエラー: {}", e))?;
        }
        worksheet
            .set_freeze_panes(1, 0)
            .map_err(|e| format!("ウィンドウ枠固定エラー: {}", e))?;

        for (i, record) in records.iter().enumerate() {
            let row = i as u32 + 1;
            worksheet
                .write_number(row, 0, record.pass_number as f64)
                .map_err(|e| format!("値書き込みエラー: {}", e))?;
            worksheet
                .write_string(row, 1, record.row_key.as_str())
                .map_err(|e| format!("値書き込みエラー: {}", e))?;
            worksheet
                .write_string(row, 2, record.column_key.as_str())
                .map_err(|e| format!("値書き込みエラー: {}", e))?;
            worksheet
                .write_number_with_format(row, 3, record.score, &score_format)
                .map_err(|e| format!("値書き込みエラー: {}", e))?;
        }

        worksheet
            .set_column_width(1, 24.0)
            .map_err(|e| format!("列幅設定エラー: {}", e))?;
        worksheet
            .set_column_width(2, 24.0)
            .map_err(|e| format!("列幅設定エラー: {}", e))?;
    }

    {
        let mut sorted: Vec<&str> = unassigned.iter().map(String::as_str).collect();
        sorted.sort_unstable();

        let worksheet = workbook.add_worksheet();
        worksheet
            .set_name(UNASSIGNED_SHEET)
            .map_err(|e| format!("シート名設定エラー: {}", e))?;
        worksheet
            .write_string_with_format(0, 0, UNASSIGNED_HEADER, &header_format)
            .map_err(|e| format!("ヘッダー書き込みエラー: {}", e))?;

        for (i, column) in sorted.iter().enumerate() {
            worksheet
                .write_string(i as u32 + 1, 0, *column)
                .map_err(|e| format!("値書き込みエラー: {}", e))?;
        }

        worksheet
            .set_column_width(0, 24.0)
            .map_err(|e| format!("列幅設定エラー: {}", e))?;
    }

    // バッファに書き出し
    workbook
        .save_to_buffer()
        .map_err(|e| format!("Excel保存エラー: {}", e))
}
