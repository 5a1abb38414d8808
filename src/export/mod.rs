pub mod excel;

use crate::error::Result;
use match_assigner_common::Session;
use std::path::{Path, PathBuf};

/// 出力先がディレクトリ（または拡張子なし）なら既定ファイル名を付ける
pub fn output_path_for(output: &Path, default_name: &str) -> PathBuf {
    if output.is_dir() || output.extension().is_none() {
        output.join(default_name)
    } else {
        output.to_path_buf()
    }
}

/// セッションの結果をExcel（必要ならJSONも）に出力
pub fn export_session(
    session: &Session,
    output: &Path,
    default_name: &str,
    report_path: Option<&Path>,
) -> Result<PathBuf> {
    let excel_path = output_path_for(output, default_name);
    println!("- Excelを生成中...");
    excel::generate_excel(session.ledger().all(), &session.unassigned(), &excel_path)?;
    println!("✔ Excel出力: {}", excel_path.display());

    if let Some(path) = report_path {
        let mut report = session.report();
        report.generated_at = chrono::Local::now().to_rfc3339();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, report.to_json_pretty()?)?;
        println!("✔ レポート出力: {}", path.display());
    }

    Ok(excel_path)
}
