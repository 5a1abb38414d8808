//! Excel出力（CLI版）

use crate::error::{MatcherError, Result};
use match_assigner_common::export::excel_core::generate_assignments_buffer;
use match_assigner_common::AssignmentRecord;
use std::path::Path;

pub fn generate_excel(
    records: &[AssignmentRecord],
    unassigned: &[String],
    output_path: &Path,
) -> Result<()> {
    let buffer =
        generate_assignments_buffer(records, unassigned).map_err(MatcherError::ExcelGeneration)?;

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(output_path, buffer)?;

    tracing::info!(
        path = %output_path.display(),
        assignments = records.len(),
        unassigned = unassigned.len(),
        "Excelを出力"
    );
    Ok(())
}
