//! スコア行列ファイルの読み込み
//!
//! Excel系（xlsx/xlsm/xlsb/xls/ods）は calamine、CSV は csv クレートで
//! セル格子に変換し、`ScoreMatrix::from_table` に渡す。

use crate::error::{MatcherError, Result};
use calamine::{open_workbook_auto_from_rs, Data, Reader};
use match_assigner_common::{Cell, Error as CoreError, ScoreMatrix, Table};
use std::io::Cursor;
use std::path::Path;

/// シート指定（数字のみなら0始まりの番号、それ以外はシート名）
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SheetSelector {
    Index(usize),
    Name(String),
}

impl Default for SheetSelector {
    fn default() -> Self {
        SheetSelector::Index(0)
    }
}

impl std::str::FromStr for SheetSelector {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Ok(SheetSelector::Index(0));
        }
        if s.chars().all(|c| c.is_ascii_digit()) {
            return s
                .parse::<usize>()
                .map(SheetSelector::Index)
                .map_err(|e| format!("シート番号が不正です: {}", e));
        }
        Ok(SheetSelector::Name(s.to_string()))
    }
}

impl std::fmt::Display for SheetSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SheetSelector::Index(i) => write!(f, "#{}", i),
            SheetSelector::Name(name) => write!(f, "{}", name),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Spreadsheet,
    Csv,
}

impl SourceFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "xlsx" | "xlsm" | "xlsb" | "xls" | "xla" | "xlam" | "ods" => Ok(SourceFormat::Spreadsheet),
            "csv" => Ok(SourceFormat::Csv),
            _ => Err(MatcherError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

fn load_error(message: impl Into<String>) -> MatcherError {
    MatcherError::Common(CoreError::Load(message.into()))
}

/// バイト列をセル格子に変換
pub fn parse(bytes: &[u8], format: SourceFormat, sheet: &SheetSelector) -> Result<Table> {
    match format {
        SourceFormat::Spreadsheet => parse_spreadsheet(bytes, sheet),
        SourceFormat::Csv => parse_csv(bytes, sheet),
    }
}

fn parse_spreadsheet(bytes: &[u8], sheet: &SheetSelector) -> Result<Table> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes.to_vec()))
        .map_err(|e| load_error(format!("ブックを開けません: {}", e)))?;

    let names = workbook.sheet_names();
    let name = match sheet {
        SheetSelector::Index(i) => names.get(*i).cloned().ok_or_else(|| {
            load_error(format!(
                "シート番号 {} は存在しません（シート数: {}）",
                i,
                names.len()
            ))
        })?,
        SheetSelector::Name(name) => {
            if !names.iter().any(|n| n == name) {
                return Err(load_error(format!(
                    "シート '{}' が見つかりません（{}）",
                    name,
                    names.join(", ")
                )));
            }
            name.clone()
        }
    };

    let range = workbook
        .worksheet_range(&name)
        .map_err(|e| load_error(format!("シート '{}' を読み込めません: {}", name, e)))?;

    let rows = range
        .rows()
        .map(|row| row.iter().map(to_cell).collect())
        .collect();

    tracing::debug!(sheet = %name, "シートを読み込み");
    Ok(Table::new(rows))
}

fn to_cell(data: &Data) -> Cell {
    match data {
        Data::Empty | Data::Error(_) => Cell::Empty,
        Data::Int(i) => Cell::Number(*i as f64),
        Data::Float(f) => Cell::Number(*f),
        Data::Bool(b) => Cell::Bool(*b),
        Data::String(s) => Cell::Text(s.clone()),
        other => Cell::Text(other.to_string()),
    }
}

fn parse_csv(bytes: &[u8], sheet: &SheetSelector) -> Result<Table> {
    if *sheet != SheetSelector::Index(0) {
        return Err(load_error(format!(
            "CSVにはシートが1つしかありません（指定: {}）",
            sheet
        )));
    }

    let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(bytes);

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| load_error(format!("CSV解析エラー: {}", e)))?;
        rows.push(
            record
                .iter()
                .map(|field| {
                    if field.trim().is_empty() {
                        Cell::Empty
                    } else {
                        Cell::Text(field.to_string())
                    }
                })
                .collect(),
        );
    }

    Ok(Table::new(rows))
}

/// ファイルからスコア行列を読み込む
pub fn load_matrix(path: &Path, sheet: &SheetSelector) -> Result<ScoreMatrix> {
    if !path.exists() {
        return Err(MatcherError::FileNotFound(path.display().to_string()));
    }
    let format = SourceFormat::from_path(path)?;
    let bytes = std::fs::read(path)?;
    let table = parse(&bytes, format, sheet)?;
    let matrix = ScoreMatrix::from_table(&table)?;

    tracing::info!(
        path = %path.display(),
        rows = matrix.row_count(),
        columns = matrix.column_count(),
        "行列を読み込み"
    );
    Ok(matrix)
}
