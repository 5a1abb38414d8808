//! スコア行列
//!
//! 行 = 割り当て先（ローカル側）、列 = 割り当てられる相手（外部側）。
//! セッション中は不変。

use crate::error::{Error, Result};
use crate::table::Table;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq)]
pub struct ScoreMatrix {
    rows: Vec<String>,
    columns: Vec<String>,
    row_index: HashMap<String, usize>,
    column_index: HashMap<String, usize>,
    /// 行優先で rows.len() * columns.len() 個
    scores: Vec<f64>,
}

impl ScoreMatrix {
    /// キーとスコアから直接構築
    ///
    /// `scores[r][c]` が `rows[r]` × `columns[c]` のスコア。
    pub fn new(rows: Vec<String>, columns: Vec<String>, scores: Vec<Vec<f64>>) -> Result<Self> {
        if columns.is_empty() {
            return Err(Error::Load("データ列が1つもありません".into()));
        }
        if scores.len() != rows.len() {
            return Err(Error::Load(format!(
                "行数が一致しません: キー{}件, スコア{}行",
                rows.len(),
                scores.len()
            )));
        }

        let row_index = index_keys(&rows, "行")?;
        let column_index = index_keys(&columns, "列")?;

        let mut flat = Vec::with_capacity(rows.len() * columns.len());
        for (key, values) in rows.iter().zip(&scores) {
            if values.len() != columns.len() {
                return Err(Error::Load(format!(
                    "行 '{}' のスコア数 {} が列数 {} と一致しません",
                    key,
                    values.len(),
                    columns.len()
                )));
            }
            // NaN と -0.0 は 0.0 にそろえる
            flat.extend(values.iter().map(|v| if v.is_nan() || *v == 0.0 { 0.0 } else { *v }));
        }

        Ok(Self {
            rows,
            columns,
            row_index,
            column_index,
            scores: flat,
        })
    }

    /// 表から構築
    ///
    /// 先頭行がヘッダー（先頭セルは無視、残りが列キー）、
    /// 以降の各行の先頭セルが行キー。数値でないセルは0.0になる。
    /// 完全に空の行は読み飛ばす。
    pub fn from_table(table: &Table) -> Result<Self> {
        let mut lines = table.rows.iter();
        let header = lines
            .next()
            .ok_or_else(|| Error::Load("シートが空です".into()))?;

        let mut columns = Vec::new();
        for (i, cell) in header.iter().enumerate().skip(1) {
            let key = cell.as_key();
            if key.is_empty() {
                // 末尾の空ヘッダーは範囲の余白として無視
                if header[i..].iter().all(|c| c.is_blank()) {
                    break;
                }
                return Err(Error::Load(format!("{}列目のヘッダーが空です", i + 1)));
            }
            columns.push(key);
        }

        let mut rows = Vec::new();
        let mut scores = Vec::new();
        for (line_no, line) in lines.enumerate() {
            if line.iter().all(|c| c.is_blank()) {
                continue;
            }
            let key = line.first().map(|c| c.as_key()).unwrap_or_default();
            if key.is_empty() {
                return Err(Error::Load(format!("{}行目の行キーが空です", line_no + 2)));
            }
            let values = (0..columns.len())
                .map(|c| line.get(c + 1).map(|cell| cell.as_score()).unwrap_or(0.0))
                .collect();
            rows.push(key);
            scores.push(values);
        }

        let matrix = Self::new(rows, columns, scores)?;
        tracing::debug!(
            rows = matrix.row_count(),
            columns = matrix.column_count(),
            "スコア行列を構築"
        );
        Ok(matrix)
    }

    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// スコアを取得（どちらかのキーが存在しなければ `None`）
    pub fn score(&self, row: &str, column: &str) -> Option<f64> {
        let r = *self.row_index.get(row)?;
        let c = *self.column_index.get(column)?;
        Some(self.scores[r * self.columns.len() + c])
    }

    /// 行のスコアを列の並び順で取得
    pub fn row_scores(&self, row: &str) -> Option<&[f64]> {
        let r = *self.row_index.get(row)?;
        let width = self.columns.len();
        Some(&self.scores[r * width..(r + 1) * width])
    }
}

fn index_keys(keys: &[String], kind: &str) -> Result<HashMap<String, usize>> {
    let mut index = HashMap::with_capacity(keys.len());
    for (i, key) in keys.iter().enumerate() {
        if index.insert(key.clone(), i).is_some() {
            return Err(Error::Load(format!("{}キー '{}' が重複しています", kind, key)));
        }
    }
    Ok(index)
}
