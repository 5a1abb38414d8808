//! 上位N件の候補提案
//!
//! スコア降順。同点はヘッダー上の列位置が前のものを優先する。

use crate::matrix::ScoreMatrix;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeSet;

/// 提案候補
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub column: String,
    pub score: f64,
}

/// 割り当て可能な列のうちスコア上位 `limit` 件を返す
///
/// 行キーが存在しない場合は空。行列・可用性は変更しない。
pub fn propose(
    matrix: &ScoreMatrix,
    row: &str,
    available: &BTreeSet<String>,
    limit: usize,
) -> Vec<Candidate> {
    if limit == 0 || available.is_empty() {
        return Vec::new();
    }
    let Some(scores) = matrix.row_scores(row) else {
        return Vec::new();
    };

    let mut ranked: Vec<(usize, Candidate)> = matrix
        .columns()
        .iter()
        .zip(scores)
        .enumerate()
        .filter(|(_, (column, _))| available.contains(column.as_str()))
        .map(|(position, (column, score))| {
            (
                position,
                Candidate {
                    column: column.clone(),
                    score: *score,
                },
            )
        })
        .collect();

    // スコア降順、同点は列位置の昇順
    ranked.sort_by(|(pa, a), (pb, b)| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then(pa.cmp(pb))
    });
    ranked.truncate(limit);
    ranked.into_iter().map(|(_, candidate)| candidate).collect()
}
