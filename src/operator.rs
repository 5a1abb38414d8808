//! 操作者インターフェース
//!
//! 行ごとに提示内容（`RowView`）を受け取り、操作（`RowAction`）を返す。
//! 対話式（dialoguer）と、提案をそのまま採用する自動モードがある。

use crate::error::{MatcherError, Result};
use crate::loader::SheetSelector;
use dialoguer::{Input, MultiSelect, Select};
use match_assigner_common::{Candidate, Error as CoreError, Session};
use std::path::PathBuf;

/// 1行分の提示内容
#[derive(Debug, Clone)]
pub struct RowView {
    pub pass: u32,
    pub max_passes: u32,
    /// 1始まりの行番号
    pub position: usize,
    pub row_count: usize,
    pub row: String,
    /// 残り列数（= 選択できる最大件数）
    pub remaining: usize,
    /// 既定のマッチ数（残り列数に丸め済み）
    pub default_n: usize,
    /// 手動選択の候補数
    pub candidate_list_size: usize,
    /// 残り全列のスコア順
    pub ranking: Vec<Candidate>,
}

impl RowView {
    pub fn from_session(session: &Session, matches_per_row: usize, candidate_list_size: usize) -> Option<Self> {
        let row = session.current_row()?.to_string();
        let state = session.state();
        Some(Self {
            pass: state.current_pass,
            max_passes: state.max_passes,
            position: state.row_cursor + 1,
            row_count: session.matrix().row_count(),
            row,
            remaining: session.max_selectable(),
            default_n: session.clamp_request(matches_per_row),
            candidate_list_size,
            ranking: session.candidates(session.max_selectable()),
        })
    }

    /// 上位N件の提案
    pub fn proposal(&self, n: usize) -> &[Candidate] {
        &self.ranking[..n.min(self.ranking.len())]
    }

    /// 手動選択で表示する候補（提案N件は必ず含む）
    pub fn options(&self, n: usize) -> &[Candidate] {
        self.proposal(self.candidate_list_size.max(n))
    }

    pub fn header(&self) -> String {
        format!(
            "[パス {}/{}] [{}/{}] {}",
            self.pass, self.max_passes, self.position, self.row_count, self.row
        )
    }
}

/// 行に対する操作
#[derive(Debug, Clone, PartialEq)]
pub enum RowAction {
    /// 選択を確定（空なら該当なしとして次へ）
    Confirm { requested: usize, selection: Vec<String> },
    /// この行を飛ばす
    Skip,
    /// 同じ行列のまま最初からやり直す
    Restart,
    /// 別の行列ファイルを読み込んで最初からやり直す
    Reload { path: PathBuf, sheet: SheetSelector },
    /// 中断して結果を出力
    Quit,
}

pub trait Operator {
    fn decide(&mut self, view: &RowView) -> Result<RowAction>;

    /// 確定が拒否されたときの扱い（既定: 再入力させる）
    fn on_rejected(&mut self, _error: &CoreError) -> Result<()> {
        Ok(())
    }
}

/// 提案をそのまま採用する
pub struct AutoOperator {
    pub matches_per_row: usize,
}

impl Operator for AutoOperator {
    fn decide(&mut self, view: &RowView) -> Result<RowAction> {
        let n = self.matches_per_row.min(view.remaining);
        Ok(RowAction::Confirm {
            requested: n,
            selection: view.proposal(n).iter().map(|c| c.column.clone()).collect(),
        })
    }

    fn on_rejected(&mut self, error: &CoreError) -> Result<()> {
        Err(MatcherError::Prompt(format!("自動選択が拒否されました: {}", error)))
    }
}

/// 対話式（dialoguer）
pub struct DialoguerOperator;

const ACTIONS: [&str; 6] = [
    "確定（提案どおり）",
    "手動で選択",
    "スキップ",
    "最初からやり直す（ファイルはそのまま）",
    "別のファイルを読み込む",
    "終了して出力",
];

impl Operator for DialoguerOperator {
    fn decide(&mut self, view: &RowView) -> Result<RowAction> {
        println!("\n{}", view.header());

        let remaining = view.remaining;
        let n: usize = Input::new()
            .with_prompt(format!("{} に割り当てる件数 (0-{})", view.row, remaining))
            .default(view.default_n)
            .validate_with(|v: &usize| -> std::result::Result<(), String> {
                if *v <= remaining {
                    Ok(())
                } else {
                    Err(format!("{}以下で入力してください", remaining))
                }
            })
            .interact_text()
            .map_err(|e| MatcherError::Prompt(e.to_string()))?;

        let proposal = view.proposal(n);
        if proposal.is_empty() {
            println!("  提案: なし");
        } else {
            println!("  提案 (スコア順):");
            for (i, c) in proposal.iter().enumerate() {
                println!("    {}. {} ({:.4})", i + 1, c.column, c.score);
            }
        }

        let action = Select::new()
            .with_prompt("操作")
            .items(&ACTIONS)
            .default(0)
            .interact()
            .map_err(|e| MatcherError::Prompt(e.to_string()))?;

        match action {
            0 => Ok(RowAction::Confirm {
                requested: n,
                selection: proposal.iter().map(|c| c.column.clone()).collect(),
            }),
            1 => {
                let options = view.options(n);
                let labels: Vec<String> = options
                    .iter()
                    .map(|c| format!("{} ({:.4})", c.column, c.score))
                    .collect();
                let defaults: Vec<bool> = (0..options.len()).map(|i| i < n).collect();
                let picked = MultiSelect::new()
                    .with_prompt(format!("最大{}件を選択（スペースで切替、Enterで確定）", n))
                    .items(&labels)
                    .defaults(&defaults)
                    .interact()
                    .map_err(|e| MatcherError::Prompt(e.to_string()))?;
                Ok(RowAction::Confirm {
                    requested: n,
                    selection: picked.into_iter().map(|i| options[i].column.clone()).collect(),
                })
            }
            2 => Ok(RowAction::Skip),
            3 => Ok(RowAction::Restart),
            4 => prompt_reload(),
            _ => Ok(RowAction::Quit),
        }
    }
}

fn prompt_reload() -> Result<RowAction> {
    let path: String = Input::new()
        .with_prompt("行列ファイルのパス")
        .interact_text()
        .map_err(|e| MatcherError::Prompt(e.to_string()))?;
    let sheet: SheetSelector = Input::<String>::new()
        .with_prompt("シート（番号または名前）")
        .default("0".to_string())
        .interact_text()
        .map_err(|e| MatcherError::Prompt(e.to_string()))?
        .parse()
        .map_err(MatcherError::Prompt)?;
    Ok(RowAction::Reload {
        path: PathBuf::from(path.trim()),
        sheet,
    })
}
