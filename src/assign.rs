//! 対話式割り当てモジュール
//!
//! 行ごとに操作者へ提案を示し、確定・スキップを反映する。
//! 操作ごとに台帳の状況と残り件数を表示する。

use crate::error::Result;
use crate::loader;
use crate::operator::{Operator, RowAction, RowView};
use match_assigner_common::{AssignmentRecord, Error as CoreError, Session, Step};

/// 割り当ての進め方
#[derive(Debug, Clone, Copy)]
pub struct AssignSettings {
    pub matches_per_row: usize,
    pub candidate_list_size: usize,
    /// 操作ごとの状況表示
    pub show_status: bool,
}

/// ループの終わり方
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Finished,
    Quit,
}

/// セッションが終了するか操作者が中断するまで割り当てを進める
pub fn run_assignment<O: Operator>(
    session: &mut Session,
    operator: &mut O,
    settings: &AssignSettings,
) -> Result<Outcome> {
    while let Some(view) =
        RowView::from_session(session, settings.matches_per_row, settings.candidate_list_size)
    {
        let before = session.ledger().len();

        let step = match operator.decide(&view)? {
            RowAction::Confirm { requested, selection } => {
                match session.confirm(requested, &selection) {
                    Ok(step) => step,
                    Err(e @ (CoreError::NotAvailable { .. } | CoreError::Validation(_))) => {
                        println!("⚠ {}", e);
                        operator.on_rejected(&e)?;
                        continue;
                    }
                    Err(e) => return Err(e.into()),
                }
            }
            RowAction::Skip => {
                println!("  → スキップ");
                session.skip()?
            }
            RowAction::Restart => {
                session.restart()?;
                println!("\n🧹 最初からやり直します");
                continue;
            }
            RowAction::Reload { path, sheet } => {
                match loader::load_matrix(&path, &sheet) {
                    Ok(matrix) => {
                        session.replace_matrix(matrix)?;
                        println!(
                            "\n✔ 行列を読み込み直しました: {}行 × {}列",
                            session.matrix().row_count(),
                            session.matrix().column_count()
                        );
                    }
                    // 読み込みに失敗したら今のセッションを続ける
                    Err(e) => println!("⚠ {}", e),
                }
                continue;
            }
            RowAction::Quit => {
                println!("中断して結果を出力します...");
                return Ok(Outcome::Quit);
            }
        };

        if settings.show_status {
            print_status(session, &session.ledger().all()[before..]);
        }

        match step {
            Step::Advanced => {}
            Step::PassStarted { pass } => {
                println!("\n✔ パス {} 完了。パス {} を開始します", pass - 1, pass);
            }
            Step::Finished => {}
        }
    }

    println!("\n✅ 割り当て終了");
    Ok(Outcome::Finished)
}

fn print_status(session: &Session, added: &[AssignmentRecord]) {
    if added.is_empty() {
        println!("  → 割り当てなし");
    }
    for record in added {
        println!("  → {} ({:.4})", record.column_key, record.score);
    }
    println!(
        "  確定済み: {}件 | 残り: {}件",
        session.ledger().len(),
        session.availability().len()
    );
}

/// 割り当て一覧を表示
pub fn print_summary(session: &Session) {
    let records = session.ledger().all();
    println!("\n割り当て一覧:");
    if records.is_empty() {
        println!("  割り当てはありません");
    } else {
        println!("  {:>4}  {:<20}  {:<20}  {:>8}", "Pass", "Row", "Column", "Score");
        for r in records {
            println!(
                "  {:>4}  {:<20}  {:<20}  {:>8.4}",
                r.pass_number, r.row_key, r.column_key, r.score
            );
        }
    }

    let unassigned = session.unassigned();
    println!("\n未割り当て: {}件", unassigned.len());
    if !unassigned.is_empty() {
        println!("  {}", unassigned.join(", "));
    }
}
