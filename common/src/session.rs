//! 割り当てセッション
//!
//! スコア行列・可用性・台帳・パス状態をひとまとめに持つ。
//! 各操作はすべての検査を終えてから状態を変更するため、
//! エラー時にセッションが中途半端な状態になることはない。

use crate::availability::AvailabilityTracker;
use crate::error::{Error, Result};
use crate::ledger::{AssignmentLedger, AssignmentRecord};
use crate::matrix::ScoreMatrix;
use crate::pass::{PassState, Phase, Step};
use crate::proposer::{propose, Candidate};
use crate::report::SessionReport;

#[derive(Debug, Clone)]
pub struct Session {
    matrix: ScoreMatrix,
    availability: AvailabilityTracker,
    ledger: AssignmentLedger,
    state: PassState,
}

impl Session {
    pub fn new(matrix: ScoreMatrix, max_passes: u32) -> Result<Self> {
        let mut state = PassState::new(max_passes)?;
        let availability = AvailabilityTracker::new(matrix.columns().iter().cloned());
        state.settle(matrix.row_count(), availability.len());

        tracing::info!(
            rows = matrix.row_count(),
            columns = matrix.column_count(),
            max_passes,
            "セッション開始"
        );

        Ok(Self {
            matrix,
            availability,
            ledger: AssignmentLedger::new(),
            state,
        })
    }

    /// 同じ行列のまま最初からやり直す
    pub fn restart(&mut self) -> Result<()> {
        *self = Self::new(self.matrix.clone(), self.state.max_passes)?;
        Ok(())
    }

    /// 行列を差し替えて最初からやり直す
    pub fn replace_matrix(&mut self, matrix: ScoreMatrix) -> Result<()> {
        *self = Self::new(matrix, self.state.max_passes)?;
        Ok(())
    }

    pub fn matrix(&self) -> &ScoreMatrix {
        &self.matrix
    }

    pub fn availability(&self) -> &AvailabilityTracker {
        &self.availability
    }

    pub fn ledger(&self) -> &AssignmentLedger {
        &self.ledger
    }

    pub fn state(&self) -> &PassState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase(self.matrix.row_count(), self.availability.len())
    }

    pub fn is_finished(&self) -> bool {
        self.phase() == Phase::Finished
    }

    /// 入力待ちの行キー
    pub fn current_row(&self) -> Option<&str> {
        if self.phase() != Phase::AwaitingInput {
            return None;
        }
        self.matrix.rows().get(self.state.row_cursor).map(String::as_str)
    }

    /// 選択できる最大件数（= 残り列数）
    pub fn max_selectable(&self) -> usize {
        self.availability.len()
    }

    /// 要求件数を残り列数に丸める
    pub fn clamp_request(&self, requested: usize) -> usize {
        requested.min(self.max_selectable())
    }

    /// 現在行の上位N件の提案
    pub fn proposal(&self, n: usize) -> Vec<Candidate> {
        self.candidates(self.clamp_request(n))
    }

    /// 手動選択用の候補一覧（上位 `limit` 件）
    pub fn candidates(&self, limit: usize) -> Vec<Candidate> {
        match self.current_row() {
            Some(row) => propose(&self.matrix, row, self.availability.remaining(), limit),
            None => Vec::new(),
        }
    }

    /// 現在行の選択を確定して次の行へ進む
    ///
    /// `requested` は残り列数に丸めてから選択件数の上限として使う。
    /// 空の選択は「該当なし」として行を進めるだけ。
    pub fn confirm(&mut self, requested: usize, selection: &[String]) -> Result<Step> {
        let row = self.current_row().ok_or(Error::SessionFinished)?.to_string();

        let limit = self.clamp_request(requested);
        if selection.len() > limit {
            return Err(Error::Validation(format!(
                "{}件選択されていますが、上限は{}件です",
                selection.len(),
                limit
            )));
        }
        self.availability.check(selection)?;
        self.ledger.check(selection.iter().map(String::as_str))?;

        let mut records = Vec::with_capacity(selection.len());
        for column in selection {
            let score = self
                .matrix
                .score(&row, column)
                .ok_or_else(|| Error::NotAvailable {
                    column: column.clone(),
                })?;
            records.push(AssignmentRecord {
                pass_number: self.state.current_pass,
                row_key: row.clone(),
                column_key: column.clone(),
                score,
            });
        }

        self.availability.commit(selection)?;
        self.ledger.append(records)?;

        tracing::debug!(
            pass = self.state.current_pass,
            row = %row,
            assigned = selection.len(),
            remaining = self.availability.len(),
            "割り当て確定"
        );

        Ok(self.advance())
    }

    /// 現在行を何もせずに飛ばす
    pub fn skip(&mut self) -> Result<Step> {
        let row = self.current_row().ok_or(Error::SessionFinished)?;
        tracing::debug!(pass = self.state.current_pass, row = %row, "スキップ");
        Ok(self.advance())
    }

    fn advance(&mut self) -> Step {
        let step = self
            .state
            .advance(self.matrix.row_count(), self.availability.len());
        if step == Step::Finished {
            tracing::info!(
                assigned = self.ledger.len(),
                unassigned = self.availability.len(),
                "割り当て終了"
            );
        }
        step
    }

    /// 未割り当ての列（昇順）
    pub fn unassigned(&self) -> Vec<String> {
        self.ledger.unassigned(&self.availability)
    }

    pub fn report(&self) -> SessionReport {
        SessionReport::from_session(self)
    }
}
