//! パス（全行の一巡）の状態管理
//!
//! 状態はカーソル位置・行数・残り列数から決まる:
//! - `AwaitingInput`: 現在行の入力待ち
//! - `PassComplete`: 一巡したが残り列があり、次のパスに進める
//! - `Finished`: 全パス終了、または残り列がなくなった

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    AwaitingInput,
    PassComplete,
    Finished,
}

/// 1回の操作で起きたこと
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// 同じパスの次の行へ
    Advanced,
    /// パスが完了し、次のパスを開始した
    PassStarted { pass: u32 },
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PassState {
    pub current_pass: u32,
    pub max_passes: u32,
    pub row_cursor: usize,
}

impl PassState {
    pub fn new(max_passes: u32) -> Result<Self> {
        if max_passes == 0 {
            return Err(Error::Validation("パス数は1以上を指定してください".into()));
        }
        Ok(Self {
            current_pass: 1,
            max_passes,
            row_cursor: 0,
        })
    }

    /// 現在の状態を判定
    pub fn phase(&self, row_count: usize, available: usize) -> Phase {
        if available == 0 {
            return Phase::Finished;
        }
        if self.row_cursor < row_count {
            return Phase::AwaitingInput;
        }
        if self.current_pass < self.max_passes && row_count > 0 {
            Phase::PassComplete
        } else {
            Phase::Finished
        }
    }

    /// カーソルを1つ進め、必要なら次のパスへ繰り上げる
    pub fn advance(&mut self, row_count: usize, available: usize) -> Step {
        self.row_cursor += 1;
        self.settle(row_count, available)
    }

    /// `PassComplete` を解消して安定状態にする
    pub fn settle(&mut self, row_count: usize, available: usize) -> Step {
        match self.phase(row_count, available) {
            Phase::AwaitingInput => Step::Advanced,
            Phase::PassComplete => {
                self.current_pass += 1;
                self.row_cursor = 0;
                tracing::debug!(pass = self.current_pass, "次のパスを開始");
                Step::PassStarted {
                    pass: self.current_pass,
                }
            }
            Phase::Finished => Step::Finished,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_passes_rejected() {
        assert!(matches!(PassState::new(0), Err(Error::Validation(_))));
    }

    #[test]
    fn test_phase_table() {
        let state = PassState { current_pass: 1, max_passes: 2, row_cursor: 0 };
        assert_eq!(state.phase(2, 3), Phase::AwaitingInput);
        assert_eq!(state.phase(2, 0), Phase::Finished);

        let end = PassState { row_cursor: 2, ..state };
        assert_eq!(end.phase(2, 3), Phase::PassComplete);
        assert_eq!(end.phase(2, 0), Phase::Finished);

        let last = PassState { current_pass: 2, ..end };
        assert_eq!(last.phase(2, 3), Phase::Finished);
    }

    #[test]
    fn test_advance_rolls_into_next_pass() {
        let mut state = PassState::new(2).unwrap();
        assert_eq!(state.advance(2, 3), Step::Advanced);
        assert_eq!(state.advance(2, 3), Step::PassStarted { pass: 2 });
        assert_eq!(state.row_cursor, 0);
        assert_eq!(state.current_pass, 2);
        state.advance(2, 3);
        assert_eq!(state.advance(2, 3), Step::Finished);
    }

    #[test]
    fn test_advance_finishes_when_exhausted_mid_pass() {
        let mut state = PassState::new(3).unwrap();
        assert_eq!(state.advance(5, 0), Step::Finished);
        assert_eq!(state.current_pass, 1);
    }

    #[test]
    fn test_no_rows_finishes_immediately() {
        let mut state = PassState::new(3).unwrap();
        assert_eq!(state.settle(0, 2), Step::Finished);
        assert_eq!(state.current_pass, 1);
    }
}
