//! セッション結果のスナップショット（JSON出力用）

use crate::error::Result;
use crate::ledger::AssignmentRecord;
use crate::session::Session;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionReport {
    /// 出力日時（呼び出し側で設定）
    #[serde(default)]
    pub generated_at: String,
    pub passes_run: u32,
    pub max_passes: u32,
    pub row_count: usize,
    pub column_count: usize,
    pub finished: bool,
    pub assignments: Vec<AssignmentRecord>,
    pub unassigned: Vec<String>,
}

impl SessionReport {
    pub fn from_session(session: &Session) -> Self {
        Self {
            generated_at: String::new(),
            passes_run: session.state().current_pass,
            max_passes: session.state().max_passes,
            row_count: session.matrix().row_count(),
            column_count: session.matrix().column_count(),
            finished: session.is_finished(),
            assignments: session.ledger().all().to_vec(),
            unassigned: session.unassigned(),
        }
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
