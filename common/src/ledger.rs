//! 割り当て台帳
//!
//! 確定した割り当てを確定順に保持する追記専用のリスト。

use crate::availability::AvailabilityTracker;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// 確定した割り当て1件
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentRecord {
    pub pass_number: u32,
    pub row_key: String,
    pub column_key: String,
    pub score: f64,
}

#[derive(Debug, Clone, Default)]
pub struct AssignmentLedger {
    records: Vec<AssignmentRecord>,
    columns: HashSet<String>,
}

impl AssignmentLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// 追記前の検査（台帳内・バッチ内の列重複）
    pub fn check<'a, I>(&self, columns: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut batch = HashSet::new();
        for column in columns {
            if self.columns.contains(column) || !batch.insert(column) {
                return Err(Error::DuplicateColumn {
                    column: column.to_string(),
                });
            }
        }
        Ok(())
    }

    /// まとめて追記（1件でも重複があれば何も追記しない）
    pub fn append(&mut self, records: Vec<AssignmentRecord>) -> Result<()> {
        self.check(records.iter().map(|r| r.column_key.as_str()))?;
        for record in records {
            self.columns.insert(record.column_key.clone());
            self.records.push(record);
        }
        Ok(())
    }

    /// 全件（確定順）
    pub fn all(&self) -> &[AssignmentRecord] {
        &self.records
    }

    /// 一度も割り当てられていない列（昇順）
    pub fn unassigned(&self, tracker: &AvailabilityTracker) -> Vec<String> {
        tracker.remaining().iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(pass: u32, row: &str, column: &str, score: f64) -> AssignmentRecord {
        AssignmentRecord {
            pass_number: pass,
            row_key: row.into(),
            column_key: column.into(),
            score,
        }
    }

    #[test]
    fn test_append_keeps_order() {
        let mut ledger = AssignmentLedger::new();
        ledger.append(vec![record(1, "A", "X", 0.9)]).unwrap();
        ledger.append(vec![record(1, "B", "Y", 0.7), record(1, "B", "Z", 0.2)]).unwrap();
        let cols: Vec<_> = ledger.all().iter().map(|r| r.column_key.as_str()).collect();
        assert_eq!(cols, vec!["X", "Y", "Z"]);
    }

    #[test]
    fn test_append_rejects_existing_column() {
        let mut ledger = AssignmentLedger::new();
        ledger.append(vec![record(1, "A", "X", 0.9)]).unwrap();
        let err = ledger
            .append(vec![record(2, "B", "Y", 0.1), record(2, "B", "X", 0.8)])
            .unwrap_err();
        assert!(matches!(err, Error::DuplicateColumn { ref column } if column == "X"));
        assert_eq!(ledger.len(), 1);
        assert!(ledger.check(["Y"]).is_ok());
    }

    #[test]
    fn test_append_rejects_duplicate_within_batch() {
        let mut ledger = AssignmentLedger::new();
        let result = ledger.append(vec![record(1, "A", "X", 0.9), record(1, "B", "X", 0.8)]);
        assert!(result.is_err());
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_unassigned_reflects_tracker() {
        let ledger = AssignmentLedger::new();
        let tracker = AvailabilityTracker::new(["Z", "X"]);
        assert_eq!(ledger.unassigned(&tracker), vec!["X".to_string(), "Z".to_string()]);
    }

    #[test]
    fn test_record_serializes_camel_case() {
        let json = serde_json::to_string(&record(1, "A", "X", 0.5)).unwrap();
        assert!(json.contains("\"passNumber\":1"));
        assert!(json.contains("\"columnKey\":\"X\""));
    }
}
