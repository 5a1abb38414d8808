//! 割り当て可能な列の管理
//!
//! 一度取り除いた列は二度と戻らない。

use crate::error::{Error, Result};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AvailabilityTracker {
    remaining: BTreeSet<String>,
}

impl AvailabilityTracker {
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            remaining: columns.into_iter().map(Into::into).collect(),
        }
    }

    /// 未割り当ての列（昇順）
    pub fn remaining(&self) -> &BTreeSet<String> {
        &self.remaining
    }

    pub fn contains(&self, column: &str) -> bool {
        self.remaining.contains(column)
    }

    pub fn len(&self) -> usize {
        self.remaining.len()
    }

    pub fn is_empty(&self) -> bool {
        self.remaining.is_empty()
    }

    /// すべての列がまだ割り当て可能か確認（重複指定も不可）
    pub fn check(&self, columns: &[String]) -> Result<()> {
        let mut seen = BTreeSet::new();
        for column in columns {
            if !self.remaining.contains(column) || !seen.insert(column.as_str()) {
                return Err(Error::NotAvailable {
                    column: column.clone(),
                });
            }
        }
        Ok(())
    }

    /// 列をまとめて取り除く
    ///
    /// 1つでも割り当て不可なら何も変更せずにエラーを返す。
    pub fn commit(&mut self, columns: &[String]) -> Result<()> {
        self.check(columns)?;
        for column in columns {
            self.remaining.remove(column);
        }
        Ok(())
    }
}
