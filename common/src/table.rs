//! 表形式データ
//!
//! ファイル読み込み側（Excel/CSV）と行列構築側の間で受け渡す、
//! 形式に依存しないセルの格子。

/// セル値
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Number(f64),
    Text(String),
    Bool(bool),
}

impl Cell {
    /// キーとして使う文字列（前後の空白を除去）
    pub fn as_key(&self) -> String {
        match self {
            Cell::Empty => String::new(),
            Cell::Number(n) => n.to_string(),
            Cell::Text(s) => s.trim().to_string(),
            Cell::Bool(b) => b.to_string(),
        }
    }

    /// スコアとして解釈（数値でないものは0.0）
    pub fn as_score(&self) -> f64 {
        let value = match self {
            Cell::Number(n) => *n,
            Cell::Text(s) => s.trim().parse::<f64>().unwrap_or(0.0),
            Cell::Bool(true) => 1.0,
            Cell::Bool(false) | Cell::Empty => 0.0,
        };
        if value.is_nan() {
            0.0
        } else {
            value
        }
    }

    pub fn is_blank(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }
}

/// 1枚のシート分のセル格子（先頭行がヘッダー）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    pub rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn new(rows: Vec<Vec<Cell>>) -> Self {
        Self { rows }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_key_trims_text() {
        assert_eq!(Cell::Text("  Ana ".into()).as_key(), "Ana");
        assert_eq!(Cell::Number(7.0).as_key(), "7");
        assert_eq!(Cell::Empty.as_key(), "");
    }

    #[test]
    fn test_as_score_coerces_non_numeric() {
        assert_eq!(Cell::Number(0.25).as_score(), 0.25);
        assert_eq!(Cell::Text(" 0.75 ".into()).as_score(), 0.75);
        assert_eq!(Cell::Text("n/a".into()).as_score(), 0.0);
        assert_eq!(Cell::Text("NaN".into()).as_score(), 0.0);
        assert_eq!(Cell::Bool(true).as_score(), 1.0);
        assert_eq!(Cell::Empty.as_score(), 0.0);
    }

    #[test]
    fn test_is_blank() {
        assert!(Cell::Empty.is_blank());
        assert!(Cell::Text("   ".into()).is_blank());
        assert!(!Cell::Number(0.0).is_blank());
    }
}
