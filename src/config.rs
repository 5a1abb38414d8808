use crate::error::{MatcherError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// パス数（全行を何周するか）
    pub max_passes: u32,
    /// 1行あたりの既定マッチ数
    pub matches_per_row: usize,
    /// 手動選択で表示する候補数
    pub candidate_list_size: usize,
    /// 既定のシート（番号または名前）
    pub sheet: String,
    /// 既定の出力ファイル名
    pub output_file_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_passes: 2,
            matches_per_row: 2,
            candidate_list_size: 20,
            sheet: "0".into(),
            output_file_name: "assignments.xlsx".into(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            config.validate()?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| MatcherError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("match-assigner").join("config.json"))
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_passes == 0 {
            return Err(MatcherError::Config("max_passes は1以上にしてください".into()));
        }
        if self.candidate_list_size == 0 {
            return Err(MatcherError::Config(
                "candidate_list_size は1以上にしてください".into(),
            ));
        }
        if self.output_file_name.trim().is_empty() {
            return Err(MatcherError::Config("output_file_name が空です".into()));
        }
        Ok(())
    }
}
