use crate::loader::SheetSelector;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "match-assigner")]
#[command(about = "スコア行列から対話式にマッチを割り当てるツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 行ごとに提案を確認しながら割り当てる
    Run {
        /// スコア行列ファイル（1列目=行キー、1行目=列キー）
        #[arg(required = true)]
        matrix: PathBuf,

        /// シート番号（0始まり）またはシート名
        #[arg(short, long)]
        sheet: Option<SheetSelector>,

        /// パス数（全行を何周するか）
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
        passes: Option<u32>,

        /// 1行あたりの既定マッチ数
        #[arg(short, long)]
        matches: Option<usize>,

        /// 手動選択で表示する候補数
        #[arg(long)]
        candidates: Option<usize>,

        /// 出力Excelファイル/ディレクトリ（デフォルト: カレント）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 結果JSONの出力先
        #[arg(long)]
        report: Option<PathBuf>,

        /// 提案をすべてそのまま採用する（非対話）
        #[arg(long)]
        auto: bool,
    },

    /// 行列の概要と各行の上位候補を表示
    Inspect {
        /// スコア行列ファイル
        #[arg(required = true)]
        matrix: PathBuf,

        /// シート番号（0始まり）またはシート名
        #[arg(short, long)]
        sheet: Option<SheetSelector>,

        /// 表示する候補数
        #[arg(short, long, default_value = "3")]
        top: usize,
    },

    /// 設定を表示/編集
    Config {
        /// 既定のパス数を設定
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        set_passes: Option<u32>,

        /// 既定のマッチ数を設定
        #[arg(long)]
        set_matches: Option<usize>,

        /// 手動選択の候補数を設定
        #[arg(long)]
        set_candidates: Option<usize>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
