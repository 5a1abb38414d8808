use clap::Parser;
use match_assigner::{assign, cli, config, error, export, loader, logging, operator};
use match_assigner_common::{propose, Session};
use assign::{AssignSettings, Outcome};
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use loader::SheetSelector;
use std::collections::BTreeSet;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let config = Config::load()?;

    match cli.command {
        Commands::Run { matrix, sheet, passes, matches, candidates, output, report, auto } => {
            println!("👥 match-assigner - 割り当て\n");

            let sheet = match sheet {
                Some(s) => s,
                None => config.sheet.parse::<SheetSelector>().map_err(error::MatcherError::Config)?,
            };

            // 1. 行列読み込み
            println!("[1/3] 行列を読み込み中...");
            let score_matrix = loader::load_matrix(&matrix, &sheet)?;
            println!(
                "✔ 行列を読み込みました: {}行 × {}列\n",
                score_matrix.row_count(),
                score_matrix.column_count()
            );

            // 2. 割り当て
            let max_passes = passes.unwrap_or(config.max_passes);
            let settings = AssignSettings {
                matches_per_row: matches.unwrap_or(config.matches_per_row),
                candidate_list_size: candidates.unwrap_or(config.candidate_list_size),
                show_status: true,
            };
            println!("[2/3] 割り当て中... (パス数: {})", max_passes);
            let mut session = Session::new(score_matrix, max_passes)?;
            let outcome = if auto {
                let mut op = operator::AutoOperator { matches_per_row: settings.matches_per_row };
                assign::run_assignment(&mut session, &mut op, &settings)?
            } else {
                assign::run_assignment(&mut session, &mut operator::DialoguerOperator, &settings)?
            };
            assign::print_summary(&session);

            // 3. 出力
            println!("\n[3/3] 結果を保存中...");
            let output_dir = output.unwrap_or_else(|| std::path::PathBuf::from("."));
            export::export_session(&session, &output_dir, &config.output_file_name, report.as_deref())?;

            match outcome {
                Outcome::Finished => println!("\n✅ 完了"),
                Outcome::Quit => println!("\n✅ 途中までの結果を保存しました"),
            }
        }

        Commands::Inspect { matrix, sheet, top } => {
            let sheet = match sheet {
                Some(s) => s,
                None => config.sheet.parse::<SheetSelector>().map_err(error::MatcherError::Config)?,
            };
            let score_matrix = loader::load_matrix(&matrix, &sheet)?;
            println!("行列: {}行 × {}列", score_matrix.row_count(), score_matrix.column_count());

            let available: BTreeSet<String> = score_matrix.columns().iter().cloned().collect();
            for row in score_matrix.rows() {
                let ranked = propose(&score_matrix, row, &available, top)
                    .iter()
                    .map(|c| format!("{} ({:.4})", c.column, c.score))
                    .collect::<Vec<_>>();
                println!("  {}: {}", row, ranked.join(", "));
            }
        }

        Commands::Config { set_passes, set_matches, set_candidates, show } => {
            let mut config = config;
            let changed = set_passes.is_some() || set_matches.is_some() || set_candidates.is_some();

            if let Some(p) = set_passes {
                config.max_passes = p;
            }
            if let Some(m) = set_matches {
                config.matches_per_row = m;
            }
            if let Some(c) = set_candidates {
                config.candidate_list_size = c;
            }
            if changed {
                config.save()?;
                println!("✔ 設定を保存しました");
            }

            if show || !changed {
                println!("設定:");
                println!("  パス数: {}", config.max_passes);
                println!("  1行あたりのマッチ数: {}", config.matches_per_row);
                println!("  候補表示数: {}", config.candidate_list_size);
                println!("  シート: {}", config.sheet);
                println!("  出力ファイル名: {}", config.output_file_name);
            }
        }
    }

    Ok(())
}
