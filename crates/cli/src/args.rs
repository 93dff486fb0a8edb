// crates/cli/src/args.rs
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};
use freq_tally_engine::config::{DEFAULT_BACKUP, DEFAULT_INPUT};

use crate::options::OutputFormat;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "freq_tally",
    version = crate::VERSION,
    about = "品目ごとの出現回数を集計し、検索・一覧・ヒストグラムを対話的に表示するツール"
)]
pub struct Args {
    /// 入力ファイル（空白区切りの品目リスト）
    #[arg(long, short = 'i', default_value = DEFAULT_INPUT, value_hint = ValueHint::FilePath, help_heading = "入力")]
    pub input: PathBuf,

    /// 読み込み時に集計結果を書き出すバックアップファイル
    #[arg(long, short = 'b', default_value = DEFAULT_BACKUP, value_hint = ValueHint::FilePath, help_heading = "入力")]
    pub backup: PathBuf,

    /// ヒストグラムの描画文字
    #[arg(long, default_value_t = '*', help_heading = "出力")]
    pub marker: char,

    /// 一覧表示のフォーマット
    #[arg(long, value_enum, default_value = "text", help_heading = "出力")]
    pub format: OutputFormat,

    /// ログ出力を詳細にする（-v: info, -vv: debug）
    #[arg(long, short = 'v', action = ArgAction::Count, help_heading = "動作")]
    pub verbose: u8,
}
