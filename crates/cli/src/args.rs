// crates/cli/src/args.rs
use crate::options::OutputFormat;
use clap::{ArgAction, Args as ClapArgs, Parser, ValueHint};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "whitespace_stats",
    version,
    about = "行頭/行末の空白と改行コードの統計ツール"
)]
pub struct Args {
    #[command(flatten)]
    pub output: OutputOptions,

    #[command(flatten)]
    pub scan: ScanOptions,

    #[command(flatten)]
    pub behavior: BehaviorOptions,

    /// 対象パス (省略時はカレントディレクトリ)
    #[arg(value_hint = ValueHint::AnyPath, help_heading = "走査/入力")]
    pub paths: Vec<PathBuf>,
}

#[derive(ClapArgs, Debug)]
pub struct OutputOptions {
    /// 出力フォーマット
    #[arg(long, value_enum, default_value = "csv", help_heading = "出力")]
    pub format: OutputFormat,

    /// CSV の区切り文字
    #[arg(long, default_value_t = ';', help_heading = "出力")]
    pub delimiter: char,

    /// ヘッダ行を出力しない
    #[arg(long, help_heading = "出力")]
    pub no_header: bool,

    /// CSV/TSV/表の末尾に TOTAL 行を出力
    #[arg(long, help_heading = "出力")]
    pub total_row: bool,

    /// バイナリファイルを出力から除外
    #[arg(long, help_heading = "出力")]
    pub text_only: bool,
}

#[derive(ClapArgs, Debug)]
pub struct ScanOptions {
    /// `.` で始まるディレクトリも走査
    #[arg(long, help_heading = "走査/入力")]
    pub hidden: bool,

    /// .gitignore を無視
    #[arg(long, help_heading = "走査/入力")]
    pub no_gitignore: bool,

    /// シンボリックリンクを辿る
    #[arg(long, help_heading = "走査/入力")]
    pub follow: bool,

    /// 再帰の深さ上限
    #[arg(long, help_heading = "走査/入力")]
    pub max_depth: Option<usize>,
}

#[derive(ClapArgs, Debug)]
pub struct BehaviorOptions {
    /// 並列数 (既定: CPU 数)
    #[arg(short = 'j', long, help_heading = "動作")]
    pub jobs: Option<usize>,

    /// 読めないファイルがあれば即座に失敗
    #[arg(long, help_heading = "動作")]
    pub strict: bool,

    /// 読み込みバッファのサイズ (バイト)
    #[arg(long, help_heading = "動作")]
    pub buffer_size: Option<usize>,

    /// ログを詳しく (-v: info, -vv: debug, -vvv: trace)
    #[arg(short, long, action = ArgAction::Count, help_heading = "動作")]
    pub verbose: u8,
}
