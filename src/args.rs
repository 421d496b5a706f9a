// src/args.rs
use crate::options::{Mode, OutputFormat};
use crate::parsers;
use clap::{Args as ClapArgs, Parser, ValueHint};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "kvscan",
    version,
    about = "JavaScript ソース中の key: value ペア集計ツール"
)]
pub struct Args {
    #[command(flatten)]
    pub output: OutputOptions,

    #[command(flatten)]
    pub scan: ScanOptions,

    #[command(flatten)]
    pub behavior: BehaviorOptions,

    /// 走査するルートディレクトリ
    #[arg(
        default_value = ".",
        value_hint = ValueHint::DirPath,
        help_heading = "走査/入力"
    )]
    pub root: PathBuf,
}

#[derive(ClapArgs, Debug)]
pub struct OutputOptions {
    /// 集計モード (pairs: ペア数, words: 値の単語数)
    #[arg(long, value_enum, default_value = "pairs", help_heading = "出力")]
    pub mode: Mode,

    /// レポートの形式
    #[arg(long, value_enum, default_value = "text", help_heading = "出力")]
    pub format: OutputFormat,

    /// 出力先ファイル (省略時はモードごとの固定ファイル名)
    #[arg(short, long, value_hint = ValueHint::FilePath, help_heading = "出力")]
    pub output: Option<PathBuf>,

    /// 上位N件のみ一覧に出力（サマリは全件）
    #[arg(long, value_parser = parsers::parse_positive_usize, help_heading = "出力")]
    pub top: Option<usize>,

    /// ペアが見つからなかったファイルも一覧に含める
    #[arg(long, help_heading = "出力")]
    pub include_empty: bool,
}

#[derive(ClapArgs, Debug)]
pub struct ScanOptions {
    /// 対象の拡張子 (カンマ区切り)
    #[arg(
        long,
        value_delimiter = ',',
        default_value = "js",
        value_parser = parsers::parse_extension,
        help_heading = "走査/入力"
    )]
    pub ext: Vec<String>,

    /// 隠しファイル/ディレクトリを除外
    #[arg(long, help_heading = "走査/入力")]
    pub no_hidden: bool,

    /// シンボリックリンクを辿る
    #[arg(long, help_heading = "走査/入力")]
    pub follow: bool,

    #[arg(long = "max-depth", value_parser = parsers::parse_positive_usize, help_heading = "走査/入力")]
    pub max_depth: Option<usize>,
}

#[derive(ClapArgs, Debug)]
pub struct BehaviorOptions {
    /// 読み込みに失敗したファイルがあれば中断
    #[arg(long, help_heading = "動作")]
    pub strict: bool,

    /// 完了メッセージを出さない
    #[arg(short, long, help_heading = "動作")]
    pub quiet: bool,

    /// 詳細ログ (RUST_LOG より優先)
    #[arg(short, long, help_heading = "動作")]
    pub verbose: bool,
}
