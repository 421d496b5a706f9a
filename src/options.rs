use clap::ValueEnum;

/// 集計モード
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// key: value ペアの個数
    #[default]
    #[value(name = "pairs", alias = "pair-count")]
    PairCount,
    /// 値に含まれる単語数の合計
    #[value(name = "words", alias = "value-word-count")]
    ValueWordCount,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml,
}
