use clap::ValueEnum;

/// 一覧表示（メニュー 2）のフォーマット
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `<name> <count>` を1行ずつ
    #[default]
    Text,
    /// 品目名 → 回数の JSON オブジェクト
    Json,
}
