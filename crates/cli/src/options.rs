use clap::ValueEnum;
use whitespace_stats_engine::options as engine_options;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    Csv,
    Tsv,
    Table,
    Json,
    Jsonl,
    Yaml,
}

impl From<OutputFormat> for engine_options::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Csv => Self::Csv,
            OutputFormat::Tsv => Self::Tsv,
            OutputFormat::Table => Self::Table,
            OutputFormat::Json => Self::Json,
            OutputFormat::Jsonl => Self::Jsonl,
            OutputFormat::Yaml => Self::Yaml,
        }
    }
}
