#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Delimiter separated values, `;` by default.
    #[default]
    Csv,
    Tsv,
    Table,
    Json,
    Jsonl,
    Yaml,
}

/// Default field separator of delimited reports.
pub const DEFAULT_DELIMITER: char = ';';
