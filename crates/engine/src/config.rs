use crate::analyzer::DEFAULT_BUFFER_SIZE;
use crate::options::{DEFAULT_DELIMITER, OutputFormat};
use derive_builder::Builder;
use std::path::PathBuf;

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct WalkOptions {
    #[builder(default)]
    pub roots: Vec<PathBuf>,
    #[builder(default = "1")]
    pub threads: usize,
    /// Descend into directories whose name starts with `.`.
    #[builder(default)]
    pub hidden: bool,
    #[builder(default = "true")]
    pub git_ignore: bool,
    #[builder(default)]
    pub max_depth: Option<usize>,
    #[builder(default)]
    pub follow_links: bool,
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self {
            roots: vec![],
            threads: 1,
            hidden: false,
            git_ignore: true,
            max_depth: None,
            follow_links: false,
        }
    }
}

#[derive(Debug, Clone, Builder)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct Config {
    #[builder(default)]
    pub walk: WalkOptions,

    /// Number of files analysed concurrently.
    #[builder(default = "num_cpus::get()")]
    pub jobs: usize,
    #[builder(default = "DEFAULT_BUFFER_SIZE")]
    pub buffer_size: usize,
    #[builder(default)]
    pub strict: bool,

    #[builder(default)]
    pub format: OutputFormat,
    #[builder(default = "DEFAULT_DELIMITER")]
    pub delimiter: char,
    #[builder(default = "true")]
    pub header: bool,
    #[builder(default)]
    pub total_row: bool,
    /// Leave binary files out of the report.
    #[builder(default)]
    pub text_only: bool,
}

impl ConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        if self.jobs == Some(0) {
            return Err("jobs must be at least 1".to_string());
        }
        if self.buffer_size == Some(0) {
            return Err("buffer size must be at least 1 byte".to_string());
        }
        if matches!(self.delimiter, Some('"' | '\n' | '\r')) {
            return Err("delimiter cannot be a quote or a line break".to_string());
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            walk: WalkOptions::default(),
            jobs: num_cpus::get(),
            buffer_size: DEFAULT_BUFFER_SIZE,
            strict: false,
            format: OutputFormat::Csv,
            delimiter: DEFAULT_DELIMITER,
            header: true,
            total_row: false,
            text_only: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults_match_default() {
        let built = ConfigBuilder::default().build().unwrap();
        let default = Config::default();

        assert_eq!(built.jobs, default.jobs);
        assert_eq!(built.delimiter, ';');
        assert!(built.header);
        assert!(built.walk.git_ignore);
    }

    #[test]
    fn zero_jobs_is_rejected() {
        let err = ConfigBuilder::default().jobs(0usize).build().unwrap_err();
        assert!(err.to_string().contains("jobs"));
    }

    #[test]
    fn quote_delimiter_is_rejected() {
        assert!(ConfigBuilder::default().delimiter('"').build().is_err());
    }
}
