use std::cmp::Ordering;
use std::path::{Path, PathBuf};

use whitespace_stats_core::{FileCharacteristics, TextStatistics};

use crate::error::EngineError;

/// Analysis result for one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub path: PathBuf,
    pub characteristics: FileCharacteristics,
}

impl FileReport {
    #[must_use]
    pub const fn new(path: PathBuf, characteristics: FileCharacteristics) -> Self {
        Self { path, characteristics }
    }

    #[must_use]
    pub fn directory(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new(""))
    }

    #[must_use]
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Depth-first listing order: a directory's files by name, then its
    /// subdirectories by name.
    #[must_use]
    pub fn listing_order(&self, other: &Self) -> Ordering {
        self.directory()
            .cmp(other.directory())
            .then_with(|| self.path.file_name().cmp(&other.path.file_name()))
    }
}

/// Everything one engine run produced.
#[derive(Debug, Default)]
pub struct RunResult {
    pub reports: Vec<FileReport>,
    pub errors: Vec<(PathBuf, EngineError)>,
}

impl RunResult {
    /// Sum of the statistics of every text file.
    #[must_use]
    pub fn totals(&self) -> TextStatistics {
        let mut totals = TextStatistics::default();
        for stats in self.reports.iter().filter_map(|r| r.characteristics.statistics.as_ref()) {
            totals += *stats;
        }
        totals
    }

    pub fn text_files(&self) -> impl Iterator<Item = &FileReport> {
        self.reports.iter().filter(|r| r.characteristics.is_text)
    }
}
