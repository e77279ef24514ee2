// crates/engine/src/lib.rs
use rayon::iter::Either;
use rayon::prelude::*;
use std::path::{Path, PathBuf};

pub mod analyzer;
pub mod config;
pub mod decode;
pub mod error;
pub mod filesystem;
pub mod options;
pub mod sniff;
pub mod stats;

use crate::analyzer::FileAnalyzer;
use crate::config::Config;
use crate::error::{EngineError, Result};
use crate::filesystem::WalkItem;
use crate::stats::{FileReport, RunResult};

/// Walk the configured roots and analyse every file found.
///
/// Reports come back in depth-first listing order regardless of how the
/// parallel walk and analysis were scheduled.
///
/// # Errors
///
/// Returns an error if the thread pool cannot be built or the walker thread
/// dies. With `config.strict`, the first per-file failure is returned;
/// otherwise failures are collected in `RunResult::errors`.
pub fn run(config: &Config) -> Result<RunResult> {
    let pool = rayon::ThreadPoolBuilder::new().num_threads(config.jobs).build()?;
    let analyzer = FileAnalyzer::with_buffer_size(config.buffer_size);

    let (tx, rx) = crossbeam_channel::bounded(1024);
    let walk_cfg = config.walk.clone();
    let walker = std::thread::spawn(move || crate::filesystem::walk_parallel(&walk_cfg, &tx));

    let iter = rx.into_iter().par_bridge();
    let process = |item: WalkItem| match item {
        Ok(path) => analyzer
            .analyze_path(&path)
            .map(|characteristics| FileReport::new(path.clone(), characteristics))
            .map_err(|e| (path, e)),
        Err(e) => {
            let path = crate::filesystem::error_path(&e).map_or_else(|| PathBuf::from("<walk>"), Path::to_path_buf);
            Err((path, EngineError::Walk(e)))
        }
    };

    let mut result = if config.strict {
        // Strict mode: fail on first error
        let reports = pool.install(|| {
            iter.map(|item| process(item).map_err(|(_, e)| e))
                .collect::<Result<Vec<_>>>()
        });
        walker.join().map_err(|_| EngineError::WalkerPanicked)?;
        RunResult {
            reports: reports?,
            errors: Vec::new(),
        }
    } else {
        // Non-strict mode: collect errors alongside successful results
        let (reports, errors): (Vec<_>, Vec<_>) = pool.install(|| {
            iter.map(process).partition_map(|r| match r {
                Ok(report) => Either::Left(report),
                Err(failure) => Either::Right(failure),
            })
        });
        walker.join().map_err(|_| EngineError::WalkerPanicked)?;
        RunResult { reports, errors }
    };

    result.reports.sort_by(FileReport::listing_order);
    result.errors.sort_by(|a, b| a.0.cmp(&b.0));

    log::info!(
        "analysed {} files ({} text, {} failed)",
        result.reports.len(),
        result.text_files().count(),
        result.errors.len()
    );
    for (path, err) in &result.errors {
        log::warn!("could not access {}: {err}", path.display());
    }

    Ok(result)
}
