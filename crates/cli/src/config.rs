// crates/cli/src/config.rs
use crate::args::Args;
use crate::error::AppError;
pub use whitespace_stats_engine::config::{Config, ConfigBuilder, WalkOptions, WalkOptionsBuilder};
use std::path::PathBuf;

impl TryFrom<Args> for Config {
    type Error = AppError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let walk = walk_options_from_args(&args)?;

        let mut builder = ConfigBuilder::default();
        builder
            .walk(walk)
            .format(args.output.format)
            .delimiter(args.output.delimiter)
            .header(!args.output.no_header)
            .total_row(args.output.total_row)
            .text_only(args.output.text_only)
            .strict(args.behavior.strict);

        // 未指定の項目は engine の既定値に任せる
        if let Some(jobs) = args.behavior.jobs {
            builder.jobs(jobs);
        }
        if let Some(size) = args.behavior.buffer_size {
            builder.buffer_size(size);
        }

        builder.build().map_err(|e| AppError::Config(e.to_string()))
    }
}

fn walk_options_from_args(args: &Args) -> Result<WalkOptions, AppError> {
    let scan = &args.scan;

    let roots = if args.paths.is_empty() {
        vec![PathBuf::from(".")]
    } else {
        args.paths.clone()
    };

    let walk_threads = args.behavior.jobs.unwrap_or_else(num_cpus::get).max(1);

    WalkOptionsBuilder::default()
        .roots(roots)
        .threads(walk_threads)
        .hidden(scan.hidden)
        .git_ignore(!scan.no_gitignore)
        .max_depth(scan.max_depth)
        .follow_links(scan.follow)
        .build()
        .map_err(|e| AppError::Config(e.to_string()))
}
