use clap::Parser;
use std::io::{self, Write};
use std::process::ExitCode;
use whitespace_stats_cli::args::Args;
use whitespace_stats_cli::config::Config;
use whitespace_stats_cli::error::Result;
use whitespace_stats_cli::presentation;

fn main() -> ExitCode {
    let args = Args::parse();
    init_logger(args.behavior.verbose);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Application Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    let config = Config::try_from(args)?;
    let result = whitespace_stats_engine::run(&config)?;

    for (path, _) in &result.errors {
        eprintln!("Could not access file: {}", path.display());
    }

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    presentation::write_results(&mut out, &result, &config)?;
    out.flush()?;
    Ok(())
}

// RUST_LOG が指定されていればそちらを優先
fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}
