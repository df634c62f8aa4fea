use anyhow::{Context as AnyhowContext, Result};
use clap::Parser;
use std::path::Path;
use tracing::{info, warn};
use vitest_runner_core::cli::{self, Cursor, OffsetUnit};
use vitest_runner_core::discovery::{find_test_files, is_test_file};
use vitest_runner_core::error::ParserError;
use vitest_runner_core::logging::{self, Verbosity};
use vitest_runner_core::output::OutputFormatter;
use vitest_runner_core::{ScanResult, Scanner};

fn main() -> Result<()> {
    let args = cli::Args::parse();
    logging::init(Verbosity::from_flags(args.verbose, args.quiet));
    args.validate().context("Invalid arguments")?;

    let config = args.runner_config()?;

    let rendered = if args.path.is_dir() {
        let files = find_test_files(&args.path)
            .with_context(|| format!("Cannot search directory: {}", args.path.display()))?;
        info!(count = files.len(), "scanning test files");

        let results: Vec<ScanResult> = files
            .iter()
            .filter_map(|file| scanner_for(&args, file).ok().map(|s| s.scan_file(file)))
            .collect();
        OutputFormatter::format(&results, &config, args.format, args.debug)?
    } else {
        let scanner = scanner_for(&args, &args.path)
            .context("Could not detect language. Please specify --language")?;
        if !is_test_file(&args.path) {
            warn!(path = %args.path.display(), "not a test file, scanning anyway");
        }

        let result = scanner.scan_file(&args.path);

        match args.cursor() {
            Some(cursor) => {
                let offset = resolve_cursor(&args, cursor)?;
                let selected = result.select_at(offset);
                OutputFormatter::format_selection(
                    &result,
                    selected,
                    &config,
                    args.format,
                    args.debug,
                )?
            }
            None => OutputFormatter::format(
                std::slice::from_ref(&result),
                &config,
                args.format,
                args.debug,
            )?,
        }
    };

    match args.output_file {
        Some(ref path) => std::fs::write(path, rendered)
            .with_context(|| format!("Cannot write output file: {}", path.display()))?,
        None => print!("{rendered}"),
    }

    Ok(())
}

fn scanner_for(args: &cli::Args, file: &Path) -> Result<Scanner, ParserError> {
    match args.language {
        Some(language) => Ok(Scanner::new(language)),
        None => Scanner::for_path(file),
    }
}

fn resolve_cursor(args: &cli::Args, cursor: Cursor) -> Result<usize> {
    if let (Cursor::Offset(offset), OffsetUnit::Char) = (cursor, args.offset_unit) {
        return Ok(offset);
    }
    let source = std::fs::read_to_string(&args.path)
        .with_context(|| format!("Cannot read file: {}", args.path.display()))?;
    Ok(args.resolve_cursor(cursor, &source))
}
