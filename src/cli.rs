use anyhow::{Context as AnyhowContext, Result};
use clap::{Parser, ValueEnum};
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::config::RunnerConfig;
use crate::utils::{offset_at, offset_at_utf16, utf16_to_char_offset};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Text,
    Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Javascript,
    Typescript,
    Tsx,
}

/// Unit of `--offset` and `--column`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OffsetUnit {
    /// Unicode scalar values
    Char,
    /// UTF-16 code units, as editors report cursor positions
    Utf16,
}

#[derive(Parser, Debug)]
#[command(name = "vitest-runner")]
#[command(about = "Find describe/it/test declarations and build vitest name filters", long_about = None)]
pub struct Args {
    /// Path to a test file, or a directory to search for test files
    #[arg(long, value_name = "PATH")]
    pub path: PathBuf,

    /// Language (auto-detected from the file extension if not specified)
    #[arg(short, long)]
    pub language: Option<Language>,

    /// Cursor as an absolute character offset; selects the test under the cursor
    #[arg(long, value_name = "OFFSET", conflicts_with = "line")]
    pub offset: Option<usize>,

    /// Cursor line (zero-based); selects the test under the cursor
    #[arg(long, value_name = "LINE")]
    pub line: Option<usize>,

    /// Cursor column (zero-based), used together with --line
    #[arg(long, value_name = "COLUMN", requires = "line")]
    pub column: Option<usize>,

    /// Unit of --offset and --column (char, utf16)
    #[arg(long, value_name = "UNIT", default_value = "char")]
    pub offset_unit: OffsetUnit,

    /// Output format (json, text, command)
    #[arg(short = 'f', long, default_value = "text")]
    pub format: OutputFormat,

    /// Build debug commands (adds --inspect-brk)
    #[arg(long)]
    pub debug: bool,

    /// Runner config file (JSON or YAML)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Base runner command, overrides the config file
    #[arg(long, value_name = "COMMAND")]
    pub base_command: Option<String>,

    /// Extra runner argument, overrides the config file. Can be specified multiple times.
    #[arg(long = "arg", value_name = "ARG", allow_hyphen_values = true)]
    pub runner_args: Vec<String>,

    /// Output file path (prints to stdout if not specified)
    #[arg(short = 'O', long, value_name = "FILE")]
    pub output_file: Option<PathBuf>,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

/// Where the caller's cursor sits, before it is resolved against the file text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cursor {
    Offset(usize),
    Position { line: usize, column: usize },
}

impl Args {
    pub fn validate(&self) -> Result<()> {
        validate_path(&self.path)?;
        if let Some(ref config_path) = self.config {
            if !config_path.exists() {
                anyhow::bail!("Config file does not exist: {}", config_path.display());
            }
        }
        if self.path.is_dir() && self.cursor().is_some() {
            anyhow::bail!("--offset/--line can only be used with a single file");
        }
        Ok(())
    }

    pub fn cursor(&self) -> Option<Cursor> {
        if let Some(offset) = self.offset {
            return Some(Cursor::Offset(offset));
        }
        self.line.map(|line| Cursor::Position {
            line,
            column: self.column.unwrap_or(0),
        })
    }

    /// Character offset of the cursor in `source`.
    pub fn resolve_cursor(&self, cursor: Cursor, source: &str) -> usize {
        match (cursor, self.offset_unit) {
            (Cursor::Offset(offset), OffsetUnit::Char) => offset,
            (Cursor::Offset(offset), OffsetUnit::Utf16) => utf16_to_char_offset(source, offset),
            (Cursor::Position { line, column }, OffsetUnit::Char) => {
                offset_at(source, line, column)
            }
            (Cursor::Position { line, column }, OffsetUnit::Utf16) => {
                offset_at_utf16(source, line, column)
            }
        }
    }

    /// Config file (if any) with command-line overrides applied on top.
    pub fn runner_config(&self) -> Result<RunnerConfig> {
        let mut config = match self.config {
            Some(ref path) => RunnerConfig::load(path)
                .with_context(|| format!("Cannot load config: {}", path.display()))?,
            None => RunnerConfig::default(),
        };
        if let Some(ref base_command) = self.base_command {
            config.base_command = base_command.clone();
        }
        if !self.runner_args.is_empty() {
            config.default_args = self.runner_args.clone();
        }
        Ok(config)
    }
}

pub fn detect_language(file_path: &Path) -> Option<Language> {
    file_path.extension()?.to_str().and_then(|ext| match ext {
        "js" | "jsx" | "mjs" | "cjs" => Some(Language::Javascript),
        "ts" | "mts" | "cts" => Some(Language::Typescript),
        "tsx" => Some(Language::Tsx),
        _ => None,
    })
}

pub fn validate_path(path: &Path) -> Result<()> {
    if !path.exists() {
        anyhow::bail!("Path does not exist: {}", path.display());
    }

    if path.is_file() {
        std::fs::metadata(path).with_context(|| format!("Cannot read file: {}", path.display()))?;
    } else if path.is_dir() {
        std::fs::metadata(path)
            .with_context(|| format!("Cannot read directory: {}", path.display()))?;
    } else {
        anyhow::bail!("Path is neither a file nor a directory: {}", path.display());
    }

    Ok(())
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Javascript => "javascript",
            Language::Typescript => "typescript",
            Language::Tsx => "tsx",
        }
    }
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Text => "text",
            OutputFormat::Command => "command",
        }
    }
}
