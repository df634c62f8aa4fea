use anyhow::Result;
use serde::Serialize;
use std::fmt::Write as _;

use crate::cli::OutputFormat;
use crate::command::RunnerCommand;
use crate::config::RunnerConfig;
use crate::scanner::{ScanResult, TestDeclaration};

use super::{FileError, Finding};

#[derive(Debug, Serialize)]
pub struct JsonOutput {
    pub files_scanned: usize,
    pub total_declarations: usize,
    pub findings: Vec<Finding>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<FileError>,
}

#[derive(Debug, Serialize)]
pub struct SelectionOutput {
    pub file: String,
    pub selected: Option<Finding>,
    pub command: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

pub struct OutputFormatter;

impl OutputFormatter {
    pub fn format(
        results: &[ScanResult],
        config: &RunnerConfig,
        format: OutputFormat,
        debug: bool,
    ) -> Result<String> {
        let output = Self::build_output(results, config);

        match format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&output)?),
            OutputFormat::Text => Self::render_text(results),
            OutputFormat::Command => Ok(output
                .findings
                .iter()
                .map(|f| format!("{}\n", f.command(debug)))
                .collect()),
        }
    }

    pub fn build_output(results: &[ScanResult], config: &RunnerConfig) -> JsonOutput {
        let findings: Vec<Finding> = results
            .iter()
            .flat_map(|r| {
                r.declarations
                    .iter()
                    .map(|d| Finding::from_declaration(&r.file_path, d, config))
            })
            .collect();

        let errors: Vec<FileError> = results
            .iter()
            .flat_map(|r| {
                r.errors.iter().map(|message| FileError {
                    file: r.file_path.clone(),
                    message: message.clone(),
                })
            })
            .collect();

        JsonOutput {
            files_scanned: results.len(),
            total_declarations: findings.len(),
            findings,
            errors,
        }
    }

    /// Render "test under cursor". With nothing selected the command runs the
    /// whole file.
    pub fn format_selection(
        result: &ScanResult,
        selected: Option<&TestDeclaration>,
        config: &RunnerConfig,
        format: OutputFormat,
        debug: bool,
    ) -> Result<String> {
        let finding = selected.map(|d| Finding::from_declaration(&result.file_path, d, config));
        let command = match finding {
            Some(ref f) => f.command(debug).to_string(),
            None => RunnerCommand::for_file(config, result.file_path.clone())
                .with_debug(debug)
                .to_shell_string(),
        };

        match format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&SelectionOutput {
                file: result.file_path.clone(),
                selected: finding,
                command,
                errors: result.errors.clone(),
            })?),
            OutputFormat::Text => {
                let mut text = String::new();
                match finding {
                    Some(f) => writeln!(
                        text,
                        "{}:{} {} {}",
                        f.file,
                        f.line + 1,
                        f.kind.as_str(),
                        f.pattern
                    )?,
                    None => writeln!(text, "{}: no test at cursor, running whole file", result.file_path)?,
                }
                writeln!(text, "{command}")?;
                Ok(text)
            }
            OutputFormat::Command => Ok(format!("{command}\n")),
        }
    }

    fn render_text(results: &[ScanResult]) -> Result<String> {
        let mut text = String::new();
        for result in results {
            writeln!(
                text,
                "{}: {} declaration(s)",
                result.file_path,
                result.declaration_count()
            )?;
            for declaration in &result.declarations {
                writeln!(
                    text,
                    "  {:>4}  {:<5}  {}",
                    declaration.line_number + 1,
                    declaration.kind.as_str(),
                    declaration.matcher_pattern
                )?;
            }
            for error in &result.errors {
                writeln!(text, "  error: {error}")?;
            }
        }
        Ok(text)
    }
}
