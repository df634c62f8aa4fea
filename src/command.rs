use serde::Serialize;

use crate::config::RunnerConfig;
use crate::scanner::TestDeclaration;

pub const NAME_FILTER_FLAG: &str = "-t";
pub const DEBUG_FLAG: &str = "--inspect-brk";

/// A runner invocation for one file, optionally filtered to one declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunnerCommand {
    pub base_command: String,
    pub default_args: Vec<String>,
    pub debug: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_filter: Option<String>,
    pub file: String,
}

impl RunnerCommand {
    pub fn for_file(config: &RunnerConfig, file: impl Into<String>) -> Self {
        Self {
            base_command: config.base_command.clone(),
            default_args: config.default_args.clone(),
            debug: false,
            name_filter: None,
            file: file.into(),
        }
    }

    pub fn for_declaration(
        config: &RunnerConfig,
        file: impl Into<String>,
        declaration: &TestDeclaration,
    ) -> Self {
        Self::for_file(config, file).with_name_filter(declaration.matcher_pattern.clone())
    }

    pub fn with_name_filter(mut self, pattern: impl Into<String>) -> Self {
        self.name_filter = Some(pattern.into());
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Arguments after the base command, unquoted.
    pub fn args(&self) -> Vec<String> {
        let mut args = self.default_args.clone();
        if self.debug {
            args.push(DEBUG_FLAG.to_string());
        }
        if let Some(ref pattern) = self.name_filter {
            args.push(NAME_FILTER_FLAG.to_string());
            args.push(pattern.clone());
        }
        args.push(self.file.clone());
        args
    }

    /// Command line for a POSIX shell. The base command and default args are
    /// shell text and pass through as written; the filter and file are quoted.
    pub fn to_shell_string(&self) -> String {
        let mut parts: Vec<String> = Vec::new();
        if !self.base_command.trim().is_empty() {
            parts.push(self.base_command.trim().to_string());
        }
        parts.extend(self.default_args.iter().cloned());
        if self.debug {
            parts.push(DEBUG_FLAG.to_string());
        }
        if let Some(ref pattern) = self.name_filter {
            parts.push(NAME_FILTER_FLAG.to_string());
            parts.push(shell_quote(pattern));
        }
        parts.push(shell_quote(&self.file));
        parts.join(" ")
    }
}

/// Single-quote `arg` unless it only has characters a shell leaves alone.
pub fn shell_quote(arg: &str) -> String {
    let is_plain = !arg.is_empty()
        && arg.chars().all(|c| {
            c.is_ascii_alphanumeric()
                || matches!(c, '_' | '-' | '.' | '/' | ':' | '@' | '+' | '=' | ',')
        });
    if is_plain {
        return arg.to_string();
    }
    format!("'{}'", arg.replace('\'', r"'\''"))
}
