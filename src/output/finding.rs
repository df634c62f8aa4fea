use serde::Serialize;

use crate::command::RunnerCommand;
use crate::config::RunnerConfig;
use crate::scanner::{DeclarationKind, Keyword, TestDeclaration};

/// A declaration as presented to the caller: where it is, how to filter for
/// it, and the run/debug command lines built from that filter.
#[derive(Debug, Clone, Serialize)]
pub struct Finding {
    pub file: String,
    pub line: usize,
    pub offset: usize,
    pub name: String,
    pub pattern: String,
    pub kind: DeclarationKind,
    pub keyword: Keyword,
    pub run_command: String,
    pub debug_command: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct FileError {
    pub file: String,
    pub message: String,
}

impl Finding {
    pub fn from_declaration(file: &str, declaration: &TestDeclaration, config: &RunnerConfig) -> Self {
        let command = RunnerCommand::for_declaration(config, file, declaration);

        Finding {
            file: file.to_string(),
            line: declaration.line_number,
            offset: declaration.source_offset,
            name: declaration.display_name.clone(),
            pattern: declaration.matcher_pattern.clone(),
            kind: declaration.kind,
            keyword: declaration.keyword,
            run_command: command.to_shell_string(),
            debug_command: command.with_debug(true).to_shell_string(),
        }
    }

    pub fn command(&self, debug: bool) -> &str {
        if debug {
            &self.debug_command
        } else {
            &self.run_command
        }
    }
}
