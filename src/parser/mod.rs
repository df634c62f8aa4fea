//! Grammar selection and parsing for the supported source flavors.
//!
//! Tree-sitter parsing is error tolerant: malformed regions become `ERROR`
//! nodes and the rest of the file still yields a usable tree. Only a parser
//! that cannot be configured or that returns no tree at all is reported as a
//! failure.
use std::path::Path;
use tracing::trace;
use tree_sitter::{Parser, Tree};

use crate::cli::Language;
use crate::error::ParserError;

/// Label used in errors for text that did not come from a file.
pub const BUFFER_LABEL: &str = "<buffer>";

pub fn grammar(language: Language) -> tree_sitter::Language {
    match language {
        Language::Javascript => tree_sitter_javascript::LANGUAGE.into(),
        Language::Typescript => tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
        Language::Tsx => tree_sitter_typescript::LANGUAGE_TSX.into(),
    }
}

pub fn create_parser(language: Language) -> Result<Parser, ParserError> {
    let mut parser = Parser::new();
    parser
        .set_language(&grammar(language))
        .map_err(|_| ParserError::language_setup_failed(language.as_str()))?;
    Ok(parser)
}

pub fn parse(source: &str, language: Language) -> Result<Tree, ParserError> {
    parse_labeled(source, language, Path::new(BUFFER_LABEL))
}

pub fn parse_labeled(source: &str, language: Language, label: &Path) -> Result<Tree, ParserError> {
    trace!(language = language.as_str(), bytes = source.len(), "parsing source");

    let mut parser = create_parser(language)?;
    let tree = parser
        .parse(source, None)
        .ok_or_else(|| ParserError::parse_failed(label))?;

    if tree.root_node().has_error() {
        trace!(language = language.as_str(), "tree contains recoverable syntax errors");
    }
    Ok(tree)
}
