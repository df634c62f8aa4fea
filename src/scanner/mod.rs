mod keyword;
pub mod pattern;
mod select;

use serde::Serialize;
use std::path::Path;
use tracing::{debug, trace, warn};
use tree_sitter::{Node, Tree};

use crate::cli::{detect_language, Language};
use crate::error::{Error, IoError, ParserError};
use crate::parser;
use crate::utils::{unescape_sequence, CharOffsets};
use pattern::{compose_pattern, escape_regex};

pub use keyword::{DeclarationKind, Keyword};
pub use select::select_at;

const CALL_EXPRESSION: &str = "call_expression";
const STRING: &str = "string";
const ESCAPE_SEQUENCE: &str = "escape_sequence";
const COMMENT: &str = "comment";

/// One `describe` / `it` / `test` call with a literal name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestDeclaration {
    /// The literal name as written, with escape sequences decoded.
    pub display_name: String,
    /// Escaped, `.*`-joined, anchored filter for the runner's `-t` flag.
    pub matcher_pattern: String,
    /// Character offset of the call expression's start.
    pub source_offset: usize,
    /// Zero-based line of the call expression's start.
    pub line_number: usize,
    pub kind: DeclarationKind,
    pub keyword: Keyword,
}

/// Per-file report. A failed scan keeps an empty declaration list and
/// records why in `errors`, so callers can tell it apart from a file with
/// no tests.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ScanResult {
    pub file_path: String,
    pub declarations: Vec<TestDeclaration>,
    pub errors: Vec<String>,
}

impl ScanResult {
    pub fn new(file_path: String) -> Self {
        Self {
            file_path,
            declarations: Vec::new(),
            errors: Vec::new(),
        }
    }

    pub fn add_error(&mut self, error: String) {
        self.errors.push(error);
    }

    pub fn declaration_count(&self) -> usize {
        self.declarations.len()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn select_at(&self, cursor_offset: usize) -> Option<&TestDeclaration> {
        select_at(&self.declarations, cursor_offset)
    }
}

enum Step<'tree> {
    Visit(Node<'tree>),
    Leave,
}

#[derive(Debug, Clone, Copy)]
pub struct Scanner {
    language: Language,
}

impl Scanner {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    /// Scanner for the language implied by `path`'s extension.
    pub fn for_path(path: &Path) -> Result<Self, ParserError> {
        detect_language(path).map(Self::new).ok_or_else(|| {
            let extension = path
                .extension()
                .map(|ext| format!(".{}", ext.to_string_lossy()))
                .unwrap_or_else(|| path.display().to_string());
            ParserError::unsupported_language(extension)
        })
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn scan(&self, source: &str) -> Result<Vec<TestDeclaration>, ParserError> {
        let tree = parser::parse(source, self.language)?;
        Ok(self.scan_tree(&tree, source))
    }

    pub fn scan_bytes(&self, source: &[u8]) -> Result<Vec<TestDeclaration>, ParserError> {
        let source = std::str::from_utf8(source)
            .map_err(|e| ParserError::invalid_encoding(e.valid_up_to()))?;
        self.scan(source)
    }

    /// Scan a file on disk, degrading any failure into the report's errors.
    pub fn scan_file(&self, path: &Path) -> ScanResult {
        let mut result = ScanResult::new(path.display().to_string());

        match self.try_scan_file(path) {
            Ok(declarations) => {
                debug!(
                    file_path = %path.display(),
                    declarations = declarations.len(),
                    "scan complete"
                );
                result.declarations = declarations;
            }
            Err(e) => {
                warn!(file_path = %path.display(), error = %e, "scan failed");
                result.add_error(e.to_string());
            }
        }

        result
    }

    fn try_scan_file(&self, path: &Path) -> Result<Vec<TestDeclaration>, Error> {
        let bytes = std::fs::read(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => IoError::file_not_found(path),
            _ => IoError::read_error(path, e),
        })?;
        let source = std::str::from_utf8(&bytes)
            .map_err(|e| ParserError::invalid_encoding(e.valid_up_to()))?;
        let tree = parser::parse_labeled(source, self.language, path)?;
        Ok(self.scan_tree(&tree, source))
    }

    /// Depth-first pre-order walk collecting declarations in document order.
    ///
    /// Uses an explicit work stack; a `Leave` step queued below a matched
    /// call's children pops its name once they have all been visited.
    pub fn scan_tree(&self, tree: &Tree, source: &str) -> Vec<TestDeclaration> {
        trace!(language = self.language.as_str(), "scanning tree");

        let mut declarations = Vec::new();
        let mut names: Vec<String> = Vec::new();
        let mut offsets = CharOffsets::new(source);
        let mut cursor = tree.walk();
        let mut work = vec![Step::Visit(tree.root_node())];

        while let Some(step) = work.pop() {
            let node = match step {
                Step::Visit(node) => node,
                Step::Leave => {
                    names.pop();
                    continue;
                }
            };

            if let Some((keyword, display_name)) = match_declaration(node, source) {
                names.push(escape_regex(&display_name));
                let kind = keyword.kind();
                let declaration = TestDeclaration {
                    matcher_pattern: compose_pattern(&names, kind),
                    display_name,
                    source_offset: offsets.at(node.start_byte()),
                    line_number: node.start_position().row,
                    kind,
                    keyword,
                };
                trace!(
                    pattern = %declaration.matcher_pattern,
                    line = declaration.line_number,
                    "found declaration"
                );
                declarations.push(declaration);
                work.push(Step::Leave);
            }

            let mark = work.len();
            work.extend(node.children(&mut cursor).map(Step::Visit));
            work[mark..].reverse();
        }

        declarations
    }
}

/// Scan `source` as `language`; see [`Scanner::scan`].
pub fn scan(source: &str, language: Language) -> Result<Vec<TestDeclaration>, ParserError> {
    Scanner::new(language).scan(source)
}

fn match_declaration(node: Node<'_>, source: &str) -> Option<(Keyword, String)> {
    if node.kind() != CALL_EXPRESSION {
        return None;
    }

    let callee = node.child_by_field_name("function")?;
    let keyword = Keyword::from_callee(callee.utf8_text(source.as_bytes()).ok()?)?;

    let arguments = node.child_by_field_name("arguments")?;
    let mut cursor = arguments.walk();
    let first = arguments
        .named_children(&mut cursor)
        .find(|arg| arg.kind() != COMMENT);

    match first {
        Some(arg) if arg.kind() == STRING => Some((keyword, string_value(arg, source))),
        _ => {
            trace!(
                keyword = keyword.as_str(),
                line = node.start_position().row,
                "skipping declaration without a literal name"
            );
            None
        }
    }
}

fn string_value(node: Node<'_>, source: &str) -> String {
    let mut value = String::new();
    let mut cursor = node.walk();
    for part in node.named_children(&mut cursor) {
        let text = part.utf8_text(source.as_bytes()).unwrap_or("");
        if part.kind() == ESCAPE_SEQUENCE {
            value.push_str(&unescape_sequence(text));
        } else {
            value.push_str(text);
        }
    }
    value
}
