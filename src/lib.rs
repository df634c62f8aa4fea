//! Vitest Runner Core
//!
//! Finds `describe` / `it` / `test` declarations in JavaScript and TypeScript
//! sources with Tree-sitter and derives the name filter a test runner needs
//! to execute exactly one test, or one group and everything nested in it.

pub mod cli;
pub mod command;
pub mod config;
pub mod discovery;
pub mod error;
pub mod logging;
pub mod output;
pub mod parser;
pub mod scanner;
pub mod utils;

pub use scanner::{scan, select_at, DeclarationKind, Keyword, ScanResult, Scanner, TestDeclaration};
