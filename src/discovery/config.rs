pub const FILE_EXTENSIONS: &[&str] = &["js", "jsx", "ts", "tsx", "mjs", "cjs", "mts", "cts"];

pub const EXCLUDED_DIRS: &[&str] = &[
    ".git",
    "node_modules",
    ".next",
    ".nuxt",
    "dist",
    "build",
    "coverage",
];

/// Path fragment that marks a source file as a test file wherever it appears.
pub const TESTS_DIR: &str = "__tests__";
