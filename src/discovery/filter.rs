use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

use crate::discovery::config::TESTS_DIR;

static TEST_FILE_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(test|spec)\.(t|j)sx?$").expect("valid test file regex"));

/// Paths ending in `test.ts`, `spec.jsx` and friends, or containing `__tests__`.
pub fn is_test_file(path: &Path) -> bool {
    let path = path.to_string_lossy();
    TEST_FILE_SUFFIX.is_match(&path) || path.contains(TESTS_DIR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suffix_matches() {
        for name in [
            "math.test.ts",
            "math.spec.ts",
            "Button.test.tsx",
            "util.spec.jsx",
            "index.test.js",
            "test.ts",
            "api_test.ts",
        ] {
            assert!(is_test_file(Path::new(name)), "{name}");
        }
    }

    #[test]
    fn test_suffix_needs_no_separator() {
        for name in ["latest.ts", "contest.js", "mytest.tsx", "inspect.spec.js"] {
            assert!(is_test_file(Path::new(name)), "{name}");
        }
    }

    #[test]
    fn test_tests_directory_matches() {
        assert!(is_test_file(Path::new("src/__tests__/math.ts")));
        assert!(is_test_file(Path::new("src/__tests__/fixtures/data.mjs")));
    }

    #[test]
    fn test_non_test_files() {
        for name in [
            "src/math.ts",
            "testing.ts",
            "math.test.py",
            "math.test.ts.snap",
            "esm.test.mjs",
            "esm.spec.mts",
            "math.test.cjs",
        ] {
            assert!(!is_test_file(Path::new(name)), "{name}");
        }
    }
}
