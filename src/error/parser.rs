use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParserError {
    #[error("unsupported language: {language}")]
    UnsupportedLanguage { language: String },

    #[error("failed to set parser language: {language}")]
    LanguageSetupFailed { language: String },

    #[error("failed to parse source code in {path}")]
    ParseFailed { path: PathBuf },

    #[error("source is not valid UTF-8 (first invalid byte at offset {offset})")]
    InvalidEncoding { offset: usize },
}

impl ParserError {
    pub fn unsupported_language(language: impl Into<String>) -> Self {
        Self::UnsupportedLanguage {
            language: language.into(),
        }
    }

    pub fn language_setup_failed(language: impl Into<String>) -> Self {
        Self::LanguageSetupFailed {
            language: language.into(),
        }
    }

    pub fn parse_failed(path: impl Into<PathBuf>) -> Self {
        Self::ParseFailed { path: path.into() }
    }

    pub fn invalid_encoding(offset: usize) -> Self {
        Self::InvalidEncoding { offset }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_language_display() {
        let err = ParserError::unsupported_language("coffeescript");
        assert_eq!(err.to_string(), "unsupported language: coffeescript");
    }

    #[test]
    fn test_parse_failed_display() {
        let err = ParserError::parse_failed("src/math.test.ts");
        assert_eq!(
            err.to_string(),
            "failed to parse source code in src/math.test.ts"
        );
    }

    #[test]
    fn test_invalid_encoding_display() {
        let err = ParserError::invalid_encoding(12);
        assert_eq!(
            err.to_string(),
            "source is not valid UTF-8 (first invalid byte at offset 12)"
        );
    }
}
