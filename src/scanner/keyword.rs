use serde::Serialize;

/// Whether a declaration is a container of tests or a single runnable test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeclarationKind {
    Group,
    Case,
}

impl DeclarationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeclarationKind::Group => "group",
            DeclarationKind::Case => "case",
        }
    }
}

/// Test framework entry points recognized at a call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Keyword {
    Describe,
    It,
    Test,
}

impl Keyword {
    /// Tried in order against the start of the callee text.
    const ALL: [Keyword; 3] = [Keyword::Describe, Keyword::It, Keyword::Test];

    /// Resolve a callee by the keyword its text starts with, so modifiers,
    /// chained calls and helpers (`describe.skip`, `test.each(table)`,
    /// `itAsync`) keep their family.
    pub fn from_callee(callee: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|keyword| callee.starts_with(keyword.as_str()))
    }

    pub fn kind(&self) -> DeclarationKind {
        match self {
            Keyword::Describe => DeclarationKind::Group,
            Keyword::It | Keyword::Test => DeclarationKind::Case,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Keyword::Describe => "describe",
            Keyword::It => "it",
            Keyword::Test => "test",
        }
    }
}
