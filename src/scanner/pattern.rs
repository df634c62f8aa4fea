//! Matcher pattern composition for the runner's `-t` name filter.
//!
//! The runner matches the filter against the space-joined full name of each
//! test, so segments are joined with `.*` rather than a literal space.
use super::DeclarationKind;

/// Joins consecutive name segments.
pub const SEGMENT_SEPARATOR: &str = ".*";

const METACHARACTERS: &[char] = &[
    '.', '*', '+', '?', '^', '$', '{', '}', '(', ')', '|', '[', ']', '\\',
];

pub fn escape_regex(name: &str) -> String {
    let mut escaped = String::with_capacity(name.len());
    for c in name.chars() {
        if METACHARACTERS.contains(&c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Join already-escaped segments (outer to inner) and anchor them.
///
/// Groups are anchored only at the start so every nested test still matches.
pub fn compose_pattern<S: AsRef<str>>(segments: &[S], kind: DeclarationKind) -> String {
    let joined = segments
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(SEGMENT_SEPARATOR);

    match kind {
        DeclarationKind::Group => format!("^{joined}"),
        DeclarationKind::Case => format!("^{joined}$"),
    }
}
