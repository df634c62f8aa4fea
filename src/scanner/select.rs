use super::TestDeclaration;

/// The declaration that most recently opened at or before `cursor_offset`.
///
/// Declarations sharing the greatest offset resolve to the last one in
/// document order, which is the innermost.
pub fn select_at(declarations: &[TestDeclaration], cursor_offset: usize) -> Option<&TestDeclaration> {
    declarations
        .iter()
        .filter(|d| d.source_offset <= cursor_offset)
        .max_by_key(|d| d.source_offset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::{DeclarationKind, Keyword};

    fn declaration(name: &str, offset: usize, keyword: Keyword) -> TestDeclaration {
        TestDeclaration {
            display_name: name.to_string(),
            matcher_pattern: format!("^{name}"),
            source_offset: offset,
            line_number: 0,
            kind: keyword.kind(),
            keyword,
        }
    }

    #[test]
    fn test_select_before_first() {
        let declarations = vec![declaration("a", 5, Keyword::It)];
        assert!(select_at(&declarations, 0).is_none());
    }

    #[test]
    fn test_select_empty() {
        assert!(select_at(&[], 100).is_none());
    }

    #[test]
    fn test_select_exact_start() {
        let declarations = vec![
            declaration("group", 0, Keyword::Describe),
            declaration("case", 20, Keyword::It),
        ];
        let selected = select_at(&declarations, 20).unwrap();
        assert_eq!(selected.display_name, "case");
        assert_eq!(selected.kind, DeclarationKind::Case);
    }

    #[test]
    fn test_select_innermost_preceding() {
        let declarations = vec![
            declaration("group", 0, Keyword::Describe),
            declaration("first", 20, Keyword::It),
            declaration("second", 60, Keyword::It),
        ];
        assert_eq!(select_at(&declarations, 45).unwrap().display_name, "first");
        assert_eq!(select_at(&declarations, 10).unwrap().display_name, "group");
        assert_eq!(select_at(&declarations, 999).unwrap().display_name, "second");
    }

    #[test]
    fn test_select_ties_prefer_later() {
        let declarations = vec![
            declaration("outer", 10, Keyword::Describe),
            declaration("inner", 10, Keyword::Test),
        ];
        assert_eq!(select_at(&declarations, 10).unwrap().display_name, "inner");
    }
}
