/// Decode one JavaScript escape sequence (including its leading backslash).
///
/// Unknown escapes decode to the escaped character itself, matching the
/// language's non-strict behavior; a line continuation decodes to nothing.
pub fn unescape_sequence(seq: &str) -> String {
    let Some(body) = seq.strip_prefix('\\') else {
        return seq.to_string();
    };

    let mut chars = body.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };

    match first {
        'n' => "\n".to_string(),
        't' => "\t".to_string(),
        'r' => "\r".to_string(),
        'b' => "\u{8}".to_string(),
        'f' => "\u{c}".to_string(),
        'v' => "\u{b}".to_string(),
        '0' if body.len() == 1 => "\0".to_string(),
        '\n' | '\r' | '\u{2028}' | '\u{2029}' => String::new(),
        'x' => decode_code_point(&body[1..]).unwrap_or_else(|| body.to_string()),
        'u' => {
            let hex = body[1..].trim_start_matches('{').trim_end_matches('}');
            decode_code_point(hex).unwrap_or_else(|| body.to_string())
        }
        other => other.to_string(),
    }
}

fn decode_code_point(hex: &str) -> Option<String> {
    u32::from_str_radix(hex, 16)
        .ok()
        .and_then(char::from_u32)
        .map(String::from)
}

/// Converts byte offsets into character offsets for one source text.
///
/// Lookups are expected in ascending order; a lookup behind the last one
/// restarts from the beginning of the text.
pub struct CharOffsets<'a> {
    source: &'a str,
    byte: usize,
    chars: usize,
}

impl<'a> CharOffsets<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            byte: 0,
            chars: 0,
        }
    }

    pub fn at(&mut self, byte: usize) -> usize {
        if byte < self.byte {
            self.byte = 0;
            self.chars = 0;
        }
        let byte = byte.min(self.source.len());
        self.chars += self
            .source
            .get(self.byte..byte)
            .map_or(0, |s| s.chars().count());
        self.byte = byte;
        self.chars
    }
}

/// Absolute character offset of a zero-based (line, column) position.
///
/// Columns past the end of a line clamp to the line end, lines past the end
/// of the text clamp to the end of the text.
pub fn offset_at(source: &str, line: usize, column: usize) -> usize {
    line_offset(source, line, |content| column.min(content.chars().count()))
}

/// Like [`offset_at`], with `column` counted in UTF-16 code units.
pub fn offset_at_utf16(source: &str, line: usize, column: usize) -> usize {
    line_offset(source, line, |content| utf16_to_char_offset(content, column))
}

fn line_offset(source: &str, line: usize, column_chars: impl Fn(&str) -> usize) -> usize {
    let mut offset = 0;
    for (index, text) in source.split_inclusive('\n').enumerate() {
        let content = text.trim_end_matches('\n').trim_end_matches('\r');
        if index == line {
            return offset + column_chars(content);
        }
        offset += text.chars().count();
    }
    offset
}

/// Character offset of a UTF-16 code unit offset, as editors report cursors.
///
/// An offset inside a surrogate pair resolves to the character it splits.
/// Offsets past the end clamp to the end of the text.
pub fn utf16_to_char_offset(source: &str, utf16: usize) -> usize {
    let mut units = 0;
    for (index, c) in source.chars().enumerate() {
        units += c.len_utf16();
        if units > utf16 {
            return index;
        }
    }
    source.chars().count()
}

/// UTF-16 code unit offset of a character offset.
pub fn char_to_utf16_offset(source: &str, chars: usize) -> usize {
    source.chars().take(chars).map(char::len_utf16).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unescape_simple() {
        assert_eq!(unescape_sequence("\\n"), "\n");
        assert_eq!(unescape_sequence("\\t"), "\t");
        assert_eq!(unescape_sequence("\\'"), "'");
        assert_eq!(unescape_sequence("\\\""), "\"");
        assert_eq!(unescape_sequence("\\\\"), "\\");
    }

    #[test]
    fn test_unescape_hex_and_unicode() {
        assert_eq!(unescape_sequence("\\x41"), "A");
        assert_eq!(unescape_sequence("\\u00e9"), "é");
        assert_eq!(unescape_sequence("\\u{1F600}"), "😀");
    }

    #[test]
    fn test_unescape_line_continuation() {
        assert_eq!(unescape_sequence("\\\n"), "");
    }

    #[test]
    fn test_unescape_unknown_keeps_char() {
        assert_eq!(unescape_sequence("\\q"), "q");
    }

    #[test]
    fn test_char_offsets_ascii() {
        let mut offsets = CharOffsets::new("abc def");
        assert_eq!(offsets.at(0), 0);
        assert_eq!(offsets.at(4), 4);
        assert_eq!(offsets.at(7), 7);
    }

    #[test]
    fn test_char_offsets_multibyte() {
        let source = "// ñé\nit('x')";
        let mut offsets = CharOffsets::new(source);
        let byte = source.find("it").unwrap();
        assert_eq!(byte, 8);
        assert_eq!(offsets.at(byte), 6);
    }

    #[test]
    fn test_char_offsets_rewind() {
        let mut offsets = CharOffsets::new("héllo");
        assert_eq!(offsets.at(6), 5);
        assert_eq!(offsets.at(3), 2);
    }

    #[test]
    fn test_offset_at() {
        let source = "line0\nline1\r\nline2";
        assert_eq!(offset_at(source, 0, 0), 0);
        assert_eq!(offset_at(source, 1, 2), 8);
        assert_eq!(offset_at(source, 2, 0), 13);
    }

    #[test]
    fn test_offset_at_clamps() {
        let source = "ab\ncd";
        assert_eq!(offset_at(source, 0, 99), 2);
        assert_eq!(offset_at(source, 9, 0), 5);
    }

    #[test]
    fn test_utf16_to_char_offset() {
        let source = "😀it('x')";
        assert_eq!(utf16_to_char_offset(source, 0), 0);
        assert_eq!(utf16_to_char_offset(source, 1), 0);
        assert_eq!(utf16_to_char_offset(source, 2), 1);
        assert_eq!(utf16_to_char_offset(source, 4), 3);
        assert_eq!(utf16_to_char_offset(source, 99), 8);
    }

    #[test]
    fn test_char_to_utf16_offset() {
        let source = "é😀it";
        assert_eq!(char_to_utf16_offset(source, 0), 0);
        assert_eq!(char_to_utf16_offset(source, 1), 1);
        assert_eq!(char_to_utf16_offset(source, 2), 3);
        assert_eq!(char_to_utf16_offset(source, 99), 5);
    }

    #[test]
    fn test_offset_at_utf16() {
        let source = "// 😀\n  it('x')";
        assert_eq!(offset_at_utf16(source, 1, 2), 7);
        assert_eq!(offset_at(source, 1, 2), 7);
        assert_eq!(offset_at_utf16(source, 0, 5), 4);
        assert_eq!(offset_at_utf16(source, 0, 99), 4);
    }
}
