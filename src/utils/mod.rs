mod string;

pub use string::{
    char_to_utf16_offset, offset_at, offset_at_utf16, unescape_sequence, utf16_to_char_offset,
    CharOffsets,
};
