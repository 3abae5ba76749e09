/// One complete buffer state plus the caret/selection at that state.
///
/// Selection bounds are character offsets into `text`, half-open, with
/// `selection_start <= selection_end` by convention of the input surface
/// that produced them (the history engine never reorders them). Equal
/// bounds denote a caret with no selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSnapshot {
    pub text: String,
    pub selection_start: usize,
    pub selection_end: usize,
}

impl EditSnapshot {
    /// Create a snapshot with a caret (empty selection) at `caret`.
    pub fn with_caret(text: impl Into<String>, caret: usize) -> Self {
        Self {
            text: text.into(),
            selection_start: caret,
            selection_end: caret,
        }
    }

    /// Whether the snapshot carries a non-empty selection.
    pub fn has_selection(&self) -> bool {
        self.selection_start != self.selection_end
    }
}

/// Convert a character offset into a byte offset, clamping past-the-end
/// offsets to `text.len()`.
pub fn char_to_byte(text: &str, char_idx: usize) -> usize {
    text.char_indices()
        .nth(char_idx)
        .map(|(byte, _)| byte)
        .unwrap_or(text.len())
}

/// The current line's text up to `caret`: everything after the last
/// newline before the caret.
pub fn line_up_to(text: &str, caret: usize) -> &str {
    let head = &text[..char_to_byte(text, caret)];
    head.rsplit('\n').next().unwrap_or("")
}

/// Zero-based index of the line containing `caret`.
pub fn line_index(text: &str, caret: usize) -> usize {
    text[..char_to_byte(text, caret)].matches('\n').count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_to_byte_ascii() {
        assert_eq!(char_to_byte("abc", 0), 0);
        assert_eq!(char_to_byte("abc", 2), 2);
        assert_eq!(char_to_byte("abc", 3), 3);
        // Past the end clamps
        assert_eq!(char_to_byte("abc", 10), 3);
    }

    #[test]
    fn test_char_to_byte_multibyte() {
        let text = "aé漢b";
        assert_eq!(char_to_byte(text, 1), 1);
        assert_eq!(char_to_byte(text, 2), 3); // after 'é' (2 bytes)
        assert_eq!(char_to_byte(text, 3), 6); // after '漢' (3 bytes)
        assert_eq!(char_to_byte(text, 4), 7);
    }

    #[test]
    fn test_line_up_to() {
        assert_eq!(line_up_to("ab\ncd", 5), "cd");
        assert_eq!(line_up_to("ab\ncd", 4), "c");
        assert_eq!(line_up_to("ab\ncd", 3), "");
        assert_eq!(line_up_to("ab\ncd", 2), "ab");
        assert_eq!(line_up_to("", 0), "");
    }

    #[test]
    fn test_line_index() {
        assert_eq!(line_index("ab\ncd\nef", 0), 0);
        assert_eq!(line_index("ab\ncd\nef", 2), 0);
        assert_eq!(line_index("ab\ncd\nef", 3), 1);
        assert_eq!(line_index("ab\ncd\nef", 8), 2);
    }

    #[test]
    fn test_snapshot_selection() {
        let caret = EditSnapshot::with_caret("abc", 1);
        assert!(!caret.has_selection());

        let selected = EditSnapshot {
            text: "abc".to_string(),
            selection_start: 0,
            selection_end: 2,
        };
        assert!(selected.has_selection());
    }
}
