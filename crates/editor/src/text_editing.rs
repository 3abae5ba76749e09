//! Pure edit computations for structural keystrokes.
//!
//! Every function takes the live buffer text, the selection in character
//! offsets and the configured tab unit, and returns the replacement
//! snapshot, or `None` when the keystroke should fall through to the
//! native input surface. Nothing here touches session state, so each
//! rule is testable in isolation.

use codebox_buffer::{char_to_byte, line_index, line_up_to, EditSnapshot};

/// Insert one tab unit at the caret (Tab without a selection).
pub fn insert_tab(text: &str, start: usize, end: usize, tab: &str) -> EditSnapshot {
    let byte_start = char_to_byte(text, start);
    let byte_end = char_to_byte(text, end);
    let caret = start + tab.chars().count();
    EditSnapshot::with_caret(
        format!("{}{}{}", &text[..byte_start], tab, &text[byte_end..]),
        caret,
    )
}

/// Prefix every line spanned by the selection with one tab unit.
///
/// The start bound moves right by one unit only if the first spanned line
/// had a non-whitespace character before the caret; the end bound moves
/// right by one unit per spanned line. These caret heuristics are the
/// observed contract and are preserved exactly.
pub fn indent_lines(text: &str, start: usize, end: usize, tab: &str) -> EditSnapshot {
    let tab_len = tab.chars().count();
    let start_line = line_index(text, start);
    let end_line = line_index(text, end);
    let start_line_text = line_up_to(text, start);

    let next: String = text
        .split('\n')
        .enumerate()
        .map(|(index, line)| {
            if index >= start_line && index <= end_line {
                format!("{}{}", tab, line)
            } else {
                line.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("\n");

    EditSnapshot {
        text: next,
        // Don't move the start bound if there was no text before the caret
        selection_start: if start_line_text.chars().any(|c| !c.is_whitespace()) {
            start + tab_len
        } else {
            start
        },
        selection_end: end + tab_len * (end_line - start_line + 1),
    }
}

/// Remove one leading tab unit from each spanned line that starts with it.
///
/// Returns `None` when no line changed. The start bound moves left by one
/// unit only if the first spanned line's text before the caret started
/// with the unit; the end bound moves left by the total characters
/// removed. Both clamp at zero, the way a text widget clamps offsets.
pub fn outdent_lines(text: &str, start: usize, end: usize, tab: &str) -> Option<EditSnapshot> {
    let tab_len = tab.chars().count();
    let start_line = line_index(text, start);
    let end_line = line_index(text, end);

    let mut removed = 0usize;
    let next: String = text
        .split('\n')
        .enumerate()
        .map(|(index, line)| {
            if index >= start_line && index <= end_line && line.starts_with(tab) {
                removed += tab_len;
                line[tab.len()..].to_string()
            } else {
                line.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("\n");

    if removed == 0 {
        return None;
    }

    Some(EditSnapshot {
        text: next,
        selection_start: if line_up_to(text, start).starts_with(tab) {
            start.saturating_sub(tab_len)
        } else {
            start
        },
        selection_end: end.saturating_sub(removed),
    })
}

/// Delete a whole tab unit immediately before the caret, if one is there.
pub fn dedent_backspace(text: &str, start: usize, end: usize, tab: &str) -> Option<EditSnapshot> {
    let before = &text[..char_to_byte(text, start)];
    if !before.ends_with(tab) {
        return None;
    }

    let caret = start - tab.chars().count();
    Some(EditSnapshot::with_caret(
        format!(
            "{}{}",
            &text[..char_to_byte(text, caret)],
            &text[char_to_byte(text, end)..]
        ),
        caret,
    ))
}

/// Insert a newline followed by a copy of the current line's leading
/// whitespace. Returns `None` when the line has no indentation to copy.
pub fn auto_indent_newline(text: &str, start: usize, end: usize) -> Option<EditSnapshot> {
    let line = line_up_to(text, start);
    let indent: String = line.chars().take_while(|c| c.is_whitespace()).collect();
    if indent.is_empty() {
        return None;
    }

    let insert = format!("\n{}", indent);
    let caret = start + insert.chars().count();
    Some(EditSnapshot::with_caret(
        format!(
            "{}{}{}",
            &text[..char_to_byte(text, start)],
            insert,
            &text[char_to_byte(text, end)..]
        ),
        caret,
    ))
}

/// Wrap the selection in the pair's delimiters; the start bound stays put
/// and the end bound moves right past both inserted characters.
pub fn wrap_selection(
    text: &str,
    start: usize,
    end: usize,
    open: char,
    close: char,
) -> EditSnapshot {
    let byte_start = char_to_byte(text, start);
    let byte_end = char_to_byte(text, end);
    EditSnapshot {
        text: format!(
            "{}{}{}{}{}",
            &text[..byte_start],
            open,
            &text[byte_start..byte_end],
            close,
            &text[byte_end..]
        ),
        selection_start: start,
        selection_end: end + 2,
    }
}
