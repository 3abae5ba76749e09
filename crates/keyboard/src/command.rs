use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::platform::Platform;

/// Matching closer for an enclosing character: asymmetric bracket pairs,
/// symmetric for quote characters.
pub fn enclosing_pair(ch: char) -> Option<(char, char)> {
    match ch {
        '(' => Some(('(', ')')),
        '[' => Some(('[', ']')),
        '{' => Some(('{', '}')),
        '\'' | '"' | '`' => Some((ch, ch)),
        _ => None,
    }
}

/// Result of classifying one keystroke.
///
/// Produced transiently per key event and never persisted. Classification
/// is buffer-independent: `Backspace` and `Newline` name candidate
/// interceptions whose final say belongs to the apply half, which can see
/// the buffer text around the caret.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditCommand {
    /// Escape: release focus from the editing surface
    ReleaseFocus,
    /// Tab with a selection: indent the spanned lines
    Indent,
    /// Shift+Tab: outdent the spanned lines
    Outdent,
    /// Tab without a selection: insert one tab unit at the caret
    InsertTab,
    /// Backspace without a selection (may delete a whole tab unit)
    Backspace,
    /// Enter without a selection (may duplicate leading indentation)
    Newline,
    /// Wrap the selection in the character's paired delimiters
    Enclose(char),
    Undo,
    Redo,
    /// Toggle whether Tab is captured by the editor
    ToggleTabCapture,
    /// Leave the keystroke to the native input surface
    PassThrough,
}

impl EditCommand {
    /// Classify a key event.
    ///
    /// Rules are checked in the documented order; the first match wins.
    /// `capture_tab` is the session's current tab-capture state and
    /// `has_selection` whether the live selection is non-empty.
    pub fn from_key_event(
        key: KeyEvent,
        platform: Platform,
        capture_tab: bool,
        ignore_tab_key: bool,
        has_selection: bool,
    ) -> Self {
        match key.code {
            KeyCode::Esc => Self::ReleaseFocus,

            // Tab is only captured while the toggle allows it; otherwise
            // it is left to native focus traversal.
            KeyCode::Tab | KeyCode::BackTab if ignore_tab_key || !capture_tab => Self::PassThrough,
            KeyCode::BackTab => Self::Outdent,
            KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => Self::Outdent,
            KeyCode::Tab if has_selection => Self::Indent,
            KeyCode::Tab => Self::InsertTab,

            KeyCode::Backspace if !has_selection => Self::Backspace,
            KeyCode::Enter if !has_selection => Self::Newline,

            KeyCode::Char(ch) if has_selection && enclosing_pair(ch).is_some() => Self::Enclose(ch),

            _ if is_undo(&key, platform) => Self::Undo,
            _ if is_redo(&key, platform) => Self::Redo,
            _ if is_capture_toggle(&key, platform) => Self::ToggleTabCapture,

            _ => Self::PassThrough,
        }
    }
}

fn is_char(code: KeyCode, expected: char) -> bool {
    matches!(code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&expected))
}

/// Undo chord: Mod+Z without Shift or Alt, where Mod is the platform's
/// primary modifier (Command on mac-like, Ctrl elsewhere).
fn is_undo(key: &KeyEvent, platform: Platform) -> bool {
    is_char(key.code, 'z')
        && key.modifiers.contains(platform.primary_modifier())
        && !key.modifiers.contains(KeyModifiers::SHIFT)
        && !key.modifiers.contains(KeyModifiers::ALT)
}

/// Redo chord: Cmd+Shift+Z on mac-like, Ctrl+Y (no Shift) on Windows,
/// Ctrl+Shift+Z on the residual default; never combined with Alt.
fn is_redo(key: &KeyEvent, platform: Platform) -> bool {
    let chord = match platform {
        Platform::MacLike => {
            is_char(key.code, 'z')
                && key.modifiers.contains(KeyModifiers::SUPER)
                && key.modifiers.contains(KeyModifiers::SHIFT)
        }
        Platform::Windows => {
            is_char(key.code, 'y')
                && key.modifiers.contains(KeyModifiers::CONTROL)
                && !key.modifiers.contains(KeyModifiers::SHIFT)
        }
        Platform::Other => {
            is_char(key.code, 'z')
                && key.modifiers.contains(KeyModifiers::CONTROL)
                && key.modifiers.contains(KeyModifiers::SHIFT)
        }
    };
    chord && !key.modifiers.contains(KeyModifiers::ALT)
}

/// Capture-toggle chord: Ctrl+Shift+M on mac-like, Ctrl+M elsewhere.
fn is_capture_toggle(key: &KeyEvent, platform: Platform) -> bool {
    is_char(key.code, 'm')
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && (platform != Platform::MacLike || key.modifiers.contains(KeyModifiers::SHIFT))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    fn classify(event: KeyEvent, platform: Platform, has_selection: bool) -> EditCommand {
        EditCommand::from_key_event(event, platform, true, false, has_selection)
    }

    #[test]
    fn test_escape_releases_focus() {
        let cmd = classify(key(KeyCode::Esc, KeyModifiers::NONE), Platform::Other, false);
        assert_eq!(cmd, EditCommand::ReleaseFocus);
    }

    #[test]
    fn test_tab_variants() {
        let platform = Platform::Other;
        assert_eq!(
            classify(key(KeyCode::Tab, KeyModifiers::NONE), platform, false),
            EditCommand::InsertTab
        );
        assert_eq!(
            classify(key(KeyCode::Tab, KeyModifiers::NONE), platform, true),
            EditCommand::Indent
        );
        assert_eq!(
            classify(key(KeyCode::Tab, KeyModifiers::SHIFT), platform, true),
            EditCommand::Outdent
        );
        // Terminals report Shift+Tab as BackTab
        assert_eq!(
            classify(key(KeyCode::BackTab, KeyModifiers::SHIFT), platform, false),
            EditCommand::Outdent
        );
    }

    #[test]
    fn test_tab_passes_through_when_not_captured() {
        let event = key(KeyCode::Tab, KeyModifiers::NONE);
        assert_eq!(
            EditCommand::from_key_event(event, Platform::Other, false, false, false),
            EditCommand::PassThrough
        );
        // ignore_tab_key wins even while capturing
        assert_eq!(
            EditCommand::from_key_event(event, Platform::Other, true, true, false),
            EditCommand::PassThrough
        );
    }

    #[test]
    fn test_backspace_and_enter_only_without_selection() {
        let platform = Platform::Other;
        assert_eq!(
            classify(key(KeyCode::Backspace, KeyModifiers::NONE), platform, false),
            EditCommand::Backspace
        );
        assert_eq!(
            classify(key(KeyCode::Backspace, KeyModifiers::NONE), platform, true),
            EditCommand::PassThrough
        );
        assert_eq!(
            classify(key(KeyCode::Enter, KeyModifiers::NONE), platform, false),
            EditCommand::Newline
        );
        assert_eq!(
            classify(key(KeyCode::Enter, KeyModifiers::NONE), platform, true),
            EditCommand::PassThrough
        );
    }

    #[test]
    fn test_enclosing_characters_require_selection() {
        let platform = Platform::Other;
        for ch in ['(', '[', '{', '\'', '"', '`'] {
            assert_eq!(
                classify(key(KeyCode::Char(ch), KeyModifiers::NONE), platform, true),
                EditCommand::Enclose(ch)
            );
            assert_eq!(
                classify(key(KeyCode::Char(ch), KeyModifiers::NONE), platform, false),
                EditCommand::PassThrough
            );
        }
        assert_eq!(
            classify(key(KeyCode::Char('x'), KeyModifiers::NONE), platform, true),
            EditCommand::PassThrough
        );
    }

    #[test]
    fn test_enclosing_pairs() {
        assert_eq!(enclosing_pair('('), Some(('(', ')')));
        assert_eq!(enclosing_pair('['), Some(('[', ']')));
        assert_eq!(enclosing_pair('{'), Some(('{', '}')));
        assert_eq!(enclosing_pair('"'), Some(('"', '"')));
        assert_eq!(enclosing_pair(')'), None);
        assert_eq!(enclosing_pair('x'), None);
    }

    #[test]
    fn test_undo_chords() {
        assert_eq!(
            classify(key(KeyCode::Char('z'), KeyModifiers::CONTROL), Platform::Other, false),
            EditCommand::Undo
        );
        assert_eq!(
            classify(key(KeyCode::Char('z'), KeyModifiers::SUPER), Platform::MacLike, false),
            EditCommand::Undo
        );
        // Ctrl+Z is not undo on mac-like; Cmd+Z is not undo elsewhere
        assert_eq!(
            classify(key(KeyCode::Char('z'), KeyModifiers::CONTROL), Platform::MacLike, false),
            EditCommand::PassThrough
        );
        assert_eq!(
            classify(key(KeyCode::Char('z'), KeyModifiers::SUPER), Platform::Other, false),
            EditCommand::PassThrough
        );
        // Alt disqualifies the chord
        assert_eq!(
            classify(
                key(KeyCode::Char('z'), KeyModifiers::CONTROL | KeyModifiers::ALT),
                Platform::Other,
                false
            ),
            EditCommand::PassThrough
        );
    }

    #[test]
    fn test_redo_chords() {
        assert_eq!(
            classify(
                key(KeyCode::Char('Z'), KeyModifiers::SUPER | KeyModifiers::SHIFT),
                Platform::MacLike,
                false
            ),
            EditCommand::Redo
        );
        assert_eq!(
            classify(key(KeyCode::Char('y'), KeyModifiers::CONTROL), Platform::Windows, false),
            EditCommand::Redo
        );
        assert_eq!(
            classify(
                key(KeyCode::Char('Z'), KeyModifiers::CONTROL | KeyModifiers::SHIFT),
                Platform::Other,
                false
            ),
            EditCommand::Redo
        );
        // Ctrl+Y belongs to the Windows dialect only
        assert_eq!(
            classify(key(KeyCode::Char('y'), KeyModifiers::CONTROL), Platform::Other, false),
            EditCommand::PassThrough
        );
        // Ctrl+Shift+Y is not redo on Windows
        assert_eq!(
            classify(
                key(KeyCode::Char('Y'), KeyModifiers::CONTROL | KeyModifiers::SHIFT),
                Platform::Windows,
                false
            ),
            EditCommand::PassThrough
        );
    }

    #[test]
    fn test_capture_toggle_chords() {
        assert_eq!(
            classify(key(KeyCode::Char('m'), KeyModifiers::CONTROL), Platform::Other, false),
            EditCommand::ToggleTabCapture
        );
        assert_eq!(
            classify(key(KeyCode::Char('m'), KeyModifiers::CONTROL), Platform::Windows, false),
            EditCommand::ToggleTabCapture
        );
        // Mac-like additionally requires Shift
        assert_eq!(
            classify(key(KeyCode::Char('m'), KeyModifiers::CONTROL), Platform::MacLike, false),
            EditCommand::PassThrough
        );
        assert_eq!(
            classify(
                key(KeyCode::Char('M'), KeyModifiers::CONTROL | KeyModifiers::SHIFT),
                Platform::MacLike,
                false
            ),
            EditCommand::ToggleTabCapture
        );
    }

    #[test]
    fn test_plain_typing_passes_through() {
        let platform = Platform::Other;
        assert_eq!(
            classify(key(KeyCode::Char('a'), KeyModifiers::NONE), platform, false),
            EditCommand::PassThrough
        );
        assert_eq!(
            classify(key(KeyCode::Left, KeyModifiers::NONE), platform, false),
            EditCommand::PassThrough
        );
        assert_eq!(
            classify(key(KeyCode::Delete, KeyModifiers::NONE), platform, false),
            EditCommand::PassThrough
        );
    }
}
