use anyhow::Result;
use crossterm::event::KeyEvent;

use codebox_buffer::{EditSnapshot, History};
use codebox_config::EditorConfig;
use codebox_keyboard::{enclosing_pair, EditCommand, Platform};

use crate::text_editing;

/// What the host must do with a key event after the session saw it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyDisposition {
    /// Not intercepted; native text-input behavior applies
    Ignored,
    /// Intercepted; the host must suppress the native default action
    Handled,
    /// Escape: the host should release focus from the editing surface
    /// (and not suppress the event)
    ReleaseFocus,
}

impl KeyDisposition {
    /// Whether the host must prevent the native default action.
    pub fn is_handled(self) -> bool {
        self == KeyDisposition::Handled
    }
}

/// One editing session: a live buffer, its selection, the undo/redo
/// history and the tab-capture toggle.
///
/// Owned exclusively by one editing surface. All operations are
/// synchronous and total; every keystroke is handled to completion
/// before the next arrives.
pub struct EditSession {
    config: EditorConfig,
    platform: Platform,
    buffer: String,
    selection_start: usize,
    selection_end: usize,
    history: History,
    capture_tab: bool,
}

impl EditSession {
    /// Create a session over an empty buffer.
    pub fn new(config: EditorConfig) -> Result<Self> {
        Self::with_text(config, String::new())
    }

    /// Create a session over initial text, with the caret at the start.
    pub fn with_text(config: EditorConfig, text: impl Into<String>) -> Result<Self> {
        Self::with_platform(config, text, Platform::host())
    }

    /// Create a session with an explicit shortcut dialect.
    pub fn with_platform(
        config: EditorConfig,
        text: impl Into<String>,
        platform: Platform,
    ) -> Result<Self> {
        config.validate()?;

        let text = text.into();
        let mut history = History::new();
        history.record(EditSnapshot::with_caret(text.clone(), 0), now_ms(), false);

        codebox_logger::debug(format!("edit session created ({:?} dialect)", platform));

        Ok(Self {
            config,
            platform,
            buffer: text,
            selection_start: 0,
            selection_end: 0,
            history,
            capture_tab: true,
        })
    }

    /// Current buffer text.
    pub fn text(&self) -> &str {
        &self.buffer
    }

    /// Current selection bounds in character offsets.
    pub fn selection(&self) -> (usize, usize) {
        (self.selection_start, self.selection_end)
    }

    /// Whether Tab is currently captured by the editor.
    pub fn tab_capture(&self) -> bool {
        self.capture_tab && !self.config.ignore_tab_key
    }

    /// Current buffer plus selection, for the host to render from.
    pub fn current_snapshot(&self) -> EditSnapshot {
        EditSnapshot {
            text: self.buffer.clone(),
            selection_start: self.selection_start,
            selection_end: self.selection_end,
        }
    }

    /// Report caret/selection motion that produced no text change
    /// (mouse click, arrow keys). Bounds are clamped to the buffer and
    /// never reordered.
    pub fn set_selection(&mut self, start: usize, end: usize) {
        let max = self.buffer.chars().count();
        self.selection_start = start.min(max);
        self.selection_end = end.min(max);
    }

    /// Record an uncontrolled native edit (ordinary typed characters,
    /// paste, cut, IME input) with merge-eligibility, so free typing of a
    /// single word coalesces into one undo step.
    pub fn on_native_change(&mut self, text: impl Into<String>, start: usize, end: usize) {
        self.buffer = text.into();
        let max = self.buffer.chars().count();
        self.selection_start = start.min(max);
        self.selection_end = end.min(max);

        self.history
            .record(self.current_snapshot(), now_ms(), true);
    }

    /// Interpret one keystroke.
    ///
    /// Recognized structural actions replace the buffer and are recorded
    /// in history; undo/redo/toggle shortcuts act directly; everything
    /// else is left to the native input surface.
    pub fn on_key_down(&mut self, key: KeyEvent) -> KeyDisposition {
        let has_selection = self.selection_start != self.selection_end;
        let command = EditCommand::from_key_event(
            key,
            self.platform,
            self.capture_tab,
            self.config.ignore_tab_key,
            has_selection,
        );

        let tab = self.config.tab_character();
        let (text, start, end) = (&self.buffer, self.selection_start, self.selection_end);

        match command {
            EditCommand::ReleaseFocus => KeyDisposition::ReleaseFocus,

            EditCommand::InsertTab => {
                let snap = text_editing::insert_tab(text, start, end, &tab);
                self.apply_edit(snap);
                KeyDisposition::Handled
            }
            EditCommand::Indent => {
                let snap = text_editing::indent_lines(text, start, end, &tab);
                self.apply_edit(snap);
                KeyDisposition::Handled
            }
            EditCommand::Outdent => {
                // Tab stays suppressed even when no line changes
                if let Some(snap) = text_editing::outdent_lines(text, start, end, &tab) {
                    self.apply_edit(snap);
                }
                KeyDisposition::Handled
            }
            EditCommand::Backspace => match text_editing::dedent_backspace(text, start, end, &tab)
            {
                Some(snap) => {
                    self.apply_edit(snap);
                    KeyDisposition::Handled
                }
                None => KeyDisposition::Ignored,
            },
            EditCommand::Newline => match text_editing::auto_indent_newline(text, start, end) {
                Some(snap) => {
                    self.apply_edit(snap);
                    KeyDisposition::Handled
                }
                None => KeyDisposition::Ignored,
            },
            EditCommand::Enclose(ch) => {
                // Classification guarantees the character has a pair
                let (open, close) = enclosing_pair(ch).unwrap_or((ch, ch));
                let snap = text_editing::wrap_selection(text, start, end, open, close);
                self.apply_edit(snap);
                KeyDisposition::Handled
            }

            EditCommand::Undo => {
                self.undo();
                KeyDisposition::Handled
            }
            EditCommand::Redo => {
                self.redo();
                KeyDisposition::Handled
            }
            EditCommand::ToggleTabCapture => {
                self.capture_tab = !self.capture_tab;
                codebox_logger::debug(format!(
                    "tab capture {}",
                    if self.capture_tab { "enabled" } else { "disabled" }
                ));
                KeyDisposition::Handled
            }

            EditCommand::PassThrough => KeyDisposition::Ignored,
        }
    }

    /// Step back one history entry and apply it to the live buffer.
    /// No-op at the start of history.
    pub fn undo(&mut self) {
        if let Some(snapshot) = self.history.undo().cloned() {
            self.apply_snapshot(snapshot);
        }
    }

    /// Step forward one history entry and apply it to the live buffer.
    /// No-op at the end of history.
    pub fn redo(&mut self) {
        if let Some(snapshot) = self.history.redo().cloned() {
            self.apply_snapshot(snapshot);
        }
    }

    /// Record a structural edit and make it the live state.
    ///
    /// The current history entry's selection is synced to the live
    /// selection first, so undo restores the caret where it actually was
    /// immediately before this edit.
    fn apply_edit(&mut self, snapshot: EditSnapshot) {
        self.history
            .sync_selection(self.selection_start, self.selection_end);
        self.history.record(snapshot.clone(), now_ms(), false);
        self.apply_snapshot(snapshot);
    }

    fn apply_snapshot(&mut self, snapshot: EditSnapshot) {
        self.buffer = snapshot.text;
        self.selection_start = snapshot.selection_start;
        self.selection_end = snapshot.selection_end;
    }
}

fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
