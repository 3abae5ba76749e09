//! codebox: plain-text editing core for syntax-highlighted code boxes.
//!
//! The core tracks one text buffer and its caret/selection, interprets
//! raw keystrokes into structural edits (indent, outdent,
//! auto-indent-on-newline, bracket wrapping), and maintains an undo/redo
//! history with word-aware coalescing. Rendering, syntax highlighting and
//! focus management belong to the embedding host: the host feeds key
//! events into [`EditSession::on_key_down`], reports uncontrolled native
//! edits through [`EditSession::on_native_change`], and renders from
//! [`EditSession::current_snapshot`].
//!
//! ```
//! use codebox::{EditSession, EditorConfig, KeyCode, KeyEvent, KeyModifiers, Platform};
//!
//! let mut session =
//!     EditSession::with_platform(EditorConfig::default(), "ab\ncd", Platform::Other)?;
//! session.set_selection(0, 5);
//! session.on_key_down(KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE));
//! assert_eq!(session.text(), "  ab\n  cd");
//! # anyhow::Ok(())
//! ```

pub use codebox_buffer::{EditSnapshot, History, HistoryEntry, HISTORY_LIMIT, MERGE_WINDOW_MS};
pub use codebox_config::{defaults, EditorConfig};
pub use codebox_editor::{EditSession, KeyDisposition};
pub use codebox_keyboard::{enclosing_pair, EditCommand, Platform};

// Key-event vocabulary, re-exported through codebox-keyboard
pub use codebox_keyboard::{KeyCode, KeyEvent, KeyModifiers};

/// Logging facade; a no-op unless the host calls [`logger::init`].
pub use codebox_logger as logger;
