//! Buffer snapshots and edit history for codebox.
//!
//! Provides the `EditSnapshot` value type (complete buffer text plus
//! caret/selection), character-offset text helpers, and the undo/redo
//! `History` with word-aware coalescing of free typing.

mod history;
mod snapshot;

pub use history::{History, HistoryEntry, HISTORY_LIMIT, MERGE_WINDOW_MS};
pub use snapshot::{char_to_byte, line_index, line_up_to, EditSnapshot};
