use std::sync::OnceLock;

use regex::Regex;

use crate::snapshot::{line_up_to, EditSnapshot};

/// Maximum number of entries kept in the log.
pub const HISTORY_LIMIT: usize = 100;

/// Interval within which consecutive same-word records collapse into one
/// history entry, in milliseconds.
pub const MERGE_WINDOW_MS: i64 = 3000;

/// One recorded buffer state.
///
/// The timestamp is millisecond wall clock, used only for merge-window
/// decisions; ordering is always by position in the log.
#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub snapshot: EditSnapshot,
    pub timestamp: i64,
}

/// Edit history for undo/redo over complete buffer snapshots.
///
/// The log is append-only except for two truncations: the redo tail is
/// dropped whenever a new record lands, and the oldest entries are evicted
/// once the log reaches its limit. `offset` points at the entry that
/// represents the current buffer state and is meaningful only when the log
/// is non-empty.
#[derive(Debug, Clone)]
pub struct History {
    entries: Vec<HistoryEntry>,
    offset: usize,
    limit: usize,
}

impl History {
    /// Create a history bounded by [`HISTORY_LIMIT`].
    pub fn new() -> Self {
        Self::with_limit(HISTORY_LIMIT)
    }

    /// Create a history with a custom entry limit.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            entries: Vec::new(),
            offset: 0,
            limit: limit.max(1),
        }
    }

    /// Record a snapshot.
    ///
    /// Any redo entries above the current offset are discarded first. When
    /// `overwrite` is set and the incoming snapshot extends the same
    /// alphanumeric word as the current entry within the merge window, the
    /// current entry is replaced in place so that one undo step removes the
    /// whole word. Otherwise the snapshot is appended, becoming current,
    /// and the oldest entries are evicted past the limit.
    pub fn record(&mut self, snapshot: EditSnapshot, timestamp: i64, overwrite: bool) {
        // Drop the redo tail; this happens even when the record merges.
        if !self.entries.is_empty() {
            self.entries.truncate(self.offset + 1);
        }

        if overwrite {
            if let Some(last) = self.entries.get(self.offset) {
                if timestamp - last.timestamp < MERGE_WINDOW_MS
                    && continues_word(&last.snapshot, &snapshot)
                {
                    self.entries[self.offset] = HistoryEntry {
                        snapshot,
                        timestamp,
                    };
                    return;
                }
            }
        }

        self.entries.push(HistoryEntry {
            snapshot,
            timestamp,
        });
        self.offset = self.entries.len() - 1;

        // Evict oldest entries, keeping the offset on the same logical entry
        if self.entries.len() > self.limit {
            let extras = self.entries.len() - self.limit;
            self.entries.drain(..extras);
            self.offset = self.offset.saturating_sub(extras);
        }
    }

    /// Patch the current entry's selection bounds to the live selection.
    ///
    /// The caret may have moved without a text change since the last record
    /// (mouse click, arrow keys); syncing before the next record prevents
    /// undo from snapping the caret to a stale position.
    pub fn sync_selection(&mut self, selection_start: usize, selection_end: usize) {
        if let Some(entry) = self.entries.get_mut(self.offset) {
            entry.snapshot.selection_start = selection_start;
            entry.snapshot.selection_end = selection_end;
        }
    }

    /// Step back one entry and return the snapshot that is now current.
    ///
    /// No-op at the start of history.
    pub fn undo(&mut self) -> Option<&EditSnapshot> {
        if self.entries.is_empty() || self.offset == 0 {
            return None;
        }
        self.offset -= 1;
        self.entries.get(self.offset).map(|e| &e.snapshot)
    }

    /// Step forward one entry and return the snapshot that is now current.
    ///
    /// No-op at the end of history.
    pub fn redo(&mut self) -> Option<&EditSnapshot> {
        if self.offset + 1 >= self.entries.len() {
            return None;
        }
        self.offset += 1;
        self.entries.get(self.offset).map(|e| &e.snapshot)
    }

    /// The snapshot the offset currently points at.
    pub fn current(&self) -> Option<&EditSnapshot> {
        self.entries.get(self.offset).map(|e| &e.snapshot)
    }

    /// Check if undo is possible.
    pub fn can_undo(&self) -> bool {
        !self.entries.is_empty() && self.offset > 0
    }

    /// Check if redo is possible.
    pub fn can_redo(&self) -> bool {
        self.offset + 1 < self.entries.len()
    }

    /// Number of entries in the log.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the log is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Clear history.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.offset = 0;
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether `incoming` is still extending the alphanumeric word that `last`
/// ended on: both snapshots must have a trailing word before their caret,
/// and the incoming word must start with the previous one.
fn continues_word(last: &EditSnapshot, incoming: &EditSnapshot) -> bool {
    match (trailing_word(last), trailing_word(incoming)) {
        (Some(previous), Some(current)) => current.starts_with(previous),
        _ => false,
    }
}

/// The alphanumeric word ending at the snapshot's caret, if the character
/// before it is a non-word character.
fn trailing_word(snapshot: &EditSnapshot) -> Option<&str> {
    static TRAILING_WORD: OnceLock<Regex> = OnceLock::new();
    let re = TRAILING_WORD
        .get_or_init(|| Regex::new(r"(?i)[^a-z0-9]([a-z0-9]+)$").expect("valid regex"));

    let line = line_up_to(&snapshot.text, snapshot.selection_start);
    re.captures(line)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str())
}
