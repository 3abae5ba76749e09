//! Editing session for codebox.
//!
//! Ties the keystroke classifier to the history engine: an [`EditSession`]
//! owns one live buffer, its selection, the undo/redo history and the
//! tab-capture toggle, and exposes the interface the presentational
//! wrapper drives (`on_key_down`, `on_native_change`, `current_snapshot`).

mod session;
mod text_editing;

pub use session::{EditSession, KeyDisposition};
