//! Keystroke classification for codebox.
//!
//! This crate provides the pure half of the keystroke interpreter:
//! platform shortcut-dialect detection and the mapping from raw key
//! events to [`EditCommand`] values, kept free of buffer state so the
//! classifier can be tested against literal key-event fixtures.

mod command;
mod platform;

pub use command::{enclosing_pair, EditCommand};
pub use platform::Platform;

// Re-export the key-event vocabulary so embedders do not need a direct
// crossterm dependency.
pub use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
