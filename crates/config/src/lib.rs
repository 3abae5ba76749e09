//! Editor configuration for codebox.
//!
//! Provides the per-session [`EditorConfig`] with TOML support and
//! construction-time validation. The configuration is supplied by the
//! embedding caller, validated once, and never revalidated per keystroke.

mod settings;

pub use settings::EditorConfig;

/// Default values as constants
pub mod defaults {
    pub const INSERT_SPACES: bool = true;
    pub const TAB_SIZE: usize = 2;
    pub const IGNORE_TAB_KEY: bool = false;
}
