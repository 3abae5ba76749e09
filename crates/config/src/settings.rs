use std::path::Path;

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

use crate::defaults;

/// Editing-session configuration.
///
/// Immutable for the lifetime of a session. Validation happens at session
/// construction; an invalid configuration (a zero `tab_size`) is rejected
/// there rather than degrading silently during editing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Use spaces for indentation; a literal tab otherwise
    #[serde(default = "default_insert_spaces")]
    pub insert_spaces: bool,

    /// Width of one indentation unit in spaces
    #[serde(default = "default_tab_size")]
    pub tab_size: usize,

    /// Never capture the Tab key, leaving it to native focus traversal
    #[serde(default)]
    pub ignore_tab_key: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            insert_spaces: defaults::INSERT_SPACES,
            tab_size: defaults::TAB_SIZE,
            ignore_tab_key: defaults::IGNORE_TAB_KEY,
        }
    }
}

impl EditorConfig {
    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.tab_size == 0 {
            bail!("tab_size must be at least 1");
        }
        Ok(())
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// The configured indentation unit: `tab_size` spaces, or a single
    /// literal tab when `insert_spaces` is false.
    pub fn tab_character(&self) -> String {
        if self.insert_spaces {
            " ".repeat(self.tab_size)
        } else {
            "\t".to_string()
        }
    }
}

// Default value functions for serde
fn default_insert_spaces() -> bool {
    defaults::INSERT_SPACES
}

fn default_tab_size() -> usize {
    defaults::TAB_SIZE
}
