use crossterm::event::KeyModifiers;

/// Keyboard-shortcut dialect of the host platform.
///
/// Detected once at session startup and immutable thereafter; it only
/// affects which chords map to undo, redo and the tab-capture toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// macOS, iPhone, iPad, iPod
    MacLike,
    /// Windows
    Windows,
    /// Residual default (Linux, BSD, unknown)
    Other,
}

impl Platform {
    /// Detect the dialect from a platform identifier string.
    ///
    /// Mac-like wins over Windows when both patterns would match,
    /// mirroring the order the checks are applied in.
    pub fn detect(identifier: &str) -> Self {
        let id = identifier.to_ascii_lowercase();
        if id.contains("mac") || id.contains("iphone") || id.contains("ipad") || id.contains("ipod")
        {
            Platform::MacLike
        } else if id.contains("win") {
            Platform::Windows
        } else {
            Platform::Other
        }
    }

    /// Detect the dialect of the running host.
    pub fn host() -> Self {
        Self::detect(std::env::consts::OS)
    }

    /// The primary shortcut modifier: Command on mac-like, Ctrl elsewhere.
    pub fn primary_modifier(self) -> KeyModifiers {
        match self {
            Platform::MacLike => KeyModifiers::SUPER,
            Platform::Windows | Platform::Other => KeyModifiers::CONTROL,
        }
    }
}
