//! Icon service for managing different icon themes
//!
//! Toasts show one glyph per notification kind plus the close and action
//! affordances. Themes cover emoji, Unicode symbols and an ASCII fallback.

use crate::notification::Kind;
use serde::{Deserialize, Serialize};

/// Icon theme variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum IconTheme {
    /// Emoji icons (colorful, modern look)
    Emoji,
    /// Unicode symbols (clean, native look)
    Unicode,
    /// ASCII characters (maximum compatibility)
    #[default]
    Ascii,
}

/// Complete icon set for a specific theme
#[derive(Debug, Clone)]
pub struct IconSet {
    pub success: &'static str,
    pub error: &'static str,
    pub warning: &'static str,
    pub info: &'static str,
    pub close: &'static str,
    pub action: &'static str,
}

/// Icon service for managing themes and providing icons
#[derive(Debug, Clone, Default)]
pub struct IconService {
    current_theme: IconTheme,
}

impl IconService {
    /// Create a new icon service with the specified theme
    #[must_use]
    pub fn new(theme: IconTheme) -> Self {
        Self { current_theme: theme }
    }

    #[must_use]
    pub fn theme(&self) -> IconTheme {
        self.current_theme
    }

    pub fn set_theme(&mut self, theme: IconTheme) {
        self.current_theme = theme;
    }

    /// Cycle to the next icon theme in the sequence: Ascii -> Unicode -> Emoji -> Ascii
    pub fn cycle_icon_theme(&mut self) {
        self.current_theme = match self.current_theme {
            IconTheme::Ascii => IconTheme::Unicode,
            IconTheme::Unicode => IconTheme::Emoji,
            IconTheme::Emoji => IconTheme::Ascii,
        };
    }

    /// Get the complete icon set for the current theme
    #[must_use]
    pub fn icons(&self) -> IconSet {
        match self.current_theme {
            IconTheme::Emoji => IconSet {
                success: "✅",
                error: "❌",
                warning: "⚠️",
                info: "💡",
                close: "✖️",
                action: "👉",
            },
            IconTheme::Unicode => IconSet {
                success: "✓",
                error: "✗",
                warning: "⚠",
                info: "ⓘ",
                close: "×",
                action: "▸",
            },
            IconTheme::Ascii => IconSet {
                success: "+",
                error: "X",
                warning: "!",
                info: "i",
                close: "x",
                action: ">",
            },
        }
    }

    /// Glyph shown next to a notification of the given kind
    #[must_use]
    pub fn kind(&self, kind: Kind) -> &'static str {
        let icons = self.icons();
        match kind {
            Kind::Success => icons.success,
            Kind::Error => icons.error,
            Kind::Warning => icons.warning,
            Kind::Info => icons.info,
        }
    }

    #[must_use]
    pub fn close(&self) -> &'static str {
        self.icons().close
    }

    #[must_use]
    pub fn action(&self) -> &'static str {
        self.icons().action
    }
}
