//! Icon service for managing different icon themes
//!
//! This module provides a centralized way to manage the glyphs drawn on the
//! card's buttons and task rows, supporting emoji, Unicode, and ASCII sets.

use serde::{Deserialize, Serialize};

/// Icon theme variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconTheme {
    /// Emoji icons (colorful, modern look)
    Emoji,
    /// Unicode symbols (clean, native look)
    #[default]
    Unicode,
    /// ASCII characters (maximum compatibility)
    Ascii,
}

/// Task status icons
#[derive(Debug, Clone)]
pub struct TaskStatusIcons {
    pub pending: &'static str,
    pub completed: &'static str,
}

/// Clickable button glyphs
#[derive(Debug, Clone)]
pub struct ButtonIcons {
    pub add: &'static str,
    pub delete: &'static str,
    /// Shown in dark mode (switches to light)
    pub sun: &'static str,
    /// Shown in light mode (switches to dark)
    pub moon: &'static str,
}

/// Complete icon set for a specific theme
#[derive(Debug, Clone)]
pub struct IconSet {
    pub task_status: TaskStatusIcons,
    pub buttons: ButtonIcons,
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
            IconTheme::Emoji => Self::emoji_icons(),
            IconTheme::Unicode => Self::unicode_icons(),
            IconTheme::Ascii => Self::ascii_icons(),
        }
    }

    fn emoji_icons() -> IconSet {
        IconSet {
            task_status: TaskStatusIcons {
                pending: "⚪",
                completed: "✅",
            },
            buttons: ButtonIcons {
                add: "➕",
                delete: "🗑️",
                sun: "☀️",
                moon: "🌙",
            },
        }
    }

    fn unicode_icons() -> IconSet {
        IconSet {
            task_status: TaskStatusIcons {
                pending: "○",
                completed: "✔",
            },
            buttons: ButtonIcons {
                add: "+",
                delete: "✗",
                sun: "☀",
                moon: "☾",
            },
        }
    }

    fn ascii_icons() -> IconSet {
        IconSet {
            task_status: TaskStatusIcons {
                pending: "[ ]",
                completed: "[X]",
            },
            buttons: ButtonIcons {
                add: "+",
                delete: "x",
                sun: "*",
                moon: "C",
            },
        }
    }

    /// Convenience methods for commonly used icons
    #[must_use]
    pub fn task_pending(&self) -> &'static str {
        self.icons().task_status.pending
    }

    #[must_use]
    pub fn task_completed(&self) -> &'static str {
        self.icons().task_status.completed
    }

    /// Marker for a task in the given completion state
    #[must_use]
    pub fn task_status(&self, completed: bool) -> &'static str {
        if completed {
            self.task_completed()
        } else {
            self.task_pending()
        }
    }

    #[must_use]
    pub fn add(&self) -> &'static str {
        self.icons().buttons.add
    }

    #[must_use]
    pub fn delete(&self) -> &'static str {
        self.icons().buttons.delete
    }

    /// Theme button glyph: the sun while dark, the moon while light
    #[must_use]
    pub fn theme_toggle(&self, dark_mode: bool) -> &'static str {
        let buttons = self.icons().buttons;
        if dark_mode {
            buttons.sun
        } else {
            buttons.moon
        }
    }
}
