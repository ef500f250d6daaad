//! Clickable regions registered during rendering
//!
//! Components register the rectangles they drew together with the action a
//! left click there should trigger. The registry is cleared at the start of
//! every frame, so hit testing always matches what is on screen.

use super::core::Action;
use ratatui::layout::{Position, Rect};

#[derive(Debug, Clone, PartialEq)]
pub struct HitArea {
    pub rect: Rect,
    pub action: Action,
}

#[derive(Debug, Clone, Default)]
pub struct HitAreaRegistry {
    areas: Vec<HitArea>,
}

impl HitAreaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.areas.clear();
    }

    pub fn register(&mut self, rect: Rect, action: Action) {
        if rect.width > 0 && rect.height > 0 {
            self.areas.push(HitArea { rect, action });
        }
    }

    /// Action of the topmost area containing the cell, if any
    #[must_use]
    pub fn hit_test(&self, column: u16, row: u16) -> Option<Action> {
        let position = Position::new(column, row);
        self.areas
            .iter()
            .rev()
            .find(|area| area.rect.contains(position))
            .map(|area| area.action.clone())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.areas.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }
}
