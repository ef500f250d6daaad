//! Pointer position tracking
//!
//! The tracker only listens between [`PointerTracker::mount`] and
//! [`PointerTracker::unmount`]. Movement is recorded regardless of theme;
//! only the light-mode gradient reads it.

use crossterm::event::{MouseEvent, MouseEventKind};

/// Last known pointer coordinates, in terminal cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointerPosition {
    pub x: u16,
    pub y: u16,
}

#[derive(Debug, Clone, Default)]
pub struct PointerTracker {
    position: PointerPosition,
    subscribed: bool,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start listening for pointer movement
    pub fn mount(&mut self) {
        self.subscribed = true;
    }

    /// Stop listening; later events are ignored
    pub fn unmount(&mut self) {
        self.subscribed = false;
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.subscribed
    }

    #[must_use]
    pub fn position(&self) -> PointerPosition {
        self.position
    }

    /// Record a pointer event. Returns true when the position changed.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> bool {
        if !self.subscribed {
            return false;
        }

        match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                let next = PointerPosition {
                    x: mouse.column,
                    y: mouse.row,
                };
                let changed = next != self.position;
                self.position = next;
                changed
            }
            _ => false,
        }
    }
}
