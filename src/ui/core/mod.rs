//! Core UI functionality for stardo.
//!
//! This module contains the building blocks the card is made of: actions,
//! the component trait, terminal event polling, and pointer tracking.
//!
//! # Module Components
//!
//! - [`actions`] - Action definitions and UI state transitions
//! - [`component`] - Base component trait and rendering abstractions
//! - [`event_handler`] - Terminal event polling and animation ticks
//! - [`pointer`] - Mount-scoped pointer position tracking
//!
//! Components translate raw input into [`Action`]s, and the app component
//! applies each action to its state before the next render.

pub mod actions;
pub mod component;
pub mod event_handler;
pub mod pointer;

pub use actions::{Action, DialogType, Focus};
pub use component::Component;
pub use event_handler::{EventHandler, EventType};
pub use pointer::{PointerPosition, PointerTracker};
