//! stardo - a to-do list for the terminal
//!
//! A single card holding an in-memory task list, drawn over a decorative
//! background: a green to cyan gradient that follows the pointer in light
//! mode and a twinkling star field in dark mode.
//!
//! # Modules
//!
//! * [`config`] - Application configuration management
//! * [`todo`] - The task list and its operations
//! * [`ui`] - Terminal user interface components

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Icon definitions for visual representation in the TUI
pub mod icons;

/// Logging utilities for debugging and error tracking
pub mod logger;

/// In-memory task list with add, toggle and delete
pub mod todo;

/// Terminal user interface components and rendering
pub mod ui;

pub use todo::{Task, TaskId, TaskList};
