//! Constants used throughout the application
//!
//! This module centralizes UI text, layout limits, and the decorative
//! effect parameters.

// UI Text
pub const APP_TITLE: &str = "To-Do App";
pub const INPUT_PLACEHOLDER: &str = "Add a new task...";
pub const EMPTY_LIST_MESSAGE: &str = "Nothing to do yet. Type a task and press Enter.";
pub const STATUS_HINT_INPUT: &str = "Enter add · Tab list · Ctrl+T theme · ? help";
pub const STATUS_HINT_LIST: &str = "Space toggle · d delete · i input · t theme · ? help · q quit";

// Dialog Titles
pub const DIALOG_TITLE_HELP: &str = "Help - Press 'Esc' or '?' to close";
pub const DIALOG_TITLE_LOGS: &str = "Logs - Press 'Esc' or 'G' to close";

// Config Messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";

// Log Messages
pub const LOG_FILE_NAME: &str = "stardo.log";
pub const APP_DIR_NAME: &str = "stardo";

// UI Layout Constants
/// Minimum card width in columns
pub const CARD_MIN_WIDTH: u16 = 30;
/// Maximum card width in columns
pub const CARD_MAX_WIDTH: u16 = 120;
/// Default card width in columns
pub const CARD_DEFAULT_WIDTH: u16 = 48;

/// Fastest allowed animation tick
pub const TICK_RATE_MIN_MS: u64 = 16;
/// Slowest allowed animation tick
pub const TICK_RATE_MAX_MS: u64 = 1000;
/// Default animation tick (10 Hz)
pub const TICK_RATE_DEFAULT_MS: u64 = 100;

// Decorative Effects
/// Number of stars drawn in dark mode
pub const STAR_COUNT: usize = 100;
/// Divisor applied to the pointer position before offsetting the gradient
pub const GRADIENT_POINTER_DIVISOR: u16 = 5;
