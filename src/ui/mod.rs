//! UI module for stardo
//!
//! This module handles the to-do card, its backgrounds, rendering, and user
//! interactions.

pub mod app_component;
pub mod components;
pub mod core;
pub mod hit_area;
pub mod layout;
pub mod renderer;
pub mod theme;

pub use app_component::{AppComponent, AppState};
pub use layout::LayoutManager;
pub use renderer::run_app;
