//! Reusable UI components

pub mod background;

// Component architecture
pub mod dialog_component;
pub mod task_input_component;
pub mod task_list_component;

// Component exports
pub use background::{generate_stars, GradientWidget, Star, StarfieldWidget};
pub use dialog_component::DialogComponent;
pub use task_input_component::TaskInputComponent;
pub use task_list_component::TaskListComponent;
