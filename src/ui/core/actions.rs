use crate::todo::TaskId;

/// Which part of the card receives keystrokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Input,
    List,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Input field editing
    InsertChar(char),
    DeleteChar,

    // Task operations
    AddTask,
    ToggleTask(TaskId),
    DeleteTask(TaskId),

    // Navigation
    NextTask,
    PreviousTask,
    SetFocus(Focus),

    // Appearance
    ToggleTheme,
    CycleIconTheme,
    PointerMoved { x: u16, y: u16 },

    // UI operations
    ShowDialog(DialogType),
    HideDialog,

    // App control
    Quit,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogType {
    Help,
    Logs,
}
