//! Help and logs overlays

use crate::constants::{DIALOG_TITLE_HELP, DIALOG_TITLE_LOGS};
use crate::ui::core::{Action, Component, DialogType};
use crate::ui::layout::LayoutManager;
use crate::ui::theme::Palette;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    widgets::{block::BorderType, Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const HELP_TEXT: &str = "\
TYPING A TASK
-------------
Type        Edit the new task
Enter       Add the task (blank input is ignored)
Backspace   Delete the last character
Tab/Esc     Move to the task list

TASK LIST
---------
j/k ↑/↓     Select task
Space/x     Toggle completed
Enter       Toggle completed
d/Delete    Delete task
i/a/Tab     Back to the input field

GENERAL
-------
t, Ctrl+T   Toggle light/dark theme
?, F1       Toggle this help
G           Show logs
I           Cycle the icon set
q           Quit (from the list)
Ctrl+C      Quit

MOUSE
-----
Click the task text or its check mark to toggle it, the cross to delete
it, the button beside the field to add, and the top-right button to
switch themes. In light mode the background follows the pointer.
";

pub struct DialogComponent {
    pub dialog_type: Option<DialogType>,
    pub logs: Vec<String>,
    pub palette: Palette,
    scroll: u16,
}

impl DialogComponent {
    pub fn new(palette: Palette) -> Self {
        Self {
            dialog_type: None,
            logs: Vec::new(),
            palette,
            scroll: 0,
        }
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.dialog_type.is_some()
    }

    pub fn update_data(&mut self, logs: Vec<String>, palette: Palette) {
        self.logs = logs;
        self.palette = palette;
    }

    fn content(&self) -> (String, &'static str) {
        match self.dialog_type {
            Some(DialogType::Logs) => {
                let body = if self.logs.is_empty() {
                    "No log entries yet.".to_string()
                } else {
                    self.logs.join("\n")
                };
                (body, DIALOG_TITLE_LOGS)
            }
            _ => (HELP_TEXT.to_string(), DIALOG_TITLE_HELP),
        }
    }
}

impl Component for DialogComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match (key.code, self.dialog_type) {
            (KeyCode::Esc, _) | (KeyCode::Char('q'), _) => Action::HideDialog,
            (KeyCode::Char('?') | KeyCode::F(1), Some(DialogType::Help)) => Action::HideDialog,
            (KeyCode::Char('G'), Some(DialogType::Logs)) => Action::HideDialog,
            (KeyCode::Up | KeyCode::Char('k'), _) => {
                self.scroll = self.scroll.saturating_sub(1);
                Action::None
            }
            (KeyCode::Down | KeyCode::Char('j'), _) => {
                self.scroll = self.scroll.saturating_add(1);
                Action::None
            }
            (KeyCode::Home, _) => {
                self.scroll = 0;
                Action::None
            }
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::ShowDialog(dialog_type) => {
                self.dialog_type = Some(dialog_type);
                self.scroll = 0;
                Action::None
            }
            Action::HideDialog => {
                self.dialog_type = None;
                Action::None
            }
            other => other,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        if !self.is_visible() {
            return;
        }

        let (width, height) = LayoutManager::dialog_dimensions(rect.width, rect.height);
        let area = LayoutManager::centered_rect(width, height, rect);
        let (body, title) = self.content();

        let max_scroll = (body.lines().count() as u16).saturating_sub(area.height.saturating_sub(2));
        self.scroll = self.scroll.min(max_scroll);

        let paragraph = Paragraph::new(body)
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0))
            .style(Style::default().fg(self.palette.title).bg(self.palette.card))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(self.palette.selection))
                    .title(title)
                    .title_alignment(Alignment::Center),
            );

        f.render_widget(Clear, area);
        f.render_widget(paragraph, area);
    }
}
