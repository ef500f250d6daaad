//! Text field and add button at the top of the card

use crate::constants::INPUT_PLACEHOLDER;
use crate::icons::IconService;
use crate::ui::core::{Action, Component, Focus};
use crate::ui::layout::LayoutManager;
use crate::ui::theme::Palette;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Position, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::{block::BorderType, Block, Borders, Paragraph},
    Frame,
};

pub struct TaskInputComponent {
    pub content: String,
    pub focused: bool,
    pub palette: Palette,
    pub icons: IconService,
}

impl TaskInputComponent {
    pub fn new(palette: Palette, icons: IconService) -> Self {
        Self {
            content: String::new(),
            focused: true,
            palette,
            icons,
        }
    }

    pub fn update_data(&mut self, content: &str, focus: Focus, palette: Palette) {
        self.content.clear();
        self.content.push_str(content);
        self.focused = focus == Focus::Input;
        self.palette = palette;
    }

    /// Where the terminal cursor belongs while the field has focus
    #[must_use]
    pub fn cursor_position(&self, input: Rect) -> Option<Position> {
        if !self.focused || input.width < 3 || input.height < 3 {
            return None;
        }
        let visible = self.content_width().saturating_sub(self.overflow(input.width));
        let x = input.x.saturating_add(1).saturating_add(visible);
        Some(Position::new(x.min(input.right().saturating_sub(1)), input.y + 1))
    }

    /// Display width of the typed text in terminal columns
    fn content_width(&self) -> u16 {
        u16::try_from(Span::raw(self.content.as_str()).width()).unwrap_or(u16::MAX)
    }

    /// Columns scrolled off the left so the end of long input stays visible
    fn overflow(&self, input_width: u16) -> u16 {
        let visible_width = input_width.saturating_sub(1);
        self.content_width().saturating_sub(visible_width.saturating_sub(1))
    }
}

impl Component for TaskInputComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Enter => Action::AddTask,
            KeyCode::Backspace => Action::DeleteChar,
            KeyCode::Esc | KeyCode::Tab => Action::SetFocus(Focus::List),
            KeyCode::Char(c) if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
                Action::InsertChar(c)
            }
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let (input_area, button_area) = LayoutManager::split_button(rect);

        let border_style = if self.focused {
            Style::default().fg(self.palette.selection)
        } else {
            Style::default().fg(self.palette.input_border)
        };

        let text = if self.content.is_empty() {
            Span::styled(INPUT_PLACEHOLDER, Style::default().fg(self.palette.placeholder))
        } else {
            Span::styled(self.content.as_str(), Style::default().fg(self.palette.input_fg))
        };

        let field = Paragraph::new(text)
            .scroll((0, self.overflow(input_area.width)))
            .style(Style::default().bg(self.palette.input_bg))
            .block(
                Block::default()
                    .borders(Borders::TOP | Borders::BOTTOM | Borders::LEFT)
                    .border_type(BorderType::Rounded)
                    .border_style(border_style),
            );
        f.render_widget(field, input_area);

        let button = Paragraph::new(self.icons.add())
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(self.palette.add_button_fg)
                    .bg(self.palette.add_button_bg)
                    .add_modifier(Modifier::BOLD),
            )
            .block(Block::default().borders(Borders::TOP | Borders::BOTTOM).border_style(border_style));
        f.render_widget(button, button_area);
    }
}
