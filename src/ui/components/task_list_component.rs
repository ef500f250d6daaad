//! Task list component
//!
//! Each row shows the task text followed by a check target and a delete
//! target. Completed tasks are struck through and dimmed.

use crate::constants::EMPTY_LIST_MESSAGE;
use crate::icons::IconService;
use crate::todo::Task;
use crate::ui::core::{Action, Component, Focus};
use crate::ui::layout::{LayoutManager, TaskRowLayout};
use crate::ui::theme::Palette;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub struct TaskListComponent {
    pub tasks: Vec<Task>,
    pub selected: usize,
    pub scroll: usize,
    pub focused: bool,
    pub palette: Palette,
    pub icons: IconService,
}

impl TaskListComponent {
    pub fn new(palette: Palette, icons: IconService) -> Self {
        Self {
            tasks: Vec::new(),
            selected: 0,
            scroll: 0,
            focused: false,
            palette,
            icons,
        }
    }

    pub fn update_data(&mut self, tasks: &[Task], selected: usize, scroll: usize, focus: Focus, palette: Palette) {
        self.tasks = tasks.to_vec();
        self.selected = selected;
        self.scroll = scroll;
        self.focused = focus == Focus::List;
        self.palette = palette;
    }

    fn selected_task(&self) -> Option<&Task> {
        self.tasks.get(self.selected)
    }

    fn render_row(&self, f: &mut Frame, task: &Task, layout: &TaskRowLayout, selected: bool) {
        let (bg, fg) = if task.completed {
            (self.palette.completed_task_bg, self.palette.completed_task_fg)
        } else {
            (self.palette.task_bg, self.palette.task_fg)
        };

        let mut text_style = Style::default().fg(fg).bg(bg);
        if task.completed {
            text_style = text_style.add_modifier(Modifier::CROSSED_OUT);
        }
        if selected {
            text_style = text_style.fg(self.palette.selection).add_modifier(Modifier::BOLD);
        }

        let marker = if selected { "› " } else { "  " };
        let text = Paragraph::new(Line::from(vec![
            Span::styled(marker, Style::default().fg(self.palette.selection).bg(bg)),
            Span::styled(task.text.as_str(), text_style),
        ]))
        .style(Style::default().bg(bg));
        f.render_widget(text, layout.text);

        let check_color = if task.completed {
            self.palette.check_completed
        } else {
            self.palette.check_pending
        };
        let check = Paragraph::new(self.icons.task_status(task.completed))
            .alignment(Alignment::Center)
            .style(Style::default().fg(check_color).bg(bg));
        f.render_widget(check, layout.check);

        let delete = Paragraph::new(self.icons.delete())
            .alignment(Alignment::Center)
            .style(Style::default().fg(self.palette.delete).bg(bg));
        f.render_widget(delete, layout.delete);
    }
}

impl Component for TaskListComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => Action::NextTask,
            KeyCode::Char('k') | KeyCode::Up => Action::PreviousTask,
            KeyCode::Char(' ') | KeyCode::Char('x') | KeyCode::Enter => {
                self.selected_task().map_or(Action::None, |task| Action::ToggleTask(task.id))
            }
            KeyCode::Char('d') | KeyCode::Delete => {
                self.selected_task().map_or(Action::None, |task| Action::DeleteTask(task.id))
            }
            KeyCode::Char('i') | KeyCode::Char('a') | KeyCode::Tab => Action::SetFocus(Focus::Input),
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        if self.tasks.is_empty() {
            let empty = Paragraph::new(EMPTY_LIST_MESSAGE)
                .alignment(Alignment::Center)
                .style(Style::default().fg(self.palette.hint).bg(self.palette.card));
            f.render_widget(empty, rect);
            return;
        }

        let rows = LayoutManager::task_rows(rect, self.tasks.len(), self.scroll);
        for (offset, layout) in rows.iter().enumerate() {
            let index = self.scroll + offset;
            if let Some(task) = self.tasks.get(index) {
                self.render_row(f, task, layout, self.focused && index == self.selected);
            }
        }
    }
}
