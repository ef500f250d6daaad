use crate::config::UiConfig;
use crate::constants::{APP_TITLE, STATUS_HINT_INPUT, STATUS_HINT_LIST};
use crate::icons::{IconService, IconTheme};
use crate::logger::Logger;
use crate::todo::{TaskId, TaskList};
use crate::ui::components::{
    generate_stars, DialogComponent, GradientWidget, Star, StarfieldWidget, TaskInputComponent, TaskListComponent,
};
use crate::ui::core::{Action, Component, DialogType, EventType, Focus, PointerPosition, PointerTracker};
use crate::ui::hit_area::HitAreaRegistry;
use crate::ui::layout::{CardLayout, LayoutManager};
use crate::ui::theme::{Palette, ThemeMode};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{block::BorderType, Block, Borders, Clear, Paragraph},
    Frame,
};
use std::time::Instant;

/// Application state separate from UI concerns
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub tasks: TaskList,
    pub pending_input: String,
    pub dark_mode: bool,
    pub pointer: PointerTracker,
    pub focus: Focus,
    pub selected: usize,
    pub scroll: usize,
}

impl AppState {
    #[must_use]
    pub fn theme(&self) -> ThemeMode {
        ThemeMode::from_dark(self.dark_mode)
    }

    #[must_use]
    pub fn palette(&self) -> Palette {
        self.theme().palette()
    }

    /// Keep the selection on an existing task after the list shrinks
    fn clamp_selection(&mut self) {
        self.selected = self.selected.min(self.tasks.len().saturating_sub(1));
        self.scroll = self.scroll.min(self.selected);
    }
}

pub struct AppComponent {
    // Component composition
    task_input: TaskInputComponent,
    task_list: TaskListComponent,
    dialog: DialogComponent,

    // Application state
    state: AppState,

    // Services
    logger: Logger,
    icons: IconService,
    hit_areas: HitAreaRegistry,

    // Decoration
    stars: Vec<Star>,
    stars_stale: bool,
    started: Instant,

    // Simple UI state
    card_width: u16,
    mouse_enabled: bool,
    should_quit: bool,
}

impl AppComponent {
    pub fn new(config: &UiConfig, logger: Logger) -> Self {
        let state = AppState {
            dark_mode: config.start_dark,
            ..Default::default()
        };
        let palette = state.palette();
        let icons = IconService::new(config.icon_theme);

        let mut app = Self {
            task_input: TaskInputComponent::new(palette, icons.clone()),
            task_list: TaskListComponent::new(palette, icons.clone()),
            dialog: DialogComponent::new(palette),
            state,
            logger,
            icons,
            hit_areas: HitAreaRegistry::new(),
            stars: Vec::new(),
            stars_stale: true,
            started: Instant::now(),
            card_width: config.card_width,
            mouse_enabled: config.mouse_enabled,
            should_quit: false,
        };
        app.sync_component_data();
        app
    }

    /// Start tracking the pointer; paired with [`AppComponent::unmount`]
    pub fn mount(&mut self) {
        if self.mouse_enabled {
            self.state.pointer.mount();
            self.logger.log("Pointer tracker mounted".to_string());
        }
    }

    pub fn unmount(&mut self) {
        if self.state.pointer.is_mounted() {
            self.state.pointer.unmount();
            self.logger.log("Pointer tracker unmounted".to_string());
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn logger(&self) -> &Logger {
        &self.logger
    }

    pub fn tasks(&self) -> &TaskList {
        &self.state.tasks
    }

    pub fn pending_input(&self) -> &str {
        &self.state.pending_input
    }

    pub fn is_dark_mode(&self) -> bool {
        self.state.dark_mode
    }

    pub fn pointer_position(&self) -> PointerPosition {
        self.state.pointer.position()
    }

    /// Stars drawn by the most recent dark-mode render
    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn is_dialog_visible(&self) -> bool {
        self.dialog.is_visible()
    }

    /// Replace the pending input text, as typing into the field would
    pub fn set_pending_input(&mut self, text: &str) {
        self.state.pending_input = text.to_string();
        self.state_changed();
    }

    /// Commit the pending input as a new task and clear the field.
    ///
    /// Blank input leaves both the list and the field untouched.
    pub fn add_task(&mut self) -> Option<TaskId> {
        let id = self.state.tasks.add(&self.state.pending_input)?;
        self.logger
            .log(format!("Task: Added '{}' (ID: {})", self.state.pending_input.trim(), id));
        self.state.pending_input.clear();
        self.state_changed();
        Some(id)
    }

    pub fn toggle_task(&mut self, id: TaskId) -> bool {
        let toggled = self.state.tasks.toggle(id);
        if toggled {
            let completed = self.state.tasks.get(id).is_some_and(|task| task.completed);
            self.logger
                .log(format!("Task: Toggled {} (completed: {})", id, completed));
            self.state_changed();
        }
        toggled
    }

    pub fn delete_task(&mut self, id: TaskId) -> bool {
        let deleted = self.state.tasks.delete(id);
        if deleted {
            self.logger.log(format!("Task: Deleted {}", id));
            self.state.clamp_selection();
            self.state_changed();
        }
        deleted
    }

    pub fn toggle_theme(&mut self) {
        self.state.dark_mode = self.state.theme().toggled().is_dark();
        self.logger
            .log(format!("Theme: Switched to {:?}", self.state.theme()));
        self.state_changed();
    }

    /// Switch every card glyph to the next icon set
    pub fn cycle_icon_theme(&mut self) {
        self.icons.cycle_icon_theme();
        self.logger
            .log(format!("Icons: Switched to {:?}", self.icons.theme()));
        self.state_changed();
    }

    pub fn icon_theme(&self) -> IconTheme {
        self.icons.theme()
    }

    /// Translate a terminal event into an action and apply it
    pub fn handle_event(&mut self, event_type: EventType) -> Action {
        let action = match event_type {
            EventType::Key(key) => self.route_key(key),
            EventType::Mouse(mouse) => self.handle_mouse(mouse),
            EventType::Resize(_, _) => {
                self.state_changed();
                Action::None
            }
            EventType::Tick | EventType::Other => Action::None,
        };

        self.handle_action(action)
    }

    /// Apply an action to the state. Returns the action left unhandled.
    pub fn handle_action(&mut self, action: Action) -> Action {
        match action {
            Action::InsertChar(c) => {
                self.state.pending_input.push(c);
                self.state_changed();
            }
            Action::DeleteChar => {
                self.state.pending_input.pop();
                self.state_changed();
            }
            Action::AddTask => {
                if self.add_task().is_some() {
                    self.state.selected = self.state.tasks.len() - 1;
                    self.state_changed();
                }
            }
            Action::ToggleTask(id) => {
                self.toggle_task(id);
            }
            Action::DeleteTask(id) => {
                self.delete_task(id);
            }
            Action::NextTask => {
                if self.state.selected + 1 < self.state.tasks.len() {
                    self.state.selected += 1;
                    self.state_changed();
                }
            }
            Action::PreviousTask => {
                if self.state.selected > 0 {
                    self.state.selected -= 1;
                    self.state_changed();
                }
            }
            Action::SetFocus(focus) => {
                self.state.focus = focus;
                self.state_changed();
            }
            Action::ToggleTheme => self.toggle_theme(),
            Action::CycleIconTheme => self.cycle_icon_theme(),
            Action::PointerMoved { .. } => {}
            Action::Quit => {
                self.logger.log("Quitting application".to_string());
                self.should_quit = true;
            }
            Action::ShowDialog(_) | Action::HideDialog => {
                let action = self.dialog.update(action);
                self.state_changed();
                return action;
            }
            Action::None => {}
        }
        Action::None
    }

    /// Keys go to the dialog when one is open, then to global shortcuts,
    /// then to the focused component.
    fn route_key(&mut self, key: KeyEvent) -> Action {
        if self.dialog.is_visible() {
            return self.dialog.handle_key_events(key);
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') => return Action::Quit,
                KeyCode::Char('t') => return Action::ToggleTheme,
                _ => {}
            }
        }
        if key.code == KeyCode::F(1) {
            return Action::ShowDialog(DialogType::Help);
        }

        match self.state.focus {
            Focus::Input => self.task_input.handle_key_events(key),
            Focus::List => match self.task_list.handle_key_events(key) {
                Action::None => self.handle_key_events(key),
                action => action,
            },
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) -> Action {
        if !self.mouse_enabled {
            return Action::None;
        }

        if self.state.pointer.handle_mouse(mouse) {
            let position = self.state.pointer.position();
            self.state_changed();
            return Action::PointerMoved {
                x: position.x,
                y: position.y,
            };
        }

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) if self.dialog.is_visible() => Action::HideDialog,
            MouseEventKind::Down(MouseButton::Left) => self
                .hit_areas
                .hit_test(mouse.column, mouse.row)
                .unwrap_or(Action::None),
            MouseEventKind::ScrollDown => Action::NextTask,
            MouseEventKind::ScrollUp => Action::PreviousTask,
            _ => Action::None,
        }
    }

    /// Mark the frame for a fresh render pass and push state into components
    fn state_changed(&mut self) {
        self.stars_stale = true;
        self.sync_component_data();
    }

    /// Update all components with current data
    fn sync_component_data(&mut self) {
        let palette = self.state.palette();
        self.task_input.icons = self.icons.clone();
        self.task_list.icons = self.icons.clone();
        self.task_input
            .update_data(&self.state.pending_input, self.state.focus, palette);
        self.task_list.update_data(
            self.state.tasks.as_slice(),
            self.state.selected,
            self.state.scroll,
            self.state.focus,
            palette,
        );
        self.dialog.update_data(self.logger.get_logs(), palette);
    }

    fn render_background(&mut self, f: &mut Frame, rect: Rect, palette: &Palette) {
        if self.state.dark_mode {
            if self.stars_stale || self.stars.is_empty() {
                self.stars = generate_stars(&mut rand::rng()).collect();
            }
            f.render_widget(
                StarfieldWidget {
                    stars: &self.stars,
                    palette,
                    elapsed: self.started.elapsed().as_secs_f32(),
                },
                rect,
            );
        } else {
            f.render_widget(
                GradientWidget {
                    pointer: self.state.pointer.position(),
                    palette,
                },
                rect,
            );
        }
        self.stars_stale = false;
    }

    fn render_header(&self, f: &mut Frame, layout: &CardLayout, palette: &Palette) {
        let title = Paragraph::new(Span::styled(
            APP_TITLE,
            Style::default().fg(palette.title).add_modifier(Modifier::BOLD),
        ))
        .style(Style::default().bg(palette.card));
        f.render_widget(title, layout.title);

        let theme_button = Paragraph::new(self.icons.theme_toggle(self.state.dark_mode))
            .alignment(Alignment::Center)
            .style(Style::default().fg(palette.theme_button_fg).bg(palette.theme_button_bg));
        f.render_widget(theme_button, layout.theme_button);
    }

    fn render_hint(&self, f: &mut Frame, layout: &CardLayout, palette: &Palette) {
        let hint = match self.state.focus {
            Focus::Input => STATUS_HINT_INPUT,
            Focus::List => STATUS_HINT_LIST,
        };
        let progress = format!(
            "{}/{} done",
            self.state.tasks.completed_count(),
            self.state.tasks.len()
        );
        let line = Line::from(vec![
            Span::styled(progress, Style::default().fg(palette.title)),
            Span::raw("  "),
            Span::styled(hint, Style::default().fg(palette.hint)),
        ]);
        f.render_widget(Paragraph::new(line).style(Style::default().bg(palette.card)), layout.hint);
    }

    /// Register every clickable region of the card drawn this frame
    fn register_hit_areas(&mut self, layout: &CardLayout) {
        self.hit_areas.clear();
        self.hit_areas.register(layout.theme_button, Action::ToggleTheme);
        self.hit_areas.register(layout.input, Action::SetFocus(Focus::Input));
        self.hit_areas.register(layout.add_button, Action::AddTask);

        for (offset, row) in layout.rows.iter().enumerate() {
            if let Some(task) = self.state.tasks.get_index(self.state.scroll + offset) {
                self.hit_areas.register(row.text, Action::ToggleTask(task.id));
                self.hit_areas.register(row.check, Action::ToggleTask(task.id));
                self.hit_areas.register(row.delete, Action::DeleteTask(task.id));
            }
        }
    }
}

impl Component for AppComponent {
    /// Global keys available while the list has focus
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
            KeyCode::Char('t') => Action::ToggleTheme,
            KeyCode::Char('?') => Action::ShowDialog(DialogType::Help),
            KeyCode::Char('G') => Action::ShowDialog(DialogType::Logs),
            KeyCode::Char('I') => Action::CycleIconTheme,
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        self.handle_action(action)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let palette = self.state.palette();
        self.render_background(f, rect, &palette);

        let mut layout = LayoutManager::card_layout(rect, self.card_width, self.state.tasks.len(), self.state.scroll);
        let scroll = LayoutManager::scroll_offset(
            self.state.selected,
            self.state.scroll,
            usize::from(layout.list.height),
        );
        if scroll != self.state.scroll {
            self.state.scroll = scroll;
            self.sync_component_data();
            layout = LayoutManager::card_layout(rect, self.card_width, self.state.tasks.len(), scroll);
        }

        f.render_widget(Clear, layout.card);
        f.render_widget(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(palette.input_border))
                .style(Style::default().bg(palette.card)),
            layout.card,
        );

        self.render_header(f, &layout, &palette);
        self.task_input.render(f, layout.input_row);
        self.task_list.render(f, layout.list);
        self.render_hint(f, &layout, &palette);
        self.register_hit_areas(&layout);

        if let Some(position) = self.task_input.cursor_position(layout.input) {
            if !self.dialog.is_visible() {
                f.set_cursor_position(position);
            }
        }

        if self.dialog.is_visible() {
            self.dialog.render(f, rect);
        }
    }
}
