//! Layout management and calculations

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Rows inside the card that are not task rows: title, spacer, three-line
/// input, spacer, status hint, plus the two border rows.
const CARD_CHROME_HEIGHT: u16 = 9;
/// Width of the theme and add buttons
const BUTTON_WIDTH: u16 = 5;
/// Width of the per-task check and delete targets
const TASK_ICON_WIDTH: u16 = 4;

/// Rectangles for every region of the to-do card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardLayout {
    pub card: Rect,
    pub title: Rect,
    pub theme_button: Rect,
    pub input_row: Rect,
    pub input: Rect,
    pub add_button: Rect,
    pub list: Rect,
    pub hint: Rect,
    pub rows: Vec<TaskRowLayout>,
}

/// Clickable regions of one task row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskRowLayout {
    pub row: Rect,
    pub text: Rect,
    pub check: Rect,
    pub delete: Rect,
}

/// Manages layout calculations and constraints for the UI
pub struct LayoutManager;

impl LayoutManager {
    /// Lay out the card centered in `area` for `task_count` tasks.
    ///
    /// Rows that don't fit are dropped from `rows`; `scroll` is the index of
    /// the first visible task.
    #[must_use]
    pub fn card_layout(area: Rect, card_width: u16, task_count: usize, scroll: usize) -> CardLayout {
        let width = card_width.min(area.width.saturating_sub(2)).max(1);
        let wanted_rows = u16::try_from(task_count.max(1)).unwrap_or(u16::MAX);
        let height = CARD_CHROME_HEIGHT
            .saturating_add(wanted_rows)
            .min(area.height.saturating_sub(2))
            .max(1);

        let card = Rect::new(
            area.x + area.width.saturating_sub(width) / 2,
            area.y + area.height.saturating_sub(height) / 2,
            width,
            height,
        )
        .intersection(area);

        let inner = Rect::new(
            card.x + 1,
            card.y + 1,
            card.width.saturating_sub(2),
            card.height.saturating_sub(2),
        );

        let sections = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(inner);

        let (title, theme_button) = Self::split_button(sections[0]);
        let (input, add_button) = Self::split_button(sections[2]);
        let list = sections[4];
        let rows = Self::task_rows(list, task_count, scroll);

        CardLayout {
            card,
            title,
            theme_button,
            input_row: sections[2],
            input,
            add_button,
            list,
            hint: sections[5],
            rows,
        }
    }

    /// Split a row into its content and a trailing button
    #[must_use]
    pub fn split_button(area: Rect) -> (Rect, Rect) {
        Self::split_right(area, BUTTON_WIDTH)
    }

    /// Rows of the tasks visible in `list`, starting at task index `scroll`
    #[must_use]
    pub fn task_rows(list: Rect, task_count: usize, scroll: usize) -> Vec<TaskRowLayout> {
        (0..list.height)
            .take(task_count.saturating_sub(scroll))
            .map(|offset| {
                let row = Rect::new(list.x, list.y + offset, list.width, 1);
                let (rest, delete) = Self::split_right(row, TASK_ICON_WIDTH);
                let (text, check) = Self::split_right(rest, TASK_ICON_WIDTH);
                TaskRowLayout {
                    row,
                    text,
                    check,
                    delete,
                }
            })
            .collect()
    }

    /// Keep `selected` visible in a list showing `visible` rows
    #[must_use]
    pub fn scroll_offset(selected: usize, current: usize, visible: usize) -> usize {
        if visible == 0 {
            return selected;
        }
        if selected < current {
            selected
        } else if selected >= current + visible {
            selected + 1 - visible
        } else {
            current
        }
    }

    /// Calculate a centered rectangle within the given area
    #[must_use]
    pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }

    /// Calculate dialog dimensions based on screen size
    #[must_use]
    pub fn dialog_dimensions(screen_width: u16, screen_height: u16) -> (u16, u16) {
        let width = if screen_width < 80 { 80 } else { 60 };
        let height = if screen_height < 40 { 70 } else { 50 };
        (width, height)
    }

    fn split_right(area: Rect, right_width: u16) -> (Rect, Rect) {
        let right_width = right_width.min(area.width);
        let left = Rect::new(area.x, area.y, area.width - right_width, area.height);
        let right = Rect::new(area.x + left.width, area.y, right_width, area.height);
        (left, right)
    }
}
