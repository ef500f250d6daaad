//! Light and dark palettes
//!
//! Colors follow the Tailwind shades the card was designed with.

use ratatui::style::Color;

/// The two display modes; there is no third state and no terminal state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    #[must_use]
    pub fn from_dark(dark_mode: bool) -> Self {
        if dark_mode {
            Self::Dark
        } else {
            Self::Light
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub fn palette(self) -> Palette {
        match self {
            Self::Light => Palette::light(),
            Self::Dark => Palette::dark(),
        }
    }
}

pub mod tailwind {
    use ratatui::style::Color;

    pub const GRAY_100: Color = Color::Rgb(0xf3, 0xf4, 0xf6);
    pub const GRAY_200: Color = Color::Rgb(0xe5, 0xe7, 0xeb);
    pub const GRAY_300: Color = Color::Rgb(0xd1, 0xd5, 0xdb);
    pub const GRAY_400: Color = Color::Rgb(0x9c, 0xa3, 0xaf);
    pub const GRAY_500: Color = Color::Rgb(0x6b, 0x72, 0x80);
    pub const GRAY_600: Color = Color::Rgb(0x4b, 0x55, 0x63);
    pub const GRAY_700: Color = Color::Rgb(0x37, 0x41, 0x51);
    pub const GRAY_800: Color = Color::Rgb(0x1f, 0x29, 0x37);
    pub const GRAY_900: Color = Color::Rgb(0x11, 0x18, 0x27);
    pub const GREEN_400: Color = Color::Rgb(0x4a, 0xde, 0x80);
    pub const GREEN_500: Color = Color::Rgb(0x22, 0xc5, 0x5e);
    pub const CYAN_500: Color = Color::Rgb(0x06, 0xb6, 0xd4);
    pub const RED_500: Color = Color::Rgb(0xef, 0x44, 0x44);
    pub const YELLOW_400: Color = Color::Rgb(0xfa, 0xcc, 0x15);
    pub const WHITE: Color = Color::Rgb(0xff, 0xff, 0xff);
}

/// Colors for every surface of the card and background
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub background: Color,
    pub card: Color,
    pub title: Color,
    pub input_bg: Color,
    pub input_fg: Color,
    pub input_border: Color,
    pub placeholder: Color,
    pub add_button_bg: Color,
    pub add_button_fg: Color,
    pub theme_button_bg: Color,
    pub theme_button_fg: Color,
    pub task_bg: Color,
    pub task_fg: Color,
    pub completed_task_bg: Color,
    pub completed_task_fg: Color,
    pub check_pending: Color,
    pub check_completed: Color,
    pub delete: Color,
    pub selection: Color,
    pub hint: Color,
}

impl Palette {
    #[must_use]
    pub fn light() -> Self {
        use crate::ui::theme::tailwind::*;
        Self {
            background: GRAY_100,
            card: WHITE,
            title: GRAY_800,
            input_bg: GRAY_100,
            input_fg: GRAY_800,
            input_border: GRAY_300,
            placeholder: GRAY_400,
            add_button_bg: GREEN_500,
            add_button_fg: WHITE,
            theme_button_bg: GRAY_800,
            theme_button_fg: YELLOW_400,
            task_bg: WHITE,
            task_fg: GRAY_800,
            completed_task_bg: GRAY_200,
            completed_task_fg: GRAY_500,
            check_pending: GRAY_400,
            check_completed: GREEN_500,
            delete: RED_500,
            selection: CYAN_500,
            hint: GRAY_500,
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        use crate::ui::theme::tailwind::*;
        Self {
            background: GRAY_900,
            card: GRAY_800,
            title: WHITE,
            input_bg: GRAY_700,
            input_fg: WHITE,
            input_border: GRAY_100,
            placeholder: GRAY_400,
            add_button_bg: GREEN_500,
            add_button_fg: WHITE,
            theme_button_bg: YELLOW_400,
            theme_button_fg: GRAY_900,
            task_bg: GRAY_600,
            task_fg: WHITE,
            completed_task_bg: GRAY_700,
            completed_task_fg: GRAY_400,
            check_pending: GRAY_400,
            check_completed: GREEN_500,
            delete: RED_500,
            selection: YELLOW_400,
            hint: GRAY_400,
        }
    }
}

/// Linear blend of two RGB colors; non-RGB colors pick the nearer endpoint
#[must_use]
pub fn blend(from: Color, to: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    match (from, to) {
        (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => {
            let mix = |a: u8, b: u8| (f32::from(a) + (f32::from(b) - f32::from(a)) * t).round() as u8;
            Color::Rgb(mix(r1, r2), mix(g1, g2), mix(b1, b2))
        }
        _ if t < 0.5 => from,
        _ => to,
    }
}
