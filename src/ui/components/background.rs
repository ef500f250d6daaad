//! Decorative backgrounds behind the card
//!
//! Dark mode draws a twinkling star field; light mode draws a green to cyan
//! diagonal gradient whose position follows the pointer. Neither carries any
//! state worth keeping: the star field is regenerated on every state-driven
//! render.

use crate::constants::{GRADIENT_POINTER_DIVISOR, STAR_COUNT};
use crate::ui::core::PointerPosition;
use crate::ui::theme::{blend, tailwind, Palette};
use rand::Rng;
use ratatui::{buffer::Buffer, layout::Rect, style::Color, widgets::Widget};

/// Vertical drift of the float animation, in rows
const FLOAT_DISTANCE: f32 = 1.0;
/// Opacity range of the twinkle animation
const TWINKLE_MIN: f32 = 0.2;
const TWINKLE_MAX: f32 = 1.0;
/// Gradient layer opacity over the page background
const GRADIENT_OPACITY: f32 = 0.5;

/// One decorative star
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    /// Distance from the top edge, percent of the area height, in [0, 100)
    pub top: f32,
    /// Distance from the left edge, percent of the area width, in [0, 100)
    pub left: f32,
    /// Diameter in [1, 2)
    pub size: f32,
    /// Base opacity in [0.01, 0.51)
    pub opacity: f32,
    /// Twinkle period in seconds, in [4, 44)
    pub twinkle_secs: f32,
    /// Float period in seconds, in [150, 250)
    pub float_secs: f32,
    /// Animation start delay in seconds, in (-80, 0]; negative means the
    /// animation is already under way when the star appears
    pub delay_secs: f32,
}

impl Star {
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self {
            top: rng.random_range(0.0..100.0),
            left: rng.random_range(0.0..100.0),
            size: rng.random_range(1.0..2.0),
            opacity: rng.random_range(0.01..0.51),
            twinkle_secs: rng.random_range(4.0..44.0),
            float_secs: rng.random_range(150.0..250.0),
            delay_secs: -rng.random_range(0.0f32..80.0),
        }
    }

    /// Brightness in [0, 1] at `elapsed` seconds after the field appeared.
    ///
    /// The twinkle runs ease-in-out between 0.2 and 1 and alternates
    /// direction every period; the base opacity lifts or dims it.
    #[must_use]
    pub fn brightness(&self, elapsed: f32) -> f32 {
        let local = elapsed - self.delay_secs;
        let cycle = local / self.twinkle_secs;
        let mut progress = cycle.fract();
        if (cycle.floor() as i64) % 2 == 1 {
            progress = 1.0 - progress;
        }
        let eased = progress * progress * (3.0 - 2.0 * progress);
        let twinkle = TWINKLE_MIN + (TWINKLE_MAX - TWINKLE_MIN) * (1.0 - (2.0 * eased - 1.0).abs());
        (twinkle * (0.5 + self.opacity)).clamp(0.0, 1.0)
    }

    /// Upward drift in rows at `elapsed` seconds, looping every float period
    #[must_use]
    pub fn float_offset(&self, elapsed: f32) -> f32 {
        let local = elapsed - self.delay_secs;
        -FLOAT_DISTANCE * (local / self.float_secs).fract()
    }

    fn glyph(&self) -> char {
        if self.size < 1.5 {
            '·'
        } else {
            '•'
        }
    }
}

/// Lazily generate the star field
pub fn generate_stars<R: Rng>(rng: &mut R) -> impl Iterator<Item = Star> + '_ {
    std::iter::repeat_with(move || Star::random(&mut *rng)).take(STAR_COUNT)
}

/// Star field drawn over the dark page background
pub struct StarfieldWidget<'a> {
    pub stars: &'a [Star],
    pub palette: &'a Palette,
    pub elapsed: f32,
}

impl Widget for StarfieldWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        fill(area, buf, self.palette.background);
        if area.width == 0 || area.height == 0 {
            return;
        }

        for star in self.stars {
            let column = (star.left / 100.0 * f32::from(area.width)) as u16;
            let row = star.top / 100.0 * f32::from(area.height) + star.float_offset(self.elapsed);
            if row < 0.0 {
                continue;
            }
            let (x, y) = (area.x + column.min(area.width - 1), area.y + (row as u16).min(area.height - 1));

            let color = blend(self.palette.background, tailwind::WHITE, star.brightness(self.elapsed));
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_char(star.glyph()).set_fg(color);
            }
        }
    }
}

/// Diagonal gradient offset by the pointer position
pub struct GradientWidget<'a> {
    pub pointer: PointerPosition,
    pub palette: &'a Palette,
}

impl GradientWidget<'_> {
    /// Color of the cell at (`x`, `y`) relative to an area of `width` x `height`
    #[must_use]
    pub fn color_at(&self, x: u16, y: u16, width: u16, height: u16) -> Color {
        if width == 0 || height == 0 {
            return self.palette.background;
        }
        let offset_x = self.pointer.x / GRADIENT_POINTER_DIVISOR;
        let offset_y = self.pointer.y / GRADIENT_POINTER_DIVISOR;

        // The gradient tiles, so shifting it wraps around the edges
        let u = f32::from((x + width - offset_x % width) % width) / f32::from(width.max(2) - 1);
        let v = f32::from((y + height - offset_y % height) % height) / f32::from(height.max(2) - 1);

        let gradient = blend(tailwind::GREEN_400, tailwind::CYAN_500, (u + v) / 2.0);
        blend(self.palette.background, gradient, GRADIENT_OPACITY)
    }
}

impl Widget for GradientWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for y in 0..area.height {
            for x in 0..area.width {
                let color = self.color_at(x, y, area.width, area.height);
                if let Some(cell) = buf.cell_mut((area.x + x, area.y + y)) {
                    cell.set_char(' ').set_bg(color);
                }
            }
        }
    }
}

fn fill(area: Rect, buf: &mut Buffer, color: Color) {
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_char(' ').set_bg(color);
            }
        }
    }
}
