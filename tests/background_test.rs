use rand::{rngs::StdRng, SeedableRng};
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};
use stardo::constants::STAR_COUNT;
use stardo::ui::components::{generate_stars, GradientWidget, Star, StarfieldWidget};
use stardo::ui::core::PointerPosition;
use stardo::ui::theme::{tailwind, Palette};

fn seeded_stars(seed: u64) -> Vec<Star> {
    let mut rng = StdRng::seed_from_u64(seed);
    generate_stars(&mut rng).collect()
}

#[test]
fn test_generates_fixed_star_count() {
    assert_eq!(seeded_stars(1).len(), STAR_COUNT);
    assert_eq!(STAR_COUNT, 100);
}

#[test]
fn test_star_fields_within_ranges() {
    for star in seeded_stars(7) {
        assert!((0.0..100.0).contains(&star.top));
        assert!((0.0..100.0).contains(&star.left));
        assert!((1.0..2.0).contains(&star.size));
        assert!((0.01..0.51).contains(&star.opacity));
        assert!((4.0..44.0).contains(&star.twinkle_secs));
        assert!((150.0..250.0).contains(&star.float_secs));
        assert!(star.delay_secs <= 0.0 && star.delay_secs > -80.0);
    }
}

#[test]
fn test_generation_is_lazy_and_independent() {
    let mut rng = StdRng::seed_from_u64(3);
    let first: Vec<Star> = generate_stars(&mut rng).take(2).collect();
    assert_eq!(first.len(), 2);
    assert_ne!(first[0], first[1]);
}

#[test]
fn test_brightness_and_float_bounds() {
    for star in seeded_stars(11) {
        for step in 0..200 {
            let elapsed = step as f32 * 0.73;
            let brightness = star.brightness(elapsed);
            assert!((0.0..=1.0).contains(&brightness));

            let offset = star.float_offset(elapsed);
            assert!(offset <= 0.0 && offset > -1.0);
        }
    }
}

#[test]
fn test_starfield_draws_on_dark_background() {
    let palette = Palette::dark();
    let stars = seeded_stars(5);
    let area = Rect::new(0, 0, 40, 20);
    let mut buf = Buffer::empty(area);

    StarfieldWidget {
        stars: &stars,
        palette: &palette,
        elapsed: 0.0,
    }
    .render(area, &mut buf);

    let drawn = buf
        .content()
        .iter()
        .filter(|cell| cell.symbol() == "·" || cell.symbol() == "•")
        .count();
    assert!(drawn > 0);
    assert!(buf.content().iter().all(|cell| cell.bg == palette.background));
}

#[test]
fn test_gradient_follows_pointer() {
    let palette = Palette::light();
    let still = GradientWidget {
        pointer: PointerPosition { x: 0, y: 0 },
        palette: &palette,
    };
    let moved = GradientWidget {
        pointer: PointerPosition { x: 50, y: 25 },
        palette: &palette,
    };

    assert_ne!(still.color_at(0, 0, 40, 20), moved.color_at(0, 0, 40, 20));

    // Offsets smaller than the divisor don't move the gradient
    let nudged = GradientWidget {
        pointer: PointerPosition { x: 4, y: 4 },
        palette: &palette,
    };
    assert_eq!(still.color_at(3, 3, 40, 20), nudged.color_at(3, 3, 40, 20));
}

#[test]
fn test_gradient_blends_over_light_background() {
    let palette = Palette::light();
    let gradient = GradientWidget {
        pointer: PointerPosition::default(),
        palette: &palette,
    };

    let top_left = gradient.color_at(0, 0, 40, 20);
    assert_ne!(top_left, tailwind::GREEN_400);
    assert_ne!(top_left, palette.background);
    assert_ne!(top_left, gradient.color_at(39, 19, 40, 20));
}
