use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use stardo::ui::core::{PointerPosition, PointerTracker};

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

#[test]
fn test_ignores_movement_until_mounted() {
    let mut tracker = PointerTracker::new();
    assert!(!tracker.handle_mouse(mouse(MouseEventKind::Moved, 10, 5)));
    assert_eq!(tracker.position(), PointerPosition::default());
}

#[test]
fn test_tracks_movement_while_mounted() {
    let mut tracker = PointerTracker::new();
    tracker.mount();

    assert!(tracker.handle_mouse(mouse(MouseEventKind::Moved, 10, 5)));
    assert_eq!(tracker.position(), PointerPosition { x: 10, y: 5 });

    assert!(tracker.handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 12, 6)));
    assert_eq!(tracker.position(), PointerPosition { x: 12, y: 6 });

    // Same cell again is not a change
    assert!(!tracker.handle_mouse(mouse(MouseEventKind::Moved, 12, 6)));
}

#[test]
fn test_clicks_do_not_move_pointer() {
    let mut tracker = PointerTracker::new();
    tracker.mount();
    assert!(!tracker.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 30, 3)));
    assert_eq!(tracker.position(), PointerPosition::default());
}

#[test]
fn test_unmount_stops_updates() {
    let mut tracker = PointerTracker::new();
    tracker.mount();
    tracker.handle_mouse(mouse(MouseEventKind::Moved, 3, 4));
    tracker.unmount();

    assert!(!tracker.is_mounted());
    tracker.handle_mouse(mouse(MouseEventKind::Moved, 20, 20));
    assert_eq!(tracker.position(), PointerPosition { x: 3, y: 4 });
}
