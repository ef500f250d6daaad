use ratatui::layout::Rect;
use stardo::ui::hit_area::HitAreaRegistry;
use stardo::ui::core::Action;
use stardo::ui::LayoutManager;

#[test]
fn test_card_is_centered_and_bounded() {
    let area = Rect::new(0, 0, 80, 30);
    let layout = LayoutManager::card_layout(area, 48, 3, 0);

    assert_eq!(layout.card.width, 48);
    assert_eq!(layout.card.x, 16);
    assert!(layout.card.bottom() <= area.bottom());
    assert_eq!(layout.rows.len(), 3);
}

#[test]
fn test_card_shrinks_to_small_terminal() {
    let area = Rect::new(0, 0, 30, 12);
    let layout = LayoutManager::card_layout(area, 48, 20, 0);

    assert!(layout.card.width <= 28);
    assert!(layout.card.height <= 10);
    assert_eq!(layout.rows.len(), usize::from(layout.list.height));
}

#[test]
fn test_task_row_targets_do_not_overlap() {
    let layout = LayoutManager::card_layout(Rect::new(0, 0, 80, 30), 48, 1, 0);
    let row = layout.rows[0];

    assert!(row.text.right() <= row.check.x);
    assert!(row.check.right() <= row.delete.x);
    assert_eq!(row.delete.right(), row.row.right());
}

#[test]
fn test_scroll_offset_keeps_selection_visible() {
    assert_eq!(LayoutManager::scroll_offset(0, 0, 5), 0);
    assert_eq!(LayoutManager::scroll_offset(7, 0, 5), 3);
    assert_eq!(LayoutManager::scroll_offset(2, 4, 5), 2);
    assert_eq!(LayoutManager::scroll_offset(5, 3, 5), 3);
}

#[test]
fn test_hit_registry_prefers_latest_area() {
    let mut registry = HitAreaRegistry::new();
    registry.register(Rect::new(0, 0, 10, 10), Action::ToggleTheme);
    registry.register(Rect::new(2, 2, 2, 2), Action::AddTask);
    registry.register(Rect::new(20, 20, 0, 5), Action::Quit);

    assert_eq!(registry.len(), 2);
    assert_eq!(registry.hit_test(3, 3), Some(Action::AddTask));
    assert_eq!(registry.hit_test(8, 8), Some(Action::ToggleTheme));
    assert_eq!(registry.hit_test(20, 20), None);

    registry.clear();
    assert!(registry.is_empty());
}
