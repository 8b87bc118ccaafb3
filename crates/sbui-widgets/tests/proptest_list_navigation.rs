//! Property-based invariant tests for list virtualization and keyboard
//! navigation.
//!
//! 1. The rendered row count never exceeds the viewport capacity when the
//!    viewport holds a whole number of rows.
//! 2. Scroll fractions stay in [0, 1] under any wheel sequence.
//! 3. Navigation keeps the selection inside the list.
//! 4. After navigation the selected row is fully visible.
//! 5. Scrolling into view moves the list minimally.

use proptest::prelude::*;
use sbui_core::geometry::Rect;
use sbui_widgets::navigator::{KeyboardNavigator, NavAction};
use sbui_widgets::{ListViewState, ScrollableList};

// ── Helpers ─────────────────────────────────────────────────────────────

fn list_strategy() -> impl Strategy<Value = ScrollableList> {
    (0usize..2_000, 5u32..=40, 1u32..=30).prop_map(|(n, h, rows)| {
        let h = h as f32;
        ScrollableList::new(n, h, Rect::new(0.0, 100.0, 300.0, h * rows as f32))
    })
}

fn action_strategy() -> impl Strategy<Value = NavAction> {
    prop_oneof![
        Just(NavAction::Down),
        Just(NavAction::Up),
        Just(NavAction::PageDown),
        Just(NavAction::PageUp),
        Just(NavAction::Home),
        Just(NavAction::End),
    ]
}

fn fully_visible(list: &ScrollableList, index: usize, scroll: f32) -> bool {
    let top = list.row_top(index, scroll);
    let view = list.viewport();
    top >= view.y - 5e-2 && top + list.row_height() <= view.bottom() + 5e-2
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Virtualization bound
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn visible_rows_bounded_by_capacity(list in list_strategy(), scroll in 0.0f32..=1.0) {
        let state = ListViewState { scroll, ..ListViewState::default() };
        let rows = list.rows(&state).count();
        prop_assert!(rows <= list.capacity(), "{} rows, capacity {}", rows, list.capacity());
        prop_assert!(rows <= list.item_count());
    }

    #[test]
    fn visible_rows_intersect_viewport(list in list_strategy(), scroll in 0.0f32..=1.0) {
        let state = ListViewState { scroll, ..ListViewState::default() };
        for row in list.rows(&state) {
            prop_assert!(row.hit_rect.y >= list.viewport().y - 1e-3);
            prop_assert!(row.hit_rect.bottom() <= list.viewport().bottom() + 1e-3);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Wheel
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn wheel_keeps_scroll_in_range(
        list in list_strategy(),
        ticks in proptest::collection::vec(-500i32..=500, 0..20),
    ) {
        let mut state = ListViewState::default();
        list.normalize(&mut state);
        for t in ticks {
            list.apply_wheel(&mut state, t);
            prop_assert!((0.0..=1.0).contains(&state.scroll));
        }
        if !list.is_scrollable() {
            prop_assert_eq!(state.scroll, 0.0);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3–4. Navigation
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn navigation_stays_in_bounds_and_visible(
        list in list_strategy(),
        start in proptest::option::of(0usize..2_000),
        scroll in 0.0f32..=1.0,
        actions in proptest::collection::vec(action_strategy(), 1..30),
    ) {
        let mut state = ListViewState { scroll, selected: start, ..ListViewState::default() };
        list.normalize(&mut state);
        KeyboardNavigator::new().apply_actions(&list, &mut state, actions);

        match state.selected {
            None => prop_assert_eq!(list.item_count(), 0),
            Some(sel) => {
                prop_assert!(sel < list.item_count());
                prop_assert!(fully_visible(&list, sel, state.scroll));
            }
        }
    }

    #[test]
    fn up_at_top_and_down_at_bottom_are_fixed_points(n in 1usize..5_000) {
        prop_assert_eq!(NavAction::Up.apply(Some(0), n), Some(0));
        prop_assert_eq!(NavAction::Down.apply(Some(n - 1), n), Some(n - 1));
        prop_assert_eq!(NavAction::End.apply(None, n), Some(n - 1));
        prop_assert_eq!(NavAction::Home.apply(Some(n - 1), n), Some(0));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Minimal scrolling
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn scroll_into_view_leaves_visible_rows_alone(
        list in list_strategy(),
        scroll in 0.0f32..=1.0,
        pick in 0usize..64,
    ) {
        let state = ListViewState { scroll, ..ListViewState::default() };
        let visible: Vec<usize> = list.rows(&state).map(|r| r.index).collect();
        prop_assume!(!visible.is_empty());
        let index = visible[pick % visible.len()];
        let top = list.row_top(index, scroll);
        prop_assume!(top >= list.viewport().y);
        prop_assume!(top + list.row_height() <= list.viewport().bottom());

        let mut moved = state;
        list.scroll_into_view(&mut moved, index);
        prop_assert_eq!(moved.scroll, state.scroll);
    }
}
