//! Property-based invariant tests for the rectangle algebra.
//!
//! 1. Vertical splits conserve width and abut exactly.
//! 2. Horizontal splits conserve height and abut exactly.
//! 3. Margins shrink symmetrically.
//! 4. Single-axis margins leave the other axis untouched.
//! 5. Mid splits produce two equal halves.
//! 6. Contains agrees with intersection.
//!
//! Inputs are integral so the float arithmetic stays exact.

use sbui_core::geometry::Rect;
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

fn rect_strategy() -> impl Strategy<Value = Rect> {
    (-500i32..=500, -500i32..=500, 0i32..=800, 0i32..=800)
        .prop_map(|(x, y, w, h)| Rect::new(x as f32, y as f32, w as f32, h as f32))
}

fn rect_and_cut(axis_width: bool) -> impl Strategy<Value = (Rect, f32)> {
    rect_strategy().prop_flat_map(move |r| {
        let extent = if axis_width { r.width } else { r.height } as i32;
        (Just(r), (0..=extent).prop_map(|c| c as f32))
    })
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Vertical splits
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn vsplit_left_conserves_width((r, cut) in rect_and_cut(true)) {
        let (left, right) = r.vsplit_left(cut);
        prop_assert_eq!(left.width + right.width, r.width);
        prop_assert_eq!(left.x, r.x);
        prop_assert_eq!(right.x, left.x + cut);
        prop_assert_eq!(left.height, r.height);
        prop_assert_eq!(right.height, r.height);
    }

    #[test]
    fn vsplit_right_conserves_width((r, cut) in rect_and_cut(true)) {
        let (left, right) = r.vsplit_right(cut);
        prop_assert_eq!(left.width + right.width, r.width);
        prop_assert_eq!(right.width, cut);
        prop_assert_eq!(right.right(), r.right());
        prop_assert_eq!(left.right(), right.x);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Horizontal splits
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn hsplit_top_conserves_height((r, cut) in rect_and_cut(false)) {
        let (top, bottom) = r.hsplit_top(cut);
        prop_assert_eq!(top.height + bottom.height, r.height);
        prop_assert_eq!(top.y, r.y);
        prop_assert_eq!(bottom.y, r.y + cut);
    }

    #[test]
    fn hsplit_bottom_conserves_height((r, cut) in rect_and_cut(false)) {
        let (top, bottom) = r.hsplit_bottom(cut);
        prop_assert_eq!(top.height + bottom.height, r.height);
        prop_assert_eq!(bottom.bottom(), r.bottom());
        prop_assert_eq!(top.bottom(), bottom.y);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3-4. Margins
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn margin_is_symmetric((r, c) in rect_strategy().prop_flat_map(|r| {
        let limit = (r.width.min(r.height) / 2.0) as i32;
        (Just(r), (0..=limit).prop_map(|c| c as f32))
    })) {
        let inner = r.margin(c);
        prop_assert_eq!(inner.width, r.width - 2.0 * c);
        prop_assert_eq!(inner.height, r.height - 2.0 * c);
        prop_assert_eq!(inner.x, r.x + c);
        prop_assert_eq!(inner.y, r.y + c);
        prop_assert_eq!(inner.right() + c, r.right());
    }

    #[test]
    fn single_axis_margins_keep_other_axis(r in rect_strategy(), c in 0i32..=100) {
        let c = c as f32;
        let v = r.vmargin(c);
        prop_assert_eq!(v.y, r.y);
        prop_assert_eq!(v.height, r.height);
        prop_assert_eq!(v.x, r.x + c);
        let h = r.hmargin(c);
        prop_assert_eq!(h.x, r.x);
        prop_assert_eq!(h.width, r.width);
        prop_assert_eq!(h.y, r.y + c);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Mid splits
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn mid_splits_are_even(r in rect_strategy()) {
        let (l, rr) = r.vsplit_mid();
        prop_assert_eq!(l.width, rr.width);
        prop_assert_eq!(l.width + rr.width, r.width);
        let (t, b) = r.hsplit_mid();
        prop_assert_eq!(t.height, b.height);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Contains agrees with intersection
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn contains_agrees_with_intersection(
        a in rect_strategy(),
        b in rect_strategy(),
        px in -600i32..=1400,
        py in -600i32..=1400,
    ) {
        let (px, py) = (px as f32, py as f32);
        let both = a.contains(px, py) && b.contains(px, py);
        prop_assert_eq!(both, a.intersection(&b).contains(px, py));
    }
}
