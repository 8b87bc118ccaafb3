//! Property tests for anchored column layout.
//!
//! 1. Columns and spacers tile the header exactly when widths fit.
//! 2. Every column lies inside the header.
//! 3. Row cells share x/width with the header columns.

use proptest::prelude::*;
use sbui_layout::{Anchor, Column, ColumnLayout, Rect};

fn anchor_strategy() -> impl Strategy<Value = Anchor> {
    prop_oneof![Just(Anchor::Left), Just(Anchor::Right)]
}

fn columns_strategy() -> impl Strategy<Value = Vec<Column<usize>>> {
    (
        prop::collection::vec((anchor_strategy(), 1u16..=60), 0..6),
        0usize..7,
    )
        .prop_map(|(fixed, fill_at)| {
            let mut cols: Vec<Column<usize>> = fixed
                .into_iter()
                .enumerate()
                .map(|(i, (anchor, w))| Column::new(i, "", anchor, w as f32))
                .collect();
            let at = fill_at.min(cols.len());
            cols.insert(at, Column::new(usize::MAX, "", Anchor::Fill, 0.0));
            cols
        })
}

// ═════════════════════════════════════════════════════════════════════════
// 1-2. Tiling
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn columns_tile_header(mut cols in columns_strategy(), x in -100i32..100) {
        let header = Rect::new(x as f32, 7.0, 500.0, 18.0);
        let rest = ColumnLayout::new().resolve(header, &mut cols);

        let used: f32 = cols
            .iter()
            .filter(|c| c.anchor != Anchor::Fill)
            .map(|c| c.rect.width + c.spacer.width)
            .sum();
        prop_assert_eq!(used + rest.width, header.width);

        for col in &cols {
            prop_assert!(col.rect.x >= header.x);
            prop_assert!(col.rect.right() <= header.right());
            prop_assert_eq!(col.rect.y, header.y);
            prop_assert_eq!(col.rect.height, header.height);
        }

        let mut spans: Vec<(f32, f32)> = cols.iter().map(|c| (c.rect.x, c.rect.right())).collect();
        spans.sort_by(|a, b| a.0.total_cmp(&b.0));
        for pair in spans.windows(2) {
            prop_assert!(pair[0].1 <= pair[1].0, "overlap: {:?}", pair);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Row alignment
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn row_cells_align(mut cols in columns_strategy(), row_y in 0i32..10_000, row_h in 1i32..40) {
        ColumnLayout::new().resolve(Rect::new(0.0, 0.0, 500.0, 20.0), &mut cols);
        let row = Rect::new(0.0, row_y as f32, 500.0, row_h as f32);
        for col in &cols {
            let cell = col.cell(&row);
            prop_assert_eq!(cell.x, col.rect.x);
            prop_assert_eq!(cell.width, col.rect.width);
            prop_assert_eq!(cell.y, row.y);
            prop_assert_eq!(cell.height, row.height);
        }
    }
}
