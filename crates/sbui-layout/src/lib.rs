#![forbid(unsafe_code)]

//! Layout for list views.
//!
//! - [`ColumnLayout`] - resolves anchored column declarations against a
//!   header band; rows reuse the header's columns via [`Column::cell`]
//! - [`grid`] - even splits and centered flow grids for button groups
//!
//! # Example
//!
//! ```
//! use sbui_core::geometry::Rect;
//! use sbui_layout::{Anchor, Column, ColumnLayout};
//!
//! let mut cols = [
//!     Column::new("name", "Name", Anchor::Left, 50.0),
//!     Column::new("map", "Map", Anchor::Fill, 0.0),
//!     Column::new("ping", "Ping", Anchor::Right, 40.0),
//! ];
//! ColumnLayout::new().resolve(Rect::new(0.0, 0.0, 300.0, 20.0), &mut cols);
//! assert_eq!(cols[1].rect.x, 52.0);
//! assert_eq!(cols[1].rect.right(), 258.0);
//! ```

pub mod grid;

pub use grid::{FlowGrid, split_even};
pub use sbui_core::geometry::Rect;

/// Where a column is placed in the remaining header space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Anchor {
    /// Carved from the left edge, in declaration order.
    Left,
    /// Carved from the right edge, in reverse declaration order.
    Right,
    /// Takes whatever is left over.
    Fill,
}

/// A column declaration and, after [`ColumnLayout::resolve`], its placement.
#[derive(Debug, Clone, PartialEq)]
pub struct Column<K> {
    /// Caller-defined key (sort key, column id).
    pub key: K,
    /// Header caption. May be empty.
    pub caption: &'static str,
    /// Placement rule.
    pub anchor: Anchor,
    /// Requested width. Ignored for [`Anchor::Fill`].
    pub width: f32,
    /// Resolved header rectangle.
    pub rect: Rect,
    /// Resolved spacer following the column; empty if none was carved.
    pub spacer: Rect,
}

impl<K> Column<K> {
    /// Declare a column. Rectangles are empty until resolved.
    pub const fn new(key: K, caption: &'static str, anchor: Anchor, width: f32) -> Self {
        Self {
            key,
            caption,
            anchor,
            width,
            rect: Rect::new(0.0, 0.0, 0.0, 0.0),
            spacer: Rect::new(0.0, 0.0, 0.0, 0.0),
        }
    }

    /// This column's cell in `row`: the header's x/width with the row's y/height.
    #[inline]
    pub fn cell(&self, row: &Rect) -> Rect {
        self.rect.with_rows_of(row)
    }
}

/// Resolves anchored columns inside a header band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnLayout {
    spacing: f32,
}

impl Default for ColumnLayout {
    fn default() -> Self {
        Self::new()
    }
}

impl ColumnLayout {
    /// Gap carved after each column.
    pub const DEFAULT_SPACING: f32 = 2.0;

    /// Layout with the default 2-unit spacing.
    pub const fn new() -> Self {
        Self {
            spacing: Self::DEFAULT_SPACING,
        }
    }

    /// Set the inter-column gap.
    #[must_use]
    pub const fn spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    /// Place every column inside `header`. Returns the leftover rectangle
    /// (the one assigned to fill columns).
    ///
    /// Left columns are carved first in declaration order; a spacer follows
    /// each one except the last declared column. Right columns are carved
    /// next in reverse order, each followed by a spacer. Fill columns all
    /// receive the remainder, so only one is meaningful per layout.
    ///
    /// Widths are not clamped: columns wider than the header produce
    /// degenerate rectangles.
    pub fn resolve<K>(&self, header: Rect, columns: &mut [Column<K>]) -> Rect {
        let count = columns.len();
        let mut rest = header;

        for (i, col) in columns.iter_mut().enumerate() {
            if col.anchor != Anchor::Left {
                continue;
            }
            let (cell, remaining) = rest.vsplit_left(col.width);
            col.rect = cell;
            rest = remaining;
            if i + 1 < count {
                let (spacer, remaining) = rest.vsplit_left(self.spacing);
                col.spacer = spacer;
                rest = remaining;
            } else {
                col.spacer = Rect::new(rest.x, rest.y, 0.0, rest.height);
            }
        }

        for col in columns.iter_mut().rev() {
            if col.anchor != Anchor::Right {
                continue;
            }
            let (remaining, cell) = rest.vsplit_right(col.width);
            col.rect = cell;
            let (remaining, spacer) = remaining.vsplit_right(self.spacing);
            col.spacer = spacer;
            rest = remaining;
        }

        for col in columns.iter_mut() {
            if col.anchor == Anchor::Fill {
                col.rect = rest;
                col.spacer = Rect::new(rest.right(), rest.y, 0.0, rest.height);
            }
        }
        rest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn browser_columns() -> Vec<Column<u8>> {
        vec![
            Column::new(0, "", Anchor::Left, 20.0),
            Column::new(1, "Name", Anchor::Left, 300.0),
            Column::new(2, "Type", Anchor::Right, 50.0),
            Column::new(3, "Map", Anchor::Fill, 0.0),
            Column::new(4, "Players", Anchor::Right, 60.0),
            Column::new(5, "Ping", Anchor::Right, 40.0),
        ]
    }

    #[test]
    fn name_map_ping_scenario() {
        let mut cols = [
            Column::new("name", "Name", Anchor::Left, 50.0),
            Column::new("map", "Map", Anchor::Fill, 0.0),
            Column::new("ping", "Ping", Anchor::Right, 40.0),
        ];
        let rest = ColumnLayout::new().resolve(Rect::new(0.0, 0.0, 300.0, 20.0), &mut cols);
        assert_eq!(cols[0].rect, Rect::new(0.0, 0.0, 50.0, 20.0));
        assert_eq!(cols[0].spacer, Rect::new(50.0, 0.0, 2.0, 20.0));
        assert_eq!(cols[2].rect, Rect::new(260.0, 0.0, 40.0, 20.0));
        assert_eq!(cols[2].spacer, Rect::new(258.0, 0.0, 2.0, 20.0));
        assert_eq!(cols[1].rect, Rect::new(52.0, 0.0, 206.0, 20.0));
        assert_eq!(rest, cols[1].rect);
    }

    #[test]
    fn right_columns_keep_declaration_order_left_to_right() {
        let mut cols = browser_columns();
        ColumnLayout::new().resolve(Rect::new(0.0, 0.0, 600.0, 20.0), &mut cols);
        // Type, Players, Ping are declared in that order and appear in that order.
        assert!(cols[2].rect.x < cols[4].rect.x);
        assert!(cols[4].rect.x < cols[5].rect.x);
        assert_eq!(cols[5].rect.right(), 600.0);
        assert_eq!(cols[3].rect.right(), cols[2].rect.x - 2.0);
    }

    #[test]
    fn last_declared_left_column_gets_no_spacer() {
        let mut cols = [
            Column::new(0, "A", Anchor::Left, 10.0),
            Column::new(1, "B", Anchor::Left, 10.0),
        ];
        let rest = ColumnLayout::new().resolve(Rect::new(0.0, 0.0, 100.0, 10.0), &mut cols);
        assert_eq!(cols[0].spacer.width, 2.0);
        assert_eq!(cols[1].spacer.width, 0.0);
        assert_eq!(rest.x, 22.0);
    }

    #[test]
    fn cells_align_with_header() {
        let mut cols = browser_columns();
        ColumnLayout::new().resolve(Rect::new(10.0, 5.0, 600.0, 20.0), &mut cols);
        let row = Rect::new(10.0, 180.0, 600.0, 17.0);
        for col in &cols {
            let cell = col.cell(&row);
            assert_eq!(cell.x, col.rect.x);
            assert_eq!(cell.width, col.rect.width);
            assert_eq!(cell.y, 180.0);
            assert_eq!(cell.height, 17.0);
        }
    }

    #[test]
    fn custom_spacing() {
        let mut cols = [
            Column::new(0, "A", Anchor::Left, 10.0),
            Column::new(1, "B", Anchor::Fill, 0.0),
        ];
        ColumnLayout::new()
            .spacing(5.0)
            .resolve(Rect::new(0.0, 0.0, 100.0, 10.0), &mut cols);
        assert_eq!(cols[1].rect.x, 15.0);
        assert_eq!(cols[1].rect.width, 85.0);
    }
}
