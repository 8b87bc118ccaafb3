#![forbid(unsafe_code)]

//! Virtualized list geometry.
//!
//! A [`ScrollableList`] describes one frame of a list: how many logical items
//! exist, how tall each row is, and the viewport they scroll through. From
//! that it derives which rows intersect the viewport, so callers only pay for
//! the visible rows no matter how many items the list holds.
//!
//! Persistent state lives in the caller-owned [`ListViewState`].
//!
//! # Scroll model
//!
//! The scroll position is a fraction `s` in `[0, 1]` of the scrollable range:
//!
//! ```text
//! capacity        = floor(viewport.h / row_h) + 1
//! scrollable_rows = max(N - capacity + 1, 0)
//! offset_y        = s * scrollable_rows * row_h
//! row_top(i)      = viewport.y - offset_y + i * row_h
//! ```
//!
//! # Example
//!
//! ```
//! use sbui_core::geometry::Rect;
//! use sbui_widgets::virtualized::{ListViewState, ScrollableList};
//!
//! let list = ScrollableList::new(10_000, 20.0, Rect::new(0.0, 0.0, 300.0, 200.0));
//! let mut state = ListViewState::default();
//! state.scroll = 0.5;
//! assert!(list.rows(&state).count() <= 11);
//! ```

use std::ops::Range;

use sbui_core::geometry::Rect;

/// Rows scrolled per wheel tick.
pub const WHEEL_ROWS: f32 = 3.0;

/// Caller-owned list state that survives between frames.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct ListViewState {
    /// Scroll fraction in `[0, 1]`.
    pub scroll: f32,
    /// Selected item, if any.
    pub selected: Option<usize>,
    /// One-shot request to scroll to an item; consumed by
    /// [`ScrollableList::normalize`].
    #[cfg_attr(feature = "state-persistence", serde(skip))]
    pub pending_scroll_to: Option<usize>,
}

impl ListViewState {
    /// Fresh state: top of the list, nothing selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`select`](Self::select).
    #[must_use]
    pub fn with_selected(mut self, index: Option<usize>) -> Self {
        self.selected = index;
        self
    }

    /// Set the selected item.
    pub fn select(&mut self, index: Option<usize>) {
        self.selected = index;
    }

    /// Request a scroll to `index` on the next frame.
    pub fn scroll_to(&mut self, index: usize) {
        self.pending_scroll_to = Some(index);
    }
}

/// A row that intersects the viewport this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibleRow {
    /// Logical item index.
    pub index: usize,
    /// Full row rectangle; may extend past the viewport edges.
    pub rect: Rect,
    /// Row rectangle clipped to the viewport. Use this for hit testing so a
    /// half-hidden row cannot be clicked through the header.
    pub hit_rect: Rect,
}

/// Geometry of a virtualized list for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollableList {
    item_count: usize,
    row_height: f32,
    viewport: Rect,
}

impl ScrollableList {
    /// Describe a list of `item_count` rows of `row_height` inside `viewport`.
    pub const fn new(item_count: usize, row_height: f32, viewport: Rect) -> Self {
        Self {
            item_count,
            row_height,
            viewport,
        }
    }

    /// Number of logical items.
    #[inline]
    pub const fn item_count(&self) -> usize {
        self.item_count
    }

    /// Height of one row.
    #[inline]
    pub const fn row_height(&self) -> f32 {
        self.row_height
    }

    /// The viewport rows scroll through.
    #[inline]
    pub const fn viewport(&self) -> Rect {
        self.viewport
    }

    /// `floor(viewport.h / row_h) + 1`.
    ///
    /// A non-positive row height means every row fits.
    pub fn capacity(&self) -> usize {
        if self.row_height <= 0.0 {
            return self.item_count.saturating_add(1);
        }
        let rows = (self.viewport.height / self.row_height).floor();
        if rows.is_finite() && rows > 0.0 {
            (rows as usize).saturating_add(1)
        } else {
            1
        }
    }

    /// Rows beyond the viewport; zero when all items fit.
    pub fn scrollable_rows(&self) -> usize {
        self.item_count.saturating_add(1).saturating_sub(self.capacity())
    }

    /// Whether scrolling does anything.
    #[inline]
    pub fn is_scrollable(&self) -> bool {
        self.scrollable_rows() > 0
    }

    /// Pixel offset for scroll fraction `scroll`.
    pub fn offset_y(&self, scroll: f32) -> f32 {
        sanitize(scroll) * self.scrollable_rows() as f32 * self.row_height
    }

    /// Top edge of row `index`.
    pub fn row_top(&self, index: usize, scroll: f32) -> f32 {
        self.viewport.y - self.offset_y(scroll) + index as f32 * self.row_height
    }

    /// Full rectangle of row `index`.
    pub fn row_rect(&self, index: usize, scroll: f32) -> Rect {
        Rect::new(
            self.viewport.x,
            self.row_top(index, scroll),
            self.viewport.width,
            self.row_height,
        )
    }

    /// Whether row `index` intersects the viewport.
    pub fn is_row_visible(&self, index: usize, scroll: f32) -> bool {
        if index >= self.item_count {
            return false;
        }
        let top = self.row_top(index, scroll);
        top + self.row_height > self.viewport.y && top < self.viewport.bottom()
    }

    /// Index range of rows that may intersect the viewport.
    pub fn visible_range(&self, scroll: f32) -> Range<usize> {
        if self.item_count == 0 || self.row_height <= 0.0 || self.viewport.height <= 0.0 {
            return 0..0;
        }
        let offset = self.offset_y(scroll);
        let first = (offset / self.row_height).floor().max(0.0) as usize;
        let end = ((self.viewport.height + offset) / self.row_height).ceil().max(0.0) as usize;
        let end = end.min(self.item_count);
        first.min(end)..end
    }

    /// Visible rows, top to bottom.
    pub fn rows(&self, state: &ListViewState) -> impl Iterator<Item = VisibleRow> + '_ {
        let scroll = state.scroll;
        self.visible_range(scroll).filter_map(move |index| {
            let rect = self.row_rect(index, scroll);
            let hit_rect = rect.intersection_opt(&self.viewport)?;
            Some(VisibleRow {
                index,
                rect,
                hit_rect,
            })
        })
    }

    /// Bring `state` in line with this frame's list.
    ///
    /// Clamps the selection to the item count, consumes a pending scroll
    /// request, and pins the scroll to the top when nothing scrolls.
    pub fn normalize(&self, state: &mut ListViewState) {
        state.selected = match state.selected {
            _ if self.item_count == 0 => None,
            Some(sel) => Some(sel.min(self.item_count - 1)),
            None => None,
        };

        let scrollable = self.scrollable_rows();
        if let Some(index) = state.pending_scroll_to.take()
            && scrollable > 0
        {
            state.scroll = (index as f32 / scrollable as f32).min(1.0);
            sbui_core::debug!(message = "list.scroll_to", index, scroll = state.scroll);
        }

        state.scroll = if scrollable == 0 {
            0.0
        } else {
            sanitize(state.scroll)
        };
    }

    /// Apply wheel ticks: `WHEEL_ROWS` rows per tick, positive scrolls down.
    ///
    /// Returns whether the scroll position changed.
    pub fn apply_wheel(&self, state: &mut ListViewState, ticks: i32) -> bool {
        let scrollable = self.scrollable_rows();
        if ticks == 0 || scrollable == 0 {
            return false;
        }
        let before = state.scroll;
        let step = WHEEL_ROWS / scrollable as f32;
        state.scroll = sanitize(state.scroll + ticks as f32 * step);
        state.scroll != before
    }

    /// Minimal scroll that makes row `index` fully visible.
    ///
    /// A row above the viewport is aligned to its top edge, a row below it to
    /// its bottom edge. A row already inside leaves the scroll untouched.
    pub fn scroll_into_view(&self, state: &mut ListViewState, index: usize) {
        let scrollable = self.scrollable_rows();
        if scrollable == 0 || index >= self.item_count || self.row_height <= 0.0 {
            return;
        }
        let range = scrollable as f32 * self.row_height;
        let top = self.row_top(index, state.scroll);
        let bottom = top + self.row_height;

        let offset = if top < self.viewport.y {
            index as f32 * self.row_height
        } else if bottom > self.viewport.bottom() {
            (index + 1) as f32 * self.row_height - self.viewport.height
        } else {
            return;
        };
        state.scroll = sanitize(offset / range);
    }
}

fn sanitize(scroll: f32) -> f32 {
    if scroll.is_nan() {
        0.0
    } else {
        scroll.clamp(0.0, 1.0)
    }
}
