#![forbid(unsafe_code)]

//! Even splits and flow grids.

use sbui_core::geometry::Rect;

/// Split `area` horizontally into `count` equal columns.
///
/// Returns an empty vector for `count == 0`.
pub fn split_even(area: Rect, count: usize) -> Vec<Rect> {
    if count == 0 {
        return Vec::new();
    }
    let width = area.width / count as f32;
    (0..count)
        .map(|i| Rect::new(area.x + width * i as f32, area.y, width, area.height))
        .collect()
}

/// Fixed-size cells flowed left to right, `per_line` per row.
///
/// Each cell is centered within its slot: slot `c` of a line spans
/// `area.width / per_line`, and the cell is placed at the slot's center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowGrid {
    /// Cells per line. Treated as 1 when zero.
    pub per_line: usize,
    /// Cell width.
    pub cell_width: f32,
    /// Cell height.
    pub cell_height: f32,
    /// Vertical gap between lines.
    pub line_spacing: f32,
}

impl FlowGrid {
    /// Create a grid of `per_line` cells of the given size, no line spacing.
    pub const fn new(per_line: usize, cell_width: f32, cell_height: f32) -> Self {
        Self {
            per_line,
            cell_width,
            cell_height,
            line_spacing: 0.0,
        }
    }

    /// Set the gap between lines.
    #[must_use]
    pub const fn line_spacing(mut self, spacing: f32) -> Self {
        self.line_spacing = spacing;
        self
    }

    /// Number of lines needed for `count` cells.
    pub fn lines(&self, count: usize) -> usize {
        count.div_ceil(self.per_line.max(1))
    }

    /// Total height needed for `count` cells.
    pub fn height(&self, count: usize) -> f32 {
        let lines = self.lines(count);
        if lines == 0 {
            return 0.0;
        }
        lines as f32 * self.cell_height + (lines - 1) as f32 * self.line_spacing
    }

    /// Rectangle of cell `index` inside `area`.
    pub fn cell(&self, area: Rect, index: usize) -> Rect {
        let per_line = self.per_line.max(1);
        let col = index % per_line;
        let line = index / per_line;
        let center_x = area.x + area.width * ((col as f32 + 0.5) / per_line as f32);
        Rect::new(
            center_x - self.cell_width / 2.0,
            area.y + line as f32 * (self.cell_height + self.line_spacing),
            self.cell_width,
            self.cell_height,
        )
    }

    /// Index of the cell containing `(x, y)`, if any of the first `count` does.
    pub fn hit(&self, area: Rect, count: usize, x: f32, y: f32) -> Option<usize> {
        (0..count).find(|&i| self.cell(area, i).contains(x, y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_even_into_thirds() {
        let tabs = split_even(Rect::new(0.0, 0.0, 300.0, 20.0), 3);
        assert_eq!(tabs.len(), 3);
        assert_eq!(tabs[1], Rect::new(100.0, 0.0, 100.0, 20.0));
        assert_eq!(tabs[2].right(), 300.0);
        assert!(split_even(Rect::default(), 0).is_empty());
    }

    #[test]
    fn cells_are_centered_in_slots() {
        let grid = FlowGrid::new(4, 20.0, 10.0).line_spacing(2.0);
        let area = Rect::new(0.0, 0.0, 200.0, 100.0);
        assert_eq!(grid.cell(area, 0), Rect::new(15.0, 0.0, 20.0, 10.0));
        assert_eq!(grid.cell(area, 3), Rect::new(165.0, 0.0, 20.0, 10.0));
        assert_eq!(grid.cell(area, 5), Rect::new(65.0, 12.0, 20.0, 10.0));
    }

    #[test]
    fn lines_and_height() {
        let grid = FlowGrid::new(3, 10.0, 10.0).line_spacing(5.0);
        assert_eq!(grid.lines(0), 0);
        assert_eq!(grid.lines(3), 1);
        assert_eq!(grid.lines(7), 3);
        assert_eq!(grid.height(7), 40.0);
        assert_eq!(grid.height(0), 0.0);
    }

    #[test]
    fn hit_finds_cell() {
        let grid = FlowGrid::new(2, 10.0, 10.0);
        let area = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert_eq!(grid.hit(area, 4, 75.0, 15.0), Some(3));
        assert_eq!(grid.hit(area, 4, 0.0, 0.0), None);
        assert_eq!(grid.hit(area, 3, 75.0, 15.0), None);
    }
}
