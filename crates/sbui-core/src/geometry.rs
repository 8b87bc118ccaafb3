#![forbid(unsafe_code)]

//! Rectangle algebra for menu layout.
//!
//! Every widget position is derived from a parent [`Rect`] by nested splits
//! and margins. The operations are pure and never clamp: a cut larger than
//! the available extent yields a rectangle with a negative width or height.
//! Such a rectangle is undefined geometry rather than an error; drawing or
//! hit-testing it is harmless (it contains no points).

/// An axis-aligned rectangle in continuous layout units.
///
/// Origin at top-left, `y` grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Left edge.
    pub x: f32,
    /// Top edge.
    pub y: f32,
    /// Width.
    pub width: f32,
    /// Height.
    pub height: f32,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle at the origin with the given size.
    #[inline]
    pub const fn from_size(width: f32, height: f32) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// Left edge. Alias for `self.x`.
    #[inline]
    pub const fn left(&self) -> f32 {
        self.x
    }

    /// Top edge. Alias for `self.y`.
    #[inline]
    pub const fn top(&self) -> f32 {
        self.y
    }

    /// Right edge (exclusive).
    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Bottom edge (exclusive).
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Center point.
    #[inline]
    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Area. Negative extents count as zero.
    #[inline]
    pub fn area(&self) -> f32 {
        self.width.max(0.0) * self.height.max(0.0)
    }

    /// Check if the rectangle has no area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Check if a point is inside the rectangle (half-open on both axes).
    #[inline]
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Same rectangle with `y`/`height` replaced by those of `row`.
    ///
    /// Used to project a header column onto a data row.
    #[inline]
    #[must_use]
    pub const fn with_rows_of(&self, row: &Rect) -> Rect {
        Rect::new(self.x, row.y, self.width, row.height)
    }

    // --- Splits -----------------------------------------------------------

    /// Split off `cut` units from the top. Returns `(top, bottom)`.
    #[inline]
    pub fn hsplit_top(&self, cut: f32) -> (Rect, Rect) {
        (
            Rect::new(self.x, self.y, self.width, cut),
            Rect::new(self.x, self.y + cut, self.width, self.height - cut),
        )
    }

    /// Split off `cut` units from the bottom. Returns `(top, bottom)`.
    #[inline]
    pub fn hsplit_bottom(&self, cut: f32) -> (Rect, Rect) {
        (
            Rect::new(self.x, self.y, self.width, self.height - cut),
            Rect::new(self.x, self.y + self.height - cut, self.width, cut),
        )
    }

    /// Split into two halves stacked vertically. Returns `(top, bottom)`.
    #[inline]
    pub fn hsplit_mid(&self) -> (Rect, Rect) {
        self.hsplit_top(self.height / 2.0)
    }

    /// Split off `cut` units from the left. Returns `(left, right)`.
    #[inline]
    pub fn vsplit_left(&self, cut: f32) -> (Rect, Rect) {
        (
            Rect::new(self.x, self.y, cut, self.height),
            Rect::new(self.x + cut, self.y, self.width - cut, self.height),
        )
    }

    /// Split off `cut` units from the right. Returns `(left, right)`.
    #[inline]
    pub fn vsplit_right(&self, cut: f32) -> (Rect, Rect) {
        (
            Rect::new(self.x, self.y, self.width - cut, self.height),
            Rect::new(self.x + self.width - cut, self.y, cut, self.height),
        )
    }

    /// Split into two halves side by side. Returns `(left, right)`.
    #[inline]
    pub fn vsplit_mid(&self) -> (Rect, Rect) {
        self.vsplit_left(self.width / 2.0)
    }

    // --- Margins ----------------------------------------------------------

    /// Shrink by `cut` on all four sides.
    #[inline]
    #[must_use]
    pub fn margin(&self, cut: f32) -> Rect {
        Rect::new(
            self.x + cut,
            self.y + cut,
            self.width - 2.0 * cut,
            self.height - 2.0 * cut,
        )
    }

    /// Shrink by `cut` on the left and right edges only.
    #[inline]
    #[must_use]
    pub fn vmargin(&self, cut: f32) -> Rect {
        Rect::new(self.x + cut, self.y, self.width - 2.0 * cut, self.height)
    }

    /// Shrink by `cut` on the top and bottom edges only.
    #[inline]
    #[must_use]
    pub fn hmargin(&self, cut: f32) -> Rect {
        Rect::new(self.x, self.y + cut, self.width, self.height - 2.0 * cut)
    }

    // --- Set operations ---------------------------------------------------

    /// Compute the intersection with another rectangle, returning `None` if no overlap.
    #[inline]
    pub fn intersection_opt(&self, other: &Rect) -> Option<Rect> {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        if x < right && y < bottom {
            Some(Rect::new(x, y, right - x, bottom - y))
        } else {
            None
        }
    }

    /// Compute the intersection with another rectangle.
    ///
    /// Returns an empty rectangle if the rectangles don't overlap.
    #[inline]
    pub fn intersection(&self, other: &Rect) -> Rect {
        self.intersection_opt(other).unwrap_or_default()
    }

    /// Smallest rectangle containing both.
    pub fn union(&self, other: &Rect) -> Rect {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        Rect::new(x, y, right - x, bottom - y)
    }
}
