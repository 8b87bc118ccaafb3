#![forbid(unsafe_code)]

//! Text measurement.
//!
//! Glyph shaping belongs to the host. The menu only asks how wide a run of
//! text is at a font size, through [`TextMeasure`], to right-align labels and
//! to stop text at the end of its cell.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Measures rendered text width.
pub trait TextMeasure {
    /// Width of `text` rendered at `size`, in layout units.
    fn text_width(&self, text: &str, size: f32) -> f32;
}

impl<T: TextMeasure + ?Sized> TextMeasure for &T {
    fn text_width(&self, text: &str, size: f32) -> f32 {
        (**self).text_width(text, size)
    }
}

/// Fixed-advance measurement based on Unicode display width.
///
/// Each display column advances by `size * advance`. Wide (CJK) characters
/// count as two columns. Good enough for headless runs and tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonospaceMeasure {
    /// Column advance as a fraction of the font size.
    pub advance: f32,
}

impl MonospaceMeasure {
    /// Create a measurer with the given advance ratio.
    #[must_use]
    pub const fn new(advance: f32) -> Self {
        Self { advance }
    }
}

impl Default for MonospaceMeasure {
    fn default() -> Self {
        Self::new(0.5)
    }
}

impl TextMeasure for MonospaceMeasure {
    fn text_width(&self, text: &str, size: f32) -> f32 {
        text.width() as f32 * size * self.advance
    }
}

/// Longest prefix of `text`, on grapheme boundaries, that fits in `max_width`.
pub fn fit_to_width<'a, M: TextMeasure + ?Sized>(
    measure: &M,
    text: &'a str,
    size: f32,
    max_width: f32,
) -> &'a str {
    if measure.text_width(text, size) <= max_width {
        return text;
    }
    let mut end = 0;
    for (idx, grapheme) in text.grapheme_indices(true) {
        let candidate = idx + grapheme.len();
        if measure.text_width(&text[..candidate], size) > max_width {
            break;
        }
        end = candidate;
    }
    &text[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn monospace_width_scales_with_size() {
        let m = MonospaceMeasure::default();
        assert_eq!(m.text_width("abcd", 10.0), 20.0);
        assert_eq!(m.text_width("", 10.0), 0.0);
    }

    #[test]
    fn wide_characters_count_double() {
        let m = MonospaceMeasure::new(1.0);
        assert_eq!(m.text_width("日本", 1.0), 4.0);
    }

    #[test]
    fn fit_keeps_whole_text_when_it_fits() {
        let m = MonospaceMeasure::new(1.0);
        assert_eq!(fit_to_width(&m, "dm1", 1.0, 3.0), "dm1");
    }

    #[test]
    fn fit_stops_on_grapheme_boundary() {
        let m = MonospaceMeasure::new(1.0);
        assert_eq!(fit_to_width(&m, "ctf_duel", 1.0, 4.0), "ctf_");
        assert_eq!(fit_to_width(&m, "日本語", 1.0, 5.0), "日本");
        assert_eq!(fit_to_width(&m, "x", 1.0, 0.5), "");
    }
}
