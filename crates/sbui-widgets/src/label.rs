#![forbid(unsafe_code)]

//! Single-line text placement.

use sbui_core::geometry::Rect;
use sbui_render::Rgba;
use sbui_text::{SpanStyle, fit_to_width, highlight};

use crate::context::Ctx;

/// Horizontal text alignment inside a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Align {
    /// Flush left.
    #[default]
    Left,
    /// Centered.
    Center,
    /// Flush right.
    Right,
}

/// Draw `text` vertically centered in `rect`, cut to fit its width.
pub fn label(cx: &mut Ctx<'_>, rect: &Rect, text: &str, size: f32, align: Align, color: Option<Rgba>) {
    let text = fit_to_width(cx.measure, text, size, rect.width.max(0.0));
    if text.is_empty() {
        return;
    }
    let width = cx.measure.text_width(text, size);
    let x = match align {
        Align::Left => rect.x,
        Align::Center => rect.x + (rect.width - width) / 2.0,
        Align::Right => rect.right() - width,
    };
    let y = rect.y + (rect.height - size) / 2.0;
    cx.painter.draw_text(text, x, y, size, color);
}

/// Draw `text` left-aligned with the first case-insensitive match of
/// `needle` in `emphasis` color.
///
/// Returns whether a match was drawn.
pub fn highlighted_label(
    cx: &mut Ctx<'_>,
    rect: &Rect,
    text: &str,
    needle: &str,
    size: f32,
    color: Option<Rgba>,
    emphasis: Rgba,
) -> bool {
    let text = fit_to_width(cx.measure, text, size, rect.width.max(0.0));
    let spans = highlight(text, needle);
    let y = rect.y + (rect.height - size) / 2.0;
    let mut x = rect.x;
    for (span, style) in spans.spans() {
        let span_color = match style {
            SpanStyle::Normal => color,
            SpanStyle::Emphasis => Some(emphasis),
        };
        cx.painter.draw_text(span, x, y, size, span_color);
        x += cx.measure.text_width(span, size);
    }
    spans.is_match()
}
