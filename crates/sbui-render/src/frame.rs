#![forbid(unsafe_code)]

//! Recording render target.
//!
//! A [`Frame`] collects the draw calls of one menu pass as a flat list of
//! [`DrawCommand`]s. Hosts replay the list into their graphics backend; tests
//! inspect it directly.
//!
//! # Clipping
//!
//! The frame keeps a clip stack. Pushing intersects the new rectangle with the
//! current clip, popping never removes the base clip. Rectangles entirely
//! outside the current clip are dropped instead of recorded.
//!
//! ```
//! use sbui_core::geometry::Rect;
//! use sbui_render::{Corners, Frame, RectRenderer, Rgba};
//!
//! let mut frame = Frame::new(Rect::from_size(800.0, 600.0));
//! frame.push_clip(Rect::new(0.0, 0.0, 100.0, 100.0));
//! frame.draw_rect(Rect::new(200.0, 200.0, 10.0, 10.0), Rgba::WHITE, Corners::NONE, 0.0);
//! frame.pop_clip();
//! assert_eq!(frame.rect_count(), 0);
//! assert_eq!(frame.culled(), 1);
//! ```

use crate::color::Rgba;
use crate::{Corners, Icon, RectRenderer, TextRenderer};
use sbui_core::geometry::Rect;

/// One recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Filled rectangle.
    Rect {
        /// Target rectangle.
        rect: Rect,
        /// Fill color.
        color: Rgba,
        /// Rounded corners.
        corners: Corners,
        /// Corner radius.
        radius: f32,
    },
    /// Text run.
    Text {
        /// The text.
        text: String,
        /// Left edge.
        x: f32,
        /// Top edge.
        y: f32,
        /// Font size.
        size: f32,
        /// Color override.
        color: Option<Rgba>,
    },
    /// Sprite.
    Icon {
        /// Target rectangle.
        rect: Rect,
        /// Which sprite.
        icon: Icon,
    },
    /// Clip pushed; carries the effective (intersected) rectangle.
    PushClip(Rect),
    /// Clip popped.
    PopClip,
}

/// A recording [`RectRenderer`] + [`TextRenderer`].
#[derive(Debug, Clone)]
pub struct Frame {
    commands: Vec<DrawCommand>,
    clip_stack: Vec<Rect>,
    culled: usize,
}

impl Frame {
    /// Create an empty frame whose base clip is `screen`.
    pub fn new(screen: Rect) -> Self {
        Self {
            commands: Vec::new(),
            clip_stack: vec![screen],
            culled: 0,
        }
    }

    /// Recorded commands, in order.
    #[inline]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// The effective clip rectangle.
    #[inline]
    pub fn current_clip(&self) -> Rect {
        self.clip_stack.last().copied().unwrap_or_default()
    }

    /// Depth of the clip stack (1 = base clip only).
    #[inline]
    pub fn clip_depth(&self) -> usize {
        self.clip_stack.len()
    }

    /// Number of rectangles dropped because they fell outside the clip.
    #[inline]
    pub fn culled(&self) -> usize {
        self.culled
    }

    /// Number of recorded rectangles.
    pub fn rect_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Rect { .. }))
            .count()
    }

    /// All recorded text runs, in order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    /// Recorded text runs together with their color override.
    pub fn colored_texts(&self) -> impl Iterator<Item = (&str, Option<Rgba>)> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, color, .. } => Some((text.as_str(), *color)),
            _ => None,
        })
    }

    /// Recorded icons, in order.
    pub fn icons(&self) -> impl Iterator<Item = Icon> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Icon { icon, .. } => Some(*icon),
            _ => None,
        })
    }

    /// Drop every command and reset the clip stack to its base, keeping capacity.
    pub fn clear(&mut self) {
        self.commands.clear();
        self.clip_stack.truncate(1);
        self.culled = 0;
    }
}

impl RectRenderer for Frame {
    fn draw_rect(&mut self, rect: Rect, color: Rgba, corners: Corners, radius: f32) {
        if self.current_clip().intersection_opt(&rect).is_none() {
            self.culled += 1;
            return;
        }
        self.commands.push(DrawCommand::Rect {
            rect,
            color,
            corners,
            radius,
        });
    }

    fn draw_icon(&mut self, rect: Rect, icon: Icon) {
        if self.current_clip().intersection_opt(&rect).is_none() {
            self.culled += 1;
            return;
        }
        self.commands.push(DrawCommand::Icon { rect, icon });
    }

    fn push_clip(&mut self, rect: Rect) {
        let clip = self.current_clip().intersection(&rect);
        self.clip_stack.push(clip);
        self.commands.push(DrawCommand::PushClip(clip));
    }

    fn pop_clip(&mut self) {
        if self.clip_stack.len() > 1 {
            self.clip_stack.pop();
            self.commands.push(DrawCommand::PopClip);
        } else {
            sbui_core::warn!(message = "frame.clip_underflow");
        }
    }
}

impl TextRenderer for Frame {
    fn draw_text(&mut self, text: &str, x: f32, y: f32, size: f32, color: Option<Rgba>) {
        if text.is_empty() {
            return;
        }
        self.commands.push(DrawCommand::Text {
            text: text.to_owned(),
            x,
            y,
            size,
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen() -> Rect {
        Rect::from_size(800.0, 600.0)
    }

    #[test]
    fn clip_stack_intersects() {
        let mut frame = Frame::new(screen());
        frame.push_clip(Rect::new(10.0, 10.0, 100.0, 100.0));
        frame.push_clip(Rect::new(50.0, 50.0, 100.0, 100.0));
        assert_eq!(frame.current_clip(), Rect::new(50.0, 50.0, 60.0, 60.0));
        assert_eq!(frame.clip_depth(), 3);
        frame.pop_clip();
        frame.pop_clip();
        frame.pop_clip();
        assert_eq!(frame.clip_depth(), 1);
        assert_eq!(frame.current_clip(), screen());
    }

    #[test]
    fn rects_outside_clip_are_culled() {
        let mut frame = Frame::new(screen());
        frame.push_clip(Rect::new(0.0, 0.0, 100.0, 20.0));
        frame.draw_rect(Rect::new(0.0, 10.0, 50.0, 20.0), Rgba::WHITE, Corners::ALL, 4.0);
        frame.draw_rect(Rect::new(0.0, 40.0, 50.0, 20.0), Rgba::WHITE, Corners::ALL, 4.0);
        frame.draw_icon(Rect::new(0.0, 40.0, 10.0, 10.0), Icon::Lock);
        frame.pop_clip();
        assert_eq!(frame.rect_count(), 1);
        assert_eq!(frame.culled(), 2);
    }

    #[test]
    fn empty_text_is_skipped() {
        let mut frame = Frame::new(screen());
        frame.draw_text("", 0.0, 0.0, 10.0, None);
        frame.draw_text("Tee", 0.0, 0.0, 10.0, Some(Rgba::BLACK));
        let texts: Vec<_> = frame.colored_texts().collect();
        assert_eq!(texts, vec![("Tee", Some(Rgba::BLACK))]);
    }

    #[test]
    fn clear_resets_everything() {
        let mut frame = Frame::new(screen());
        frame.push_clip(Rect::new(0.0, 0.0, 1.0, 1.0));
        frame.draw_rect(Rect::new(5.0, 5.0, 1.0, 1.0), Rgba::WHITE, Corners::NONE, 0.0);
        frame.clear();
        assert!(frame.commands().is_empty());
        assert_eq!(frame.clip_depth(), 1);
        assert_eq!(frame.culled(), 0);
    }
}
