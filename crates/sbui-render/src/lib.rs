#![forbid(unsafe_code)]

//! Render contracts for the menu.
//!
//! The menu never talks to a graphics API. It emits draw calls through the
//! [`RectRenderer`] and [`TextRenderer`] traits; the host translates them into
//! quads and glyph runs. [`frame::Frame`] is a recording implementation used
//! for headless runs and tests.

pub mod color;
pub mod frame;

use bitflags::bitflags;
use sbui_core::geometry::Rect;

pub use color::{Hsla, Rgba};
pub use frame::{DrawCommand, Frame};

bitflags! {
    /// Which corners of a rectangle are rounded.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Corners: u8 {
        /// Square corners.
        const NONE = 0;
        /// Top-left.
        const TL = 0b0001;
        /// Top-right.
        const TR = 0b0010;
        /// Bottom-left.
        const BL = 0b0100;
        /// Bottom-right.
        const BR = 0b1000;

        /// Both top corners.
        const TOP = Self::TL.bits() | Self::TR.bits();
        /// Both bottom corners.
        const BOTTOM = Self::BL.bits() | Self::BR.bits();
        /// Both left corners.
        const LEFT = Self::TL.bits() | Self::BL.bits();
        /// Both right corners.
        const RIGHT = Self::TR.bits() | Self::BR.bits();
        /// All four corners.
        const ALL = Self::TOP.bits() | Self::BOTTOM.bits();
    }
}

/// Small sprites the browser places next to text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    /// Password-protected server.
    Lock,
    /// Favorite server.
    Favorite,
    /// Server hosted by the game's maintainers.
    Official,
    /// Server or client is a friend.
    Friend,
    /// Country flag by country code.
    Flag(i16),
}

/// Draws filled rectangles, sprites, and manages clipping.
pub trait RectRenderer {
    /// Fill `rect` with `color`, rounding `corners` by `radius`.
    fn draw_rect(&mut self, rect: Rect, color: Rgba, corners: Corners, radius: f32);

    /// Draw a sprite stretched over `rect`.
    fn draw_icon(&mut self, rect: Rect, icon: Icon) {
        let _ = (rect, icon);
    }

    /// Restrict subsequent drawing to `rect` intersected with the current clip.
    fn push_clip(&mut self, rect: Rect);

    /// Restore the clip active before the matching [`push_clip`](Self::push_clip).
    fn pop_clip(&mut self);
}

/// Draws a run of text.
pub trait TextRenderer {
    /// Draw `text` with its top-left at `(x, y)`.
    ///
    /// `color` overrides the renderer's current text color when set.
    fn draw_text(&mut self, text: &str, x: f32, y: f32, size: f32, color: Option<Rgba>);
}

/// Anything that can draw both rectangles and text.
pub trait Painter: RectRenderer + TextRenderer {}

impl<T: RectRenderer + TextRenderer> Painter for T {}
