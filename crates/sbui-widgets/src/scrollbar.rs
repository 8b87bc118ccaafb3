#![forbid(unsafe_code)]

//! Vertical scrollbar.
//!
//! The thumb is a drag widget: once grabbed it follows the pointer anywhere
//! on screen until the button is released.

use sbui_core::geometry::Rect;
use sbui_render::{Corners, RectRenderer};

use crate::interaction::{DragPhase, InteractionEngine, WidgetId};
use crate::theme::{self, Theme};

/// Thumb height in layout units.
pub const THUMB_LENGTH: f32 = 33.0;

/// Per-scrollbar state that survives frames.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollbarState {
    grab_offset: f32,
}

impl ScrollbarState {
    /// Distance from the thumb top to the point where it was grabbed.
    #[inline]
    pub fn grab_offset(&self) -> f32 {
        self.grab_offset
    }
}

/// A vertical scrollbar over a `[0, 1]` value.
#[derive(Debug, Clone, Copy)]
pub struct Scrollbar {
    id: WidgetId,
}

impl Scrollbar {
    /// Scrollbar with identity `id`.
    pub const fn new(id: WidgetId) -> Self {
        Self { id }
    }

    /// Widget identity.
    #[inline]
    pub const fn id(&self) -> WidgetId {
        self.id
    }

    /// Thumb rectangle for `value` inside `track`.
    pub fn thumb_rect(track: &Rect, value: f32) -> Rect {
        let height = THUMB_LENGTH.min(track.height.max(0.0));
        let travel = track.height - height;
        Rect::new(
            track.x,
            track.y + travel * value.clamp(0.0, 1.0),
            track.width,
            height,
        )
    }

    /// Value for a thumb grabbed at `grab_offset` with the pointer at `y`.
    pub fn value_at(track: &Rect, y: f32, grab_offset: f32) -> f32 {
        let travel = track.height - THUMB_LENGTH.min(track.height.max(0.0));
        if travel <= 0.0 {
            return 0.0;
        }
        ((y - grab_offset - track.y) / travel).clamp(0.0, 1.0)
    }

    /// Run the thumb logic without drawing. Returns the new value.
    pub fn update(
        &self,
        ui: &mut InteractionEngine,
        track: &Rect,
        value: f32,
        state: &mut ScrollbarState,
    ) -> f32 {
        let thumb = Self::thumb_rect(track, value);
        match ui.drag_logic(self.id, &thumb) {
            Some(DragPhase::Started { y, .. }) => {
                state.grab_offset = y - thumb.y;
                value
            }
            Some(DragPhase::Dragging { y, .. }) | Some(DragPhase::Released { y, .. }) => {
                Self::value_at(track, y, state.grab_offset)
            }
            None => value,
        }
    }

    /// Run the logic and draw rail and thumb. Returns the new value.
    pub fn render<P: RectRenderer + ?Sized>(
        &self,
        ui: &mut InteractionEngine,
        painter: &mut P,
        theme: &Theme,
        track: &Rect,
        value: f32,
        state: &mut ScrollbarState,
    ) -> f32 {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "widget_render",
            widget = "Scrollbar",
            x = track.x,
            y = track.y,
            h = track.height
        )
        .entered();

        let value = self.update(ui, track, value, state);

        let rail = track.vmargin(track.width / 4.0);
        painter.draw_rect(rail, theme.scroll_rail, Corners::ALL, rail.width / 2.0);

        let thumb = Self::thumb_rect(track, value);
        let color = theme::interactive(
            theme.scroll_thumb,
            ui.is_hot(self.id),
            ui.is_active(self.id),
        );
        painter.draw_rect(thumb, color, Corners::ALL, thumb.width / 2.0);
        value
    }
}
