#![forbid(unsafe_code)]

//! Per-frame context handed to every widget.

use sbui_core::event::InputFrame;
use sbui_render::Painter;
use sbui_text::TextMeasure;

use crate::interaction::InteractionEngine;
use crate::theme::Theme;

/// Everything a widget needs for one frame.
///
/// Built by the caller between [`InteractionEngine::begin_frame`] and
/// [`InteractionEngine::end_frame`].
pub struct Ctx<'a> {
    /// Hot/active tracking.
    pub ui: &'a mut InteractionEngine,
    /// Draw target.
    pub painter: &'a mut dyn Painter,
    /// Text width measurement.
    pub measure: &'a dyn TextMeasure,
    /// Colors and metrics.
    pub theme: &'a Theme,
    /// This frame's input.
    pub input: &'a InputFrame,
}

impl<'a> Ctx<'a> {
    /// Bundle the frame's collaborators.
    pub fn new(
        ui: &'a mut InteractionEngine,
        painter: &'a mut dyn Painter,
        measure: &'a dyn TextMeasure,
        theme: &'a Theme,
        input: &'a InputFrame,
    ) -> Self {
        Self {
            ui,
            painter,
            measure,
            theme,
            input,
        }
    }
}

impl std::fmt::Debug for Ctx<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ctx")
            .field("ui", &self.ui)
            .field("theme", &self.theme)
            .field("input", &self.input)
            .finish_non_exhaustive()
    }
}
