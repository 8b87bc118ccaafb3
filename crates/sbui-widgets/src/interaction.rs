#![forbid(unsafe_code)]

//! Immediate-mode widget interaction.
//!
//! Widgets are not objects. Each frame the caller re-declares every widget by
//! calling into the [`InteractionEngine`] with a [`WidgetId`] and a rectangle,
//! and the engine answers whether the widget is hot, active, or was clicked.
//! The only state that survives between frames lives here:
//!
//! - `hot`: the widget under the pointer, finalized at the end of the
//!   previous frame. Read-only while the current frame is evaluated.
//! - `hot_candidate`: the first widget this frame whose rectangle contains
//!   the pointer. Becomes `hot` in [`InteractionEngine::end_frame`].
//! - `active`: the widget engaged by a held button. Exclusive across the UI.
//! - `last_active`: the most recent non-empty `active`.
//!
//! # Frame protocol
//!
//! ```
//! use sbui_core::event::{InputFrame, MouseButtons};
//! use sbui_core::geometry::Rect;
//! use sbui_widgets::interaction::{InteractionEngine, WidgetId};
//!
//! let mut ui = InteractionEngine::new();
//! let ok = WidgetId::new(1);
//! let rect = Rect::new(0.0, 0.0, 100.0, 20.0);
//!
//! // press inside
//! ui.begin_frame(&InputFrame::at(10.0, 10.0).with_buttons(MouseButtons::LEFT));
//! assert!(!ui.button_logic(ok, &rect));
//! ui.end_frame();
//!
//! // release inside: click
//! ui.begin_frame(&InputFrame::at(12.0, 10.0));
//! assert!(ui.button_logic(ok, &rect));
//! ui.end_frame();
//! ```

use std::hash::{Hash, Hasher};

use rustc_hash::FxHasher;
use sbui_core::event::{InputFrame, MouseButton, MouseButtons};
use sbui_core::geometry::Rect;

/// Opaque widget identity.
///
/// Only ever compared for equality. Two widgets declared in the same frame
/// must not share an id; the same logical widget must keep its id across
/// frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct WidgetId(u64);

impl WidgetId {
    /// Create an id from a raw value.
    #[inline]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Id for slot `index` of a panel or widget group `scope`.
    #[inline]
    pub const fn slot(scope: u32, index: u32) -> Self {
        Self(((scope as u64) << 32) | index as u64)
    }

    /// Id derived from a stable key within `scope`, e.g. a server address.
    ///
    /// Keeps a row's identity attached to its item when sorting moves it.
    pub fn keyed<K: Hash + ?Sized>(scope: u32, key: &K) -> Self {
        let mut hasher = FxHasher::default();
        scope.hash(&mut hasher);
        key.hash(&mut hasher);
        Self(hasher.finish())
    }

    /// Raw value.
    #[inline]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// How a pressable widget treats the pointer while it is held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ButtonMode {
    /// Fires on release, and only if the pointer is still inside.
    /// Releasing outside cancels.
    #[default]
    Click,
    /// Tracks the pointer everywhere while held; release always ends the drag.
    Drag,
}

/// Pointer phase reported by [`InteractionEngine::drag_logic`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragPhase {
    /// The button went down on the widget this frame.
    Started {
        /// Pointer x.
        x: f32,
        /// Pointer y.
        y: f32,
    },
    /// Still held; the pointer may be anywhere.
    Dragging {
        /// Pointer x.
        x: f32,
        /// Pointer y.
        y: f32,
    },
    /// Button released this frame.
    Released {
        /// Pointer x.
        x: f32,
        /// Pointer y.
        y: f32,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Press {
    Idle,
    Began(MouseButton),
    Held(MouseButton),
    Released { button: MouseButton, inside: bool },
}

/// Hot/active tracking for one UI context.
#[derive(Debug, Clone, Default)]
pub struct InteractionEngine {
    mouse_x: f32,
    mouse_y: f32,
    buttons: MouseButtons,
    last_buttons: MouseButtons,
    hot: Option<WidgetId>,
    hot_candidate: Option<WidgetId>,
    active: Option<WidgetId>,
    active_button: Option<MouseButton>,
    active_seen: bool,
    last_active: Option<WidgetId>,
    frame: u64,
}

impl InteractionEngine {
    /// Create an engine with nothing hot or active.
    pub fn new() -> Self {
        Self::default()
    }

    // --- Frame lifecycle ------------------------------------------------------

    /// Start a frame: latch pointer state and clear the hot candidate.
    pub fn begin_frame(&mut self, input: &InputFrame) {
        self.last_buttons = self.buttons;
        self.buttons = input.buttons;
        self.mouse_x = input.mouse_x;
        self.mouse_y = input.mouse_y;
        self.hot_candidate = None;
        self.active_seen = false;
    }

    /// Finish a frame: promote the hot candidate.
    ///
    /// While a widget is active it stays hot. An active widget that nobody
    /// declared this frame (its row was removed, its panel closed) is dropped.
    pub fn end_frame(&mut self) {
        if let Some(id) = self.active
            && !self.active_seen
        {
            sbui_core::debug!(message = "ui.active_lost", id = id.raw());
            self.active = None;
            self.active_button = None;
        }
        self.hot = self.active.or(self.hot_candidate);
        self.frame = self.frame.wrapping_add(1);
    }

    /// Number of completed frames.
    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame
    }

    // --- Pointer queries ------------------------------------------------------

    /// Pointer x.
    #[inline]
    pub fn mouse_x(&self) -> f32 {
        self.mouse_x
    }

    /// Pointer y.
    #[inline]
    pub fn mouse_y(&self) -> f32 {
        self.mouse_y
    }

    /// Whether `button` is held this frame.
    #[inline]
    pub fn mouse_down(&self, button: MouseButton) -> bool {
        self.buttons.contains(button.mask())
    }

    /// Whether `button` went down this frame.
    #[inline]
    pub fn mouse_clicked(&self, button: MouseButton) -> bool {
        self.buttons.contains(button.mask()) && !self.last_buttons.contains(button.mask())
    }

    /// Whether `button` went up this frame.
    #[inline]
    pub fn mouse_released(&self, button: MouseButton) -> bool {
        !self.buttons.contains(button.mask()) && self.last_buttons.contains(button.mask())
    }

    /// Whether the pointer is inside `rect`.
    #[inline]
    pub fn mouse_inside(&self, rect: &Rect) -> bool {
        rect.contains(self.mouse_x, self.mouse_y)
    }

    // --- Hot / active state ---------------------------------------------------

    /// Hot widget finalized at the end of the previous frame.
    #[inline]
    pub fn hot_item(&self) -> Option<WidgetId> {
        self.hot
    }

    /// Hot candidate claimed so far this frame.
    #[inline]
    pub fn next_hot_item(&self) -> Option<WidgetId> {
        self.hot_candidate
    }

    /// Widget currently engaged.
    #[inline]
    pub fn active_item(&self) -> Option<WidgetId> {
        self.active
    }

    /// Most recent widget that was active.
    #[inline]
    pub fn last_active_item(&self) -> Option<WidgetId> {
        self.last_active
    }

    /// Forget the last active widget.
    pub fn clear_last_active(&mut self) {
        self.last_active = None;
    }

    /// Whether `id` was hot at the end of the previous frame.
    #[inline]
    pub fn is_hot(&self, id: WidgetId) -> bool {
        self.hot == Some(id)
    }

    /// Whether `id` is the active widget.
    #[inline]
    pub fn is_active(&self, id: WidgetId) -> bool {
        self.active == Some(id)
    }

    /// Make `id` active without a button, e.g. to focus a text field from a
    /// shortcut. It stays active while declared each frame via
    /// [`keep_alive`](Self::keep_alive) or a logic call.
    pub fn set_active(&mut self, id: WidgetId) {
        sbui_core::debug!(message = "ui.activate", id = id.raw(), button = "none");
        self.active = Some(id);
        self.active_button = None;
        self.active_seen = true;
        self.last_active = Some(id);
    }

    /// Release whatever is active.
    pub fn clear_active(&mut self) {
        self.active = None;
        self.active_button = None;
    }

    /// Declare that `id` still exists this frame.
    pub fn keep_alive(&mut self, id: WidgetId) {
        if self.active == Some(id) {
            self.active_seen = true;
        }
    }

    /// Drop every claim `id` holds: active, hot, and hot candidate.
    ///
    /// Called for widgets that exist logically but are not shown this frame,
    /// such as rows scrolled out of a list viewport.
    pub fn release(&mut self, id: WidgetId) {
        if self.active == Some(id) {
            sbui_core::debug!(message = "ui.release", id = id.raw());
            self.active = None;
            self.active_button = None;
        }
        if self.hot == Some(id) {
            self.hot = None;
        }
        if self.hot_candidate == Some(id) {
            self.hot_candidate = None;
        }
    }

    // --- Hit testing ----------------------------------------------------------

    /// Claim hotness for `id` if the pointer is inside `rect`.
    ///
    /// The first widget to claim in a frame wins; later overlapping widgets
    /// are not hot. While another widget is active nothing else can claim.
    pub fn hit_test(&mut self, id: WidgetId, rect: &Rect) -> bool {
        if self.active == Some(id) {
            self.active_seen = true;
        } else if self.active.is_some() {
            return false;
        }
        if !self.mouse_inside(rect) {
            return false;
        }
        match self.hot_candidate {
            None => {
                self.hot_candidate = Some(id);
                true
            }
            Some(claimed) => claimed == id,
        }
    }

    fn press_logic(
        &mut self,
        id: WidgetId,
        rect: &Rect,
        accepted: MouseButtons,
    ) -> Press {
        let claimed = self.hit_test(id, rect);

        if self.active == Some(id) {
            let Some(button) = self.active_button else {
                // Keyboard-focused, not pressed.
                return Press::Idle;
            };
            if self.mouse_down(button) {
                return Press::Held(button);
            }
            self.active = None;
            self.active_button = None;
            return Press::Released {
                button,
                inside: self.mouse_inside(rect),
            };
        }

        if claimed && self.active.is_none() {
            for button in MouseButton::ALL {
                if accepted.contains(button.mask()) && self.mouse_clicked(button) {
                    sbui_core::debug!(message = "ui.activate", id = id.raw(), button = ?button);
                    self.active = Some(id);
                    self.active_button = Some(button);
                    self.active_seen = true;
                    self.last_active = Some(id);
                    return Press::Began(button);
                }
            }
        }
        Press::Idle
    }

    // --- Widget logic ---------------------------------------------------------

    /// Left-button click logic ([`ButtonMode::Click`]).
    ///
    /// Returns `true` on the frame the button is released over `rect` after
    /// being pressed over it. Releasing elsewhere cancels.
    pub fn button_logic(&mut self, id: WidgetId, rect: &Rect) -> bool {
        self.button_logic_multi_masked(id, rect, MouseButtons::LEFT)
            .is_some()
    }

    /// Click logic accepting left, right, and middle buttons.
    ///
    /// Returns the button that completed the click.
    pub fn button_logic_multi(&mut self, id: WidgetId, rect: &Rect) -> Option<MouseButton> {
        self.button_logic_multi_masked(id, rect, MouseButtons::all())
    }

    fn button_logic_multi_masked(
        &mut self,
        id: WidgetId,
        rect: &Rect,
        accepted: MouseButtons,
    ) -> Option<MouseButton> {
        match self.press_logic(id, rect, accepted) {
            Press::Released {
                button,
                inside: true,
            } => {
                sbui_core::debug!(message = "ui.click", id = id.raw(), button = ?button);
                Some(button)
            }
            Press::Released { inside: false, .. } => {
                sbui_core::debug!(message = "ui.cancel", id = id.raw());
                None
            }
            _ => None,
        }
    }

    /// Left-button drag logic ([`ButtonMode::Drag`]).
    ///
    /// Reports the pointer every frame from press to release, wherever it is.
    pub fn drag_logic(&mut self, id: WidgetId, rect: &Rect) -> Option<DragPhase> {
        let (x, y) = (self.mouse_x, self.mouse_y);
        match self.press_logic(id, rect, MouseButtons::LEFT) {
            Press::Began(_) => Some(DragPhase::Started { x, y }),
            Press::Held(_) => Some(DragPhase::Dragging { x, y }),
            Press::Released { .. } => Some(DragPhase::Released { x, y }),
            Press::Idle => None,
        }
    }

    /// Logic for either mode: returns whether the widget fired this frame.
    ///
    /// A drag widget "fires" on every frame it is engaged.
    pub fn logic(&mut self, id: WidgetId, rect: &Rect, mode: ButtonMode) -> bool {
        match mode {
            ButtonMode::Click => self.button_logic(id, rect),
            ButtonMode::Drag => self.drag_logic(id, rect).is_some(),
        }
    }

    /// Picker logic: while engaged, the pointer position clamped to `rect`,
    /// relative to its top-left corner.
    pub fn picker_logic(&mut self, id: WidgetId, rect: &Rect) -> Option<(f32, f32)> {
        self.drag_logic(id, rect).map(|phase| {
            let (x, y) = match phase {
                DragPhase::Started { x, y }
                | DragPhase::Dragging { x, y }
                | DragPhase::Released { x, y } => (x, y),
            };
            (
                (x - rect.x).clamp(0.0, rect.width.max(0.0)),
                (y - rect.y).clamp(0.0, rect.height.max(0.0)),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: WidgetId = WidgetId::new(1);
    const B: WidgetId = WidgetId::new(2);

    fn rect() -> Rect {
        Rect::new(0.0, 0.0, 100.0, 20.0)
    }

    fn frame(ui: &mut InteractionEngine, x: f32, y: f32, buttons: MouseButtons) {
        ui.begin_frame(&InputFrame::at(x, y).with_buttons(buttons));
    }

    #[test]
    fn click_inside_fires_on_release() {
        let mut ui = InteractionEngine::new();
        frame(&mut ui, 5.0, 5.0, MouseButtons::LEFT);
        assert!(!ui.button_logic(A, &rect()));
        assert!(ui.is_active(A));
        ui.end_frame();

        frame(&mut ui, 6.0, 5.0, MouseButtons::empty());
        assert!(ui.button_logic(A, &rect()));
        assert_eq!(ui.active_item(), None);
        assert_eq!(ui.last_active_item(), Some(A));
        ui.end_frame();
    }

    #[test]
    fn release_outside_cancels() {
        let mut ui = InteractionEngine::new();
        frame(&mut ui, 5.0, 5.0, MouseButtons::LEFT);
        ui.button_logic(A, &rect());
        ui.end_frame();

        frame(&mut ui, 500.0, 5.0, MouseButtons::LEFT);
        assert!(!ui.button_logic(A, &rect()));
        assert!(ui.is_active(A));
        ui.end_frame();

        frame(&mut ui, 500.0, 5.0, MouseButtons::empty());
        assert!(!ui.button_logic(A, &rect()));
        assert_eq!(ui.active_item(), None);
        ui.end_frame();
    }

    #[test]
    fn held_button_does_not_activate() {
        let mut ui = InteractionEngine::new();
        frame(&mut ui, 500.0, 5.0, MouseButtons::LEFT);
        ui.button_logic(A, &rect());
        ui.end_frame();
        // Dragged onto the button with the button already down.
        frame(&mut ui, 5.0, 5.0, MouseButtons::LEFT);
        ui.button_logic(A, &rect());
        assert_eq!(ui.active_item(), None);
        ui.end_frame();
    }

    #[test]
    fn first_claim_wins_for_overlaps() {
        let mut ui = InteractionEngine::new();
        frame(&mut ui, 5.0, 5.0, MouseButtons::LEFT);
        ui.button_logic(A, &rect());
        ui.button_logic(B, &rect());
        assert_eq!(ui.active_item(), Some(A));
        assert_eq!(ui.next_hot_item(), Some(A));
        ui.end_frame();
        assert!(ui.is_hot(A));
        assert!(!ui.is_hot(B));
    }

    #[test]
    fn hot_is_double_buffered() {
        let mut ui = InteractionEngine::new();
        frame(&mut ui, 5.0, 5.0, MouseButtons::empty());
        assert!(ui.hit_test(A, &rect()));
        assert_eq!(ui.hot_item(), None);
        ui.end_frame();
        assert_eq!(ui.hot_item(), Some(A));

        frame(&mut ui, 500.0, 5.0, MouseButtons::empty());
        assert!(!ui.hit_test(A, &rect()));
        assert_eq!(ui.hot_item(), Some(A));
        ui.end_frame();
        assert_eq!(ui.hot_item(), None);
    }

    #[test]
    fn other_widgets_are_not_hot_while_one_is_active() {
        let mut ui = InteractionEngine::new();
        frame(&mut ui, 5.0, 5.0, MouseButtons::LEFT);
        ui.button_logic(A, &rect());
        ui.end_frame();

        frame(&mut ui, 5.0, 50.0, MouseButtons::LEFT);
        ui.button_logic(A, &rect());
        assert!(!ui.hit_test(B, &Rect::new(0.0, 40.0, 100.0, 20.0)));
        ui.end_frame();
        assert_eq!(ui.hot_item(), Some(A));
    }

    #[test]
    fn multi_reports_button() {
        let mut ui = InteractionEngine::new();
        frame(&mut ui, 5.0, 5.0, MouseButtons::RIGHT);
        assert_eq!(ui.button_logic_multi(A, &rect()), None);
        ui.end_frame();
        frame(&mut ui, 5.0, 5.0, MouseButtons::empty());
        assert_eq!(ui.button_logic_multi(A, &rect()), Some(MouseButton::Right));
        ui.end_frame();

        frame(&mut ui, 5.0, 5.0, MouseButtons::MIDDLE);
        ui.button_logic_multi(A, &rect());
        ui.end_frame();
        frame(&mut ui, 5.0, 5.0, MouseButtons::empty());
        assert_eq!(ui.button_logic_multi(A, &rect()), Some(MouseButton::Middle));
        ui.end_frame();
    }

    #[test]
    fn left_only_ignores_right_button() {
        let mut ui = InteractionEngine::new();
        frame(&mut ui, 5.0, 5.0, MouseButtons::RIGHT);
        ui.button_logic(A, &rect());
        assert_eq!(ui.active_item(), None);
        ui.end_frame();
    }

    #[test]
    fn drag_tracks_outside_rect() {
        let mut ui = InteractionEngine::new();
        frame(&mut ui, 5.0, 5.0, MouseButtons::LEFT);
        assert_eq!(
            ui.drag_logic(A, &rect()),
            Some(DragPhase::Started { x: 5.0, y: 5.0 })
        );
        ui.end_frame();

        frame(&mut ui, 300.0, 90.0, MouseButtons::LEFT);
        assert_eq!(
            ui.drag_logic(A, &rect()),
            Some(DragPhase::Dragging { x: 300.0, y: 90.0 })
        );
        ui.end_frame();

        frame(&mut ui, 310.0, 95.0, MouseButtons::empty());
        assert_eq!(
            ui.drag_logic(A, &rect()),
            Some(DragPhase::Released { x: 310.0, y: 95.0 })
        );
        assert_eq!(ui.active_item(), None);
        ui.end_frame();
    }

    #[test]
    fn picker_clamps_to_rect() {
        let mut ui = InteractionEngine::new();
        let area = Rect::new(10.0, 10.0, 50.0, 50.0);
        frame(&mut ui, 20.0, 30.0, MouseButtons::LEFT);
        assert_eq!(ui.picker_logic(A, &area), Some((10.0, 20.0)));
        ui.end_frame();
        frame(&mut ui, 200.0, -5.0, MouseButtons::LEFT);
        assert_eq!(ui.picker_logic(A, &area), Some((50.0, 0.0)));
        ui.end_frame();
    }

    #[test]
    fn undeclared_active_widget_is_dropped() {
        let mut ui = InteractionEngine::new();
        frame(&mut ui, 5.0, 5.0, MouseButtons::LEFT);
        ui.button_logic(A, &rect());
        ui.end_frame();
        assert!(ui.is_active(A));

        frame(&mut ui, 5.0, 5.0, MouseButtons::LEFT);
        ui.end_frame();
        assert_eq!(ui.active_item(), None);
    }

    #[test]
    fn release_forgets_identity() {
        let mut ui = InteractionEngine::new();
        frame(&mut ui, 5.0, 5.0, MouseButtons::LEFT);
        ui.button_logic(A, &rect());
        ui.end_frame();

        frame(&mut ui, 5.0, 5.0, MouseButtons::LEFT);
        ui.release(A);
        assert_eq!(ui.active_item(), None);
        assert_eq!(ui.hot_item(), None);
        ui.end_frame();
    }

    #[test]
    fn set_active_survives_with_keep_alive() {
        let mut ui = InteractionEngine::new();
        frame(&mut ui, 0.0, 0.0, MouseButtons::empty());
        ui.set_active(B);
        ui.end_frame();
        frame(&mut ui, 0.0, 0.0, MouseButtons::empty());
        ui.keep_alive(B);
        // Focused widgets do not fire clicks.
        assert!(!ui.button_logic(B, &rect()));
        ui.end_frame();
        assert!(ui.is_active(B));
        ui.clear_active();
        assert_eq!(ui.active_item(), None);
        assert_eq!(ui.last_active_item(), Some(B));
        ui.clear_last_active();
        assert_eq!(ui.last_active_item(), None);
    }

    #[test]
    fn keyed_ids_are_stable_and_scoped() {
        let a = WidgetId::keyed(1, "10.0.0.1:8303");
        assert_eq!(a, WidgetId::keyed(1, "10.0.0.1:8303"));
        assert_ne!(a, WidgetId::keyed(2, "10.0.0.1:8303"));
        assert_ne!(WidgetId::slot(1, 2), WidgetId::slot(2, 1));
        assert_eq!(WidgetId::slot(1, 2).raw(), (1u64 << 32) | 2);
    }

    #[test]
    fn mouse_edges() {
        let mut ui = InteractionEngine::new();
        frame(&mut ui, 0.0, 0.0, MouseButtons::LEFT);
        assert!(ui.mouse_clicked(MouseButton::Left));
        assert!(ui.mouse_down(MouseButton::Left));
        ui.end_frame();
        frame(&mut ui, 0.0, 0.0, MouseButtons::LEFT);
        assert!(!ui.mouse_clicked(MouseButton::Left));
        ui.end_frame();
        frame(&mut ui, 0.0, 0.0, MouseButtons::empty());
        assert!(ui.mouse_released(MouseButton::Left));
        assert_eq!(ui.frame(), 2);
    }
}
