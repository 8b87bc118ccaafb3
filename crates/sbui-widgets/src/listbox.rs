#![forbid(unsafe_code)]

//! Scrollable, selectable list box.
//!
//! The list box never stores rows. Each frame the caller opens a pass with
//! [`ListBox::begin`], asks it for every logical row it wants to show with
//! [`ListBoxPass::next_item`], and closes it with [`ListBoxPass::end`]:
//!
//! ```
//! use sbui_core::event::InputFrame;
//! use sbui_core::geometry::Rect;
//! use sbui_render::Frame;
//! use sbui_text::MonospaceMeasure;
//! use sbui_widgets::context::Ctx;
//! use sbui_widgets::interaction::InteractionEngine;
//! use sbui_widgets::listbox::{ListBox, ListBoxState};
//! use sbui_widgets::theme::Theme;
//!
//! let names: Vec<String> = (0..1000).map(|i| format!("row {i}")).collect();
//! let mut ui = InteractionEngine::new();
//! let mut frame = Frame::new(Rect::from_size(400.0, 300.0));
//! let (theme, measure, input) = (Theme::default(), MonospaceMeasure::default(), InputFrame::default());
//! let mut state = ListBoxState::default();
//!
//! ui.begin_frame(&input);
//! let mut cx = Ctx::new(&mut ui, &mut frame, &measure, &theme, &input);
//! let list = ListBox::new(1).row_height(20.0);
//! let mut pass = list.begin(&mut cx, Rect::new(0.0, 0.0, 300.0, 200.0), names.len(), &mut state);
//! for index in pass.visible_range() {
//!     let item = pass.next_item(&mut cx, index, list.row_id(index));
//!     if item.visible {
//!         // draw names[index] into item.rect
//!     }
//! }
//! let response = pass.end(&mut cx);
//! assert!(response.rows_rendered <= 11);
//! drop(cx);
//! ui.end_frame();
//! ```

use std::ops::Range;

use sbui_core::event::KeyCode;
use sbui_core::geometry::Rect;
use sbui_render::Corners;

use crate::context::Ctx;
use crate::interaction::WidgetId;
use crate::label::{Align, label};
use crate::navigator::KeyboardNavigator;
use crate::scrollbar::{Scrollbar, ScrollbarState};
use crate::virtualized::{ListViewState, ScrollableList};

/// Width of the scrollbar strip on the right of a list.
pub const SCROLLBAR_WIDTH: f32 = 15.0;

/// Slot reserved for the scrollbar within a list's id scope.
const SCROLLBAR_SLOT: u32 = u32::MAX;

/// Caller-owned state of one list box.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ListBoxState {
    /// Scroll position and selection.
    pub view: ListViewState,
    /// Scrollbar grab state.
    pub scrollbar: ScrollbarState,
    last_click: Option<usize>,
    held_row: Option<(usize, WidgetId)>,
}

impl ListBoxState {
    /// State with `index` selected.
    pub fn with_selected(index: Option<usize>) -> Self {
        Self {
            view: ListViewState::new().with_selected(index),
            ..Self::default()
        }
    }

    /// Currently selected row.
    #[inline]
    pub fn selected(&self) -> Option<usize> {
        self.view.selected
    }
}

/// List box configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ListBox<'t> {
    scope: u32,
    row_height: Option<f32>,
    keyboard: bool,
    title: Option<&'t str>,
}

/// A row handed out by [`ListBoxPass::next_item`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ListItem {
    /// Logical index.
    pub index: usize,
    /// Row rectangle in screen space.
    pub rect: Rect,
    /// Whether the row intersects the viewport. Invisible rows must not be
    /// drawn.
    pub visible: bool,
    /// Whether this is the selected row.
    pub selected: bool,
    /// Whether the pointer is over the row.
    pub hot: bool,
}

/// Outcome of a list box frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListBoxResponse {
    /// Selected row after this frame.
    pub selected: Option<usize>,
    /// Selection changed this frame.
    pub changed: bool,
    /// The selection was activated by double click or Enter.
    pub activated: bool,
    /// Rows that went through hit testing this frame.
    pub rows_rendered: usize,
}

impl<'t> ListBox<'t> {
    /// List box whose widget ids live in `scope`.
    pub const fn new(scope: u32) -> Self {
        Self {
            scope,
            row_height: None,
            keyboard: true,
            title: None,
        }
    }

    /// Row height; defaults to the theme's.
    #[must_use]
    pub const fn row_height(mut self, height: f32) -> Self {
        self.row_height = Some(height);
        self
    }

    /// Whether arrow/page keys move the selection.
    #[must_use]
    pub const fn keyboard(mut self, enabled: bool) -> Self {
        self.keyboard = enabled;
        self
    }

    /// Title drawn in a header band above the rows.
    #[must_use]
    pub const fn title(mut self, title: &'t str) -> Self {
        self.title = Some(title);
        self
    }

    /// Default identity of row `index`.
    #[inline]
    pub const fn row_id(&self, index: usize) -> WidgetId {
        WidgetId::slot(self.scope, index as u32)
    }

    /// Identity of the list's scrollbar.
    #[inline]
    pub const fn scrollbar_id(&self) -> WidgetId {
        WidgetId::slot(self.scope, SCROLLBAR_SLOT)
    }

    /// Open a frame pass over `count` rows inside `area`.
    ///
    /// Draws the background, runs the scrollbar, wheel, and keyboard, and
    /// clips drawing to the row viewport until [`ListBoxPass::end`].
    pub fn begin<'s>(
        &self,
        cx: &mut Ctx<'_>,
        area: Rect,
        count: usize,
        state: &'s mut ListBoxState,
    ) -> ListBoxPass<'s> {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "widget_render",
            widget = "ListBox",
            scope = self.scope,
            rows = count
        )
        .entered();

        let theme = cx.theme;
        let row_height = self.row_height.unwrap_or(theme.row_height);
        let mut area = area;

        if let Some(title) = self.title {
            let (header, rest) = area.hsplit_top(theme.row_height);
            cx.painter
                .draw_rect(header, theme.header, Corners::TOP, theme.rounding);
            label(cx, &header, title, theme.font_size + 2.0, Align::Center, None);
            area = rest;
        }
        cx.painter.draw_rect(
            area,
            theme.list_background,
            if self.title.is_some() {
                Corners::BOTTOM
            } else {
                Corners::ALL
            },
            theme.rounding,
        );

        let (view, track) = area.vsplit_right(SCROLLBAR_WIDTH);
        let list = ScrollableList::new(count, row_height, view);
        let selected_before = state.view.selected;
        list.normalize(&mut state.view);

        let bar = Scrollbar::new(self.scrollbar_id());
        let value = bar.render(
            cx.ui,
            cx.painter,
            theme,
            &track.hmargin(5.0),
            state.view.scroll,
            &mut state.scrollbar,
        );
        if list.is_scrollable() {
            state.view.scroll = value;
        }

        if cx.input.wheel != 0 && cx.ui.mouse_inside(&view) {
            list.apply_wheel(&mut state.view, cx.input.wheel);
        }

        let mut activated = false;
        let keyboard = self.keyboard && cx.ui.active_item().is_none();
        if keyboard {
            KeyboardNavigator::new().navigate(&list, &mut state.view, cx.input);
            activated = state.view.selected.is_some()
                && (cx.input.pressed(KeyCode::Enter) || cx.input.pressed(KeyCode::KeypadEnter));
        }

        cx.painter.push_clip(view);

        ListBoxPass {
            list,
            state,
            selected_before,
            activated,
            rows_rendered: 0,
        }
    }
}

/// One frame of a list box. Created by [`ListBox::begin`].
#[derive(Debug)]
pub struct ListBoxPass<'s> {
    list: ScrollableList,
    state: &'s mut ListBoxState,
    selected_before: Option<usize>,
    activated: bool,
    rows_rendered: usize,
}

impl ListBoxPass<'_> {
    /// Geometry of this frame's list.
    #[inline]
    pub fn list(&self) -> &ScrollableList {
        &self.list
    }

    /// Rows worth asking for; everything outside is invisible.
    pub fn visible_range(&self) -> Range<usize> {
        self.list.visible_range(self.state.view.scroll)
    }

    /// Selection as of now.
    #[inline]
    pub fn selected(&self) -> Option<usize> {
        self.state.view.selected
    }

    /// Rectangle of row `index` if it is visible this frame.
    ///
    /// Lets a row's inner widgets run their logic before
    /// [`next_item`](Self::next_item) claims the row.
    pub fn row_rect(&self, index: usize) -> Option<Rect> {
        let scroll = self.state.view.scroll;
        self.list
            .is_row_visible(index, scroll)
            .then(|| self.list.row_rect(index, scroll))
    }

    /// Change the selection from the caller, e.g. to follow an address.
    pub fn select(&mut self, index: Option<usize>) {
        self.state.view.selected = index.filter(|&i| i < self.list.item_count());
    }

    /// Declare row `index` with identity `id`.
    ///
    /// Visible rows are hit tested, drawn with their selection or hover
    /// background, and may become selected or activated. Invisible rows do
    /// no work and give up any interaction state they held.
    pub fn next_item(&mut self, cx: &mut Ctx<'_>, index: usize, id: WidgetId) -> ListItem {
        let scroll = self.state.view.scroll;
        let rect = self.list.row_rect(index, scroll);
        let selected = self.state.view.selected == Some(index);

        if !self.list.is_row_visible(index, scroll) {
            if cx.ui.is_active(id) || cx.ui.is_hot(id) {
                cx.ui.release(id);
            }
            return ListItem {
                index,
                rect,
                visible: false,
                selected,
                hot: false,
            };
        }

        self.rows_rendered += 1;
        let hit = rect.intersection(&self.list.viewport());
        let clicked = cx.ui.button_logic(id, &hit);
        if cx.ui.is_active(id) {
            self.state.held_row = Some((index, id));
        }
        let mut selected = selected;
        if clicked {
            if self.state.view.selected != Some(index) {
                sbui_core::debug!(message = "list.selection", to = index, source = "pointer");
            }
            if cx.input.double_click && self.state.last_click == Some(index) {
                self.activated = true;
            }
            self.state.last_click = Some(index);
            self.state.view.selected = Some(index);
            selected = true;
        }

        let hot = !selected && cx.ui.mouse_inside(&hit);
        let theme = cx.theme;
        let fill = if selected {
            Some(theme.row_selected)
        } else if hot {
            Some(theme.row_hot)
        } else {
            None
        };
        if let Some(fill) = fill {
            cx.painter
                .draw_rect(rect.margin(0.5), fill, Corners::ALL, theme.rounding);
        }

        ListItem {
            index,
            rect,
            visible: true,
            selected,
            hot,
        }
    }

    /// Close the pass: restore clipping and report the outcome.
    pub fn end(self, cx: &mut Ctx<'_>) -> ListBoxResponse {
        cx.painter.pop_clip();

        if let Some((index, id)) = self.state.held_row {
            if !cx.ui.is_active(id) {
                self.state.held_row = None;
            } else if !self.list.is_row_visible(index, self.state.view.scroll) {
                cx.ui.release(id);
                self.state.held_row = None;
            }
        }

        let selected = self.state.view.selected;
        ListBoxResponse {
            selected,
            changed: selected != self.selected_before,
            activated: self.activated && selected.is_some(),
            rows_rendered: self.rows_rendered,
        }
    }
}
