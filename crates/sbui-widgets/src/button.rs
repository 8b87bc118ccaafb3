#![forbid(unsafe_code)]

//! Buttons: menu button, checkbox, tab, and sortable grid header.

use sbui_core::geometry::Rect;
use sbui_render::{Corners, Rgba};

use crate::context::Ctx;
use crate::interaction::WidgetId;
use crate::label::{Align, label};
use crate::sort::HeaderCheck;
use crate::theme;

/// Rounded button with a centered caption. Returns `true` when clicked.
pub fn menu_button(cx: &mut Ctx<'_>, id: WidgetId, rect: &Rect, caption: &str) -> bool {
    let clicked = cx.ui.button_logic(id, rect);
    let color = theme::interactive(cx.theme.button, cx.ui.is_hot(id), cx.ui.is_active(id));
    cx.painter
        .draw_rect(*rect, color, Corners::ALL, cx.theme.rounding);
    let size = cx.theme.font_size;
    label(cx, &rect.vmargin(2.0), caption, size, Align::Center, None);
    clicked
}

/// Check box with a caption to its right. Returns `true` when clicked;
/// the caller flips the value.
pub fn checkbox(cx: &mut Ctx<'_>, id: WidgetId, rect: &Rect, caption: &str, checked: bool) -> bool {
    let clicked = cx.ui.button_logic(id, rect);
    let (bx, text) = rect.vsplit_left(rect.height);
    let bx = bx.margin(2.0);
    let color = theme::interactive(
        Rgba::new(1.0, 1.0, 1.0, 0.25),
        cx.ui.is_hot(id),
        cx.ui.is_active(id),
    );
    cx.painter
        .draw_rect(bx, color, Corners::ALL, 3.0);
    let size = cx.theme.font_size;
    if checked {
        label(cx, &bx, "X", size, Align::Center, None);
    }
    let (_, text) = text.vsplit_left(5.0);
    label(cx, &text, caption, size, Align::Left, None);
    clicked
}

/// Tab button. `selected` draws it in the active tab color.
pub fn tab_button(
    cx: &mut Ctx<'_>,
    id: WidgetId,
    rect: &Rect,
    caption: &str,
    selected: bool,
    corners: Corners,
) -> bool {
    let clicked = cx.ui.button_logic(id, rect);
    let color = if selected {
        cx.theme.tab_active
    } else {
        theme::interactive(cx.theme.tab_inactive, cx.ui.is_hot(id), cx.ui.is_active(id))
    };
    cx.painter.draw_rect(*rect, color, corners, cx.theme.rounding);
    let size = cx.theme.font_size;
    label(cx, rect, caption, size, Align::Center, None);
    clicked
}

/// Column header; checked headers are highlighted. Returns `true` when
/// clicked.
pub fn grid_header(cx: &mut Ctx<'_>, id: WidgetId, rect: &Rect, caption: &str, check: HeaderCheck) -> bool {
    let clicked = cx.ui.button_logic(id, rect);
    let fill = match check {
        HeaderCheck::Active => Some(Rgba::new(1.0, 1.0, 1.0, 0.5)),
        HeaderCheck::Combined => Some(Rgba::new(1.0, 0.98, 0.5, 0.55)),
        HeaderCheck::Off if cx.ui.is_hot(id) => Some(Rgba::new(1.0, 1.0, 1.0, 0.25)),
        HeaderCheck::Off => None,
    };
    if let Some(fill) = fill {
        cx.painter.draw_rect(*rect, fill, Corners::ALL, cx.theme.rounding);
    }
    let size = cx.theme.font_size;
    label(cx, &rect.vmargin(5.0), caption, size, Align::Left, None);
    clicked
}

/// Icon that reacts to clicks.
pub fn icon_button(cx: &mut Ctx<'_>, id: WidgetId, rect: &Rect, icon: sbui_render::Icon) -> bool {
    let clicked = cx.ui.button_logic(id, rect);
    cx.painter.draw_icon(*rect, icon);
    clicked
}
