#![forbid(unsafe_code)]

//! Colors and metrics shared by the browser widgets.

use sbui_render::{Hsla, Rgba};

/// Palette and metrics for the browser menus.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    /// Base font size.
    pub font_size: f32,
    /// Height of one list row and of list headers.
    pub row_height: f32,
    /// Header band fill.
    pub header: Rgba,
    /// List body fill.
    pub list_background: Rgba,
    /// Selected row fill.
    pub row_selected: Rgba,
    /// Hovered row fill.
    pub row_hot: Rgba,
    /// Default text color.
    pub text: Rgba,
    /// Quick-search match color.
    pub highlight_text: Rgba,
    /// Friend list entry with at least one online match.
    pub friend_online: Rgba,
    /// Friend list entry with nobody online.
    pub friend_offline: Rgba,
    /// Scoreboard row of a friend.
    pub scoreboard_friend: Rgba,
    /// Selected toolbox tab.
    pub tab_active: Rgba,
    /// Unselected toolbox tab.
    pub tab_inactive: Rgba,
    /// Button fill before hot/active scaling.
    pub button: Rgba,
    /// Scrollbar rail.
    pub scroll_rail: Rgba,
    /// Scrollbar thumb before hot/active scaling.
    pub scroll_thumb: Rgba,
    /// Corner radius for panels and buttons.
    pub rounding: f32,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            font_size: 12.0,
            row_height: 17.0,
            header: Rgba::new(1.0, 1.0, 1.0, 0.25),
            list_background: Rgba::new(0.0, 0.0, 0.0, 0.15),
            row_selected: Rgba::new(1.0, 1.0, 1.0, 0.5),
            row_hot: Rgba::new(1.0, 1.0, 1.0, 0.25),
            text: Rgba::WHITE,
            highlight_text: Rgba::new(0.4, 0.4, 1.0, 1.0),
            friend_online: Rgba::new(0.0, 1.0, 0.0, 0.25),
            friend_offline: Rgba::new(1.0, 0.0, 0.0, 0.25),
            scoreboard_friend: Rgba::new(0.5, 1.0, 0.5, 0.15),
            tab_active: Rgba::new(0.0, 0.0, 0.0, 0.3),
            tab_inactive: Rgba::new(0.0, 0.0, 0.0, 0.15),
            button: Rgba::new(1.0, 1.0, 1.0, 0.5),
            scroll_rail: Rgba::new(0.0, 0.0, 0.0, 0.25),
            scroll_thumb: Rgba::new(1.0, 1.0, 1.0, 0.5),
            rounding: 5.0,
        }
    }
}

/// Alpha multiplier for a pressable widget: dimmer while held, brighter
/// while hovered.
#[inline]
pub fn interaction_scale(hot: bool, active: bool) -> f32 {
    if active {
        0.5
    } else if hot {
        1.5
    } else {
        1.0
    }
}

/// Apply [`interaction_scale`] to the alpha channel of `base`.
#[inline]
pub fn interactive(base: Rgba, hot: bool, active: bool) -> Rgba {
    base.with_alpha((base.a * interaction_scale(hot, active)).min(1.0))
}

/// Ping color: green at 0 ms fading to red at 300 ms and beyond.
pub fn ping_color(latency: i32) -> Rgba {
    let hue = (300 - latency.clamp(0, 300)) as f32 / 1000.0;
    Hsla::new(hue, 1.0, 0.5, 1.0).into()
}

/// Color for a game type name, white for unknown types.
pub fn gametype_color(game_type: &str) -> Rgba {
    match gametype_hue(game_type) {
        Some(hue) => Hsla::new(hue, 1.0, 0.75, 1.0).into(),
        None => Rgba::WHITE,
    }
}

fn gametype_hue(game_type: &str) -> Option<f32> {
    let lower = game_type.to_ascii_lowercase();
    let is_vanilla = |t: &str| matches!(t, "dm" | "tdm" | "ctf");

    if is_vanilla(&lower) {
        return Some(0.33);
    }
    if lower.contains("catch") {
        return Some(0.17);
    }
    let insta_base = lower
        .strip_prefix('i')
        .or_else(|| lower.strip_prefix('g'))
        .is_some_and(is_vanilla);
    if insta_base || lower.contains("insta") {
        return Some(0.0);
    }
    if lower.contains("fng") {
        return Some(0.83);
    }
    if lower.contains("ddracenet") || lower.contains("ddnet") {
        return Some(0.58);
    }
    if lower.contains("ddrace") || lower.contains("mkrace") {
        return Some(0.75);
    }
    if lower.contains("race") || lower.contains("fastcap") {
        return Some(0.46);
    }
    None
}
