#![forbid(unsafe_code)]

//! The toolbox beside the server list: filter, info, and friends pages.
//!
//! The toolbox is a tab bar over three pages. Tab and Shift+Tab cycle the
//! pages unless a text field owns the keyboard (see [`Toolbox::blocked`]).

use std::collections::BTreeSet;

use sbui_core::event::MouseButton;
use sbui_core::geometry::Rect;
use sbui_layout::{FlowGrid, split_even};
use sbui_render::{Corners, Icon, Rgba};

use crate::browser::ServerListState;
use crate::button::{checkbox, icon_button, menu_button, tab_button};
use crate::context::Ctx;
use crate::filters::ExclusionList;
use crate::friends::{FriendError, FriendList};
use crate::interaction::WidgetId;
use crate::label::{Align, highlighted_label, label};
use crate::listbox::{ListBox, ListBoxState};
use crate::navigator::{PageCycle, ToolboxPage};
use crate::server::{QuickSearch, ServerRecord, SortedServerSource};
use crate::settings::BrowserSettings;

const TAB_SCOPE: u32 = 0x5442;
const FILTER_SCOPE: u32 = 0x4649;
const TYPE_SCOPE: u32 = 0x5459;
const COUNTRY_SCOPE: u32 = 0x434f;
const INFO_SCOPE: u32 = 0x494e;
const SCOREBOARD_SCOPE: u32 = 0x5343;
const TOGGLE_SCOPE: u32 = 0x5447;
const FRIENDS_SCOPE: u32 = 0x4652;
const FRIEND_ROW_SCOPE: u32 = 0x4645;

/// Height of one line of controls.
const LINE: f32 = 20.0;

/// Grid shown under the filter check boxes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ExclusionTab {
    /// Country flags.
    #[default]
    Countries,
    /// Game types.
    Types,
}

/// Caller-owned toolbox state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ToolboxState {
    /// Which exclusion grid the filter page shows.
    pub exclusion_tab: ExclusionTab,
    /// Scoreboard list on the info page.
    pub scoreboard: ListBoxState,
    /// Friend list on the friends page.
    pub friends: ListBoxState,
}

/// State of the whole browser screen: server list and toolbox.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BrowserState {
    /// Server list.
    pub list: ServerListState,
    /// Toolbox.
    pub toolbox: ToolboxState,
}

/// Outcome of one toolbox frame.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ToolboxResponse {
    /// The visible page changed.
    pub page_changed: bool,
    /// A filter changed; the server list must be filtered again.
    pub refilter: bool,
    /// The friend roster changed; annotate and recount.
    pub friends_changed: bool,
    /// A roster edit was refused.
    pub friend_error: Option<FriendError>,
    /// The user toggled the favorite mark of the server at this address.
    pub toggle_favorite: Option<String>,
    /// Display position the friends page jumped the server list to.
    pub jumped_to: Option<usize>,
}

/// Toolbox configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Toolbox {
    blocked: bool,
}

impl Toolbox {
    /// Toolbox with page cycling enabled.
    pub const fn new() -> Self {
        Self { blocked: false }
    }

    /// Disable Tab page cycling while a text field owns the keyboard.
    #[must_use]
    pub const fn blocked(mut self, blocked: bool) -> Self {
        self.blocked = blocked;
        self
    }

    /// Draw the toolbox into `area` for one frame.
    pub fn show<S: SortedServerSource + ?Sized>(
        &self,
        cx: &mut Ctx<'_>,
        area: Rect,
        source: &S,
        settings: &mut BrowserSettings,
        friends: &mut FriendList,
        state: &mut BrowserState,
    ) -> ToolboxResponse {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "widget_render",
            widget = "Toolbox",
            page = ?settings.toolbox_page
        )
        .entered();

        let theme = cx.theme;
        let mut response = ToolboxResponse::default();
        let page_before = settings.toolbox_page;

        let (tabs, body) = area.hsplit_top(theme.row_height + 3.0);
        let tab_rects = split_even(tabs, ToolboxPage::ALL.len());
        for (slot, (page, rect)) in ToolboxPage::ALL.into_iter().zip(&tab_rects).enumerate() {
            let corners = match slot {
                0 => Corners::TL,
                2 => Corners::TR,
                _ => Corners::NONE,
            };
            let id = WidgetId::slot(TAB_SCOPE, slot as u32);
            let selected = settings.toolbox_page == page;
            if tab_button(cx, id, rect, page.caption(), selected, corners) {
                settings.toolbox_page = page;
            }
        }
        PageCycle.apply(&mut settings.toolbox_page, cx.input, self.blocked);
        if settings.toolbox_page != page_before {
            response.page_changed = true;
            sbui_core::debug!(message = "browser.page", page = ?settings.toolbox_page);
        }

        cx.painter
            .draw_rect(body, theme.list_background, Corners::BOTTOM, theme.rounding);
        let body = body.margin(5.0);
        match settings.toolbox_page {
            ToolboxPage::Filter => {
                filter_page(cx, body, source, settings, &mut state.toolbox, &mut response);
            }
            ToolboxPage::Info => {
                info_page(cx, body, source, settings, friends, &mut state.toolbox, &mut response);
            }
            ToolboxPage::Friends => {
                friends_page(cx, body, source, settings, friends, state, &mut response);
            }
        }
        response
    }
}

// --- Filter page --------------------------------------------------------------

fn filter_page<S: SortedServerSource + ?Sized>(
    cx: &mut Ctx<'_>,
    area: Rect,
    source: &S,
    settings: &mut BrowserSettings,
    toolbox: &mut ToolboxState,
    response: &mut ToolboxResponse,
) {
    let size = cx.theme.font_size;
    let (area, reset) = area.hsplit_bottom(LINE);
    let mut rest = area;

    let f = &mut settings.filter;
    let flags: [(&str, &mut bool); 10] = [
        ("Has people playing", &mut f.empty),
        ("Count players only", &mut f.spectators),
        ("Server not full", &mut f.full),
        ("Show friends only", &mut f.friends),
        ("No password", &mut f.password),
        ("Compatible version", &mut f.compat_version),
        ("Strict gametype filter", &mut f.gametype_strict),
        ("Player country", &mut f.country),
        ("Unfinished maps only", &mut f.unfinished_map),
        ("Filter connecting players", &mut f.connecting_players),
    ];
    for (slot, (caption, value)) in flags.into_iter().enumerate() {
        let (line, below) = rest.hsplit_top(LINE);
        rest = below;
        if checkbox(cx, WidgetId::slot(FILTER_SCOPE, slot as u32), &line, caption, *value) {
            *value = !*value;
            response.refilter = true;
            sbui_core::debug!(message = "settings.set", name = caption, value = *value);
        }
    }

    let (line, below) = rest.hsplit_top(LINE);
    rest = below;
    let ping = format!("Maximum ping: {}", settings.filter.ping);
    label(cx, &line, &ping, size, Align::Left, None);

    // Exclusion grids
    let (tabs, grid_area) = rest.hsplit_top(LINE);
    let (countries_tab, types_tab) = tabs.vsplit_mid();
    for (slot, (tab, rect, caption, corners)) in [
        (ExclusionTab::Countries, countries_tab, "Countries", Corners::TL),
        (ExclusionTab::Types, types_tab, "Types", Corners::TR),
    ]
    .into_iter()
    .enumerate()
    {
        let id = WidgetId::slot(FILTER_SCOPE, 0x100 + slot as u32);
        if tab_button(cx, id, &rect, caption, toolbox.exclusion_tab == tab, corners) {
            toolbox.exclusion_tab = tab;
        }
    }

    let grid_area = grid_area.margin(2.0);
    let changed = match toolbox.exclusion_tab {
        ExclusionTab::Types => {
            let types = collect_types(source, &settings.filter.exclude_types);
            let grid = FlowGrid::new(3, grid_area.width / 3.0 - 4.0, LINE).line_spacing(2.0);
            exclusion_grid(
                cx,
                &grid_area,
                grid,
                TYPE_SCOPE,
                &types,
                &mut settings.filter.exclude_types,
                |cx, cell, index| {
                    label(cx, cell, &types[index], size, Align::Center, None);
                },
            )
        }
        ExclusionTab::Countries => {
            let codes = collect_countries(source, &settings.filter.exclude_countries);
            let names: Vec<String> = codes.iter().map(i16::to_string).collect();
            let per_line = if codes.len() > 8 { 5 } else { 4 };
            let grid = FlowGrid::new(per_line, 40.0, LINE).line_spacing(2.0);
            exclusion_grid(
                cx,
                &grid_area,
                grid,
                COUNTRY_SCOPE,
                &names,
                &mut settings.filter.exclude_countries,
                |cx, cell, index| {
                    cx.painter.draw_icon(cell.margin(1.0), Icon::Flag(codes[index]));
                },
            )
        }
    };
    response.refilter |= changed;

    if menu_button(cx, WidgetId::slot(FILTER_SCOPE, 0x200), &reset.margin(1.0), "Reset filter") {
        settings.reset_filters();
        response.refilter = true;
        sbui_core::debug!(message = "settings.reset_filters");
    }
}

/// Game types on the list, plus excluded ones so they can be shown again.
fn collect_types<S: SortedServerSource + ?Sized>(source: &S, excluded: &ExclusionList) -> Vec<String> {
    let mut types: BTreeSet<&str> = (0..source.len())
        .filter_map(|i| source.get(i))
        .map(|s| s.game_type.as_str())
        .filter(|t| !t.is_empty())
        .collect();
    let hidden: Vec<&str> = excluded
        .iter()
        .filter(|name| !types.iter().any(|t| t.eq_ignore_ascii_case(name)))
        .collect();
    types.extend(hidden);
    types.into_iter().map(str::to_owned).collect()
}

/// Client countries on the list, plus excluded ones.
fn collect_countries<S: SortedServerSource + ?Sized>(source: &S, excluded: &ExclusionList) -> Vec<i16> {
    let mut codes: BTreeSet<i16> = (0..source.len())
        .filter_map(|i| source.get(i))
        .flat_map(|s| s.clients.iter().map(|c| c.country))
        .filter(|&c| c >= 0)
        .collect();
    codes.extend(excluded.iter().filter_map(|name| name.parse::<i16>().ok()));
    codes.into_iter().collect()
}

/// Grid of toggles over `names`.
///
/// Left click toggles one entry, right click excludes everything else, and
/// middle click clears the list. Returns whether `excluded` changed.
fn exclusion_grid(
    cx: &mut Ctx<'_>,
    area: &Rect,
    grid: FlowGrid,
    scope: u32,
    names: &[String],
    excluded: &mut ExclusionList,
    mut draw_cell: impl FnMut(&mut Ctx<'_>, &Rect, usize),
) -> bool {
    let mut changed = false;
    cx.painter.push_clip(*area);
    for (index, name) in names.iter().enumerate() {
        let cell = grid.cell(*area, index);
        let id = WidgetId::keyed(scope, name.as_str());
        match cx.ui.button_logic_multi(id, &cell) {
            Some(MouseButton::Left) => {
                excluded.toggle(name);
                changed = true;
            }
            Some(MouseButton::Right) => {
                excluded.exclusive(names.iter().map(String::as_str), name);
                changed = true;
            }
            Some(MouseButton::Middle) => {
                excluded.clear();
                changed = true;
            }
            None => {}
        }
        if cx.ui.is_hot(id) {
            cx.painter
                .draw_rect(cell, cx.theme.row_hot, Corners::ALL, 2.0);
        }
        draw_cell(cx, &cell, index);
        if excluded.contains(name) {
            cx.painter
                .draw_rect(cell, Rgba::new(0.0, 0.0, 0.0, 0.6), Corners::ALL, 2.0);
        }
    }
    cx.painter.pop_clip();
    if changed {
        sbui_core::debug!(message = "filter.exclusions", scope, excluded = %excluded);
    }
    changed
}

// --- Info page ----------------------------------------------------------------

fn info_page<S: SortedServerSource + ?Sized>(
    cx: &mut Ctx<'_>,
    area: Rect,
    source: &S,
    settings: &BrowserSettings,
    friends: &mut FriendList,
    toolbox: &mut ToolboxState,
    response: &mut ToolboxResponse,
) {
    let size = cx.theme.font_size;
    let Some(server) = source
        .position_of(&settings.server_address)
        .and_then(|i| source.get(i))
    else {
        label(cx, &area.hsplit_top(LINE).0, "No server selected", size, Align::Center, None);
        return;
    };

    let (head, board) = area.hsplit_top(LINE * 3.0);
    let (name_line, head) = head.hsplit_top(LINE);
    let (name_rect, favorite) = name_line.vsplit_right(LINE);
    label(cx, &name_rect, &server.name, size + 2.0, Align::Left, None);
    if icon_button(cx, WidgetId::slot(INFO_SCOPE, 0), &favorite.margin(2.0), Icon::Favorite) {
        response.toggle_favorite = Some(server.address.clone());
        sbui_core::debug!(message = "browser.favorite", address = %server.address);
    }
    let (address_line, map_line) = head.hsplit_mid();
    let address = format!("{}  {}", server.address, server.version);
    label(cx, &address_line, &address, size, Align::Left, None);
    let map = format!("{} on {}", server.game_type, server.map);
    label(cx, &map_line, &map, size, Align::Left, None);

    scoreboard(cx, board, server, settings, friends, toolbox, response);
}

fn scoreboard(
    cx: &mut Ctx<'_>,
    area: Rect,
    server: &ServerRecord,
    settings: &BrowserSettings,
    friends: &mut FriendList,
    toolbox: &mut ToolboxState,
    response: &mut ToolboxResponse,
) {
    let theme = cx.theme;
    let size = theme.font_size;
    let race = settings.race_scoreboard && server.has_race_times();
    let needle = server
        .quick_search
        .contains(QuickSearch::PLAYER)
        .then_some(settings.filter_string.as_str());

    let list = ListBox::new(SCOREBOARD_SCOPE).keyboard(false);
    let mut pass = list.begin(cx, area, server.clients.len(), &mut toolbox.scoreboard);
    let viewport = pass.list().viewport();
    for index in pass.visible_range() {
        let Some(client) = server.clients.get(index) else {
            continue;
        };
        // The toggle claims the pointer before its row does.
        let toggle_id = WidgetId::keyed(TOGGLE_SCOPE, &(client.name.as_str(), client.clan.as_str()));
        let toggled = pass.row_rect(index).is_some_and(|row| {
            let icon = row.vsplit_right(row.height).1.intersection(&viewport);
            cx.ui.button_logic(toggle_id, &icon)
        });

        let item = pass.next_item(cx, index, list.row_id(index));
        if !item.visible {
            continue;
        }
        if client.friend_state.is_friend() {
            cx.painter
                .draw_rect(item.rect, theme.scoreboard_friend, Corners::ALL, theme.rounding);
        }
        let (score, rest) = item.rect.vsplit_left(45.0);
        let (rest, icon) = rest.vsplit_right(item.rect.height);
        let (name, clan) = rest.vsplit_right(rest.width * 0.4);
        label(cx, &score.vmargin(2.0), &client.score_text(race), size, Align::Right, None);
        let name = name.vmargin(5.0);
        match needle {
            Some(needle) => {
                highlighted_label(cx, &name, &client.name, needle, size, None, theme.highlight_text);
            }
            None => label(cx, &name, &client.name, size, Align::Left, None),
        }
        label(cx, &clan, &client.clan, size, Align::Left, None);
        if client.friend_state.is_friend() || cx.ui.is_hot(toggle_id) {
            cx.painter.draw_icon(icon.margin(1.0), Icon::Friend);
        }

        if toggled {
            match friends.toggle(client) {
                Ok(_) => response.friends_changed = true,
                Err(err) => {
                    sbui_core::warn!(message = "friends.toggle_failed", error = %err);
                    response.friend_error = Some(err);
                }
            }
        }
    }
    pass.end(cx);
}

// --- Friends page -------------------------------------------------------------

fn friends_page<S: SortedServerSource + ?Sized>(
    cx: &mut Ctx<'_>,
    area: Rect,
    source: &S,
    settings: &mut BrowserSettings,
    friends: &mut FriendList,
    state: &mut BrowserState,
    response: &mut ToolboxResponse,
) {
    let theme = cx.theme;
    let size = theme.font_size;
    let (list_area, remove) = area.hsplit_bottom(LINE);

    let list = ListBox::new(FRIEND_ROW_SCOPE).keyboard(false);
    let mut pass = list.begin(cx, list_area, friends.len(), &mut state.toolbox.friends);
    for index in pass.visible_range() {
        let Some(entry) = friends.get(index) else {
            continue;
        };
        let id = WidgetId::keyed(FRIEND_ROW_SCOPE, &(entry.name(), entry.clan()));
        let item = pass.next_item(cx, index, id);
        if !item.visible {
            continue;
        }
        let fill = if entry.num_found() > 0 {
            theme.friend_online
        } else {
            theme.friend_offline
        };
        cx.painter
            .draw_rect(item.rect.margin(1.0), fill, Corners::ALL, theme.rounding);
        let (text, count) = item.rect.vmargin(5.0).vsplit_right(30.0);
        let (name, clan) = text.vsplit_mid();
        label(cx, &name, entry.name(), size, Align::Left, None);
        label(cx, &clan, entry.clan(), size, Align::Left, Some(theme.text.with_alpha(0.6)));
        label(cx, &count, &entry.num_found().to_string(), size, Align::Right, None);
    }
    let listed = pass.end(cx);

    if listed.activated
        && let Some(entry) = listed.selected
    {
        let after = source.position_of(&settings.server_address);
        if let Some(pos) = friends.find_next_server_with(entry, source, after)
            && let Some(server) = source.get(pos)
        {
            settings.server_address = server.address.clone();
            state.list.list.view.scroll_to(pos);
            response.jumped_to = Some(pos);
            sbui_core::debug!(message = "friends.jump", entry, position = pos);
        }
    }

    if menu_button(cx, WidgetId::slot(FRIENDS_SCOPE, 0), &remove.margin(1.0), "Remove friend")
        && let Some(selected) = state.toolbox.friends.selected()
        && friends.remove_at(selected).is_some()
    {
        response.friends_changed = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interaction::InteractionEngine;
    use crate::server::{ClientInfo, ServerSnapshot};
    use crate::theme::Theme;
    use sbui_core::event::{InputFrame, KeyCode, KeyEvent, Modifiers, MouseButtons};
    use sbui_render::Frame;
    use sbui_text::MonospaceMeasure;

    const AREA: Rect = Rect::new(0.0, 0.0, 300.0, 400.0);

    fn source() -> ServerSnapshot {
        ServerSnapshot::new(vec![
            ServerRecord::new("a:1", "alpha")
                .with_map("dm1", "DM")
                .with_clients(vec![ClientInfo::new("Bob", "").with_country(276)]),
            ServerRecord::new("b:1", "beta")
                .with_map("ctf5", "CTF")
                .with_clients(vec![
                    ClientInfo::new("Alice", "Team").with_country(40),
                    ClientInfo::new("Carol", ""),
                ]),
            ServerRecord::new("c:1", "gamma").with_map("race", "Race"),
        ])
    }

    struct Harness {
        ui: InteractionEngine,
        theme: Theme,
        measure: MonospaceMeasure,
        settings: BrowserSettings,
        friends: FriendList,
        state: BrowserState,
        source: ServerSnapshot,
    }

    impl Harness {
        fn new() -> Self {
            Self {
                ui: InteractionEngine::new(),
                theme: Theme::default(),
                measure: MonospaceMeasure::default(),
                settings: BrowserSettings::default(),
                friends: FriendList::new(),
                state: BrowserState::default(),
                source: source(),
            }
        }

        fn frame(&mut self, input: InputFrame) -> (ToolboxResponse, Frame) {
            let mut frame = Frame::new(Rect::from_size(800.0, 600.0));
            self.ui.begin_frame(&input);
            let response = {
                let mut cx = Ctx::new(&mut self.ui, &mut frame, &self.measure, &self.theme, &input);
                Toolbox::new().show(
                    &mut cx,
                    AREA,
                    &self.source,
                    &mut self.settings,
                    &mut self.friends,
                    &mut self.state,
                )
            };
            self.ui.end_frame();
            (response, frame)
        }

        fn click_with(&mut self, x: f32, y: f32, buttons: MouseButtons) -> ToolboxResponse {
            self.frame(InputFrame::at(x, y).with_buttons(buttons));
            self.frame(InputFrame::at(x, y)).0
        }

        fn click(&mut self, x: f32, y: f32) -> ToolboxResponse {
            self.click_with(x, y, MouseButtons::LEFT)
        }
    }

    #[test]
    fn tabs_and_tab_key_switch_pages() {
        let mut h = Harness::new();
        let r = h.click(150.0, 10.0);
        assert!(r.page_changed);
        assert_eq!(h.settings.toolbox_page, ToolboxPage::Info);

        h.frame(InputFrame::default().with_key(KeyEvent::new(KeyCode::Tab)));
        assert_eq!(h.settings.toolbox_page, ToolboxPage::Friends);
        h.frame(InputFrame::default().with_key(KeyEvent::new(KeyCode::Tab)));
        assert_eq!(h.settings.toolbox_page, ToolboxPage::Filter);
        h.frame(
            InputFrame::default()
                .with_key(KeyEvent::new(KeyCode::Tab).with_modifiers(Modifiers::SHIFT)),
        );
        assert_eq!(h.settings.toolbox_page, ToolboxPage::Friends);
    }

    #[test]
    fn checkbox_flips_filter_flag() {
        let mut h = Harness::new();
        assert!(!h.settings.filter.empty);
        let r = h.click(15.0, 35.0);
        assert!(r.refilter);
        assert!(h.settings.filter.empty);
    }

    #[test]
    fn type_grid_buttons() {
        let mut h = Harness::new();
        h.state.toolbox.exclusion_tab = ExclusionTab::Types;
        // Types are CTF, DM, Race; the grid starts at y 267 with three
        // slots across x 7..293.
        let dm = (150.0, 277.0);

        let r = h.click(dm.0, dm.1);
        assert!(r.refilter);
        assert_eq!(h.settings.filter.exclude_types.to_string(), "DM");

        h.click_with(dm.0, dm.1, MouseButtons::RIGHT);
        let mut excluded: Vec<&str> = h.settings.filter.exclude_types.iter().collect();
        excluded.sort_unstable();
        assert_eq!(excluded, vec!["CTF", "Race"]);

        h.click_with(dm.0, dm.1, MouseButtons::MIDDLE);
        assert!(h.settings.filter.exclude_types.is_empty());
    }

    #[test]
    fn excluded_types_stay_visible() {
        let mut excluded = ExclusionList::new();
        excluded.add("Hidden");
        let types = collect_types(&source(), &excluded);
        assert_eq!(types, vec!["CTF", "DM", "Hidden", "Race"]);

        let excluded = ExclusionList::parse("dm");
        assert_eq!(collect_types(&source(), &excluded), vec!["CTF", "DM", "Race"]);

        let mut excluded = ExclusionList::new();
        excluded.add("999");
        assert_eq!(collect_countries(&source(), &excluded), vec![40, 276, 999]);
    }

    #[test]
    fn reset_button_restores_defaults() {
        let mut h = Harness::new();
        h.settings.filter.full = true;
        h.settings.filter.ping = 50;
        let r = h.click(150.0, 385.0);
        assert!(r.refilter);
        assert!(!h.settings.filter.full);
        assert_eq!(h.settings.filter.ping, 999);
    }

    #[test]
    fn info_page_toggles_friend_and_favorite() {
        let mut h = Harness::new();
        h.settings.toolbox_page = ToolboxPage::Info;
        h.settings.server_address = "b:1".into();

        let (_, frame) = h.frame(InputFrame::default());
        assert!(frame.texts().any(|t| t == "beta"));
        assert!(frame.texts().any(|t| t == "Alice"));

        let r = h.click(285.0, 35.0);
        assert_eq!(r.toggle_favorite.as_deref(), Some("b:1"));

        // First scoreboard row spans y 85..102; its toggle is the square at
        // the right edge of the row viewport.
        let r = h.click(270.0, 93.0);
        assert!(r.friends_changed);
        assert!(h.friends.contains("Alice", "Team"));
        assert_eq!(h.state.toolbox.scoreboard.selected(), None);

        let r = h.click(270.0, 93.0);
        assert!(r.friends_changed);
        assert!(!h.friends.contains("Alice", "Team"));
    }

    #[test]
    fn info_page_without_selection() {
        let mut h = Harness::new();
        h.settings.toolbox_page = ToolboxPage::Info;
        let (_, frame) = h.frame(InputFrame::default());
        assert!(frame.texts().any(|t| t == "No server selected"));
    }

    #[test]
    fn activating_friend_jumps_to_their_server() {
        let mut h = Harness::new();
        h.settings.toolbox_page = ToolboxPage::Friends;
        h.friends.add("Alice", "").ok();
        h.friends.refresh(&mut h.source);
        assert_eq!(h.friends.get(0).map(|e| e.num_found()), Some(1));

        let row = (50.0, 33.0);
        h.click(row.0, row.1);
        h.frame(InputFrame::at(row.0, row.1).with_buttons(MouseButtons::LEFT));
        let (r, _) = h.frame(InputFrame::at(row.0, row.1).with_double_click());

        assert_eq!(r.jumped_to, Some(1));
        assert_eq!(h.settings.server_address, "b:1");
        assert_eq!(h.state.list.list.view.pending_scroll_to, Some(1));
    }

    #[test]
    fn remove_friend_button() {
        let mut h = Harness::new();
        h.settings.toolbox_page = ToolboxPage::Friends;
        h.friends.add("Alice", "").ok();
        h.friends.add("Bob", "").ok();
        h.state.toolbox.friends = ListBoxState::with_selected(Some(0));

        let r = h.click(150.0, 385.0);
        assert!(r.friends_changed);
        assert_eq!(h.friends.len(), 1);
    }
}
