#![forbid(unsafe_code)]

//! The server list panel.
//!
//! Composes the column layout, sortable headers, the virtualized list box,
//! and a status bar over a [`SortedServerSource`]. The selection is tracked
//! by server address in [`BrowserSettings::server_address`], so it follows a
//! server when the list is re-sorted underneath it.

use std::fmt;

use sbui_core::event::{KeyCode, Modifiers};
use sbui_core::geometry::Rect;
use sbui_layout::{Anchor, Column, ColumnLayout};
use sbui_render::{Corners, Icon};

use crate::button::{grid_header, menu_button};
use crate::context::Ctx;
use crate::interaction::WidgetId;
use crate::label::{Align, highlighted_label, label};
use crate::listbox::{ListBox, ListBoxState, SCROLLBAR_WIDTH};
use crate::server::{QuickSearch, ServerRecord, SortedServerSource};
use crate::settings::BrowserSettings;
use crate::sort::SortKey;
use crate::theme;

const ROW_SCOPE: u32 = 0x5256;
const HEADER_SCOPE: u32 = 0x5248;
const STATUS_SCOPE: u32 = 0x5253;

/// Height of the status bar under the list.
pub const STATUS_HEIGHT: f32 = 20.0;

/// A column of the server list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BrowserColumn {
    /// Blank margin.
    Spacer,
    /// Password lock.
    Lock,
    /// Favorite star.
    Favorite,
    /// Official server mark.
    Official,
    /// Server name.
    Name,
    /// Game type.
    GameType,
    /// Map name.
    Map,
    /// Player count.
    Players,
    /// Latency.
    Ping,
}

impl BrowserColumn {
    /// The sort key behind this column's header, if it sorts.
    pub const fn sort_key(self) -> Option<SortKey> {
        match self {
            Self::Name => Some(SortKey::Name),
            Self::GameType => Some(SortKey::GameType),
            Self::Map => Some(SortKey::Map),
            Self::Players => Some(SortKey::NumPlayers),
            Self::Ping => Some(SortKey::Ping),
            _ => None,
        }
    }
}

/// Column declarations for a header `width` units wide.
///
/// The map column grows by an eighth of any width beyond 480.
pub fn browser_columns(width: f32) -> Vec<Column<BrowserColumn>> {
    use BrowserColumn::*;
    let map_width = 120.0 + ((width - 480.0) / 8.0).max(0.0);
    vec![
        Column::new(Spacer, "", Anchor::Left, 2.0),
        Column::new(Lock, "", Anchor::Left, 14.0),
        Column::new(Favorite, "", Anchor::Left, 14.0),
        Column::new(Official, "", Anchor::Left, 14.0),
        Column::new(Name, "Name", Anchor::Fill, 0.0),
        Column::new(GameType, "Type", Anchor::Right, 50.0),
        Column::new(Map, "Map", Anchor::Right, map_width),
        Column::new(Players, "Players", Anchor::Right, 60.0),
        Column::new(Spacer, "", Anchor::Right, 10.0),
        Column::new(Ping, "Ping", Anchor::Right, 40.0),
    ]
}

/// Why the list shows no rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmptyReason {
    /// The source knows no servers at all.
    NoServers,
    /// Servers exist but none passes the filter.
    NoMatches,
    /// A refresh is in flight and nothing has arrived yet.
    Refreshing,
}

impl EmptyReason {
    /// Classify an empty `source`; `None` when it has rows.
    pub fn of<S: SortedServerSource + ?Sized>(source: &S) -> Option<Self> {
        if !source.is_empty() {
            None
        } else if source.is_refreshing() {
            Some(Self::Refreshing)
        } else if source.total_servers() == 0 {
            Some(Self::NoServers)
        } else {
            Some(Self::NoMatches)
        }
    }

    /// English text; callers with a localization layer map the variant
    /// themselves.
    pub const fn message(self) -> &'static str {
        match self {
            Self::NoServers => "No servers found",
            Self::NoMatches => "No servers match your filter criteria",
            Self::Refreshing => "Getting server list from master server",
        }
    }
}

impl fmt::Display for EmptyReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Which text field a shortcut asked to focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FocusRequest {
    /// Quick-search box (Ctrl+F).
    Search,
    /// Quick-exclude box (Ctrl+X).
    Exclude,
}

/// Counts for the status bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BrowserStatus {
    /// Servers passing the filter.
    pub num_servers: usize,
    /// Servers known before filtering.
    pub total_servers: usize,
    /// Players on the listed servers.
    pub num_players: usize,
    /// Set when the list is empty.
    pub empty: Option<EmptyReason>,
}

/// Outcome of one server list frame.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ServerListResponse {
    /// Display position of the selected server.
    pub selected: Option<usize>,
    /// The selection moved to another server.
    pub selection_changed: bool,
    /// Address to connect to, on double click, Enter, or the Connect button.
    pub connect: Option<String>,
    /// The user asked for a refresh (F5, Ctrl+R, or the Refresh button).
    pub refresh: bool,
    /// The sort key or order changed; the source must be re-sorted.
    pub sort_changed: bool,
    /// A shortcut asked to focus a text field.
    pub focus: Option<FocusRequest>,
    /// Rows that went through hit testing.
    pub rows_rendered: usize,
    /// Status bar counts.
    pub status: BrowserStatus,
}

/// Caller-owned state of the server list.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ServerListState {
    /// List box state.
    pub list: ListBoxState,
}

/// Server list panel configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerList {
    keyboard: bool,
}

impl Default for ServerList {
    fn default() -> Self {
        Self::new()
    }
}

impl ServerList {
    /// Panel with keyboard navigation enabled.
    pub const fn new() -> Self {
        Self { keyboard: true }
    }

    /// Whether keys drive the list; turn off while a text field has focus.
    #[must_use]
    pub const fn keyboard(mut self, enabled: bool) -> Self {
        self.keyboard = enabled;
        self
    }

    /// Identity of the row showing the server at `address`.
    pub fn row_id(address: &str) -> WidgetId {
        WidgetId::keyed(ROW_SCOPE, address)
    }

    /// Draw the panel into `area` for one frame.
    pub fn show<S: SortedServerSource + ?Sized>(
        &self,
        cx: &mut Ctx<'_>,
        area: Rect,
        source: &S,
        settings: &mut BrowserSettings,
        state: &mut ServerListState,
    ) -> ServerListResponse {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "widget_render",
            widget = "ServerList",
            servers = source.len()
        )
        .entered();

        let theme = cx.theme;
        let mut response = ServerListResponse::default();

        let (view, status_bar) = area.hsplit_bottom(STATUS_HEIGHT);
        let (header, list_area) = view.hsplit_top(theme.row_height);

        let mut selected = None;
        let mut num_players = 0;
        for index in 0..source.len() {
            let Some(server) = source.get(index) else {
                continue;
            };
            if selected.is_none() && server.address == settings.server_address {
                selected = Some(index);
            }
            num_players += if settings.filter.spectators {
                server.num_playing()
            } else {
                server.num_players as usize
            };
        }
        state.list.view.selected = selected;
        response.status = BrowserStatus {
            num_servers: source.len(),
            total_servers: source.total_servers(),
            num_players,
            empty: EmptyReason::of(source),
        };

        // Header
        cx.painter
            .draw_rect(header, theme.header, Corners::TOP, theme.rounding);
        let (header, _) = header.vsplit_right(SCROLLBAR_WIDTH);
        let mut columns = browser_columns(header.width);
        ColumnLayout::new().resolve(header, &mut columns);
        for (slot, col) in columns.iter().enumerate() {
            let Some(key) = col.key.sort_key() else {
                continue;
            };
            let id = WidgetId::slot(HEADER_SCOPE, slot as u32);
            let check = settings.sort.header_check(key);
            if grid_header(cx, id, &col.rect, col.caption, check) {
                settings.sort.toggle(key);
                response.sort_changed = true;
            }
        }

        // Rows
        let list = ListBox::new(ROW_SCOPE).keyboard(self.keyboard);
        let mut pass = list.begin(cx, list_area, source.len(), &mut state.list);
        for index in pass.visible_range() {
            let Some(server) = source.get(index) else {
                continue;
            };
            let item = pass.next_item(cx, index, Self::row_id(&server.address));
            if item.visible {
                draw_row(cx, &columns, &item.rect, server, settings);
            }
        }
        let list_response = pass.end(cx);
        response.rows_rendered = list_response.rows_rendered;
        response.selected = list_response.selected;

        if let Some(reason) = response.status.empty {
            let size = theme.font_size + 4.0;
            label(cx, &list_area, reason.message(), size, Align::Center, None);
        }

        let chosen = list_response
            .selected
            .and_then(|i| source.get(i))
            .map(|server| server.address.as_str());
        if list_response.changed {
            if let Some(address) = chosen {
                settings.server_address = address.to_owned();
                response.selection_changed = true;
                sbui_core::debug!(message = "browser.select", address = %address);
            }
        }
        if list_response.activated {
            response.connect = chosen.map(str::to_owned);
        }

        // Status bar
        let (counts, buttons) = status_bar.vsplit_right(170.0);
        let text = format!(
            "{} of {} servers, {} players",
            response.status.num_servers, response.status.total_servers, response.status.num_players
        );
        label(cx, &counts.vmargin(5.0), &text, theme.font_size, Align::Left, None);
        let (refresh, connect) = buttons.margin(2.0).vsplit_mid();
        if menu_button(cx, WidgetId::slot(STATUS_SCOPE, 0), &refresh.vmargin(2.0), "Refresh") {
            response.refresh = true;
        }
        if menu_button(cx, WidgetId::slot(STATUS_SCOPE, 1), &connect.vmargin(2.0), "Connect") {
            response.connect = chosen.map(str::to_owned);
        }

        apply_shortcuts(cx, &mut response);
        if let Some(address) = &response.connect {
            sbui_core::debug!(message = "browser.connect", address = %address);
        }
        response
    }
}

fn apply_shortcuts(cx: &Ctx<'_>, response: &mut ServerListResponse) {
    let input = cx.input;
    if input.pressed(KeyCode::F(5)) || input.pressed_with(KeyCode::Char('r'), Modifiers::CTRL) {
        response.refresh = true;
    }
    if input.pressed_with(KeyCode::Char('f'), Modifiers::CTRL) {
        response.focus = Some(FocusRequest::Search);
    } else if input.pressed_with(KeyCode::Char('x'), Modifiers::CTRL) {
        response.focus = Some(FocusRequest::Exclude);
    }
}

fn draw_row(
    cx: &mut Ctx<'_>,
    columns: &[Column<BrowserColumn>],
    row: &Rect,
    server: &ServerRecord,
    settings: &BrowserSettings,
) {
    let theme = cx.theme;
    let size = theme.font_size;
    let needle = settings.filter_string.as_str();
    for col in columns {
        let cell = col.cell(row);
        match col.key {
            BrowserColumn::Spacer => {}
            BrowserColumn::Lock => {
                if server.passworded {
                    cx.painter.draw_icon(icon_rect(&cell), Icon::Lock);
                }
            }
            BrowserColumn::Favorite => {
                if server.favorite {
                    cx.painter.draw_icon(icon_rect(&cell), Icon::Favorite);
                }
            }
            BrowserColumn::Official => {
                if server.official {
                    cx.painter.draw_icon(icon_rect(&cell), Icon::Official);
                }
            }
            BrowserColumn::Name => {
                if server.quick_search.contains(QuickSearch::NAME) {
                    highlighted_label(cx, &cell, &server.name, needle, size, None, theme.highlight_text);
                } else {
                    label(cx, &cell, &server.name, size, Align::Left, None);
                }
            }
            BrowserColumn::Map => {
                if server.quick_search.contains(QuickSearch::MAP) {
                    highlighted_label(cx, &cell, &server.map, needle, size, None, theme.highlight_text);
                } else {
                    label(cx, &cell, &server.map, size, Align::Left, None);
                }
            }
            BrowserColumn::GameType => {
                let color = settings
                    .colorize_gametype
                    .then(|| theme::gametype_color(&server.game_type));
                label(cx, &cell, &server.game_type, size, Align::Left, color);
            }
            BrowserColumn::Players => {
                let (num, max) = if settings.filter.spectators {
                    (server.num_playing(), server.max_players as usize)
                } else {
                    (server.num_players as usize, server.max_players as usize)
                };
                let mut text_rect = cell;
                if server.friend_state.is_friend() {
                    let (icon, rest) = cell.vsplit_left(cell.height);
                    cx.painter.draw_icon(icon_rect(&icon), Icon::Friend);
                    text_rect = rest;
                }
                let color = server
                    .quick_search
                    .contains(QuickSearch::PLAYER)
                    .then_some(theme.highlight_text);
                label(cx, &text_rect, &format!("{num}/{max}"), size, Align::Right, color);
            }
            BrowserColumn::Ping => {
                let color = settings
                    .colorize_ping
                    .then(|| theme::ping_color(server.latency));
                label(cx, &cell, &server.latency.to_string(), size, Align::Right, color);
            }
        }
    }
}

/// Square icon slot centered vertically in `cell`.
fn icon_rect(cell: &Rect) -> Rect {
    let side = cell.width.min(cell.height);
    Rect::new(
        cell.x + (cell.width - side) / 2.0,
        cell.y + (cell.height - side) / 2.0,
        side,
        side,
    )
}
