#![forbid(unsafe_code)]

//! Browser settings.
//!
//! [`BrowserSettings`] is owned by the caller and passed into the browser
//! panels each frame. Panels read it and write back user edits (sort order,
//! filter toggles, selected server). Storage is the caller's business; with
//! the `state-persistence` feature the struct round-trips through JSON.
//!
//! Every field is also reachable by its console variable name through
//! [`BrowserSettings::set`] and [`BrowserSettings::get`].

use std::fmt;

use crate::filters::ExclusionList;
use crate::navigator::ToolboxPage;
use crate::sort::{SortKey, SortOrder, SortState};

/// Highest accepted ping filter value.
pub const MAX_PING_FILTER: i64 = 999;

/// Failure to apply or load a setting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsError {
    /// No variable has this name.
    UnknownVariable(String),
    /// The value does not parse for this variable.
    InvalidValue {
        /// Variable name.
        name: &'static str,
        /// Rejected value.
        value: String,
    },
    /// Stored settings could not be decoded.
    #[cfg(feature = "state-persistence")]
    Parse(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownVariable(name) => write!(f, "unknown setting '{name}'"),
            Self::InvalidValue { name, value } => {
                write!(f, "invalid value '{value}' for setting '{name}'")
            }
            #[cfg(feature = "state-persistence")]
            Self::Parse(msg) => write!(f, "failed to parse settings: {msg}"),
        }
    }
}

impl std::error::Error for SettingsError {}

/// What a setting change requires from the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingChange {
    /// The server list must be filtered and sorted again.
    Refilter,
    /// Friend counts must be recomputed.
    RecountFriends,
    /// Only the presentation changed.
    Display,
}

/// Server filter flags and values.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct FilterSettings {
    /// Hide empty servers.
    pub empty: bool,
    /// Count players only, not spectators.
    pub spectators: bool,
    /// Hide full servers.
    pub full: bool,
    /// Show only servers with friends.
    pub friends: bool,
    /// Hide passworded servers.
    pub password: bool,
    /// Show only compatible versions.
    pub compat_version: bool,
    /// Match the game type exactly.
    pub gametype_strict: bool,
    /// Show only servers from [`country_index`](Self::country_index).
    pub country: bool,
    /// Show only maps not finished yet.
    pub unfinished_map: bool,
    /// Leave connecting players out of the counts.
    pub connecting_players: bool,
    /// Maximum latency, `0..=999`.
    pub ping: u32,
    /// Country for [`country`](Self::country); -1 for none.
    pub country_index: i32,
    /// Game type filter text.
    pub gametype: String,
    /// Server address filter text.
    pub server_address: String,
    /// Game types hidden by the type grid.
    pub exclude_types: ExclusionList,
    /// Countries hidden by the country grid.
    pub exclude_countries: ExclusionList,
}

impl Default for FilterSettings {
    fn default() -> Self {
        Self {
            empty: false,
            spectators: false,
            full: false,
            friends: false,
            password: false,
            compat_version: false,
            gametype_strict: false,
            country: false,
            unfinished_map: false,
            connecting_players: true,
            ping: MAX_PING_FILTER as u32,
            country_index: -1,
            gametype: String::new(),
            server_address: String::new(),
            exclude_types: ExclusionList::new(),
            exclude_countries: ExclusionList::new(),
        }
    }
}

/// Everything the browser panels read and write between frames.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct BrowserSettings {
    /// Sort column and direction.
    pub sort: SortState,
    /// Quick-search text.
    pub filter_string: String,
    /// Quick-exclude text.
    pub exclude_string: String,
    /// Address of the selected server.
    pub server_address: String,
    /// Page shown in the toolbox.
    pub toolbox_page: ToolboxPage,
    /// Friend entries with a name match any clan.
    pub friends_ignore_clan: bool,
    /// Color the ping column by latency.
    pub colorize_ping: bool,
    /// Color the game type column.
    pub colorize_gametype: bool,
    /// Show race times on race scoreboards.
    pub race_scoreboard: bool,
    /// Filter flags.
    pub filter: FilterSettings,
}

impl Default for BrowserSettings {
    fn default() -> Self {
        Self {
            sort: SortState::default(),
            filter_string: String::new(),
            exclude_string: String::new(),
            server_address: String::new(),
            toolbox_page: ToolboxPage::default(),
            friends_ignore_clan: true,
            colorize_ping: true,
            colorize_gametype: true,
            race_scoreboard: true,
            filter: FilterSettings::default(),
        }
    }
}

/// Console variable names accepted by [`BrowserSettings::set`].
pub const VARIABLES: &[&str] = &[
    "br_sort",
    "br_sort_order",
    "br_filter_string",
    "br_exclude_string",
    "br_filter_empty",
    "br_filter_spectators",
    "br_filter_full",
    "br_filter_friends",
    "br_filter_pw",
    "br_filter_compatversion",
    "br_filter_gametype_strict",
    "br_filter_country",
    "br_filter_unfinished_map",
    "br_filter_connecting_players",
    "br_filter_ping",
    "br_filter_country_index",
    "br_filter_gametype",
    "br_filter_serveraddress",
    "br_filter_exclude_types",
    "br_filter_exclude_countries",
    "ui_server_address",
    "ui_toolbox_page",
    "cl_friends_ignore_clan",
    "cl_ddrace_scoreboard",
    "ui_colorize_ping",
    "ui_colorize_gametype",
];

fn parse_int(name: &'static str, value: &str) -> Result<i64, SettingsError> {
    value
        .trim()
        .parse::<i64>()
        .map_err(|_| SettingsError::InvalidValue {
            name,
            value: value.to_owned(),
        })
}

fn parse_bool(name: &'static str, value: &str) -> Result<bool, SettingsError> {
    match value.trim() {
        "true" | "on" => Ok(true),
        "false" | "off" => Ok(false),
        other => parse_int(name, other).map(|v| v != 0),
    }
}

fn flag(b: bool) -> String {
    u8::from(b).to_string()
}

impl BrowserSettings {
    /// Defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore every filter to its default and clear the search strings.
    pub fn reset_filters(&mut self) {
        self.filter_string.clear();
        self.exclude_string.clear();
        self.filter = FilterSettings::default();
        sbui_core::debug!(message = "settings.reset_filters");
    }

    fn filter_flag_mut(&mut self, name: &str) -> Option<(&'static str, &mut bool)> {
        let f = &mut self.filter;
        Some(match name {
            "br_filter_empty" => ("br_filter_empty", &mut f.empty),
            "br_filter_spectators" => ("br_filter_spectators", &mut f.spectators),
            "br_filter_full" => ("br_filter_full", &mut f.full),
            "br_filter_friends" => ("br_filter_friends", &mut f.friends),
            "br_filter_pw" => ("br_filter_pw", &mut f.password),
            "br_filter_compatversion" => ("br_filter_compatversion", &mut f.compat_version),
            "br_filter_gametype_strict" => ("br_filter_gametype_strict", &mut f.gametype_strict),
            "br_filter_country" => ("br_filter_country", &mut f.country),
            "br_filter_unfinished_map" => ("br_filter_unfinished_map", &mut f.unfinished_map),
            "br_filter_connecting_players" => {
                ("br_filter_connecting_players", &mut f.connecting_players)
            }
            _ => return None,
        })
    }

    fn display_flag_mut(&mut self, name: &str) -> Option<(&'static str, &mut bool)> {
        Some(match name {
            "ui_colorize_ping" => ("ui_colorize_ping", &mut self.colorize_ping),
            "ui_colorize_gametype" => ("ui_colorize_gametype", &mut self.colorize_gametype),
            "cl_ddrace_scoreboard" => ("cl_ddrace_scoreboard", &mut self.race_scoreboard),
            _ => return None,
        })
    }

    /// Set the variable `name` from its console representation.
    ///
    /// Numbers are clamped to their valid range. Returns what the caller
    /// has to redo because of the change.
    pub fn set(&mut self, name: &str, value: &str) -> Result<SettingChange, SettingsError> {
        let change = self.apply(name, value)?;
        sbui_core::debug!(message = "settings.set", name, value, change = ?change);
        Ok(change)
    }

    fn apply(&mut self, name: &str, value: &str) -> Result<SettingChange, SettingsError> {
        if let Some((name, slot)) = self.filter_flag_mut(name) {
            *slot = parse_bool(name, value)?;
            return Ok(SettingChange::Refilter);
        }
        if let Some((name, slot)) = self.display_flag_mut(name) {
            *slot = parse_bool(name, value)?;
            return Ok(SettingChange::Display);
        }
        match name {
            "br_sort" => {
                let key = SortKey::from_index(parse_int("br_sort", value)?).ok_or_else(|| {
                    SettingsError::InvalidValue {
                        name: "br_sort",
                        value: value.to_owned(),
                    }
                })?;
                self.sort = SortState::new(key, self.sort.order);
                Ok(SettingChange::Refilter)
            }
            "br_sort_order" => {
                let max = i64::from(self.sort.key.order_count()) - 1;
                let index = parse_int("br_sort_order", value)?.clamp(0, max);
                let order = SortOrder::from_index(index).unwrap_or_default();
                self.sort = SortState::new(self.sort.key, order);
                Ok(SettingChange::Refilter)
            }
            "br_filter_string" => {
                self.filter_string = value.to_owned();
                Ok(SettingChange::Refilter)
            }
            "br_exclude_string" => {
                self.exclude_string = value.to_owned();
                Ok(SettingChange::Refilter)
            }
            "br_filter_ping" => {
                let ping = parse_int("br_filter_ping", value)?.clamp(0, MAX_PING_FILTER);
                self.filter.ping = ping as u32;
                Ok(SettingChange::Refilter)
            }
            "br_filter_country_index" => {
                let index = parse_int("br_filter_country_index", value)?;
                self.filter.country_index = index.clamp(-1, i64::from(i32::MAX)) as i32;
                Ok(SettingChange::Refilter)
            }
            "br_filter_gametype" => {
                self.filter.gametype = value.to_owned();
                Ok(SettingChange::Refilter)
            }
            "br_filter_serveraddress" => {
                self.filter.server_address = value.to_owned();
                Ok(SettingChange::Refilter)
            }
            "br_filter_exclude_types" => {
                self.filter.exclude_types = ExclusionList::parse(value);
                Ok(SettingChange::Refilter)
            }
            "br_filter_exclude_countries" => {
                self.filter.exclude_countries = ExclusionList::parse(value);
                Ok(SettingChange::Refilter)
            }
            "ui_server_address" => {
                self.server_address = value.trim().to_owned();
                Ok(SettingChange::Display)
            }
            "ui_toolbox_page" => {
                let page = parse_int("ui_toolbox_page", value)?;
                let len = ToolboxPage::ALL.len() as i64;
                self.toolbox_page = ToolboxPage::from_index(page.rem_euclid(len) as usize);
                Ok(SettingChange::Display)
            }
            "cl_friends_ignore_clan" => {
                self.friends_ignore_clan = parse_bool("cl_friends_ignore_clan", value)?;
                Ok(SettingChange::RecountFriends)
            }
            _ => Err(SettingsError::UnknownVariable(name.to_owned())),
        }
    }

    /// Console representation of the variable `name`.
    pub fn get(&self, name: &str) -> Option<String> {
        let f = &self.filter;
        Some(match name {
            "br_sort" => self.sort.key.index().to_string(),
            "br_sort_order" => self.sort.order.index().to_string(),
            "br_filter_string" => self.filter_string.clone(),
            "br_exclude_string" => self.exclude_string.clone(),
            "br_filter_empty" => flag(f.empty),
            "br_filter_spectators" => flag(f.spectators),
            "br_filter_full" => flag(f.full),
            "br_filter_friends" => flag(f.friends),
            "br_filter_pw" => flag(f.password),
            "br_filter_compatversion" => flag(f.compat_version),
            "br_filter_gametype_strict" => flag(f.gametype_strict),
            "br_filter_country" => flag(f.country),
            "br_filter_unfinished_map" => flag(f.unfinished_map),
            "br_filter_connecting_players" => flag(f.connecting_players),
            "br_filter_ping" => f.ping.to_string(),
            "br_filter_country_index" => f.country_index.to_string(),
            "br_filter_gametype" => f.gametype.clone(),
            "br_filter_serveraddress" => f.server_address.clone(),
            "br_filter_exclude_types" => f.exclude_types.to_string(),
            "br_filter_exclude_countries" => f.exclude_countries.to_string(),
            "ui_server_address" => self.server_address.clone(),
            "ui_toolbox_page" => self.toolbox_page.index().to_string(),
            "cl_friends_ignore_clan" => flag(self.friends_ignore_clan),
            "cl_ddrace_scoreboard" => flag(self.race_scoreboard),
            "ui_colorize_ping" => flag(self.colorize_ping),
            "ui_colorize_gametype" => flag(self.colorize_gametype),
            _ => return None,
        })
    }

    /// Serialize to JSON.
    #[cfg(feature = "state-persistence")]
    pub fn to_json(&self) -> Result<String, SettingsError> {
        serde_json::to_string_pretty(self).map_err(|e| SettingsError::Parse(e.to_string()))
    }

    /// Deserialize from JSON. Missing fields take their defaults.
    #[cfg(feature = "state-persistence")]
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        serde_json::from_str(json).map_err(|e| SettingsError::Parse(e.to_string()))
    }
}
