#![forbid(unsafe_code)]

//! Server records and the sorted list they are read from.
//!
//! The browser never owns or reorders server data. It reads a
//! [`SortedServerSource`] that the network layer keeps filtered and sorted,
//! and treats it as a stable snapshot for the duration of one frame.

use bitflags::bitflags;

/// How a player or server relates to the friend list.
///
/// Ordered so that `max` gives the strongest relation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum FriendState {
    /// Not a friend.
    #[default]
    None,
    /// Member of a friended clan.
    Clan,
    /// A friended player.
    Player,
}

impl FriendState {
    /// Whether this is any kind of friend.
    #[inline]
    pub const fn is_friend(self) -> bool {
        !matches!(self, Self::None)
    }
}

bitflags! {
    /// Which fields of a server matched the quick-search string.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct QuickSearch: u8 {
        /// Server name.
        const NAME   = 0b001;
        /// Map name.
        const MAP    = 0b010;
        /// A player name or clan.
        const PLAYER = 0b100;
    }
}

/// Score shown for a race time that was never set.
pub const RACE_NO_TIME: i32 = -9999;

/// A client connected to a server.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClientInfo {
    /// Player name.
    pub name: String,
    /// Clan tag.
    pub clan: String,
    /// Score, or race time in seconds on race servers.
    pub score: i32,
    /// Country code; -1 when unknown.
    pub country: i16,
    /// Playing (as opposed to spectating).
    pub player: bool,
    /// Friend relation, filled in by the friend matcher.
    pub friend_state: FriendState,
}

impl ClientInfo {
    /// A playing client.
    pub fn new(name: impl Into<String>, clan: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            clan: clan.into(),
            country: -1,
            player: true,
            ..Self::default()
        }
    }

    /// Builder: score.
    #[must_use]
    pub fn with_score(mut self, score: i32) -> Self {
        self.score = score;
        self
    }

    /// Builder: spectating client.
    #[must_use]
    pub fn spectator(mut self) -> Self {
        self.player = false;
        self
    }

    /// Builder: country code.
    #[must_use]
    pub fn with_country(mut self, country: i16) -> Self {
        self.country = country;
        self
    }

    /// Scoreboard text.
    ///
    /// Spectators show `SPEC`. With `race_times`, the score is a time in
    /// seconds shown as `mm:ss`, and an unset time shows nothing.
    pub fn score_text(&self, race_times: bool) -> String {
        if !self.player {
            return "SPEC".to_owned();
        }
        if race_times {
            if self.score == RACE_NO_TIME || self.score == 0 {
                return String::new();
            }
            let time = self.score.unsigned_abs();
            return format!("{:02}:{:02}", time / 60, time % 60);
        }
        self.score.to_string()
    }
}

/// One server as the browser displays it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ServerRecord {
    /// Network address; the stable identity of the server.
    pub address: String,
    /// Server name.
    pub name: String,
    /// Map name.
    pub map: String,
    /// Game type.
    pub game_type: String,
    /// Server version string.
    pub version: String,
    /// Connected players, spectators included.
    pub num_players: u32,
    /// Player slots.
    pub max_players: u32,
    /// Round-trip latency in milliseconds.
    pub latency: i32,
    /// Marked as favorite.
    pub favorite: bool,
    /// Requires a password.
    pub passworded: bool,
    /// Hosted by the game's maintainers.
    pub official: bool,
    /// Clients, as far as the server reported them.
    pub clients: Vec<ClientInfo>,
    /// Strongest friend relation among the clients.
    pub friend_state: FriendState,
    /// Fields that matched the current quick-search string.
    pub quick_search: QuickSearch,
}

impl ServerRecord {
    /// A server with an address and a name.
    pub fn new(address: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    /// Builder: map and game type.
    #[must_use]
    pub fn with_map(mut self, map: impl Into<String>, game_type: impl Into<String>) -> Self {
        self.map = map.into();
        self.game_type = game_type.into();
        self
    }

    /// Builder: latency.
    #[must_use]
    pub fn with_latency(mut self, latency: i32) -> Self {
        self.latency = latency;
        self
    }

    /// Builder: clients. Also sets `num_players`.
    #[must_use]
    pub fn with_clients(mut self, clients: Vec<ClientInfo>) -> Self {
        self.num_players = clients.len() as u32;
        self.max_players = self.max_players.max(self.num_players);
        self.clients = clients;
        self
    }

    /// Builder: slot count.
    #[must_use]
    pub fn with_max_players(mut self, max: u32) -> Self {
        self.max_players = max;
        self
    }

    /// Builder: flags.
    #[must_use]
    pub fn with_flags(mut self, favorite: bool, passworded: bool, official: bool) -> Self {
        self.favorite = favorite;
        self.passworded = passworded;
        self.official = official;
        self
    }

    /// Builder: quick-search hits.
    #[must_use]
    pub fn with_quick_search(mut self, hits: QuickSearch) -> Self {
        self.quick_search = hits;
        self
    }

    /// Players actually playing, spectators excluded.
    pub fn num_playing(&self) -> usize {
        self.clients.iter().filter(|c| c.player).count()
    }

    /// Whether the scoreboard shows race times.
    pub fn has_race_times(&self) -> bool {
        let lower = self.game_type.to_ascii_lowercase();
        lower.contains("race") || lower.contains("fastcap")
    }
}

/// Read-only, randomly indexable list of servers in display order.
pub trait SortedServerSource {
    /// Number of servers after filtering.
    fn len(&self) -> usize;

    /// Server at display position `index`.
    fn get(&self, index: usize) -> Option<&ServerRecord>;

    /// Changes whenever the filtered or sorted contents change.
    fn generation(&self) -> u64;

    /// Whether a refresh is in flight.
    fn is_refreshing(&self) -> bool {
        false
    }

    /// Servers known before filtering.
    fn total_servers(&self) -> usize {
        self.len()
    }

    /// Whether no server passed the filter.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Display position of the server at `address`.
    fn position_of(&self, address: &str) -> Option<usize> {
        (0..self.len()).find(|&i| self.get(i).is_some_and(|s| s.address == address))
    }
}

/// Mutable access for the friend matcher, which writes friend flags back
/// into the records.
pub trait SortedServerSourceMut: SortedServerSource {
    /// Server at display position `index`.
    fn get_mut(&mut self, index: usize) -> Option<&mut ServerRecord>;
}

/// A [`SortedServerSource`] backed by a vector.
#[derive(Debug, Clone, Default)]
pub struct ServerSnapshot {
    servers: Vec<ServerRecord>,
    generation: u64,
    total: usize,
    refreshing: bool,
}

impl ServerSnapshot {
    /// Snapshot of `servers`, already filtered and sorted.
    pub fn new(servers: Vec<ServerRecord>) -> Self {
        let total = servers.len();
        Self {
            servers,
            generation: 1,
            total,
            refreshing: false,
        }
    }

    /// Replace the contents and bump the generation.
    pub fn replace(&mut self, servers: Vec<ServerRecord>) {
        self.total = self.total.max(servers.len());
        self.servers = servers;
        self.touch();
    }

    /// Mark the contents as changed.
    pub fn touch(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }

    /// Set the unfiltered server count.
    pub fn set_total(&mut self, total: usize) {
        self.total = total;
    }

    /// Set the refresh flag.
    pub fn set_refreshing(&mut self, refreshing: bool) {
        self.refreshing = refreshing;
    }

    /// All servers in display order.
    pub fn servers(&self) -> &[ServerRecord] {
        &self.servers
    }
}

impl SortedServerSource for ServerSnapshot {
    fn len(&self) -> usize {
        self.servers.len()
    }

    fn get(&self, index: usize) -> Option<&ServerRecord> {
        self.servers.get(index)
    }

    fn generation(&self) -> u64 {
        self.generation
    }

    fn is_refreshing(&self) -> bool {
        self.refreshing
    }

    fn total_servers(&self) -> usize {
        self.total
    }
}

impl SortedServerSourceMut for ServerSnapshot {
    fn get_mut(&mut self, index: usize) -> Option<&mut ServerRecord> {
        self.servers.get_mut(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_text_variants() {
        let c = ClientInfo::new("nameless", "").with_score(125);
        assert_eq!(c.score_text(false), "125");
        assert_eq!(c.score_text(true), "02:05");
        assert_eq!(c.clone().with_score(-65).score_text(true), "01:05");
        assert_eq!(c.clone().with_score(RACE_NO_TIME).score_text(true), "");
        assert_eq!(c.clone().with_score(0).score_text(true), "");
        assert_eq!(c.spectator().score_text(false), "SPEC");
    }

    #[test]
    fn friend_state_orders_by_strength() {
        assert!(FriendState::Player > FriendState::Clan);
        assert_eq!(FriendState::Clan.max(FriendState::None), FriendState::Clan);
        assert!(!FriendState::None.is_friend());
    }

    #[test]
    fn snapshot_lookup_and_generation() {
        let mut snap = ServerSnapshot::new(vec![
            ServerRecord::new("1.1.1.1:8303", "a"),
            ServerRecord::new("2.2.2.2:8303", "b"),
        ]);
        assert_eq!(snap.position_of("2.2.2.2:8303"), Some(1));
        assert_eq!(snap.position_of("3.3.3.3:8303"), None);
        let g = snap.generation();
        snap.replace(vec![]);
        assert_ne!(snap.generation(), g);
        assert!(snap.is_empty());
        assert_eq!(snap.total_servers(), 2);
    }

    #[test]
    fn race_detection() {
        assert!(ServerRecord::new("a", "b").with_map("m", "DDraceNetwork").has_race_times());
        assert!(!ServerRecord::new("a", "b").with_map("m", "CTF").has_race_times());
    }
}
