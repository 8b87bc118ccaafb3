#![forbid(unsafe_code)]

//! Friend roster and matching against online clients.
//!
//! A [`FriendEntry`] names a player, a clan, or both. An empty field is a
//! wildcard: `{name: "", clan: "X"}` matches every member of clan `X`, and
//! `{name: "Y", clan: ""}` matches player `Y` in any clan. Non-empty fields
//! must match exactly; a precomputed hash rejects most mismatches before the
//! string compare.
//!
//! With `ignore_clan` set, entries that name a player match that player in
//! any clan.

use std::cmp::Ordering;
use std::fmt;
use std::hash::Hasher;

use rustc_hash::FxHasher;

use crate::server::{ClientInfo, FriendState, SortedServerSource, SortedServerSourceMut};

/// Maximum number of roster entries.
pub const MAX_FRIENDS: usize = 128;

/// Roster edit failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FriendError {
    /// Both name and clan are empty.
    EmptyEntry,
    /// The exact name/clan pair is already listed.
    AlreadyExists {
        /// Player name.
        name: String,
        /// Clan tag.
        clan: String,
    },
    /// The roster holds [`MAX_FRIENDS`] entries.
    ListFull,
}

impl fmt::Display for FriendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyEntry => write!(f, "friend entry needs a name or a clan"),
            Self::AlreadyExists { name, clan } => {
                write!(f, "friend '{name}' (clan '{clan}') is already listed")
            }
            Self::ListFull => write!(f, "friend list is full ({MAX_FRIENDS} entries)"),
        }
    }
}

impl std::error::Error for FriendError {}

fn quick_hash(text: &str) -> u64 {
    let mut hasher = FxHasher::default();
    hasher.write(text.as_bytes());
    hasher.finish()
}

/// One roster entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FriendEntry {
    name: String,
    clan: String,
    name_hash: u64,
    clan_hash: u64,
    num_found: usize,
}

impl FriendEntry {
    /// Entry for `name` in `clan`; either may be empty.
    pub fn new(name: impl Into<String>, clan: impl Into<String>) -> Self {
        let name = name.into();
        let clan = clan.into();
        Self {
            name_hash: quick_hash(&name),
            clan_hash: quick_hash(&clan),
            name,
            clan,
            num_found: 0,
        }
    }

    /// Player name; empty for a clan-only entry.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Clan tag; empty for "any clan".
    #[inline]
    pub fn clan(&self) -> &str {
        &self.clan
    }

    /// Matching clients on the current server list.
    #[inline]
    pub fn num_found(&self) -> usize {
        self.num_found
    }

    /// Whether this entry names a player.
    #[inline]
    pub fn is_player(&self) -> bool {
        !self.name.is_empty()
    }

    /// Relation a matching client has to this entry.
    pub fn state(&self) -> FriendState {
        if self.is_player() {
            FriendState::Player
        } else {
            FriendState::Clan
        }
    }

    /// Whether a client called `name` in `clan` matches this entry.
    pub fn matches(&self, name: &str, clan: &str, ignore_clan: bool) -> bool {
        let name_ok =
            self.name.is_empty() || (quick_hash(name) == self.name_hash && name == self.name);
        let clan_ok = self.clan.is_empty()
            || (ignore_clan && self.is_player())
            || (quick_hash(clan) == self.clan_hash && clan == self.clan);
        name_ok && clan_ok
    }

    /// [`matches`](Self::matches) for a client record.
    pub fn matches_client(&self, client: &ClientInfo, ignore_clan: bool) -> bool {
        self.matches(&client.name, &client.clan, ignore_clan)
    }

    fn is_same(&self, name: &str, clan: &str) -> bool {
        self.name == name && self.clan == clan
    }
}

/// Display order: entries with online matches first, then by name, then by
/// clan (both case-insensitive).
fn display_order(a: &FriendEntry, b: &FriendEntry) -> Ordering {
    let online = |e: &FriendEntry| e.num_found > 0;
    online(b)
        .cmp(&online(a))
        .then_with(|| cmp_nocase(&a.name, &b.name))
        .then_with(|| cmp_nocase(&a.clan, &b.clan))
}

fn cmp_nocase(a: &str, b: &str) -> Ordering {
    a.bytes()
        .map(|c| c.to_ascii_lowercase())
        .cmp(b.bytes().map(|c| c.to_ascii_lowercase()))
}

/// The roster with cached online counts.
#[derive(Debug, Clone, Default)]
pub struct FriendList {
    entries: Vec<FriendEntry>,
    ignore_clan: bool,
    counted_generation: Option<u64>,
}

impl FriendList {
    /// Empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: see [`set_ignore_clan`](Self::set_ignore_clan).
    #[must_use]
    pub fn with_ignore_clan(mut self, ignore_clan: bool) -> Self {
        self.ignore_clan = ignore_clan;
        self
    }

    /// Match named entries regardless of clan.
    pub fn set_ignore_clan(&mut self, ignore_clan: bool) {
        if self.ignore_clan != ignore_clan {
            self.ignore_clan = ignore_clan;
            self.mark_dirty();
        }
    }

    /// Whether named entries ignore clans.
    #[inline]
    pub fn ignore_clan(&self) -> bool {
        self.ignore_clan
    }

    /// Entries in display order as of the last recount.
    #[inline]
    pub fn entries(&self) -> &[FriendEntry] {
        &self.entries
    }

    /// Entry at `index`.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&FriendEntry> {
        self.entries.get(index)
    }

    /// Number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the roster is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether another entry fits.
    #[inline]
    pub fn has_room(&self) -> bool {
        self.entries.len() < MAX_FRIENDS
    }

    /// Whether the exact pair is listed.
    pub fn contains(&self, name: &str, clan: &str) -> bool {
        self.entries.iter().any(|e| e.is_same(name, clan))
    }

    /// Add an entry.
    pub fn add(&mut self, name: &str, clan: &str) -> Result<(), FriendError> {
        if name.is_empty() && clan.is_empty() {
            return Err(FriendError::EmptyEntry);
        }
        if self.contains(name, clan) {
            return Err(FriendError::AlreadyExists {
                name: name.to_owned(),
                clan: clan.to_owned(),
            });
        }
        if !self.has_room() {
            return Err(FriendError::ListFull);
        }
        self.entries.push(FriendEntry::new(name, clan));
        self.entries.sort_by(display_order);
        self.mark_dirty();
        sbui_core::debug!(message = "friends.add", name, clan);
        Ok(())
    }

    /// Remove the exact pair. Returns whether it was listed.
    pub fn remove(&mut self, name: &str, clan: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| !e.is_same(name, clan));
        let removed = self.entries.len() != before;
        if removed {
            self.mark_dirty();
            sbui_core::debug!(message = "friends.remove", name, clan);
        }
        removed
    }

    /// Remove the entry at `index`.
    pub fn remove_at(&mut self, index: usize) -> Option<FriendEntry> {
        if index >= self.entries.len() {
            return None;
        }
        let entry = self.entries.remove(index);
        self.mark_dirty();
        sbui_core::debug!(message = "friends.remove", name = entry.name(), clan = entry.clan());
        Some(entry)
    }

    /// Scoreboard toggle: unfriend a client who is a friended player,
    /// otherwise friend them.
    ///
    /// Returns whether the client is a player friend afterwards.
    pub fn toggle(&mut self, client: &ClientInfo) -> Result<bool, FriendError> {
        if self.friend_state(&client.name, &client.clan) == FriendState::Player {
            let ignore_clan = self.ignore_clan;
            self.entries
                .retain(|e| !(e.is_player() && e.matches_client(client, ignore_clan)));
            self.mark_dirty();
            sbui_core::debug!(message = "friends.remove", name = %client.name, clan = %client.clan);
            Ok(false)
        } else {
            self.add(&client.name, &client.clan)?;
            Ok(true)
        }
    }

    /// Relation of a client called `name` in `clan` to the roster.
    pub fn friend_state(&self, name: &str, clan: &str) -> FriendState {
        self.entries
            .iter()
            .filter(|e| e.matches(name, clan, self.ignore_clan))
            .map(FriendEntry::state)
            .max()
            .unwrap_or_default()
    }

    /// Force the next [`recount`](Self::recount) to run.
    pub fn mark_dirty(&mut self) {
        self.counted_generation = None;
    }

    /// Write friend relations into every client and server of `source`.
    pub fn annotate<S: SortedServerSourceMut + ?Sized>(&self, source: &mut S) {
        for index in 0..source.len() {
            let Some(server) = source.get_mut(index) else {
                continue;
            };
            let mut strongest = FriendState::None;
            for client in &mut server.clients {
                client.friend_state = self.friend_state(&client.name, &client.clan);
                strongest = strongest.max(client.friend_state);
            }
            server.friend_state = strongest;
        }
    }

    /// Recompute every entry's online count from `source`.
    ///
    /// Skipped when `source` has not changed since the last count. Clients
    /// are only tested if they and their server carry a friend relation.
    /// An entry that names a player ends the scan for that client; wildcard
    /// entries do not. Returns whether a count ran.
    pub fn recount<S: SortedServerSource + ?Sized>(&mut self, source: &S) -> bool {
        let generation = source.generation();
        if self.counted_generation == Some(generation) {
            return false;
        }
        for entry in &mut self.entries {
            entry.num_found = 0;
        }
        let ignore_clan = self.ignore_clan;
        for server in (0..source.len()).filter_map(|i| source.get(i)) {
            if !server.friend_state.is_friend() {
                continue;
            }
            for client in server.clients.iter().filter(|c| c.friend_state.is_friend()) {
                for entry in &mut self.entries {
                    if entry.matches_client(client, ignore_clan) {
                        entry.num_found += 1;
                        if entry.is_player() {
                            break;
                        }
                    }
                }
            }
        }
        self.entries.sort_by(display_order);
        self.counted_generation = Some(generation);
        sbui_core::debug!(
            message = "friends.recount",
            generation,
            friends = self.entries.len(),
            online = self.entries.iter().filter(|e| e.num_found > 0).count()
        );
        true
    }

    /// Annotate `source` and recount in one step.
    pub fn refresh<S: SortedServerSourceMut + ?Sized>(&mut self, source: &mut S) -> bool {
        if self.counted_generation == Some(source.generation()) {
            return false;
        }
        self.annotate(source);
        self.recount(source)
    }

    /// Next server after display position `after` hosting a client that
    /// matches entry `index`, wrapping around. With no `after`, the scan
    /// starts at the top.
    pub fn find_next_server_with<S: SortedServerSource + ?Sized>(
        &self,
        index: usize,
        source: &S,
        after: Option<usize>,
    ) -> Option<usize> {
        let entry = self.entries.get(index)?;
        let count = source.len();
        (0..count)
            .map(|i| match after {
                Some(a) => (a + i + 1) % count,
                None => i,
            })
            .find(|&pos| {
                source.get(pos).is_some_and(|server| {
                    server.friend_state.is_friend()
                        && server.clients.iter().any(|c| {
                            c.friend_state.is_friend() && entry.matches_client(c, self.ignore_clan)
                        })
                })
            })
    }
}
