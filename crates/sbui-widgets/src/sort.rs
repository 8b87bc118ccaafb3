#![forbid(unsafe_code)]

//! Sortable column headers.
//!
//! Numeric columns (players, ping) have a third "closest" order after
//! ascending and descending; the other columns only toggle direction.

/// Column the server list is sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize)
)]
pub enum SortKey {
    /// Server name.
    Name,
    /// Game type.
    GameType,
    /// Map name.
    Map,
    /// Player count.
    NumPlayers,
    /// Latency.
    #[default]
    Ping,
}

impl SortKey {
    /// All keys, in console-variable order.
    pub const ALL: [SortKey; 5] = [
        Self::Name,
        Self::GameType,
        Self::Map,
        Self::NumPlayers,
        Self::Ping,
    ];

    /// Number of orders this key cycles through.
    #[inline]
    pub const fn order_count(self) -> u8 {
        match self {
            Self::NumPlayers | Self::Ping => 3,
            _ => 2,
        }
    }

    /// Whether the key supports [`SortOrder::Closest`].
    #[inline]
    pub const fn is_numeric(self) -> bool {
        matches!(self, Self::NumPlayers | Self::Ping)
    }

    /// Key from its console-variable value.
    pub const fn from_index(index: i64) -> Option<Self> {
        match index {
            0 => Some(Self::Name),
            1 => Some(Self::GameType),
            2 => Some(Self::Map),
            3 => Some(Self::NumPlayers),
            4 => Some(Self::Ping),
            _ => None,
        }
    }

    /// Console-variable value.
    #[inline]
    pub const fn index(self) -> i64 {
        self as i64
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize)
)]
pub enum SortOrder {
    /// Smallest first.
    #[default]
    Ascending,
    /// Largest first.
    Descending,
    /// Closest to the player's own situation first (numeric keys only).
    Closest,
}

impl SortOrder {
    /// Order from its console-variable value.
    pub const fn from_index(index: i64) -> Option<Self> {
        match index {
            0 => Some(Self::Ascending),
            1 => Some(Self::Descending),
            2 => Some(Self::Closest),
            _ => None,
        }
    }

    /// Console-variable value.
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }
}

/// Check mark shown on a column header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeaderCheck {
    /// Not the sort column.
    Off,
    /// The sort column.
    Active,
    /// Part of the combined players/ping ordering.
    Combined,
}

/// Current sort state of the server list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct SortState {
    /// Sort column.
    pub key: SortKey,
    /// Sort direction.
    pub order: SortOrder,
}

impl SortState {
    /// Sort state with `key` and `order`. A `Closest` order on a
    /// non-numeric key falls back to ascending.
    pub const fn new(key: SortKey, order: SortOrder) -> Self {
        let order = match order {
            SortOrder::Closest if !key.is_numeric() => SortOrder::Ascending,
            o => o,
        };
        Self { key, order }
    }

    /// Header click on `key`.
    ///
    /// Clicking the current column cycles its order; clicking another
    /// column selects it ascending.
    pub fn toggle(&mut self, key: SortKey) {
        if self.key == key {
            let next = (self.order.index() + 1) % key.order_count();
            self.order = SortOrder::from_index(next as i64).unwrap_or_default();
        } else {
            self.key = key;
            self.order = SortOrder::Ascending;
        }
        sbui_core::debug!(message = "browser.sort", key = ?self.key, order = ?self.order);
    }

    /// Check mark for the header of `column`.
    pub fn header_check(&self, column: SortKey) -> HeaderCheck {
        if self.order == SortOrder::Closest && self.key.is_numeric() && column.is_numeric() {
            HeaderCheck::Combined
        } else if self.key == column {
            HeaderCheck::Active
        } else {
            HeaderCheck::Off
        }
    }
}
