#![forbid(unsafe_code)]

//! Keyboard navigation.
//!
//! [`KeyboardNavigator`] turns queued key presses into list selection moves,
//! one event at a time in arrival order, and then scrolls just enough to keep
//! the selection on screen. [`PageCycle`] steps through a small ring of
//! named pages with Tab / Shift+Tab.

use sbui_core::event::{InputFrame, KeyCode, KeyEvent};

use crate::virtualized::{ListViewState, ScrollableList};

/// Rows moved by Page Up / Page Down.
pub const PAGE_ROWS: usize = 25;

/// A discrete selection move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavAction {
    /// One row down.
    Down,
    /// One row up.
    Up,
    /// [`PAGE_ROWS`] rows down.
    PageDown,
    /// [`PAGE_ROWS`] rows up.
    PageUp,
    /// First row.
    Home,
    /// Last row.
    End,
}

impl NavAction {
    /// Map a key to its navigation action.
    pub fn from_key(key: &KeyEvent) -> Option<Self> {
        if !key.is_press() {
            return None;
        }
        Some(match key.code {
            KeyCode::Down => Self::Down,
            KeyCode::Up => Self::Up,
            KeyCode::PageDown => Self::PageDown,
            KeyCode::PageUp => Self::PageUp,
            KeyCode::Home => Self::Home,
            KeyCode::End => Self::End,
            _ => return None,
        })
    }

    /// Target index for this move from `current` in a list of `count` items.
    ///
    /// No selection counts as row 0. Returns `None` only for an empty list.
    pub fn apply(self, current: Option<usize>, count: usize) -> Option<usize> {
        let last = count.checked_sub(1)?;
        let from = current.unwrap_or(0).min(last);
        let to = match self {
            Self::Down => from.saturating_add(1),
            Self::Up => from.saturating_sub(1),
            Self::PageDown => from.saturating_add(PAGE_ROWS),
            Self::PageUp => from.saturating_sub(PAGE_ROWS),
            Self::Home => 0,
            Self::End => last,
        };
        Some(to.min(last))
    }
}

/// Applies queued navigation keys to a list.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyboardNavigator {
    enabled: bool,
}

impl KeyboardNavigator {
    /// An enabled navigator.
    pub const fn new() -> Self {
        Self { enabled: true }
    }

    /// Turn key handling on or off, e.g. while a text field has focus.
    #[must_use]
    pub const fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Whether keys are processed.
    #[inline]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Apply `actions` in order. Each move scrolls its new selection into
    /// view before the next action runs, so a queue of keys ends where the
    /// same keys pressed one per frame would.
    ///
    /// Returns whether the selection changed.
    pub fn apply_actions<I>(
        &self,
        list: &ScrollableList,
        state: &mut ListViewState,
        actions: I,
    ) -> bool
    where
        I: IntoIterator<Item = NavAction>,
    {
        if !self.enabled {
            return false;
        }
        let before = state.selected;
        let mut moved = false;
        for action in actions {
            if let Some(next) = action.apply(state.selected, list.item_count()) {
                state.selected = Some(next);
                list.scroll_into_view(state, next);
                moved = true;
            }
        }
        if !moved {
            return false;
        }
        let changed = state.selected != before;
        if changed {
            sbui_core::debug!(
                message = "list.selection",
                from = ?before,
                to = ?state.selected,
                source = "keyboard"
            );
        }
        changed
    }

    /// Apply the navigation keys queued in `input`.
    pub fn navigate(
        &self,
        list: &ScrollableList,
        state: &mut ListViewState,
        input: &InputFrame,
    ) -> bool {
        self.apply_actions(list, state, input.presses().filter_map(NavAction::from_key))
    }
}

/// Toolbox page shown beside the server list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize)
)]
pub enum ToolboxPage {
    /// Filter settings.
    #[default]
    Filter,
    /// Details of the selected server.
    Info,
    /// Friend list.
    Friends,
}

impl ToolboxPage {
    /// All pages in tab order.
    pub const ALL: [ToolboxPage; 3] = [Self::Filter, Self::Info, Self::Friends];

    /// Position in tab order.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Page at `index`, wrapping.
    #[inline]
    pub const fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    /// Tab caption.
    pub const fn caption(self) -> &'static str {
        match self {
            Self::Filter => "Filter",
            Self::Info => "Info",
            Self::Friends => "Friends",
        }
    }
}

/// Cycles through [`ToolboxPage`]s with Tab and Shift+Tab.
#[derive(Debug, Clone, Copy, Default)]
pub struct PageCycle;

impl PageCycle {
    /// Step `page` by the Tab presses in `input`. Does nothing while
    /// `blocked`, which callers set when a text field owns the keyboard.
    ///
    /// Returns whether the page changed.
    pub fn apply(&self, page: &mut ToolboxPage, input: &InputFrame, blocked: bool) -> bool {
        if blocked {
            return false;
        }
        let len = ToolboxPage::ALL.len();
        let start = *page;
        let mut index = page.index();
        for key in input.presses() {
            match key.code {
                KeyCode::BackTab => index = (index + len - 1) % len,
                KeyCode::Tab if key.shift() => index = (index + len - 1) % len,
                KeyCode::Tab => index = (index + 1) % len,
                _ => {}
            }
        }
        *page = ToolboxPage::from_index(index);
        *page != start
    }
}
