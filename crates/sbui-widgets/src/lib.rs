#![forbid(unsafe_code)]

//! Immediate-mode widgets for the server browser.
//!
//! Nothing here keeps widgets alive between frames. Each frame the caller
//! starts the [`InteractionEngine`], declares widgets through a [`Ctx`], and
//! ends the frame; state that must survive (scroll positions, selections,
//! settings, the friend roster) is owned by the caller and passed in.
//!
//! - [`interaction`] - hot/active tracking, click, drag, and picker logic
//! - [`virtualized`] - list geometry and scroll math over any item count
//! - [`listbox`] - the begin / next item / end list protocol
//! - [`navigator`] - keyboard selection movement and toolbox page cycling
//! - [`browser`], [`toolbox`] - the server list and its side panel
//! - [`friends`], [`filters`], [`settings`], [`sort`] - the data those
//!   panels edit
//!
//! # Frame loop
//!
//! ```
//! use sbui_core::event::InputFrame;
//! use sbui_core::geometry::Rect;
//! use sbui_render::Frame;
//! use sbui_text::MonospaceMeasure;
//! use sbui_widgets::{BrowserSettings, BrowserState, Ctx, InteractionEngine, ServerList};
//! use sbui_widgets::server::{ServerRecord, ServerSnapshot};
//! use sbui_widgets::theme::Theme;
//!
//! let servers = ServerSnapshot::new(vec![ServerRecord::new("127.0.0.1:8303", "local")]);
//! let mut settings = BrowserSettings::default();
//! let mut state = BrowserState::default();
//! let mut ui = InteractionEngine::new();
//! let (theme, measure) = (Theme::default(), MonospaceMeasure::default());
//!
//! let input = InputFrame::at(10.0, 10.0);
//! let mut frame = Frame::new(Rect::from_size(800.0, 600.0));
//! ui.begin_frame(&input);
//! let mut cx = Ctx::new(&mut ui, &mut frame, &measure, &theme, &input);
//! let response = ServerList::new().show(
//!     &mut cx,
//!     Rect::new(0.0, 0.0, 500.0, 600.0),
//!     &servers,
//!     &mut settings,
//!     &mut state.list,
//! );
//! drop(cx);
//! ui.end_frame();
//! assert_eq!(response.status.num_servers, 1);
//! ```

pub mod browser;
pub mod button;
pub mod context;
pub mod filters;
pub mod friends;
pub mod interaction;
pub mod label;
pub mod listbox;
pub mod navigator;
pub mod scrollbar;
pub mod server;
pub mod settings;
pub mod sort;
pub mod theme;
pub mod toolbox;
pub mod virtualized;

pub use browser::{EmptyReason, FocusRequest, ServerList, ServerListResponse, ServerListState};
pub use context::Ctx;
pub use filters::ExclusionList;
pub use friends::{FriendEntry, FriendError, FriendList};
pub use interaction::{ButtonMode, DragPhase, InteractionEngine, WidgetId};
pub use listbox::{ListBox, ListBoxResponse, ListBoxState, ListItem};
pub use navigator::{KeyboardNavigator, NavAction, PageCycle, ToolboxPage};
pub use scrollbar::{Scrollbar, ScrollbarState};
pub use server::{ClientInfo, FriendState, ServerRecord, SortedServerSource, SortedServerSourceMut};
pub use settings::{BrowserSettings, FilterSettings, SettingChange, SettingsError};
pub use sort::{SortKey, SortOrder, SortState};
pub use toolbox::{BrowserState, Toolbox, ToolboxResponse, ToolboxState};
pub use virtualized::{ListViewState, ScrollableList};
