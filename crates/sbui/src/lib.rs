#![forbid(unsafe_code)]

//! Server browser UI core: public facade.
//!
//! Re-exports the types a host needs to drive the browser screen each frame
//! and offers a prelude. The host owns the window, the renderer behind
//! [`Painter`], and the server data behind [`SortedServerSource`]; this crate
//! owns layout, interaction, and the panels.

use std::fmt;

// --- Core re-exports -------------------------------------------------------

pub use sbui_core::event::{
    InputFrame, KeyCode, KeyEvent, KeyEventKind, Modifiers, MouseButton, MouseButtons,
};
pub use sbui_core::geometry::Rect;

// --- Render re-exports -----------------------------------------------------

pub use sbui_render::{Corners, DrawCommand, Frame, Icon, Painter, RectRenderer, Rgba, TextRenderer};

// --- Text and layout re-exports --------------------------------------------

pub use sbui_layout::{Anchor, ColumnLayout, FlowGrid};
pub use sbui_text::{MonospaceMeasure, TextMeasure, highlight};

// --- Widget re-exports -----------------------------------------------------

pub use sbui_widgets::theme::Theme;
pub use sbui_widgets::{
    BrowserSettings, BrowserState, Ctx, EmptyReason, FilterSettings, FocusRequest, FriendError,
    FriendList, InteractionEngine, ListBox, ListBoxState, ServerList, ServerListResponse,
    ServerRecord, SettingsError, SortKey, SortOrder, SortedServerSource, SortedServerSourceMut,
    Toolbox, ToolboxPage, ToolboxResponse, WidgetId,
};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for sbui hosts.
#[derive(Debug)]
pub enum Error {
    /// I/O failure while reading or writing stored settings.
    Io(std::io::Error),
    /// A setting was rejected or stored settings did not decode.
    Settings(SettingsError),
    /// A friend roster edit was rejected.
    Friends(FriendError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{err}"),
            Self::Settings(err) => write!(f, "{err}"),
            Self::Friends(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Settings(err) => Some(err),
            Self::Friends(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<SettingsError> for Error {
    fn from(err: SettingsError) -> Self {
        Self::Settings(err)
    }
}

impl From<FriendError> for Error {
    fn from(err: FriendError) -> Self {
        Self::Friends(err)
    }
}

/// Standard result type for sbui APIs.
pub type Result<T> = std::result::Result<T, Error>;

// --- Settings storage -----------------------------------------------------

/// Read settings from a JSON file. A missing file yields the defaults.
#[cfg(feature = "state-persistence")]
pub fn load_settings(path: impl AsRef<std::path::Path>) -> Result<BrowserSettings> {
    let path = path.as_ref();
    let json = match std::fs::read_to_string(path) {
        Ok(json) => json,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            sbui_core::debug!(message = "settings.load", path = %path.display(), found = false);
            return Ok(BrowserSettings::default());
        }
        Err(err) => return Err(err.into()),
    };
    let settings = BrowserSettings::from_json(&json)?;
    sbui_core::debug!(message = "settings.load", path = %path.display(), found = true);
    Ok(settings)
}

/// Write settings to a JSON file, replacing it.
///
/// Creates missing parent directories. The file is written next to its
/// destination and renamed into place, so readers never see a partial file.
#[cfg(feature = "state-persistence")]
pub fn save_settings(path: impl AsRef<std::path::Path>, settings: &BrowserSettings) -> Result<()> {
    use std::io::Write;

    let path = path.as_ref();
    let json = settings.to_json()?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let tmp_path = path.with_extension("json.tmp");
    {
        let file = std::fs::File::create(&tmp_path)?;
        let mut writer = std::io::BufWriter::new(file);
        writer.write_all(json.as_bytes())?;
        writer.flush()?;
        writer.get_ref().sync_all()?;
    }
    std::fs::rename(&tmp_path, path)?;

    sbui_core::debug!(message = "settings.save", path = %path.display());
    Ok(())
}

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        BrowserSettings, BrowserState, Ctx, Error, Frame, FriendList, InputFrame,
        InteractionEngine, KeyCode, Modifiers, MonospaceMeasure, Rect, Result, ServerList,
        SortedServerSource, Theme, Toolbox,
    };

    pub use crate::{core, layout, render, text, widgets};
}

pub use sbui_core as core;
pub use sbui_layout as layout;
pub use sbui_render as render;
pub use sbui_text as text;
pub use sbui_widgets as widgets;
