#![forbid(unsafe_code)]

//! Per-frame input snapshot.
//!
//! The menu runs one frame at a time. Instead of an event stream, each frame
//! receives an [`InputFrame`]: the pointer position, the buttons currently
//! held, and the key presses queued since the previous frame, in order.
//!
//! # Design Notes
//!
//! - Mouse buttons are a level state ([`MouseButtons`]); edges are derived by
//!   the interaction engine from consecutive frames.
//! - Key events keep their modifiers so shortcuts (`Ctrl+F`, `Shift+Tab`) can
//!   be resolved by the consumer.
//! - Wheel ticks are a signed count: negative scrolls up, positive scrolls down.

use bitflags::bitflags;

/// A keyboard event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// The key code that was pressed.
    pub code: KeyCode,

    /// Modifier keys held during the event.
    pub modifiers: Modifiers,

    /// Press or release.
    pub kind: KeyEventKind,
}

impl KeyEvent {
    /// Create a new key event with default modifiers and Press kind.
    #[must_use]
    pub const fn new(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: Modifiers::NONE,
            kind: KeyEventKind::Press,
        }
    }

    /// Create a key event with modifiers.
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Create a key event with a specific kind.
    #[must_use]
    pub const fn with_kind(mut self, kind: KeyEventKind) -> Self {
        self.kind = kind;
        self
    }

    /// Whether this is a key press (as opposed to a release).
    #[must_use]
    pub const fn is_press(&self) -> bool {
        matches!(self.kind, KeyEventKind::Press)
    }

    /// Check if this is a specific character key, ignoring ASCII case.
    #[must_use]
    pub fn is_char(&self, c: char) -> bool {
        matches!(self.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&c))
    }

    /// Check if Ctrl modifier is held.
    #[must_use]
    pub const fn ctrl(&self) -> bool {
        self.modifiers.contains(Modifiers::CTRL)
    }

    /// Check if Shift modifier is held.
    #[must_use]
    pub const fn shift(&self) -> bool {
        self.modifiers.contains(Modifiers::SHIFT)
    }

    /// Check if Alt modifier is held.
    #[must_use]
    pub const fn alt(&self) -> bool {
        self.modifiers.contains(Modifiers::ALT)
    }
}

/// Key codes the menu reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A regular character key.
    Char(char),

    /// Enter/Return key.
    Enter,

    /// Keypad Enter key.
    KeypadEnter,

    /// Escape key.
    Escape,

    /// Tab key.
    Tab,

    /// Shift+Tab as reported by platforms that fold the modifier into the key.
    BackTab,

    /// Home key.
    Home,

    /// End key.
    End,

    /// Page Up key.
    PageUp,

    /// Page Down key.
    PageDown,

    /// Up arrow key.
    Up,

    /// Down arrow key.
    Down,

    /// Left arrow key.
    Left,

    /// Right arrow key.
    Right,

    /// Function key (F1-F24).
    F(u8),
}

/// The type of key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KeyEventKind {
    /// Key was pressed (default when not distinguishable).
    #[default]
    Press,

    /// Key was released.
    Release,
}

bitflags! {
    /// Modifier keys that can be held during a key event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u8 {
        /// No modifiers.
        const NONE  = 0b0000;
        /// Shift key.
        const SHIFT = 0b0001;
        /// Alt/Option key.
        const ALT   = 0b0010;
        /// Control key.
        const CTRL  = 0b0100;
        /// Super/Meta/Command key.
        const SUPER = 0b1000;
    }
}

bitflags! {
    /// Mouse buttons held down in a frame.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct MouseButtons: u8 {
        /// Left (primary) button.
        const LEFT   = 0b001;
        /// Right (secondary) button.
        const RIGHT  = 0b010;
        /// Middle button.
        const MIDDLE = 0b100;
    }
}

/// A single mouse button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Left (primary) button.
    Left,
    /// Right (secondary) button.
    Right,
    /// Middle button.
    Middle,
}

impl MouseButton {
    /// All buttons, in precedence order.
    pub const ALL: [MouseButton; 3] = [MouseButton::Left, MouseButton::Right, MouseButton::Middle];

    /// The mask bit for this button.
    #[inline]
    pub const fn mask(self) -> MouseButtons {
        match self {
            MouseButton::Left => MouseButtons::LEFT,
            MouseButton::Right => MouseButtons::RIGHT,
            MouseButton::Middle => MouseButtons::MIDDLE,
        }
    }
}

/// Everything the menu needs to know about input for one frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputFrame {
    /// Pointer x in layout units.
    pub mouse_x: f32,
    /// Pointer y in layout units.
    pub mouse_y: f32,
    /// Buttons currently held.
    pub buttons: MouseButtons,
    /// The platform reported a double click this frame.
    pub double_click: bool,
    /// Wheel ticks since the previous frame; negative scrolls up.
    pub wheel: i32,
    /// Key events since the previous frame, oldest first.
    pub keys: Vec<KeyEvent>,
}

impl InputFrame {
    /// Input with the pointer at `(x, y)` and nothing pressed.
    #[must_use]
    pub fn at(x: f32, y: f32) -> Self {
        Self {
            mouse_x: x,
            mouse_y: y,
            ..Self::default()
        }
    }

    /// Set the held buttons.
    #[must_use]
    pub fn with_buttons(mut self, buttons: MouseButtons) -> Self {
        self.buttons = buttons;
        self
    }

    /// Append a key press.
    #[must_use]
    pub fn with_key(mut self, key: KeyEvent) -> Self {
        self.keys.push(key);
        self
    }

    /// Set the wheel tick count.
    #[must_use]
    pub fn with_wheel(mut self, ticks: i32) -> Self {
        self.wheel = ticks;
        self
    }

    /// Mark this frame as carrying a double click.
    #[must_use]
    pub fn with_double_click(mut self) -> Self {
        self.double_click = true;
        self
    }

    /// Key presses only, oldest first.
    pub fn presses(&self) -> impl Iterator<Item = &KeyEvent> {
        self.keys.iter().filter(|k| k.is_press())
    }

    /// Whether a press of `code` with `modifiers` held is queued.
    #[must_use]
    pub fn pressed_with(&self, code: KeyCode, modifiers: Modifiers) -> bool {
        self.presses()
            .any(|k| k.code == code && k.modifiers.contains(modifiers))
    }

    /// Whether a plain press of `code` is queued (any modifiers).
    #[must_use]
    pub fn pressed(&self, code: KeyCode) -> bool {
        self.pressed_with(code, Modifiers::NONE)
    }
}
