pub mod enigo_sink;

pub use enigo_sink::EnigoSink;

use crate::error::PasteError;
use std::fmt;

/// Modifier held down for a keyboard shortcut.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modifier {
    Control,
    Command,
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Modifier::Control => write!(f, "Ctrl"),
            Modifier::Command => write!(f, "Cmd"),
        }
    }
}

/// A single key tapped into the focused application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tap {
    Char(char),
    Tab,
    Delete,
}

/// Primitive synthetic-input operations the paste engine drives.
pub trait InputSink {
    fn set_clipboard(&mut self, text: &str) -> Result<(), PasteError>;

    /// Hold `modifier`, tap `key`, release `modifier`. The release must run
    /// even when the tap fails.
    fn chord(&mut self, modifier: Modifier, key: Tap) -> Result<(), PasteError>;

    fn tap(&mut self, key: Tap) -> Result<(), PasteError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shortcut {
    pub modifier: Modifier,
    pub key: Tap,
}

/// Paste and select-all shortcuts for the platform we run on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shortcuts {
    pub paste: Shortcut,
    pub select_all: Shortcut,
}

impl Shortcuts {
    pub fn with_modifier(modifier: Modifier) -> Self {
        Self {
            paste: Shortcut {
                modifier,
                key: Tap::Char('v'),
            },
            select_all: Shortcut {
                modifier,
                key: Tap::Char('a'),
            },
        }
    }

    pub fn for_current_platform() -> Self {
        Self::with_modifier(primary_modifier())
    }
}

/// Command on macOS, Control on Windows and everything else.
pub fn primary_modifier() -> Modifier {
    if cfg!(target_os = "macos") {
        Modifier::Command
    } else {
        Modifier::Control
    }
}
