use super::{InputSink, Modifier, Tap};
use crate::error::PasteError;
use arboard::Clipboard;
use enigo::{Direction, Enigo, Key, Keyboard, Settings};
use tracing::{trace, warn};

/// Desktop input sink: clipboard writes through `arboard`, key events
/// through `enigo`.
///
/// The clipboard handle lives as long as the sink. On Linux the clipboard
/// contents are only served while their owner is alive.
pub struct EnigoSink {
    enigo: Enigo,
    clipboard: Clipboard,
}

impl EnigoSink {
    pub fn new() -> Result<Self, PasteError> {
        let enigo = Enigo::new(&Settings::default())
            .map_err(|e| PasteError::Input(format!("keyboard simulator unavailable: {e}")))?;
        let clipboard = Clipboard::new()
            .map_err(|e| PasteError::Clipboard(format!("clipboard not accessible: {e}")))?;
        Ok(Self { enigo, clipboard })
    }
}

fn modifier_key(modifier: Modifier) -> Key {
    match modifier {
        Modifier::Control => Key::Control,
        Modifier::Command => Key::Meta,
    }
}

fn tap_key(tap: Tap) -> Key {
    match tap {
        Tap::Char(c) => Key::Unicode(c),
        Tap::Tab => Key::Tab,
        Tap::Delete => Key::Delete,
    }
}

/// Raw key events, one press, release or click at a time.
trait KeyDriver {
    fn send(&mut self, key: Key, direction: Direction) -> Result<(), PasteError>;
}

impl KeyDriver for Enigo {
    fn send(&mut self, key: Key, direction: Direction) -> Result<(), PasteError> {
        self.key(key, direction)
            .map_err(|e| PasteError::Input(format!("could not send {direction:?} for {key:?}: {e}")))
    }
}

/// A modifier held down until this guard is dropped.
struct HeldModifier<'a, K: KeyDriver> {
    keys: &'a mut K,
    key: Key,
}

impl<'a, K: KeyDriver> HeldModifier<'a, K> {
    fn press(keys: &'a mut K, key: Key) -> Result<Self, PasteError> {
        keys.send(key, Direction::Press)?;
        Ok(Self { keys, key })
    }

    fn click(&mut self, key: Key) -> Result<(), PasteError> {
        self.keys.send(key, Direction::Click)
    }
}

impl<K: KeyDriver> Drop for HeldModifier<'_, K> {
    fn drop(&mut self) {
        if let Err(e) = self.keys.send(self.key, Direction::Release) {
            warn!(key = ?self.key, error = %e, "failed to release modifier");
        }
    }
}

fn send_chord<K: KeyDriver>(keys: &mut K, modifier: Key, key: Key) -> Result<(), PasteError> {
    let mut held = HeldModifier::press(keys, modifier)?;
    held.click(key)
}

impl InputSink for EnigoSink {
    fn set_clipboard(&mut self, text: &str) -> Result<(), PasteError> {
        self.clipboard
            .set_text(text)
            .map_err(|e| PasteError::Clipboard(e.to_string()))?;
        trace!(chars = text.chars().count(), "clipboard updated");
        Ok(())
    }

    fn chord(&mut self, modifier: Modifier, key: Tap) -> Result<(), PasteError> {
        send_chord(&mut self.enigo, modifier_key(modifier), tap_key(key))?;
        trace!(%modifier, ?key, "chord sent");
        Ok(())
    }

    fn tap(&mut self, key: Tap) -> Result<(), PasteError> {
        self.enigo.send(tap_key(key), Direction::Click)?;
        trace!(?key, "key tapped");
        Ok(())
    }
}
