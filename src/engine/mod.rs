//! Paste automation: the manual trigger-per-value state machine and the
//! automatic tab-sequence driver, plus the timing both share.

pub mod manual;
pub mod tab;
pub mod view;

pub use manual::{ManualSession, PageOptions, PageWindow, Phase, TriggerOutcome};
pub use tab::TabRunConfig;
pub use view::{clear_screen, PageLine, PageView, ProgressView, TerminalView};

use crate::error::PasteError;
use crate::input::{InputSink, Shortcuts};
use crate::interrupt::InterruptFlag;
use crate::listener::TriggerKey;
use crate::table::PasteSequence;
use crate::utils::unicode::truncate_middle;
use std::thread;
use std::time::Duration;

/// Clipboard propagation and inter-tap delay.
pub const KEY_PRESS_DELAY: Duration = Duration::from_millis(100);
/// Post-paste and inter-item delay in tab mode.
pub const TAB_PRESS_DELAY: Duration = Duration::from_millis(200);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub key_press_delay: Duration,
    pub tab_press_delay: Duration,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            key_press_delay: KEY_PRESS_DELAY,
            tab_press_delay: TAB_PRESS_DELAY,
        }
    }
}

impl Timing {
    pub fn immediate() -> Self {
        Self {
            key_press_delay: Duration::ZERO,
            tab_press_delay: Duration::ZERO,
        }
    }
}

/// Blocking settle waits. An interrupt raised during a wait surfaces as
/// soon as the wait ends.
#[derive(Debug, Clone)]
pub struct Pacer {
    timing: Timing,
    interrupt: InterruptFlag,
}

impl Pacer {
    pub fn new(timing: Timing, interrupt: InterruptFlag) -> Self {
        Self { timing, interrupt }
    }

    pub fn interrupt(&self) -> &InterruptFlag {
        &self.interrupt
    }

    pub fn key_settle(&self) -> Result<(), PasteError> {
        self.settle(self.timing.key_press_delay)
    }

    pub fn tab_settle(&self) -> Result<(), PasteError> {
        self.settle(self.timing.tab_press_delay)
    }

    fn settle(&self, delay: Duration) -> Result<(), PasteError> {
        if !delay.is_zero() {
            thread::sleep(delay);
        }
        self.interrupt.check()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayOptions {
    pub front_len: usize,
    pub back_len: usize,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            front_len: 20,
            back_len: 10,
        }
    }
}

impl DisplayOptions {
    pub fn shorten(&self, text: &str) -> String {
        truncate_middle(text, self.front_len, self.back_len)
    }
}

/// Everything a paste run needs besides the values, the sink and the key source.
#[derive(Debug, Clone)]
pub struct Engine {
    pub trigger: TriggerKey,
    pub shortcuts: Shortcuts,
    pub display: DisplayOptions,
    pub pacer: Pacer,
}

impl Engine {
    /// Write `text` to the clipboard, let it settle, then send the paste shortcut.
    fn paste_value<S: InputSink>(&self, sink: &mut S, text: &str) -> Result<(), PasteError> {
        sink.set_clipboard(text)?;
        self.pacer.key_settle()?;
        sink.chord(self.shortcuts.paste.modifier, self.shortcuts.paste.key)
    }
}

fn ensure_not_empty(sequence: &PasteSequence) -> Result<(), PasteError> {
    if sequence.is_empty() {
        return Err(PasteError::SourceUnavailable(
            "nothing to paste, every cell is empty".to_string(),
        ));
    }
    Ok(())
}
