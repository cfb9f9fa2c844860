//! Test doubles for the desktop-facing seams.

use crate::engine::{DisplayOptions, Engine, PageView, Pacer, ProgressView, Timing};
use crate::error::PasteError;
use crate::input::{InputSink, Modifier, Shortcuts, Tap};
use crate::interrupt::InterruptFlag;
use crate::listener::{TriggerEvents, TriggerKey};
use crate::table::{parse_tsv, Grid, TableSource};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkOp {
    SetClipboard(String),
    Chord(Modifier, Tap),
    Tap(Tap),
}

#[derive(Debug, Default)]
pub struct RecordingSink {
    pub ops: Vec<SinkOp>,
    pub fail_chords: bool,
    /// Raise this flag once the given number of operations is recorded,
    /// as if Ctrl+C arrived right after that operation.
    pub raise_after: Option<(usize, InterruptFlag)>,
}

impl RecordingSink {
    fn record(&mut self, op: SinkOp) {
        self.ops.push(op);
        if let Some((count, flag)) = &self.raise_after {
            if self.ops.len() == *count {
                flag.raise();
            }
        }
    }

    pub fn clipboard_writes(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                SinkOp::SetClipboard(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl InputSink for RecordingSink {
    fn set_clipboard(&mut self, text: &str) -> Result<(), PasteError> {
        self.record(SinkOp::SetClipboard(text.to_string()));
        Ok(())
    }

    fn chord(&mut self, modifier: Modifier, key: Tap) -> Result<(), PasteError> {
        self.record(SinkOp::Chord(modifier, key));
        if self.fail_chords {
            return Err(PasteError::Input("target refused input".to_string()));
        }
        Ok(())
    }

    fn tap(&mut self, key: Tap) -> Result<(), PasteError> {
        self.record(SinkOp::Tap(key));
        Ok(())
    }
}

/// Clipboard stand-in holding fixed text.
pub struct TextTableSource(pub String);

impl TableSource for TextTableSource {
    fn extract(&mut self) -> Result<Grid, PasteError> {
        parse_tsv(&self.0)
    }
}

/// Serves a fixed number of presses, then behaves as if the operator hit Ctrl+C.
pub struct ScriptedTriggers {
    remaining: usize,
}

impl ScriptedTriggers {
    pub fn presses(count: usize) -> Self {
        Self { remaining: count }
    }
}

impl TriggerEvents for ScriptedTriggers {
    fn next_trigger(&mut self) -> Result<(), PasteError> {
        if self.remaining == 0 {
            return Err(PasteError::Interrupted);
        }
        self.remaining -= 1;
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct RecordingView {
    pub pages: Vec<PageView>,
    pub lines: Vec<String>,
}

impl ProgressView for RecordingView {
    fn show_page(&mut self, page: &PageView) -> Result<(), PasteError> {
        self.pages.push(page.clone());
        Ok(())
    }

    fn show_line(&mut self, text: &str) -> Result<(), PasteError> {
        self.lines.push(text.to_string());
        Ok(())
    }
}

/// Engine with zero delays and Ctrl-based shortcuts on every platform.
pub fn test_engine() -> Engine {
    Engine {
        trigger: TriggerKey::default(),
        shortcuts: Shortcuts::with_modifier(Modifier::Control),
        display: DisplayOptions::default(),
        pacer: Pacer::new(Timing::immediate(), InterruptFlag::new()),
    }
}
