use super::view::{PageLine, PageView, ProgressView};
use super::{ensure_not_empty, DisplayOptions, Engine};
use crate::error::PasteError;
use crate::input::InputSink;
use crate::listener::{TriggerEvents, TriggerKey};
use crate::table::PasteSequence;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Ready,
    Pasting,
    Done,
}

/// The contiguous slice of the sequence currently on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub start: usize,
    pub size: usize,
}

impl PageWindow {
    pub fn end(&self, total: usize) -> usize {
        (self.start + self.size).min(total)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageOptions {
    pub size: usize,
    /// Fraction of the page that may scroll past before a fresh page starts.
    pub refresh_ratio: f64,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            size: 20,
            refresh_ratio: 0.75,
        }
    }
}

impl PageOptions {
    pub fn refresh_threshold(&self) -> usize {
        let size = self.size.max(1);
        let raw = (size as f64 * self.refresh_ratio).floor() as usize;
        raw.clamp(1, size)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerOutcome {
    Advanced,
    Finished,
}

/// Manual-mode state: one value pasted per trigger press.
#[derive(Debug)]
pub struct ManualSession<'a> {
    sequence: &'a PasteSequence,
    cursor: usize,
    page: PageWindow,
    refresh_threshold: usize,
    phase: Phase,
}

impl<'a> ManualSession<'a> {
    pub fn new(sequence: &'a PasteSequence, options: PageOptions) -> Self {
        Self {
            sequence,
            cursor: 0,
            page: PageWindow {
                start: 0,
                size: options.size.max(1),
            },
            refresh_threshold: options.refresh_threshold(),
            phase: if sequence.is_empty() {
                Phase::Done
            } else {
                Phase::Idle
            },
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn page(&self) -> PageWindow {
        self.page
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_done(&self) -> bool {
        self.phase == Phase::Done
    }

    /// First render happened; wait for triggers from here on.
    pub fn begin(&mut self) {
        if self.phase == Phase::Idle {
            self.phase = Phase::Ready;
        }
    }

    /// Paste the value under the cursor and advance.
    ///
    /// The press is consumed even when the sink fails: the cursor moves on
    /// and the error is returned afterwards.
    pub fn on_trigger<S: InputSink>(
        &mut self,
        engine: &Engine,
        sink: &mut S,
    ) -> Result<TriggerOutcome, PasteError> {
        let Some(value) = self.sequence.get(self.cursor) else {
            self.phase = Phase::Done;
            return Ok(TriggerOutcome::Finished);
        };
        if self.phase == Phase::Done {
            return Ok(TriggerOutcome::Finished);
        }

        self.phase = Phase::Pasting;
        let pasted = engine.paste_value(sink, value);
        self.cursor += 1;
        debug!(cursor = self.cursor, total = self.sequence.len(), "manual paste");

        let outcome = if self.cursor == self.sequence.len() {
            self.phase = Phase::Done;
            TriggerOutcome::Finished
        } else {
            self.phase = Phase::Ready;
            if self.cursor - self.page.start >= self.refresh_threshold {
                self.page.start = self.cursor;
                debug!(start = self.page.start, "page advanced");
            }
            TriggerOutcome::Advanced
        };

        pasted?;
        Ok(outcome)
    }

    pub fn page_view(&self, trigger: TriggerKey, display: &DisplayOptions) -> PageView {
        let total = self.sequence.len();
        let width = total.to_string().len();

        let header = format!(
            "[{}/{}] Press {} to paste the next item. Press Ctrl+C to exit.",
            self.cursor, total, trigger
        );

        let lines = (self.page.start..self.page.end(total))
            .filter_map(|index| {
                self.sequence.get(index).map(|value| PageLine {
                    text: format!("{:>width$}. {}", index + 1, display.shorten(value)),
                    is_cursor: index == self.cursor,
                })
            })
            .collect();

        PageView { header, lines }
    }
}

impl Engine {
    /// Paste one value per trigger press until the sequence is exhausted.
    /// Returns how many values were pasted.
    pub fn run_manual<S, T, V>(
        &self,
        sequence: &PasteSequence,
        options: PageOptions,
        sink: &mut S,
        mut triggers: T,
        view: &mut V,
    ) -> Result<usize, PasteError>
    where
        S: InputSink,
        T: TriggerEvents,
        V: ProgressView,
    {
        ensure_not_empty(sequence)?;

        let mut session = ManualSession::new(sequence, options);
        view.show_page(&session.page_view(self.trigger, &self.display))?;
        session.begin();
        info!(total = sequence.len(), trigger = %self.trigger, "manual run ready");

        while !session.is_done() {
            let step = triggers
                .next_trigger()
                .and_then(|()| session.on_trigger(self, &mut *sink));

            match step {
                Ok(TriggerOutcome::Advanced) => {
                    view.show_page(&session.page_view(self.trigger, &self.display))?;
                }
                Ok(TriggerOutcome::Finished) => {}
                Err(e) => {
                    warn!(
                        pasted = session.cursor(),
                        total = sequence.len(),
                        error = %e,
                        "manual run stopped"
                    );
                    return Err(e);
                }
            }
        }

        drop(triggers);
        info!(pasted = session.cursor(), "manual run finished");
        view.show_line(&format!("\nAll {} items pasted!", session.cursor()))?;
        Ok(session.cursor())
    }
}
