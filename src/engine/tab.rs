use super::view::ProgressView;
use super::{ensure_not_empty, Engine};
use crate::error::PasteError;
use crate::input::{InputSink, Tap};
use crate::listener::TriggerEvents;
use crate::table::PasteSequence;
use tracing::{debug, info};

/// Tab-mode settings, fixed for the whole run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabRunConfig {
    pub clear_field_first: bool,
    pub tab_count: u32,
}

impl Default for TabRunConfig {
    fn default() -> Self {
        Self {
            clear_field_first: false,
            tab_count: 1,
        }
    }
}

impl Engine {
    /// Wait for one trigger press, then paste every value in order,
    /// tabbing `tab_count` times between values. Returns the number pasted.
    pub fn run_tab<S, T, V>(
        &self,
        sequence: &PasteSequence,
        config: TabRunConfig,
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

        view.show_line(&format!(
            "Move the cursor to the first field, then press {} once to start.",
            self.trigger
        ))?;
        triggers.next_trigger()?;
        drop(triggers);

        info!(
            total = sequence.len(),
            tab_count = config.tab_count,
            clear_field_first = config.clear_field_first,
            "tab run started"
        );
        view.show_line("\nPasting...")?;

        let total = sequence.len();
        for (index, value) in sequence.iter().enumerate() {
            if config.clear_field_first {
                self.clear_field(sink)?;
            }

            self.paste_value(sink, value)?;
            view.show_line(&format!(
                "  > [{}/{}] {}",
                index + 1,
                total,
                self.display.shorten(value)
            ))?;
            self.pacer.tab_settle()?;

            if index + 1 < total {
                for _ in 0..config.tab_count {
                    sink.tap(Tap::Tab)?;
                    self.pacer.key_settle()?;
                }
                self.pacer.tab_settle()?;
            }
            debug!(index, "tab item done");
        }

        info!(total, "tab run finished");
        view.show_line(&format!("\nAll {} items pasted.", total))?;
        Ok(total)
    }

    fn clear_field<S: InputSink>(&self, sink: &mut S) -> Result<(), PasteError> {
        let select_all = self.shortcuts.select_all;
        sink.chord(select_all.modifier, select_all.key)?;
        self.pacer.key_settle()?;
        sink.tap(Tap::Delete)?;
        self.pacer.key_settle()
    }
}
