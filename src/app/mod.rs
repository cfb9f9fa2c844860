pub mod mode;

pub use mode::Mode;

use crate::engine::{Engine, PageOptions, ProgressView, TabRunConfig};
use crate::error::PasteError;
use crate::input::{EnigoSink, InputSink};
use crate::interrupt::InterruptFlag;
use crate::listener::{GlobalKeyListener, TriggerEvents, TriggerKey};
use crate::prompt;
use crate::table::{flatten, render_preview, PreviewOptions, TableSource};
use anyhow::Result;
use tracing::info;

/// Answers the questions asked before a run starts.
pub trait Operator {
    fn choose_mode(&mut self) -> Result<Mode>;
    fn tab_config(&mut self, defaults: TabRunConfig) -> Result<TabRunConfig>;
}

/// Uses values fixed on the command line and prompts for the rest.
#[derive(Debug, Default)]
pub struct PromptOperator {
    pub mode: Option<Mode>,
    pub tab: Option<TabRunConfig>,
}

impl Operator for PromptOperator {
    fn choose_mode(&mut self) -> Result<Mode> {
        match self.mode {
            Some(mode) => Ok(mode),
            None => prompt::select_mode(),
        }
    }

    fn tab_config(&mut self, defaults: TabRunConfig) -> Result<TabRunConfig> {
        match self.tab {
            Some(config) => Ok(config),
            None => prompt::tab_run_config(defaults),
        }
    }
}

/// Access to the machine's keyboard and clipboard.
pub trait Desktop {
    type Sink: InputSink;
    type Triggers: TriggerEvents;

    fn input_sink(&mut self) -> Result<Self::Sink, PasteError>;
    fn attach_listener(&mut self, trigger: TriggerKey) -> Result<Self::Triggers, PasteError>;
}

pub struct SystemDesktop {
    pub interrupt: InterruptFlag,
}

impl Desktop for SystemDesktop {
    type Sink = EnigoSink;
    type Triggers = GlobalKeyListener;

    fn input_sink(&mut self) -> Result<EnigoSink, PasteError> {
        EnigoSink::new()
    }

    fn attach_listener(&mut self, trigger: TriggerKey) -> Result<GlobalKeyListener, PasteError> {
        GlobalKeyListener::attach(trigger, self.interrupt.clone())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SessionSettings {
    pub page: PageOptions,
    pub preview: PreviewOptions,
    pub tab_defaults: TabRunConfig,
}

/// Show what the clipboard holds without pasting anything.
pub fn preview_only<Src, V>(source: &mut Src, preview: &PreviewOptions, view: &mut V) -> Result<()>
where
    Src: TableSource,
    V: ProgressView,
{
    let grid = source.extract()?;
    show_preview(&render_preview(&grid, preview), view)?;
    let count = flatten(&grid).len();
    view.show_line(&format!("{} non-empty cells would be pasted.", count))?;
    Ok(())
}

fn show_preview<V: ProgressView>(table: &str, view: &mut V) -> Result<(), PasteError> {
    view.show_line("--- Clipboard data preview ---")?;
    view.show_line(table)?;
    view.show_line("------------------------------\n")
}

/// One complete run: read the table, pick a mode, paste.
/// Returns how many values were pasted.
pub fn run_session<Src, Op, D, V>(
    source: &mut Src,
    operator: &mut Op,
    desktop: &mut D,
    engine: &Engine,
    settings: &SessionSettings,
    view: &mut V,
) -> Result<usize>
where
    Src: TableSource,
    Op: Operator,
    D: Desktop,
    V: ProgressView,
{
    let grid = source.extract()?;
    show_preview(&render_preview(&grid, &settings.preview), view)?;

    let sequence = flatten(&grid);
    if sequence.is_empty() {
        return Err(PasteError::SourceUnavailable(
            "every copied cell is empty".to_string(),
        )
        .into());
    }
    info!(values = sequence.len(), "paste sequence built");

    let mode = operator.choose_mode()?;
    let tab_config = match mode {
        Mode::Tab => Some(operator.tab_config(settings.tab_defaults)?),
        Mode::Manual => None,
    };
    info!(%mode, "mode selected");

    let _armed = engine.pacer.interrupt().arm();
    let mut sink = desktop.input_sink()?;
    let triggers = desktop.attach_listener(engine.trigger)?;

    let pasted = match tab_config {
        None => engine.run_manual(&sequence, settings.page, &mut sink, triggers, view)?,
        Some(config) => {
            view.show_line(&format!("\n--- {} mode ---", mode))?;
            engine.run_tab(&sequence, config, &mut sink, triggers, view)?
        }
    };

    Ok(pasted)
}
