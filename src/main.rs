mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use grid_paste::app::{self, Mode, PromptOperator, SessionSettings, SystemDesktop};
use grid_paste::config::Config;
use grid_paste::engine::{clear_screen, Engine, Pacer, TabRunConfig, TerminalView};
use grid_paste::input::Shortcuts;
use grid_paste::interrupt::InterruptFlag;
use grid_paste::prompt;
use grid_paste::table::ClipboardTableSource;
use grid_paste::PasteError;
use std::process;
use tracing::debug;
use tracing_subscriber::{fmt, EnvFilter};

fn main() {
    let cli = Cli::parse();

    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let code = match run(cli) {
        Ok(()) => {
            println!("\nFinished.");
            0
        }
        Err(e) => report_failure(&e),
    };

    let _ = prompt::wait_for_enter();
    process::exit(code);
}

fn run(cli: Cli) -> Result<()> {
    let mut config = Config::load()?;
    if let Some(trigger) = cli.trigger {
        config.trigger_key = trigger;
    }
    config.validate()?;

    let interrupt = InterruptFlag::new();
    interrupt.install_ctrl_c_handler()?;

    if let Err(e) = clear_screen() {
        debug!(error = %e, "could not clear the screen");
    }
    println!("Spreadsheet range paster");
    println!("------------------------");

    let mut source = ClipboardTableSource;
    let mut view = TerminalView;

    let mut operator = match cli.command {
        Some(Commands::Preview) => {
            return app::preview_only(&mut source, &config.preview_options(), &mut view);
        }
        Some(Commands::Manual) => PromptOperator {
            mode: Some(Mode::Manual),
            tab: None,
        },
        Some(Commands::Tab { clear, tabs }) => PromptOperator {
            mode: Some(Mode::Tab),
            tab: tabs.map(|tab_count| TabRunConfig {
                clear_field_first: clear,
                tab_count,
            }),
        },
        None => PromptOperator::default(),
    };

    let engine = Engine {
        trigger: config.trigger()?,
        shortcuts: Shortcuts::for_current_platform(),
        display: config.display_options(),
        pacer: Pacer::new(config.timing(), interrupt.clone()),
    };
    let settings = SessionSettings {
        page: config.page_options(),
        preview: config.preview_options(),
        tab_defaults: config.tab_defaults(),
    };
    let mut desktop = SystemDesktop { interrupt };

    app::run_session(
        &mut source,
        &mut operator,
        &mut desktop,
        &engine,
        &settings,
        &mut view,
    )?;
    Ok(())
}

/// Tell the operator what went wrong and pick the exit status.
fn report_failure(e: &anyhow::Error) -> i32 {
    match e.downcast_ref::<PasteError>() {
        Some(PasteError::Interrupted) => {
            println!("\n\nInterrupted by user. Exiting...");
        }
        Some(err @ PasteError::SourceUnavailable(_)) => {
            println!("\nError: {}", err);
            println!("Copy a range of cells from your spreadsheet and try again.");
        }
        Some(err @ PasteError::ListenerAttach(_)) => {
            println!("\nError: {}", err);
            println!("The terminal may need accessibility / input-monitoring permission.");
        }
        Some(err) => {
            println!("\nError: {}", err);
        }
        None => {
            println!("\nUnexpected error: {:#}", e);
        }
    }

    e.downcast_ref::<PasteError>()
        .map(PasteError::exit_code)
        .unwrap_or(1)
}
