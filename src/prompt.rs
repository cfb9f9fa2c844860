use crate::app::Mode;
use crate::engine::TabRunConfig;
use crate::error::PasteError;
use anyhow::Result;
use dialoguer::{Confirm, Input, Select};
use std::io::{self, Write};

/// Parse the tab-press count typed by the operator.
pub fn parse_tab_count(input: &str) -> Result<u32, PasteError> {
    let trimmed = input.trim();
    if trimmed.starts_with('-') {
        return Err(PasteError::InvalidConfiguration(
            "tab count cannot be negative".to_string(),
        ));
    }
    trimmed.parse::<u32>().map_err(|_| {
        PasteError::InvalidConfiguration(format!("'{}' is not a whole number", trimmed))
    })
}

/// Prompts read keys in raw mode, so Ctrl+C comes back as an interrupted
/// read instead of a signal.
fn prompt_error(e: dialoguer::Error) -> PasteError {
    match e {
        dialoguer::Error::IO(err) if err.kind() == io::ErrorKind::Interrupted => {
            PasteError::Interrupted
        }
        dialoguer::Error::IO(err) => PasteError::Terminal(err.to_string()),
    }
}

pub fn select_mode() -> Result<Mode> {
    let modes = [Mode::Manual, Mode::Tab];
    let labels: Vec<String> = modes.iter().map(|m| m.description().to_string()).collect();

    let choice = Select::new()
        .with_prompt("Choose a mode")
        .items(&labels[..])
        .default(0)
        .interact()
        .map_err(prompt_error)?;

    Ok(modes[choice])
}

/// Ask for the tab-mode settings, offering `defaults` as the preselected answers.
pub fn tab_run_config(defaults: TabRunConfig) -> Result<TabRunConfig> {
    let clear_field_first = Confirm::new()
        .with_prompt("Clear each field before pasting?")
        .default(defaults.clear_field_first)
        .interact()
        .map_err(prompt_error)?;

    let answer: String = Input::new()
        .with_prompt("Tab presses after each paste")
        .default(defaults.tab_count.to_string())
        .validate_with(|input: &String| -> Result<(), String> {
            parse_tab_count(input).map(|_| ()).map_err(|e| e.to_string())
        })
        .interact_text()
        .map_err(prompt_error)?;

    Ok(TabRunConfig {
        clear_field_first,
        tab_count: parse_tab_count(&answer)?,
    })
}

/// Hold the window open until the operator acknowledges.
pub fn wait_for_enter() -> Result<()> {
    print!("\nPress Enter to exit.");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(())
}
