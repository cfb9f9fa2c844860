use crate::error::PasteError;
use crossterm::{
    cursor::MoveTo,
    execute,
    style::Stylize,
    terminal::{Clear, ClearType},
};
use std::fmt;
use std::io::{self, Write};

pub const CURSOR_MARKER: &str = "-> ";
pub const NEUTRAL_MARKER: &str = "   ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLine {
    pub text: String,
    pub is_cursor: bool,
}

/// One screenful of manual-mode progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    pub header: String,
    pub lines: Vec<PageLine>,
}

impl fmt::Display for PageView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.header)?;
        for line in &self.lines {
            let marker = if line.is_cursor { CURSOR_MARKER } else { NEUTRAL_MARKER };
            write!(f, "\n{}{}", marker, line.text)?;
        }
        Ok(())
    }
}

/// Where run progress goes.
pub trait ProgressView {
    /// Replace whatever page was shown before.
    fn show_page(&mut self, page: &PageView) -> Result<(), PasteError>;

    fn show_line(&mut self, text: &str) -> Result<(), PasteError>;
}

fn terminal_error(e: io::Error) -> PasteError {
    PasteError::Terminal(e.to_string())
}

pub fn clear_screen() -> Result<(), PasteError> {
    execute!(io::stdout(), Clear(ClearType::All), MoveTo(0, 0)).map_err(terminal_error)
}

/// Progress on stdout. Pages are redrawn on a cleared screen with the
/// cursor line highlighted.
#[derive(Debug, Default)]
pub struct TerminalView;

impl ProgressView for TerminalView {
    fn show_page(&mut self, page: &PageView) -> Result<(), PasteError> {
        clear_screen()?;
        let mut stdout = io::stdout();
        writeln!(stdout, "{}", page.header.as_str().bold()).map_err(terminal_error)?;
        for line in &page.lines {
            if line.is_cursor {
                let text = format!("{}{}", CURSOR_MARKER, line.text);
                writeln!(stdout, "{}", text.cyan().bold()).map_err(terminal_error)?;
            } else {
                writeln!(stdout, "{}{}", NEUTRAL_MARKER, line.text).map_err(terminal_error)?;
            }
        }
        stdout.flush().map_err(terminal_error)
    }

    fn show_line(&mut self, text: &str) -> Result<(), PasteError> {
        let mut stdout = io::stdout();
        writeln!(stdout, "{}", text).map_err(terminal_error)?;
        stdout.flush().map_err(terminal_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_page_display_aligns_markers() {
        let page = PageView {
            header: "header".to_string(),
            lines: vec![
                PageLine {
                    text: "1  A".to_string(),
                    is_cursor: false,
                },
                PageLine {
                    text: "2  B".to_string(),
                    is_cursor: true,
                },
            ],
        };
        assert_eq!(page.to_string(), "header\n   1  A\n-> 2  B");
        assert_eq!(CURSOR_MARKER.len(), NEUTRAL_MARKER.len());
    }
}
