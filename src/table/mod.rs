pub mod grid;
pub mod preview;

pub use grid::{flatten, parse_tsv, Grid, PasteSequence};
pub use preview::{render_preview, PreviewOptions};

use crate::error::PasteError;
use arboard::Clipboard;
use tracing::debug;

/// Where the table to paste comes from.
pub trait TableSource {
    fn extract(&mut self) -> Result<Grid, PasteError>;
}

/// Reads the spreadsheet block the operator copied onto the system clipboard.
pub struct ClipboardTableSource;

impl TableSource for ClipboardTableSource {
    fn extract(&mut self) -> Result<Grid, PasteError> {
        let mut clipboard = Clipboard::new()
            .map_err(|e| PasteError::SourceUnavailable(format!("clipboard not accessible: {e}")))?;
        let text = clipboard
            .get_text()
            .map_err(|e| PasteError::SourceUnavailable(format!("no text on clipboard: {e}")))?;
        debug!(bytes = text.len(), "read clipboard text");

        let grid = parse_tsv(&text)?;
        debug!(
            rows = grid.row_count(),
            columns = grid.column_count(),
            "parsed clipboard table"
        );
        Ok(grid)
    }
}
