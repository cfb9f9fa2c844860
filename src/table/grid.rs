use crate::error::PasteError;

/// Rectangular block of cells copied from a spreadsheet. `None` marks an
/// empty cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<Option<String>>>,
    column_count: usize,
}

impl Grid {
    /// Build a grid from possibly ragged rows, padding short rows with empty cells.
    pub fn from_rows(mut rows: Vec<Vec<Option<String>>>) -> Self {
        let column_count = rows.iter().map(Vec::len).max().unwrap_or(0);
        for row in &mut rows {
            row.resize(column_count, None);
        }
        Self { rows, column_count }
    }

    pub fn rows(&self) -> &[Vec<Option<String>>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.column_count
    }

    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.rows.get(row)?.get(column)?.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() || self.column_count == 0
    }
}

/// Ordered values to paste, built once per run from a [`Grid`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PasteSequence(Vec<String>);

impl PasteSequence {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl From<Vec<String>> for PasteSequence {
    fn from(values: Vec<String>) -> Self {
        Self(values)
    }
}

/// Row-major walk over the grid, skipping empty cells. Text is kept verbatim.
pub fn flatten(grid: &Grid) -> PasteSequence {
    let values = grid
        .rows()
        .iter()
        .flat_map(|row| row.iter().flatten().cloned())
        .collect();
    PasteSequence(values)
}

/// Parse spreadsheet clipboard text: tab-separated cells, newline-separated
/// rows. Cells that start with `"` are quoted and may contain tabs and line
/// breaks, with `""` standing for a literal quote.
pub fn parse_tsv(text: &str) -> Result<Grid, PasteError> {
    if text.trim().is_empty() {
        return Err(PasteError::SourceUnavailable(
            "clipboard holds no text".to_string(),
        ));
    }
    if ends_inside_quotes(text) {
        return Err(PasteError::SourceUnavailable(
            "unterminated quoted cell".to_string(),
        ));
    }

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut rows: Vec<Vec<Option<String>>> = Vec::new();
    for (line, result) in reader.records().enumerate() {
        let record = result.map_err(|e| {
            PasteError::SourceUnavailable(format!("row {}: {}", line + 1, e))
        })?;
        if record.len() == 1 && record[0].is_empty() {
            continue;
        }
        rows.push(
            record
                .iter()
                .map(|field| (!field.is_empty()).then(|| field.to_string()))
                .collect(),
        );
    }

    let grid = Grid::from_rows(rows);
    if grid.is_empty() {
        return Err(PasteError::SourceUnavailable(
            "no rows found in clipboard text".to_string(),
        ));
    }

    Ok(grid)
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum QuoteState {
    FieldStart,
    Unquoted,
    Quoted,
    QuoteInQuoted,
}

/// `csv` reads an unclosed quote through to the end of input without
/// complaint, so the quote state is followed here on its own.
fn ends_inside_quotes(text: &str) -> bool {
    let mut state = QuoteState::FieldStart;
    for byte in text.bytes() {
        state = match (state, byte) {
            (QuoteState::Quoted, b'"') => QuoteState::QuoteInQuoted,
            (QuoteState::Quoted, _) => QuoteState::Quoted,
            (QuoteState::FieldStart | QuoteState::QuoteInQuoted, b'"') => QuoteState::Quoted,
            (_, b'\t' | b'\n' | b'\r') => QuoteState::FieldStart,
            _ => QuoteState::Unquoted,
        };
    }
    state == QuoteState::Quoted
}
