use super::Grid;
use crate::utils::unicode::{pad_left_to_width, truncate_middle};
use std::iter;
use unicode_width::UnicodeWidthStr;

const ELLIPSIS: &str = "...";
const COLUMN_GAP: &str = "  ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewOptions {
    pub max_rows: usize,
    pub max_cols: usize,
    pub front_len: usize,
    pub back_len: usize,
}

impl Default for PreviewOptions {
    fn default() -> Self {
        Self {
            max_rows: 10,
            max_cols: 10,
            front_len: 12,
            back_len: 5,
        }
    }
}

/// Indices to show out of `total`, with `None` marking the elided middle.
fn visible_indices(total: usize, max: usize) -> Vec<Option<usize>> {
    if total <= max {
        return (0..total).map(Some).collect();
    }
    let head = max.div_ceil(2);
    let tail = max / 2;
    (0..head)
        .map(Some)
        .chain(iter::once(None))
        .chain((total - tail..total).map(Some))
        .collect()
}

fn label(index: Option<usize>) -> String {
    index.map_or_else(|| ELLIPSIS.to_string(), |i| i.to_string())
}

/// Render an aligned preview of the grid with row and column indices,
/// eliding the middle once `max_rows` / `max_cols` is exceeded.
pub fn render_preview(grid: &Grid, options: &PreviewOptions) -> String {
    let rows = visible_indices(grid.row_count(), options.max_rows);
    let cols = visible_indices(grid.column_count(), options.max_cols);

    let mut table: Vec<Vec<String>> = Vec::with_capacity(rows.len() + 1);

    let header = iter::once(String::new())
        .chain(cols.iter().map(|&c| label(c)))
        .collect();
    table.push(header);

    for &row in &rows {
        let line = iter::once(label(row))
            .chain(cols.iter().map(|&col| match (row, col) {
                (Some(r), Some(c)) => grid
                    .cell(r, c)
                    .map(|text| truncate_middle(text, options.front_len, options.back_len))
                    .unwrap_or_default(),
                _ => ELLIPSIS.to_string(),
            }))
            .collect();
        table.push(line);
    }

    let widths: Vec<usize> = (0..=cols.len())
        .map(|i| table.iter().map(|line| line[i].width()).max().unwrap_or(0))
        .collect();

    let mut lines: Vec<String> = table
        .iter()
        .map(|line| {
            line.iter()
                .zip(&widths)
                .map(|(text, &width)| pad_left_to_width(text, width))
                .collect::<Vec<_>>()
                .join(COLUMN_GAP)
                .trim_end()
                .to_string()
        })
        .collect();

    lines.push(format!(
        "[{} rows x {} columns]",
        grid.row_count(),
        grid.column_count()
    ));

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::parse_tsv;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_small_grid_preview() {
        let grid = parse_tsv("A\tB\n\tC").unwrap();
        let preview = render_preview(&grid, &PreviewOptions::default());
        assert_eq!(preview, "   0  1\n0  A  B\n1     C\n[2 rows x 2 columns]");
    }

    #[test]
    fn test_rows_beyond_limit_are_elided() {
        let text: String = (0..12).map(|i| format!("r{i}\n")).collect();
        let grid = parse_tsv(&text).unwrap();
        let options = PreviewOptions {
            max_rows: 4,
            ..PreviewOptions::default()
        };
        let preview = render_preview(&grid, &options);
        let lines: Vec<&str> = preview.lines().collect();

        // header, 2 head rows, ellipsis row, 2 tail rows, footer
        assert_eq!(lines.len(), 7);
        assert!(lines[1].contains("r0"));
        assert!(lines[3].contains("..."));
        assert!(lines[5].contains("r11"));
        assert_eq!(lines[6], "[12 rows x 1 columns]");
    }

    #[test]
    fn test_columns_beyond_limit_are_elided() {
        let grid = parse_tsv("a\tb\tc\td\te").unwrap();
        let options = PreviewOptions {
            max_cols: 2,
            ..PreviewOptions::default()
        };
        let preview = render_preview(&grid, &options);
        let first_row = preview.lines().nth(1).unwrap();
        assert_eq!(first_row, "0  a  ...  e");
    }

    #[test]
    fn test_long_cells_are_truncated() {
        let grid = parse_tsv("abcdefghijklmnopqrstuvwxyz").unwrap();
        let options = PreviewOptions {
            front_len: 3,
            back_len: 2,
            ..PreviewOptions::default()
        };
        let preview = render_preview(&grid, &options);
        assert!(preview.contains("abc...yz"));
    }

    #[test]
    fn test_visible_indices() {
        assert_eq!(visible_indices(3, 10), vec![Some(0), Some(1), Some(2)]);
        assert_eq!(
            visible_indices(6, 3),
            vec![Some(0), Some(1), None, Some(5)]
        );
    }
}
