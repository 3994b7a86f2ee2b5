//! Tab-separated serialization of table selections
//!
//! Produces the text written to the system clipboard when the user copies
//! cells from the resource table: one leading line of column headers, then
//! one line per selected row, every line newline-terminated.

use crate::browser::SelectedCell;

/// Serializes a multi-cell selection to tab-separated, newline-delimited
/// text.
///
/// Cells are sorted by `(row, column)` first, so the result does not
/// depend on the traversal order of whichever table widget produced the
/// selection. The header line contains the labels of the columns present
/// in the selection; missing header labels serialize as empty fields.
///
/// An empty selection yields an empty string.
#[must_use]
pub fn serialize_selection(headers: &[String], cells: &[SelectedCell]) -> String {
    if cells.is_empty() {
        return String::new();
    }

    let mut ordered: Vec<&SelectedCell> = cells.iter().collect();
    ordered.sort_by_key(|cell| (cell.row, cell.column));

    // Header labels for the selected columns, in column order
    let mut columns: Vec<usize> = ordered.iter().map(|cell| cell.column).collect();
    columns.sort_unstable();
    columns.dedup();

    let mut out = String::new();
    let header_line: Vec<&str> = columns
        .iter()
        .map(|&col| headers.get(col).map_or("", String::as_str))
        .collect();
    out.push_str(&header_line.join("\t"));
    out.push('\n');

    let mut row_cells: Vec<&str> = Vec::new();
    let mut current_row = ordered[0].row;
    for cell in ordered {
        if cell.row != current_row {
            out.push_str(&row_cells.join("\t"));
            out.push('\n');
            row_cells.clear();
            current_row = cell.row;
        }
        row_cells.push(&cell.text);
    }
    out.push_str(&row_cells.join("\t"));
    out.push('\n');

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(row: usize, column: usize, text: &str) -> SelectedCell {
        SelectedCell {
            row,
            column,
            text: text.to_string(),
        }
    }

    fn headers() -> Vec<String> {
        vec!["Name".to_string(), "UUID".to_string()]
    }

    #[test]
    fn two_rows_two_columns() {
        let cells = vec![
            cell(0, 0, "alpha"),
            cell(0, 1, "u1"),
            cell(1, 0, "beta"),
            cell(1, 1, "u2"),
        ];
        assert_eq!(
            serialize_selection(&headers(), &cells),
            "Name\tUUID\nalpha\tu1\nbeta\tu2\n"
        );
    }

    #[test]
    fn unordered_input_serializes_the_same() {
        let cells = vec![
            cell(1, 1, "u2"),
            cell(0, 0, "alpha"),
            cell(1, 0, "beta"),
            cell(0, 1, "u1"),
        ];
        assert_eq!(
            serialize_selection(&headers(), &cells),
            "Name\tUUID\nalpha\tu1\nbeta\tu2\n"
        );
    }

    #[test]
    fn single_column_selection() {
        let cells = vec![cell(0, 1, "u1"), cell(1, 1, "u2")];
        assert_eq!(serialize_selection(&headers(), &cells), "UUID\nu1\nu2\n");
    }

    #[test]
    fn empty_selection_is_empty_string() {
        assert_eq!(serialize_selection(&headers(), &[]), "");
    }

    #[test]
    fn missing_header_label_is_blank() {
        let cells = vec![cell(0, 0, "alpha"), cell(0, 5, "stray")];
        assert_eq!(serialize_selection(&headers(), &cells), "Name\t\nalpha\tstray\n");
    }
}
