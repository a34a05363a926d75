use std::collections::HashMap;

use serde_json::Value;

use crate::domain::catalog::CatalogEntry;
use crate::domain::sheets::Cell;

pub const CATEGORY_HEADER: &str = "Category";
pub const TITLE_HEADER: &str = "Title";
pub const DIRECTOR_HEADER: &str = "Director";

/// Converts a raw grid (header row first) into catalog entries.
///
/// Blank data rows are dropped, every other row yields exactly one entry in
/// its original position. Columns are matched by exact header text; when a
/// header name repeats, the rightmost column wins.
pub fn normalize_rows(grid: &[Vec<Cell>]) -> Vec<CatalogEntry> {
    let Some((headers, rows)) = grid.split_first() else {
        return vec![];
    };

    let columns = header_columns(headers);

    rows.iter()
        .filter(|row| !is_blank_row(row))
        .map(|row| CatalogEntry {
            category: column_text(&columns, row, CATEGORY_HEADER),
            director: column_text(&columns, row, DIRECTOR_HEADER),
            title: column_text(&columns, row, TITLE_HEADER),
        })
        .collect()
}

/// A row is blank when all of its cells are whitespace-only strings.
/// Non-string cells always count as content.
pub fn is_blank_row(row: &[Cell]) -> bool {
    row.iter().all(|cell| match cell {
        Value::String(text) => text.trim().is_empty(),
        _ => false,
    })
}

fn header_columns(headers: &[Cell]) -> HashMap<&str, usize> {
    let mut columns = HashMap::new();
    for (index, header) in headers.iter().enumerate() {
        if let Value::String(name) = header {
            columns.insert(name.as_str(), index);
        }
    }
    columns
}

fn column_text(columns: &HashMap<&str, usize>, row: &[Cell], header: &str) -> String {
    columns
        .get(header)
        .and_then(|&index| row.get(index))
        .map(cell_text)
        .unwrap_or_default()
}

fn cell_text(cell: &Cell) -> String {
    match cell {
        Value::String(text) => text.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
