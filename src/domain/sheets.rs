pub mod ranges;

/// A single cell as returned by the Sheets `values.get` endpoint.
pub type Cell = serde_json::Value;

/// Rows of cells, header row first. Rows may be shorter than the header.
pub type RawGrid = Vec<Vec<Cell>>;
