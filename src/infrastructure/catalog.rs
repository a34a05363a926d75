pub mod json_catalog_writer;
pub mod spreadsheet_catalog_source;
