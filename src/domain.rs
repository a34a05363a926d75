pub mod catalog;
pub mod catalog_source;
pub mod catalog_writer;
pub mod normalizer;
pub mod routine;
pub mod sheets;
