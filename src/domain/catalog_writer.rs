use std::path::PathBuf;

use thiserror::Error;

use crate::domain::catalog::{CatalogEntry, CatalogList};

#[derive(Error, Debug)]
pub enum CatalogWriterError {
    #[error("Failed to create output directory")]
    CreateDirError,
    #[error("Failed to serialize the {0} list")]
    SerializeError(CatalogList),
    #[error("Failed to write the {0} list")]
    WriteError(CatalogList),
}

pub trait CatalogWriter: Send + Sync {
    /// Persists the entries of a list, replacing any previous export. Returns where they were written.
    fn write(
        &self,
        list: CatalogList,
        entries: &[CatalogEntry],
    ) -> error_stack::Result<PathBuf, CatalogWriterError>;
}
