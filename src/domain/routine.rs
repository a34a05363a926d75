use thiserror::Error;

use crate::domain::catalog::CatalogList;

#[derive(Error, Debug)]
pub enum RoutineError {
    #[error("Could not fetch the {0} list from the spreadsheet")]
    FetchFailed(CatalogList),
    #[error("Could not export the {0} list")]
    ExportFailed(CatalogList),
}

/// A single step of a run. Routines are executed one after another and the
/// first failure stops the run.
#[async_trait::async_trait]
pub trait Routine: Send + Sync {
    fn name(&self) -> &str;

    async fn run(&self) -> error_stack::Result<(), RoutineError>;
}
