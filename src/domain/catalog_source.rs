use thiserror::Error;

use crate::domain::catalog::CatalogList;
use crate::domain::sheets::RawGrid;

#[derive(Error, Debug)]
pub enum CatalogSourceError {
    #[error("Failed to fetch rows of the {0} list")]
    FetchRowsError(CatalogList),
}

#[async_trait::async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetches the raw rows of a list, header row first. An empty range yields an empty grid.
    async fn fetch_rows(
        &self,
        list: CatalogList,
    ) -> error_stack::Result<RawGrid, CatalogSourceError>;
}
