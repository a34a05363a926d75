use std::sync::Arc;

use error_stack::ResultExt;

use crate::domain::catalog::CatalogList;
use crate::domain::catalog_source::{CatalogSource, CatalogSourceError};
use crate::domain::sheets::RawGrid;
use crate::infrastructure::sheets::spreadsheet_manager::SpreadsheetManager;
use crate::infrastructure::sheets::spreadsheet_read::SpreadsheetRead;

pub struct SpreadsheetCatalogSource {
    pub spreadsheet_manager: Arc<SpreadsheetManager>,
}

impl SpreadsheetCatalogSource {
    pub fn new(spreadsheet_manager: Arc<SpreadsheetManager>) -> Self {
        Self {
            spreadsheet_manager,
        }
    }
}

#[async_trait::async_trait]
impl CatalogSource for SpreadsheetCatalogSource {
    async fn fetch_rows(
        &self,
        list: CatalogList,
    ) -> error_stack::Result<RawGrid, CatalogSourceError> {
        self.spreadsheet_manager
            .read_range(list.range())
            .await
            .change_context(CatalogSourceError::FetchRowsError(list))
    }
}
