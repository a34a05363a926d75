use error_stack::ResultExt;
use tracing::instrument;

use super::spreadsheet_manager::{SpreadsheetManager, SpreadsheetManagerError};
use crate::domain::sheets::RawGrid;

pub const READONLY_SCOPE: &str = "https://www.googleapis.com/auth/spreadsheets.readonly";

pub trait SpreadsheetRead {
    fn read_range(
        &self,
        range: &str,
    ) -> impl std::future::Future<Output = error_stack::Result<RawGrid, SpreadsheetManagerError>>
           + Send;
}

impl SpreadsheetRead for SpreadsheetManager {
    #[instrument]
    async fn read_range(
        &self,
        range: &str,
    ) -> error_stack::Result<RawGrid, SpreadsheetManagerError> {
        let response = self
            .hub
            .spreadsheets()
            .values_get(&self.config.spreadsheet_id, range)
            .add_scope(READONLY_SCOPE)
            .doit()
            .await
            .change_context_lazy(|| SpreadsheetManagerError::FailedToFetchRange(range.to_string()))?;

        let value_range = response.1;

        // Sheets omits `values` entirely for an empty range
        let rows = value_range.values.unwrap_or_default();
        tracing::debug!("Fetched {} rows from {}", rows.len(), range);

        Ok(rows)
    }
}
