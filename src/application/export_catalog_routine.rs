use std::sync::Arc;

use error_stack::ResultExt;
use strum::IntoEnumIterator;
use tracing::instrument;

use crate::domain::catalog::{CatalogEntry, CatalogList};
use crate::domain::catalog_source::CatalogSource;
use crate::domain::catalog_writer::CatalogWriter;
use crate::domain::normalizer::normalize_rows;
use crate::domain::routine::{Routine, RoutineError};

/// Exports every list in two phases: all lists are fetched and normalized
/// before the first file is written, so a failed fetch leaves no output.
pub struct ExportCatalogRoutine {
    lists: Vec<CatalogList>,
    source: Arc<dyn CatalogSource>,
    writer: Arc<dyn CatalogWriter>,
}

impl ExportCatalogRoutine {
    pub fn new(source: Arc<dyn CatalogSource>, writer: Arc<dyn CatalogWriter>) -> Self {
        Self {
            lists: CatalogList::iter().collect(),
            source,
            writer,
        }
    }

    #[instrument(skip(self))]
    async fn fetch_list(
        &self,
        list: CatalogList,
    ) -> error_stack::Result<Vec<CatalogEntry>, RoutineError> {
        tracing::info!("{}: ☁️  Fetching {}", list, list.range());
        let grid = self
            .source
            .fetch_rows(list)
            .await
            .change_context(RoutineError::FetchFailed(list))?;

        let data_rows = grid.len().saturating_sub(1);
        let entries = normalize_rows(&grid);
        tracing::info!(
            "{}: 📋 {} entries from {} data rows ({} blank rows dropped)",
            list,
            entries.len(),
            data_rows,
            data_rows - entries.len()
        );

        Ok(entries)
    }

    #[instrument(skip(self, entries))]
    fn write_list(
        &self,
        list: CatalogList,
        entries: &[CatalogEntry],
    ) -> error_stack::Result<(), RoutineError> {
        let path = self
            .writer
            .write(list, entries)
            .change_context(RoutineError::ExportFailed(list))?;

        tracing::info!("{}: ✅ Wrote {}", list, path.display());
        Ok(())
    }
}

#[async_trait::async_trait]
impl Routine for ExportCatalogRoutine {
    fn name(&self) -> &str {
        "ExportCatalogRoutine"
    }

    #[instrument(skip(self), name = "ExportCatalogRoutine::run")]
    async fn run(&self) -> error_stack::Result<(), RoutineError> {
        let mut fetched = Vec::with_capacity(self.lists.len());
        for &list in &self.lists {
            let entries = self.fetch_list(list).await?;
            fetched.push((list, entries));
        }

        for (list, entries) in &fetched {
            self.write_list(*list, entries)?;
        }

        Ok(())
    }
}
