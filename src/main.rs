use std::sync::{Arc, Mutex};

use dvd_catalog_export::application::export_catalog_routine::ExportCatalogRoutine;
use dvd_catalog_export::domain::catalog_source::CatalogSource;
use dvd_catalog_export::domain::catalog_writer::CatalogWriter;
use dvd_catalog_export::domain::routine::Routine;
use dvd_catalog_export::infrastructure::catalog::json_catalog_writer::JsonCatalogWriter;
use dvd_catalog_export::infrastructure::catalog::spreadsheet_catalog_source::SpreadsheetCatalogSource;
use dvd_catalog_export::infrastructure::config::app_config::AppConfig;
use dvd_catalog_export::infrastructure::config::logging_config::LoggingConfig;
use dvd_catalog_export::infrastructure::sheets::spreadsheet_manager::SpreadsheetManager;
use dvd_catalog_export::prettyprint::PrettyFormatter;
use dvd_catalog_export::CatalogList;
use error_stack::ResultExt;
use strum::IntoEnumIterator;
use thiserror::Error;
use tracing::Instrument;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Registry};

#[derive(Error, Debug)]
enum AppError {
    #[error("Invalid configuration")]
    Config,
    #[error("Failed to set up logging")]
    Logging,
    #[error("Failed to connect to the spreadsheet")]
    Spreadsheet,
    #[error("Catalog export failed")]
    Export,
}

async fn run_export(config: AppConfig) -> error_stack::Result<(), AppError> {
    let spreadsheet_manager = Arc::new(
        SpreadsheetManager::new(config.sheets)
            .await
            .change_context(AppError::Spreadsheet)?,
    );

    let source: Arc<dyn CatalogSource> = Arc::new(SpreadsheetCatalogSource::new(Arc::clone(
        &spreadsheet_manager,
    )));
    let writer: Arc<dyn CatalogWriter> = Arc::new(JsonCatalogWriter::new(&config.output));
    let routine = ExportCatalogRoutine::new(source, writer);

    let result = routine
        .run()
        .instrument(tracing::span!(
            tracing::Level::INFO,
            "routine",
            routine = routine.name(),
            lists = ?CatalogList::iter().collect::<Vec<_>>()
        ))
        .await;

    match result {
        Ok(()) => {
            tracing::info!("✅ {}: OK", routine.name());
            Ok(())
        }
        Err(report) => {
            tracing::error!("❌ {}: failed", routine.name());
            Err(report.change_context(AppError::Export))
        }
    }
}

fn setup_tracing(config: &LoggingConfig) -> error_stack::Result<(), AppError> {
    let stderr_layer = tracing_subscriber::fmt::layer()
        .event_format(PrettyFormatter::new(true))
        .with_writer(std::io::stderr);

    let log_file_layer = match &config.log_file {
        Some(path) => {
            let file = std::fs::File::create(path)
                .change_context(AppError::Logging)
                .attach_printable_lazy(|| format!("log file: {}", path.display()))?;
            Some(
                tracing_subscriber::fmt::layer()
                    .event_format(PrettyFormatter::new(false))
                    .with_writer(Mutex::new(file))
                    .with_ansi(false),
            )
        }
        None => None,
    };

    Registry::default()
        .with(
            tracing_subscriber::filter::Targets::new()
                .with_target("dvd_catalog_export", config.level),
        )
        .with(log_file_layer)
        .with(stderr_layer)
        .try_init()
        .change_context(AppError::Logging)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> error_stack::Result<(), AppError> {
    let config = AppConfig::load().change_context(AppError::Config)?;
    setup_tracing(&config.logging)?;

    tracing::info!(
        "Exporting spreadsheet {} into {}",
        config.sheets.spreadsheet_id,
        config.output.output_dir.display()
    );

    run_export(config).await
}
