use std::fmt::Debug;

use error_stack::{Result, ResultExt};
use google_sheets4::Sheets;
use thiserror::Error;
use tracing::instrument;

use super::{auth, http_client};
use crate::infrastructure::config::sheets_config::SpreadsheetConfig;

pub struct SpreadsheetManager {
    pub config: SpreadsheetConfig,
    pub(super) hub: Sheets<http_client::HttpsConnector>,
}

impl Debug for SpreadsheetManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SpreadsheetManager {{ config: {:?} }}", self.config)
    }
}

#[derive(Error, Debug)]
pub enum SpreadsheetManagerError {
    #[error("Failed to build the HTTPS client")]
    HttpClientError,
    #[error("Failed to authenticate against the Sheets API")]
    AuthenticationFailed,
    #[error("Failed to fetch range {0}")]
    FailedToFetchRange(String),
}

impl SpreadsheetManager {
    #[instrument(name = "SpreadsheetManager::new")]
    pub async fn new(config: SpreadsheetConfig) -> Result<Self, SpreadsheetManagerError> {
        let client = http_client::http_client()?;
        let auth = auth::auth(&config, client.clone())
            .await
            .change_context(SpreadsheetManagerError::AuthenticationFailed)?;
        let hub = Sheets::new(client, auth);

        Ok(SpreadsheetManager { config, hub })
    }
}
