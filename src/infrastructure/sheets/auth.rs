use error_stack::ResultExt;
use google_sheets4::hyper;
use google_sheets4::oauth2::{self, authenticator::Authenticator};
use thiserror::Error;
use tracing::instrument;

use super::http_client::HttpsConnector;
use crate::infrastructure::config::sheets_config::SpreadsheetConfig;

#[derive(Error, Debug)]
pub enum SheetsAuthError {
    #[error("Could not create a service account authenticator")]
    AuthenticatorError,
}

#[instrument(skip(client))]
pub async fn auth(
    config: &SpreadsheetConfig,
    client: hyper::Client<HttpsConnector>,
) -> error_stack::Result<Authenticator<HttpsConnector>, SheetsAuthError> {
    oauth2::ServiceAccountAuthenticator::with_client(config.service_account_key.clone(), client)
        .build()
        .await
        .change_context(SheetsAuthError::AuthenticatorError)
        .attach_printable_lazy(|| {
            format!(
                "service account: {}",
                config.service_account_key.client_email
            )
        })
}
