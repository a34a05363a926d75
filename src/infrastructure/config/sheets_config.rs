use google_sheets4::oauth2::ServiceAccountKey;

#[derive(Clone)]
pub struct SpreadsheetConfig {
    pub service_account_key: ServiceAccountKey,
    pub spreadsheet_id: Box<str>,
}

// Keeps the private key out of logs and error reports
impl std::fmt::Debug for SpreadsheetConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpreadsheetConfig")
            .field("client_email", &self.service_account_key.client_email)
            .field("spreadsheet_id", &self.spreadsheet_id)
            .finish_non_exhaustive()
    }
}
