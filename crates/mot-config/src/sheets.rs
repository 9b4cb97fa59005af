use std::env;

use serde::{Deserialize, Serialize};

#[derive(Default, Serialize, Deserialize, Clone)]
pub struct SheetsConfig {
    /// Id of the spreadsheet holding the vocabulary log.
    pub spreadsheet_id: String,
    /// OAuth bearer token with the spreadsheets scope.
    pub access_token: String,
    pub base_url: String,
}

impl SheetsConfig {
    pub fn new() -> Self {
        Self {
            spreadsheet_id: env::var("SHEETS_SPREADSHEET_ID").unwrap_or_default(),
            access_token: env::var("SHEETS_ACCESS_TOKEN").unwrap_or_default(),
            base_url: env::var("SHEETS_BASE_URL")
                .unwrap_or_else(|_| "https://sheets.googleapis.com".to_string()),
        }
    }
}
