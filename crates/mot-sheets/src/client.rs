use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use mot_core::log::{LastEntry, LogError, LogRow, VocabLog};

/// Columns of the vocabulary sheet: A language, B word, C category,
/// D definition, E quote.
const LOG_RANGE: &str = "A:E";
const WORD_RANGE: &str = "B:B";
const DEFINITION_RANGE: &str = "D:D";

/// Google Sheets values-API client backing the vocabulary log. Ranges carry
/// no sheet name, so everything lands on the spreadsheet's first sheet.
#[derive(Clone)]
pub struct SheetsClient {
    client: reqwest::Client,
    base_url: String,
    spreadsheet_id: String,
    access_token: String,
}

impl SheetsClient {
    pub fn new(base_url: String, spreadsheet_id: String, access_token: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
            spreadsheet_id,
            access_token,
        }
    }

    fn values_url(&self, suffix: &str) -> String {
        format!(
            "{}/v4/spreadsheets/{}/values{}",
            self.base_url, self.spreadsheet_id, suffix
        )
    }
}

#[async_trait]
impl VocabLog for SheetsClient {
    async fn append(&self, row: &LogRow) -> Result<usize, LogError> {
        let url = self.values_url(&format!("/{LOG_RANGE}:append"));
        let body = json!({
            "values": [[row.language, row.word, row.category, row.definition, row.quote]]
        });

        let response = self
            .client
            .post(&url)
            .query(&[("valueInputOption", "RAW")])
            .bearer_auth(&self.access_token)
            .json(&body)
            .send()
            .await
            .map_err(to_backend)?;
        let response = check_status(response).await?;

        let data: AppendResponse = response.json().await.map_err(to_backend)?;
        data.updates
            .and_then(|updates| updates.updated_range)
            .as_deref()
            .and_then(row_of_range)
            .ok_or_else(|| LogError::Backend("append response had no updated range".to_string()))
    }

    async fn last_entry(&self) -> Result<LastEntry, LogError> {
        let url = self.values_url(":batchGet");
        let response = self
            .client
            .get(&url)
            .query(&[
                ("ranges", WORD_RANGE),
                ("ranges", DEFINITION_RANGE),
                ("majorDimension", "COLUMNS"),
            ])
            .bearer_auth(&self.access_token)
            .send()
            .await
            .map_err(to_backend)?;
        let response = check_status(response).await?;

        let data: BatchGetResponse = response.json().await.map_err(to_backend)?;
        let mut ranges = data.value_ranges.into_iter();
        let words = first_column(ranges.next());
        let definitions = first_column(ranges.next());

        last_from_columns(words, definitions)
    }

    async fn update_definition(&self, row: usize, definition: &str) -> Result<(), LogError> {
        let url = self.values_url(&format!("/D{row}"));
        let body = json!({ "values": [[definition]] });

        let response = self
            .client
            .put(&url)
            .query(&[("valueInputOption", "RAW")])
            .bearer_auth(&self.access_token)
            .json(&body)
            .send()
            .await
            .map_err(to_backend)?;
        check_status(response).await?;

        Ok(())
    }
}

fn to_backend(err: reqwest::Error) -> LogError {
    LogError::Backend(err.to_string())
}

async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, LogError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(LogError::Backend(format!("HTTP {status}: {body}")))
}

fn first_column(range: Option<ValueRange>) -> Vec<String> {
    range
        .and_then(|range| range.values.into_iter().next())
        .unwrap_or_default()
}

/// The last row with a word, matched against the definition column. The API
/// trims trailing empty cells, so the word column's length is the row count.
fn last_from_columns(mut words: Vec<String>, definitions: Vec<String>) -> Result<LastEntry, LogError> {
    while words.last().is_some_and(|cell| cell.is_empty()) {
        words.pop();
    }

    let row = words.len();
    let word = match words.last() {
        Some(word) => word.clone(),
        None => return Err(LogError::Empty),
    };
    let definition = definitions.get(row - 1).cloned().unwrap_or_default();

    Ok(LastEntry { row, word, definition })
}

/// Row number of the first cell in an A1 range like "Sheet1!A12:E12".
fn row_of_range(range: &str) -> Option<usize> {
    let cell = range.rsplit('!').next().unwrap_or(range).split(':').next()?;
    let digits: String = cell.chars().filter(char::is_ascii_digit).collect();
    digits.parse().ok()
}

#[derive(Debug, Deserialize)]
struct AppendResponse {
    updates: Option<AppendUpdates>,
}

#[derive(Debug, Deserialize)]
struct AppendUpdates {
    #[serde(rename = "updatedRange")]
    updated_range: Option<String>,
}

#[derive(Debug, Deserialize)]
struct BatchGetResponse {
    #[serde(rename = "valueRanges", default)]
    value_ranges: Vec<ValueRange>,
}

#[derive(Debug, Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|cell| cell.to_string()).collect()
    }

    #[test]
    fn row_is_parsed_out_of_the_updated_range() {
        assert_eq!(row_of_range("Sheet1!A12:E12"), Some(12));
        assert_eq!(row_of_range("A3:E3"), Some(3));
        assert_eq!(row_of_range("Vocab!B2"), Some(2));
    }

    #[test]
    fn header_only_ranges_have_no_row() {
        assert_eq!(row_of_range("Sheet1!A:E"), None);
    }

    #[test]
    fn last_entry_is_the_last_row_with_a_word() {
        let words = column(&["word", "maison", "chien"]);
        let defs = column(&["definition", "house", "dog"]);
        let last = last_from_columns(words, defs).unwrap();
        assert_eq!(last.row, 3);
        assert_eq!(last.word, "chien");
        assert_eq!(last.definition, "dog");
    }

    #[test]
    fn trailing_blank_cells_are_ignored() {
        let words = column(&["word", "maison", "", ""]);
        let defs = column(&["definition", "house"]);
        let last = last_from_columns(words, defs).unwrap();
        assert_eq!(last.row, 2);
        assert_eq!(last.word, "maison");
        assert_eq!(last.definition, "house");
    }

    #[test]
    fn missing_definition_cell_reads_as_empty() {
        let words = column(&["word", "maison"]);
        let defs = column(&["definition"]);
        let last = last_from_columns(words, defs).unwrap();
        assert_eq!(last.definition, "");
    }

    #[test]
    fn empty_log_is_reported() {
        let err = last_from_columns(Vec::new(), Vec::new()).unwrap_err();
        assert!(matches!(err, LogError::Empty));
    }

    #[test]
    fn append_response_decodes_its_range() {
        let body = r#"{
            "spreadsheetId": "abc",
            "updates": {
                "spreadsheetId": "abc",
                "updatedRange": "Sheet1!A7:E7",
                "updatedRows": 1
            }
        }"#;
        let data: AppendResponse = serde_json::from_str(body).unwrap();
        let row = data
            .updates
            .and_then(|u| u.updated_range)
            .as_deref()
            .and_then(row_of_range);
        assert_eq!(row, Some(7));
    }

    #[test]
    fn batch_get_decodes_columns() {
        let body = r#"{
            "spreadsheetId": "abc",
            "valueRanges": [
                {"range": "Sheet1!B1:B3", "majorDimension": "COLUMNS", "values": [["word", "run"]]},
                {"range": "Sheet1!D1:D3", "majorDimension": "COLUMNS", "values": [["definition", "to move fast"]]}
            ]
        }"#;
        let data: BatchGetResponse = serde_json::from_str(body).unwrap();
        assert_eq!(data.value_ranges.len(), 2);
        assert_eq!(first_column(data.value_ranges.into_iter().next()), column(&["word", "run"]));
    }
}
