use anyhow::{Context, Result};
use reqwest::{Client, Url};
use serde_json::{json, Value};
use tracing::{debug, info};

use crate::error::{check_status, TallyError, TallyResult};
use crate::models::sheets::{BatchUpdateRequest, Request, ValueRange};
use crate::utils::constants::{NEW_ROW_INDEX, VALUE_INPUT_OPTION};

pub struct SheetsClient {
    client: Client,
    api_url: String,
    spreadsheet_id: String,
    access_token: String,
}

impl SheetsClient {
    pub fn new(client: Client, api_url: &str, spreadsheet_id: &str, access_token: String) -> Self {
        Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
            spreadsheet_id: spreadsheet_id.to_string(),
            access_token,
        }
    }

    fn url(&self, segments: &[&str]) -> TallyResult<Url> {
        let mut url = Url::parse(&self.api_url).map_err(|e| TallyError::InvalidUrl(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| TallyError::InvalidUrl(self.api_url.clone()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    pub async fn get_values(&self, range: &str) -> TallyResult<ValueRange> {
        let url = self.url(&["v4", "spreadsheets", &self.spreadsheet_id, "values", range])?;
        let response = self
            .client
            .get(url)
            .bearer_auth(&self.access_token)
            .send()
            .await?;
        Ok(check_status("Google Sheets", response)
            .await?
            .json::<ValueRange>()
            .await?)
    }

    /// Inserts one empty row at `index` without inheriting formatting from the row above.
    pub async fn insert_row(&self, sheet_id: i64, index: i64) -> TallyResult<()> {
        let batch = format!("{}:batchUpdate", self.spreadsheet_id);
        let url = self.url(&["v4", "spreadsheets", &batch])?;
        let body = BatchUpdateRequest {
            requests: vec![Request::insert_row(sheet_id, index)],
        };
        let response = self
            .client
            .post(url)
            .bearer_auth(&self.access_token)
            .json(&body)
            .send()
            .await?;
        check_status("Google Sheets", response).await?;
        Ok(())
    }

    pub async fn update_values(&self, range: &str, values: Vec<Vec<Value>>) -> TallyResult<()> {
        let url = self.url(&["v4", "spreadsheets", &self.spreadsheet_id, "values", range])?;
        let body = ValueRange {
            values,
            ..Default::default()
        };
        let response = self
            .client
            .put(url)
            .query(&[("valueInputOption", VALUE_INPUT_OPTION)])
            .bearer_auth(&self.access_token)
            .json(&body)
            .send()
            .await?;
        check_status("Google Sheets", response).await?;
        Ok(())
    }
}

pub struct SheetUpdater {
    pub sheets: SheetsClient,
    pub sheet_id: i64,
    pub range: String,
}

impl SheetUpdater {
    /// Pushes the existing rows down by one and writes `(timestamp, count)` into the freed row.
    pub async fn append_count(&self, count: usize, timestamp: &str) -> Result<()> {
        let previous = self
            .sheets
            .get_values(&self.range)
            .await
            .context("unable to retrieve data from sheet")?;
        log_previous(&previous);

        self.sheets
            .insert_row(self.sheet_id, NEW_ROW_INDEX)
            .await
            .context("unable to insert row")?;
        debug!(sheet_id = self.sheet_id, index = NEW_ROW_INDEX, "inserted empty row");

        self.sheets
            .update_values(&self.range, vec![vec![json!(timestamp), json!(count)]])
            .await
            .context("unable to write data to sheet")?;
        info!(range = %self.range, timestamp, count, "wrote issue count");

        Ok(())
    }
}

fn log_previous(previous: &ValueRange) {
    for line in previous_lines(previous) {
        info!("{}", line);
    }
}

fn previous_lines(previous: &ValueRange) -> Vec<String> {
    if previous.values.is_empty() {
        return vec!["No data found.".to_string()];
    }
    let mut lines = vec!["Previous data found.".to_string(), "Date, Value:".to_string()];
    for row in &previous.values {
        let date = row.first().map(cell_text).unwrap_or_default();
        let value = row.get(1).map(cell_text).unwrap_or_default();
        lines.push(format!("{}, {}", date, value));
    }
    lines
}

fn cell_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
