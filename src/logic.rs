use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use reqwest::Client;
use tracing::info;

use crate::args::Args;
use crate::auth::ServiceAccountAuth;
use crate::credentials::load_service_account_key;
use crate::error::TallyError;
use crate::issues::GithubClient;
use crate::models::credentials::ServiceAccountKey;
use crate::models::issues::IssueFilter;
use crate::sheets::{SheetUpdater, SheetsClient};
use crate::utils::constants::SHEETS_SCOPE;
use crate::utils::timestamp::format_timestamp;

pub struct TallyState {
    pub github: GithubClient,
    pub filter: IssueFilter,
    pub http: Client,
    pub sheets_api_url: String,
    pub spreadsheet_id: Option<String>,
    pub sheet_id: i64,
    pub range: String,
    pub timezone: Tz,
    pub credential_files: Vec<PathBuf>,
    pub credential_env: Option<String>,
}

impl TallyState {
    pub fn from_args(args: Args) -> Result<Self> {
        let github = GithubClient::new(&args.github_api_url, args.github_token)
            .context("unable to build GitHub client")?;

        Ok(TallyState {
            github,
            filter: IssueFilter::open(&args.owner, &args.repo, &args.labels),
            http: Client::new(),
            sheets_api_url: args.sheets_api_url,
            spreadsheet_id: args.spreadsheet_id,
            sheet_id: args.sheet_id,
            range: args.range,
            timezone: args.timezone,
            credential_files: args.credentials_files,
            credential_env: args.google_service_account_key,
        })
    }

    pub async fn count_issues(&self) -> Result<usize> {
        let issues = self
            .github
            .list_open_issues(&self.filter)
            .await
            .context("unable to get GitHub issues")?;
        Ok(issues.len())
    }

    pub async fn update_spreadsheet(&self, count: usize, now: DateTime<Utc>) -> Result<()> {
        let spreadsheet_id = self
            .spreadsheet_id
            .as_deref()
            .filter(|id| !id.is_empty())
            .ok_or(TallyError::MissingSpreadsheetId)?;

        let key_bytes = load_service_account_key(&self.credential_files, self.credential_env.clone())?;
        let key = ServiceAccountKey::from_json(&key_bytes)
            .map_err(TallyError::from)
            .context("unable to parse client secret file to config")?;

        let auth = ServiceAccountAuth::new(key, SHEETS_SCOPE);
        let access_token = auth
            .access_token(&self.http)
            .await
            .context("unable to retrieve Sheets client")?;

        let updater = SheetUpdater {
            sheets: SheetsClient::new(self.http.clone(), &self.sheets_api_url, spreadsheet_id, access_token),
            sheet_id: self.sheet_id,
            range: self.range.clone(),
        };
        let timestamp = format_timestamp(now, self.timezone);
        updater.append_count(count, &timestamp).await
    }

    pub async fn run(&self) -> Result<()> {
        let count = self.count_issues().await?;
        info!("Total issues: {}", count);

        self.update_spreadsheet(count, Utc::now())
            .await
            .context("unable to update spreadsheet")?;
        Ok(())
    }
}
