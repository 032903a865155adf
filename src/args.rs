use std::path::PathBuf;

use chrono_tz::Tz;
use clap::Parser;

use crate::utils::constants::{
    CREDENTIALS_ENV, DEFAULT_CREDENTIAL_FILES, DEFAULT_LABELS, DEFAULT_OWNER, DEFAULT_RANGE, DEFAULT_REPO, DEFAULT_SHEET_ID, DEFAULT_TIMEZONE,
    GITHUB_API_URL, SHEETS_API_URL,
};

#[derive(Parser, Debug)]
#[command(name = "issue-tally", about = "Counts labelled open GitHub issues into a Google Sheet")]
pub struct Args {
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub github_token: Option<String>,

    #[arg(long, default_value = DEFAULT_OWNER)]
    pub owner: String,

    #[arg(long, default_value = DEFAULT_REPO)]
    pub repo: String,

    #[arg(long, default_values = DEFAULT_LABELS, value_delimiter = ',')]
    pub labels: Vec<String>,

    #[arg(long, env = "SPREADSHEET_ID")]
    pub spreadsheet_id: Option<String>,

    #[arg(long, default_value_t = DEFAULT_SHEET_ID)]
    pub sheet_id: i64,

    #[arg(long, default_value = DEFAULT_RANGE)]
    pub range: String,

    #[arg(long, default_value = DEFAULT_TIMEZONE, value_parser = parse_timezone)]
    pub timezone: Tz,

    #[arg(long = "credentials-file", default_values = DEFAULT_CREDENTIAL_FILES)]
    pub credentials_files: Vec<PathBuf>,

    /// Service account key JSON, used when none of the credential files exist.
    #[arg(long, env = CREDENTIALS_ENV, hide = true, hide_env_values = true)]
    pub google_service_account_key: Option<String>,

    #[arg(long, default_value = GITHUB_API_URL)]
    pub github_api_url: String,

    #[arg(long, default_value = SHEETS_API_URL)]
    pub sheets_api_url: String,
}

fn parse_timezone(name: &str) -> Result<Tz, String> {
    name.parse::<Tz>()
        .map_err(|_| format!("unknown IANA time zone: {}", name))
}
