use std::path::PathBuf;

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TallyError {
    #[error("spreadsheet ID not found")]
    MissingSpreadsheetId,

    #[error("service account key not found")]
    MissingCredentials,

    #[error("unable to read service account key file {path}")]
    CredentialRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unable to parse service account key")]
    InvalidCredentials(#[from] serde_json::Error),

    #[error("unable to sign service account assertion")]
    Signing(#[from] jsonwebtoken::errors::Error),

    #[error("invalid API URL: {0}")]
    InvalidUrl(String),

    #[error("request error")]
    Request(#[from] reqwest::Error),

    #[error("{api} returned {status}: {body}")]
    Api {
        api: &'static str,
        status: StatusCode,
        body: String,
    },
}

pub type TallyResult<T> = Result<T, TallyError>;

/// Turns a non-success response into `TallyError::Api`, keeping the body for the log line.
pub async fn check_status(api: &'static str, response: reqwest::Response) -> TallyResult<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(TallyError::Api { api, status, body })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chained_message_names_the_cause_once() {
        let err = anyhow::Error::new(TallyError::CredentialRead {
            path: PathBuf::from("credentials.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "permission denied"),
        })
        .context("unable to update spreadsheet");

        let message = format!("{:#}", err);
        assert_eq!(
            message,
            "unable to update spreadsheet: unable to read service account key file credentials.json: permission denied"
        );
        assert_eq!(message.matches("permission denied").count(), 1);
    }

    #[test]
    fn parse_errors_keep_serde_detail_in_the_chain() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let detail = source.to_string();
        let message = format!("{:#}", anyhow::Error::new(TallyError::from(source)));
        assert_eq!(message, format!("unable to parse service account key: {}", detail));
    }
}
