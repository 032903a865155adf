use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use tracing::{debug, info};

use crate::error::{TallyError, TallyResult};

/// Reads the service account key from the first existing file in `paths`,
/// falling back to `env_value`. Only "not found" moves on to the next source.
pub fn load_service_account_key(paths: &[PathBuf], env_value: Option<String>) -> TallyResult<Vec<u8>> {
    for path in paths {
        match fs::read(path) {
            Ok(bytes) if !bytes.is_empty() => {
                info!(path = %path.display(), "loaded service account key from file");
                return Ok(bytes);
            }
            Ok(_) => {
                debug!(path = %path.display(), "service account key file is empty");
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "service account key file not found");
            }
            Err(source) => {
                return Err(TallyError::CredentialRead {
                    path: path.clone(),
                    source,
                });
            }
        }
    }

    match env_value {
        Some(value) if !value.is_empty() => {
            info!("loaded service account key from environment");
            Ok(value.into_bytes())
        }
        _ => Err(TallyError::MissingCredentials),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefers_first_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let key = dir.path().join("key.json");
        fs::write(&key, b"{\"from\":\"key\"}").unwrap();

        let paths = vec![dir.path().join("credentials.json"), key];
        let bytes = load_service_account_key(&paths, Some("env".to_string())).unwrap();
        assert_eq!(bytes, b"{\"from\":\"key\"}");
    }

    #[test]
    fn falls_back_to_environment() {
        let dir = tempfile::tempdir().unwrap();
        let paths = vec![dir.path().join("credentials.json")];
        let bytes = load_service_account_key(&paths, Some("{\"from\":\"env\"}".to_string())).unwrap();
        assert_eq!(bytes, b"{\"from\":\"env\"}");
    }

    #[test]
    fn missing_everywhere_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let paths = vec![dir.path().join("credentials.json"), dir.path().join("key.json")];

        let err = load_service_account_key(&paths, None).unwrap_err();
        assert!(matches!(err, TallyError::MissingCredentials));

        let err = load_service_account_key(&paths, Some(String::new())).unwrap_err();
        assert!(matches!(err, TallyError::MissingCredentials));
    }

    #[test]
    fn empty_file_moves_on_to_next_source() {
        let dir = tempfile::tempdir().unwrap();
        let credentials = dir.path().join("credentials.json");
        let key = dir.path().join("key.json");
        fs::write(&credentials, b"").unwrap();
        fs::write(&key, b"{\"from\":\"key\"}").unwrap();

        let paths = vec![credentials.clone(), key];
        let bytes = load_service_account_key(&paths, None).unwrap();
        assert_eq!(bytes, b"{\"from\":\"key\"}");

        let bytes = load_service_account_key(&[credentials], Some("{\"from\":\"env\"}".to_string())).unwrap();
        assert_eq!(bytes, b"{\"from\":\"env\"}");
    }

    #[test]
    fn empty_file_without_fallback_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let credentials = dir.path().join("credentials.json");
        fs::write(&credentials, b"").unwrap();

        let err = load_service_account_key(&[credentials], None).unwrap_err();
        assert!(matches!(err, TallyError::MissingCredentials));
        assert_eq!(err.to_string(), "service account key not found");
    }

    #[test]
    fn unreadable_path_is_not_skipped() {
        // A directory cannot be read as a file, which is not a "not found" error.
        let dir = tempfile::tempdir().unwrap();
        let paths = vec![dir.path().to_path_buf()];

        let err = load_service_account_key(&paths, Some("env".to_string())).unwrap_err();
        assert!(matches!(err, TallyError::CredentialRead { .. }));
    }
}
