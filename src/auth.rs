use chrono::{DateTime, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use reqwest::Client;
use serde::Serialize;
use tracing::{debug, info};

use crate::error::{check_status, TallyResult};
use crate::models::credentials::{ServiceAccountKey, TokenResponse};
use crate::utils::constants::{ASSERTION_LIFETIME_SECS, JWT_BEARER_GRANT};

#[derive(Debug, Serialize)]
struct Claims<'a> {
    iss: &'a str,
    scope: &'a str,
    aud: &'a str,
    iat: i64,
    exp: i64,
}

/// Two-legged OAuth for a Google service account: a signed JWT is exchanged for an access token.
pub struct ServiceAccountAuth {
    key: ServiceAccountKey,
    scope: String,
}

impl ServiceAccountAuth {
    pub fn new(key: ServiceAccountKey, scope: &str) -> Self {
        Self {
            key,
            scope: scope.to_string(),
        }
    }

    pub fn assertion(&self, now: DateTime<Utc>) -> TallyResult<String> {
        let iat = now.timestamp();
        let claims = Claims {
            iss: &self.key.client_email,
            scope: &self.scope,
            aud: &self.key.token_uri,
            iat,
            exp: iat + ASSERTION_LIFETIME_SECS,
        };

        let mut header = Header::new(Algorithm::RS256);
        header.kid = self.key.private_key_id.clone();

        let signing_key = EncodingKey::from_rsa_pem(self.key.private_key.as_bytes())?;
        Ok(encode(&header, &claims, &signing_key)?)
    }

    pub async fn access_token(&self, client: &Client) -> TallyResult<String> {
        let assertion = self.assertion(Utc::now())?;
        debug!(token_uri = %self.key.token_uri, "exchanging service account assertion");

        let response = client
            .post(&self.key.token_uri)
            .form(&[("grant_type", JWT_BEARER_GRANT), ("assertion", assertion.as_str())])
            .send()
            .await?;
        let token = check_status("Google OAuth", response)
            .await?
            .json::<TokenResponse>()
            .await?;

        info!(
            client_email = %self.key.client_email,
            expires_in = token.expires_in.unwrap_or_default(),
            "obtained service account access token"
        );
        Ok(token.access_token)
    }
}
