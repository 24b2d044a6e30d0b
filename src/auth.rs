//! Login and token cache — the browser-cookie analog.
//!
//! The web client keeps the access token in an `access_token` cookie;
//! here it lives in a small cache file instead. Expiry is the backend's
//! concern — a stale token just fails the next request.

use std::path::Path;

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::error::AuthError;

/// Token pair returned by the login endpoint. Only `access` is used.
#[derive(Debug, Deserialize)]
pub struct Tokens {
    pub access: String,
    #[serde(default)]
    pub refresh: Option<String>,
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    tokens: Tokens,
}

/// `POST {base}/login/` with the given credentials.
pub async fn login(
    client: &reqwest::Client,
    base_url: &str,
    email: &str,
    password: &str,
) -> Result<Tokens, AuthError> {
    let endpoint = format!("{base_url}/login/");
    let response = client
        .post(&endpoint)
        .json(&serde_json::json!({ "email": email, "password": password }))
        .send()
        .await
        .map_err(|e| AuthError::RequestFailed(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(AuthError::Rejected {
            status: status.as_u16(),
        });
    }

    let body: LoginResponse = response
        .json()
        .await
        .map_err(|e| AuthError::MalformedResponse(e.to_string()))?;
    tracing::info!("logged in as {email}");
    Ok(body.tokens)
}

/// Read the cached access token, if any. A missing file is not an error.
pub fn load_cached_token(path: &Path) -> Result<Option<SecretString>, AuthError> {
    match std::fs::read_to_string(path) {
        Ok(raw) => {
            let token = raw.trim();
            if token.is_empty() {
                Ok(None)
            } else {
                Ok(Some(SecretString::from(token.to_string())))
            }
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(AuthError::CacheRead {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

/// Cache the access token on disk, creating parent directories.
pub fn store_token(path: &Path, token: &SecretString) -> Result<(), AuthError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| AuthError::CacheWrite {
            path: path.to_path_buf(),
            source: e,
        })?;
    }
    std::fs::write(path, token.expose_secret()).map_err(|e| AuthError::CacheWrite {
        path: path.to_path_buf(),
        source: e,
    })
}
