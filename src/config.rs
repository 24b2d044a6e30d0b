//! Configuration types.

use std::path::PathBuf;

use crate::error::ConfigError;

/// Environment variable naming the backend base URL.
pub const ENV_API_BASE: &str = "KOLAB_API_BASE";

/// Environment variable overriding the token cache path.
pub const ENV_TOKEN_PATH: &str = "KOLAB_TOKEN_PATH";

/// Name of the cookie the web client stores the access token under.
/// The on-disk token cache stands in for it here.
pub const ACCESS_TOKEN_COOKIE: &str = "access_token";

/// Client configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend base URL, e.g. `https://api.kolab.ai`. No trailing slash.
    pub api_base: String,
    /// Where the access token is cached between runs.
    pub token_path: PathBuf,
}

impl ClientConfig {
    /// Read configuration from the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let raw = std::env::var(ENV_API_BASE)
            .map_err(|_| ConfigError::MissingEnvVar(ENV_API_BASE.to_string()))?;
        let api_base = normalize_base(&raw)?;

        let token_path = std::env::var(ENV_TOKEN_PATH)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./data").join(ACCESS_TOKEN_COOKIE));

        Ok(Self {
            api_base,
            token_path,
        })
    }
}

/// Normalize a base URL: strip trailing slashes, reject empty values.
fn normalize_base(raw: &str) -> Result<String, ConfigError> {
    let base = raw.trim().trim_end_matches('/');
    if base.is_empty() {
        return Err(ConfigError::InvalidValue {
            key: ENV_API_BASE.to_string(),
            message: "base URL must not be empty".to_string(),
        });
    }
    Ok(base.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_trailing_slash() {
        assert_eq!(
            normalize_base("https://api.kolab.ai/").unwrap(),
            "https://api.kolab.ai"
        );
        assert_eq!(
            normalize_base("https://api.kolab.ai").unwrap(),
            "https://api.kolab.ai"
        );
    }

    #[test]
    fn normalize_rejects_empty() {
        assert!(normalize_base("").is_err());
        assert!(normalize_base("   ").is_err());
        assert!(normalize_base("/").is_err());
    }
}
