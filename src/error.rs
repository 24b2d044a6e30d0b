//! Error types for the onboarding client.

use std::path::PathBuf;

/// Top-level error type for the crate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Authentication error: {0}")]
    Auth(#[from] AuthError),

    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),

    #[error("Flow error: {0}")]
    Flow(#[from] FlowError),
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Token acquisition and cache errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Login request failed: {0}")]
    RequestFailed(String),

    #[error("Login rejected with status {status}")]
    Rejected { status: u16 },

    #[error("Malformed login response: {0}")]
    MalformedResponse(String),

    #[error("Failed to read token cache at {path}: {source}")]
    CacheRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write token cache at {path}: {source}")]
    CacheWrite {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Submission gateway errors.
///
/// 4xx and 5xx are deliberately collapsed into `Rejected`: the flow shows
/// the same message either way and never retries on its own.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("Request to {endpoint} failed: {reason}")]
    Transport { endpoint: String, reason: String },

    #[error("Backend rejected {endpoint} with status {status}")]
    Rejected { endpoint: String, status: u16 },
}

/// Flow misuse errors — raised when an action is invoked on a step that
/// does not offer it, never for backend failures (those become notices).
#[derive(Debug, thiserror::Error)]
pub enum FlowError {
    #[error("A submission is already pending")]
    SubmissionPending,

    #[error("{action} is not available on the {step} step")]
    WrongStep {
        action: &'static str,
        step: &'static str,
    },

    #[error("The flow has already completed")]
    Completed,
}

/// Result type alias for the crate.
pub type Result<T> = std::result::Result<T, Error>;
