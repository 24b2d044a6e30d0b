use std::sync::Arc;

use secrecy::SecretString;
use tokio::io::{AsyncBufReadExt, BufReader};

use kolab_onboarding::auth;
use kolab_onboarding::cli;
use kolab_onboarding::config::ClientConfig;
use kolab_onboarding::onboarding::gateway::HttpBackend;
use kolab_onboarding::onboarding::manager::OnboardingFlow;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = ClientConfig::from_env().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        eprintln!("  export KOLAB_API_BASE=https://api.example.com");
        std::process::exit(1);
    });

    eprintln!("🚀 KOLab onboarding v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   Backend: {}", config.api_base);

    // Token cache stands in for the browser's access_token cookie. A
    // missing token is allowed — requests will fail server-side and the
    // wizard surfaces that as a retryable error.
    let mut token = auth::load_cached_token(&config.token_path)?;
    if token.is_none() {
        token = prompt_login(&config).await;
    }
    if token.is_none() {
        eprintln!("   Continuing without a token; submissions will be rejected.");
    }

    let backend = Arc::new(HttpBackend::new(config.api_base.clone(), token));
    let flow = OnboardingFlow::new(backend);

    if let Some(target) = cli::run(flow).await? {
        eprintln!("Done — visit {target} to see your matches.");
    }
    Ok(())
}

/// Ask for credentials and log in, caching the access token on success.
/// Declining (empty email) or a failed login returns None.
async fn prompt_login(config: &ClientConfig) -> Option<SecretString> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    eprint!("Email (blank to skip login): ");
    let email = lines.next_line().await.ok()??.trim().to_string();
    if email.is_empty() {
        return None;
    }
    eprint!("Password: ");
    let password = lines.next_line().await.ok()??.trim().to_string();

    let client = reqwest::Client::new();
    match auth::login(&client, &config.api_base, &email, &password).await {
        Ok(tokens) => {
            let token = SecretString::from(tokens.access);
            if let Err(e) = auth::store_token(&config.token_path, &token) {
                tracing::warn!("Failed to cache access token: {e}");
            }
            Some(token)
        }
        Err(e) => {
            eprintln!("❌ Login failed: {e}");
            None
        }
    }
}
