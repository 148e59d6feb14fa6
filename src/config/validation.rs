//! Configuration validation logic.

use crate::config::loader::{Config, NetworkConfig};
use crate::error::{Error, Result};
use regex::Regex;
use url::Url;

/// Longest request timeout accepted, in seconds.
const MAX_TIMEOUT_SECONDS: u64 = 120;

/// Proxy schemes reqwest understands.
const PROXY_SCHEMES: &[&str] = &["http", "https", "socks5", "socks5h"];

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_sessdata(&config.user.sessdata)?;
    validate_network(&config.network)?;

    Ok(())
}

/// Validate the `SESSDATA` cookie. Empty means "not logged in" and is fine.
pub fn validate_sessdata(sessdata: &str) -> Result<()> {
    if sessdata.is_empty() {
        return Ok(());
    }

    // Check for placeholder values
    let lower = sessdata.to_lowercase();
    if lower.contains("replaceme") || lower.contains("your_sessdata") {
        return Err(Error::ConfigValidation {
            field: "sessdata".to_string(),
            message: "SESSDATA appears to be a placeholder. Copy the cookie value from your browser."
                .to_string(),
        });
    }

    // Cookie values are URL-encoded: no spaces, semicolons or quotes
    let cookie_pattern = Regex::new(r"^[A-Za-z0-9%,*_.\-]+$").unwrap();
    if !cookie_pattern.is_match(sessdata) {
        return Err(Error::ConfigValidation {
            field: "sessdata".to_string(),
            message: "SESSDATA contains characters that cannot appear in a cookie value. \
                      Paste only the value, without 'SESSDATA='."
                .to_string(),
        });
    }

    Ok(())
}

/// Validate HTTP options.
pub fn validate_network(network: &NetworkConfig) -> Result<()> {
    if network.user_agent.trim().is_empty() {
        return Err(Error::MissingConfig("user_agent".to_string()));
    }

    if network.timeout_seconds == 0 || network.timeout_seconds > MAX_TIMEOUT_SECONDS {
        return Err(Error::ConfigValidation {
            field: "timeout_seconds".to_string(),
            message: format!(
                "Timeout must be between 1 and {} seconds (got {})",
                MAX_TIMEOUT_SECONDS, network.timeout_seconds
            ),
        });
    }

    if let Some(proxy) = &network.proxy {
        let url = Url::parse(proxy).map_err(|e| Error::ConfigValidation {
            field: "proxy".to_string(),
            message: format!("Invalid proxy URL '{}': {}", proxy, e),
        })?;

        if !PROXY_SCHEMES.contains(&url.scheme()) {
            return Err(Error::ConfigValidation {
                field: "proxy".to_string(),
                message: format!(
                    "Unsupported proxy scheme '{}' (expected one of {})",
                    url.scheme(),
                    PROXY_SCHEMES.join(", ")
                ),
            });
        }
    }

    Ok(())
}
