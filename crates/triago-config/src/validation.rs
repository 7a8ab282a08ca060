// SPDX-FileCopyrightText: 2026 Triago Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde
//! attributes, such as valid bind addresses, non-empty paths, and nonzero
//! timeouts.

use crate::diagnostic::ConfigError;
use crate::model::TriagoConfig;

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)`
/// with all collected validation errors (does not fail fast).
pub fn validate_config(config: &TriagoConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    let host = config.server.host.trim();
    if host.is_empty() {
        errors.push(ConfigError::Validation {
            message: "server.host must not be empty".to_string(),
        });
    } else {
        let is_valid_ip = host.parse::<std::net::IpAddr>().is_ok();
        let is_valid_hostname = host
            .chars()
            .all(|c| c.is_alphanumeric() || c == '.' || c == '-' || c == ':');
        if !is_valid_ip && !is_valid_hostname {
            errors.push(ConfigError::Validation {
                message: format!("server.host `{host}` is not a valid IP address or hostname"),
            });
        }
    }

    if config.storage.database_path.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "storage.database_path must not be empty".to_string(),
        });
    }

    if config.sentiment.timeout_secs == 0 {
        errors.push(ConfigError::Validation {
            message: "sentiment.timeout_secs must be nonzero".to_string(),
        });
    }

    if config.webhook.timeout_secs == 0 {
        errors.push(ConfigError::Validation {
            message: "webhook.timeout_secs must be nonzero".to_string(),
        });
    }

    if !is_http_url(&config.sentiment.api_url) {
        errors.push(ConfigError::Validation {
            message: format!(
                "sentiment.api_url `{}` must be an http(s) URL",
                config.sentiment.api_url
            ),
        });
    }

    if let Some(url) = &config.webhook.url
        && !is_http_url(url)
    {
        errors.push(ConfigError::Validation {
            message: format!("webhook.url `{url}` must be an http(s) URL"),
        });
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

fn is_http_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}
