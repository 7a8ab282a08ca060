// SPDX-FileCopyrightText: 2026 Triago Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./triago.toml` > `~/.config/triago/triago.toml` >
//! `/etc/triago/triago.toml` with environment variable overrides via the
//! `TRIAGO_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::TriagoConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/triago/triago.toml` (system-wide)
/// 3. `~/.config/triago/triago.toml` (user XDG config)
/// 4. `./triago.toml` (local directory)
/// 5. `TRIAGO_*` environment variables
pub fn load_config() -> Result<TriagoConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(TriagoConfig::default()))
        .merge(Toml::file("/etc/triago/triago.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("triago/triago.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("triago.toml"))
        .merge(env_provider())
        .extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env vars).
///
/// Used for testing and explicit config specification.
pub fn load_config_from_str(toml_content: &str) -> Result<TriagoConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(TriagoConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<TriagoConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(TriagoConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Create the environment variable provider using explicit `map()` for
/// section-to-dot mapping.
///
/// Uses `Env::map()` NOT `Env::split("_")` to avoid ambiguity with
/// underscore-containing key names: `TRIAGO_SENTIMENT_API_KEY` must map to
/// `sentiment.api_key`, not `sentiment.api.key`.
fn env_provider() -> Env {
    Env::prefixed("TRIAGO_").map(|key| {
        // `key` is the lowercased env var name with prefix stripped.
        // Example: TRIAGO_SENTIMENT_API_KEY -> "sentiment_api_key"
        let key_str = key.as_str();
        let mapped = key_str
            .replacen("service_", "service.", 1)
            .replacen("server_", "server.", 1)
            .replacen("storage_", "storage.", 1)
            .replacen("sentiment_", "sentiment.", 1)
            .replacen("webhook_", "webhook.", 1);
        mapped.into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_vars_override_toml_values() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "triago.toml",
                r#"
[server]
port = 3000
"#,
            )?;
            jail.set_env("TRIAGO_SERVER_PORT", "4000");
            jail.set_env("TRIAGO_SENTIMENT_API_KEY", "from-env");

            let config: TriagoConfig = Figment::new()
                .merge(Serialized::defaults(TriagoConfig::default()))
                .merge(Toml::file("triago.toml"))
                .merge(env_provider())
                .extract()?;

            assert_eq!(config.server.port, 4000);
            assert_eq!(config.sentiment.api_key.as_deref(), Some("from-env"));
            Ok(())
        });
    }

    #[test]
    fn underscore_keys_map_to_correct_section() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("TRIAGO_STORAGE_DATABASE_PATH", "/tmp/env.db");
            jail.set_env("TRIAGO_WEBHOOK_TIMEOUT_SECS", "9");

            let config: TriagoConfig = Figment::new()
                .merge(Serialized::defaults(TriagoConfig::default()))
                .merge(env_provider())
                .extract()?;

            assert_eq!(config.storage.database_path, "/tmp/env.db");
            assert_eq!(config.webhook.timeout_secs, 9);
            Ok(())
        });
    }
}
