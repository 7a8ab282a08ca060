// SPDX-FileCopyrightText: 2026 Triago Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for config loading, overriding, and diagnostics.

use triago_config::{ConfigError, load_and_validate_str};

#[test]
fn empty_string_yields_defaults() {
    let config = load_and_validate_str("").unwrap();
    assert_eq!(config.service.name, "triago");
    assert_eq!(config.server.port, 8080);
    assert!(config.sentiment.api_key.is_none());
    assert!(config.webhook.url.is_none());
}

#[test]
fn full_config_parses() {
    let config = load_and_validate_str(
        r#"
[service]
name = "complaints-svc"
log_level = "debug"

[server]
host = "0.0.0.0"
port = 9090

[storage]
database_path = "/var/lib/triago/triago.db"
wal_mode = false

[sentiment]
api_url = "https://api.apilayer.com/sentiment/predict"
api_key = "secret"
timeout_secs = 10

[webhook]
url = "https://n8n.example.com/webhook/complaints"
timeout_secs = 5
"#,
    )
    .unwrap();

    assert_eq!(config.service.name, "complaints-svc");
    assert_eq!(config.service.log_level, "debug");
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.port, 9090);
    assert!(!config.storage.wal_mode);
    assert_eq!(config.sentiment.api_key.as_deref(), Some("secret"));
    assert_eq!(
        config.webhook.url.as_deref(),
        Some("https://n8n.example.com/webhook/complaints")
    );
}

#[test]
fn unknown_key_produces_suggestion() {
    let errors = load_and_validate_str(
        r#"
[sentiment]
api_kee = "secret"
"#,
    )
    .unwrap_err();

    let found = errors.iter().any(|e| {
        matches!(
            e,
            ConfigError::UnknownKey { key, suggestion, .. }
                if key == "api_kee" && suggestion.as_deref() == Some("api_key")
        )
    });
    assert!(found, "expected unknown-key diagnostic with suggestion, got: {errors:?}");
}

#[test]
fn wrong_type_produces_invalid_type_error() {
    let errors = load_and_validate_str(
        r#"
[server]
port = "not-a-number"
"#,
    )
    .unwrap_err();

    assert!(
        errors
            .iter()
            .any(|e| matches!(e, ConfigError::InvalidType { .. } | ConfigError::Other(_))),
        "expected type error, got: {errors:?}"
    );
}

#[test]
fn semantic_validation_runs_after_parse() {
    let errors = load_and_validate_str(
        r#"
[webhook]
url = "not-a-url"
"#,
    )
    .unwrap_err();

    assert!(errors.iter().any(
        |e| matches!(e, ConfigError::Validation { message } if message.contains("webhook.url"))
    ));
}

#[test]
fn multiple_validation_errors_are_collected() {
    let errors = load_and_validate_str(
        r#"
[storage]
database_path = ""

[sentiment]
timeout_secs = 0
"#,
    )
    .unwrap_err();

    assert!(errors.len() >= 2, "expected collected errors, got: {errors:?}");
}
