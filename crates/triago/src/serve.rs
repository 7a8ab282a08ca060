// SPDX-FileCopyrightText: 2026 Triago Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `triago serve` command implementation.
//!
//! Wires the SQLite store, sentiment classifier, webhook notifier, and
//! intake pipeline together, then hands the assembled state to the
//! gateway server.

use std::sync::Arc;

use tracing::info;

use triago_config::model::TriagoConfig;
use triago_core::{ComplaintStore, TriagoError};
use triago_gateway::server::ServerConfig;
use triago_gateway::{start_server, GatewayState};
use triago_intake::IntakePipeline;
use triago_notify::WebhookNotifier;
use triago_sentiment::HttpSentimentClassifier;
use triago_storage::SqliteComplaintStore;

/// Runs the `triago serve` command.
///
/// Opens storage (running migrations), builds the pipeline, and serves
/// HTTP until shutdown. The store is checkpointed after the server exits.
pub async fn run_serve(config: TriagoConfig) -> Result<(), TriagoError> {
    init_tracing(&config.service.log_level);

    info!(service = %config.service.name, "starting triago serve");

    let store: Arc<dyn ComplaintStore + Send + Sync> =
        Arc::new(SqliteComplaintStore::open(&config.storage).await?);
    let classifier = Arc::new(HttpSentimentClassifier::new(&config.sentiment)?);
    let notifier = Arc::new(WebhookNotifier::new(&config.webhook)?);

    if config.sentiment.api_key.is_none() {
        info!("no sentiment API key configured, complaints will be labelled unknown");
    }
    if config.webhook.url.is_none() {
        info!("no webhook URL configured, creation notifications disabled");
    }

    let pipeline = Arc::new(IntakePipeline::new(
        Arc::clone(&store),
        classifier,
        notifier,
    ));

    let server_config = ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
    };
    let state = GatewayState {
        pipeline,
        store: Arc::clone(&store),
    };

    start_server(&server_config, state).await?;

    info!("shutting down, checkpointing store");
    store.close().await?;

    Ok(())
}

fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("triago={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_names(false)
        .init();
}
