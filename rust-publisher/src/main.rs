//! amqp-burst - publish a burst of test messages to RabbitMQ.
//!
//! Usage: `amqp-burst [CONFIG_PATH]`. The path falls back to
//! `PUBLISHER_CONFIG`, then `config.json`. Any broker error ends the process
//! with a non-zero exit code.

use std::env;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use amqp_burst::config::{resolve_config_path, CONFIG_PATH_ENV, SERVER_URL_ENV};
use amqp_burst::{publish_burst, Config, Publisher};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize structured JSON logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().json().flatten_event(true))
        .init();

    info!("publisher_starting");

    let path = resolve_config_path(env::args().nth(1), env::var(CONFIG_PATH_ENV).ok());
    let config = Config::load(&path).with_server_url_override(env::var(SERVER_URL_ENV).ok());

    info!(
        path = %path.display(),
        server_url_set = !config.server_url.is_empty(),
        queue = %config.queue.queue_name,
        retries = config.send.retries,
        delay_secs = config.send.delay,
        exchange = %config.send.exchange,
        "config_loaded"
    );

    run(config).await?;

    info!("publisher_shutdown_complete");
    Ok(())
}

/// Connect, declare the queue, publish the burst, then close.
async fn run(config: Config) -> Result<()> {
    let mut publisher = Publisher::connect(&config.server_url)
        .await
        .context("Failed to set up RabbitMQ session")?;

    let queue = publisher
        .declare_queue(&config.queue)
        .await
        .context("Failed to prepare the target queue")?;

    let report = publish_burst(&mut publisher, &queue, &config.send)
        .await
        .with_context(|| format!("Burst to queue {queue} aborted"))?;

    info!(
        queue = %queue,
        sent = report.sent,
        elapsed_ms = report.elapsed.as_millis() as u64,
        "burst_complete"
    );

    publisher.close().await;
    Ok(())
}
