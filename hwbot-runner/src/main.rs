//! hwbot Runner
//!
//! A long-running worker that watches the homework review API and tells a
//! Telegram chat whenever a submission gets reviewed.
//!
//! Architecture:
//! - Configuration: Load settings from the environment (and `.env`)
//! - Repositories: HTTP communication with the review API and the Bot API
//! - Services: Message formatting and cycle reporting
//! - Scheduler: The poll loop that owns the cursor
//!
//! The runner polls for statuses changed since its cursor, sends at most one
//! message per cycle and then moves the cursor to the server's current date.

mod config;
mod logging;
mod repository;
mod scheduler;
mod service;

use anyhow::{Context, Result};
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{error, info};

use crate::config::{Config, ConfigError};
use crate::repository::{HttpSubmissionRepository, TelegramNotificationRepository};
use crate::scheduler::Poller;
use crate::service::{StandardFormatter, TracingReporter};
use hwbot_client::{ReviewClient, TelegramClient};
use hwbot_core::domain::cursor::Cursor;

/// Exit status for unusable configuration (sysexits `EX_CONFIG`)
const EXIT_CONFIG: u8 = 78;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            // Best effort: the log file location may be what is broken
            let _ = logging::init(None);
            error!("Invalid configuration: {}", e);
            return ExitCode::from(EXIT_CONFIG);
        }
    };

    if let Err(e) = logging::init(config.log_file.as_deref()) {
        eprintln!("Failed to initialize logging: {:#}", e);
        return ExitCode::from(EXIT_CONFIG);
    }

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Runner error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Loads configuration from `.env` and the environment, then validates it
fn load_config() -> Result<Config, ConfigError> {
    // A missing .env file is fine; the variables may come from the environment
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}

async fn run(config: Config) -> Result<()> {
    info!("Starting hwbot runner");
    info!("Loaded configuration: {:?}", config);

    let http = reqwest::Client::builder()
        .timeout(config.http_timeout)
        .build()
        .context("Failed to build HTTP client")?;

    let review = ReviewClient::with_client(
        config.practicum_api_url.clone(),
        config.practicum_token.clone(),
        http.clone(),
    );
    let telegram = TelegramClient::with_client(
        config.telegram_api_url.clone(),
        config.telegram_token.clone(),
        http,
    );

    info!(
        "API clients initialized: review={}, telegram={}",
        review.base_url(),
        telegram.base_url()
    );

    let mut poller = Poller::new(
        &config,
        Cursor::now(),
        Arc::new(HttpSubmissionRepository::new(review)),
        Arc::new(TelegramNotificationRepository::new(
            telegram,
            config.chat_id.clone(),
        )),
        Arc::new(StandardFormatter::new()),
        Arc::new(TracingReporter::new()),
    );

    poller.run_until(shutdown_signal()).await;

    info!("Finished at from_date {}", poller.cursor());
    Ok(())
}

/// Resolves on Ctrl+C, or SIGTERM on unix
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, shutting down"),
        _ = terminate => info!("Received SIGTERM, shutting down"),
    }
}
