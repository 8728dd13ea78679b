use std::process::ExitCode;

use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

mod api;
mod config;
mod models;
mod services;
mod store;
mod utils;

use api::{GoldApiClient, PushoverClient};
use config::AppConfig;
use models::RunOutcome;
use services::alert_service;
use store::JsonFileStore;
use utils::JobError;

// Two sequential HTTP calls; nothing to run in parallel.
#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("gold_alert=info")),
        )
        .with_target(true)
        .init();

    info!("🚀 Gold Alert Job Started");

    match run().await {
        Ok(outcome) => {
            info!("🏁 Run finished at ₹{:.2} / g: {:?}", outcome.price(), outcome);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("❌ {}", e);
            ExitCode::from(e.exit_code())
        }
    }
}

async fn run() -> Result<RunOutcome, JobError> {
    let config = AppConfig::from_env()?;
    debug!("Loaded configuration: {:?}", config);

    let source = GoldApiClient::with_base_url(config.gold_api_key, config.gold_api_base_url);
    let notifier = PushoverClient::with_base_url(
        config.pushover_app_token,
        config.pushover_user_key,
        config.pushover_base_url,
    );
    let store = JsonFileStore::new(config.state_file);
    debug!("Using state file {}", store.path().display());

    alert_service::run_once(
        &source,
        &notifier,
        &store,
        &config.thresholds,
        config.persist_policy,
    )
    .await
}
