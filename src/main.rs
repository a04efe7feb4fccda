use std::{error::Error, process::ExitCode};

use sp_blob_upload::{
    config::Config,
    credential,
    drivers::azure::{self, ClientCredentials},
    workflow::Workflow,
    StoreConfig,
};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn Error>> {
    // Loaded before the subscriber so `.env` may set RUST_LOG.
    let env_file = match dotenvy::dotenv() {
        Ok(path) => Some(path),
        Err(err) if err.not_found() => None,
        Err(err) => return Err(err.into()),
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Some(path) = env_file {
        debug!(path = %path.display(), "loaded environment file");
    }

    let config = Config::from_env();
    let credential = credential::resolve();

    let result = Workflow::new(config, credential)
        .run(|config, credential| {
            StoreConfig::Azure(azure::Config {
                account: config.account.clone(),
                credentials: ClientCredentials::Token(credential),
            })
            .build()
        })
        .await;

    // failures are already logged by the workflow
    Ok(match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    })
}
