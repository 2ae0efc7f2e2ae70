//! Sandbox command line for registry administration against an in-memory registry.

#![forbid(unsafe_code)]

mod cli_config;
mod command;

use std::env;

use quilt3_admin::Quilt3AdminError;
use quilt3_admin_infrastructure::{InMemoryRegistryClient, RegistrySeed};
use tracing::{info, warn};

use crate::cli_config::{CliConfig, init_tracing};
use crate::command::{Command, USAGE};

#[tokio::main]
async fn main() -> Result<(), Quilt3AdminError> {
    dotenvy::dotenv().ok();
    init_tracing();

    let args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() || args.iter().any(|arg| arg == "--help" || arg == "-h") {
        println!("{USAGE}");
        return Ok(());
    }

    let config = CliConfig::load()?;
    let command = Command::parse(&args)?;
    let client = build_registry(&config).await?;

    info!(
        seed_path = ?config.seed_path,
        actor = config.actor.as_deref().unwrap_or("-"),
        "quilt3-admin-cli started"
    );

    match command.execute(&client).await {
        Ok(output) => {
            let rendered = serde_json::to_string_pretty(&output).map_err(|error| {
                Quilt3AdminError::Client(format!("failed to render output: {error}"))
            })?;
            println!("{rendered}");
            Ok(())
        }
        Err(error) => {
            warn!(error = %error, "command failed");
            Err(error)
        }
    }
}

async fn build_registry(config: &CliConfig) -> Result<InMemoryRegistryClient, Quilt3AdminError> {
    let mut seed = match config.seed_path.as_ref() {
        Some(path) => RegistrySeed::load(path).await?,
        None => RegistrySeed::default(),
    };
    if let Some(actor) = config.actor.clone() {
        seed.acting_user = Some(actor);
    }

    InMemoryRegistryClient::from_seed(seed)
}
