use std::env;
use std::path::PathBuf;

use quilt3_admin::{InputError, Quilt3AdminError};
use tracing_subscriber::EnvFilter;

/// Sandbox settings read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    pub seed_path: Option<PathBuf>,
    pub actor: Option<String>,
}

impl CliConfig {
    pub fn load() -> Result<Self, Quilt3AdminError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, Quilt3AdminError> {
        let seed_path = optional_value(&lookup, "QUILT3_ADMIN_SEED_PATH").map(PathBuf::from);
        if let Some(path) = seed_path.as_ref().filter(|path| !path.is_file()) {
            return Err(Quilt3AdminError::InvalidInput(vec![InputError::new(
                Some("QUILT3_ADMIN_SEED_PATH"),
                "InvalidConfig",
                format!("seed file '{}' does not exist", path.display()),
            )]));
        }

        let actor = optional_value(&lookup, "QUILT3_ADMIN_ACTOR");

        Ok(Self { seed_path, actor })
    }
}

fn optional_value(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<String> {
    lookup(key)
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}

pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
