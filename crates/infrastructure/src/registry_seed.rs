use std::collections::BTreeMap;
use std::path::Path;

use quilt3_admin_core::{AdminResult, Quilt3AdminError};
use quilt3_admin_domain::Role;
use serde::Deserialize;

/// Initial registry contents, usually read from a JSON file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RegistrySeed {
    /// User recorded as uploader of SSO config changes.
    pub acting_user: Option<String>,
    /// Initial tabulator open query flag.
    pub open_query: bool,
    /// Role catalog.
    pub roles: Vec<Role>,
    /// Initial accounts.
    pub users: Vec<SeedUser>,
    /// Tabulator tables per bucket, table name to YAML config.
    pub buckets: BTreeMap<String, BTreeMap<String, String>>,
    /// Initial SSO configuration text, uploaded by `acting_user`.
    pub sso_config: Option<String>,
}

/// Account entry of a [`RegistrySeed`]; roles are referenced by name.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeedUser {
    /// Login name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Active role name.
    #[serde(default)]
    pub role: Option<String>,
    /// Extra role names.
    #[serde(default)]
    pub extra_roles: Vec<String>,
    /// Administrator flag.
    #[serde(default)]
    pub is_admin: bool,
    /// Active flag.
    #[serde(default = "default_true")]
    pub is_active: bool,
    /// SSO-only flag.
    #[serde(default)]
    pub is_sso_only: bool,
    /// Service identity flag.
    #[serde(default)]
    pub is_service: bool,
}

fn default_true() -> bool {
    true
}

impl RegistrySeed {
    /// Parses a seed from JSON text.
    pub fn from_json_str(value: &str) -> AdminResult<Self> {
        serde_json::from_str(value)
            .map_err(|error| Quilt3AdminError::Client(format!("invalid registry seed: {error}")))
    }

    /// Reads and parses a seed file.
    pub async fn load(path: impl AsRef<Path>) -> AdminResult<Self> {
        let path = path.as_ref();
        let contents = tokio::fs::read_to_string(path).await.map_err(|error| {
            Quilt3AdminError::Client(format!(
                "failed to read registry seed '{}': {error}",
                path.display()
            ))
        })?;

        Self::from_json_str(contents.as_str())
    }
}
