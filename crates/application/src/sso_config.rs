//! Single-sign-on configuration operations.

use quilt3_admin_core::AdminResult;
use quilt3_admin_domain::SsoConfig;
use tracing::debug;

use crate::RegistryClient;
use crate::outcome::handle_errors;

/// Returns the current SSO configuration, if one is set.
pub async fn get(client: &dyn RegistryClient) -> AdminResult<Option<SsoConfig>> {
    client.sso_config_get().await
}

/// Replaces the SSO configuration, or removes it when `config` is `None`.
///
/// Returns the stored configuration, `None` after a removal.
pub async fn set(
    client: &dyn RegistryClient,
    config: Option<&str>,
) -> AdminResult<Option<SsoConfig>> {
    debug!(remove = config.is_none(), "updating sso config");
    let result = client.sso_config_set(config).await?;
    handle_errors("sso_config.set", result)
}
