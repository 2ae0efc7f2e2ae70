//! Role catalog operations.

use quilt3_admin_core::AdminResult;
use quilt3_admin_domain::Role;
use tracing::debug;

use crate::RegistryClient;

/// Lists every managed and unmanaged role.
pub async fn list(client: &dyn RegistryClient) -> AdminResult<Vec<Role>> {
    let roles = client.roles_list().await?;
    debug!(count = roles.len(), "listed registry roles");
    Ok(roles)
}
