//! User account administration.
//!
//! Every function naming a user fails with
//! [`UserNotFoundError`](quilt3_admin_core::UserNotFoundError) when the
//! registry does not know that user, except [`get`] which returns `None`.

use quilt3_admin_core::AdminResult;
use quilt3_admin_domain::User;
use tracing::debug;

use crate::outcome::{handle_errors, handle_user_mutation};
use crate::{RegistryClient, UserInput};

/// Returns a user by name, `None` if it does not exist.
pub async fn get(client: &dyn RegistryClient, name: &str) -> AdminResult<Option<User>> {
    client.user_get(name).await
}

/// Lists all users.
pub async fn list(client: &dyn RegistryClient) -> AdminResult<Vec<User>> {
    client.users_list().await
}

/// Creates a user with an active role and optional extra roles.
pub async fn create(
    client: &dyn RegistryClient,
    name: &str,
    email: &str,
    role: &str,
    extra_roles: &[&str],
) -> AdminResult<User> {
    debug!(user = name, role, extra_roles = extra_roles.len(), "creating user");
    let result = client
        .user_create(UserInput {
            name: name.to_owned(),
            email: email.to_owned(),
            role: role.to_owned(),
            extra_roles: extra_roles.iter().map(|role| (*role).to_owned()).collect(),
        })
        .await?;
    handle_errors("users.create", result)
}

/// Deletes a user.
pub async fn delete(client: &dyn RegistryClient, name: &str) -> AdminResult<()> {
    debug!(user = name, "deleting user");
    let result = client.user_delete(name).await?;
    handle_user_mutation("users.delete", name, result)
}

/// Changes a user's email.
pub async fn set_email(client: &dyn RegistryClient, name: &str, email: &str) -> AdminResult<User> {
    let result = client.user_set_email(name, email).await?;
    handle_user_mutation("users.set_email", name, result)
}

/// Grants or revokes administrator rights.
pub async fn set_admin(client: &dyn RegistryClient, name: &str, admin: bool) -> AdminResult<User> {
    debug!(user = name, admin, "setting admin flag");
    let result = client.user_set_admin(name, admin).await?;
    handle_user_mutation("users.set_admin", name, result)
}

/// Activates or deactivates a user.
pub async fn set_active(
    client: &dyn RegistryClient,
    name: &str,
    active: bool,
) -> AdminResult<User> {
    debug!(user = name, active, "setting active flag");
    let result = client.user_set_active(name, active).await?;
    handle_user_mutation("users.set_active", name, result)
}

/// Starts a password reset for a user.
pub async fn reset_password(client: &dyn RegistryClient, name: &str) -> AdminResult<()> {
    let result = client.user_reset_password(name).await?;
    handle_user_mutation("users.reset_password", name, result)
}

/// Sets the active role.
///
/// Extra roles replace the current ones unless `append` is set, in which
/// case they are added to them.
pub async fn set_role(
    client: &dyn RegistryClient,
    name: &str,
    role: &str,
    extra_roles: &[&str],
    append: bool,
) -> AdminResult<User> {
    debug!(user = name, role, append, "setting user role");
    let result = client
        .user_set_role(name, role, extra_roles, append)
        .await?;
    handle_user_mutation("users.set_role", name, result)
}

/// Adds extra roles to a user.
pub async fn add_roles(
    client: &dyn RegistryClient,
    name: &str,
    roles: &[&str],
) -> AdminResult<User> {
    let result = client.user_add_roles(name, roles).await?;
    handle_user_mutation("users.add_roles", name, result)
}

/// Removes roles from a user.
///
/// `fallback` becomes the active role when the active role is among `roles`.
pub async fn remove_roles(
    client: &dyn RegistryClient,
    name: &str,
    roles: &[&str],
    fallback: Option<&str>,
) -> AdminResult<User> {
    let result = client.user_remove_roles(name, roles, fallback).await?;
    handle_user_mutation("users.remove_roles", name, result)
}
