use async_trait::async_trait;

use quilt3_admin_core::AdminResult;
use quilt3_admin_domain::{Role, SsoConfig, TabulatorTable, User};

use super::MutationResult;

/// Arguments for creating a registry user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserInput {
    /// Unique login name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Active role name.
    pub role: String,
    /// Additional role names.
    pub extra_roles: Vec<String>,
}

/// Port over the generated registry client.
///
/// Methods map one-to-one onto registry admin operations. Operations that
/// target a user return `None` when that user does not exist.
#[async_trait]
pub trait RegistryClient: Send + Sync {
    /// Lists every role known to the registry.
    async fn roles_list(&self) -> AdminResult<Vec<Role>>;

    /// Fetches a user by name.
    async fn user_get(&self, name: &str) -> AdminResult<Option<User>>;

    /// Lists all users.
    async fn users_list(&self) -> AdminResult<Vec<User>>;

    /// Creates a user.
    async fn user_create(&self, input: UserInput) -> AdminResult<MutationResult<User>>;

    /// Deletes a user.
    async fn user_delete(&self, name: &str) -> AdminResult<Option<MutationResult<()>>>;

    /// Changes a user's email.
    async fn user_set_email(
        &self,
        name: &str,
        email: &str,
    ) -> AdminResult<Option<MutationResult<User>>>;

    /// Grants or revokes administrator rights.
    async fn user_set_admin(
        &self,
        name: &str,
        admin: bool,
    ) -> AdminResult<Option<MutationResult<User>>>;

    /// Activates or deactivates a user.
    async fn user_set_active(
        &self,
        name: &str,
        active: bool,
    ) -> AdminResult<Option<MutationResult<User>>>;

    /// Starts a password reset for a user.
    async fn user_reset_password(&self, name: &str) -> AdminResult<Option<MutationResult<()>>>;

    /// Sets the active role and, optionally, replaces or extends extra roles.
    async fn user_set_role(
        &self,
        name: &str,
        role: &str,
        extra_roles: &[&str],
        append: bool,
    ) -> AdminResult<Option<MutationResult<User>>>;

    /// Adds extra roles to a user.
    async fn user_add_roles(
        &self,
        name: &str,
        roles: &[&str],
    ) -> AdminResult<Option<MutationResult<User>>>;

    /// Removes roles from a user, switching to `fallback` if the active role goes.
    async fn user_remove_roles(
        &self,
        name: &str,
        roles: &[&str],
        fallback: Option<&str>,
    ) -> AdminResult<Option<MutationResult<User>>>;

    /// Returns the current SSO configuration.
    async fn sso_config_get(&self) -> AdminResult<Option<SsoConfig>>;

    /// Replaces or, with `None`, removes the SSO configuration.
    async fn sso_config_set(
        &self,
        config: Option<&str>,
    ) -> AdminResult<MutationResult<Option<SsoConfig>>>;

    /// Lists a bucket's tabulator tables, `None` when the bucket is unknown.
    async fn bucket_tabulator_tables_list(
        &self,
        bucket_name: &str,
    ) -> AdminResult<Option<Vec<TabulatorTable>>>;

    /// Creates, replaces or, with `None`, deletes a tabulator table.
    async fn bucket_tabulator_table_set(
        &self,
        bucket_name: &str,
        table_name: &str,
        config: Option<&str>,
    ) -> AdminResult<MutationResult<()>>;

    /// Renames a tabulator table.
    async fn bucket_tabulator_table_rename(
        &self,
        bucket_name: &str,
        table_name: &str,
        new_table_name: &str,
    ) -> AdminResult<MutationResult<()>>;

    /// Returns the registry-wide tabulator open query flag.
    async fn tabulator_get_open_query(&self) -> AdminResult<bool>;

    /// Updates the open query flag and returns the stored value.
    async fn tabulator_set_open_query(&self, enabled: bool) -> AdminResult<bool>;
}
