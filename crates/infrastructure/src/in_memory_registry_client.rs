use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use quilt3_admin_application::{MutationResult, RegistryClient, UserInput};
use quilt3_admin_core::{AdminResult, InputError, OperationError, Quilt3AdminError};
use quilt3_admin_domain::{
    Role, SsoConfig, TabulatorTable, User, validate_email, validate_user_name,
};
use tokio::sync::RwLock;
use tracing::debug;

use crate::RegistrySeed;

mod sso;
mod tabulator;
mod users;

#[cfg(test)]
mod tests;

/// Registry contents guarded by a single lock so every operation is atomic.
#[derive(Debug, Default)]
struct RegistryState {
    roles: Vec<Role>,
    users: BTreeMap<String, User>,
    sso_config: Option<SsoConfig>,
    buckets: BTreeMap<String, BTreeMap<String, String>>,
    open_query: bool,
    acting_user: Option<String>,
    password_resets: Vec<String>,
}

impl RegistryState {
    fn find_role(&self, role_name: &str) -> Option<&Role> {
        self.roles.iter().find(|role| role.name() == role_name)
    }

    fn resolve_role(&self, path: &str, role_name: &str) -> Result<Role, InputError> {
        self.find_role(role_name).cloned().ok_or_else(|| {
            InputError::new(
                Some(path),
                "RoleDoesNotExist",
                format!("role '{role_name}' does not exist"),
            )
        })
    }

    fn resolve_roles(&self, path: &str, role_names: &[&str]) -> Result<Vec<Role>, Vec<InputError>> {
        let mut resolved = Vec::with_capacity(role_names.len());
        let mut errors = Vec::new();

        for role_name in role_names {
            match self.resolve_role(path, role_name) {
                Ok(role) => resolved.push(role),
                Err(error) => errors.push(error),
            }
        }

        if errors.is_empty() {
            Ok(resolved)
        } else {
            Err(errors)
        }
    }
}

/// In-process registry implementing every admin operation.
///
/// Intended for tests and local sandboxes; nothing is persisted.
#[derive(Debug, Default)]
pub struct InMemoryRegistryClient {
    state: RwLock<RegistryState>,
}

impl InMemoryRegistryClient {
    /// Creates an empty registry with no roles, users or buckets.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry from seed contents.
    ///
    /// Seeded users are checked like created ones: invalid names or emails,
    /// duplicate names and unknown roles are rejected with `InvalidInput`.
    /// Seeding the SSO config without an existing acting user is an
    /// `Operation` error.
    pub fn from_seed(seed: RegistrySeed) -> AdminResult<Self> {
        let mut state = RegistryState {
            roles: seed.roles,
            buckets: seed.buckets,
            open_query: seed.open_query,
            acting_user: seed.acting_user,
            ..RegistryState::default()
        };

        let now = Utc::now();
        for seed_user in seed.users {
            validate_user_name(seed_user.name.as_str())?;
            validate_email(seed_user.email.as_str())?;
            if state.users.contains_key(seed_user.name.as_str()) {
                return Err(Quilt3AdminError::InvalidInput(vec![duplicate_user(
                    seed_user.name.as_str(),
                )]));
            }

            let role = seed_user
                .role
                .as_deref()
                .map(|role_name| state.resolve_role("role", role_name))
                .transpose()
                .map_err(|error| Quilt3AdminError::InvalidInput(vec![error]))?;
            let extra_role_names: Vec<&str> =
                seed_user.extra_roles.iter().map(String::as_str).collect();
            let extra_roles = state
                .resolve_roles("extraRoles", &extra_role_names)
                .map_err(Quilt3AdminError::InvalidInput)?;

            let user = User {
                name: seed_user.name,
                email: seed_user.email.trim().to_owned(),
                date_joined: now,
                last_login: now,
                is_active: seed_user.is_active,
                is_admin: seed_user.is_admin,
                is_sso_only: seed_user.is_sso_only,
                is_service: seed_user.is_service,
                role,
                extra_roles,
            };
            state.users.insert(user.name.clone(), user);
        }

        if let Some(text) = seed.sso_config {
            let uploader = acting_user(&state).map_err(Quilt3AdminError::Operation)?;
            state.sso_config = Some(SsoConfig {
                text,
                timestamp: now,
                uploader,
            });
        }

        debug!(
            roles = state.roles.len(),
            users = state.users.len(),
            buckets = state.buckets.len(),
            "seeded in-memory registry"
        );

        Ok(Self {
            state: RwLock::new(state),
        })
    }

    /// Returns user names with a password reset started, oldest first.
    pub async fn password_resets(&self) -> Vec<String> {
        self.state.read().await.password_resets.clone()
    }
}

fn duplicate_user(name: &str) -> InputError {
    InputError::new(
        Some("name"),
        "Conflict",
        format!("user '{name}' already exists"),
    )
}

fn acting_user(state: &RegistryState) -> Result<User, OperationError> {
    state
        .acting_user
        .as_deref()
        .and_then(|name| state.users.get(name))
        .cloned()
        .ok_or_else(|| {
            OperationError::new(
                "NoActingUser",
                "an existing acting user is required to upload sso config",
            )
        })
}

#[async_trait]
impl RegistryClient for InMemoryRegistryClient {
    async fn roles_list(&self) -> AdminResult<Vec<Role>> {
        Ok(self.state.read().await.roles.clone())
    }

    async fn user_get(&self, name: &str) -> AdminResult<Option<User>> {
        Ok(self.state.read().await.users.get(name).cloned())
    }

    async fn users_list(&self) -> AdminResult<Vec<User>> {
        Ok(self.state.read().await.users.values().cloned().collect())
    }

    async fn user_create(&self, input: UserInput) -> AdminResult<MutationResult<User>> {
        Ok(self.user_create_impl(input).await)
    }

    async fn user_delete(&self, name: &str) -> AdminResult<Option<MutationResult<()>>> {
        Ok(self
            .state
            .write()
            .await
            .users
            .remove(name)
            .map(|_| MutationResult::Success(())))
    }

    async fn user_set_email(
        &self,
        name: &str,
        email: &str,
    ) -> AdminResult<Option<MutationResult<User>>> {
        Ok(self.user_set_email_impl(name, email).await)
    }

    async fn user_set_admin(
        &self,
        name: &str,
        admin: bool,
    ) -> AdminResult<Option<MutationResult<User>>> {
        Ok(self
            .update_user(name, |_, user| {
                user.is_admin = admin;
                Ok(())
            })
            .await)
    }

    async fn user_set_active(
        &self,
        name: &str,
        active: bool,
    ) -> AdminResult<Option<MutationResult<User>>> {
        Ok(self
            .update_user(name, |_, user| {
                user.is_active = active;
                Ok(())
            })
            .await)
    }

    async fn user_reset_password(&self, name: &str) -> AdminResult<Option<MutationResult<()>>> {
        Ok(self.user_reset_password_impl(name).await)
    }

    async fn user_set_role(
        &self,
        name: &str,
        role: &str,
        extra_roles: &[&str],
        append: bool,
    ) -> AdminResult<Option<MutationResult<User>>> {
        Ok(self.user_set_role_impl(name, role, extra_roles, append).await)
    }

    async fn user_add_roles(
        &self,
        name: &str,
        roles: &[&str],
    ) -> AdminResult<Option<MutationResult<User>>> {
        Ok(self.user_add_roles_impl(name, roles).await)
    }

    async fn user_remove_roles(
        &self,
        name: &str,
        roles: &[&str],
        fallback: Option<&str>,
    ) -> AdminResult<Option<MutationResult<User>>> {
        Ok(self.user_remove_roles_impl(name, roles, fallback).await)
    }

    async fn sso_config_get(&self) -> AdminResult<Option<SsoConfig>> {
        Ok(self.state.read().await.sso_config.clone())
    }

    async fn sso_config_set(
        &self,
        config: Option<&str>,
    ) -> AdminResult<MutationResult<Option<SsoConfig>>> {
        Ok(self.sso_config_set_impl(config).await)
    }

    async fn bucket_tabulator_tables_list(
        &self,
        bucket_name: &str,
    ) -> AdminResult<Option<Vec<TabulatorTable>>> {
        Ok(self.bucket_tabulator_tables_list_impl(bucket_name).await)
    }

    async fn bucket_tabulator_table_set(
        &self,
        bucket_name: &str,
        table_name: &str,
        config: Option<&str>,
    ) -> AdminResult<MutationResult<()>> {
        Ok(self
            .bucket_tabulator_table_set_impl(bucket_name, table_name, config)
            .await)
    }

    async fn bucket_tabulator_table_rename(
        &self,
        bucket_name: &str,
        table_name: &str,
        new_table_name: &str,
    ) -> AdminResult<MutationResult<()>> {
        Ok(self
            .bucket_tabulator_table_rename_impl(bucket_name, table_name, new_table_name)
            .await)
    }

    async fn tabulator_get_open_query(&self) -> AdminResult<bool> {
        Ok(self.state.read().await.open_query)
    }

    async fn tabulator_set_open_query(&self, enabled: bool) -> AdminResult<bool> {
        let mut state = self.state.write().await;
        state.open_query = enabled;
        Ok(state.open_query)
    }
}
