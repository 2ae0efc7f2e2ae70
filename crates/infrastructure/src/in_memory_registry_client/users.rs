use super::*;

impl InMemoryRegistryClient {
    /// Applies `update` to a copy of the user and stores it only on success.
    pub(super) async fn update_user(
        &self,
        name: &str,
        update: impl FnOnce(&RegistryState, &mut User) -> AdminResult<()>,
    ) -> Option<MutationResult<User>> {
        let mut state = self.state.write().await;
        let mut user = state.users.get(name)?.clone();

        if let Err(error) = update(&*state, &mut user) {
            return Some(error.into());
        }

        state.users.insert(name.to_owned(), user.clone());
        Some(MutationResult::Success(user))
    }

    pub(super) async fn user_create_impl(&self, input: UserInput) -> MutationResult<User> {
        let mut state = self.state.write().await;
        let mut errors = Vec::new();

        for validation in [
            validate_user_name(input.name.as_str()),
            validate_email(input.email.as_str()),
        ] {
            if let Err(error) = validation {
                errors.extend_from_slice(error.input_errors());
            }
        }

        if state.users.contains_key(input.name.as_str()) {
            errors.push(duplicate_user(input.name.as_str()));
        }

        let role = state
            .resolve_role("role", input.role.as_str())
            .map_err(|error| errors.push(error))
            .ok();
        let extra_role_names: Vec<&str> = input.extra_roles.iter().map(String::as_str).collect();
        let extra_roles = state
            .resolve_roles("extraRoles", &extra_role_names)
            .map_err(|role_errors| errors.extend(role_errors))
            .unwrap_or_default();

        if !errors.is_empty() {
            return MutationResult::InvalidInput(errors);
        }

        let now = Utc::now();
        let mut user = User {
            name: input.name,
            email: input.email.trim().to_owned(),
            date_joined: now,
            last_login: now,
            is_active: true,
            is_admin: false,
            is_sso_only: false,
            is_service: false,
            role,
            extra_roles: Vec::new(),
        };
        merge_extra_roles(&mut user, extra_roles);

        state.users.insert(user.name.clone(), user.clone());
        MutationResult::Success(user)
    }

    pub(super) async fn user_set_email_impl(
        &self,
        name: &str,
        email: &str,
    ) -> Option<MutationResult<User>> {
        self.update_user(name, |_, user| {
            validate_email(email)?;
            user.email = email.trim().to_owned();
            Ok(())
        })
        .await
    }

    pub(super) async fn user_reset_password_impl(
        &self,
        name: &str,
    ) -> Option<MutationResult<()>> {
        let mut state = self.state.write().await;
        let user = state.users.get(name)?;

        if user.is_sso_only {
            return Some(MutationResult::OperationError(OperationError::new(
                "SsoOnlyUser",
                format!("user '{name}' authenticates through sso and has no password"),
            )));
        }

        state.password_resets.push(name.to_owned());
        Some(MutationResult::Success(()))
    }

    pub(super) async fn user_set_role_impl(
        &self,
        name: &str,
        role_name: &str,
        extra_role_names: &[&str],
        append: bool,
    ) -> Option<MutationResult<User>> {
        self.update_user(name, |state, user| {
            let role = state
                .resolve_role("role", role_name)
                .map_err(|error| Quilt3AdminError::InvalidInput(vec![error]))?;
            let extra_roles = state
                .resolve_roles("extraRoles", extra_role_names)
                .map_err(Quilt3AdminError::InvalidInput)?;

            if !append {
                user.extra_roles.clear();
            }
            user.role = Some(role);
            merge_extra_roles(user, extra_roles);
            Ok(())
        })
        .await
    }

    pub(super) async fn user_add_roles_impl(
        &self,
        name: &str,
        role_names: &[&str],
    ) -> Option<MutationResult<User>> {
        self.update_user(name, |state, user| {
            let roles = state
                .resolve_roles("roles", role_names)
                .map_err(Quilt3AdminError::InvalidInput)?;
            merge_extra_roles(user, roles);
            Ok(())
        })
        .await
    }

    pub(super) async fn user_remove_roles_impl(
        &self,
        name: &str,
        role_names: &[&str],
        fallback: Option<&str>,
    ) -> Option<MutationResult<User>> {
        self.update_user(name, |state, user| {
            let removes_active_role = user
                .role
                .as_ref()
                .is_some_and(|role| role_names.contains(&role.name()));

            if removes_active_role {
                let Some(fallback) = fallback else {
                    return Err(OperationError::new(
                        "RoleRemovalWithoutFallback",
                        "removing the active role requires a fallback role",
                    )
                    .into());
                };
                if role_names.contains(&fallback) {
                    return Err(Quilt3AdminError::InvalidInput(vec![InputError::new(
                        Some("fallback"),
                        "InvalidFallback",
                        format!("fallback role '{fallback}' is also being removed"),
                    )]));
                }

                let fallback_role = state
                    .resolve_role("fallback", fallback)
                    .map_err(|error| Quilt3AdminError::InvalidInput(vec![error]))?;
                user.role = Some(fallback_role);
            }

            let active_role_name = user.role.as_ref().map(|role| role.name().to_owned());
            user.extra_roles.retain(|role| {
                !role_names.contains(&role.name())
                    && Some(role.name()) != active_role_name.as_deref()
            });
            Ok(())
        })
        .await
    }
}

/// Appends roles the user does not hold yet, never duplicating the active role.
fn merge_extra_roles(user: &mut User, roles: Vec<Role>) {
    for role in roles {
        if !user.has_role(role.name()) {
            user.extra_roles.push(role);
        }
    }

    let active_role_name = user.role.as_ref().map(|role| role.name().to_owned());
    user.extra_roles
        .retain(|role| Some(role.name()) != active_role_name.as_deref());
}
