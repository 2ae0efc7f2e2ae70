//! User account entity and argument validation.

use chrono::{DateTime, Utc};
use quilt3_admin_core::{AdminResult, InputError, Quilt3AdminError};
use serde::{Deserialize, Serialize};

use crate::Role;

/// Maximum accepted email length (RFC 5321 path limit).
const EMAIL_MAX_LENGTH: usize = 254;

/// Maximum accepted user name length.
const USER_NAME_MAX_LENGTH: usize = 64;

/// Administrable registry account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique login name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Account creation time.
    pub date_joined: DateTime<Utc>,
    /// Most recent successful login.
    pub last_login: DateTime<Utc>,
    /// Whether the account may log in.
    pub is_active: bool,
    /// Whether the account has registry administrator rights.
    pub is_admin: bool,
    /// Whether the account can only authenticate through SSO.
    pub is_sso_only: bool,
    /// Whether the account is a service identity.
    pub is_service: bool,
    /// Active role.
    pub role: Option<Role>,
    /// Additional roles the user may switch to.
    #[serde(default)]
    pub extra_roles: Vec<Role>,
}

impl User {
    /// Returns the active role name followed by extra role names.
    #[must_use]
    pub fn role_names(&self) -> Vec<&str> {
        self.role
            .iter()
            .chain(self.extra_roles.iter())
            .map(Role::name)
            .collect()
    }

    /// Returns whether the user holds the role, active or extra.
    #[must_use]
    pub fn has_role(&self, role_name: &str) -> bool {
        self.role_names().contains(&role_name)
    }
}

/// Validates the structure of an email argument.
///
/// Requires exactly one `@`, a non-empty local part and a dotted domain.
pub fn validate_email(value: &str) -> AdminResult<()> {
    let trimmed = value.trim();

    let reason = if trimmed.is_empty() {
        Some("email address must not be empty")
    } else if trimmed.len() > EMAIL_MAX_LENGTH {
        Some("email address must not exceed 254 characters")
    } else {
        match trimmed.split_once('@') {
            None => Some("email address must contain exactly one '@'"),
            Some((_, domain)) if domain.contains('@') => {
                Some("email address must contain exactly one '@'")
            }
            Some(("", _)) => Some("email local part must not be empty"),
            Some((_, domain)) if domain.is_empty() || !domain.contains('.') => {
                Some("email domain must contain at least one '.'")
            }
            Some(_) => None,
        }
    };

    match reason {
        Some(message) => Err(invalid("email", "InvalidEmail", message)),
        None => Ok(()),
    }
}

/// Validates a user name argument.
pub fn validate_user_name(value: &str) -> AdminResult<()> {
    if value.is_empty() || value.len() > USER_NAME_MAX_LENGTH {
        return Err(invalid(
            "name",
            "InvalidUsername",
            "user name must be between 1 and 64 characters",
        ));
    }

    if !value
        .chars()
        .all(|character| character.is_ascii_alphanumeric() || "_-.".contains(character))
    {
        return Err(invalid(
            "name",
            "InvalidUsername",
            "user name may only contain letters, digits, '_', '-' and '.'",
        ));
    }

    Ok(())
}

fn invalid(path: &str, name: &str, message: &str) -> Quilt3AdminError {
    Quilt3AdminError::InvalidInput(vec![InputError::new(Some(path), name, message)])
}
