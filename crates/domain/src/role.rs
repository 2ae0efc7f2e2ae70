use serde::{Deserialize, Serialize};

/// Role whose lifecycle is controlled by the registry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ManagedRole {
    /// Stable role identifier.
    pub id: String,
    /// Unique role name.
    pub name: String,
    /// IAM role ARN provisioned by the registry.
    pub arn: String,
}

/// Role defined outside the registry and only referenced by it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UnmanagedRole {
    /// Stable role identifier.
    pub id: String,
    /// Unique role name.
    pub name: String,
    /// IAM role ARN owned by an external system.
    pub arn: String,
}

/// Role assignable to a user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "__typename")]
pub enum Role {
    /// Registry-managed role.
    #[serde(rename = "ManagedRole")]
    Managed(ManagedRole),
    /// Externally managed role.
    #[serde(rename = "UnmanagedRole")]
    Unmanaged(UnmanagedRole),
}

impl Role {
    /// Returns the role identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Managed(role) => role.id.as_str(),
            Self::Unmanaged(role) => role.id.as_str(),
        }
    }

    /// Returns the role name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Managed(role) => role.name.as_str(),
            Self::Unmanaged(role) => role.name.as_str(),
        }
    }

    /// Returns the IAM role ARN.
    #[must_use]
    pub fn arn(&self) -> &str {
        match self {
            Self::Managed(role) => role.arn.as_str(),
            Self::Unmanaged(role) => role.arn.as_str(),
        }
    }

    /// Returns whether the registry controls this role.
    #[must_use]
    pub fn is_managed(&self) -> bool {
        matches!(self, Self::Managed(_))
    }
}

impl From<ManagedRole> for Role {
    fn from(value: ManagedRole) -> Self {
        Self::Managed(value)
    }
}

impl From<UnmanagedRole> for Role {
    fn from(value: UnmanagedRole) -> Self {
        Self::Unmanaged(value)
    }
}
