use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::User;

/// Single-sign-on configuration document stored by the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SsoConfig {
    /// Raw configuration text.
    pub text: String,
    /// Upload time.
    pub timestamp: DateTime<Utc>,
    /// Account that uploaded this configuration.
    pub uploader: User,
}
