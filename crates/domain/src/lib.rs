//! Registry administration entities and invariants.

#![forbid(unsafe_code)]

mod role;
mod sso_config;
mod tabulator;
mod user;

pub use role::{ManagedRole, Role, UnmanagedRole};
pub use sso_config::SsoConfig;
pub use tabulator::{TABLE_NAME_MAX_LENGTH, TabulatorTable, validate_table_name};
pub use user::{User, validate_email, validate_user_name};
