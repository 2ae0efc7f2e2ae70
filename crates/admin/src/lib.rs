//! APIs for quilt3 registry administrators.
//!
//! The registry is the catalog backend that manages users, roles, SSO and
//! tabulator tables. Every operation takes a [`RegistryClient`], the port
//! over the generated GraphQL client:
//!
//! ```ignore
//! let user = quilt3_admin::users::get(&client, "alice").await?;
//! quilt3_admin::users::set_admin(&client, "alice", true).await?;
//! ```

#![forbid(unsafe_code)]

pub use quilt3_admin_application::{roles, sso_config, tabulator, users};

pub use quilt3_admin_core::{
    AdminResult, BucketNotFoundError, InputError, OperationError, Quilt3AdminError,
    UserNotFoundError,
};

pub use quilt3_admin_domain::{
    ManagedRole, Role, SsoConfig as SSOConfig, TabulatorTable, UnmanagedRole, User,
};

pub use quilt3_admin_application::{MutationResult, RegistryClient, UserInput};
