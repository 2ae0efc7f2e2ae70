//! Registry client port and administrative operation namespaces.

#![forbid(unsafe_code)]

mod outcome;
mod registry_ports;

pub mod roles;
pub mod sso_config;
pub mod tabulator;
pub mod users;

pub use registry_ports::{MutationResult, RegistryClient, UserInput};
