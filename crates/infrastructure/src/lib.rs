//! Infrastructure adapters for the registry client port.

#![forbid(unsafe_code)]

mod in_memory_registry_client;
mod registry_seed;

pub use in_memory_registry_client::InMemoryRegistryClient;
pub use registry_seed::{RegistrySeed, SeedUser};
