mod client;
mod mutation;

pub use client::{RegistryClient, UserInput};
pub use mutation::MutationResult;
