//! Type-safe client facade over the registry actor's message passing.

pub mod registry_client;

pub use registry_client::RegistryClient;
