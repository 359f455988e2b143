//! Orchestration layer: spawns the registry actor, wires the journal, and
//! tears everything down gracefully.

pub mod registry_system;
pub mod tracing;

pub use registry_system::RegistrySystem;
