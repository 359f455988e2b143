//! The registry: state rules, the actor that serializes access to them, and
//! test utilities.
//!
//! # Main Components
//!
//! - [`Registry`] - The synchronous arena holding resources and projects.
//! - [`RegistryActor`] / [`RegistryRequest`] - The sequential message loop.
//! - [`RegistryError`] - Error taxonomy for all operations.
//!
//! # Testing
//!
//! See the [`mock`] module for utilities to test callers of
//! [`RegistryClient`](crate::clients::RegistryClient) without spawning the
//! real actor.

pub mod actor;
pub mod core;
pub mod error;
pub mod mock;

pub use actor::{RegistryActor, RegistryRequest, Response};
pub use core::{MaintenanceOutcome, Registry};
pub use error::RegistryError;

use crate::clients::RegistryClient;
use crate::journal::TransactionSink;

/// Creates a registry actor wired to the given journal sink, plus its client.
pub fn new(journal: Box<dyn TransactionSink>) -> (RegistryActor, RegistryClient) {
    let (actor, sender) = RegistryActor::new(32, journal);
    (actor, RegistryClient::new(sender))
}
