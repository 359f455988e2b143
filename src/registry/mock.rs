//! # Mock Registry
//!
//! Utilities for testing callers of [`RegistryClient`] in isolation.
//!
//! # Testing Strategy
//! Tests of the console (or any other caller) should not need a full
//! [`RegistryActor`](crate::registry::RegistryActor). [`create_mock_client`]
//! returns a real client whose requests land on a channel the test controls;
//! the `expect_*` helpers pull the next request off that channel, hand back
//! its payload and responder, and let the test script the reply — success,
//! failure, whatever the scenario needs.

use tokio::sync::mpsc;

use crate::clients::RegistryClient;
use crate::model::ResourceKind;
use crate::registry::{MaintenanceOutcome, RegistryRequest, Response};

/// Creates a mock client and a receiver for asserting requests.
pub fn create_mock_client(
    buffer_size: usize,
) -> (RegistryClient, mpsc::Receiver<RegistryRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (RegistryClient::new(sender), receiver)
}

/// Verifies that the next request is `AddResource` and returns its payload.
pub async fn expect_add_resource(
    receiver: &mut mpsc::Receiver<RegistryRequest>,
) -> Option<(String, ResourceKind, Response<()>)> {
    match receiver.recv().await {
        Some(RegistryRequest::AddResource { id, kind, respond_to }) => Some((id, kind, respond_to)),
        _ => None,
    }
}

/// Verifies that the next request is `Allocate` and returns its payload.
pub async fn expect_allocate(
    receiver: &mut mpsc::Receiver<RegistryRequest>,
) -> Option<(String, String, Response<()>)> {
    match receiver.recv().await {
        Some(RegistryRequest::Allocate { resource_id, project_id, respond_to }) => {
            Some((resource_id, project_id, respond_to))
        }
        _ => None,
    }
}

/// Verifies that the next request is `Maintain` and returns its payload.
pub async fn expect_maintain(
    receiver: &mut mpsc::Receiver<RegistryRequest>,
) -> Option<(String, Response<MaintenanceOutcome>)> {
    match receiver.recv().await {
        Some(RegistryRequest::Maintain { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Verifies that the next request is `DescribeState` and returns its payload.
pub async fn expect_describe_state(
    receiver: &mut mpsc::Receiver<RegistryRequest>,
) -> Option<(String, Response<String>)> {
    match receiver.recv().await {
        Some(RegistryRequest::DescribeState { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Verifies that the next request is `LogTransaction` and returns its payload.
pub async fn expect_log_transaction(
    receiver: &mut mpsc::Receiver<RegistryRequest>,
) -> Option<(String, Response<()>)> {
    match receiver.recv().await {
        Some(RegistryRequest::LogTransaction { message, respond_to }) => {
            Some((message, respond_to))
        }
        _ => None,
    }
}
