//! # Registry Actor
//!
//! The "server" half of the registry: it owns the [`Registry`] state and the
//! receiver end of the request channel, and processes one request at a time.
//!
//! **Concurrency Model**:
//! A single actor task owns both entity maps, so every operation — including
//! allocation, which mutates a resource and a project together — completes
//! before the next request is taken. No `Mutex` needed.
//!
//! The journal is a best-effort side channel: a failed write is logged with
//! `warn!` and never turns a successful business operation into a failure.

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

use crate::journal::TransactionSink;
use crate::model::{Project, Resource, ResourceKind};
use crate::registry::{MaintenanceOutcome, Registry, RegistryError};

/// One-shot response channel carried by every request.
pub type Response<T> = oneshot::Sender<Result<T, RegistryError>>;

/// Message type sent to the registry actor to request operations.
///
/// Each variant corresponds to one operation of the registry contract; the
/// console issues exactly these through [`RegistryClient`](crate::clients::RegistryClient).
#[derive(Debug)]
pub enum RegistryRequest {
    AddResource {
        id: String,
        kind: ResourceKind,
        respond_to: Response<()>,
    },
    GetResource {
        id: String,
        respond_to: Response<Resource>,
    },
    AddProject {
        id: String,
        name: String,
        respond_to: Response<()>,
    },
    GetProject {
        id: String,
        respond_to: Response<Project>,
    },
    Allocate {
        resource_id: String,
        project_id: String,
        respond_to: Response<()>,
    },
    MarkInUse {
        id: String,
        respond_to: Response<()>,
    },
    Maintain {
        id: String,
        respond_to: Response<MaintenanceOutcome>,
    },
    DescribeState {
        id: String,
        respond_to: Response<String>,
    },
    LogTransaction {
        message: String,
        respond_to: Response<()>,
    },
}

/// The actor that wraps [`Registry`] in a sequential message loop and appends
/// journal lines for state-changing operations.
pub struct RegistryActor {
    receiver: mpsc::Receiver<RegistryRequest>,
    registry: Registry,
    journal: Box<dyn TransactionSink>,
}

impl RegistryActor {
    /// Builds the actor and the sender side of its channel.
    ///
    /// Prefer [`crate::registry::new`], which also wraps the sender in a
    /// [`RegistryClient`](crate::clients::RegistryClient).
    pub fn new(
        buffer_size: usize,
        journal: Box<dyn TransactionSink>,
    ) -> (Self, mpsc::Sender<RegistryRequest>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            registry: Registry::new(),
            journal,
        };
        (actor, sender)
    }

    /// Appends a journal line, downgrading write failures to a warning.
    async fn journal_line(&self, message: &str) {
        if let Err(e) = self.journal.append(message).await {
            warn!(error = %e, "Journal write failed");
        }
    }

    /// Runs the actor's event loop, processing requests until the channel
    /// closes (all clients dropped).
    pub async fn run(mut self) {
        info!("Registry actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                RegistryRequest::AddResource { id, kind, respond_to } => {
                    debug!(%id, %kind, "AddResource");
                    let result = self.registry.add_resource(&id, kind);
                    match &result {
                        Ok(()) => {
                            info!(%id, %kind, size = self.registry.resource_count(), "Resource added");
                        }
                        Err(e) => warn!(%id, error = %e, "Add resource failed"),
                    }
                    let _ = respond_to.send(result);
                }
                RegistryRequest::GetResource { id, respond_to } => {
                    let result = self.registry.get_resource(&id).cloned();
                    debug!(%id, found = result.is_ok(), "GetResource");
                    let _ = respond_to.send(result);
                }
                RegistryRequest::AddProject { id, name, respond_to } => {
                    debug!(%id, %name, "AddProject");
                    let result = self.registry.add_project(&id, &name);
                    match &result {
                        Ok(()) => {
                            info!(%id, %name, size = self.registry.project_count(), "Project added");
                        }
                        Err(e) => warn!(%id, error = %e, "Add project failed"),
                    }
                    let _ = respond_to.send(result);
                }
                RegistryRequest::GetProject { id, respond_to } => {
                    let result = self.registry.get_project(&id).cloned();
                    debug!(%id, found = result.is_ok(), "GetProject");
                    let _ = respond_to.send(result);
                }
                RegistryRequest::Allocate { resource_id, project_id, respond_to } => {
                    debug!(%resource_id, %project_id, "Allocate");
                    match self.registry.allocate_resource(&resource_id, &project_id) {
                        Ok(project_name) => {
                            info!(%resource_id, %project_id, "Resource allocated");
                            self.journal_line(&format!(
                                "Resource {} allocated to project {}",
                                resource_id, project_name
                            ))
                            .await;
                            let _ = respond_to.send(Ok(()));
                        }
                        Err(e) => {
                            warn!(%resource_id, %project_id, error = %e, "Allocation failed");
                            let _ = respond_to.send(Err(e));
                        }
                    }
                }
                RegistryRequest::MarkInUse { id, respond_to } => {
                    debug!(%id, "MarkInUse");
                    match self.registry.mark_in_use(&id) {
                        Ok(()) => {
                            info!(%id, "Resource in use");
                            self.journal_line(&format!("Resource {} is now in use.", id))
                                .await;
                            let _ = respond_to.send(Ok(()));
                        }
                        Err(e) => {
                            warn!(%id, error = %e, "Mark in use failed");
                            let _ = respond_to.send(Err(e));
                        }
                    }
                }
                RegistryRequest::Maintain { id, respond_to } => {
                    debug!(%id, "Maintain");
                    match self.registry.maintain_resource(&id) {
                        Ok(MaintenanceOutcome::UnderMaintenance) => {
                            info!(%id, "Resource under maintenance");
                            // Journaled only on the successful branch.
                            self.journal_line(&format!("Resource {} is under maintenance.", id))
                                .await;
                            let _ = respond_to.send(Ok(MaintenanceOutcome::UnderMaintenance));
                        }
                        Ok(outcome) => {
                            info!(%id, "Maintenance rejected: not equipment");
                            let _ = respond_to.send(Ok(outcome));
                        }
                        Err(e) => {
                            warn!(%id, error = %e, "Maintenance failed");
                            let _ = respond_to.send(Err(e));
                        }
                    }
                }
                RegistryRequest::DescribeState { id, respond_to } => {
                    debug!(%id, "DescribeState");
                    let result = self.registry.describe_state(&id);
                    if let Err(e) = &result {
                        warn!(%id, error = %e, "Describe state failed");
                    }
                    let _ = respond_to.send(result);
                }
                RegistryRequest::LogTransaction { message, respond_to } => {
                    debug!(%message, "LogTransaction");
                    self.journal_line(&message).await;
                    let _ = respond_to.send(Ok(()));
                }
            }
        }

        info!(
            resources = self.registry.resource_count(),
            projects = self.registry.project_count(),
            "Registry actor shutdown"
        );
    }
}
