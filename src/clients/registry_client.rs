use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument};

use crate::model::{Project, Resource, ResourceKind};
use crate::registry::{MaintenanceOutcome, RegistryError, RegistryRequest};

/// Client for interacting with the registry actor.
///
/// Each method is one operation of the registry contract. The caller never
/// sees channels or message types; it sends typed arguments and gets back a
/// `Result` carrying either the operation's value or a [`RegistryError`].
#[derive(Clone)]
pub struct RegistryClient {
    sender: mpsc::Sender<RegistryRequest>,
}

impl RegistryClient {
    pub fn new(sender: mpsc::Sender<RegistryRequest>) -> Self {
        Self { sender }
    }

    async fn request<T>(
        &self,
        build: impl FnOnce(oneshot::Sender<Result<T, RegistryError>>) -> RegistryRequest,
    ) -> Result<T, RegistryError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| RegistryError::ActorClosed)?;
        response.await.map_err(|_| RegistryError::ActorDropped)?
    }

    /// Registers a new resource in state `Idle`. Rejects duplicate ids.
    #[instrument(skip(self))]
    pub async fn add_resource(&self, id: &str, kind: ResourceKind) -> Result<(), RegistryError> {
        debug!("Sending request");
        let id = id.to_string();
        self.request(|respond_to| RegistryRequest::AddResource { id, kind, respond_to })
            .await
    }

    /// Fetches a resource by id.
    #[instrument(skip(self))]
    pub async fn get_resource(&self, id: &str) -> Result<Resource, RegistryError> {
        debug!("Sending request");
        let id = id.to_string();
        self.request(|respond_to| RegistryRequest::GetResource { id, respond_to })
            .await
    }

    /// Registers a new project. Rejects duplicate ids.
    #[instrument(skip(self))]
    pub async fn add_project(&self, id: &str, name: &str) -> Result<(), RegistryError> {
        debug!("Sending request");
        let id = id.to_string();
        let name = name.to_string();
        self.request(|respond_to| RegistryRequest::AddProject { id, name, respond_to })
            .await
    }

    /// Fetches a project by id.
    #[instrument(skip(self))]
    pub async fn get_project(&self, id: &str) -> Result<Project, RegistryError> {
        debug!("Sending request");
        let id = id.to_string();
        self.request(|respond_to| RegistryRequest::GetProject { id, respond_to })
            .await
    }

    /// Allocates a resource to a project: state becomes `InUse`, the project
    /// roster gains the resource, and the back-reference moves.
    #[instrument(skip(self))]
    pub async fn allocate_resource(
        &self,
        resource_id: &str,
        project_id: &str,
    ) -> Result<(), RegistryError> {
        debug!("Sending request");
        let resource_id = resource_id.to_string();
        let project_id = project_id.to_string();
        self.request(|respond_to| RegistryRequest::Allocate {
            resource_id,
            project_id,
            respond_to,
        })
        .await
    }

    /// Marks a resource as in use without allocating it.
    #[instrument(skip(self))]
    pub async fn mark_in_use(&self, id: &str) -> Result<(), RegistryError> {
        debug!("Sending request");
        let id = id.to_string();
        self.request(|respond_to| RegistryRequest::MarkInUse { id, respond_to })
            .await
    }

    /// Requests maintenance. Equipment transitions to `UnderMaintenance`;
    /// anything else reports [`MaintenanceOutcome::NotEquipment`] unchanged.
    #[instrument(skip(self))]
    pub async fn maintain_resource(&self, id: &str) -> Result<MaintenanceOutcome, RegistryError> {
        debug!("Sending request");
        let id = id.to_string();
        self.request(|respond_to| RegistryRequest::Maintain { id, respond_to })
            .await
    }

    /// Renders a resource's state as a human-readable sentence.
    #[instrument(skip(self))]
    pub async fn describe_state(&self, id: &str) -> Result<String, RegistryError> {
        debug!("Sending request");
        let id = id.to_string();
        self.request(|respond_to| RegistryRequest::DescribeState { id, respond_to })
            .await
    }

    /// Appends a free-text line to the transaction journal. Best effort; a
    /// journal write failure never surfaces here.
    #[instrument(skip(self))]
    pub async fn log_transaction(&self, message: &str) -> Result<(), RegistryError> {
        debug!("Sending request");
        let message = message.to_string();
        self.request(|respond_to| RegistryRequest::LogTransaction { message, respond_to })
            .await
    }
}
