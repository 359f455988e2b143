//! # Registry Core
//!
//! [`Registry`] is the synchronous, invariant-bearing heart of the system: an
//! arena of resources and projects indexed by id, plus the operations that
//! mutate them.
//!
//! # Architecture Note
//! Keeping this struct free of channels and I/O means every rule can be tested
//! with a fresh `Registry` per test — no task spawning, no singleton. The
//! [`RegistryActor`](crate::registry::RegistryActor) wraps it to provide the
//! sequential message loop and the journal side channel.

use std::collections::HashMap;

use crate::model::{Project, Resource, ResourceKind, ResourceState};
use crate::registry::RegistryError;

/// Outcome of a maintenance request.
///
/// Maintenance on a non-equipment resource is a designed no-op that reports
/// rejection; it is a value, not an error, so callers can render it without
/// treating it as a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaintenanceOutcome {
    /// The resource was equipment and is now under maintenance.
    UnderMaintenance,
    /// The resource is not equipment; its state is unchanged.
    NotEquipment,
}

/// Owns all resources and projects by identity and enforces the allocation
/// and maintenance rules across the two.
///
/// Entities are created via the explicit add operations and never removed.
/// The registry lives for the process duration; construct one per test for
/// isolation.
#[derive(Debug, Default)]
pub struct Registry {
    resources: HashMap<String, Resource>,
    projects: HashMap<String, Project>,
}

impl Registry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered resources. Used for lifecycle logging.
    pub fn resource_count(&self) -> usize {
        self.resources.len()
    }

    /// Number of registered projects.
    pub fn project_count(&self) -> usize {
        self.projects.len()
    }

    /// Registers a new resource in state `Idle`.
    ///
    /// # Errors
    /// [`RegistryError::DuplicateKey`] if the id is already taken; the
    /// existing entry is left untouched.
    pub fn add_resource(
        &mut self,
        id: impl Into<String>,
        kind: ResourceKind,
    ) -> Result<(), RegistryError> {
        let id = id.into();
        if self.resources.contains_key(&id) {
            return Err(RegistryError::DuplicateKey(id));
        }
        self.resources.insert(id.clone(), Resource::new(id, kind));
        Ok(())
    }

    /// Registers a new project with an empty roster.
    ///
    /// # Errors
    /// [`RegistryError::DuplicateKey`] if the id is already taken.
    pub fn add_project(
        &mut self,
        id: impl Into<String>,
        name: impl Into<String>,
    ) -> Result<(), RegistryError> {
        let id = id.into();
        if self.projects.contains_key(&id) {
            return Err(RegistryError::DuplicateKey(id));
        }
        self.projects.insert(id.clone(), Project::new(id, name));
        Ok(())
    }

    /// Looks up a resource by id. Pure, no side effects.
    pub fn get_resource(&self, id: &str) -> Result<&Resource, RegistryError> {
        self.resources
            .get(id)
            .ok_or_else(|| RegistryError::ResourceNotFound(id.to_string()))
    }

    /// Looks up a project by id. Pure, no side effects.
    pub fn get_project(&self, id: &str) -> Result<&Project, RegistryError> {
        self.projects
            .get(id)
            .ok_or_else(|| RegistryError::ProjectNotFound(id.to_string()))
    }

    /// Allocates a resource to a project: sets the resource's state to
    /// `InUse`, appends its id to the project roster, and points the
    /// back-reference at the project. Both sides mutate within this one call,
    /// so the caller observes the change atomically.
    ///
    /// Returns the receiving project's display name for the journal line.
    ///
    /// Allocation does **not** check whether the resource is already allocated
    /// elsewhere: allocating the same resource to a second project moves only
    /// the back-reference, and the first project's roster keeps its stale
    /// entry. This mirrors the reference behavior and is documented rather
    /// than fixed; see DESIGN.md.
    ///
    /// # Errors
    /// [`RegistryError::ResourceNotFound`] / [`RegistryError::ProjectNotFound`]
    /// if either id is absent. Nothing is mutated on the error path.
    pub fn allocate_resource(
        &mut self,
        resource_id: &str,
        project_id: &str,
    ) -> Result<String, RegistryError> {
        let resource = self
            .resources
            .get_mut(resource_id)
            .ok_or_else(|| RegistryError::ResourceNotFound(resource_id.to_string()))?;
        let project = self
            .projects
            .get_mut(project_id)
            .ok_or_else(|| RegistryError::ProjectNotFound(project_id.to_string()))?;

        resource.state = ResourceState::InUse;
        resource.allocated_project = Some(project.id.clone());
        project.record_allocation(resource.id.clone());
        Ok(project.name.clone())
    }

    /// Marks a resource as in use without allocating it to a project.
    ///
    /// # Errors
    /// [`RegistryError::ResourceNotFound`] if the id is absent.
    pub fn mark_in_use(&mut self, id: &str) -> Result<(), RegistryError> {
        let resource = self
            .resources
            .get_mut(id)
            .ok_or_else(|| RegistryError::ResourceNotFound(id.to_string()))?;
        resource.state = ResourceState::InUse;
        Ok(())
    }

    /// Places a resource under maintenance if — and only if — it is
    /// equipment. For a worker the state is left unchanged and
    /// [`MaintenanceOutcome::NotEquipment`] is reported.
    ///
    /// # Errors
    /// [`RegistryError::ResourceNotFound`] if the id is absent.
    pub fn maintain_resource(&mut self, id: &str) -> Result<MaintenanceOutcome, RegistryError> {
        let resource = self
            .resources
            .get_mut(id)
            .ok_or_else(|| RegistryError::ResourceNotFound(id.to_string()))?;
        if resource.kind != ResourceKind::Equipment {
            return Ok(MaintenanceOutcome::NotEquipment);
        }
        resource.state = ResourceState::UnderMaintenance;
        Ok(MaintenanceOutcome::UnderMaintenance)
    }

    /// Renders a resource's state as a human-readable sentence.
    ///
    /// When the resource is under maintenance and its back-reference resolves
    /// to a registered project, the project's name is included.
    ///
    /// # Errors
    /// [`RegistryError::ResourceNotFound`] if the id is absent.
    pub fn describe_state(&self, id: &str) -> Result<String, RegistryError> {
        let resource = self.get_resource(id)?;
        let mut report = format!("Resource {} is {}", resource.id, resource.state);
        if resource.state == ResourceState::UnderMaintenance {
            let allocated = resource
                .allocated_project
                .as_deref()
                .and_then(|pid| self.projects.get(pid));
            if let Some(project) = allocated {
                report.push_str(&format!(" and allocated to project {}", project.name));
            }
        }
        report.push('.');
        Ok(report)
    }
}
