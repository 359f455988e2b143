//! The [`Resource`] entity and its closed type/state enums.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of resource types the registry manages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResourceKind {
    /// A human worker. Cannot be placed under maintenance.
    Worker,
    /// A piece of equipment. The only kind eligible for maintenance.
    Equipment,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceKind::Worker => write!(f, "worker"),
            ResourceKind::Equipment => write!(f, "equipment"),
        }
    }
}

/// Lifecycle state of a resource.
///
/// The entity itself places no restrictions on transitions; the registry
/// decides which transitions are legal in a given operation context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResourceState {
    Idle,
    InUse,
    UnderMaintenance,
}

impl fmt::Display for ResourceState {
    /// Human-readable rendering used by the state report.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceState::Idle => write!(f, "Idle"),
            ResourceState::InUse => write!(f, "In Use"),
            ResourceState::UnderMaintenance => write!(f, "under maintenance"),
        }
    }
}

/// A unit of inventory with an identity, a type, a state, and an optional
/// back-reference to the project it is allocated to.
///
/// # Ownership
/// Resources are owned by the registry arena and indexed by `id`. The
/// `allocated_project` field holds a project *id*, not a reference — it is
/// resolved via registry lookup when needed and never determines ownership
/// lifetime.
#[derive(Debug, Clone, PartialEq)]
pub struct Resource {
    pub id: String,
    pub kind: ResourceKind,
    pub state: ResourceState,
    /// Id of the project this resource was last allocated to, if any. Set only
    /// by the registry's allocation operation.
    pub allocated_project: Option<String>,
}

impl Resource {
    /// Creates a new resource in state [`ResourceState::Idle`] with no
    /// allocation.
    pub fn new(id: impl Into<String>, kind: ResourceKind) -> Self {
        Self {
            id: id.into(),
            kind,
            state: ResourceState::Idle,
            allocated_project: None,
        }
    }
}
