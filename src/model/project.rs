//! The [`Project`] entity.

/// A named unit of work holding the ordered roster of resources allocated to
/// it.
///
/// The roster stores resource *ids*; the registry arena owns the `Resource`
/// values themselves. Insertion order is allocation order.
#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub id: String,
    pub name: String,
    /// Resource ids in allocation order. Append-only.
    pub resources: Vec<String>,
}

impl Project {
    /// Creates a new project with an empty roster.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            resources: Vec::new(),
        }
    }

    /// Appends a resource id to the roster.
    ///
    /// This is the only roster mutator; there is no remove. Duplicate
    /// prevention and cross-project exclusivity are the registry's concern —
    /// a project cannot see other projects.
    pub fn record_allocation(&mut self, resource_id: impl Into<String>) {
        self.resources.push(resource_id.into());
    }
}
