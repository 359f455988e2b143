//! Pure data structures for the registry domain.

pub mod project;
pub mod resource;

pub use project::*;
pub use resource::*;
