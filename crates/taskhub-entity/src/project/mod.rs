//! Project entry entity.

pub mod model;
pub mod priority;

pub use model::{NewProject, Project, ProjectChanges};
pub use priority::Priority;
