//! Project list management.

pub mod service;
pub mod validate;

pub use service::ProjectService;
