//! Table repositories.

pub mod project;
pub mod user;
