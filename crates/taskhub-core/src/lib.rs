//! # taskhub-core
//!
//! Core crate for TaskHub. Contains configuration schemas, the time source
//! abstraction, and the unified error system.
//!
//! This crate has **no** internal dependencies on other TaskHub crates.

pub mod clock;
pub mod config;
pub mod error;
pub mod result;

pub use error::AppError;
pub use result::AppResult;
