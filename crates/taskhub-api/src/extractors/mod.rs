//! Request extractors.

pub mod auth;
pub mod client_key;

pub use auth::AuthUser;
pub use client_key::ClientKey;
