//! Credential storage, digesting, and shape validation.

pub mod digest;
pub mod policy;
pub mod store;

pub use digest::PasswordDigest;
pub use policy::CredentialPolicy;
pub use store::CredentialStore;
