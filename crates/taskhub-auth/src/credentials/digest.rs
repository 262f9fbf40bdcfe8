//! Deterministic one-way password digesting.
//!
//! Passwords are stored as the lowercase-hex SHA-256 digest of the
//! cleartext. Verification recomputes the digest and compares it against
//! the stored value in constant time.

use ring::constant_time;
use sha2::{Digest, Sha256};

/// Computes and verifies password digests.
#[derive(Debug, Clone, Default)]
pub struct PasswordDigest;

impl PasswordDigest {
    /// Creates a new digest helper.
    pub fn new() -> Self {
        Self
    }

    /// Digest a cleartext password into its stored form.
    pub fn digest(&self, password: &str) -> String {
        hex::encode(Sha256::digest(password.as_bytes()))
    }

    /// Verify a cleartext password against a stored digest.
    ///
    /// The comparison runs in constant time so a mismatch position cannot
    /// leak through response timing.
    pub fn verify(&self, password: &str, stored: &str) -> bool {
        let computed = self.digest(password);
        constant_time::verify_slices_are_equal(computed.as_bytes(), stored.as_bytes()).is_ok()
    }
}
