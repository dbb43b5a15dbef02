//! Signature verification trait.

/// Verifies that a cryptographic signature is valid for a given payload.
pub trait Verifier: Send + Sync {
    /// Verify that `signature` is valid for `payload`.
    fn verify(&self, payload: &[u8], signature: &[u8]) -> Result<(), ::signature::Error>;
}
