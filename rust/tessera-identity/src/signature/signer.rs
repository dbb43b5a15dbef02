//! Signature creation trait.

use std::sync::Arc;

use super::SigningIdentity;

/// Produces a cryptographic signature over a payload.
///
/// Implementations own their key material; callers only ever see the
/// signature bytes.
pub trait Signer: Send + Sync {
    /// Sign `payload` and return the encoded signature.
    fn sign(&self, payload: &[u8]) -> Result<Vec<u8>, ::signature::Error>;

    /// Capability query for the richer [`SigningIdentity`] contract.
    ///
    /// Returns `None` unless the implementation overrides it. Types that
    /// also implement [`SigningIdentity`] should return `Some(self)`.
    fn as_signing_identity(self: Arc<Self>) -> Option<Arc<dyn SigningIdentity>> {
        None
    }
}
