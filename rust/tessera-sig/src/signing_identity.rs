use std::sync::Arc;

use tessera_identity::{Identity, PublicIdentity, Signer, SigningIdentity, UnsupportedOperation};

/// The [SigningIdentity] handed out for signers that do not implement the
/// richer contract themselves.
///
/// Signing goes to the wrapped signer and serialization yields the raw
/// identity bytes. There is no verifier behind this type, so
/// [PublicIdentity::verify] always fails with [UnsupportedOperation].
pub struct DefaultSigningIdentity {
    identity: Identity,
    signer: Arc<dyn Signer>,
}

impl DefaultSigningIdentity {
    /// Pair `identity` with the signer that signs for it.
    pub fn new(identity: Identity, signer: Arc<dyn Signer>) -> Self {
        Self { identity, signer }
    }

    /// The wrapped identity.
    pub fn identity(&self) -> &Identity {
        &self.identity
    }
}

impl std::fmt::Debug for DefaultSigningIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DefaultSigningIdentity")
            .field("identity", &self.identity)
            .finish_non_exhaustive()
    }
}

impl Signer for DefaultSigningIdentity {
    fn sign(&self, payload: &[u8]) -> Result<Vec<u8>, signature::Error> {
        self.signer.sign(payload)
    }

    fn as_signing_identity(self: Arc<Self>) -> Option<Arc<dyn SigningIdentity>> {
        Some(self)
    }
}

impl PublicIdentity for DefaultSigningIdentity {
    fn serialize(&self) -> Vec<u8> {
        self.identity.as_bytes().to_vec()
    }

    fn verify(&self, _payload: &[u8], _signature: &[u8]) -> Result<(), signature::Error> {
        Err(UnsupportedOperation("verify").into())
    }
}

impl SigningIdentity for DefaultSigningIdentity {
    fn public_version(self: Arc<Self>) -> Arc<dyn PublicIdentity> {
        self
    }
}
