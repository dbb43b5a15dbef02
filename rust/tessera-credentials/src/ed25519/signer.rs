//! Ed25519 signer implementation.

use super::{error::Ed25519KeyError, verifier::Ed25519Verifier};
use crate::key::KeyExport;
use std::sync::Arc;
use tessera_identity::{Identity, Principal, PublicIdentity, Signer, SigningIdentity};

/// An `Ed25519` `did:key` signer.
///
/// Wraps an `ed25519_dalek::SigningKey` together with its `did:key`
/// verifier. The signer is a full [`SigningIdentity`]: a registry hands it
/// out as is rather than wrapping it.
#[derive(Debug, Clone)]
pub struct Ed25519Signer {
    did: Ed25519Verifier,
    key: ed25519_dalek::SigningKey,
}

impl From<ed25519_dalek::SigningKey> for Ed25519Signer {
    fn from(key: ed25519_dalek::SigningKey) -> Self {
        let did = Ed25519Verifier::from(&key);
        Self { did, key }
    }
}

impl Ed25519Signer {
    /// Generate a new Ed25519 keypair with random bytes from `getrandom`.
    ///
    /// # Errors
    ///
    /// Returns an error if the RNG fails.
    pub fn generate() -> Result<Self, Ed25519KeyError> {
        let mut seed = [0u8; 32];
        getrandom::getrandom(&mut seed)?;
        Ok(ed25519_dalek::SigningKey::from_bytes(&seed).into())
    }

    /// Import a keypair from a [`KeyExport`].
    ///
    /// Accepts anything that converts `Into<KeyExport>`, including `&[u8; 32]`.
    ///
    /// # Errors
    ///
    /// Returns an error if the seed has the wrong length.
    pub fn import(key: impl Into<KeyExport>) -> Result<Self, Ed25519KeyError> {
        let export = key.into();
        let seed: [u8; 32] = export
            .as_ref()
            .try_into()
            .map_err(|_| Ed25519KeyError::InvalidSeedLength(export.as_ref().len()))?;
        Ok(ed25519_dalek::SigningKey::from_bytes(&seed).into())
    }

    /// Export the key material.
    #[must_use]
    pub fn export(&self) -> KeyExport {
        KeyExport::Extractable(self.key.to_bytes().to_vec())
    }

    /// Get the associated Ed25519 DID (verifier).
    #[must_use]
    pub const fn ed25519_did(&self) -> &Ed25519Verifier {
        &self.did
    }
}

impl std::fmt::Display for Ed25519Signer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.did)
    }
}

impl Signer for Ed25519Signer {
    fn sign(&self, msg: &[u8]) -> Result<Vec<u8>, signature::Error> {
        let signature: ed25519_dalek::Signature = signature::Signer::try_sign(&self.key, msg)?;
        Ok(signature.to_bytes().to_vec())
    }

    fn as_signing_identity(self: Arc<Self>) -> Option<Arc<dyn SigningIdentity>> {
        Some(self)
    }
}

impl PublicIdentity for Ed25519Signer {
    fn serialize(&self) -> Vec<u8> {
        PublicIdentity::serialize(&self.did)
    }

    fn verify(&self, msg: &[u8], signature: &[u8]) -> Result<(), signature::Error> {
        PublicIdentity::verify(&self.did, msg, signature)
    }
}

impl SigningIdentity for Ed25519Signer {
    fn public_version(self: Arc<Self>) -> Arc<dyn PublicIdentity> {
        Arc::new(self.did)
    }
}

impl Principal for Ed25519Signer {
    fn identity(&self) -> Identity {
        self.did.identity()
    }
}
