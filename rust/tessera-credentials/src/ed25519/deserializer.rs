//! Ed25519 `did:key` deserializer.

use super::{error::Ed25519ResolveError, signer::Ed25519Signer, verifier::Ed25519Verifier};
use parking_lot::RwLock;
use std::{collections::HashMap, sync::Arc};
use tessera_identity::{Identity, Principal, Signer, Verifier};
use tessera_sig::{DeserializeError, Deserializer};

/// Resolves `did:key` identities to Ed25519 capabilities.
///
/// Verifiers are derived from the identity bytes alone. Signers need the
/// private key, so only identities whose key was handed over with
/// [`Ed25519Deserializer::add_signer`] resolve to a signer.
#[derive(Debug, Default)]
pub struct Ed25519Deserializer {
    keyring: RwLock<HashMap<String, Arc<Ed25519Signer>>>,
}

impl Ed25519Deserializer {
    /// Create a deserializer with an empty keyring.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `signer` available for lazy resolution. Returns its identity.
    pub fn add_signer(&self, signer: Ed25519Signer) -> Identity {
        let identity = signer.identity();
        self.keyring
            .write()
            .insert(identity.unique_id(), Arc::new(signer));
        identity
    }
}

impl Deserializer for Ed25519Deserializer {
    fn deserialize_signer(&self, identity: &Identity) -> Result<Arc<dyn Signer>, DeserializeError> {
        match self.keyring.read().get(&identity.unique_id()) {
            Some(signer) => Ok(signer.clone()),
            None => Err(Ed25519ResolveError::UnknownKey(identity.unique_id()).into()),
        }
    }

    fn deserialize_verifier(
        &self,
        identity: &Identity,
    ) -> Result<Arc<dyn Verifier>, DeserializeError> {
        Ok(Arc::new(Ed25519Verifier::try_from(identity)?))
    }

    fn info(
        &self,
        identity: &Identity,
        audit_info: Option<&[u8]>,
    ) -> Result<String, DeserializeError> {
        let did = Ed25519Verifier::try_from(identity)?;
        Ok(match audit_info {
            Some(audit_info) => format!(
                "ed25519 identity [{did}] audit [{}]",
                String::from_utf8_lossy(audit_info)
            ),
            None => format!("ed25519 identity [{did}]"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use testresult::TestResult;

    #[test]
    fn it_derives_verifiers_from_the_did() -> TestResult {
        let signer = Ed25519Signer::import(&[4u8; 32])?;
        let deserializer = Ed25519Deserializer::new();

        let verifier = deserializer.deserialize_verifier(&signer.identity())?;
        let signature = Signer::sign(&signer, b"hello")?;
        verifier.verify(b"hello", &signature)?;
        Ok(())
    }

    #[test]
    fn it_only_resolves_signers_in_the_keyring() -> TestResult {
        let known = Ed25519Signer::import(&[1u8; 32])?;
        let unknown = Ed25519Signer::import(&[2u8; 32])?;
        let deserializer = Ed25519Deserializer::new();
        let identity = deserializer.add_signer(known);

        assert!(deserializer.deserialize_signer(&identity).is_ok());
        let error = deserializer
            .deserialize_signer(&unknown.identity())
            .err()
            .ok_or("unknown key resolved")?;
        assert!(error.downcast_ref::<Ed25519ResolveError>().is_some());
        Ok(())
    }

    #[test]
    fn it_describes_identities() -> TestResult {
        let signer = Ed25519Signer::import(&[8u8; 32])?;
        let deserializer = Ed25519Deserializer::new();
        let identity = signer.identity();

        assert_eq!(
            deserializer.info(&identity, None)?,
            format!("ed25519 identity [{signer}]")
        );
        assert_eq!(
            deserializer.info(&identity, Some(b"enrolled by ops"))?,
            format!("ed25519 identity [{signer}] audit [enrolled by ops]")
        );
        assert!(deserializer.info(&Identity::from("alice"), None).is_err());
        Ok(())
    }
}
