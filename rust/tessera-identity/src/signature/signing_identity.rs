//! The richer identity contracts built on top of [`Signer`].

use std::sync::Arc;

use thiserror::Error;

use super::Signer;

/// The public half of an identity: its wire form and the ability to check
/// signatures made by its private counterpart.
pub trait PublicIdentity: Send + Sync {
    /// The serialized identity bytes.
    fn serialize(&self) -> Vec<u8>;

    /// Verify that `signature` was produced over `payload` by this identity.
    fn verify(&self, payload: &[u8], signature: &[u8]) -> Result<(), ::signature::Error>;
}

/// An identity that can sign for itself.
pub trait SigningIdentity: PublicIdentity + Signer {
    /// The public counterpart of this identity.
    fn public_version(self: Arc<Self>) -> Arc<dyn PublicIdentity>;
}

/// Returned by capability implementations that deliberately leave an
/// operation out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("operation not supported: {0}")]
pub struct UnsupportedOperation(pub &'static str);

impl From<UnsupportedOperation> for ::signature::Error {
    fn from(error: UnsupportedOperation) -> Self {
        ::signature::Error::from_source(error)
    }
}

impl UnsupportedOperation {
    /// True when `error` was caused by an [`UnsupportedOperation`].
    pub fn is_cause_of(error: &::signature::Error) -> bool {
        std::error::Error::source(error)
            .is_some_and(|source| source.downcast_ref::<UnsupportedOperation>().is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(Vec<u8>);

    impl Signer for Fixed {
        fn sign(&self, _payload: &[u8]) -> Result<Vec<u8>, ::signature::Error> {
            Ok(self.0.clone())
        }
    }

    struct Rich;

    impl Signer for Rich {
        fn sign(&self, payload: &[u8]) -> Result<Vec<u8>, ::signature::Error> {
            Ok(payload.iter().rev().copied().collect())
        }

        fn as_signing_identity(self: Arc<Self>) -> Option<Arc<dyn SigningIdentity>> {
            Some(self)
        }
    }

    impl PublicIdentity for Rich {
        fn serialize(&self) -> Vec<u8> {
            b"rich".to_vec()
        }

        fn verify(&self, payload: &[u8], signature: &[u8]) -> Result<(), ::signature::Error> {
            if self.sign(payload)? == signature {
                Ok(())
            } else {
                Err(::signature::Error::new())
            }
        }
    }

    impl SigningIdentity for Rich {
        fn public_version(self: Arc<Self>) -> Arc<dyn PublicIdentity> {
            self
        }
    }

    #[test]
    fn it_reports_no_signing_identity_by_default() {
        let signer: Arc<dyn Signer> = Arc::new(Fixed(vec![1, 2, 3]));
        assert!(signer.as_signing_identity().is_none());
    }

    #[test]
    fn it_exposes_the_richer_contract_when_implemented() {
        let signer: Arc<dyn Signer> = Arc::new(Rich);
        let identity = signer.as_signing_identity().expect("rich signer");

        let signature = identity.sign(b"abc").unwrap();
        assert_eq!(signature, b"cba".to_vec());
        assert!(identity.verify(b"abc", &signature).is_ok());
        assert_eq!(identity.public_version().serialize(), b"rich".to_vec());
    }

    #[test]
    fn it_marks_unsupported_operations_as_the_cause() {
        let error: ::signature::Error = UnsupportedOperation("verify").into();
        assert!(UnsupportedOperation::is_cause_of(&error));
        assert!(!UnsupportedOperation::is_cause_of(&::signature::Error::new()));
    }
}
