use std::sync::Arc;

use tessera_identity::{Identity, Signer, Verifier};

/// Error reported by a [Deserializer].
pub type DeserializeError = Box<dyn std::error::Error + Send + Sync>;

/// Derives capabilities for identities the registry has never seen.
///
/// A deserializer inspects the raw identity bytes and, by whatever convention
/// its scheme defines, produces a [Signer] or [Verifier] for it. It can also
/// render a human readable description of an identity, given the audit info
/// stored for it.
pub trait Deserializer: Send + Sync {
    /// Produce a signer for `identity`.
    fn deserialize_signer(&self, identity: &Identity) -> Result<Arc<dyn Signer>, DeserializeError>;

    /// Produce a verifier for `identity`.
    fn deserialize_verifier(
        &self,
        identity: &Identity,
    ) -> Result<Arc<dyn Verifier>, DeserializeError>;

    /// Describe `identity` for diagnostics.
    fn info(&self, identity: &Identity, audit_info: Option<&[u8]>)
    -> Result<String, DeserializeError>;

    /// Fall back to `other` for identities this deserializer rejects.
    ///
    /// ```ignore
    /// let deserializer = ed25519.or(membership).or(idemix);
    /// ```
    fn or<D>(self, other: D) -> CompositeDeserializer<Self, D>
    where
        Self: Sized,
        D: Deserializer,
    {
        CompositeDeserializer(self, other)
    }
}

impl<T> Deserializer for Arc<T>
where
    T: Deserializer + ?Sized,
{
    fn deserialize_signer(&self, identity: &Identity) -> Result<Arc<dyn Signer>, DeserializeError> {
        self.as_ref().deserialize_signer(identity)
    }

    fn deserialize_verifier(
        &self,
        identity: &Identity,
    ) -> Result<Arc<dyn Verifier>, DeserializeError> {
        self.as_ref().deserialize_verifier(identity)
    }

    fn info(
        &self,
        identity: &Identity,
        audit_info: Option<&[u8]>,
    ) -> Result<String, DeserializeError> {
        self.as_ref().info(identity, audit_info)
    }
}

/// A deserializer that asks the left deserializer first and the right one
/// only when the left fails. If both fail, the right error is returned.
///
/// Built via [`Deserializer::or`].
#[derive(Debug, Clone, Copy)]
pub struct CompositeDeserializer<L, R>(pub L, pub R);

impl<L, R> Deserializer for CompositeDeserializer<L, R>
where
    L: Deserializer,
    R: Deserializer,
{
    fn deserialize_signer(&self, identity: &Identity) -> Result<Arc<dyn Signer>, DeserializeError> {
        self.0
            .deserialize_signer(identity)
            .or_else(|_| self.1.deserialize_signer(identity))
    }

    fn deserialize_verifier(
        &self,
        identity: &Identity,
    ) -> Result<Arc<dyn Verifier>, DeserializeError> {
        self.0
            .deserialize_verifier(identity)
            .or_else(|_| self.1.deserialize_verifier(identity))
    }

    fn info(
        &self,
        identity: &Identity,
        audit_info: Option<&[u8]>,
    ) -> Result<String, DeserializeError> {
        self.0
            .info(identity, audit_info)
            .or_else(|_| self.1.info(identity, audit_info))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use testresult::TestResult;

    struct Accepts(&'static str);

    struct Constant;

    impl Signer for Constant {
        fn sign(&self, _payload: &[u8]) -> Result<Vec<u8>, signature::Error> {
            Ok(vec![7])
        }
    }

    impl Verifier for Constant {
        fn verify(&self, _payload: &[u8], _signature: &[u8]) -> Result<(), signature::Error> {
            Ok(())
        }
    }

    impl Deserializer for Accepts {
        fn deserialize_signer(
            &self,
            identity: &Identity,
        ) -> Result<Arc<dyn Signer>, DeserializeError> {
            if identity.as_bytes().starts_with(self.0.as_bytes()) {
                Ok(Arc::new(Constant))
            } else {
                Err(format!("{} rejects signer", self.0).into())
            }
        }

        fn deserialize_verifier(
            &self,
            identity: &Identity,
        ) -> Result<Arc<dyn Verifier>, DeserializeError> {
            if identity.as_bytes().starts_with(self.0.as_bytes()) {
                Ok(Arc::new(Constant))
            } else {
                Err(format!("{} rejects verifier", self.0).into())
            }
        }

        fn info(
            &self,
            identity: &Identity,
            _audit_info: Option<&[u8]>,
        ) -> Result<String, DeserializeError> {
            if identity.as_bytes().starts_with(self.0.as_bytes()) {
                Ok(format!("{} identity", self.0))
            } else {
                Err(format!("{} rejects info", self.0).into())
            }
        }
    }

    #[test]
    fn it_falls_back_to_the_right_deserializer() -> TestResult {
        let composite = Accepts("x509").or(Accepts("ed25519"));

        assert_eq!(composite.info(&Identity::from("x509:a"), None)?, "x509 identity");
        assert_eq!(
            composite.info(&Identity::from("ed25519:b"), None)?,
            "ed25519 identity"
        );
        assert!(composite.deserialize_signer(&Identity::from("ed25519:b")).is_ok());
        assert!(composite.deserialize_verifier(&Identity::from("x509:a")).is_ok());
        Ok(())
    }

    #[test]
    fn it_reports_the_last_error_when_nothing_matches() {
        let composite = Accepts("x509").or(Accepts("ed25519"));

        let error = composite
            .deserialize_verifier(&Identity::from("idemix:c"))
            .err()
            .map(|error| error.to_string());
        assert_eq!(error.as_deref(), Some("ed25519 rejects verifier"));
    }
}
