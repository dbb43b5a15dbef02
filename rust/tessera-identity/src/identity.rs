use std::fmt;

use base58::ToBase58;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// A principal's public credential as opaque bytes.
///
/// The bytes are never interpreted here. The canonical string form returned
/// by [`Identity::unique_id`] is what caches and stores key on.
#[derive(Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identity(#[serde(with = "serde_bytes")] Vec<u8>);

impl Identity {
    /// Wrap raw identity bytes.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    /// The raw identity bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Consume the identity, returning its raw bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    /// True for the empty identity.
    pub fn is_none(&self) -> bool {
        self.0.is_empty()
    }

    /// Canonical string form: base58 of the SHA-256 digest of the raw bytes.
    ///
    /// Equal bytes always produce equal unique ids, and the result is safe to
    /// use as a map key or a storage key segment.
    pub fn unique_id(&self) -> String {
        Sha256::digest(&self.0).as_slice().to_base58()
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.unique_id())
    }
}

impl fmt::Debug for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Identity({})", self.unique_id())
    }
}

impl AsRef<[u8]> for Identity {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for Identity {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<&[u8]> for Identity {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

impl From<&str> for Identity {
    fn from(value: &str) -> Self {
        Self(value.as_bytes().to_vec())
    }
}

impl From<String> for Identity {
    fn from(value: String) -> Self {
        Self(value.into_bytes())
    }
}

impl From<Identity> for Vec<u8> {
    fn from(identity: Identity) -> Self {
        identity.0
    }
}

/// How an identity should be interpreted.
///
/// Bound once per identity at its first registration. Identities that were
/// never registered or resolved report [`IdentityType::Unknown`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdentityType {
    /// Identity issued by the network's membership scheme.
    Membership,
    /// Not (yet) classified.
    #[default]
    Unknown,
    /// Any other scheme, by name.
    Named(String),
}

impl fmt::Display for IdentityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Membership => f.write_str("membership"),
            Self::Unknown => f.write_str("unknown"),
            Self::Named(name) => f.write_str(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use testresult::TestResult;

    #[test]
    fn it_derives_the_same_unique_id_for_equal_bytes() {
        let a = Identity::from("alice");
        let b = Identity::new(b"alice".to_vec());

        assert_eq!(a, b);
        assert_eq!(a.unique_id(), b.unique_id());
        assert_ne!(a.unique_id(), Identity::from("bob").unique_id());
    }

    #[test]
    fn it_displays_as_the_unique_id() {
        let identity = Identity::from("alice");
        assert_eq!(identity.to_string(), identity.unique_id());
    }

    #[test]
    fn it_treats_empty_bytes_as_none() {
        assert!(Identity::default().is_none());
        assert!(!Identity::from("x").is_none());
    }

    #[test]
    fn it_serializes_identity_types_by_name() -> TestResult {
        assert_eq!(
            serde_json::to_string(&IdentityType::Membership)?,
            "\"membership\""
        );
        let parsed: IdentityType = serde_json::from_str("{\"named\":\"idemix\"}")?;
        assert_eq!(parsed, IdentityType::Named("idemix".into()));
        assert_eq!(IdentityType::default(), IdentityType::Unknown);
        Ok(())
    }
}
