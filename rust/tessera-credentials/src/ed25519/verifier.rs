//! Ed25519 DID principal and verifier.

use super::error::{Ed25519DidFromStrError, Ed25519ResolveError};
use base58::ToBase58;
use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;
use tessera_identity::{Identity, Principal, PublicIdentity, Verifier};

const DID_KEY_PREFIX: &str = "did:key:z";
const ED25519_PUB: [u8; 2] = [0xed, 0x01];

/// An `Ed25519` `did:key`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ed25519Verifier(pub ed25519_dalek::VerifyingKey);

impl From<ed25519_dalek::VerifyingKey> for Ed25519Verifier {
    fn from(key: ed25519_dalek::VerifyingKey) -> Self {
        Ed25519Verifier(key)
    }
}

impl From<&ed25519_dalek::SigningKey> for Ed25519Verifier {
    fn from(key: &ed25519_dalek::SigningKey) -> Self {
        Ed25519Verifier(key.verifying_key())
    }
}

impl Ed25519Verifier {
    /// The raw public key bytes.
    #[must_use]
    pub fn to_bytes(&self) -> [u8; 32] {
        self.0.to_bytes()
    }
}

impl std::fmt::Display for Ed25519Verifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut raw_bytes = Vec::with_capacity(34);
        raw_bytes.extend_from_slice(&ED25519_PUB);
        raw_bytes.extend_from_slice(&self.0.to_bytes());
        let b58 = ToBase58::to_base58(raw_bytes.as_slice());
        write!(f, "did:key:z{b58}")
    }
}

impl FromStr for Ed25519Verifier {
    type Err = Ed25519DidFromStrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(':').collect();
        if parts.len() != 3 || parts[0] != "did" || parts[1] != "key" {
            return Err(Ed25519DidFromStrError::InvalidDidHeader);
        }
        let b58 = parts[2]
            .strip_prefix('z')
            .ok_or(Ed25519DidFromStrError::MissingBase58Prefix)?;
        let key_bytes = base58::FromBase58::from_base58(b58)
            .map_err(|_| Ed25519DidFromStrError::InvalidBase58)?;
        let raw_arr = <[u8; 34]>::try_from(key_bytes.as_slice())
            .map_err(|_| Ed25519DidFromStrError::InvalidKey)?;
        if raw_arr[..2] != ED25519_PUB {
            return Err(Ed25519DidFromStrError::InvalidKey);
        }
        let key_arr: [u8; 32] = raw_arr[2..]
            .try_into()
            .map_err(|_| Ed25519DidFromStrError::InvalidKey)?;
        let key = ed25519_dalek::VerifyingKey::from_bytes(&key_arr)
            .map_err(|_| Ed25519DidFromStrError::InvalidKey)?;
        Ok(Ed25519Verifier(key))
    }
}

impl TryFrom<&Identity> for Ed25519Verifier {
    type Error = Ed25519ResolveError;

    fn try_from(identity: &Identity) -> Result<Self, Self::Error> {
        let did = std::str::from_utf8(identity.as_bytes())
            .map_err(|_| Ed25519ResolveError::NotUtf8)?;
        if !did.starts_with(DID_KEY_PREFIX) {
            return Err(Ed25519DidFromStrError::InvalidDidHeader.into());
        }
        Ok(did.parse()?)
    }
}

impl Verifier for Ed25519Verifier {
    fn verify(&self, msg: &[u8], signature: &[u8]) -> Result<(), signature::Error> {
        let signature = ed25519_dalek::Signature::from_slice(signature)?;
        signature::Verifier::verify(&self.0, msg, &signature)
    }
}

impl PublicIdentity for Ed25519Verifier {
    fn serialize(&self) -> Vec<u8> {
        self.to_string().into_bytes()
    }

    fn verify(&self, msg: &[u8], signature: &[u8]) -> Result<(), signature::Error> {
        Verifier::verify(self, msg, signature)
    }
}

impl Principal for Ed25519Verifier {
    fn identity(&self) -> Identity {
        Identity::from(self.to_string())
    }
}

impl Serialize for Ed25519Verifier {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Ed25519Verifier {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let did = String::deserialize(deserializer)?;
        did.parse()
            .map_err(|error| serde::de::Error::custom(format!("{error}: {did}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_verifier(seed: u8) -> Ed25519Verifier {
        Ed25519Verifier::from(&ed25519_dalek::SigningKey::from_bytes(&[seed; 32]))
    }

    #[test]
    fn ed25519_did_display_roundtrip() {
        let principal = test_verifier(0);
        let did_string = principal.to_string();
        assert!(did_string.starts_with("did:key:z6Mk"));
        let parsed: Ed25519Verifier = did_string.parse().unwrap();
        assert_eq!(parsed, principal);
    }

    #[test]
    fn ed25519_did_from_str_invalid_header() {
        let result: Result<Ed25519Verifier, _> = "not:a:did".parse();
        assert!(matches!(
            result,
            Err(Ed25519DidFromStrError::InvalidDidHeader)
        ));
    }

    #[test]
    fn ed25519_did_from_str_missing_prefix() {
        let result: Result<Ed25519Verifier, _> = "did:key:abc".parse();
        assert!(matches!(
            result,
            Err(Ed25519DidFromStrError::MissingBase58Prefix)
        ));
    }

    #[test]
    fn ed25519_did_from_str_wrong_multicodec() {
        let mut raw = vec![0xe7, 0x01];
        raw.extend_from_slice(&[1u8; 32]);
        let did = format!("did:key:z{}", raw.to_base58());
        let result: Result<Ed25519Verifier, _> = did.parse();
        assert!(matches!(result, Err(Ed25519DidFromStrError::InvalidKey)));
    }

    #[test]
    fn ed25519_identity_is_the_did_string() {
        let principal = test_verifier(3);
        let identity = principal.identity();
        assert_eq!(identity.as_bytes(), principal.to_string().as_bytes());
        assert_eq!(Ed25519Verifier::try_from(&identity), Ok(principal));
    }

    #[test]
    fn ed25519_identity_rejects_foreign_bytes() {
        assert_eq!(
            Ed25519Verifier::try_from(&Identity::new(vec![0xff, 0xfe])),
            Err(Ed25519ResolveError::NotUtf8)
        );
        assert_eq!(
            Ed25519Verifier::try_from(&Identity::from("alice")),
            Err(Ed25519ResolveError::InvalidDid(
                Ed25519DidFromStrError::InvalidDidHeader
            ))
        );
    }

    #[test]
    fn ed25519_verifier_rejects_malformed_signatures() {
        let verifier = test_verifier(1);
        assert!(Verifier::verify(&verifier, b"msg", &[0u8; 12]).is_err());
        assert!(Verifier::verify(&verifier, b"msg", &[0u8; 64]).is_err());
    }

    #[test]
    fn ed25519_verifier_serde_roundtrip() {
        let principal = test_verifier(9);
        let json = serde_json::to_string(&principal).unwrap();
        assert_eq!(json, format!("\"{principal}\""));
        let parsed: Ed25519Verifier = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, principal);
        assert!(serde_json::from_str::<Ed25519Verifier>("\"did:key:nope\"").is_err());
    }
}
