//! Ed25519 key types, `did:key` identities, signer and deserializer.
//!
//! An Ed25519 principal's [`Identity`](tessera_identity::Identity) is the
//! UTF-8 encoding of its `did:key` string, so any node can derive a verifier
//! from the identity bytes alone.

mod deserializer;
mod error;
mod signer;
mod verifier;

pub use crate::key::KeyExport;
pub use deserializer::Ed25519Deserializer;
pub use error::{Ed25519DidFromStrError, Ed25519KeyError, Ed25519ResolveError};
pub use signer::Ed25519Signer;
pub use verifier::Ed25519Verifier;

/// Ed25519 signature length in bytes.
pub const SIGNATURE_LENGTH: usize = ed25519_dalek::SIGNATURE_LENGTH;
