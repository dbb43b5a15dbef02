#![warn(missing_docs)]

//! The identity registry of a node.
//!
//! [SignService] lets a node sign and verify on behalf of any number of
//! identities. Capabilities get into the registry in one of two ways:
//!
//! - explicitly, through [SignService::register_signer] and friends, when
//!   the caller already holds the key material;
//! - lazily, through a [Deserializer], the first time an unknown identity is
//!   looked up.
//!
//! Either way the binding is cached for the lifetime of the service and the
//! first binding for an identity wins. The registry never performs
//! cryptography itself.
//!
//! Audit info (opaque provenance metadata about an identity) is kept out of
//! the cache, in a [tessera_storage::KeyValueStore].
//!
//! ```rust
//! use std::sync::Arc;
//! use tessera_identity::{Identity, IdentityType, Signer, Verifier};
//! use tessera_sig::SignService;
//! use tessera_storage::MemoryStore;
//!
//! struct Echo;
//!
//! impl Signer for Echo {
//!     fn sign(&self, payload: &[u8]) -> Result<Vec<u8>, signature::Error> {
//!         Ok(payload.to_vec())
//!     }
//! }
//!
//! impl Verifier for Echo {
//!     fn verify(&self, payload: &[u8], signature: &[u8]) -> Result<(), signature::Error> {
//!         (payload == signature).then_some(()).ok_or_else(signature::Error::new)
//!     }
//! }
//!
//! let service = SignService::new(Arc::new(MemoryStore::default()), None);
//! let alice = Identity::from("alice");
//! let echo = Arc::new(Echo);
//!
//! service.register_signer(&alice, Some(echo.clone()), Some(echo)).unwrap();
//! assert_eq!(service.identity_type(&alice), IdentityType::Membership);
//!
//! let signature = service.sign(&alice, b"hello").unwrap();
//! service.verify(&alice, b"hello", &signature).unwrap();
//! ```

mod config;
pub use config::*;

mod deserializer;
pub use deserializer::*;

mod error;
pub use error::*;

mod service;
pub use service::*;

mod signing_identity;
pub use signing_identity::*;
