//! Concrete key and signing types for `tessera-sig`.
//!
//! This crate provides credential implementations that satisfy the
//! [`Signer`], [`Verifier`] and [`SigningIdentity`] traits from
//! `tessera-identity`, plus a [`Deserializer`] that lets a
//! [`SignService`] resolve them lazily.
//!
//! Implementations:
//! - **Ed25519** (enabled by the `ed25519` feature, on by default)
//!
//! [`Signer`]: tessera_identity::Signer
//! [`Verifier`]: tessera_identity::Verifier
//! [`SigningIdentity`]: tessera_identity::SigningIdentity
//! [`Deserializer`]: tessera_sig::Deserializer
//! [`SignService`]: tessera_sig::SignService

pub mod key;

#[cfg(feature = "ed25519")]
pub mod ed25519;
#[cfg(feature = "ed25519")]
pub use ed25519::*;
