#![warn(missing_docs)]

//! Principal identities and the capability traits used to sign and verify
//! on their behalf.
//!
//! An [`Identity`] is an opaque byte string issued by some upstream
//! membership scheme. Everything that can act for an identity is expressed
//! as a capability:
//!
//! - [`Signer`] produces signatures,
//! - [`Verifier`] checks them,
//! - [`SigningIdentity`] is the richer contract that bundles signing with
//!   serialization and a public counterpart ([`PublicIdentity`]).
//!
//! None of these traits fix a cryptographic scheme; signatures travel as
//! raw bytes.

mod identity;
pub use identity::*;

pub mod principal;
pub use principal::*;

pub mod signature;
pub use signature::*;
