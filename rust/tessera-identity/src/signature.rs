//! Signing and verification capabilities.

pub mod signer;
pub mod signing_identity;
pub mod verifier;

pub use signer::Signer;
pub use signing_identity::{PublicIdentity, SigningIdentity, UnsupportedOperation};
pub use verifier::Verifier;
