//! Principal trait for types that have an identity.

use crate::Identity;

/// An entity identified by an [`Identity`].
///
/// Implemented by anything that has an identity: key types, signers,
/// verifiers. Does not imply any cryptographic capability.
pub trait Principal {
    /// Returns this entity's identity.
    fn identity(&self) -> Identity;
}

impl Principal for Identity {
    fn identity(&self) -> Identity {
        self.clone()
    }
}
