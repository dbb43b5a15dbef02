use std::fmt;

use tessera_identity::Identity;
use tessera_storage::StorageError;
use thiserror::Error;

use crate::DeserializeError;

/// Which capability slot of the registry an operation was about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// The signer slot.
    Signer,
    /// The verifier slot.
    Verifier,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Signer => f.write_str("signer"),
            Self::Verifier => f.write_str("verifier"),
        }
    }
}

/// Errors returned by [crate::SignService].
#[derive(Debug, Error)]
pub enum SigError {
    /// A registration call was made without a signer.
    #[error("invalid signer, expected a valid instance")]
    InvalidSigner,

    /// A registration call was made without a verifier.
    #[error("invalid verifier, expected a valid instance")]
    InvalidVerifier,

    /// Nothing is bound for the identity and there is no deserializer to ask.
    #[error("cannot find {role} for [{identity}], no deserializer set")]
    Unresolvable {
        /// The slot that was looked up.
        role: Role,
        /// The identity that was looked up.
        identity: Identity,
    },

    /// The deserializer could not produce a capability for the identity.
    #[error("failed deserializing identity for {role} [{identity}]")]
    Resolution {
        /// The slot that was looked up.
        role: Role,
        /// The identity that was looked up.
        identity: Identity,
        /// What the deserializer reported.
        #[source]
        source: DeserializeError,
    },

    /// The audit info store failed.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// A signer or verifier rejected the operation.
    #[error("signature operation failed: {0}")]
    Signature(#[from] signature::Error),
}
