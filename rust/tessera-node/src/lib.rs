//! A tessera node.
//!
//! Wires the pieces of the identity layer together: a [`NodeConfig`]
//! describes where the node keeps its key-value store and how its
//! [`SignService`](tessera_sig::SignService) is set up, [`Node`] owns both
//! along with the node's own Ed25519 signer, and [`init_logging`] installs
//! the process-wide `tracing` subscriber.
//!
//! The [`pingpong`] module holds a minimal two-party protocol in which each
//! side signs its messages and verifies the other's through its registry.

#![warn(missing_docs)]

mod config;
pub use config::*;

mod error;
pub use error::*;

mod logging;
pub use logging::*;

mod node;
pub use node::*;

pub mod pingpong;
