use std::sync::Arc;

use tessera_credentials::{Ed25519Deserializer, Ed25519Signer};
use tessera_identity::{Identity, Principal, Signer, Verifier};
use tessera_sig::SignService;
use tessera_storage::{FileSystemStore, KeyValueStore, MemoryStore};
use tracing::info;

use crate::{NodeConfig, NodeError, PersistenceConfig, PersistenceKind};

/// A running node.
///
/// Owns the node's key-value store and its identity registry, and signs as
/// the Ed25519 identity it was created with. Identities of peers are not
/// registered up front; the registry derives their verifiers from the
/// `did:key` bytes the first time they are needed.
pub struct Node {
    config: NodeConfig,
    identity: Identity,
    store: Arc<dyn KeyValueStore>,
    sig: Arc<SignService>,
}

impl Node {
    /// Start a node that signs as `signer`.
    pub fn new(config: NodeConfig, signer: Ed25519Signer) -> Result<Self, NodeError> {
        let store = open_store(&config.node.kvs.persistence)?;
        let sig = Arc::new(SignService::with_config(
            config.sig.clone(),
            store.clone(),
            Some(Arc::new(Ed25519Deserializer::new())),
        ));

        let identity = signer.identity();
        let verifier: Arc<dyn Verifier> = Arc::new(*signer.ed25519_did());
        let signer: Arc<dyn Signer> = Arc::new(signer);
        sig.register_signer(&identity, Some(signer), Some(verifier))?;

        info!(node = %config.node.id, %identity, "node started");
        Ok(Self {
            config,
            identity,
            store,
            sig,
        })
    }

    /// The configuration the node was started with.
    pub fn config(&self) -> &NodeConfig {
        &self.config
    }

    /// The node's name within its network.
    pub fn id(&self) -> &str {
        &self.config.node.id
    }

    /// The identity this node signs as.
    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    /// The node's key-value store.
    pub fn store(&self) -> &Arc<dyn KeyValueStore> {
        &self.store
    }

    /// The node's identity registry.
    pub fn sig_service(&self) -> &Arc<SignService> {
        &self.sig
    }
}

impl std::fmt::Debug for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Node")
            .field("id", &self.config.node.id)
            .field("identity", &self.identity)
            .field("sig", &self.sig)
            .finish_non_exhaustive()
    }
}

fn open_store(persistence: &PersistenceConfig) -> Result<Arc<dyn KeyValueStore>, NodeError> {
    let store: Arc<dyn KeyValueStore> = match persistence.kind {
        PersistenceKind::Memory => Arc::new(MemoryStore::default()),
        PersistenceKind::File => {
            let path = persistence
                .opts
                .path
                .as_ref()
                .ok_or(NodeError::MissingStorePath)?;
            Arc::new(FileSystemStore::open(path)?)
        }
    };
    Ok(store)
}
