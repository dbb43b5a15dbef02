use std::{
    collections::{HashMap, hash_map::Entry},
    fmt,
    sync::Arc,
};

use parking_lot::RwLock;
use tessera_identity::{Identity, IdentityType, Signer, SigningIdentity, Verifier};
use tessera_storage::{CompositeKey, KeyValueStore};
use tracing::{debug, warn};

use crate::{
    DefaultSigningIdentity, DeserializeError, Deserializer, Role, SigError, SignServiceConfig,
};

/// Everything bound so far, keyed by [Identity::unique_id].
#[derive(Default)]
struct Bindings {
    types: HashMap<String, IdentityType>,
    signers: HashMap<String, Arc<dyn Signer>>,
    verifiers: HashMap<String, Arc<dyn Verifier>>,
}

/// The identity registry of a node.
///
/// Holds one signer and one verifier per identity, for the lifetime of the
/// service. Bindings are never evicted. Lookups share a read lock; only
/// registration and lazy population take the write lock, and neither the
/// deserializer nor the store is ever called with the lock held.
pub struct SignService {
    config: SignServiceConfig,
    store: Arc<dyn KeyValueStore>,
    deserializer: Option<Arc<dyn Deserializer>>,
    bindings: RwLock<Bindings>,
}

impl SignService {
    /// Create a registry with default settings.
    ///
    /// Without a deserializer the registry only knows what is registered
    /// explicitly.
    pub fn new(
        store: Arc<dyn KeyValueStore>,
        deserializer: Option<Arc<dyn Deserializer>>,
    ) -> Self {
        Self::with_config(SignServiceConfig::default(), store, deserializer)
    }

    /// Create a registry with the given settings.
    pub fn with_config(
        config: SignServiceConfig,
        store: Arc<dyn KeyValueStore>,
        deserializer: Option<Arc<dyn Deserializer>>,
    ) -> Self {
        Self {
            config,
            store,
            deserializer,
            bindings: RwLock::new(Bindings::default()),
        }
    }

    /// The settings this registry was built with.
    pub fn config(&self) -> &SignServiceConfig {
        &self.config
    }

    /// Bind `signer` and `verifier` to `identity` as an identity of type
    /// `typ`.
    ///
    /// If a signer is already bound to the identity nothing changes and the
    /// call still succeeds. Otherwise the signer, the verifier (unless one is
    /// already bound) and the type are bound under one write lock, so no
    /// concurrent lookup can observe the signer without the verifier.
    pub fn register_signer_with_type(
        &self,
        typ: IdentityType,
        identity: &Identity,
        signer: Option<Arc<dyn Signer>>,
        verifier: Option<Arc<dyn Verifier>>,
    ) -> Result<(), SigError> {
        let signer = signer.ok_or(SigError::InvalidSigner)?;
        let verifier = verifier.ok_or(SigError::InvalidVerifier)?;

        let id = identity.unique_id();
        let verifier_bound = {
            let mut guard = self.bindings.write();
            let bindings = &mut *guard;
            match bindings.signers.entry(id.clone()) {
                Entry::Occupied(_) => None,
                Entry::Vacant(slot) => {
                    slot.insert(signer);
                    let verifier_bound = bind_verifier(bindings, &id, typ.clone(), verifier);
                    bindings.types.entry(id.clone()).or_insert(typ);
                    Some(verifier_bound)
                }
            }
        };
        match verifier_bound {
            None => warn!(%identity, "another signer bound to identity"),
            Some(true) => debug!(%id, "add signer and verifier"),
            Some(false) => {
                debug!(%id, "add signer");
                warn!(%identity, "another verifier bound to identity");
            }
        }

        Ok(())
    }

    /// Bind `verifier` to `identity` as an identity of type `typ`.
    ///
    /// If a verifier is already bound to the identity nothing changes and
    /// the call still succeeds.
    pub fn register_verifier_with_type(
        &self,
        typ: IdentityType,
        identity: &Identity,
        verifier: Option<Arc<dyn Verifier>>,
    ) -> Result<(), SigError> {
        let verifier = verifier.ok_or(SigError::InvalidVerifier)?;

        let id = identity.unique_id();
        let bound = bind_verifier(&mut self.bindings.write(), &id, typ, verifier);
        if !bound {
            warn!(%identity, "another verifier bound to identity");
            return Ok(());
        }
        debug!(%id, "add verifier");

        Ok(())
    }

    /// [SignService::register_signer_with_type] with the configured default
    /// type.
    pub fn register_signer(
        &self,
        identity: &Identity,
        signer: Option<Arc<dyn Signer>>,
        verifier: Option<Arc<dyn Verifier>>,
    ) -> Result<(), SigError> {
        self.register_signer_with_type(
            self.config.default_type.clone(),
            identity,
            signer,
            verifier,
        )
    }

    /// [SignService::register_verifier_with_type] with the configured default
    /// type.
    pub fn register_verifier(
        &self,
        identity: &Identity,
        verifier: Option<Arc<dyn Verifier>>,
    ) -> Result<(), SigError> {
        self.register_verifier_with_type(self.config.default_type.clone(), identity, verifier)
    }

    /// Store `info` as the audit info of `identity`, replacing any previous
    /// value.
    pub fn register_audit_info(&self, identity: &Identity, info: &[u8]) -> Result<(), SigError> {
        self.store.put(&self.audit_info_key(identity), info)?;
        Ok(())
    }

    /// The audit info stored for `identity`, or `None` if there is none.
    pub fn get_audit_info(&self, identity: &Identity) -> Result<Option<Vec<u8>>, SigError> {
        let key = self.audit_info_key(identity);
        if !self.store.exists(&key) {
            return Ok(None);
        }
        Ok(self.store.get(&key)?)
    }

    /// A human readable description of `identity`.
    ///
    /// Never fails: when the audit info cannot be read or the deserializer
    /// cannot describe the identity, a generic description is returned.
    pub fn info(&self, identity: &Identity) -> String {
        let audit_info = match self.get_audit_info(identity) {
            Ok(audit_info) => audit_info,
            Err(error) => {
                debug!(%identity, %error, "failed getting audit info");
                return unidentified(identity);
            }
        };

        let Some(deserializer) = &self.deserializer else {
            debug!(%identity, "no deserializer set to describe identity");
            return unidentified(identity);
        };

        match deserializer.info(identity, audit_info.as_deref()) {
            Ok(info) => info,
            Err(error) => {
                debug!(%identity, %error, "failed getting info");
                unidentified(identity)
            }
        }
    }

    /// The signer bound to `identity`, asking the deserializer on a miss.
    pub fn get_signer(&self, identity: &Identity) -> Result<Arc<dyn Signer>, SigError> {
        self.resolve(
            identity,
            Role::Signer,
            |bindings| &bindings.signers,
            |bindings| &mut bindings.signers,
            |deserializer| deserializer.deserialize_signer(identity),
        )
    }

    /// The verifier bound to `identity`, asking the deserializer on a miss.
    pub fn get_verifier(&self, identity: &Identity) -> Result<Arc<dyn Verifier>, SigError> {
        self.resolve(
            identity,
            Role::Verifier,
            |bindings| &bindings.verifiers,
            |bindings| &mut bindings.verifiers,
            |deserializer| deserializer.deserialize_verifier(identity),
        )
    }

    /// A [SigningIdentity] for `identity`.
    ///
    /// Signers that already implement [SigningIdentity] are returned as they
    /// are; any other signer is wrapped in a [DefaultSigningIdentity].
    pub fn get_signing_identity(
        &self,
        identity: &Identity,
    ) -> Result<Arc<dyn SigningIdentity>, SigError> {
        let signer = self.get_signer(identity)?;
        match signer.clone().as_signing_identity() {
            Some(signing_identity) => Ok(signing_identity),
            None => Ok(Arc::new(DefaultSigningIdentity::new(
                identity.clone(),
                signer,
            ))),
        }
    }

    /// The type bound to `identity`, [IdentityType::Unknown] if none is.
    pub fn identity_type(&self, identity: &Identity) -> IdentityType {
        self.bindings
            .read()
            .types
            .get(&identity.unique_id())
            .cloned()
            .unwrap_or_default()
    }

    /// Whether this registry holds a signer for `identity`.
    ///
    /// Only looks at what is already bound; the deserializer is not asked.
    pub fn is_me(&self, identity: &Identity) -> bool {
        self.bindings
            .read()
            .signers
            .contains_key(&identity.unique_id())
    }

    /// Sign `payload` as `identity`.
    pub fn sign(&self, identity: &Identity, payload: &[u8]) -> Result<Vec<u8>, SigError> {
        Ok(self.get_signer(identity)?.sign(payload)?)
    }

    /// Check that `signature` was produced over `payload` by `identity`.
    pub fn verify(
        &self,
        identity: &Identity,
        payload: &[u8],
        signature: &[u8],
    ) -> Result<(), SigError> {
        Ok(self.get_verifier(identity)?.verify(payload, signature)?)
    }

    fn audit_info_key(&self, identity: &Identity) -> String {
        CompositeKey::new(self.config.namespace.as_str())
            .with(identity.unique_id())
            .encode()
    }

    fn resolve<C>(
        &self,
        identity: &Identity,
        role: Role,
        slot: impl FnOnce(&Bindings) -> &HashMap<String, Arc<C>>,
        slot_mut: impl FnOnce(&mut Bindings) -> &mut HashMap<String, Arc<C>>,
        deserialize: impl FnOnce(&dyn Deserializer) -> Result<Arc<C>, DeserializeError>,
    ) -> Result<Arc<C>, SigError>
    where
        C: ?Sized,
    {
        let id = identity.unique_id();
        let cached = slot(&*self.bindings.read()).get(&id).cloned();
        if let Some(capability) = cached {
            return Ok(capability);
        }

        let deserializer = self
            .deserializer
            .as_deref()
            .ok_or_else(|| SigError::Unresolvable {
                role,
                identity: identity.clone(),
            })?;
        let capability = deserialize(deserializer).map_err(|source| SigError::Resolution {
            role,
            identity: identity.clone(),
            source,
        })?;

        debug!(%id, %role, "add resolved capability");
        // A concurrent registration may have landed while the deserializer
        // ran; whatever is bound first stays bound.
        let mut bindings = self.bindings.write();
        Ok(slot_mut(&mut *bindings).entry(id).or_insert(capability).clone())
    }
}

impl fmt::Debug for SignService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bindings = self.bindings.read();
        f.debug_struct("SignService")
            .field("config", &self.config)
            .field("signers", &bindings.signers.len())
            .field("verifiers", &bindings.verifiers.len())
            .field("deserializer", &self.deserializer.is_some())
            .finish_non_exhaustive()
    }
}

/// Bind `verifier` and, with it, `typ` unless a verifier is already bound.
fn bind_verifier(
    bindings: &mut Bindings,
    id: &str,
    typ: IdentityType,
    verifier: Arc<dyn Verifier>,
) -> bool {
    match bindings.verifiers.entry(id.to_string()) {
        Entry::Occupied(_) => false,
        Entry::Vacant(slot) => {
            slot.insert(verifier);
            bindings.types.entry(id.to_string()).or_insert(typ);
            true
        }
    }
}

fn unidentified(identity: &Identity) -> String {
    format!(
        "unable to identify identity : [{}][{}]",
        identity.unique_id(),
        String::from_utf8_lossy(identity.as_bytes())
    )
}
