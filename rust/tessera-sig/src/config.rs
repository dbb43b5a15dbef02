use serde::{Deserialize, Serialize};
use tessera_identity::IdentityType;

/// Store namespace audit info is written under unless configured otherwise.
pub const DEFAULT_AUDIT_NAMESPACE: &str = "tessera.platform.view.sig";

/// Settings for a [crate::SignService].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SignServiceConfig {
    /// Namespace segment of every audit info key.
    pub namespace: String,
    /// Type bound by the registration calls that do not take one.
    pub default_type: IdentityType,
}

impl Default for SignServiceConfig {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_AUDIT_NAMESPACE.to_string(),
            default_type: IdentityType::Membership,
        }
    }
}
