use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tessera_sig::SignServiceConfig;

use crate::NodeError;

/// Configuration of a single node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeConfig {
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Node identity and storage settings.
    pub node: NodeSection,
    /// Identity registry settings.
    pub sig: SignServiceConfig,
    /// Ledger networks this node takes part in.
    pub networks: Vec<NetworkConfig>,
}

impl NodeConfig {
    /// Parse a configuration from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, NodeError> {
        Ok(serde_json::from_str(json)?)
    }

    /// The network flagged as default, else the first one listed.
    pub fn default_network(&self) -> Option<&NetworkConfig> {
        self.networks
            .iter()
            .find(|network| network.default)
            .or_else(|| self.networks.first())
    }
}

/// Output format of the log subscriber.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human readable lines.
    #[default]
    Text,
    /// One JSON object per event.
    Json,
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directives, e.g. `info,tessera_sig=debug`.
    pub spec: String,
    /// Output format.
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            spec: "info".into(),
            format: LogFormat::default(),
        }
    }
}

/// Identity and storage settings of the node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NodeSection {
    /// Name of the node within its network.
    pub id: String,
    /// Network the node registers with.
    pub network_id: String,
    /// Address the node is reachable at.
    pub address: String,
    /// Key-value store settings.
    pub kvs: KvsConfig,
}

/// Key-value store settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KvsConfig {
    /// Where values are kept.
    pub persistence: PersistenceConfig,
}

/// Store backend selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistenceConfig {
    /// Backend kind.
    #[serde(rename = "type")]
    pub kind: PersistenceKind,
    /// Backend options.
    pub opts: PersistenceOpts,
}

/// Supported store backends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PersistenceKind {
    /// Values live in memory and vanish with the node.
    #[default]
    Memory,
    /// Values are files under [PersistenceOpts::path].
    File,
}

/// Store backend options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistenceOpts {
    /// Root directory of a file store.
    pub path: Option<PathBuf>,
}

/// A ledger network the node is attached to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    /// Network name.
    pub name: String,
    /// Whether this is the network used when none is named.
    pub default: bool,
}
