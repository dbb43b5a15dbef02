use tessera_sig::SigError;
use tessera_storage::StorageError;
use thiserror::Error;

/// Errors raised while setting up or running a [crate::Node].
#[derive(Error, Debug)]
pub enum NodeError {
    /// A configuration document or a message is not valid JSON for its type.
    #[error("Malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// File persistence was selected without a path.
    #[error("File persistence requires kvs.persistence.opts.path")]
    MissingStorePath,

    /// The logging spec is not a valid filter directive.
    #[error("Invalid logging spec: {0}")]
    Logging(#[from] tracing_subscriber::filter::ParseError),

    /// The key-value store failed.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// The identity registry failed.
    #[error(transparent)]
    Sig(#[from] SigError),

    /// The peer broke the protocol or went away.
    #[error("Protocol error: {0}")]
    Protocol(String),
}
