use tracing_subscriber::EnvFilter;

use crate::{LogFormat, LoggingConfig, NodeError};

/// Install the process-wide `tracing` subscriber described by `config`.
///
/// `RUST_LOG` wins over [LoggingConfig::spec] when it is set and valid.
/// Calling this again once a subscriber is installed leaves the first one in
/// place and is not an error.
pub fn init_logging(config: &LoggingConfig) -> Result<(), NodeError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.spec)?,
    };

    let installed = match config.format {
        LogFormat::Text => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .try_init(),
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .try_init(),
    };
    if let Err(error) = installed {
        tracing::debug!(%error, "keeping the installed subscriber");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_rejects_malformed_specs() {
        // Only reached when RUST_LOG is not set to something valid.
        if std::env::var("RUST_LOG").is_ok() {
            return;
        }
        let config = LoggingConfig {
            spec: "tessera_sig=loud".into(),
            format: LogFormat::Text,
        };
        assert!(matches!(init_logging(&config), Err(NodeError::Logging(_))));
    }

    #[test]
    fn it_can_be_called_more_than_once() {
        let config = LoggingConfig::default();
        assert!(init_logging(&config).is_ok());
        assert!(init_logging(&LoggingConfig {
            format: LogFormat::Json,
            ..config
        })
        .is_ok());
    }
}
