//! Error types for the palavra-emotion crate.
//!
//! Per-request analysis never fails: malformed or empty input degrades to a
//! neutral result. Errors exist only for startup validation (configuration,
//! emotion catalog) and for verse-store collaborators that perform I/O.

/// Errors that can occur while configuring or feeding the engine.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Invalid analyzer configuration.
    #[error("config error: {0}")]
    Config(String),

    /// The emotion catalog failed startup validation.
    #[error("catalog error: {0}")]
    Catalog(String),

    /// A verse-store collaborator failed to supply candidates.
    #[error("verse store error: {0}")]
    Store(String),
}

/// Convenience type alias for palavra-emotion results.
pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_config() {
        let err = EngineError::Config("calibration_ceiling must be > 0".into());
        assert_eq!(
            err.to_string(),
            "config error: calibration_ceiling must be > 0"
        );
    }

    #[test]
    fn display_catalog() {
        let err = EngineError::Catalog("emotion 'tristeza' has no keywords".into());
        assert_eq!(
            err.to_string(),
            "catalog error: emotion 'tristeza' has no keywords"
        );
    }

    #[test]
    fn display_store() {
        let err = EngineError::Store("connection refused".into());
        assert_eq!(err.to_string(), "verse store error: connection refused");
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<EngineError>();
    }
}
