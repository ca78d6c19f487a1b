// src/error.rs

//! Error types for ionbridge
//!
//! A single crate-wide error enum. The pipeline performs no local recovery:
//! every failure aborts the remainder of the `add` operation and surfaces to
//! the command layer for user-facing reporting.

use thiserror::Error;

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by the integration pipeline and project config layer
#[derive(Debug, Error)]
pub enum Error {
    /// The requested integration name is not in the recognized set.
    /// Carries the bad name for user-facing reporting.
    #[error("unknown integration: '{0}'")]
    IntegrationNotFound(String),

    /// Network or HTTP failure while fetching an integration archive
    #[error("download failed: {0}")]
    DownloadError(String),

    /// Filesystem failure with path context attached
    #[error("{0}")]
    IoError(String),

    /// Plain I/O failure, propagated unmodified
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Malformed project configuration document
    #[error("failed to parse project config: {0}")]
    ParseError(String),

    /// Project configuration could not be read or written
    #[error("project config error: {0}")]
    ConfigError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integration_not_found_carries_name() {
        let err = Error::IntegrationNotFound("flutter".to_string());
        assert!(err.to_string().contains("flutter"));
    }

    #[test]
    fn test_io_error_converts() {
        fn fails() -> Result<()> {
            std::fs::metadata("/definitely/not/a/real/path/ionbridge")?;
            Ok(())
        }
        assert!(matches!(fails(), Err(Error::Io(_))));
    }
}
