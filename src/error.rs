//! Error types for tallyplate operations.
//!
//! This module defines [`TallyError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Rendering never fails: unknown templates render as a sentinel string
//!   and missing variables are echoed back
//! - Template file reads fail with [`TallyError::ResourceLoad`], which
//!   `TemplateEngine::load_from_path` turns into a logged `false`
//! - Use `anyhow::Error` (via `TallyError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for tallyplate operations.
#[derive(Debug, Error)]
pub enum TallyError {
    /// Explicitly requested configuration file does not exist.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// A template file could not be read.
    #[error("Failed to read template '{name}' from {path}: {source}")]
    ResourceLoad {
        name: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A render context could not be built from user input.
    #[error("Invalid context: {message}")]
    InvalidContext { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for tallyplate operations.
pub type Result<T> = std::result::Result<T, TallyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_not_found_displays_path() {
        let err = TallyError::ConfigNotFound {
            path: PathBuf::from("/foo/.tallyplate.yml"),
        };
        assert!(err.to_string().contains("/foo/.tallyplate.yml"));
    }

    #[test]
    fn config_parse_error_displays_path_and_message() {
        let err = TallyError::ConfigParseError {
            path: PathBuf::from("/config.yml"),
            message: "invalid syntax".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/config.yml"));
        assert!(msg.contains("invalid syntax"));
    }

    #[test]
    fn resource_load_displays_name_path_and_cause() {
        let err = TallyError::ResourceLoad {
            name: "counter".into(),
            path: PathBuf::from("/templates/counter.tpl"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "file missing"),
        };
        let msg = err.to_string();
        assert!(msg.contains("counter"));
        assert!(msg.contains("/templates/counter.tpl"));
        assert!(msg.contains("file missing"));
    }

    #[test]
    fn resource_load_exposes_source() {
        use std::error::Error as _;
        let err = TallyError::ResourceLoad {
            name: "button".into(),
            path: PathBuf::from("/b.tpl"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.source().is_some());
    }

    #[test]
    fn invalid_context_displays_message() {
        let err = TallyError::InvalidContext {
            message: "expected name=value".into(),
        };
        assert!(err.to_string().contains("expected name=value"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: TallyError = io_err.into();
        assert!(matches!(err, TallyError::Io(_)));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(TallyError::InvalidContext {
                message: "test".into(),
            })
        }
        assert!(returns_error().is_err());
    }
}
