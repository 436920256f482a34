//! # Mesh Errors
//!
//! Error types for solid construction and placement operations.

use thiserror::Error;

/// Errors that can occur while building or placing solids.
///
/// All failures are synchronous and surface to the caller; nothing is
/// retried or silently discarded.
#[derive(Debug, Error)]
pub enum MeshError {
    /// A requested configuration is unknown or outside supported bounds
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Geometrically invalid input to an otherwise valid operation
    #[error("Domain error: {message}")]
    Domain { message: String },
}

impl MeshError {
    /// Creates a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Creates a domain error.
    pub fn domain(message: impl Into<String>) -> Self {
        Self::Domain {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_error_display() {
        let err = MeshError::configuration("unknown solid family 'icosahedron'");
        assert_eq!(
            err.to_string(),
            "Configuration error: unknown solid family 'icosahedron'"
        );
    }

    #[test]
    fn test_domain_error_display() {
        let err = MeshError::domain("rotation axis has zero length");
        assert_eq!(err.to_string(), "Domain error: rotation axis has zero length");
    }

    #[test]
    fn test_error_constructors_accept_string() {
        let message = String::from("face index 99 out of range");
        let err = MeshError::domain(message);
        assert!(matches!(err, MeshError::Domain { .. }));
    }
}
