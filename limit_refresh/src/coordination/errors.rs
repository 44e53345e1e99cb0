//! Error types for the refresh coordination layer

use thiserror::Error;

use crate::identity::IdentityError;
use crate::refresh::RefreshError;

/// Errors that can occur while coordinating a rate-limit refresh
///
/// `InvalidRequest` and `ResourceNotFound` are deliberate short-circuits of
/// the request, not failures; only `Lookup` and `Refresh` are logged at
/// error severity.
#[derive(Debug, Error)]
pub enum CoordinationError {
    /// Caller supplied no account identifier
    #[error("missing uuid")]
    InvalidRequest,

    /// No linked account matches the identifier
    #[error("Resource not found: {resource_type} {resource_id}")]
    ResourceNotFound {
        resource_type: String,
        resource_id: String,
    },

    /// Error from the linked-account store
    #[error("Lookup error: {0}")]
    Lookup(IdentityError),

    /// Error from the rate-limit refresh delegate
    #[error("Refresh error: {0}")]
    Refresh(RefreshError),
}

impl CoordinationError {
    /// Log the error at the severity its variant calls for and return self
    pub fn log(self) -> Self {
        match &self {
            Self::InvalidRequest => tracing::debug!("missing uuid"),
            Self::ResourceNotFound {
                resource_type,
                resource_id,
            } => tracing::debug!("Resource not found: {} {}", resource_type, resource_id),
            Self::Lookup(err) => tracing::error!("Lookup error: {}", err),
            Self::Refresh(err) => tracing::error!("Refresh error: {}", err),
        }
        self
    }
}

// Collaborator failures are logged at the point they enter the coordination
// layer, so call sites can use `?` directly.

impl From<IdentityError> for CoordinationError {
    fn from(err: IdentityError) -> Self {
        let error = Self::Lookup(err);
        tracing::error!("{}", error);
        error
    }
}

impl From<RefreshError> for CoordinationError {
    fn from(err: RefreshError) -> Self {
        let error = Self::Refresh(err);
        tracing::error!("{}", error);
        error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_is_sync_and_send() {
        fn assert_sync_send<T: Sync + Send>() {}
        assert_sync_send::<CoordinationError>();
    }

    #[test]
    fn test_error_display() {
        let err = CoordinationError::InvalidRequest;
        assert_eq!(err.to_string(), "missing uuid");

        let err = CoordinationError::ResourceNotFound {
            resource_type: "LinkedAccount".to_string(),
            resource_id: "abc-123".to_string(),
        };
        assert_eq!(err.to_string(), "Resource not found: LinkedAccount abc-123");

        let err = CoordinationError::Lookup(IdentityError::Storage("db unavailable".to_string()));
        assert_eq!(err.to_string(), "Lookup error: Storage error: db unavailable");

        let err = CoordinationError::Refresh(RefreshError::Gateway("gateway timeout".to_string()));
        assert_eq!(err.to_string(), "Refresh error: Gateway error: gateway timeout");
    }

    #[test]
    fn test_from_identity_error() {
        let identity_err = IdentityError::Storage("storage error".to_string());
        let err: CoordinationError = identity_err.into();

        match err {
            CoordinationError::Lookup(IdentityError::Storage(msg)) => {
                assert_eq!(msg, "storage error");
            }
            other => panic!("Wrong error type: {other:?}"),
        }
    }

    #[test]
    fn test_from_refresh_error() {
        let refresh_err = RefreshError::Transport("connection refused".to_string());
        let err: CoordinationError = refresh_err.into();

        match err {
            CoordinationError::Refresh(RefreshError::Transport(msg)) => {
                assert_eq!(msg, "connection refused");
            }
            other => panic!("Wrong error type: {other:?}"),
        }
    }

    #[test]
    fn test_error_log_returns_self() {
        let err = CoordinationError::InvalidRequest;
        let logged_err = err.log();

        assert!(matches!(logged_err, CoordinationError::InvalidRequest));
    }
}
