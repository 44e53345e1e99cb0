use thiserror::Error;

#[derive(Debug, Error, Clone)]
pub enum IdentityError {
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IdentityError::Storage("db unavailable".to_string());
        assert_eq!(err.to_string(), "Storage error: db unavailable");

        let err = IdentityError::Internal("unexpected".to_string());
        assert_eq!(err.to_string(), "Internal error: unexpected");
    }

    #[test]
    fn test_error_is_sync_and_send() {
        fn assert_sync_send<T: Sync + Send>() {}
        assert_sync_send::<IdentityError>();
    }
}
