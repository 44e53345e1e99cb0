use thiserror::Error;

#[derive(Debug, Error, Clone)]
pub enum RefreshError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Gateway error: {0}")]
    Gateway(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RefreshError::Transport("connection refused".to_string());
        assert_eq!(err.to_string(), "Transport error: connection refused");

        let err = RefreshError::Gateway("gateway timeout".to_string());
        assert_eq!(err.to_string(), "Gateway error: gateway timeout");
    }
}
