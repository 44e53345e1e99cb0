use http::StatusCode;
use limit_refresh::CoordinationError;

/// Helper trait for converting errors to a standard response error format
pub(crate) trait IntoResponseError<T> {
    fn into_response_error(self) -> Result<T, (StatusCode, String)>;
}

/// Fixed mapping from coordination outcomes to response statuses
///
/// One response per request: 400 with "missing uuid" for an empty
/// identifier, 404 with an empty body when no mapping exists, 500 with the
/// cause's message for collaborator failures.
impl<T> IntoResponseError<T> for Result<T, CoordinationError> {
    fn into_response_error(self) -> Result<T, (StatusCode, String)> {
        self.map_err(|e| match e {
            CoordinationError::InvalidRequest => (StatusCode::BAD_REQUEST, e.to_string()),
            CoordinationError::ResourceNotFound { .. } => (StatusCode::NOT_FOUND, String::new()),
            CoordinationError::Lookup(err) => {
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
            CoordinationError::Refresh(err) => {
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
        })
    }
}
