use thiserror::Error;

/// Failures talking to the expense service.
///
/// `Network` and `Status` are transport problems, `Malformed` is a body that
/// did not have the expected shape, `Rejected` is an `error` field the
/// service reported itself. None of them is fatal; callers keep their
/// previous state.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Server error {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Malformed response: {0}")]
    Malformed(String),

    #[error("Service reported an error: {0}")]
    Rejected(String),
}

impl ApiError {
    pub fn is_malformed(&self) -> bool {
        matches!(self, ApiError::Malformed(_))
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Malformed(err.to_string())
    }
}
