use glimit_core::error::CoreError;

/// Failures the console turns into error toasts.
#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    /// The proxy could not be reached.
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The proxy answered with a non-2xx status.
    #[error("{message}")]
    Upstream { status: u16, message: String },

    /// A 2xx answer whose body could not be read.
    #[error("Invalid response body: {0}")]
    InvalidBody(String),

    /// The dialog failed local validation; nothing was sent.
    #[error("{0}")]
    Validation(String),
}

impl From<CoreError> for ConsoleError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(msg) => ConsoleError::Validation(msg),
            other => ConsoleError::InvalidBody(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for ConsoleError {
    fn from(err: serde_json::Error) -> Self {
        ConsoleError::InvalidBody(err.to_string())
    }
}
