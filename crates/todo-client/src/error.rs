//! Client Errors

/// Result alias used by every client operation
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors surfaced to the UI
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Tenant id (or another required setting) is missing.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The request never produced a response (DNS, connection, CORS...).
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("[{status}] {status_text} - {body}")]
    Http {
        status: u16,
        status_text: String,
        /// Raw response body for diagnostics.
        body: String,
    },

    /// The response body was empty or not the expected JSON.
    #[error("unexpected response body: {0}")]
    Decode(String),

    /// Input rejected before any request was made.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl ClientError {
    /// True for a 404 from the server
    pub fn is_not_found(&self) -> bool {
        matches!(self, ClientError::Http { status: 404, .. })
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Decode(err.to_string())
    }
}

/// Input validation failures
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("item name must not be blank")]
    BlankName,

    #[error("image is {size} bytes, the limit is {limit} bytes")]
    ImageTooLarge { size: u64, limit: u64 },

    #[error("image file name {0:?} may only contain a-z, A-Z, 0-9, '.', '_' and '-'")]
    InvalidFileName(String),
}
