use thiserror::Error;

/// Transport level failure talking to the record store
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store answered with an error status and a readable message
    #[error("record store rejected the request ({status}): {message}")]
    Rejected { status: u16, message: String },

    /// The store answered with an error status and no usable message
    #[error("record store returned status {0}")]
    Status(u16),

    #[error("request to record store failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unreadable response from record store: {0}")]
    Decode(#[from] serde_json::Error),
}

impl StoreError {
    /// Message supplied by the store itself, if any
    pub fn remote_message(&self) -> Option<&str> {
        match self {
            StoreError::Rejected { message, .. } => Some(message),
            _ => None,
        }
    }
}
