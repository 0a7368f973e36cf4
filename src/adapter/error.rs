use crate::models::{InvalidRecordId, RecordId};
use crate::store::StoreError;
use thiserror::Error;

/// Why a property operation did not produce a value
#[derive(Debug, Error)]
pub enum AdapterError {
    /// The store answered `success: false`
    #[error("{message}")]
    Remote { message: String },

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("property {id} not found")]
    NotFound { id: RecordId },

    #[error(transparent)]
    InvalidId(#[from] InvalidRecordId),

    #[error("unreadable property record: {0}")]
    Decode(#[from] serde_json::Error),
}

impl AdapterError {
    /// Message written by the store, suitable to show as is.
    ///
    /// `None` means the failure is local or the transport gave nothing
    /// readable, and the caller should pick its own wording.
    pub fn user_message(&self) -> Option<&str> {
        match self {
            AdapterError::Remote { message } => Some(message),
            AdapterError::Store(err) => err.remote_message(),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, AdapterError::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_message_prefers_store_text() {
        let remote = AdapterError::Remote {
            message: "Table is locked".to_string(),
        };
        assert_eq!(remote.user_message(), Some("Table is locked"));

        let rejected = AdapterError::from(StoreError::Rejected {
            status: 422,
            message: "Price must be positive".to_string(),
        });
        assert_eq!(rejected.user_message(), Some("Price must be positive"));

        assert_eq!(AdapterError::from(StoreError::Status(503)).user_message(), None);
        assert_eq!(
            AdapterError::NotFound { id: RecordId::new(4) }.user_message(),
            None
        );
    }
}
