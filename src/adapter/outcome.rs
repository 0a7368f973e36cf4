use crate::store::{FieldError, RecordResult};
use serde::Serialize;

/// A sub-record the store refused within a batch
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct RecordFailure {
    pub errors: Vec<FieldError>,
    pub message: Option<String>,
}

impl From<RecordResult> for RecordFailure {
    fn from(result: RecordResult) -> Self {
        Self {
            errors: result.errors.unwrap_or_default(),
            message: result.message,
        }
    }
}

impl RecordFailure {
    /// Failure with a record-level message and no field errors
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            errors: Vec::new(),
            message: Some(message.into()),
        }
    }

    /// One line per field error, then the record message if any
    pub fn messages(&self) -> Vec<String> {
        self.errors
            .iter()
            .map(|e| format!("{}: {}", e.field_label, e.message))
            .chain(self.message.clone())
            .collect()
    }
}

/// Per-record results of a create or update batch
#[derive(Debug, Clone, PartialEq)]
pub struct BatchOutcome<T> {
    pub succeeded: Vec<T>,
    pub failed: Vec<RecordFailure>,
}

impl<T> Default for BatchOutcome<T> {
    fn default() -> Self {
        Self {
            succeeded: Vec::new(),
            failed: Vec::new(),
        }
    }
}

impl<T> BatchOutcome<T> {
    pub fn first(&self) -> Option<&T> {
        self.succeeded.first()
    }

    pub fn into_first(self) -> Option<T> {
        self.succeeded.into_iter().next()
    }
}

/// Per-record results of a delete batch
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeleteOutcome {
    pub deleted: usize,
    pub failed: Vec<RecordFailure>,
}

impl DeleteOutcome {
    /// True when any record in the batch was removed
    pub fn is_deleted(&self) -> bool {
        self.deleted > 0
    }
}
