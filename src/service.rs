//! Caller-facing property operations that never fail.
//!
//! Each method runs the matching [`PropertyRecordAdapter`] operation, logs
//! and notifies on every failure path, and falls back to an empty value:
//! `[]` for list, `None` for single records, `false` for delete.

use crate::adapter::{AdapterError, PropertyRecordAdapter, RecordFailure};
use crate::models::{Property, PropertyInput, ToRecordId};
use crate::notify::{Notification, Notifier};
use crate::store::RecordStore;
use tracing::{debug, error};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operation {
    List,
    Get,
    Create,
    Update,
    Delete,
}

impl Operation {
    fn log_context(self) -> &'static str {
        match self {
            Operation::List => "Error fetching properties",
            Operation::Get => "Error fetching property",
            Operation::Create => "Error creating property",
            Operation::Update => "Error updating property",
            Operation::Delete => "Error deleting property",
        }
    }

    /// Shown when the failure carries no message from the store
    fn fallback_message(self) -> &'static str {
        match self {
            Operation::List => "Failed to load properties",
            Operation::Get => "Failed to load property",
            Operation::Create => "Failed to create property",
            Operation::Update => "Failed to update property",
            Operation::Delete => "Failed to delete property",
        }
    }
}

/// Operations that submit a batch and report per-record results
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BatchOperation {
    Create,
    Update,
    Delete,
}

impl BatchOperation {
    fn verb(self) -> &'static str {
        match self {
            BatchOperation::Create => "create",
            BatchOperation::Update => "update",
            BatchOperation::Delete => "delete",
        }
    }

    fn success_message(self) -> &'static str {
        match self {
            BatchOperation::Create => "Property created successfully",
            BatchOperation::Update => "Property updated successfully",
            BatchOperation::Delete => "Property deleted successfully",
        }
    }
}

pub struct PropertyService<S, N> {
    adapter: PropertyRecordAdapter<S>,
    notifier: N,
}

impl<S: RecordStore, N: Notifier> PropertyService<S, N> {
    pub fn new(store: S, notifier: N) -> Self {
        Self {
            adapter: PropertyRecordAdapter::new(store),
            notifier,
        }
    }

    pub fn adapter(&self) -> &PropertyRecordAdapter<S> {
        &self.adapter
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub async fn list(&self) -> Vec<Property> {
        match self.adapter.list().await {
            Ok(properties) => properties,
            Err(err) => {
                self.report(Operation::List, &err);
                Vec::new()
            }
        }
    }

    pub async fn get_by_id(&self, id: impl ToRecordId) -> Option<Property> {
        match self.adapter.get_by_id(id).await {
            Ok(property) => Some(property),
            Err(err) if err.is_not_found() => {
                debug!("{}", err);
                None
            }
            Err(err) => {
                self.report(Operation::Get, &err);
                None
            }
        }
    }

    pub async fn create(&self, input: &PropertyInput) -> Option<Property> {
        match self.adapter.create(input).await {
            Ok(outcome) => {
                self.report_failures(BatchOperation::Create, &outcome.failed);
                self.settle(BatchOperation::Create, outcome.into_first())
            }
            Err(err) => {
                self.report(Operation::Create, &err);
                None
            }
        }
    }

    pub async fn update(&self, id: impl ToRecordId, input: &PropertyInput) -> Option<Property> {
        match self.adapter.update(id, input).await {
            Ok(outcome) => {
                self.report_failures(BatchOperation::Update, &outcome.failed);
                self.settle(BatchOperation::Update, outcome.into_first())
            }
            Err(err) => {
                self.report(Operation::Update, &err);
                None
            }
        }
    }

    pub async fn delete(&self, id: impl ToRecordId) -> bool {
        match self.adapter.delete(id).await {
            Ok(outcome) => {
                self.report_failures(BatchOperation::Delete, &outcome.failed);
                let deleted = outcome.is_deleted();
                if deleted {
                    self.notifier
                        .notify(Notification::success(BatchOperation::Delete.success_message()));
                }
                deleted
            }
            Err(err) => {
                self.report(Operation::Delete, &err);
                false
            }
        }
    }

    fn settle(&self, operation: BatchOperation, property: Option<Property>) -> Option<Property> {
        let property = property?;
        self.notifier
            .notify(Notification::success(operation.success_message()));
        Some(property)
    }

    fn report(&self, operation: Operation, err: &AdapterError) {
        match err.user_message() {
            Some(message) => {
                error!("{}: {}", operation.log_context(), message);
                self.notifier.notify(Notification::error(message));
            }
            None => {
                error!("{}: {}", operation.log_context(), err);
                self.notifier
                    .notify(Notification::error(operation.fallback_message()));
            }
        }
    }

    fn report_failures(&self, operation: BatchOperation, failed: &[RecordFailure]) {
        if failed.is_empty() {
            return;
        }

        error!(
            "Failed to {} {} records: {:?}",
            operation.verb(),
            failed.len(),
            failed
        );

        for message in failed.iter().flat_map(RecordFailure::messages) {
            self.notifier.notify(Notification::error(message));
        }
    }
}
