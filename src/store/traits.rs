use crate::models::RecordId;
use crate::store::error::StoreError;
use crate::store::types::{BatchEnvelope, DeleteParams, Envelope, FetchParams, RecordsParams};
use async_trait::async_trait;
use serde_json::Value;

/// Client capability for a remote record store.
///
/// The adapter receives one of these instead of building its own client, so
/// tests can hand it an in-memory store.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Fetch all records of an entity
    async fn fetch_records(
        &self,
        entity: &str,
        params: &FetchParams,
    ) -> Result<Envelope<Vec<Value>>, StoreError>;

    /// Fetch one record by primary key
    async fn get_record_by_id(
        &self,
        entity: &str,
        id: RecordId,
        params: &FetchParams,
    ) -> Result<Envelope<Value>, StoreError>;

    async fn create_record(
        &self,
        entity: &str,
        params: &RecordsParams,
    ) -> Result<BatchEnvelope, StoreError>;

    async fn update_record(
        &self,
        entity: &str,
        params: &RecordsParams,
    ) -> Result<BatchEnvelope, StoreError>;

    async fn delete_record(
        &self,
        entity: &str,
        params: &DeleteParams,
    ) -> Result<BatchEnvelope, StoreError>;

    /// Name of the store backend, for log lines
    fn store_name(&self) -> &'static str;
}
