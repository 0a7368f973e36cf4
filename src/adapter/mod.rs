//! Translation boundary between [`Property`] values and `property_c` records.
//!
//! Every operation is a single request on the injected [`RecordStore`]. The
//! adapter only translates and classifies; deciding what the user sees is
//! left to the caller (see [`crate::service::PropertyService`]).

pub mod error;
pub mod outcome;

pub use error::AdapterError;
pub use outcome::{BatchOutcome, DeleteOutcome, RecordFailure};

use crate::models::{Property, PropertyInput, ToRecordId};
use crate::records::{self, PropertyRecord, LISTING_DATE_FIELD, PROPERTY_ENTITY, PROPERTY_FIELDS};
use crate::store::{
    BatchEnvelope, DeleteParams, Envelope, FetchParams, OrderBy, RecordStore, RecordsParams,
};
use tracing::{debug, info, warn};

const UNSPECIFIED_FAILURE: &str = "Record store reported a failure";
const MISSING_RECORD: &str = "Record was saved but the store did not return it";
const UNREADABLE_RECORD: &str = "Record was saved but could not be read back";

pub struct PropertyRecordAdapter<S> {
    store: S,
}

impl<S: RecordStore> PropertyRecordAdapter<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn fetch_params() -> FetchParams {
        FetchParams::with_fields(PROPERTY_FIELDS)
    }

    /// All properties, newest listing first
    pub async fn list(&self) -> Result<Vec<Property>, AdapterError> {
        let params = Self::fetch_params().order_by(OrderBy::descending(LISTING_DATE_FIELD));

        debug!("Listing properties from {} store", self.store.store_name());
        let envelope = self.store.fetch_records(PROPERTY_ENTITY, &params).await?;

        let rows = accept(envelope)?.unwrap_or_default();
        let mut properties = Vec::with_capacity(rows.len());
        for row in rows {
            match records::decode_value(row) {
                Ok(property) => properties.push(property),
                Err(err) => warn!("Skipping unreadable property row: {}", err),
            }
        }

        // Stable, so rows with equal dates keep the store's order.
        properties.sort_by(|a, b| b.listing_date.cmp(&a.listing_date));

        info!("Loaded {} properties", properties.len());
        Ok(properties)
    }

    pub async fn get_by_id(&self, id: impl ToRecordId) -> Result<Property, AdapterError> {
        let id = id.to_record_id()?;

        debug!("Fetching property {}", id);
        let envelope = self
            .store
            .get_record_by_id(PROPERTY_ENTITY, id, &Self::fetch_params())
            .await?;

        match accept(envelope)? {
            Some(value) if !value.is_null() => Ok(records::decode_value(value)?),
            _ => Err(AdapterError::NotFound { id }),
        }
    }

    /// Submit a single-record create batch. The store assigns the id.
    pub async fn create(
        &self,
        input: &PropertyInput,
    ) -> Result<BatchOutcome<Property>, AdapterError> {
        let params = RecordsParams {
            records: vec![PropertyRecord::for_create(input).into_fields()?],
        };

        debug!("Creating property {:?}", input.title);
        let envelope = self.store.create_record(PROPERTY_ENTITY, &params).await?;
        collect_batch(envelope)
    }

    pub async fn update(
        &self,
        id: impl ToRecordId,
        input: &PropertyInput,
    ) -> Result<BatchOutcome<Property>, AdapterError> {
        let id = id.to_record_id()?;
        let params = RecordsParams {
            records: vec![PropertyRecord::for_update(id, input).into_fields()?],
        };

        debug!("Updating property {}", id);
        let envelope = self.store.update_record(PROPERTY_ENTITY, &params).await?;
        collect_batch(envelope)
    }

    pub async fn delete(&self, id: impl ToRecordId) -> Result<DeleteOutcome, AdapterError> {
        let id = id.to_record_id()?;
        let params = DeleteParams {
            record_ids: vec![id.get()],
        };

        debug!("Deleting property {}", id);
        let envelope = self.store.delete_record(PROPERTY_ENTITY, &params).await?;

        if !envelope.success {
            return Err(remote_failure(envelope.message));
        }

        let mut outcome = DeleteOutcome::default();
        for result in envelope.results.unwrap_or_default() {
            if result.success {
                outcome.deleted += 1;
            } else {
                outcome.failed.push(result.into());
            }
        }
        Ok(outcome)
    }
}

fn remote_failure(message: Option<String>) -> AdapterError {
    AdapterError::Remote {
        message: message.unwrap_or_else(|| UNSPECIFIED_FAILURE.to_string()),
    }
}

/// Payload of a successful envelope
fn accept<T>(envelope: Envelope<T>) -> Result<Option<T>, AdapterError> {
    if envelope.success {
        Ok(envelope.data)
    } else {
        Err(remote_failure(envelope.message))
    }
}

fn collect_batch(envelope: BatchEnvelope) -> Result<BatchOutcome<Property>, AdapterError> {
    if !envelope.success {
        return Err(remote_failure(envelope.message));
    }

    let mut outcome = BatchOutcome::default();
    for result in envelope.results.unwrap_or_default() {
        if !result.success {
            outcome.failed.push(result.into());
            continue;
        }
        // A saved record we cannot read back is reported alongside the
        // refused ones instead of discarding them.
        match result.data.filter(|value| !value.is_null()) {
            Some(value) => match records::decode_value(value) {
                Ok(property) => outcome.succeeded.push(property),
                Err(err) => {
                    warn!("Unreadable record in batch result: {}", err);
                    outcome.failed.push(RecordFailure::with_message(UNREADABLE_RECORD));
                }
            },
            None => {
                warn!("Batch result marked successful without record data");
                outcome.failed.push(RecordFailure::with_message(MISSING_RECORD));
            }
        }
    }
    Ok(outcome)
}
