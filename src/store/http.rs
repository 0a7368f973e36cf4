use crate::config::StoreConfig;
use crate::models::RecordId;
use crate::store::error::StoreError;
use crate::store::traits::RecordStore;
use crate::store::types::{BatchEnvelope, DeleteParams, Envelope, FetchParams, RecordsParams};
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

const PROJECT_ID_HEADER: &str = "X-Project-Id";
const PUBLIC_KEY_HEADER: &str = "X-Public-Key";

/// Record store reached over its JSON HTTP API
pub struct HttpRecordStore {
    client: Client,
    config: StoreConfig,
}

impl HttpRecordStore {
    /// Create a store client from environment configuration
    pub fn new() -> Result<Self> {
        Self::with_config(StoreConfig::from_env()?)
    }

    /// Create a store client with explicit configuration
    pub fn with_config(config: StoreConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("property-records/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client, config })
    }

    fn records_url(&self, entity: &str) -> String {
        format!("{}/tables/{}/records", self.config.base_url, entity)
    }

    fn query_url(&self, entity: &str) -> String {
        format!("{}/query", self.records_url(entity))
    }

    fn record_query_url(&self, entity: &str, id: RecordId) -> String {
        format!("{}/{}/query", self.records_url(entity), id)
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, StoreError> {
        let response = request
            .header(PROJECT_ID_HEADER, &self.config.project_id)
            .header(PUBLIC_KEY_HEADER, &self.config.public_key)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        debug!("Record store answered {} with {} bytes", status, body.len());

        if !status.is_success() {
            warn!("Record store returned status: {}", status);
            return Err(error_from_body(status.as_u16(), &body));
        }

        Ok(serde_json::from_str(&body)?)
    }
}

/// Turn an error response into a [`StoreError`], keeping the store's own
/// message when the body carries one at `message` or `data.message`.
fn error_from_body(status: u16, body: &str) -> StoreError {
    let message = serde_json::from_str::<Value>(body).ok().and_then(|value| {
        value
            .get("message")
            .or_else(|| value.get("data").and_then(|data| data.get("message")))
            .and_then(Value::as_str)
            .map(str::to_string)
    });

    match message {
        Some(message) => StoreError::Rejected { status, message },
        None => StoreError::Status(status),
    }
}

#[async_trait]
impl RecordStore for HttpRecordStore {
    async fn fetch_records(
        &self,
        entity: &str,
        params: &FetchParams,
    ) -> Result<Envelope<Vec<Value>>, StoreError> {
        let url = self.query_url(entity);
        debug!("Fetching records: {}", url);
        self.send(self.client.post(url).json(params)).await
    }

    async fn get_record_by_id(
        &self,
        entity: &str,
        id: RecordId,
        params: &FetchParams,
    ) -> Result<Envelope<Value>, StoreError> {
        let url = self.record_query_url(entity, id);
        debug!("Fetching record: {}", url);
        self.send(self.client.post(url).json(params)).await
    }

    async fn create_record(
        &self,
        entity: &str,
        params: &RecordsParams,
    ) -> Result<BatchEnvelope, StoreError> {
        let url = self.records_url(entity);
        debug!("Creating {} record(s): {}", params.records.len(), url);
        self.send(self.client.post(url).json(params)).await
    }

    async fn update_record(
        &self,
        entity: &str,
        params: &RecordsParams,
    ) -> Result<BatchEnvelope, StoreError> {
        let url = self.records_url(entity);
        debug!("Updating {} record(s): {}", params.records.len(), url);
        self.send(self.client.patch(url).json(params)).await
    }

    async fn delete_record(
        &self,
        entity: &str,
        params: &DeleteParams,
    ) -> Result<BatchEnvelope, StoreError> {
        let url = self.records_url(entity);
        debug!("Deleting records {:?}: {}", params.record_ids, url);
        self.send(self.client.delete(url).json(params)).await
    }

    fn store_name(&self) -> &'static str {
        "http"
    }
}
