#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use property_records::models::{Address, Coordinates, PropertyInput, RecordId};
use property_records::store::{
    BatchEnvelope, DeleteParams, Envelope, FetchParams, RecordResult, RecordStore, RecordsParams,
    StoreError,
};
use serde_json::{json, Value};
use std::sync::Mutex;

/// Id the fake assigns to created records
pub const ASSIGNED_ID: i64 = 101;

/// A request the fake store received
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Fetch(String, FetchParams),
    Get(String, RecordId, FetchParams),
    Create(String, RecordsParams),
    Update(String, RecordsParams),
    Delete(String, DeleteParams),
}

type Reply<T> = Mutex<Option<Result<T, StoreError>>>;

/// In-memory record store with scripted replies.
///
/// Each scripted reply is used once. Without one, fetch returns no rows,
/// get finds nothing, create and update echo the submitted record and
/// delete succeeds.
#[derive(Default)]
pub struct FakeStore {
    fetch_reply: Reply<Envelope<Vec<Value>>>,
    get_reply: Reply<Envelope<Value>>,
    create_reply: Reply<BatchEnvelope>,
    update_reply: Reply<BatchEnvelope>,
    delete_reply: Reply<BatchEnvelope>,
    calls: Mutex<Vec<Call>>,
}

impl FakeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every operation answers `success: false` with `message`
    pub fn failing(message: &str) -> Self {
        Self::new()
            .on_fetch(Ok(Envelope::failed(message)))
            .on_get(Ok(Envelope::failed(message)))
            .on_create(Ok(BatchEnvelope::failed(message)))
            .on_update(Ok(BatchEnvelope::failed(message)))
            .on_delete(Ok(BatchEnvelope::failed(message)))
    }

    pub fn on_fetch(self, reply: Result<Envelope<Vec<Value>>, StoreError>) -> Self {
        *self.fetch_reply.lock().unwrap() = Some(reply);
        self
    }

    pub fn on_get(self, reply: Result<Envelope<Value>, StoreError>) -> Self {
        *self.get_reply.lock().unwrap() = Some(reply);
        self
    }

    pub fn on_create(self, reply: Result<BatchEnvelope, StoreError>) -> Self {
        *self.create_reply.lock().unwrap() = Some(reply);
        self
    }

    pub fn on_update(self, reply: Result<BatchEnvelope, StoreError>) -> Self {
        *self.update_reply.lock().unwrap() = Some(reply);
        self
    }

    pub fn on_delete(self, reply: Result<BatchEnvelope, StoreError>) -> Self {
        *self.delete_reply.lock().unwrap() = Some(reply);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

fn echo(params: &RecordsParams, id: Option<i64>) -> BatchEnvelope {
    let results = params
        .records
        .iter()
        .map(|record| {
            let mut record = record.clone();
            if let Some(id) = id {
                record.insert("Id".to_string(), json!(id));
            }
            RecordResult::ok(Value::Object(record))
        })
        .collect();
    BatchEnvelope::ok(results)
}

#[async_trait]
impl RecordStore for FakeStore {
    async fn fetch_records(
        &self,
        entity: &str,
        params: &FetchParams,
    ) -> Result<Envelope<Vec<Value>>, StoreError> {
        self.record(Call::Fetch(entity.to_string(), params.clone()));
        self.fetch_reply
            .lock()
            .unwrap()
            .take()
            .unwrap_or_else(|| Ok(Envelope::empty()))
    }

    async fn get_record_by_id(
        &self,
        entity: &str,
        id: RecordId,
        params: &FetchParams,
    ) -> Result<Envelope<Value>, StoreError> {
        self.record(Call::Get(entity.to_string(), id, params.clone()));
        self.get_reply
            .lock()
            .unwrap()
            .take()
            .unwrap_or_else(|| Ok(Envelope::empty()))
    }

    async fn create_record(
        &self,
        entity: &str,
        params: &RecordsParams,
    ) -> Result<BatchEnvelope, StoreError> {
        self.record(Call::Create(entity.to_string(), params.clone()));
        self.create_reply
            .lock()
            .unwrap()
            .take()
            .unwrap_or_else(|| Ok(echo(params, Some(ASSIGNED_ID))))
    }

    async fn update_record(
        &self,
        entity: &str,
        params: &RecordsParams,
    ) -> Result<BatchEnvelope, StoreError> {
        self.record(Call::Update(entity.to_string(), params.clone()));
        self.update_reply
            .lock()
            .unwrap()
            .take()
            .unwrap_or_else(|| Ok(echo(params, None)))
    }

    async fn delete_record(
        &self,
        entity: &str,
        params: &DeleteParams,
    ) -> Result<BatchEnvelope, StoreError> {
        self.record(Call::Delete(entity.to_string(), params.clone()));
        self.delete_reply.lock().unwrap().take().unwrap_or_else(|| {
            Ok(BatchEnvelope::ok(
                params
                    .record_ids
                    .iter()
                    .map(|_| RecordResult {
                        success: true,
                        data: None,
                        errors: None,
                        message: None,
                    })
                    .collect(),
            ))
        })
    }

    fn store_name(&self) -> &'static str {
        "fake"
    }
}

pub fn sample_input() -> PropertyInput {
    PropertyInput {
        title: "Craftsman Bungalow".to_string(),
        price: 689000.0,
        property_type: "House".to_string(),
        bedrooms: 3,
        bathrooms: 2,
        square_feet: 1840,
        address: Address {
            street: "1208 Alder Ave".to_string(),
            city: "Portland".to_string(),
            state: "OR".to_string(),
            zip_code: "97214".to_string(),
        },
        images: vec![
            "https://images.example/alder/front.jpg".to_string(),
            "https://images.example/alder/kitchen.jpg".to_string(),
        ],
        description: "Restored bungalow close to the park.".to_string(),
        features: vec!["Fireplace".to_string(), "Garden".to_string()],
        year_built: 1924,
        listing_date: Utc.with_ymd_and_hms(2024, 4, 9, 15, 30, 0).unwrap(),
        coordinates: Coordinates {
            lat: 45.52,
            lng: -122.65,
        },
    }
}

/// A stored record with the given id, title and listing date
pub fn stored_row(id: i64, title: &str, listing_date: &str) -> Value {
    json!({
        "Id": id,
        "title_c": title,
        "price_c": 350000,
        "type_c": "Condo",
        "bedrooms_c": 2,
        "bathrooms_c": 1,
        "square_feet_c": 980,
        "address_street_c": "55 Pine St",
        "address_city_c": "Seattle",
        "address_state_c": "WA",
        "address_zip_code_c": "98101",
        "images_c": "https://images.example/a.jpg\nhttps://images.example/b.jpg",
        "description_c": "Bright corner unit",
        "features_c": "Balcony, Parking",
        "year_built_c": 2008,
        "listing_date_c": listing_date,
        "coordinates_lat_c": 47.61,
        "coordinates_lng_c": -122.33
    })
}
