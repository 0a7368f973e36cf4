//! Property listings stored as `property_c` records in a remote record store.
//!
//! [`adapter::PropertyRecordAdapter`] translates between [`models::Property`]
//! and the store's flat record shape and returns typed errors.
//! [`service::PropertyService`] wraps it for callers that want the
//! notify-and-fall-back behaviour instead.

pub mod adapter;
pub mod config;
pub mod models;
pub mod notify;
pub mod records;
pub mod service;
pub mod store;

pub use adapter::{AdapterError, PropertyRecordAdapter};
pub use models::{Address, Coordinates, Property, PropertyInput, RecordId};
pub use service::PropertyService;
pub use store::{HttpRecordStore, RecordStore};
