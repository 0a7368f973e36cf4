pub mod error;
pub mod http;
pub mod traits;
pub mod types;

pub use error::StoreError;
pub use http::HttpRecordStore;
pub use traits::RecordStore;
pub use types::{
    BatchEnvelope, DeleteParams, Envelope, FetchParams, FieldError, OrderBy, RecordResult,
    RecordsParams, SortType,
};
