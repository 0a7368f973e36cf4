use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Column reference in the store's request format: `{"field":{"Name":"title_c"}}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FieldSelector {
    pub field: FieldName,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FieldName {
    #[serde(rename = "Name")]
    pub name: String,
}

impl FieldSelector {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            field: FieldName { name: name.into() },
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortType {
    Asc,
    Desc,
}

/// Sort clause for a fetch
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderBy {
    #[serde(rename = "fieldName")]
    pub field_name: String,
    pub sorttype: SortType,
}

impl OrderBy {
    pub fn descending(field_name: impl Into<String>) -> Self {
        Self {
            field_name: field_name.into(),
            sorttype: SortType::Desc,
        }
    }
}

/// Parameters for `fetchRecords` and `getRecordById`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FetchParams {
    pub fields: Vec<FieldSelector>,
    #[serde(rename = "orderBy", default, skip_serializing_if = "Vec::is_empty")]
    pub order_by: Vec<OrderBy>,
}

impl FetchParams {
    pub fn with_fields<'a>(names: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            fields: names.into_iter().map(FieldSelector::new).collect(),
            order_by: Vec::new(),
        }
    }

    pub fn order_by(mut self, order: OrderBy) -> Self {
        self.order_by.push(order);
        self
    }
}

/// Body of create and update requests
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RecordsParams {
    pub records: Vec<Map<String, Value>>,
}

/// Body of delete requests
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DeleteParams {
    #[serde(rename = "RecordIds")]
    pub record_ids: Vec<i64>,
}

/// Response envelope of fetch and get-by-id
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Envelope<T> {
    pub success: bool,
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}

impl<T> Envelope<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }

    pub fn empty() -> Self {
        Self {
            success: true,
            data: None,
            message: None,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
        }
    }
}

/// Field-level validation error on a batch sub-record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FieldError {
    #[serde(rename = "fieldLabel")]
    pub field_label: String,
    pub message: String,
}

/// Outcome of one record in a create, update or delete batch
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecordResult {
    pub success: bool,
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default)]
    pub errors: Option<Vec<FieldError>>,
    #[serde(default)]
    pub message: Option<String>,
}

impl RecordResult {
    pub fn ok(data: Value) -> Self {
        Self {
            success: true,
            data: Some(data),
            errors: None,
            message: None,
        }
    }

    pub fn failed(errors: Vec<FieldError>, message: Option<String>) -> Self {
        Self {
            success: false,
            data: None,
            errors: Some(errors),
            message,
        }
    }
}

/// Response envelope of create, update and delete
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BatchEnvelope {
    pub success: bool,
    #[serde(default)]
    pub results: Option<Vec<RecordResult>>,
    #[serde(default)]
    pub message: Option<String>,
}

impl BatchEnvelope {
    pub fn ok(results: Vec<RecordResult>) -> Self {
        Self {
            success: true,
            results: Some(results),
            message: None,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            results: None,
            message: Some(message.into()),
        }
    }
}
