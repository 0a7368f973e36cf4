pub mod record_id;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use record_id::{InvalidRecordId, RecordId, ToRecordId};

/// Postal address of a property
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

/// Map position of a property
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// Core property data model, as shown to the UI
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: i64,
    pub title: String,
    pub price: f64,
    #[serde(rename = "type")]
    pub property_type: String,
    pub bedrooms: i64,
    pub bathrooms: i64,
    pub square_feet: i64,
    pub address: Address,
    /// Image URLs in display order
    pub images: Vec<String>,
    pub description: String,
    pub features: Vec<String>,
    pub year_built: i64,
    pub listing_date: DateTime<Utc>,
    pub coordinates: Coordinates,
}

/// Property fields as submitted for create and update.
///
/// The store assigns the id, so it is not part of the input.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PropertyInput {
    pub title: String,
    pub price: f64,
    #[serde(rename = "type")]
    pub property_type: String,
    pub bedrooms: i64,
    pub bathrooms: i64,
    pub square_feet: i64,
    #[serde(default)]
    pub address: Address,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub features: Vec<String>,
    pub year_built: i64,
    pub listing_date: DateTime<Utc>,
    #[serde(default)]
    pub coordinates: Coordinates,
}

impl From<Property> for PropertyInput {
    fn from(property: Property) -> Self {
        Self {
            title: property.title,
            price: property.price,
            property_type: property.property_type,
            bedrooms: property.bedrooms,
            bathrooms: property.bathrooms,
            square_feet: property.square_feet,
            address: property.address,
            images: property.images,
            description: property.description,
            features: property.features,
            year_built: property.year_built,
            listing_date: property.listing_date,
            coordinates: property.coordinates,
        }
    }
}

impl PropertyInput {
    /// Attach a store-assigned id
    pub fn with_id(self, id: i64) -> Property {
        Property {
            id,
            title: self.title,
            price: self.price,
            property_type: self.property_type,
            bedrooms: self.bedrooms,
            bathrooms: self.bathrooms,
            square_feet: self.square_feet,
            address: self.address,
            images: self.images,
            description: self.description,
            features: self.features,
            year_built: self.year_built,
            listing_date: self.listing_date,
            coordinates: self.coordinates,
        }
    }
}
