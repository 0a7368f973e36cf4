pub mod codec;

use crate::models::{Address, Coordinates, Property, PropertyInput, RecordId};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Entity name of property records in the store
pub const PROPERTY_ENTITY: &str = "property_c";

/// Columns requested on every fetch
pub const PROPERTY_FIELDS: [&str; 18] = [
    "Id",
    "title_c",
    "price_c",
    "type_c",
    "bedrooms_c",
    "bathrooms_c",
    "square_feet_c",
    "address_street_c",
    "address_city_c",
    "address_state_c",
    "address_zip_code_c",
    "images_c",
    "description_c",
    "features_c",
    "year_built_c",
    "listing_date_c",
    "coordinates_lat_c",
    "coordinates_lng_c",
];

/// Column used to order listings
pub const LISTING_DATE_FIELD: &str = "listing_date_c";

/// A property as the store keeps it: flat, `_c` suffixed, list columns as text.
///
/// Every column is optional and tolerant of odd value shapes, so partially
/// filled records still decode.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PropertyRecord {
    #[serde(rename = "Id", default, deserialize_with = "codec::lenient_int", skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "codec::lenient_text", skip_serializing_if = "Option::is_none")]
    pub title_c: Option<String>,
    #[serde(default, deserialize_with = "codec::lenient_float", skip_serializing_if = "Option::is_none")]
    pub price_c: Option<f64>,
    #[serde(default, deserialize_with = "codec::lenient_text", skip_serializing_if = "Option::is_none")]
    pub type_c: Option<String>,
    #[serde(default, deserialize_with = "codec::lenient_int", skip_serializing_if = "Option::is_none")]
    pub bedrooms_c: Option<i64>,
    #[serde(default, deserialize_with = "codec::lenient_int", skip_serializing_if = "Option::is_none")]
    pub bathrooms_c: Option<i64>,
    #[serde(default, deserialize_with = "codec::lenient_int", skip_serializing_if = "Option::is_none")]
    pub square_feet_c: Option<i64>,
    #[serde(default, deserialize_with = "codec::lenient_text", skip_serializing_if = "Option::is_none")]
    pub address_street_c: Option<String>,
    #[serde(default, deserialize_with = "codec::lenient_text", skip_serializing_if = "Option::is_none")]
    pub address_city_c: Option<String>,
    #[serde(default, deserialize_with = "codec::lenient_text", skip_serializing_if = "Option::is_none")]
    pub address_state_c: Option<String>,
    #[serde(default, deserialize_with = "codec::lenient_text", skip_serializing_if = "Option::is_none")]
    pub address_zip_code_c: Option<String>,
    #[serde(default, deserialize_with = "codec::lenient_text", skip_serializing_if = "Option::is_none")]
    pub images_c: Option<String>,
    #[serde(default, deserialize_with = "codec::lenient_text", skip_serializing_if = "Option::is_none")]
    pub description_c: Option<String>,
    #[serde(default, deserialize_with = "codec::lenient_text", skip_serializing_if = "Option::is_none")]
    pub features_c: Option<String>,
    #[serde(default, deserialize_with = "codec::lenient_int", skip_serializing_if = "Option::is_none")]
    pub year_built_c: Option<i64>,
    #[serde(default, deserialize_with = "codec::lenient_text", skip_serializing_if = "Option::is_none")]
    pub listing_date_c: Option<String>,
    #[serde(default, deserialize_with = "codec::lenient_float", skip_serializing_if = "Option::is_none")]
    pub coordinates_lat_c: Option<f64>,
    #[serde(default, deserialize_with = "codec::lenient_float", skip_serializing_if = "Option::is_none")]
    pub coordinates_lng_c: Option<f64>,
}

impl PropertyRecord {
    /// Record for a create request. Carries no `Id`.
    pub fn for_create(input: &PropertyInput) -> Self {
        encode(input)
    }

    /// Record for an update request, keyed by `id`
    pub fn for_update(id: RecordId, input: &PropertyInput) -> Self {
        Self {
            id: Some(id.get()),
            ..encode(input)
        }
    }

    /// JSON object to place in a `records` batch
    pub fn into_fields(self) -> Result<Map<String, Value>, serde_json::Error> {
        match serde_json::to_value(self)? {
            Value::Object(map) => Ok(map),
            other => Err(serde::de::Error::custom(format!(
                "property record serialized to {other}"
            ))),
        }
    }
}

/// Flatten UI fields into the storage shape
pub fn encode(input: &PropertyInput) -> PropertyRecord {
    PropertyRecord {
        id: None,
        title_c: Some(input.title.clone()),
        price_c: Some(input.price),
        type_c: Some(input.property_type.clone()),
        bedrooms_c: Some(input.bedrooms),
        bathrooms_c: Some(input.bathrooms),
        square_feet_c: Some(input.square_feet),
        address_street_c: Some(input.address.street.clone()),
        address_city_c: Some(input.address.city.clone()),
        address_state_c: Some(input.address.state.clone()),
        address_zip_code_c: Some(input.address.zip_code.clone()),
        images_c: Some(codec::encode_images(&input.images)),
        description_c: Some(input.description.clone()),
        features_c: Some(codec::encode_features(&input.features)),
        year_built_c: Some(input.year_built),
        listing_date_c: Some(codec::encode_listing_date(&input.listing_date)),
        coordinates_lat_c: Some(input.coordinates.lat),
        coordinates_lng_c: Some(input.coordinates.lng),
    }
}

/// Rebuild the UI shape. Missing columns become zero values.
pub fn decode(record: PropertyRecord) -> Property {
    Property {
        id: record.id.unwrap_or_default(),
        title: record.title_c.unwrap_or_default(),
        price: record.price_c.unwrap_or_default(),
        property_type: record.type_c.unwrap_or_default(),
        bedrooms: record.bedrooms_c.unwrap_or_default(),
        bathrooms: record.bathrooms_c.unwrap_or_default(),
        square_feet: record.square_feet_c.unwrap_or_default(),
        address: Address {
            street: record.address_street_c.unwrap_or_default(),
            city: record.address_city_c.unwrap_or_default(),
            state: record.address_state_c.unwrap_or_default(),
            zip_code: record.address_zip_code_c.unwrap_or_default(),
        },
        images: record
            .images_c
            .as_deref()
            .map(codec::decode_images)
            .unwrap_or_default(),
        description: record.description_c.unwrap_or_default(),
        features: record
            .features_c
            .as_deref()
            .map(codec::decode_features)
            .unwrap_or_default(),
        year_built: record.year_built_c.unwrap_or_default(),
        listing_date: codec::decode_listing_date(record.listing_date_c.as_deref()),
        coordinates: Coordinates {
            lat: record.coordinates_lat_c.unwrap_or_default(),
            lng: record.coordinates_lng_c.unwrap_or_default(),
        },
    }
}

/// Decode a raw record as returned by the store
pub fn decode_value(value: Value) -> Result<Property, serde_json::Error> {
    let record: PropertyRecord = serde_json::from_value(value)?;
    Ok(decode(record))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn sample_input() -> PropertyInput {
        PropertyInput {
            title: "Modern Downtown Loft".to_string(),
            price: 525000.0,
            property_type: "Condo".to_string(),
            bedrooms: 2,
            bathrooms: 2,
            square_feet: 1250,
            address: Address {
                street: "742 Evergreen Terrace".to_string(),
                city: "Springfield".to_string(),
                state: "IL".to_string(),
                zip_code: "62704".to_string(),
            },
            images: vec![
                "https://images.example/1.jpg".to_string(),
                "https://images.example/2.jpg".to_string(),
            ],
            description: "Open plan with city views.".to_string(),
            features: vec!["Rooftop Deck".to_string(), "Gym".to_string()],
            year_built: 2016,
            listing_date: Utc.with_ymd_and_hms(2024, 2, 14, 10, 0, 0).unwrap(),
            coordinates: Coordinates {
                lat: 39.78,
                lng: -89.65,
            },
        }
    }

    #[test]
    fn encode_uses_suffixed_columns() {
        let fields = PropertyRecord::for_create(&sample_input()).into_fields().unwrap();

        assert!(!fields.contains_key("Id"));
        assert_eq!(fields["title_c"], "Modern Downtown Loft");
        assert_eq!(fields["square_feet_c"], 1250);
        assert_eq!(fields["address_zip_code_c"], "62704");
        assert_eq!(
            fields["images_c"],
            "https://images.example/1.jpg\nhttps://images.example/2.jpg"
        );
        assert_eq!(fields["features_c"], "Rooftop Deck,Gym");
        assert_eq!(fields["listing_date_c"], "2024-02-14T10:00:00Z");
        assert_eq!(fields["coordinates_lng_c"], -89.65);
    }

    #[test]
    fn update_record_carries_the_id() {
        let fields = PropertyRecord::for_update(RecordId::new(42), &sample_input())
            .into_fields()
            .unwrap();
        assert_eq!(fields["Id"], 42);
    }

    #[test]
    fn decode_inverts_encode() {
        let input = sample_input();
        let record = PropertyRecord {
            id: Some(9),
            ..encode(&input)
        };
        assert_eq!(decode(record), input.with_id(9));
    }

    #[test]
    fn empty_lists_survive_the_round_trip() {
        let input = PropertyInput {
            images: vec![],
            features: vec![],
            ..sample_input()
        };
        let record = encode(&input);
        assert_eq!(record.images_c.as_deref(), Some(""));
        assert_eq!(record.features_c.as_deref(), Some(""));

        let property = decode(record);
        assert!(property.images.is_empty());
        assert!(property.features.is_empty());
    }

    #[test]
    fn decode_fills_zero_values() {
        let before = Utc::now();
        let property = decode_value(json!({ "Id": 5, "title_c": null })).unwrap();

        assert_eq!(property.id, 5);
        assert_eq!(property.title, "");
        assert_eq!(property.price, 0.0);
        assert_eq!(property.bedrooms, 0);
        assert_eq!(property.address, Address::default());
        assert!(property.images.is_empty());
        assert!(property.features.is_empty());
        assert_eq!(property.coordinates, Coordinates::default());
        assert!(property.listing_date >= before);
    }

    #[test]
    fn decode_tolerates_loose_numbers() {
        let property = decode_value(json!({
            "Id": 3.0,
            "bedrooms_c": 4.0,
            "address_zip_code_c": 10001,
            "price_c": 799000
        }))
        .unwrap();

        assert_eq!(property.id, 3);
        assert_eq!(property.bedrooms, 4);
        assert_eq!(property.address.zip_code, "10001");
        assert_eq!(property.price, 799000.0);
    }

    #[test]
    fn odd_columns_zero_only_that_field() {
        let property = decode_value(json!({
            "Id": 8,
            "title_c": "Harbor View",
            "price_c": "450000",
            "bedrooms_c": "four",
            "coordinates_lat_c": { "deg": 47 }
        }))
        .unwrap();

        assert_eq!(property.id, 8);
        assert_eq!(property.title, "Harbor View");
        assert_eq!(property.price, 450000.0);
        assert_eq!(property.bedrooms, 0);
        assert_eq!(property.coordinates.lat, 0.0);
    }

    #[test]
    fn decode_rejects_values_that_are_not_records() {
        assert!(decode_value(json!("not a record")).is_err());
        assert!(decode_value(json!(42)).is_err());
    }

    #[test]
    fn padded_image_urls_round_trip() {
        let input = PropertyInput {
            images: vec![" https://images.example/1.jpg".to_string()],
            ..sample_input()
        };
        assert_eq!(decode(encode(&input)).images, input.images);
    }

    #[test]
    fn field_list_starts_with_primary_key() {
        assert_eq!(PROPERTY_FIELDS[0], "Id");
        assert!(PROPERTY_FIELDS.contains(&LISTING_DATE_FIELD));
        assert!(PROPERTY_FIELDS.iter().skip(1).all(|f| f.ends_with("_c")));
    }
}
