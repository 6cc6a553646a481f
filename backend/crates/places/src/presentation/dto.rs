//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use kernel::id::{AmenityId, CityId, Id, PlaceId, UserId};
use serde::de::IgnoredAny;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::application::CreatePlaceInput;
use crate::domain::entities::{Amenity, Place};
use crate::domain::value_objects::{PlacePatch, SearchFilter};
use crate::error::{PlacesError, PlacesResult};

// ============================================================================
// Search
// ============================================================================

/// Request for POST /places_search
///
/// Every key is optional; `null` is treated like an absent key. List
/// entries that are not strings cannot name an entity and are dropped.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub states: Option<Vec<Value>>,
    #[serde(default)]
    pub cities: Option<Vec<Value>>,
    #[serde(default)]
    pub amenities: Option<Vec<Value>>,
}

impl SearchRequest {
    /// Build from the request's JSON object; an empty object is not a query
    pub fn from_object(object: Map<String, Value>) -> PlacesResult<Self> {
        if object.is_empty() {
            return Err(PlacesError::NotJson);
        }
        Ok(serde_json::from_value(Value::Object(object))?)
    }
}

fn string_ids<T>(key: &str, values: Option<Vec<Value>>) -> Vec<Id<T>> {
    values
        .unwrap_or_default()
        .into_iter()
        .filter_map(|value| match value {
            Value::String(id) => Some(Id::from(id)),
            other => {
                tracing::debug!(key, value = %other, "Skipping non-string search id");
                None
            }
        })
        .collect()
}

impl From<SearchRequest> for SearchFilter {
    fn from(req: SearchRequest) -> Self {
        SearchFilter::new(
            string_ids("states", req.states),
            string_ids("cities", req.cities),
            string_ids("amenities", req.amenities),
        )
    }
}

// ============================================================================
// Create / Update
// ============================================================================

/// Request for POST /cities/{city_id}/places
///
/// Unknown keys are rejected. `id`, `city_id` and the timestamps are
/// accepted for client convenience and ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreatePlaceRequest {
    pub user_id: Option<UserId>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub number_rooms: Option<u32>,
    pub number_bathrooms: Option<u32>,
    pub max_guest: Option<u32>,
    pub price_by_night: Option<u32>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    #[serde(default, rename = "id")]
    _id: Option<IgnoredAny>,
    #[serde(default, rename = "city_id")]
    _city_id: Option<IgnoredAny>,
    #[serde(default, rename = "created_at")]
    _created_at: Option<IgnoredAny>,
    #[serde(default, rename = "updated_at")]
    _updated_at: Option<IgnoredAny>,
}

impl CreatePlaceRequest {
    pub fn into_input(self, city_id: CityId) -> CreatePlaceInput {
        CreatePlaceInput {
            city_id,
            user_id: self.user_id,
            name: self.name,
            attributes: PlacePatch {
                name: None,
                description: self.description,
                number_rooms: self.number_rooms,
                number_bathrooms: self.number_bathrooms,
                max_guest: self.max_guest,
                price_by_night: self.price_by_night,
                latitude: self.latitude,
                longitude: self.longitude,
            },
        }
    }
}

/// Request for PUT /places/{place_id}
///
/// Only the mutable place attributes can be changed. Unknown keys are
/// rejected; identity, ownership and timestamps are accepted and ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdatePlaceRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub number_rooms: Option<u32>,
    pub number_bathrooms: Option<u32>,
    pub max_guest: Option<u32>,
    pub price_by_night: Option<u32>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    #[serde(default, rename = "id")]
    _id: Option<IgnoredAny>,
    #[serde(default, rename = "user_id")]
    _user_id: Option<IgnoredAny>,
    #[serde(default, rename = "city_id")]
    _city_id: Option<IgnoredAny>,
    #[serde(default, rename = "created_at")]
    _created_at: Option<IgnoredAny>,
    #[serde(default, rename = "updated_at")]
    _updated_at: Option<IgnoredAny>,
}

impl From<UpdatePlaceRequest> for PlacePatch {
    fn from(req: UpdatePlaceRequest) -> Self {
        PlacePatch {
            name: req.name,
            description: req.description,
            number_rooms: req.number_rooms,
            number_bathrooms: req.number_bathrooms,
            max_guest: req.max_guest,
            price_by_night: req.price_by_night,
            latitude: req.latitude,
            longitude: req.longitude,
        }
    }
}

// ============================================================================
// Responses
// ============================================================================

/// Place as returned by every place endpoint
#[derive(Debug, Clone, Serialize)]
pub struct PlaceResponse {
    pub id: PlaceId,
    pub city_id: CityId,
    pub user_id: UserId,
    pub name: String,
    pub description: Option<String>,
    pub number_rooms: u32,
    pub number_bathrooms: u32,
    pub max_guest: u32,
    pub price_by_night: u32,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Place> for PlaceResponse {
    fn from(place: Place) -> Self {
        Self {
            id: place.id,
            city_id: place.city_id,
            user_id: place.user_id,
            name: place.name,
            description: place.description,
            number_rooms: place.number_rooms,
            number_bathrooms: place.number_bathrooms,
            max_guest: place.max_guest,
            price_by_night: place.price_by_night,
            latitude: place.latitude,
            longitude: place.longitude,
            created_at: place.created_at,
            updated_at: place.updated_at,
        }
    }
}

/// Amenity as returned by the place amenity endpoints
#[derive(Debug, Clone, Serialize)]
pub struct AmenityResponse {
    pub id: AmenityId,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Amenity> for AmenityResponse {
    fn from(amenity: Amenity) -> Self {
        Self {
            id: amenity.id,
            name: amenity.name,
            created_at: amenity.created_at,
            updated_at: amenity.updated_at,
        }
    }
}

/// `{}` body returned by deletions
#[derive(Debug, Clone, Default, Serialize)]
pub struct EmptyResponse {}
