//! Seed Data
//!
//! JSON document used to populate the in-memory store at startup.
//! Every section is optional; timestamps default to the load time.

use crate::domain::entities::{Amenity, City, Place, State, User};
use crate::error::{PlacesError, PlacesResult};
use chrono::{DateTime, Utc};
use kernel::id::{AmenityId, CityId, PlaceId, StateId, UserId};
use serde::Deserialize;
use std::path::Path;

/// Whole seed document
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeedData {
    #[serde(default)]
    pub states: Vec<StateRecord>,
    #[serde(default)]
    pub cities: Vec<CityRecord>,
    #[serde(default)]
    pub amenities: Vec<AmenityRecord>,
    #[serde(default)]
    pub users: Vec<UserRecord>,
    #[serde(default)]
    pub places: Vec<PlaceRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StateRecord {
    pub id: StateId,
    pub name: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CityRecord {
    pub id: CityId,
    pub state_id: StateId,
    pub name: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AmenityRecord {
    pub id: AmenityId,
    pub name: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserRecord {
    pub id: UserId,
    #[serde(default)]
    pub email: String,
    pub password: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaceRecord {
    pub id: PlaceId,
    pub city_id: CityId,
    pub user_id: UserId,
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub number_rooms: u32,
    #[serde(default)]
    pub number_bathrooms: u32,
    #[serde(default)]
    pub max_guest: u32,
    #[serde(default)]
    pub price_by_night: u32,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    #[serde(default)]
    pub amenity_ids: Vec<AmenityId>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl SeedData {
    /// Parse a seed document
    pub fn parse(json: &str) -> PlacesResult<Self> {
        serde_json::from_str(json).map_err(|e| PlacesError::Seed(e.to_string()))
    }
}

/// Read and parse a seed document from disk
pub async fn load_seed_file(path: &Path) -> PlacesResult<SeedData> {
    let json = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| PlacesError::Seed(format!("{}: {}", path.display(), e)))?;

    let seed = SeedData::parse(&json)?;

    tracing::info!(
        path = %path.display(),
        states = seed.states.len(),
        cities = seed.cities.len(),
        amenities = seed.amenities.len(),
        users = seed.users.len(),
        places = seed.places.len(),
        "Seed data loaded"
    );

    Ok(seed)
}

/// Resolve optional record timestamps: missing `created_at` is `now`,
/// missing `updated_at` follows `created_at`
fn timestamps(
    created_at: Option<DateTime<Utc>>,
    updated_at: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> (DateTime<Utc>, DateTime<Utc>) {
    let created_at = created_at.unwrap_or(now);
    (created_at, updated_at.unwrap_or(created_at))
}

impl StateRecord {
    pub fn into_entity(self, now: DateTime<Utc>) -> State {
        let (created_at, updated_at) = timestamps(self.created_at, self.updated_at, now);
        State {
            id: self.id,
            name: self.name,
            created_at,
            updated_at,
        }
    }
}

impl CityRecord {
    pub fn into_entity(self, now: DateTime<Utc>) -> City {
        let (created_at, updated_at) = timestamps(self.created_at, self.updated_at, now);
        City {
            id: self.id,
            state_id: self.state_id,
            name: self.name,
            created_at,
            updated_at,
        }
    }
}

impl AmenityRecord {
    pub fn into_entity(self, now: DateTime<Utc>) -> Amenity {
        let (created_at, updated_at) = timestamps(self.created_at, self.updated_at, now);
        Amenity {
            id: self.id,
            name: self.name,
            created_at,
            updated_at,
        }
    }
}

impl UserRecord {
    pub fn into_entity(self, now: DateTime<Utc>) -> User {
        let (created_at, updated_at) = timestamps(self.created_at, self.updated_at, now);
        User {
            id: self.id,
            email: self.email,
            password: self.password,
            first_name: self.first_name,
            last_name: self.last_name,
            created_at,
            updated_at,
        }
    }
}

impl PlaceRecord {
    /// Split into the place entity and its amenity links
    pub fn into_entity(self, now: DateTime<Utc>) -> (Place, Vec<AmenityId>) {
        let (created_at, updated_at) = timestamps(self.created_at, self.updated_at, now);
        let place = Place {
            id: self.id,
            city_id: self.city_id,
            user_id: self.user_id,
            name: self.name,
            description: self.description,
            number_rooms: self.number_rooms,
            number_bathrooms: self.number_bathrooms,
            max_guest: self.max_guest,
            price_by_night: self.price_by_night,
            latitude: self.latitude,
            longitude: self.longitude,
            created_at,
            updated_at,
        };
        (place, self.amenity_ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_sections_are_optional() {
        let seed = SeedData::parse("{}").unwrap();
        assert!(seed.states.is_empty());
        assert!(seed.places.is_empty());
    }

    #[test]
    fn test_place_defaults() {
        let seed = SeedData::parse(
            r#"{"places": [{"id": "p", "city_id": "c", "user_id": "u", "name": "Loft"}]}"#,
        )
        .unwrap();
        let now = Utc::now();
        let (place, amenities) = seed.places[0].clone().into_entity(now);
        assert_eq!(place.number_rooms, 0);
        assert_eq!(place.price_by_night, 0);
        assert!(place.latitude.is_none());
        assert_eq!(place.created_at, now);
        assert_eq!(place.updated_at, now);
        assert!(amenities.is_empty());
    }

    #[test]
    fn test_explicit_created_at_drives_updated_at() {
        let seed = SeedData::parse(
            r#"{"states": [{"id": "CA", "name": "California", "created_at": "2017-03-25T19:42:40Z"}]}"#,
        )
        .unwrap();
        let state = seed.states[0].clone().into_entity(Utc::now());
        assert_eq!(state.created_at.to_rfc3339(), "2017-03-25T19:42:40+00:00");
        assert_eq!(state.updated_at, state.created_at);
    }

    #[test]
    fn test_malformed_document_is_a_seed_error() {
        let err = SeedData::parse(r#"{"states": 3}"#).unwrap_err();
        assert!(matches!(err, PlacesError::Seed(_)));

        let err = SeedData::parse(r#"{"reviews": []}"#).unwrap_err();
        assert!(matches!(err, PlacesError::Seed(_)));
    }

    #[tokio::test]
    async fn test_load_seed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"amenities": [{{"id": "wifi", "name": "Wifi"}}]}}"#).unwrap();

        let seed = load_seed_file(file.path()).await.unwrap();
        assert_eq!(seed.amenities.len(), 1);
        assert_eq!(seed.amenities[0].id.as_str(), "wifi");
    }

    #[tokio::test]
    async fn test_missing_seed_file() {
        let err = load_seed_file(Path::new("/nonexistent/seed.json"))
            .await
            .unwrap_err();
        assert!(matches!(err, PlacesError::Seed(_)));
    }
}
