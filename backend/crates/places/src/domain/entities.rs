//! Domain Entities
//!
//! Core entities of the places domain. Only places are created and
//! modified through the API; the other entities are read-only here.

use chrono::{DateTime, Utc};
use kernel::id::{AmenityId, CityId, PlaceId, StateId, UserId};

use crate::domain::value_objects::PlacePatch;

/// State entity - owns zero or more cities
#[derive(Debug, Clone)]
pub struct State {
    pub id: StateId,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// City entity - belongs to exactly one state
#[derive(Debug, Clone)]
pub struct City {
    pub id: CityId,
    /// Back-reference to the owning state
    pub state_id: StateId,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Amenity entity - linked to places through a many-to-many relation
#[derive(Debug, Clone)]
pub struct Amenity {
    pub id: AmenityId,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// User entity - owner of places
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub email: String,
    /// Never serialized
    pub password: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Place entity - a rentable listing owned by a city
#[derive(Debug, Clone)]
pub struct Place {
    pub id: PlaceId,
    /// Back-reference to the owning city
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

impl Place {
    /// Create a new place with a fresh id and zeroed numeric attributes
    pub fn new(city_id: CityId, user_id: UserId, name: String) -> Self {
        let now = Utc::now();
        Self {
            id: PlaceId::new(),
            city_id,
            user_id,
            name,
            description: None,
            number_rooms: 0,
            number_bathrooms: 0,
            max_guest: 0,
            price_by_night: 0,
            latitude: None,
            longitude: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply the mutable fields present in `patch` and bump `updated_at`
    pub fn apply(&mut self, patch: PlacePatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = Some(description);
        }
        if let Some(number_rooms) = patch.number_rooms {
            self.number_rooms = number_rooms;
        }
        if let Some(number_bathrooms) = patch.number_bathrooms {
            self.number_bathrooms = number_bathrooms;
        }
        if let Some(max_guest) = patch.max_guest {
            self.max_guest = max_guest;
        }
        if let Some(price_by_night) = patch.price_by_night {
            self.price_by_night = price_by_night;
        }
        if let Some(latitude) = patch.latitude {
            self.latitude = Some(latitude);
        }
        if let Some(longitude) = patch.longitude {
            self.longitude = Some(longitude);
        }
        self.updated_at = Utc::now();
    }
}
