//! Domain Value Objects
//!
//! Immutable value types for the places domain.

use kernel::id::{AmenityId, CityId, StateId};

/// Search criteria for places
///
/// Each dimension may be empty. Ids are not checked for existence here;
/// unknown ids resolve to nothing during search.
#[derive(Debug, Clone, Default)]
pub struct SearchFilter {
    pub states: Vec<StateId>,
    pub cities: Vec<CityId>,
    pub amenities: Vec<AmenityId>,
}

impl SearchFilter {
    pub fn new(states: Vec<StateId>, cities: Vec<CityId>, amenities: Vec<AmenityId>) -> Self {
        Self {
            states,
            cities,
            amenities,
        }
    }

    /// True when no dimension carries any id
    pub fn is_empty(&self) -> bool {
        self.states.is_empty() && self.cities.is_empty() && self.amenities.is_empty()
    }
}

/// Mutable place attributes
///
/// This is the complete allow-list of fields a client may change on an
/// existing place. Ownership (`city_id`, `user_id`), identity and
/// timestamps are not part of it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlacePatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub number_rooms: Option<u32>,
    pub number_bathrooms: Option<u32>,
    pub max_guest: Option<u32>,
    pub price_by_night: Option<u32>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// Result of linking an amenity to a place
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkOutcome {
    /// The link was created by this call
    Linked,
    /// The link already existed; nothing changed
    AlreadyLinked,
}
