//! Repository Traits
//!
//! Interfaces for data access. Implementation is in infrastructure layer.

use crate::domain::entities::{Amenity, City, Place, State, User};
use crate::domain::value_objects::LinkOutcome;
use crate::error::PlacesResult;
use kernel::id::{AmenityId, CityId, PlaceId, StateId, UserId};

/// Read-only view of the state → city → place graph and of the
/// place ↔ amenity relation
#[trait_variant::make(RelationshipGraph: Send)]
pub trait LocalRelationshipGraph {
    async fn get_state(&self, state_id: &StateId) -> PlacesResult<Option<State>>;

    async fn get_city(&self, city_id: &CityId) -> PlacesResult<Option<City>>;

    async fn get_amenity(&self, amenity_id: &AmenityId) -> PlacesResult<Option<Amenity>>;

    async fn get_place(&self, place_id: &PlaceId) -> PlacesResult<Option<Place>>;

    /// Ids of the cities owned by a state
    async fn city_ids_of_state(&self, state_id: &StateId) -> PlacesResult<Vec<CityId>>;

    /// Ids of the places owned by a city
    async fn place_ids_of_city(&self, city_id: &CityId) -> PlacesResult<Vec<PlaceId>>;

    /// Ids of the places linked to an amenity
    async fn place_ids_of_amenity(&self, amenity_id: &AmenityId) -> PlacesResult<Vec<PlaceId>>;

    /// Ids of every place known to storage
    async fn all_place_ids(&self) -> PlacesResult<Vec<PlaceId>>;
}

/// Place persistence
#[trait_variant::make(PlaceRepository: Send)]
pub trait LocalPlaceRepository {
    /// Store a new place
    async fn create(&self, place: &Place) -> PlacesResult<()>;

    /// Replace an existing place; returns false if it does not exist
    async fn update(&self, place: &Place) -> PlacesResult<bool>;

    /// Delete a place and its amenity links; returns false if it does not exist
    async fn delete(&self, place_id: &PlaceId) -> PlacesResult<bool>;

    /// Places owned by a city, ordered by id
    async fn find_by_city(&self, city_id: &CityId) -> PlacesResult<Vec<Place>>;
}

/// Place ↔ amenity link persistence
#[trait_variant::make(PlaceAmenityRepository: Send)]
pub trait LocalPlaceAmenityRepository {
    /// Amenities linked to a place, ordered by id
    async fn amenities_of_place(&self, place_id: &PlaceId) -> PlacesResult<Vec<Amenity>>;

    /// Link an amenity to a place; fails if either side does not exist
    async fn link(&self, place_id: &PlaceId, amenity_id: &AmenityId) -> PlacesResult<LinkOutcome>;

    /// Remove a link; returns false if the pair was not linked
    async fn unlink(&self, place_id: &PlaceId, amenity_id: &AmenityId) -> PlacesResult<bool>;
}

/// User lookup
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    async fn find_by_id(&self, user_id: &UserId) -> PlacesResult<Option<User>>;
}
