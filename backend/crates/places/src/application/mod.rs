//! Application Layer - Use Cases
//!
//! This layer orchestrates domain logic and the repositories.

pub mod create_place;
pub mod place_amenities;
pub mod place_lookup;
pub mod search_places;
pub mod update_place;

// Re-exports
pub use create_place::{CreatePlaceInput, CreatePlaceUseCase};
pub use place_amenities::PlaceAmenitiesUseCase;
pub use place_lookup::PlaceLookupUseCase;
pub use search_places::SearchPlacesUseCase;
pub use update_place::UpdatePlaceUseCase;
