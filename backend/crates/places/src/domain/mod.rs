//! Domain Layer - Business logic and entities
//!
//! This layer contains:
//! - Domain entities (State, City, Amenity, User, Place)
//! - Domain value objects (SearchFilter, PlacePatch, LinkOutcome)
//! - Domain services (search set algebra)
//! - Repository traits (interfaces)

pub mod entities;
pub mod repository;
pub mod services;
pub mod value_objects;

// Re-exports
pub use entities::{Amenity, City, Place, State, User};
pub use repository::{PlaceAmenityRepository, PlaceRepository, RelationshipGraph, UserRepository};
