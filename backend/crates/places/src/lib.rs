//! Places Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, repository traits, search set algebra
//! - `application/` - Use cases (search, lookup, create, update, amenity links)
//! - `infra/` - In-memory storage and seed loading
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Search Model
//! - States and cities select places by union
//! - Amenities are unioned among themselves, then seed an empty selection
//!   or narrow a non-empty one by intersection
//! - Unknown ids never fail a search; they match nothing

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use error::{PlacesError, PlacesResult};
pub use infra::memory::InMemoryPlacesRepository;
pub use infra::seed::{SeedData, load_seed_file};
pub use presentation::handlers::not_found;
pub use presentation::router::{places_router, places_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod models {
    pub use crate::domain::entities::*;
    pub use crate::domain::value_objects::*;
    pub use crate::presentation::dto::*;
}
