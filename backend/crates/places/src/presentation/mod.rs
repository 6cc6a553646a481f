//! Presentation Layer
//!
//! HTTP handlers, DTOs, extractors and router.

pub mod dto;
pub mod extract;
pub mod handlers;
pub mod router;

pub use handlers::PlacesAppState;
pub use router::{places_router, places_router_generic};
