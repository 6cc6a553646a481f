//! Places Router

use crate::domain::repository::{
    PlaceAmenityRepository, PlaceRepository, RelationshipGraph, UserRepository,
};
use crate::infra::memory::InMemoryPlacesRepository;
use crate::presentation::handlers::{self, PlacesAppState};
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

/// Create the places router with the in-memory repository
pub fn places_router(repo: InMemoryPlacesRepository) -> Router {
    places_router_generic(repo)
}

/// Create a generic places router for any repository implementation
pub fn places_router_generic<R>(repo: R) -> Router
where
    R: RelationshipGraph
        + PlaceRepository
        + PlaceAmenityRepository
        + UserRepository
        + Clone
        + Send
        + Sync
        + 'static,
{
    let state = PlacesAppState {
        repo: Arc::new(repo),
    };

    Router::new()
        .route("/places_search", post(handlers::search_places::<R>))
        .route(
            "/cities/{city_id}/places",
            get(handlers::list_city_places::<R>).post(handlers::create_place::<R>),
        )
        .route(
            "/places/{place_id}",
            get(handlers::get_place::<R>)
                .put(handlers::update_place::<R>)
                .delete(handlers::delete_place::<R>),
        )
        .route(
            "/places/{place_id}/amenities",
            get(handlers::list_place_amenities::<R>),
        )
        .route(
            "/places/{place_id}/amenities/{amenity_id}",
            post(handlers::link_place_amenity::<R>).delete(handlers::unlink_place_amenity::<R>),
        )
        .with_state(state)
}
