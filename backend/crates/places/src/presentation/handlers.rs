//! HTTP Handlers

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use kernel::error::app_error::AppError;
use kernel::id::{AmenityId, CityId, PlaceId};
use serde_json::{Map, Value};
use std::sync::Arc;

use crate::application::{
    CreatePlaceUseCase, PlaceAmenitiesUseCase, PlaceLookupUseCase, SearchPlacesUseCase,
    UpdatePlaceUseCase,
};
use crate::domain::repository::{
    PlaceAmenityRepository, PlaceRepository, RelationshipGraph, UserRepository,
};
use crate::domain::value_objects::{LinkOutcome, PlacePatch, SearchFilter};
use crate::error::{PlacesError, PlacesResult};
use crate::presentation::dto::{
    AmenityResponse, CreatePlaceRequest, EmptyResponse, PlaceResponse, SearchRequest,
    UpdatePlaceRequest,
};
use crate::presentation::extract::JsonBody;

/// Shared state for places handlers
#[derive(Clone)]
pub struct PlacesAppState<R>
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
    pub repo: Arc<R>,
}

// ============================================================================
// Search
// ============================================================================

/// POST /places_search
pub async fn search_places<R>(
    State(state): State<PlacesAppState<R>>,
    JsonBody(body): JsonBody<Map<String, Value>>,
) -> PlacesResult<Json<Vec<PlaceResponse>>>
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
    let use_case = SearchPlacesUseCase::new(state.repo.clone());

    let filter = SearchFilter::from(SearchRequest::from_object(body)?);
    let places = use_case.execute(&filter).await?;

    Ok(Json(places.into_iter().map(PlaceResponse::from).collect()))
}

// ============================================================================
// Places
// ============================================================================

/// GET /cities/{city_id}/places
pub async fn list_city_places<R>(
    State(state): State<PlacesAppState<R>>,
    Path(city_id): Path<CityId>,
) -> PlacesResult<Json<Vec<PlaceResponse>>>
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
    let use_case = PlaceLookupUseCase::new(state.repo.clone(), state.repo.clone());

    let places = use_case.list_by_city(&city_id).await?;

    Ok(Json(places.into_iter().map(PlaceResponse::from).collect()))
}

/// GET /places/{place_id}
pub async fn get_place<R>(
    State(state): State<PlacesAppState<R>>,
    Path(place_id): Path<PlaceId>,
) -> PlacesResult<Json<PlaceResponse>>
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
    let use_case = PlaceLookupUseCase::new(state.repo.clone(), state.repo.clone());

    let place = use_case.get(&place_id).await?;

    Ok(Json(place.into()))
}

/// DELETE /places/{place_id}
pub async fn delete_place<R>(
    State(state): State<PlacesAppState<R>>,
    Path(place_id): Path<PlaceId>,
) -> PlacesResult<Json<EmptyResponse>>
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
    let use_case = PlaceLookupUseCase::new(state.repo.clone(), state.repo.clone());

    use_case.delete(&place_id).await?;

    Ok(Json(EmptyResponse::default()))
}

/// POST /cities/{city_id}/places
///
/// The city is checked before the body so an unknown city is a 404 even
/// when the body is not JSON.
pub async fn create_place<R>(
    State(state): State<PlacesAppState<R>>,
    Path(city_id): Path<CityId>,
    body: Result<JsonBody<CreatePlaceRequest>, PlacesError>,
) -> PlacesResult<impl IntoResponse>
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
    let use_case =
        CreatePlaceUseCase::new(state.repo.clone(), state.repo.clone(), state.repo.clone());

    use_case.ensure_city(&city_id).await?;
    let JsonBody(req) = body?;

    let place = use_case.execute(req.into_input(city_id)).await?;

    Ok((StatusCode::CREATED, Json(PlaceResponse::from(place))))
}

/// PUT /places/{place_id}
pub async fn update_place<R>(
    State(state): State<PlacesAppState<R>>,
    Path(place_id): Path<PlaceId>,
    body: Result<JsonBody<UpdatePlaceRequest>, PlacesError>,
) -> PlacesResult<Json<PlaceResponse>>
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
    let use_case = UpdatePlaceUseCase::new(state.repo.clone(), state.repo.clone());

    use_case.ensure_place(&place_id).await?;
    let JsonBody(req) = body?;

    let place = use_case.execute(&place_id, PlacePatch::from(req)).await?;

    Ok(Json(place.into()))
}

// ============================================================================
// Place amenities
// ============================================================================

/// GET /places/{place_id}/amenities
pub async fn list_place_amenities<R>(
    State(state): State<PlacesAppState<R>>,
    Path(place_id): Path<PlaceId>,
) -> PlacesResult<Json<Vec<AmenityResponse>>>
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
    let use_case = PlaceAmenitiesUseCase::new(state.repo.clone(), state.repo.clone());

    let amenities = use_case.list(&place_id).await?;

    Ok(Json(
        amenities.into_iter().map(AmenityResponse::from).collect(),
    ))
}

/// POST /places/{place_id}/amenities/{amenity_id}
pub async fn link_place_amenity<R>(
    State(state): State<PlacesAppState<R>>,
    Path((place_id, amenity_id)): Path<(PlaceId, AmenityId)>,
) -> PlacesResult<impl IntoResponse>
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
    let use_case = PlaceAmenitiesUseCase::new(state.repo.clone(), state.repo.clone());

    let (amenity, outcome) = use_case.link(&place_id, &amenity_id).await?;

    let status = match outcome {
        LinkOutcome::Linked => StatusCode::CREATED,
        LinkOutcome::AlreadyLinked => StatusCode::OK,
    };

    Ok((status, Json(AmenityResponse::from(amenity))))
}

/// DELETE /places/{place_id}/amenities/{amenity_id}
pub async fn unlink_place_amenity<R>(
    State(state): State<PlacesAppState<R>>,
    Path((place_id, amenity_id)): Path<(PlaceId, AmenityId)>,
) -> PlacesResult<Json<EmptyResponse>>
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
    let use_case = PlaceAmenitiesUseCase::new(state.repo.clone(), state.repo.clone());

    use_case.unlink(&place_id, &amenity_id).await?;

    Ok(Json(EmptyResponse::default()))
}

// ============================================================================
// Fallback
// ============================================================================

/// Any unmatched route
pub async fn not_found() -> AppError {
    AppError::not_found()
}
