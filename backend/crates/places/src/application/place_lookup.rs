//! Place Lookup Use Case
//!
//! Single-place reads, per-city listing and deletion.

use crate::domain::entities::Place;
use crate::domain::repository::{PlaceRepository, RelationshipGraph};
use crate::error::{PlacesError, PlacesResult};
use kernel::id::{CityId, PlaceId};
use std::sync::Arc;

/// Place Lookup Use Case
pub struct PlaceLookupUseCase<G, P>
where
    G: RelationshipGraph,
    P: PlaceRepository,
{
    graph: Arc<G>,
    place_repo: Arc<P>,
}

impl<G, P> PlaceLookupUseCase<G, P>
where
    G: RelationshipGraph,
    P: PlaceRepository,
{
    pub fn new(graph: Arc<G>, place_repo: Arc<P>) -> Self {
        Self { graph, place_repo }
    }

    pub async fn get(&self, place_id: &PlaceId) -> PlacesResult<Place> {
        self.graph
            .get_place(place_id)
            .await?
            .ok_or(PlacesError::PlaceNotFound)
    }

    pub async fn list_by_city(&self, city_id: &CityId) -> PlacesResult<Vec<Place>> {
        if self.graph.get_city(city_id).await?.is_none() {
            return Err(PlacesError::CityNotFound);
        }
        self.place_repo.find_by_city(city_id).await
    }

    pub async fn delete(&self, place_id: &PlaceId) -> PlacesResult<()> {
        if !self.place_repo.delete(place_id).await? {
            return Err(PlacesError::PlaceNotFound);
        }

        tracing::info!(place_id = %place_id, "Place deleted");

        Ok(())
    }
}
