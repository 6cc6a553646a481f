//! Update Place Use Case

use crate::domain::entities::Place;
use crate::domain::repository::{PlaceRepository, RelationshipGraph};
use crate::domain::value_objects::PlacePatch;
use crate::error::{PlacesError, PlacesResult};
use kernel::id::PlaceId;
use std::sync::Arc;

/// Update Place Use Case
pub struct UpdatePlaceUseCase<G, P>
where
    G: RelationshipGraph,
    P: PlaceRepository,
{
    graph: Arc<G>,
    place_repo: Arc<P>,
}

impl<G, P> UpdatePlaceUseCase<G, P>
where
    G: RelationshipGraph,
    P: PlaceRepository,
{
    pub fn new(graph: Arc<G>, place_repo: Arc<P>) -> Self {
        Self { graph, place_repo }
    }

    /// Check that the place exists before the body is looked at
    pub async fn ensure_place(&self, place_id: &PlaceId) -> PlacesResult<()> {
        match self.graph.get_place(place_id).await? {
            Some(_) => Ok(()),
            None => Err(PlacesError::PlaceNotFound),
        }
    }

    pub async fn execute(&self, place_id: &PlaceId, patch: PlacePatch) -> PlacesResult<Place> {
        let mut place = self
            .graph
            .get_place(place_id)
            .await?
            .ok_or(PlacesError::PlaceNotFound)?;

        place.apply(patch);

        // Deleted concurrently
        if !self.place_repo.update(&place).await? {
            return Err(PlacesError::PlaceNotFound);
        }

        tracing::info!(place_id = %place.id, "Place updated");

        Ok(place)
    }
}
