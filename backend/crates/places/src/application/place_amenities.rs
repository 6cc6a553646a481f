//! Place Amenities Use Case
//!
//! Listing and managing the place ↔ amenity relation.

use crate::domain::entities::{Amenity, Place};
use crate::domain::repository::{PlaceAmenityRepository, RelationshipGraph};
use crate::domain::value_objects::LinkOutcome;
use crate::error::{PlacesError, PlacesResult};
use kernel::id::{AmenityId, PlaceId};
use std::sync::Arc;

/// Place Amenities Use Case
pub struct PlaceAmenitiesUseCase<G, L>
where
    G: RelationshipGraph,
    L: PlaceAmenityRepository,
{
    graph: Arc<G>,
    link_repo: Arc<L>,
}

impl<G, L> PlaceAmenitiesUseCase<G, L>
where
    G: RelationshipGraph,
    L: PlaceAmenityRepository,
{
    pub fn new(graph: Arc<G>, link_repo: Arc<L>) -> Self {
        Self { graph, link_repo }
    }

    /// Amenities linked to a place
    pub async fn list(&self, place_id: &PlaceId) -> PlacesResult<Vec<Amenity>> {
        self.require_place(place_id).await?;
        self.link_repo.amenities_of_place(place_id).await
    }

    /// Link an amenity to a place. Linking an already linked pair is a no-op.
    pub async fn link(
        &self,
        place_id: &PlaceId,
        amenity_id: &AmenityId,
    ) -> PlacesResult<(Amenity, LinkOutcome)> {
        self.require_place(place_id).await?;
        let amenity = self.require_amenity(amenity_id).await?;

        let outcome = self.link_repo.link(place_id, amenity_id).await?;
        if outcome == LinkOutcome::Linked {
            tracing::info!(place_id = %place_id, amenity_id = %amenity_id, "Amenity linked");
        }

        Ok((amenity, outcome))
    }

    /// Remove the link between a place and an amenity
    pub async fn unlink(&self, place_id: &PlaceId, amenity_id: &AmenityId) -> PlacesResult<()> {
        self.require_place(place_id).await?;
        self.require_amenity(amenity_id).await?;

        if !self.link_repo.unlink(place_id, amenity_id).await? {
            return Err(PlacesError::AmenityNotLinked);
        }

        tracing::info!(place_id = %place_id, amenity_id = %amenity_id, "Amenity unlinked");

        Ok(())
    }

    async fn require_place(&self, place_id: &PlaceId) -> PlacesResult<Place> {
        self.graph
            .get_place(place_id)
            .await?
            .ok_or(PlacesError::PlaceNotFound)
    }

    async fn require_amenity(&self, amenity_id: &AmenityId) -> PlacesResult<Amenity> {
        self.graph
            .get_amenity(amenity_id)
            .await?
            .ok_or(PlacesError::AmenityNotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::memory::InMemoryPlacesRepository;
    use crate::infra::seed::SeedData;

    fn use_case() -> PlaceAmenitiesUseCase<InMemoryPlacesRepository, InMemoryPlacesRepository> {
        let seed: SeedData = serde_json::from_str(
            r#"{
                "states": [{"id": "CA", "name": "California"}],
                "cities": [{"id": "SF", "state_id": "CA", "name": "San Francisco"}],
                "amenities": [{"id": "wifi", "name": "Wifi"}, {"id": "pool", "name": "Pool"}],
                "users": [{"id": "u1", "email": "host@example.com"}],
                "places": [{"id": "P1", "city_id": "SF", "user_id": "u1", "name": "Loft", "amenity_ids": ["wifi"]}]
            }"#,
        )
        .unwrap();
        let repo = Arc::new(InMemoryPlacesRepository::from_seed(seed).unwrap());
        PlaceAmenitiesUseCase::new(repo.clone(), repo)
    }

    fn ids(amenities: &[Amenity]) -> Vec<&str> {
        amenities.iter().map(|a| a.id.as_str()).collect()
    }

    #[tokio::test]
    async fn test_link_is_idempotent() {
        let use_case = use_case();
        let place = PlaceId::from("P1");
        let pool = AmenityId::from("pool");

        let (amenity, first) = use_case.link(&place, &pool).await.unwrap();
        assert_eq!(amenity.id, pool);
        assert_eq!(first, LinkOutcome::Linked);

        let (_, second) = use_case.link(&place, &pool).await.unwrap();
        assert_eq!(second, LinkOutcome::AlreadyLinked);

        let linked = use_case.list(&place).await.unwrap();
        assert_eq!(ids(&linked), vec!["pool", "wifi"]);
    }

    #[tokio::test]
    async fn test_unlink_removes_link() {
        let use_case = use_case();
        let place = PlaceId::from("P1");
        let wifi = AmenityId::from("wifi");

        use_case.unlink(&place, &wifi).await.unwrap();
        assert!(use_case.list(&place).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unlink_of_unlinked_pair_is_not_found() {
        let use_case = use_case();
        let err = use_case
            .unlink(&PlaceId::from("P1"), &AmenityId::from("pool"))
            .await
            .unwrap_err();
        assert!(matches!(err, PlacesError::AmenityNotLinked));
        assert_eq!(err.status_code(), axum::http::StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_unknown_place_or_amenity_is_not_found() {
        let use_case = use_case();

        let err = use_case
            .link(&PlaceId::from("nope"), &AmenityId::from("wifi"))
            .await
            .unwrap_err();
        assert!(matches!(err, PlacesError::PlaceNotFound));

        let err = use_case
            .link(&PlaceId::from("P1"), &AmenityId::from("nope"))
            .await
            .unwrap_err();
        assert!(matches!(err, PlacesError::AmenityNotFound));

        let err = use_case.list(&PlaceId::from("nope")).await.unwrap_err();
        assert!(matches!(err, PlacesError::PlaceNotFound));
    }
}
