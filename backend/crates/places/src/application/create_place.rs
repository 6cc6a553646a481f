//! Create Place Use Case

use crate::domain::entities::Place;
use crate::domain::repository::{PlaceRepository, RelationshipGraph, UserRepository};
use crate::domain::value_objects::PlacePatch;
use crate::error::{PlacesError, PlacesResult};
use kernel::id::{CityId, UserId};
use std::sync::Arc;

/// Input DTO for create place
///
/// `user_id` and `name` are optional here so that their absence is
/// reported in the documented order rather than by the body parser.
#[derive(Debug, Clone)]
pub struct CreatePlaceInput {
    pub city_id: CityId,
    pub user_id: Option<UserId>,
    pub name: Option<String>,
    /// Remaining optional attributes
    pub attributes: PlacePatch,
}

/// Create Place Use Case
pub struct CreatePlaceUseCase<G, P, U>
where
    G: RelationshipGraph,
    P: PlaceRepository,
    U: UserRepository,
{
    graph: Arc<G>,
    place_repo: Arc<P>,
    user_repo: Arc<U>,
}

impl<G, P, U> CreatePlaceUseCase<G, P, U>
where
    G: RelationshipGraph,
    P: PlaceRepository,
    U: UserRepository,
{
    pub fn new(graph: Arc<G>, place_repo: Arc<P>, user_repo: Arc<U>) -> Self {
        Self {
            graph,
            place_repo,
            user_repo,
        }
    }

    /// Check that the target city exists
    pub async fn ensure_city(&self, city_id: &CityId) -> PlacesResult<()> {
        match self.graph.get_city(city_id).await? {
            Some(_) => Ok(()),
            None => Err(PlacesError::CityNotFound),
        }
    }

    pub async fn execute(&self, input: CreatePlaceInput) -> PlacesResult<Place> {
        self.ensure_city(&input.city_id).await?;

        let user_id = input.user_id.ok_or(PlacesError::MissingField("user_id"))?;
        if self.user_repo.find_by_id(&user_id).await?.is_none() {
            return Err(PlacesError::UserNotFound);
        }

        let name = input.name.ok_or(PlacesError::MissingField("name"))?;

        let mut place = Place::new(input.city_id, user_id, name);
        place.apply(input.attributes);
        place.updated_at = place.created_at;

        self.place_repo.create(&place).await?;

        tracing::info!(
            place_id = %place.id,
            city_id = %place.city_id,
            user_id = %place.user_id,
            "Place created"
        );

        Ok(place)
    }
}
