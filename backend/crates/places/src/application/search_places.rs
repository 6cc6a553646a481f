//! Search Places Use Case
//!
//! Resolves a [`SearchFilter`] to place ids by walking the
//! state → city → place graph and the amenity links.

use crate::domain::entities::Place;
use crate::domain::repository::RelationshipGraph;
use crate::domain::services::narrow_by_amenities;
use crate::domain::value_objects::SearchFilter;
use crate::error::PlacesResult;
use kernel::id::PlaceId;
use std::collections::BTreeSet;
use std::sync::Arc;

/// Search Places Use Case
pub struct SearchPlacesUseCase<G>
where
    G: RelationshipGraph,
{
    graph: Arc<G>,
}

impl<G> SearchPlacesUseCase<G>
where
    G: RelationshipGraph,
{
    pub fn new(graph: Arc<G>) -> Self {
        Self { graph }
    }

    /// Compute the ids of the places matching `filter`.
    ///
    /// States and cities are unioned. Amenities are unioned among
    /// themselves, then either seed the result (nothing matched so far) or
    /// narrow it by intersection. Ids that do not resolve are skipped.
    pub async fn resolve(&self, filter: &SearchFilter) -> PlacesResult<BTreeSet<PlaceId>> {
        if filter.is_empty() {
            return Ok(self.graph.all_place_ids().await?.into_iter().collect());
        }

        let mut matches = BTreeSet::new();

        for state_id in &filter.states {
            if self.graph.get_state(state_id).await?.is_none() {
                tracing::debug!(state_id = %state_id, "Skipping unknown state");
                continue;
            }
            for city_id in self.graph.city_ids_of_state(state_id).await? {
                matches.extend(self.graph.place_ids_of_city(&city_id).await?);
            }
        }

        for city_id in &filter.cities {
            if self.graph.get_city(city_id).await?.is_none() {
                tracing::debug!(city_id = %city_id, "Skipping unknown city");
                continue;
            }
            matches.extend(self.graph.place_ids_of_city(city_id).await?);
        }

        let mut amenity_matches = BTreeSet::new();
        let mut known_amenities = 0usize;
        for amenity_id in &filter.amenities {
            if self.graph.get_amenity(amenity_id).await?.is_none() {
                tracing::debug!(amenity_id = %amenity_id, "Skipping unknown amenity");
                continue;
            }
            known_amenities += 1;
            amenity_matches.extend(self.graph.place_ids_of_amenity(amenity_id).await?);
        }

        if known_amenities > 0 {
            matches = narrow_by_amenities(matches, amenity_matches);
        }

        Ok(matches)
    }

    /// Resolve `filter` and load the matching places, ordered by id
    pub async fn execute(&self, filter: &SearchFilter) -> PlacesResult<Vec<Place>> {
        let place_ids = self.resolve(filter).await?;

        let mut places = Vec::with_capacity(place_ids.len());
        for place_id in &place_ids {
            // A place deleted since resolution is simply left out
            if let Some(place) = self.graph.get_place(place_id).await? {
                places.push(place);
            }
        }

        tracing::info!(
            states = filter.states.len(),
            cities = filter.cities.len(),
            amenities = filter.amenities.len(),
            results = places.len(),
            "Places search completed"
        );

        Ok(places)
    }
}
