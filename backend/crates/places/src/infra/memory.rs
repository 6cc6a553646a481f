//! In-Memory Repository Implementation
//!
//! Holds the whole catalog behind a single async `RwLock`. Clones share
//! the same catalog.

use crate::domain::entities::{Amenity, City, Place, State, User};
use crate::domain::repository::{
    PlaceAmenityRepository, PlaceRepository, RelationshipGraph, UserRepository,
};
use crate::domain::value_objects::LinkOutcome;
use crate::error::{PlacesError, PlacesResult};
use crate::infra::seed::SeedData;
use chrono::Utc;
use kernel::id::{AmenityId, CityId, PlaceId, StateId, UserId};
use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Debug, Default)]
struct Catalog {
    states: HashMap<StateId, State>,
    cities: HashMap<CityId, City>,
    amenities: HashMap<AmenityId, Amenity>,
    users: HashMap<UserId, User>,
    places: HashMap<PlaceId, Place>,
    place_amenities: HashMap<PlaceId, BTreeSet<AmenityId>>,
}

/// In-memory store implementing every places repository trait
#[derive(Clone, Default)]
pub struct InMemoryPlacesRepository {
    catalog: Arc<RwLock<Catalog>>,
}

impl InMemoryPlacesRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from a seed document.
    ///
    /// Records are inserted parents first; a record referencing an entity
    /// that the document does not define is rejected.
    pub fn from_seed(seed: SeedData) -> PlacesResult<Self> {
        let now = Utc::now();
        let mut catalog = Catalog::default();

        for record in seed.states {
            let state = record.into_entity(now);
            insert_unique(&mut catalog.states, "state", state.id.clone(), state)?;
        }

        for record in seed.cities {
            let city = record.into_entity(now);
            if !catalog.states.contains_key(&city.state_id) {
                return Err(PlacesError::Seed(format!(
                    "city {} references unknown state {}",
                    city.id, city.state_id
                )));
            }
            insert_unique(&mut catalog.cities, "city", city.id.clone(), city)?;
        }

        for record in seed.amenities {
            let amenity = record.into_entity(now);
            insert_unique(&mut catalog.amenities, "amenity", amenity.id.clone(), amenity)?;
        }

        for record in seed.users {
            let user = record.into_entity(now);
            insert_unique(&mut catalog.users, "user", user.id.clone(), user)?;
        }

        for record in seed.places {
            let (place, amenity_ids) = record.into_entity(now);
            if !catalog.cities.contains_key(&place.city_id) {
                return Err(PlacesError::Seed(format!(
                    "place {} references unknown city {}",
                    place.id, place.city_id
                )));
            }
            if !catalog.users.contains_key(&place.user_id) {
                return Err(PlacesError::Seed(format!(
                    "place {} references unknown user {}",
                    place.id, place.user_id
                )));
            }
            if let Some(missing) = amenity_ids
                .iter()
                .find(|id| !catalog.amenities.contains_key(*id))
            {
                return Err(PlacesError::Seed(format!(
                    "place {} references unknown amenity {}",
                    place.id, missing
                )));
            }
            let place_id = place.id.clone();
            insert_unique(&mut catalog.places, "place", place_id.clone(), place)?;
            if !amenity_ids.is_empty() {
                catalog
                    .place_amenities
                    .insert(place_id, amenity_ids.into_iter().collect());
            }
        }

        Ok(Self {
            catalog: Arc::new(RwLock::new(catalog)),
        })
    }

    /// Number of places currently stored
    pub async fn place_count(&self) -> usize {
        self.catalog.read().await.places.len()
    }
}

/// Insert a seed record, rejecting a second record with the same id
fn insert_unique<K, V>(map: &mut HashMap<K, V>, kind: &str, id: K, value: V) -> PlacesResult<()>
where
    K: Eq + Hash + fmt::Display,
{
    if map.contains_key(&id) {
        return Err(PlacesError::Seed(format!("duplicate {kind} id {id}")));
    }
    map.insert(id, value);
    Ok(())
}

fn sorted<T: Ord>(mut items: Vec<T>) -> Vec<T> {
    items.sort();
    items
}

impl RelationshipGraph for InMemoryPlacesRepository {
    async fn get_state(&self, state_id: &StateId) -> PlacesResult<Option<State>> {
        Ok(self.catalog.read().await.states.get(state_id).cloned())
    }

    async fn get_city(&self, city_id: &CityId) -> PlacesResult<Option<City>> {
        Ok(self.catalog.read().await.cities.get(city_id).cloned())
    }

    async fn get_amenity(&self, amenity_id: &AmenityId) -> PlacesResult<Option<Amenity>> {
        Ok(self.catalog.read().await.amenities.get(amenity_id).cloned())
    }

    async fn get_place(&self, place_id: &PlaceId) -> PlacesResult<Option<Place>> {
        Ok(self.catalog.read().await.places.get(place_id).cloned())
    }

    async fn city_ids_of_state(&self, state_id: &StateId) -> PlacesResult<Vec<CityId>> {
        let catalog = self.catalog.read().await;
        Ok(sorted(
            catalog
                .cities
                .values()
                .filter(|city| &city.state_id == state_id)
                .map(|city| city.id.clone())
                .collect(),
        ))
    }

    async fn place_ids_of_city(&self, city_id: &CityId) -> PlacesResult<Vec<PlaceId>> {
        let catalog = self.catalog.read().await;
        Ok(sorted(
            catalog
                .places
                .values()
                .filter(|place| &place.city_id == city_id)
                .map(|place| place.id.clone())
                .collect(),
        ))
    }

    async fn place_ids_of_amenity(&self, amenity_id: &AmenityId) -> PlacesResult<Vec<PlaceId>> {
        let catalog = self.catalog.read().await;
        Ok(sorted(
            catalog
                .place_amenities
                .iter()
                .filter(|(_, amenities)| amenities.contains(amenity_id))
                .map(|(place_id, _)| place_id.clone())
                .collect(),
        ))
    }

    async fn all_place_ids(&self) -> PlacesResult<Vec<PlaceId>> {
        let catalog = self.catalog.read().await;
        Ok(sorted(catalog.places.keys().cloned().collect()))
    }
}

impl PlaceRepository for InMemoryPlacesRepository {
    async fn create(&self, place: &Place) -> PlacesResult<()> {
        let mut catalog = self.catalog.write().await;
        if catalog.places.contains_key(&place.id) {
            return Err(PlacesError::Internal(format!(
                "place {} already exists",
                place.id
            )));
        }
        catalog.places.insert(place.id.clone(), place.clone());
        Ok(())
    }

    async fn update(&self, place: &Place) -> PlacesResult<bool> {
        let mut catalog = self.catalog.write().await;
        match catalog.places.get_mut(&place.id) {
            Some(stored) => {
                *stored = place.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, place_id: &PlaceId) -> PlacesResult<bool> {
        let mut catalog = self.catalog.write().await;
        catalog.place_amenities.remove(place_id);
        Ok(catalog.places.remove(place_id).is_some())
    }

    async fn find_by_city(&self, city_id: &CityId) -> PlacesResult<Vec<Place>> {
        let catalog = self.catalog.read().await;
        let mut places: Vec<Place> = catalog
            .places
            .values()
            .filter(|place| &place.city_id == city_id)
            .cloned()
            .collect();
        places.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(places)
    }
}

impl PlaceAmenityRepository for InMemoryPlacesRepository {
    async fn amenities_of_place(&self, place_id: &PlaceId) -> PlacesResult<Vec<Amenity>> {
        let catalog = self.catalog.read().await;
        let Some(linked) = catalog.place_amenities.get(place_id) else {
            return Ok(Vec::new());
        };
        // BTreeSet iteration keeps the result ordered by id
        Ok(linked
            .iter()
            .filter_map(|amenity_id| catalog.amenities.get(amenity_id).cloned())
            .collect())
    }

    async fn link(&self, place_id: &PlaceId, amenity_id: &AmenityId) -> PlacesResult<LinkOutcome> {
        let mut catalog = self.catalog.write().await;
        // Both ends must exist at insert time
        if !catalog.places.contains_key(place_id) {
            return Err(PlacesError::PlaceNotFound);
        }
        if !catalog.amenities.contains_key(amenity_id) {
            return Err(PlacesError::AmenityNotFound);
        }
        let inserted = catalog
            .place_amenities
            .entry(place_id.clone())
            .or_default()
            .insert(amenity_id.clone());
        Ok(if inserted {
            LinkOutcome::Linked
        } else {
            LinkOutcome::AlreadyLinked
        })
    }

    async fn unlink(&self, place_id: &PlaceId, amenity_id: &AmenityId) -> PlacesResult<bool> {
        let mut catalog = self.catalog.write().await;
        let Some(linked) = catalog.place_amenities.get_mut(place_id) else {
            return Ok(false);
        };
        let removed = linked.remove(amenity_id);
        if linked.is_empty() {
            catalog.place_amenities.remove(place_id);
        }
        Ok(removed)
    }
}

impl UserRepository for InMemoryPlacesRepository {
    async fn find_by_id(&self, user_id: &UserId) -> PlacesResult<Option<User>> {
        Ok(self.catalog.read().await.users.get(user_id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seed(json: &str) -> SeedData {
        SeedData::parse(json).unwrap()
    }

    fn repo() -> InMemoryPlacesRepository {
        InMemoryPlacesRepository::from_seed(seed(
            r#"{
                "states": [{"id": "CA", "name": "California"}],
                "cities": [
                    {"id": "SF", "state_id": "CA", "name": "San Francisco"},
                    {"id": "LA", "state_id": "CA", "name": "Los Angeles"}
                ],
                "amenities": [{"id": "wifi", "name": "Wifi"}],
                "users": [{"id": "u1", "email": "host@example.com"}],
                "places": [
                    {"id": "P2", "city_id": "SF", "user_id": "u1", "name": "Flat", "amenity_ids": ["wifi"]},
                    {"id": "P1", "city_id": "SF", "user_id": "u1", "name": "Loft"}
                ]
            }"#,
        ))
        .unwrap()
    }

    #[tokio::test]
    async fn test_traversals() {
        let repo = repo();
        let cities = repo.city_ids_of_state(&StateId::from("CA")).await.unwrap();
        assert_eq!(cities, vec![CityId::from("LA"), CityId::from("SF")]);

        let places = repo.place_ids_of_city(&CityId::from("SF")).await.unwrap();
        assert_eq!(places, vec![PlaceId::from("P1"), PlaceId::from("P2")]);

        let places = repo
            .place_ids_of_amenity(&AmenityId::from("wifi"))
            .await
            .unwrap();
        assert_eq!(places, vec![PlaceId::from("P2")]);

        assert!(repo.place_ids_of_city(&CityId::from("LA")).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_drops_links() {
        let repo = repo();
        assert!(PlaceRepository::delete(&repo, &PlaceId::from("P2")).await.unwrap());
        assert!(!PlaceRepository::delete(&repo, &PlaceId::from("P2")).await.unwrap());

        let places = repo
            .place_ids_of_amenity(&AmenityId::from("wifi"))
            .await
            .unwrap();
        assert!(places.is_empty());
        assert_eq!(repo.place_count().await, 1);
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let repo = repo();
        let clone = repo.clone();
        let place = Place::new(CityId::from("LA"), UserId::from("u1"), "Villa".to_string());
        clone.create(&place).await.unwrap();

        assert!(repo.get_place(&place.id).await.unwrap().is_some());
        assert!(repo.create(&place).await.is_err());
    }

    #[tokio::test]
    async fn test_link_and_unlink() {
        let repo = repo();
        let place = PlaceId::from("P1");
        let wifi = AmenityId::from("wifi");

        assert_eq!(repo.link(&place, &wifi).await.unwrap(), LinkOutcome::Linked);
        assert_eq!(repo.link(&place, &wifi).await.unwrap(), LinkOutcome::AlreadyLinked);
        assert!(repo.unlink(&place, &wifi).await.unwrap());
        assert!(!repo.unlink(&place, &wifi).await.unwrap());
    }

    #[test]
    fn test_seed_rejects_dangling_references() {
        let err = InMemoryPlacesRepository::from_seed(seed(
            r#"{"cities": [{"id": "SF", "state_id": "CA", "name": "San Francisco"}]}"#,
        ))
        .err()
        .unwrap();
        assert!(err.to_string().contains("unknown state"));

        let err = InMemoryPlacesRepository::from_seed(seed(
            r#"{
                "states": [{"id": "CA", "name": "California"}],
                "cities": [{"id": "SF", "state_id": "CA", "name": "San Francisco"}],
                "users": [{"id": "u1"}],
                "places": [{"id": "P1", "city_id": "SF", "user_id": "u1", "name": "Loft", "amenity_ids": ["spa"]}]
            }"#,
        ))
        .err()
        .unwrap();
        assert!(err.to_string().contains("unknown amenity"));

        let err = InMemoryPlacesRepository::from_seed(seed(
            r#"{
                "states": [{"id": "CA", "name": "California"}],
                "cities": [{"id": "SF", "state_id": "CA", "name": "San Francisco"}],
                "places": [{"id": "P1", "city_id": "SF", "user_id": "ghost", "name": "Loft"}]
            }"#,
        ))
        .err()
        .unwrap();
        assert!(err.to_string().contains("unknown user"));
    }

    #[tokio::test]
    async fn test_link_requires_existing_place() {
        let repo = repo();
        let wifi = AmenityId::from("wifi");
        assert!(PlaceRepository::delete(&repo, &PlaceId::from("P2")).await.unwrap());

        let err = repo.link(&PlaceId::from("P2"), &wifi).await.unwrap_err();
        assert!(matches!(err, PlacesError::PlaceNotFound));

        let err = repo
            .link(&PlaceId::from("P1"), &AmenityId::from("spa"))
            .await
            .unwrap_err();
        assert!(matches!(err, PlacesError::AmenityNotFound));

        assert!(repo.place_ids_of_amenity(&wifi).await.unwrap().is_empty());
        assert!(repo.catalog.read().await.place_amenities.is_empty());
    }

    #[test]
    fn test_seed_rejects_duplicate_ids() {
        let err = InMemoryPlacesRepository::from_seed(seed(
            r#"{"amenities": [{"id": "wifi", "name": "Wifi"}, {"id": "wifi", "name": "WiFi"}]}"#,
        ))
        .err()
        .unwrap();
        assert!(matches!(err, PlacesError::Seed(_)));
        assert!(err.to_string().contains("duplicate amenity id wifi"));

        let err = InMemoryPlacesRepository::from_seed(seed(
            r#"{
                "states": [{"id": "CA", "name": "California"}],
                "cities": [{"id": "SF", "state_id": "CA", "name": "San Francisco"}],
                "amenities": [{"id": "wifi", "name": "Wifi"}],
                "users": [{"id": "u1"}],
                "places": [
                    {"id": "P1", "city_id": "SF", "user_id": "u1", "name": "Loft", "amenity_ids": ["wifi"]},
                    {"id": "P1", "city_id": "SF", "user_id": "u1", "name": "Loft again"}
                ]
            }"#,
        ))
        .err()
        .unwrap();
        assert!(err.to_string().contains("duplicate place id P1"));
    }
}
