//! Common ID Types
//!
//! Type-safe string ID wrappers for domain entities.
//!
//! Ids are opaque strings: freshly generated ones are UUID v4 text, but
//! ids coming from clients or seed data are taken as-is so that an
//! unknown id simply fails to resolve instead of failing to parse.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use uuid::Uuid;

/// Generic typed ID wrapper
///
/// Usage:
/// ```
/// use kernel::id::{Id, markers};
/// type PlaceId = Id<markers::Place>;
/// let id = PlaceId::from("place-1");
/// assert_eq!(id.as_str(), "place-1");
/// ```
pub struct Id<T> {
    value: String,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Id<T> {
    /// Create a new random ID (UUID v4 text)
    pub fn new() -> Self {
        Self::from_string(Uuid::new_v4().to_string())
    }

    /// Wrap an existing id string
    pub fn from_string(value: String) -> Self {
        Self {
            value,
            _marker: PhantomData,
        }
    }

    /// Borrow the underlying string
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Convert into the underlying string
    pub fn into_string(self) -> String {
        self.value
    }
}

impl<T> Default for Id<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        Self::from_string(self.value.clone())
    }
}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for Id<T> {}

impl<T> PartialOrd for Id<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Id<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl<T> Hash for Id<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.value)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl<T> From<String> for Id<T> {
    fn from(value: String) -> Self {
        Self::from_string(value)
    }
}

impl<T> From<&str> for Id<T> {
    fn from(value: &str) -> Self {
        Self::from_string(value.to_owned())
    }
}

impl<T> From<Id<T>> for String {
    fn from(id: Id<T>) -> Self {
        id.value
    }
}

impl<T> Serialize for Id<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.value)
    }
}

impl<'de, T> Deserialize<'de> for Id<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self::from_string)
    }
}

/// Marker types for different entity IDs
pub mod markers {
    /// Marker for State IDs
    pub struct State;

    /// Marker for City IDs
    pub struct City;

    /// Marker for Amenity IDs
    pub struct Amenity;

    /// Marker for Place IDs
    pub struct Place;

    /// Marker for User IDs
    pub struct User;
}

/// Type aliases for common IDs
pub type StateId = Id<markers::State>;
pub type CityId = Id<markers::City>;
pub type AmenityId = Id<markers::Amenity>;
pub type PlaceId = Id<markers::Place>;
pub type UserId = Id<markers::User>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_new_id_is_uuid_text() {
        let id = PlaceId::new();
        let parsed = Uuid::parse_str(id.as_str()).unwrap();
        assert_eq!(parsed.get_version_num(), 4);
    }

    #[test]
    fn test_arbitrary_strings_are_kept() {
        let id = StateId::from("CA");
        assert_eq!(id.as_str(), "CA");
        assert_eq!(id.to_string(), "CA");
        assert_eq!(String::from(id), "CA");
    }

    #[test]
    fn test_ordering_follows_string_order() {
        let ids: BTreeSet<CityId> = ["b", "a", "c", "a"].into_iter().map(CityId::from).collect();
        let ordered: Vec<&str> = ids.iter().map(|id| id.as_str()).collect();
        assert_eq!(ordered, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_serde_is_a_plain_string() {
        let id = AmenityId::from("wifi");
        assert_eq!(serde_json::to_string(&id).unwrap(), r#""wifi""#);

        let back: AmenityId = serde_json::from_str(r#""wifi""#).unwrap();
        assert_eq!(back, id);
    }
}
