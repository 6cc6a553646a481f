//! Domain Services
//!
//! Pure set algebra used by places search.

use kernel::id::PlaceId;
use std::collections::BTreeSet;

/// Combine state/city matches with the places reachable from amenities.
///
/// `amenity_matches` is the union over all requested amenities. When no
/// state or city produced a match, the amenity places become the result;
/// otherwise they narrow the existing matches by intersection. A place is
/// never required to carry every requested amenity.
pub fn narrow_by_amenities(
    location_matches: BTreeSet<PlaceId>,
    amenity_matches: BTreeSet<PlaceId>,
) -> BTreeSet<PlaceId> {
    if location_matches.is_empty() {
        amenity_matches
    } else {
        location_matches
            .intersection(&amenity_matches)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(values: &[&str]) -> BTreeSet<PlaceId> {
        values.iter().map(|v| PlaceId::from(*v)).collect()
    }

    #[test]
    fn test_empty_location_matches_are_seeded() {
        let result = narrow_by_amenities(BTreeSet::new(), ids(&["p1", "p2"]));
        assert_eq!(result, ids(&["p1", "p2"]));
    }

    #[test]
    fn test_location_matches_are_intersected() {
        let result = narrow_by_amenities(ids(&["p1", "p3"]), ids(&["p1", "p2"]));
        assert_eq!(result, ids(&["p1"]));
    }

    #[test]
    fn test_disjoint_sets_produce_nothing() {
        let result = narrow_by_amenities(ids(&["p3"]), ids(&["p1", "p2"]));
        assert!(result.is_empty());
    }
}
