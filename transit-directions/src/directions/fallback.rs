//! Walking-only itineraries.
//!
//! A route that is a single walk has no leg named after where the user
//! starts. Summary text and the detail drawer both expect one, so the walk
//! is duplicated under the start label.

use tracing::debug;

use crate::domain::{Leg, LegKind};

/// Prepend an origin leg to a walk-only itinerary.
///
/// When `legs` is exactly one `Walk`, a copy of it named `start_name` is
/// inserted at the front. Every other shape is left alone.
///
/// Returns true if a leg was inserted.
pub fn prepend_origin_walk(legs: &mut Vec<Leg>, start_name: &str) -> bool {
    let [only] = legs.as_slice() else {
        return false;
    };

    match only.kind {
        LegKind::Walk => {}
        LegKind::Depart | LegKind::Arrive | LegKind::Transfer => return false,
    }

    debug!(start = start_name, "walk-only itinerary, adding origin leg");

    let origin = Leg {
        name: start_name.to_string(),
        ..only.clone()
    };
    legs.insert(0, origin);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directions::fixtures::{coord, depart_leg, walk_leg};

    fn campus_walk() -> Leg {
        walk_leg("Ithaca Commons", coord(42.4491, -76.4837), coord(42.4396, -76.4965))
    }

    #[test]
    fn single_walk_gains_origin_leg() {
        let walk = campus_walk();
        let mut legs = vec![walk.clone()];

        assert!(prepend_origin_walk(&mut legs, "Arts Quad"));

        assert_eq!(legs.len(), 2);
        assert_eq!(legs[0].name, "Arts Quad");
        assert_eq!(legs[1], walk);
    }

    #[test]
    fn origin_leg_copies_everything_but_the_name() {
        let mut walk = campus_walk();
        walk.trip_identifiers = vec!["trip".into()];
        walk.delay = Some(chrono::Duration::seconds(30));
        walk.route_number = 0;
        let mut legs = vec![walk.clone()];

        prepend_origin_walk(&mut legs, "Arts Quad");

        let origin = &legs[0];
        assert_eq!(origin.kind, LegKind::Walk);
        assert_eq!(origin.start, walk.start);
        assert_eq!(origin.end, walk.end);
        assert_eq!(origin.start_time, walk.start_time);
        assert_eq!(origin.end_time, walk.end_time);
        assert_eq!(origin.path, walk.path);
        assert_eq!(origin.travel_distance, walk.travel_distance);
        assert_eq!(origin.route_number, walk.route_number);
        assert_eq!(origin.stops, walk.stops);
        assert_eq!(
            origin.stay_on_bus_for_transfer,
            walk.stay_on_bus_for_transfer
        );
        assert_eq!(origin.trip_identifiers, walk.trip_identifiers);
        assert_eq!(origin.delay, walk.delay);
    }

    #[test]
    fn empty_itinerary_untouched() {
        let mut legs = vec![];
        assert!(!prepend_origin_walk(&mut legs, "Arts Quad"));
        assert!(legs.is_empty());
    }

    #[test]
    fn single_ride_untouched() {
        let mut legs = vec![depart_leg(10, &["A", "B"])];
        assert!(!prepend_origin_walk(&mut legs, "Arts Quad"));
        assert_eq!(legs.len(), 1);
    }

    #[test]
    fn two_walks_untouched() {
        let mut legs = vec![campus_walk(), campus_walk()];
        assert!(!prepend_origin_walk(&mut legs, "Arts Quad"));
        assert_eq!(legs.len(), 2);
    }
}
