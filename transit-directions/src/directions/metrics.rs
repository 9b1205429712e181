//! Trip metrics: travel distance and duration.

use chrono::{DateTime, Utc};

use crate::domain::{Coordinate, Leg, LegKind};

/// Returns true if every leg is a walk.
///
/// An empty leg list counts as walking.
pub fn is_walking_route(legs: &[Leg]) -> bool {
    legs.iter().all(Leg::is_walk)
}

/// Pick the coordinate that overall travel distance is measured to.
///
/// - Transit routes that open with a walk measure to the start of the
///   second leg (the first boarding point).
/// - Walk-only routes measure to the end of the first leg.
/// - Everything else measures to the start of the first leg.
///
/// Returns `None` for an empty leg list.
pub fn distance_anchor(legs: &[Leg]) -> Option<Coordinate> {
    let first = legs.first()?;
    let walking = is_walking_route(legs);

    let anchor_leg = match (walking, first.kind, legs.get(1)) {
        (false, LegKind::Walk, Some(second)) => second,
        _ => first,
    };

    if walking {
        Some(anchor_leg.end.coordinate)
    } else {
        Some(anchor_leg.start.coordinate)
    }
}

/// Great-circle distance in metres from `start` to the distance anchor.
///
/// Returns `None` when there are no legs.
pub fn travel_distance(start: &Coordinate, legs: &[Leg]) -> Option<f64> {
    distance_anchor(legs).map(|anchor| start.distance_to(&anchor))
}

/// Whole minutes between departure and arrival, floored.
///
/// An arrival before the departure yields 0.
///
/// # Examples
///
/// ```
/// use transit_directions::directions::total_duration_mins;
/// use chrono::{TimeZone, Utc};
///
/// let departure = Utc.with_ymd_and_hms(2018, 3, 12, 9, 0, 0).unwrap();
/// let arrival = Utc.with_ymd_and_hms(2018, 3, 12, 9, 17, 30).unwrap();
/// assert_eq!(total_duration_mins(departure, arrival), 17);
/// ```
pub fn total_duration_mins(departure: DateTime<Utc>, arrival: DateTime<Utc>) -> i64 {
    arrival.signed_duration_since(departure).num_minutes().max(0)
}
