//! Leg normalization.
//!
//! The backend describes a bus ride as a single `Depart` leg. For display,
//! each ride also needs an explicit arrival step, rides the passenger stays
//! aboard through a transfer are shown as `Transfer`, and the boarding and
//! alighting stops are dropped from the intermediate stop list (they are
//! already the leg's own start and end).
//!
//! Arrival legs are planned against the original leg indices and then
//! materialized in a single pass, so insertions never shift the indices
//! that later decisions depend on.

use tracing::{debug, warn};

use crate::domain::{Leg, LegKind};

use super::DirectionsConfig;

/// An arrival leg to be placed directly after the leg at `after`.
#[derive(Debug)]
struct Insertion {
    after: usize,
    leg: Leg,
}

/// Normalize raw backend legs into display order.
///
/// Steps:
/// 1. The last leg is renamed to `end_name`.
/// 2. Every `Depart` leg whose successor is not a transfer continuation gets
///    a synthesized `Arrive` leg directly after it.
/// 3. Every `Depart` leg whose successor *is* a transfer continuation becomes
///    a `Transfer` leg instead.
/// 4. `Depart` legs with at least two stops lose their first and last stop.
///
/// This is not idempotent: normalizing already-normalized legs inserts more
/// arrivals and trims more stops. Run it exactly once per backend document.
///
/// # Examples
///
/// ```
/// use transit_directions::directions::{DirectionsConfig, normalize_legs};
/// use transit_directions::domain::{Coordinate, Leg, LegKind, Location, Stop};
/// use chrono::{TimeZone, Utc};
///
/// let c = |lat| Coordinate::new(lat, -76.48).unwrap();
/// let t = |m| Utc.with_ymd_and_hms(2018, 3, 12, 9, m, 0).unwrap();
///
/// let mut ride = Leg::new(
///     LegKind::Depart,
///     "A",
///     Location::new("A", c(42.40)),
///     Location::new("D", c(42.43)),
///     t(0),
///     t(15),
/// );
/// ride.route_number = 10;
/// ride.stops = ["A", "B", "C", "D"]
///     .iter()
///     .zip([42.40, 42.41, 42.42, 42.43])
///     .map(|(name, lat)| Stop::new(*name, c(lat)))
///     .collect();
///
/// let legs = normalize_legs(vec![ride], "Commons", &DirectionsConfig::default());
///
/// assert_eq!(legs.len(), 2);
/// assert_eq!(legs[0].kind, LegKind::Depart);
/// assert_eq!(legs[0].stops.len(), 2);
/// assert_eq!(legs[1].kind, LegKind::Arrive);
/// assert_eq!(legs[1].name, "D");
/// ```
pub fn normalize_legs(
    mut legs: Vec<Leg>,
    end_name: &str,
    config: &DirectionsConfig,
) -> Vec<Leg> {
    if let Some(last) = legs.last_mut() {
        last.name = end_name.to_string();
    }

    let insertions = plan_insertions(&mut legs, config);
    materialize(legs, insertions)
}

/// Rewrite `Depart` legs in place and collect the arrival legs to insert.
fn plan_insertions(legs: &mut [Leg], config: &DirectionsConfig) -> Vec<Insertion> {
    // Decided up front from the untouched sequence
    let transfer_after: Vec<bool> = (0..legs.len())
        .map(|i| legs.get(i + 1).is_some_and(|next| next.stay_on_bus_for_transfer))
        .collect();

    let mut insertions = Vec::new();

    for (index, (leg, has_transfer_after)) in legs.iter_mut().zip(transfer_after).enumerate() {
        match leg.kind {
            LegKind::Depart => {}
            LegKind::Walk | LegKind::Arrive | LegKind::Transfer => continue,
        }

        if has_transfer_after {
            debug!(
                index,
                route = leg.route_number,
                "rider stays aboard through transfer, reclassifying leg"
            );
            leg.kind = LegKind::Transfer;
        } else {
            insertions.push(Insertion {
                after: index,
                leg: arrival_for(leg, config),
            });
        }

        trim_boundary_stops(leg);
    }

    insertions
}

/// Build the `Arrive` leg that follows a ride.
///
/// Must be called before the ride's stops are trimmed: the arrival is named
/// after the ride's final stop.
fn arrival_for(depart: &Leg, config: &DirectionsConfig) -> Leg {
    let name = match depart.last_stop_name() {
        Some(name) => name.to_string(),
        None => {
            warn!(
                route = depart.route_number,
                placeholder = %config.missing_stop_name,
                "ride has no stops, naming arrival with placeholder"
            );
            config.missing_stop_name.clone()
        }
    };

    Leg {
        kind: LegKind::Arrive,
        name,
        start: depart.end.clone(),
        start_time: depart.end_time,
        stops: Vec::new(),
        ..depart.clone()
    }
}

/// Drop the boarding and alighting stops from a ride's stop list.
fn trim_boundary_stops(leg: &mut Leg) {
    if leg.stops.len() >= 2 {
        leg.stops.pop();
        leg.stops.remove(0);
    }
}

fn materialize(legs: Vec<Leg>, insertions: Vec<Insertion>) -> Vec<Leg> {
    let mut result = Vec::with_capacity(legs.len() + insertions.len());
    let mut pending = insertions.into_iter().peekable();

    for (index, leg) in legs.into_iter().enumerate() {
        result.push(leg);
        while let Some(insertion) = pending.next_if(|i| i.after == index) {
            result.push(insertion.leg);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directions::fixtures::{coord, depart_leg, time, walk_leg};

    fn normalize(legs: Vec<Leg>) -> Vec<Leg> {
        normalize_legs(legs, "Ithaca Mall", &DirectionsConfig::default())
    }

    fn kinds(legs: &[Leg]) -> Vec<LegKind> {
        legs.iter().map(|l| l.kind).collect()
    }

    fn stop_names(leg: &Leg) -> Vec<&str> {
        leg.stops.iter().map(|s| s.name.as_str()).collect()
    }

    #[test]
    fn empty_input_stays_empty() {
        assert!(normalize(vec![]).is_empty());
    }

    #[test]
    fn single_ride_gets_arrival() {
        let legs = normalize(vec![depart_leg(10, &["A", "B", "C", "D"])]);

        assert_eq!(kinds(&legs), vec![LegKind::Depart, LegKind::Arrive]);
        assert_eq!(stop_names(&legs[0]), vec!["B", "C"]);
        assert_eq!(legs[1].name, "D");
        assert!(legs[1].stops.is_empty());
    }

    #[test]
    fn arrival_starts_where_ride_ends() {
        let ride = depart_leg(10, &["A", "B", "C"]);
        let legs = normalize(vec![ride.clone()]);

        let arrive = &legs[1];
        assert_eq!(arrive.start, ride.end);
        assert_eq!(arrive.start_time, ride.end_time);
        assert_eq!(arrive.end, ride.end);
        assert_eq!(arrive.end_time, ride.end_time);
        assert_eq!(arrive.route_number, 10);
        assert_eq!(arrive.path, ride.path);
    }

    #[test]
    fn last_leg_renamed_to_end_name() {
        let legs = normalize(vec![
            walk_leg("Arts Quad", coord(42.4491, -76.4837), coord(42.4446, -76.4842)),
            walk_leg("Somewhere", coord(42.4446, -76.4842), coord(42.4396, -76.4965)),
        ]);

        assert_eq!(legs[0].name, "Arts Quad");
        assert_eq!(legs[1].name, "Ithaca Mall");
    }

    #[test]
    fn trailing_ride_renamed_before_arrival_named() {
        // The ride is the last raw leg so it takes the end name; its arrival
        // is still named after the final stop.
        let legs = normalize(vec![depart_leg(30, &["A", "B", "C"])]);

        assert_eq!(legs[0].name, "Ithaca Mall");
        assert_eq!(legs[1].name, "C");
    }

    #[test]
    fn ride_followed_by_transfer_continuation() {
        let first = depart_leg(10, &["A", "B", "C"]);
        let mut second = depart_leg(17, &["C", "D", "E"]);
        second.stay_on_bus_for_transfer = true;

        let legs = normalize(vec![first, second]);

        assert_eq!(
            kinds(&legs),
            vec![LegKind::Transfer, LegKind::Depart, LegKind::Arrive]
        );
        assert_eq!(stop_names(&legs[0]), vec!["B"]);
        assert_eq!(stop_names(&legs[1]), vec!["D"]);
        assert_eq!(legs[2].name, "E");
    }

    #[test]
    fn transfer_flag_on_walk_still_suppresses_arrival() {
        let ride = depart_leg(10, &["A", "B"]);
        let mut walk = walk_leg("x", coord(42.44, -76.48), coord(42.45, -76.48));
        walk.stay_on_bus_for_transfer = true;

        let legs = normalize(vec![ride, walk]);

        assert_eq!(kinds(&legs), vec![LegKind::Transfer, LegKind::Walk]);
    }

    #[test]
    fn stop_trimming_thresholds() {
        let legs = normalize(vec![depart_leg(1, &[])]);
        assert!(legs[0].stops.is_empty());

        let legs = normalize(vec![depart_leg(1, &["A"])]);
        assert_eq!(stop_names(&legs[0]), vec!["A"]);

        let legs = normalize(vec![depart_leg(1, &["A", "B"])]);
        assert!(legs[0].stops.is_empty());

        let legs = normalize(vec![depart_leg(1, &["A", "B", "C"])]);
        assert_eq!(stop_names(&legs[0]), vec!["B"]);
    }

    #[test]
    fn single_stop_arrival_uses_that_stop() {
        let legs = normalize(vec![depart_leg(1, &["Only"])]);
        assert_eq!(legs[1].name, "Only");
    }

    #[test]
    fn stopless_ride_arrival_uses_placeholder() {
        let legs = normalize(vec![depart_leg(1, &[])]);
        assert_eq!(legs[1].kind, LegKind::Arrive);
        assert_eq!(legs[1].name, "Nil");
    }

    #[test]
    fn stopless_ride_arrival_uses_configured_placeholder() {
        let config = DirectionsConfig::default().with_missing_stop_name("Unknown stop");
        let legs = normalize_legs(vec![depart_leg(1, &[])], "Mall", &config);
        assert_eq!(legs[1].name, "Unknown stop");
    }

    #[test]
    fn non_depart_legs_untouched() {
        let mut arrive = depart_leg(5, &["A", "B", "C"]);
        arrive.kind = LegKind::Arrive;
        let mut transfer = depart_leg(6, &["A", "B", "C"]);
        transfer.kind = LegKind::Transfer;
        let walk = walk_leg("w", coord(42.44, -76.48), coord(42.45, -76.48));

        let legs = normalize(vec![arrive.clone(), transfer.clone(), walk]);

        assert_eq!(
            kinds(&legs),
            vec![LegKind::Arrive, LegKind::Transfer, LegKind::Walk]
        );
        assert_eq!(legs[0].stops, arrive.stops);
        assert_eq!(legs[1].stops, transfer.stops);
    }

    #[test]
    fn walk_ride_walk_ordering() {
        let legs = normalize(vec![
            walk_leg("Start", coord(42.4491, -76.4837), coord(42.4446, -76.4842)),
            depart_leg(10, &["A", "B", "C"]),
            walk_leg("End", coord(42.4396, -76.4965), coord(42.4380, -76.4970)),
        ]);

        assert_eq!(
            kinds(&legs),
            vec![
                LegKind::Walk,
                LegKind::Depart,
                LegKind::Arrive,
                LegKind::Walk
            ]
        );
        assert_eq!(legs[3].name, "Ithaca Mall");
    }

    #[test]
    fn two_rides_each_get_their_own_arrival() {
        let legs = normalize(vec![
            depart_leg(10, &["A", "B", "C"]),
            walk_leg("Transfer walk", coord(42.43, -76.48), coord(42.431, -76.48)),
            depart_leg(30, &["X", "Y", "Z"]),
        ]);

        assert_eq!(
            kinds(&legs),
            vec![
                LegKind::Depart,
                LegKind::Arrive,
                LegKind::Walk,
                LegKind::Depart,
                LegKind::Arrive
            ]
        );
        assert_eq!(legs[1].name, "C");
        assert_eq!(legs[1].route_number, 10);
        assert_eq!(legs[4].name, "Z");
        assert_eq!(legs[4].route_number, 30);
    }

    #[test]
    fn arrival_copies_ride_details() {
        let mut ride = depart_leg(81, &["A", "B"]);
        ride.trip_identifiers = vec!["t-1".into(), "t-2".into()];
        ride.delay = Some(chrono::Duration::seconds(120));
        ride.end_time = time(9, 40, 0);

        let legs = normalize(vec![ride]);

        assert_eq!(legs[1].trip_identifiers, vec!["t-1", "t-2"]);
        assert_eq!(legs[1].delay, Some(chrono::Duration::seconds(120)));
        assert_eq!(legs[1].start_time, time(9, 40, 0));
    }

    #[test]
    fn normalization_is_not_repeatable() {
        let raw = vec![depart_leg(10, &["A", "B", "C", "D"])];

        let once = normalize(raw);
        let twice = normalize(once.clone());

        assert_ne!(once, twice);
        // The ride is normalized again: another arrival appears and the
        // already-trimmed stops are trimmed a second time.
        assert_eq!(once.len(), 2);
        assert_eq!(twice.len(), 3);
        assert_eq!(stop_names(&once[0]), vec!["B", "C"]);
        assert!(twice[0].stops.is_empty());
    }
}
