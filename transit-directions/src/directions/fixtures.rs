//! Leg builders shared by the directions tests.

use chrono::{DateTime, TimeZone, Utc};

use crate::domain::{Coordinate, Leg, LegKind, Location, Stop};

pub(crate) fn coord(lat: f64, long: f64) -> Coordinate {
    Coordinate::new(lat, long).unwrap()
}

pub(crate) fn time(h: u32, m: u32, s: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2018, 3, 12, h, m, s).unwrap()
}

/// A walk from `from` to `to` with a three-point path.
pub(crate) fn walk_leg(name: &str, from: Coordinate, to: Coordinate) -> Leg {
    let mid = coord(
        (from.lat() + to.lat()) / 2.0,
        (from.long() + to.long()) / 2.0,
    );
    let mut leg = Leg::new(
        LegKind::Walk,
        name,
        Location::new(name, from),
        Location::new(name, to),
        time(9, 0, 0),
        time(9, 10, 0),
    );
    leg.path = vec![from, mid, to];
    leg.travel_distance = 0.4;
    leg
}

/// A bus ride along the named stops, spaced 0.001° apart heading north.
///
/// The path visits every stop. With no stops the ride still has a
/// two-point path.
pub(crate) fn depart_leg(route: u32, stop_names: &[&str]) -> Leg {
    let stops: Vec<Stop> = stop_names
        .iter()
        .enumerate()
        .map(|(i, name)| Stop::new(*name, coord(42.44 + i as f64 * 0.001, -76.48)))
        .collect();

    let start = stops
        .first()
        .map(|s| Location::new(s.name.clone(), s.coordinate))
        .unwrap_or_else(|| Location::new("Boarding", coord(42.43, -76.48)));
    let end = stops
        .last()
        .map(|s| Location::new(s.name.clone(), s.coordinate))
        .unwrap_or_else(|| Location::new("Alighting", coord(42.439, -76.48)));

    let mut leg = Leg::new(
        LegKind::Depart,
        start.name.clone(),
        start.clone(),
        end.clone(),
        time(9, 10, 0),
        time(9, 25, 0),
    );
    leg.path = if stops.len() >= 2 {
        stops.iter().map(|s| s.coordinate).collect()
    } else {
        vec![start.coordinate, end.coordinate]
    };
    leg.route_number = route;
    leg.travel_distance = 1.6;
    leg.stops = stops;
    leg
}
