//! Waypoint roles for map rendering.
//!
//! Every point on a leg's path becomes a `Waypoint` tagged with the role it
//! plays in the itinerary. Tags depend on the leg kind, the point's position
//! within the leg, and the leg's position within the itinerary. Waypoints
//! are derived on demand and never cached.

use std::fmt;

use crate::domain::{Coordinate, Leg, LegKind};

use super::DirectionsConfig;

/// The rendering role of a path point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WaypointKind {
    /// Where the whole trip starts
    Origin,
    /// Where the whole trip ends
    Destination,
    /// Boarding or alighting point between two legs
    Bus,
    /// Interior bus-path point at a leg's start or end stop
    Stop,
    /// Interior walk-leg endpoint
    Walk,
    /// Any other point on a walk
    Walking,
    /// Any other point on a bus ride
    Bussing,
    /// Points of legs that are not drawn as paths
    None,
}

impl WaypointKind {
    /// Marker layering constant; higher values draw on top.
    ///
    /// Bus-path points use a large constant so they stay above every
    /// other marker.
    pub fn z_index(&self) -> i32 {
        match self {
            WaypointKind::Bussing => 999,
            WaypointKind::Origin | WaypointKind::Destination => 3,
            WaypointKind::Bus | WaypointKind::Stop | WaypointKind::Walk => 1,
            WaypointKind::Walking | WaypointKind::None => 0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WaypointKind::Origin => "origin",
            WaypointKind::Destination => "destination",
            WaypointKind::Bus => "bus",
            WaypointKind::Stop => "stop",
            WaypointKind::Walk => "walk",
            WaypointKind::Walking => "walking",
            WaypointKind::Bussing => "bussing",
            WaypointKind::None => "none",
        }
    }
}

impl fmt::Display for WaypointKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single tagged point along a leg.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Waypoint {
    pub coordinate: Coordinate,
    pub kind: WaypointKind,
    /// Route number of the owning leg, for bus badges (0 for walks)
    pub route_number: u32,
}

impl Waypoint {
    pub fn z_index(&self) -> i32 {
        self.kind.z_index()
    }
}

/// How a leg's path is stroked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathStyle {
    Walking,
    Transit,
}

/// The tagged waypoints of one leg.
#[derive(Debug, Clone, PartialEq)]
pub struct LegPath {
    pub style: PathStyle,
    pub waypoints: Vec<Waypoint>,
}

/// Tag every point on the path of `legs[leg_index]`.
///
/// Returns an empty list if `leg_index` is out of range.
pub fn leg_waypoints(
    legs: &[Leg],
    leg_index: usize,
    config: &DirectionsConfig,
) -> Vec<Waypoint> {
    let Some(leg) = legs.get(leg_index) else {
        return Vec::new();
    };
    let position = LegPosition {
        first: leg_index == 0,
        last: leg_index + 1 == legs.len(),
    };

    leg.path
        .iter()
        .enumerate()
        .map(|(point_index, point)| Waypoint {
            coordinate: *point,
            kind: classify(leg, position, point_index, point, config),
            route_number: leg.route_number,
        })
        .collect()
}

/// Tag the paths of every leg, in itinerary order.
///
/// # Examples
///
/// ```
/// use transit_directions::directions::{DirectionsConfig, WaypointKind, itinerary_paths};
/// use transit_directions::domain::{Coordinate, Leg, LegKind, Location};
/// use chrono::{TimeZone, Utc};
///
/// let a = Coordinate::new(42.4491, -76.4837).unwrap();
/// let b = Coordinate::new(42.4396, -76.4965).unwrap();
/// let t = Utc.with_ymd_and_hms(2018, 3, 12, 9, 0, 0).unwrap();
///
/// let mut walk = Leg::new(LegKind::Walk, "Commons", Location::new("", a), Location::new("", b), t, t);
/// walk.path = vec![a, b];
///
/// let paths = itinerary_paths(&[walk], &DirectionsConfig::default());
/// assert_eq!(paths[0].waypoints[0].kind, WaypointKind::Origin);
/// assert_eq!(paths[0].waypoints[1].kind, WaypointKind::Destination);
/// ```
pub fn itinerary_paths(legs: &[Leg], config: &DirectionsConfig) -> Vec<LegPath> {
    legs.iter()
        .enumerate()
        .map(|(i, leg)| LegPath {
            style: match leg.kind {
                LegKind::Walk => PathStyle::Walking,
                LegKind::Depart | LegKind::Arrive | LegKind::Transfer => PathStyle::Transit,
            },
            waypoints: leg_waypoints(legs, i, config),
        })
        .collect()
}

#[derive(Debug, Clone, Copy)]
struct LegPosition {
    first: bool,
    last: bool,
}

fn classify(
    leg: &Leg,
    position: LegPosition,
    point_index: usize,
    point: &Coordinate,
    config: &DirectionsConfig,
) -> WaypointKind {
    let first_point = point_index == 0;
    let last_point = point_index + 1 == leg.path.len();

    match leg.kind {
        LegKind::Depart => {
            if first_point {
                if position.first {
                    WaypointKind::Origin
                } else {
                    WaypointKind::Bus
                }
            } else if last_point {
                if position.last {
                    WaypointKind::Destination
                } else {
                    WaypointKind::Bus
                }
            } else if config.mark_stop_waypoints
                && (*point == leg.start.coordinate || *point == leg.end.coordinate)
            {
                WaypointKind::Stop
            } else {
                WaypointKind::Bussing
            }
        }
        LegKind::Walk => {
            if position.first && first_point {
                WaypointKind::Origin
            } else if position.last && last_point {
                WaypointKind::Destination
            } else if config.mark_walk_endpoints && (first_point || last_point) {
                WaypointKind::Walk
            } else {
                WaypointKind::Walking
            }
        }
        LegKind::Arrive | LegKind::Transfer => WaypointKind::None,
    }
}
