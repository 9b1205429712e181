//! Itinerary leg type.
//!
//! A `Leg` is one contiguous segment of travel: a walk, a transit ride,
//! a mid-ride transfer, or a synthesized arrival at the alighting stop.

use std::fmt;

use chrono::{DateTime, Duration, Utc};

use super::{Coordinate, Location, Stop};

/// The kind of a leg.
///
/// This is a closed set; every consumer matches on it exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LegKind {
    /// Walking between two places
    Walk,
    /// Boarding a bus and riding it
    Depart,
    /// Getting off at the final stop of a ride (synthesized)
    Arrive,
    /// A ride the passenger stays aboard through a transfer point
    Transfer,
}

impl LegKind {
    /// Returns the lowercase wire name of this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            LegKind::Walk => "walk",
            LegKind::Depart => "depart",
            LegKind::Arrive => "arrive",
            LegKind::Transfer => "transfer",
        }
    }

    /// Returns true for kinds that describe time spent on a bus.
    pub fn is_transit(&self) -> bool {
        match self {
            LegKind::Depart | LegKind::Transfer => true,
            LegKind::Walk | LegKind::Arrive => false,
        }
    }
}

impl fmt::Display for LegKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One segment of an itinerary.
///
/// Fields are public: legs are plain data that the pipeline rewrites
/// while an `Itinerary` is being built.
#[derive(Debug, Clone, PartialEq)]
pub struct Leg {
    pub kind: LegKind,
    /// Display name (a stop name, or a place label for walks)
    pub name: String,
    pub start: Location,
    pub end: Location,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    /// Ordered geometry of the leg
    pub path: Vec<Coordinate>,
    /// Distance travelled, in backend units (miles)
    pub travel_distance: f64,
    /// Transit line number; 0 for walking legs
    pub route_number: u32,
    /// Stops served along the leg, in order
    pub stops: Vec<Stop>,
    /// Set when the rider stays aboard through a nominal transfer point
    pub stay_on_bus_for_transfer: bool,
    /// Backend trip identifiers, used for live tracking
    pub trip_identifiers: Vec<String>,
    /// Estimated delay, if the backend knows it
    pub delay: Option<Duration>,
}

impl Leg {
    /// Create a leg with no path, stops, or transit details.
    ///
    /// # Examples
    ///
    /// ```
    /// use transit_directions::domain::{Coordinate, Leg, LegKind, Location};
    /// use chrono::{TimeZone, Utc};
    ///
    /// let start = Location::new("Arts Quad", Coordinate::new(42.4491, -76.4837).unwrap());
    /// let end = Location::new("Collegetown", Coordinate::new(42.4420, -76.4850).unwrap());
    /// let depart = Utc.with_ymd_and_hms(2018, 3, 12, 9, 0, 0).unwrap();
    /// let arrive = Utc.with_ymd_and_hms(2018, 3, 12, 9, 12, 0).unwrap();
    ///
    /// let leg = Leg::new(LegKind::Walk, "Collegetown", start, end, depart, arrive);
    /// assert_eq!(leg.duration().num_minutes(), 12);
    /// assert!(leg.stops.is_empty());
    /// ```
    pub fn new(
        kind: LegKind,
        name: impl Into<String>,
        start: Location,
        end: Location,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
    ) -> Self {
        Self {
            kind,
            name: name.into(),
            start,
            end,
            start_time,
            end_time,
            path: Vec::new(),
            travel_distance: 0.0,
            route_number: 0,
            stops: Vec::new(),
            stay_on_bus_for_transfer: false,
            trip_identifiers: Vec::new(),
            delay: None,
        }
    }

    /// Returns the time spent on this leg.
    pub fn duration(&self) -> Duration {
        self.end_time.signed_duration_since(self.start_time)
    }

    pub fn is_walk(&self) -> bool {
        self.kind == LegKind::Walk
    }

    pub fn is_depart(&self) -> bool {
        self.kind == LegKind::Depart
    }

    pub fn is_arrive(&self) -> bool {
        self.kind == LegKind::Arrive
    }

    /// Returns the name of the last stop, if the leg has any stops.
    pub fn last_stop_name(&self) -> Option<&str> {
        self.stops.last().map(|s| s.name.as_str())
    }

    /// Returns the number of intermediate stops.
    pub fn stop_count(&self) -> usize {
        self.stops.len()
    }
}
