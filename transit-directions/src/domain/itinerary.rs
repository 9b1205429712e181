//! Itinerary types.
//!
//! A `RawItinerary` is one route exactly as the backend described it. An
//! `Itinerary` is the finalized, presentation-ready version: legs
//! normalized, walk-only routes given an origin leg, and travel distance
//! computed.

use chrono::{DateTime, Duration, Utc};

use crate::directions::{
    self, DirectionsConfig, LegPath, Waypoint, normalize_legs, prepend_origin_walk,
};

use super::{Bounds, Coordinate, Leg, LegKind};

/// One route as parsed from a backend document, before post-processing.
#[derive(Debug, Clone, PartialEq)]
pub struct RawItinerary {
    pub departure_time: DateTime<Utc>,
    pub arrival_time: DateTime<Utc>,
    pub start_name: String,
    pub end_name: String,
    pub start_coords: Coordinate,
    pub end_coords: Coordinate,
    pub bounding_box: Bounds,
    pub transfer_count: u32,
    pub legs: Vec<Leg>,
}

/// A finalized route from origin to destination.
///
/// # Invariants
///
/// - Legs are normalized exactly once, at construction
/// - `directions()` is empty only if the raw route had no legs
/// - The leg list is not structurally modified after construction
#[derive(Debug, Clone, PartialEq)]
pub struct Itinerary {
    departure_time: DateTime<Utc>,
    arrival_time: DateTime<Utc>,
    start_name: String,
    end_name: String,
    start_coords: Coordinate,
    end_coords: Coordinate,
    bounding_box: Bounds,
    transfer_count: u32,
    directions: Vec<Leg>,
    travel_distance: f64,
}

impl Itinerary {
    /// Finalize a raw route.
    ///
    /// Runs the full pipeline: leg normalization, the walk-only origin leg,
    /// then travel distance.
    ///
    /// # Examples
    ///
    /// ```
    /// use transit_directions::directions::DirectionsConfig;
    /// use transit_directions::domain::{
    ///     Bounds, Coordinate, Itinerary, Leg, LegKind, Location, RawItinerary,
    /// };
    /// use chrono::{TimeZone, Utc};
    ///
    /// let arts_quad = Coordinate::new(42.4491, -76.4837).unwrap();
    /// let commons = Coordinate::new(42.4396, -76.4965).unwrap();
    /// let depart = Utc.with_ymd_and_hms(2018, 3, 12, 9, 0, 0).unwrap();
    /// let arrive = Utc.with_ymd_and_hms(2018, 3, 12, 9, 17, 30).unwrap();
    ///
    /// let walk = Leg::new(
    ///     LegKind::Walk,
    ///     "Commons",
    ///     Location::new("Arts Quad", arts_quad),
    ///     Location::new("Commons", commons),
    ///     depart,
    ///     arrive,
    /// );
    ///
    /// let raw = RawItinerary {
    ///     departure_time: depart,
    ///     arrival_time: arrive,
    ///     start_name: "Arts Quad".into(),
    ///     end_name: "Commons".into(),
    ///     start_coords: arts_quad,
    ///     end_coords: commons,
    ///     bounding_box: Bounds::new(42.4396, -76.4965, 42.4491, -76.4837).unwrap(),
    ///     transfer_count: 0,
    ///     legs: vec![walk],
    /// };
    ///
    /// let itinerary = Itinerary::build(raw, &DirectionsConfig::default());
    ///
    /// assert_eq!(itinerary.directions().len(), 2);
    /// assert_eq!(itinerary.directions()[0].name, "Arts Quad");
    /// assert_eq!(itinerary.total_duration_mins(), 17);
    /// assert!(itinerary.travel_distance() > 0.0);
    /// ```
    pub fn build(raw: RawItinerary, config: &DirectionsConfig) -> Self {
        let mut directions = normalize_legs(raw.legs, &raw.end_name, config);
        prepend_origin_walk(&mut directions, &raw.start_name);

        let mut itinerary = Itinerary {
            departure_time: raw.departure_time,
            arrival_time: raw.arrival_time,
            start_name: raw.start_name,
            end_name: raw.end_name,
            start_coords: raw.start_coords,
            end_coords: raw.end_coords,
            bounding_box: raw.bounding_box,
            transfer_count: raw.transfer_count,
            directions,
            travel_distance: 0.0,
        };
        itinerary.update_travel_distance();
        itinerary
    }

    /// Recompute `travel_distance` from the start coordinate to the
    /// distance anchor. Leaves it unchanged when there are no legs.
    pub fn update_travel_distance(&mut self) {
        if let Some(distance) = directions::travel_distance(&self.start_coords, &self.directions) {
            self.travel_distance = distance;
        }
    }

    /// Returns the time the journey begins.
    pub fn departure_time(&self) -> DateTime<Utc> {
        self.departure_time
    }

    /// Returns the time the journey ends.
    pub fn arrival_time(&self) -> DateTime<Utc> {
        self.arrival_time
    }

    /// Returns the start label (e.g. "Current Location", "Arts Quad").
    pub fn start_name(&self) -> &str {
        &self.start_name
    }

    /// Returns the destination label.
    pub fn end_name(&self) -> &str {
        &self.end_name
    }

    pub fn start_coords(&self) -> Coordinate {
        self.start_coords
    }

    pub fn end_coords(&self) -> Coordinate {
        self.end_coords
    }

    pub fn bounding_box(&self) -> Bounds {
        self.bounding_box
    }

    /// Smallest box around the start, the end and every path point.
    pub fn path_bounds(&self) -> Bounds {
        self.directions
            .iter()
            .flat_map(|leg| &leg.path)
            .chain([&self.end_coords])
            .fold(Bounds::around(self.start_coords), |bounds, point| {
                bounds.including(point)
            })
    }

    pub fn transfer_count(&self) -> u32 {
        self.transfer_count
    }

    /// Returns the finalized legs in order.
    pub fn directions(&self) -> &[Leg] {
        &self.directions
    }

    /// Returns the distance from the start to the first boarding point
    /// (or walk destination), in metres.
    pub fn travel_distance(&self) -> f64 {
        self.travel_distance
    }

    /// Returns the journey length in whole minutes (0 if the times are
    /// inconsistent).
    pub fn total_duration_mins(&self) -> i64 {
        directions::total_duration_mins(self.departure_time, self.arrival_time)
    }

    /// Returns how long until departure, measured from `now`.
    pub fn time_until_departure(&self, now: DateTime<Utc>) -> Duration {
        self.departure_time.signed_duration_since(now)
    }

    /// Returns true if every leg is a walk.
    pub fn is_walking_route(&self) -> bool {
        directions::is_walking_route(&self.directions)
    }

    /// Returns the first bus ride, if any.
    pub fn first_depart_leg(&self) -> Option<&Leg> {
        self.directions.iter().find(|l| l.kind == LegKind::Depart)
    }

    /// Returns the last synthesized arrival, if any.
    pub fn last_arrive_leg(&self) -> Option<&Leg> {
        self.directions.iter().rev().find(|l| l.kind == LegKind::Arrive)
    }

    /// Returns the number of walk legs, not counting the final leg.
    pub fn walk_line_count(&self) -> usize {
        let Some(last) = self.directions.len().checked_sub(1) else {
            return 0;
        };
        self.directions[..last].iter().filter(|l| l.is_walk()).count()
    }

    /// Returns the number of bus rides.
    pub fn bus_route_count(&self) -> usize {
        self.directions.iter().filter(|l| l.is_depart()).count()
    }

    /// Tag the path points of one leg.
    pub fn waypoints(&self, leg_index: usize, config: &DirectionsConfig) -> Vec<Waypoint> {
        directions::leg_waypoints(&self.directions, leg_index, config)
    }

    /// Tag the path points of every leg.
    pub fn paths(&self, config: &DirectionsConfig) -> Vec<LegPath> {
        directions::itinerary_paths(&self.directions, config)
    }

    /// One-sentence description for sharing.
    pub fn summary(&self, config: &DirectionsConfig) -> String {
        directions::summarize(&self.start_name, &self.end_name, &self.directions, config)
    }
}
