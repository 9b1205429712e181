//! Route backend response DTOs.
//!
//! These types map directly to the backend's JSON route documents. Times
//! are kept as strings here and parsed during conversion, so a bad
//! timestamp is reported with the field it came from.

use serde::Deserialize;

/// Top-level response from `GET /route`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteResponse {
    /// False when the backend could not plan a route.
    pub success: bool,

    /// Candidate routes, best first. Absent on failure.
    pub data: Option<Vec<RouteDocument>>,

    /// Human-readable failure description.
    pub error: Option<String>,
}

/// One candidate route.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteDocument {
    /// RFC 3339 departure time.
    pub departure_time: String,

    /// RFC 3339 arrival time.
    pub arrival_time: String,

    pub start_coords: CoordinateDocument,
    pub end_coords: CoordinateDocument,

    /// Backend's label for the origin, if it has one.
    pub start_name: Option<String>,

    /// Backend's label for the destination, if it has one.
    pub end_name: Option<String>,

    pub bounding_box: BoundsDocument,

    #[serde(default)]
    pub number_of_transfers: u32,

    pub directions: Vec<LegDocument>,
}

/// A single leg within a route.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegDocument {
    #[serde(rename = "type")]
    pub kind: LegType,

    pub name: String,

    pub start_location: LocationDocument,
    pub end_location: LocationDocument,

    pub start_time: String,
    pub end_time: String,

    #[serde(default)]
    pub path: Vec<CoordinateDocument>,

    /// Distance in miles.
    #[serde(default)]
    pub travel_distance: f64,

    /// 0 for walks.
    #[serde(default)]
    pub route_number: u32,

    #[serde(default)]
    pub stops: Vec<StopDocument>,

    #[serde(default)]
    pub stay_on_bus_for_transfer: bool,

    #[serde(default)]
    pub trip_identifiers: Vec<String>,

    /// Estimated delay in seconds.
    pub delay: Option<i64>,
}

/// Leg kind as sent on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LegType {
    Walk,
    Depart,
    Arrive,
    Transfer,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct CoordinateDocument {
    pub lat: f64,
    pub long: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LocationDocument {
    #[serde(default)]
    pub name: String,
    pub lat: f64,
    pub long: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StopDocument {
    pub name: String,
    pub lat: f64,
    pub long: f64,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundsDocument {
    pub min_lat: f64,
    pub min_long: f64,
    pub max_lat: f64,
    pub max_long: f64,
}
