//! Conversion from route DTOs to domain types.
//!
//! This module turns raw backend documents into validated domain values and
//! then finalizes each route into an `Itinerary`. A single bad route rejects
//! the whole document.

use chrono::{DateTime, Duration, Utc};
use tracing::debug;

use crate::directions::DirectionsConfig;
use crate::domain::{
    Bounds, Coordinate, DomainError, Itinerary, Leg, LegKind, Location, RawItinerary, Stop,
};

use super::error::RouteError;
use super::types::{
    BoundsDocument, CoordinateDocument, LegDocument, LegType, RouteDocument, RouteResponse,
};

/// Error during DTO to domain conversion.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConversionError {
    /// Failed to parse a timestamp
    #[error("invalid time in {field}: {value}")]
    InvalidTime { field: &'static str, value: String },

    /// Latitude or longitude out of range
    #[error("invalid coordinate: ({lat}, {long})")]
    InvalidCoordinate { lat: f64, long: f64 },

    /// Bounding box with min greater than max
    #[error("invalid bounding box: {0}")]
    InvalidBounds(&'static str),

    /// Delay too large to represent as a duration
    #[error("invalid delay: {0} seconds")]
    InvalidDelay(i64),

    /// Missing required field
    #[error("missing required field: {0}")]
    MissingField(&'static str),
}

/// Parse a route response body and finalize every route in it.
///
/// `start_name` and `end_name` override the document's own labels.
pub fn parse_response(
    body: &str,
    start_name: Option<&str>,
    end_name: Option<&str>,
    config: &DirectionsConfig,
) -> Result<Vec<Itinerary>, RouteError> {
    let response: RouteResponse =
        serde_json::from_str(body).map_err(|e| RouteError::malformed(e, Some(body)))?;

    convert_response(&response, start_name, end_name, config)
}

/// Finalize every route in an already-deserialized response.
pub fn convert_response(
    response: &RouteResponse,
    start_name: Option<&str>,
    end_name: Option<&str>,
    config: &DirectionsConfig,
) -> Result<Vec<Itinerary>, RouteError> {
    if !response.success {
        let message = response
            .error
            .clone()
            .unwrap_or_else(|| "unknown error".to_string());
        return Err(RouteError::Backend(message));
    }

    let routes = response
        .data
        .as_deref()
        .ok_or(ConversionError::MissingField("data"))
        .map_err(|e| RouteError::malformed(e, None))?;

    routes
        .iter()
        .enumerate()
        .map(|(index, route)| {
            let raw = convert_route(route, start_name, end_name, config).map_err(|e| {
                RouteError::malformed(format!("route {index}: {e}"), None)
            })?;
            debug!(
                index,
                legs = raw.legs.len(),
                transfers = raw.transfer_count,
                "converted route"
            );
            Ok(Itinerary::build(raw, config))
        })
        .collect()
}

/// Convert a single route document to a raw itinerary.
///
/// Names resolve as: caller override, then document value, then the
/// configured default label.
pub fn convert_route(
    route: &RouteDocument,
    start_name: Option<&str>,
    end_name: Option<&str>,
    config: &DirectionsConfig,
) -> Result<RawItinerary, ConversionError> {
    let start_name = start_name
        .or(route.start_name.as_deref())
        .unwrap_or(&config.current_location_label)
        .to_string();
    let end_name = end_name
        .or(route.end_name.as_deref())
        .unwrap_or(&config.destination_label)
        .to_string();

    let legs = route
        .directions
        .iter()
        .map(convert_leg)
        .collect::<Result<Vec<_>, _>>()?;

    let start_coords = convert_coordinate(&route.start_coords)?;
    let end_coords = convert_coordinate(&route.end_coords)?;
    let mut bounding_box = convert_bounds(&route.bounding_box)?;
    for endpoint in [&start_coords, &end_coords] {
        if !bounding_box.contains(endpoint) {
            debug!(%endpoint, "bounding box misses route endpoint, widening");
            bounding_box = bounding_box.including(endpoint);
        }
    }

    Ok(RawItinerary {
        departure_time: parse_time("departureTime", &route.departure_time)?,
        arrival_time: parse_time("arrivalTime", &route.arrival_time)?,
        start_name,
        end_name,
        start_coords,
        end_coords,
        bounding_box,
        transfer_count: route.number_of_transfers,
        legs,
    })
}

/// Convert a single leg document.
pub fn convert_leg(leg: &LegDocument) -> Result<Leg, ConversionError> {
    let start = Location::new(
        leg.start_location.name.clone(),
        coordinate(leg.start_location.lat, leg.start_location.long)?,
    );
    let end = Location::new(
        leg.end_location.name.clone(),
        coordinate(leg.end_location.lat, leg.end_location.long)?,
    );

    let path = leg
        .path
        .iter()
        .map(convert_coordinate)
        .collect::<Result<Vec<_>, _>>()?;

    let stops = leg
        .stops
        .iter()
        .map(|s| coordinate(s.lat, s.long).map(|c| Stop::new(s.name.clone(), c)))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Leg {
        kind: convert_kind(leg.kind),
        name: leg.name.clone(),
        start,
        end,
        start_time: parse_time("startTime", &leg.start_time)?,
        end_time: parse_time("endTime", &leg.end_time)?,
        path,
        travel_distance: leg.travel_distance,
        route_number: leg.route_number,
        stops,
        stay_on_bus_for_transfer: leg.stay_on_bus_for_transfer,
        trip_identifiers: leg.trip_identifiers.clone(),
        delay: leg.delay.map(convert_delay).transpose()?,
    })
}

fn convert_kind(kind: LegType) -> LegKind {
    match kind {
        LegType::Walk => LegKind::Walk,
        LegType::Depart => LegKind::Depart,
        LegType::Arrive => LegKind::Arrive,
        LegType::Transfer => LegKind::Transfer,
    }
}

fn convert_delay(secs: i64) -> Result<Duration, ConversionError> {
    Duration::try_seconds(secs).ok_or(ConversionError::InvalidDelay(secs))
}

fn parse_time(field: &'static str, value: &str) -> Result<DateTime<Utc>, ConversionError> {
    DateTime::parse_from_rfc3339(value)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|_| ConversionError::InvalidTime {
            field,
            value: value.to_string(),
        })
}

fn coordinate(lat: f64, long: f64) -> Result<Coordinate, ConversionError> {
    Coordinate::new(lat, long).map_err(|_| ConversionError::InvalidCoordinate { lat, long })
}

fn convert_coordinate(doc: &CoordinateDocument) -> Result<Coordinate, ConversionError> {
    coordinate(doc.lat, doc.long)
}

fn convert_bounds(doc: &BoundsDocument) -> Result<Bounds, ConversionError> {
    Bounds::new(doc.min_lat, doc.min_long, doc.max_lat, doc.max_long).map_err(|e| match e {
        DomainError::InvalidBounds(reason) => ConversionError::InvalidBounds(reason),
        DomainError::InvalidCoordinate { lat, long } => {
            ConversionError::InvalidCoordinate { lat, long }
        }
    })
}
