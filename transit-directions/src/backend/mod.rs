//! Routing backend client.
//!
//! This module fetches route documents from the routing backend (or from
//! saved JSON files) and turns them into finalized itineraries.
//!
//! Key characteristics of the backend:
//! - Responses carry a `success` flag; failures have an `error` string
//!   and no `data`
//! - Times are RFC 3339 strings
//! - A bus ride is sent as a single `depart` leg; arrival legs are
//!   synthesized locally during normalization

mod client;
mod convert;
mod error;
mod mock;
mod types;

pub use client::{BackendConfig, RouteClient, RouteQuery};
pub use convert::{ConversionError, convert_leg, convert_response, convert_route, parse_response};
pub use error::RouteError;
pub use mock::MockRouteClient;
pub use types::{
    BoundsDocument, CoordinateDocument, LegDocument, LegType, LocationDocument, RouteDocument,
    RouteResponse, StopDocument,
};
