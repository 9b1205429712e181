//! Itinerary post-processing.
//!
//! Turns the raw legs returned by the routing backend into a
//! presentation-ready itinerary. Stages run in a fixed order:
//!
//! 1. [`normalize_legs`] synthesizes arrival legs, reclassifies transfer
//!    rides and trims boundary stops.
//! 2. [`prepend_origin_walk`] gives walk-only routes a leg named after the
//!    start label.
//! 3. [`travel_distance`], [`itinerary_paths`] and [`summarize`] derive
//!    metrics, tagged waypoints and share text.
//!
//! Every stage is a pure, synchronous transformation with no error paths.

mod config;
mod fallback;
mod metrics;
mod normalize;
mod summary;
mod waypoints;

#[cfg(test)]
pub(crate) mod fixtures;

pub use config::{CURRENT_LOCATION, DESTINATION, DirectionsConfig, MISSING_STOP_NAME};
pub use fallback::prepend_origin_walk;
pub use metrics::{distance_anchor, is_walking_route, total_duration_mins, travel_distance};
pub use normalize::normalize_legs;
pub use summary::{format_distance, summarize};
pub use waypoints::{
    LegPath, PathStyle, Waypoint, WaypointKind, itinerary_paths, leg_waypoints,
};
