//! Domain types for transit directions.
//!
//! This module contains the core model: coordinates, places, legs and
//! itineraries. Value types enforce their invariants at construction time,
//! so code that receives them can trust their validity.

mod error;
mod itinerary;
mod leg;
mod place;

pub use error::DomainError;
pub use itinerary::{Itinerary, RawItinerary};
pub use leg::{Leg, LegKind};
pub use place::{Bounds, Coordinate, Location, Stop};
