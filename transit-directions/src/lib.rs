//! Transit directions.
//!
//! Turns routing-backend route documents into presentation-ready
//! itineraries: bus rides get explicit arrival steps, stay-aboard transfers
//! are marked, walk-only routes get an origin leg, and every path point is
//! tagged with its map role.

pub mod backend;
pub mod cache;
pub mod directions;
pub mod domain;
