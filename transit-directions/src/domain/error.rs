//! Domain error types.
//!
//! These errors represent validation failures in the domain layer.
//! They are distinct from backend/IO errors.

/// Domain-level errors for validation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    /// Latitude or longitude outside the valid range (or not finite)
    #[error("invalid coordinate: ({lat}, {long})")]
    InvalidCoordinate { lat: f64, long: f64 },

    /// Bounding box with a minimum greater than its maximum
    #[error("invalid bounds: {0}")]
    InvalidBounds(&'static str),
}
