//! Geographic value types.
//!
//! Coordinates are validated on construction; code that receives a
//! `Coordinate` or `Bounds` can trust that it lies on the globe.

use std::fmt;

use geo::{Distance, Haversine, Point};

use super::DomainError;

/// A latitude/longitude pair, in degrees.
///
/// # Invariants
///
/// - `-90 <= lat <= 90`
/// - `-180 <= long <= 180`
/// - Both components are finite
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    lat: f64,
    long: f64,
}

impl Coordinate {
    /// Construct a coordinate, validating its range.
    ///
    /// # Examples
    ///
    /// ```
    /// use transit_directions::domain::Coordinate;
    ///
    /// let arts_quad = Coordinate::new(42.4491, -76.4837).unwrap();
    /// assert_eq!(arts_quad.lat(), 42.4491);
    ///
    /// assert!(Coordinate::new(91.0, 0.0).is_err());
    /// assert!(Coordinate::new(0.0, f64::NAN).is_err());
    /// ```
    pub fn new(lat: f64, long: f64) -> Result<Self, DomainError> {
        let valid = lat.is_finite()
            && long.is_finite()
            && (-90.0..=90.0).contains(&lat)
            && (-180.0..=180.0).contains(&long);
        if !valid {
            return Err(DomainError::InvalidCoordinate { lat, long });
        }
        Ok(Self { lat, long })
    }

    /// Returns the latitude in degrees.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Returns the longitude in degrees.
    pub fn long(&self) -> f64 {
        self.long
    }

    /// Great-circle distance to another coordinate, in metres.
    pub fn distance_to(&self, other: &Coordinate) -> f64 {
        Haversine.distance(self.to_point(), other.to_point())
    }

    fn to_point(self) -> Point<f64> {
        Point::new(self.long, self.lat)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.long)
    }
}

/// A named place: a coordinate plus its display name.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    /// Display name (may be empty when the backend omits it)
    pub name: String,
    /// Position
    pub coordinate: Coordinate,
}

impl Location {
    pub fn new(name: impl Into<String>, coordinate: Coordinate) -> Self {
        Self {
            name: name.into(),
            coordinate,
        }
    }
}

/// An intermediate bus stop on a transit leg.
#[derive(Debug, Clone, PartialEq)]
pub struct Stop {
    pub name: String,
    pub coordinate: Coordinate,
}

impl Stop {
    pub fn new(name: impl Into<String>, coordinate: Coordinate) -> Self {
        Self {
            name: name.into(),
            coordinate,
        }
    }
}

/// Axis-aligned latitude/longitude box enclosing a route.
///
/// # Invariants
///
/// - `min_lat <= max_lat`
/// - `min_long <= max_long`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    min_lat: f64,
    min_long: f64,
    max_lat: f64,
    max_long: f64,
}

impl Bounds {
    /// Construct a bounding box, validating that each minimum does not
    /// exceed its maximum.
    pub fn new(
        min_lat: f64,
        min_long: f64,
        max_lat: f64,
        max_long: f64,
    ) -> Result<Self, DomainError> {
        // Negated comparisons also reject NaN
        if !(min_lat <= max_lat) {
            return Err(DomainError::InvalidBounds(
                "min_lat must not exceed max_lat",
            ));
        }
        if !(min_long <= max_long) {
            return Err(DomainError::InvalidBounds(
                "min_long must not exceed max_long",
            ));
        }
        Ok(Self {
            min_lat,
            min_long,
            max_lat,
            max_long,
        })
    }

    /// A zero-area box around a single coordinate.
    pub fn around(coordinate: Coordinate) -> Self {
        Self {
            min_lat: coordinate.lat(),
            min_long: coordinate.long(),
            max_lat: coordinate.lat(),
            max_long: coordinate.long(),
        }
    }

    pub fn min_lat(&self) -> f64 {
        self.min_lat
    }

    pub fn min_long(&self) -> f64 {
        self.min_long
    }

    pub fn max_lat(&self) -> f64 {
        self.max_lat
    }

    pub fn max_long(&self) -> f64 {
        self.max_long
    }

    /// Returns true if the coordinate lies inside the box (edges inclusive).
    pub fn contains(&self, coordinate: &Coordinate) -> bool {
        (self.min_lat..=self.max_lat).contains(&coordinate.lat())
            && (self.min_long..=self.max_long).contains(&coordinate.long())
    }

    /// Returns the smallest box containing both `self` and the coordinate.
    pub fn including(&self, coordinate: &Coordinate) -> Self {
        Self {
            min_lat: self.min_lat.min(coordinate.lat()),
            min_long: self.min_long.min(coordinate.long()),
            max_lat: self.max_lat.max(coordinate.lat()),
            max_long: self.max_long.max(coordinate.long()),
        }
    }
}
