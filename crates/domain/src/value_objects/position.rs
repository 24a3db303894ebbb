//! Route endpoint value objects
//!
//! Coordinates follow the provider convention: `x` is the longitude and `y`
//! is the latitude.
//!
//! # Examples
//!
//! ```
//! use domain::value_objects::Position;
//!
//! let city_hall = Position::named("City Hall", 126.9781542, 37.5668601);
//! assert_eq!(city_hall.longitude(), 126.9781542);
//! assert_eq!(city_hall.query_token(), "126.9781542,37.5668601,name=City Hall");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// An origin, destination or waypoint with an optional display name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// Longitude
    x: f64,
    /// Latitude
    y: f64,
    /// Display name echoed back by the provider
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
}

impl Position {
    /// Create an unnamed position from `x` (longitude) and `y` (latitude)
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y, name: None }
    }

    /// Create a named position
    #[must_use]
    pub fn named(name: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            name: Some(name.into()),
        }
    }

    /// Create an unnamed position from longitude/latitude
    #[must_use]
    pub const fn from_lon_lat(longitude: f64, latitude: f64) -> Self {
        Self::new(longitude, latitude)
    }

    /// Attach a display name
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Display name, if any
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// X coordinate (longitude)
    #[must_use]
    pub const fn x(&self) -> f64 {
        self.x
    }

    /// Y coordinate (latitude)
    #[must_use]
    pub const fn y(&self) -> f64 {
        self.y
    }

    /// Longitude (same as `x`)
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.x
    }

    /// Latitude (same as `y`)
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.y
    }

    /// Whether both coordinates have a textual wire representation
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Query-string token: `x,y` or `x,y,name=NAME`
    ///
    /// The token is not percent-encoded; that is left to the query builder.
    /// A `,` or `|` inside the name survives encoding but is ambiguous to
    /// the provider once decoded.
    #[must_use]
    pub fn query_token(&self) -> String {
        match &self.name {
            Some(name) => format!("{},{},name={name}", self.x, self.y),
            None => format!("{},{}", self.x, self.y),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{name} ({:.6}, {:.6})", self.x, self.y),
            None => write!(f, "({:.6}, {:.6})", self.x, self.y),
        }
    }
}

/// An origin identified by a caller-chosen key, used for multi-origin routing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionWithKey {
    x: f64,
    y: f64,
    key: String,
}

impl PositionWithKey {
    /// Create a keyed position from `x` (longitude) and `y` (latitude)
    #[must_use]
    pub fn new(key: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            key: key.into(),
        }
    }

    /// Create a keyed position from longitude/latitude
    #[must_use]
    pub fn from_lon_lat(key: impl Into<String>, longitude: f64, latitude: f64) -> Self {
        Self::new(key, longitude, latitude)
    }

    /// Key that identifies this origin in the response
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// X coordinate (longitude)
    #[must_use]
    pub const fn x(&self) -> f64 {
        self.x
    }

    /// Y coordinate (latitude)
    #[must_use]
    pub const fn y(&self) -> f64 {
        self.y
    }

    /// Longitude (same as `x`)
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.x
    }

    /// Latitude (same as `y`)
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.y
    }

    /// Whether both coordinates have a textual wire representation
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl fmt::Display for PositionWithKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.6}, {:.6})", self.key, self.x, self.y)
    }
}
