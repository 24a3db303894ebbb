//! Bounding box value object

use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box enclosing a route or section geometry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bound {
    /// Lower-left x (longitude)
    pub min_x: f64,
    /// Lower-left y (latitude)
    pub min_y: f64,
    /// Upper-right x (longitude)
    pub max_x: f64,
    /// Upper-right y (latitude)
    pub max_y: f64,
}

impl Bound {
    /// Create a bounding box from its corners
    #[must_use]
    pub const fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Horizontal extent in degrees
    #[must_use]
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Vertical extent in degrees
    #[must_use]
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Whether the point lies inside the box (edges inclusive)
    #[must_use]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        (self.min_x..=self.max_x).contains(&x) && (self.min_y..=self.max_y).contains(&y)
    }
}
