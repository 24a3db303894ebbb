//! Per-request search options
//!
//! Every request takes one of these structures explicitly. `Default` yields
//! the provider's documented defaults, and both structures can be loaded
//! from configuration.

use domain::{AvoidOption, CarFuel, CarType, RoadEventOption, RoutePriority};
use serde::{Deserialize, Serialize};

/// Largest radius the multi-origin endpoint accepts, in meters
pub const MAX_ORIGINS_RADIUS_METERS: u32 = 10_000;

/// Options for single-origin and multi-waypoint route searches
#[allow(clippy::struct_excessive_bools)] // Mirrors the provider's boolean flags
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RouteOptions {
    /// Search priority (default: `RECOMMEND`)
    pub priority: RoutePriority,
    /// Road kinds to avoid (default: none)
    pub avoid: Vec<AvoidOption>,
    /// Road closure policy (default: apply all)
    pub road_event: RoadEventOption,
    /// Return alternative routes
    pub alternatives: bool,
    /// Return detailed road information
    pub road_details: bool,
    /// Vehicle class (default: small)
    pub car_type: CarType,
    /// Vehicle fuel (default: gasoline)
    pub car_fuel: CarFuel,
    /// Vehicle carries a Hi-pass toll transponder
    pub car_hipass: bool,
    /// Return totals only; suppresses bounds, roads and guides
    pub summary: bool,
}

impl RouteOptions {
    /// Set the search priority
    #[must_use]
    pub const fn with_priority(mut self, priority: RoutePriority) -> Self {
        self.priority = priority;
        self
    }

    /// Set the road kinds to avoid
    #[must_use]
    pub fn with_avoid(mut self, avoid: impl Into<Vec<AvoidOption>>) -> Self {
        self.avoid = avoid.into();
        self
    }

    /// Set the road closure policy
    #[must_use]
    pub const fn with_road_event(mut self, road_event: RoadEventOption) -> Self {
        self.road_event = road_event;
        self
    }

    /// Request alternative routes
    #[must_use]
    pub const fn with_alternatives(mut self, alternatives: bool) -> Self {
        self.alternatives = alternatives;
        self
    }

    /// Request detailed road information
    #[must_use]
    pub const fn with_road_details(mut self, road_details: bool) -> Self {
        self.road_details = road_details;
        self
    }

    /// Set the vehicle class and fuel
    #[must_use]
    pub const fn with_car(mut self, car_type: CarType, car_fuel: CarFuel) -> Self {
        self.car_type = car_type;
        self.car_fuel = car_fuel;
        self
    }

    /// Declare a Hi-pass transponder
    #[must_use]
    pub const fn with_hipass(mut self, car_hipass: bool) -> Self {
        self.car_hipass = car_hipass;
        self
    }

    /// Request totals only
    #[must_use]
    pub const fn with_summary(mut self, summary: bool) -> Self {
        self.summary = summary;
        self
    }
}

/// Options for multi-origin route searches
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OriginsOptions {
    /// Search radius around the destination in meters
    /// (at most [`MAX_ORIGINS_RADIUS_METERS`], checked by the provider)
    pub radius: u32,
    /// Search priority (default: `TIME`; `RECOMMEND` is rejected locally)
    pub priority: RoutePriority,
    /// Road kinds to avoid (default: none)
    pub avoid: Vec<AvoidOption>,
    /// Road closure policy (default: apply all)
    pub road_event: RoadEventOption,
}

const fn default_radius() -> u32 {
    5_000
}

impl Default for OriginsOptions {
    fn default() -> Self {
        Self {
            radius: default_radius(),
            priority: RoutePriority::Time,
            avoid: Vec::new(),
            road_event: RoadEventOption::default(),
        }
    }
}

impl OriginsOptions {
    /// Create options with the given radius and otherwise default values
    #[must_use]
    pub fn with_radius(radius: u32) -> Self {
        Self {
            radius,
            ..Self::default()
        }
    }

    /// Set the search priority
    #[must_use]
    pub const fn with_priority(mut self, priority: RoutePriority) -> Self {
        self.priority = priority;
        self
    }

    /// Set the road kinds to avoid
    #[must_use]
    pub fn with_avoid(mut self, avoid: impl Into<Vec<AvoidOption>>) -> Self {
        self.avoid = avoid.into();
        self
    }

    /// Set the road closure policy
    #[must_use]
    pub const fn with_road_event(mut self, road_event: RoadEventOption) -> Self {
        self.road_event = road_event;
        self
    }

    /// Whether the radius exceeds what the provider accepts
    #[must_use]
    pub const fn radius_exceeds_limit(&self) -> bool {
        self.radius > MAX_ORIGINS_RADIUS_METERS
    }
}
