//! Request encoding for the three directions endpoints
//!
//! Encoding is pure: it produces a [`PreparedRequest`] and never touches the
//! network, so every local failure happens before any I/O.

use domain::{AvoidOption, CarFuel, CarType, Position, PositionWithKey, RoadEventOption, RoutePriority};
use reqwest::Method;
use serde::Serialize;
use tracing::warn;
use url::Url;

use crate::error::DirectionsError;
use crate::options::{MAX_ORIGINS_RADIUS_METERS, OriginsOptions, RouteOptions};

/// Path of the single-origin GET endpoint
pub const DIRECTIONS_PATH: &str = "/v1/directions";
/// Path of the multi-waypoint POST endpoint
pub const WAYPOINTS_PATH: &str = "/v1/waypoints/directions";
/// Path of the multi-origin POST endpoint
pub const ORIGINS_PATH: &str = "/v1/origins/directions";

/// A fully encoded request, ready to hand to the HTTP transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedRequest {
    /// HTTP method
    pub method: Method,
    /// Target address including any query string
    pub url: Url,
    /// JSON body for POST endpoints
    pub body: Option<Vec<u8>>,
}

/// Builds [`PreparedRequest`]s against a fixed base URL
#[derive(Debug, Clone)]
pub struct RequestEncoder {
    base_url: Url,
}

impl RequestEncoder {
    /// Create an encoder for the given base URL
    #[must_use]
    pub const fn new(base_url: Url) -> Self {
        Self { base_url }
    }

    /// Base URL requests are resolved against
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Encode a single-origin GET request
    ///
    /// Query parameters are emitted in a fixed order; `waypoints` and
    /// `avoid` are omitted when empty.
    ///
    /// # Errors
    ///
    /// Returns an internal error if a coordinate is not finite or the
    /// address cannot be formed.
    pub fn directions(
        &self,
        origin: &Position,
        destination: &Position,
        waypoints: &[Position],
        options: &RouteOptions,
    ) -> Result<PreparedRequest, DirectionsError> {
        ensure_finite("origin", origin)?;
        ensure_finite("destination", destination)?;
        for waypoint in waypoints {
            ensure_finite("waypoint", waypoint)?;
        }

        let mut url = self.endpoint(DIRECTIONS_PATH)?;
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("origin", &origin.query_token());
            query.append_pair("destination", &destination.query_token());
            if !waypoints.is_empty() {
                let joined = waypoints
                    .iter()
                    .map(Position::query_token)
                    .collect::<Vec<_>>()
                    .join("|");
                query.append_pair("waypoints", &joined);
            }
            query.append_pair("priority", options.priority.as_str());
            if !options.avoid.is_empty() {
                query.append_pair("avoid", &AvoidOption::join(&options.avoid));
            }
            query.append_pair("roadevent", &options.road_event.code().to_string());
            query.append_pair("alternatives", bool_str(options.alternatives));
            query.append_pair("road_details", bool_str(options.road_details));
            query.append_pair("car_type", &options.car_type.code().to_string());
            query.append_pair("car_fuel", options.car_fuel.as_str());
            query.append_pair("car_hipass", bool_str(options.car_hipass));
            query.append_pair("summary", bool_str(options.summary));
        }

        Ok(PreparedRequest {
            method: Method::GET,
            url,
            body: None,
        })
    }

    /// Encode a multi-waypoint POST request
    ///
    /// # Errors
    ///
    /// Returns an internal error if a coordinate is not finite or the body
    /// cannot be serialized.
    pub fn waypoints_directions(
        &self,
        origin: &Position,
        destination: &Position,
        waypoints: &[Position],
        options: &RouteOptions,
    ) -> Result<PreparedRequest, DirectionsError> {
        ensure_finite("origin", origin)?;
        ensure_finite("destination", destination)?;
        for waypoint in waypoints {
            ensure_finite("waypoint", waypoint)?;
        }

        let body = WaypointsBody {
            origin,
            destination,
            waypoints,
            priority: options.priority,
            avoid: &options.avoid,
            roadevent: options.road_event,
            alternatives: options.alternatives,
            road_details: options.road_details,
            car_type: options.car_type,
            car_fuel: options.car_fuel,
            car_hipass: options.car_hipass,
            summary: options.summary,
        };

        Ok(PreparedRequest {
            method: Method::POST,
            url: self.endpoint(WAYPOINTS_PATH)?,
            body: Some(to_body(&body)?),
        })
    }

    /// Encode a multi-origin POST request
    ///
    /// The radius limit of [`MAX_ORIGINS_RADIUS_METERS`] is enforced by the
    /// provider; exceeding it is only logged here.
    ///
    /// # Errors
    ///
    /// Returns [`DirectionsError::InvalidArguments`] for an empty origin list
    /// or the `RECOMMEND` priority, and an internal error if a coordinate is
    /// not finite.
    pub fn origins_directions(
        &self,
        origins: &[PositionWithKey],
        destination: &Position,
        options: &OriginsOptions,
    ) -> Result<PreparedRequest, DirectionsError> {
        if !options.priority.allowed_for_origins() {
            return Err(DirectionsError::InvalidArguments(format!(
                "priority {} is not accepted for multi-origin requests",
                options.priority
            )));
        }

        if origins.is_empty() {
            return Err(DirectionsError::InvalidArguments(
                "at least one origin is required".to_string(),
            ));
        }

        for origin in origins {
            if !origin.is_finite() {
                return Err(DirectionsError::invalid_request(format!(
                    "origin {} has a non-finite coordinate",
                    origin.key()
                )));
            }
        }
        ensure_finite("destination", destination)?;

        if options.radius_exceeds_limit() {
            warn!(
                radius = options.radius,
                max = MAX_ORIGINS_RADIUS_METERS,
                "Radius exceeds the provider limit"
            );
        }

        let body = OriginsBody {
            origins,
            destination,
            radius: options.radius,
            priority: options.priority,
            avoid: &options.avoid,
            roadevent: options.road_event,
        };

        Ok(PreparedRequest {
            method: Method::POST,
            url: self.endpoint(ORIGINS_PATH)?,
            body: Some(to_body(&body)?),
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url, DirectionsError> {
        self.base_url
            .join(path)
            .map_err(|e| DirectionsError::invalid_request(format!("cannot form {path}: {e}")))
    }
}

fn ensure_finite(role: &str, position: &Position) -> Result<(), DirectionsError> {
    if position.is_finite() {
        Ok(())
    } else {
        Err(DirectionsError::invalid_request(format!(
            "{role} has a non-finite coordinate"
        )))
    }
}

fn to_body<T: Serialize>(body: &T) -> Result<Vec<u8>, DirectionsError> {
    serde_json::to_vec(body)
        .map_err(|e| DirectionsError::invalid_request(format!("cannot serialize body: {e}")))
}

/// Convert bool to "true"/"false" str for query params
const fn bool_str(val: bool) -> &'static str {
    if val { "true" } else { "false" }
}

// --- JSON request bodies ---

#[derive(Debug, Serialize)]
struct WaypointsBody<'a> {
    origin: &'a Position,
    destination: &'a Position,
    #[serde(skip_serializing_if = "<[Position]>::is_empty")]
    waypoints: &'a [Position],
    priority: RoutePriority,
    #[serde(skip_serializing_if = "<[AvoidOption]>::is_empty")]
    avoid: &'a [AvoidOption],
    roadevent: RoadEventOption,
    alternatives: bool,
    road_details: bool,
    car_type: CarType,
    car_fuel: CarFuel,
    car_hipass: bool,
    summary: bool,
}

#[derive(Debug, Serialize)]
struct OriginsBody<'a> {
    origins: &'a [PositionWithKey],
    destination: &'a Position,
    radius: u32,
    priority: RoutePriority,
    #[serde(skip_serializing_if = "<[AvoidOption]>::is_empty")]
    avoid: &'a [AvoidOption],
    roadevent: RoadEventOption,
}
