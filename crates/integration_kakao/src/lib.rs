//! Kakao Mobility directions integration
//!
//! Typed client for the [Kakao Mobility navigation API](https://developers.kakaomobility.com/docs/navi-api/start/):
//! single-origin routing (`GET /v1/directions`), multi-waypoint routing
//! (`POST /v1/waypoints/directions`) and multi-origin routing
//! (`POST /v1/origins/directions`).
//!
//! # Architecture
//!
//! [`RequestEncoder`] turns typed inputs into a [`PreparedRequest`] without
//! any I/O. [`KakaoDirectionsClient`] implements [`DirectionsClient`] by
//! sending prepared requests and decoding 200 responses strictly through
//! [`decode`]. Every call returns an [`ApiReply`]: a non-200 status is a
//! normal outcome, not an error.
//!
//! # Example
//!
//! ```rust,ignore
//! use domain::Position;
//! use integration_kakao::{DirectionsClient, DirectionsConfig, KakaoDirectionsClient, RouteOptions};
//!
//! let config = DirectionsConfig::load()?;
//! let client = KakaoDirectionsClient::new(&config)?;
//!
//! let reply = client
//!     .directions(
//!         &Position::named("City Hall", 126.9781542, 37.5668601),
//!         &Position::new(126.9798640, 37.5643917),
//!         &[],
//!         &RouteOptions::default(),
//!     )
//!     .await?;
//!
//! match reply.into_parts() {
//!     (Some(response), _) => println!("{} route(s)", response.routes.len()),
//!     (None, status) => println!("provider answered {status}"),
//! }
//! ```

mod client;
mod config;
pub mod decode;
mod error;
mod models;
mod options;
mod request;

pub use client::{ApiReply, DirectionsClient, KakaoDirectionsClient};
pub use config::{CONFIG_FILE, DirectionsConfig, ENV_PREFIX};
pub use error::{DirectionsError, InternalError};
pub use models::{
    DirectionResponse, Fare, Guide, MultiDirectionResponse, OriginRoute, OriginSummary, Point,
    Road, Route, Section, Summary,
};
pub use options::{MAX_ORIGINS_RADIUS_METERS, OriginsOptions, RouteOptions};
pub use request::{
    DIRECTIONS_PATH, ORIGINS_PATH, PreparedRequest, RequestEncoder, WAYPOINTS_PATH,
};
