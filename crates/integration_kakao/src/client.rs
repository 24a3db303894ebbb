//! Kakao Mobility directions client
//!
//! Issues requests built by [`RequestEncoder`] over a shared `reqwest`
//! client and decodes 200 responses. Any other status is returned to the
//! caller without decoding.

use std::time::Duration;

use async_trait::async_trait;
use domain::{Position, PositionWithKey};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client, StatusCode};
use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};

use crate::config::DirectionsConfig;
use crate::decode::decode_body;
use crate::error::{DirectionsError, InternalError};
use crate::models::{DirectionResponse, MultiDirectionResponse};
use crate::options::{OriginsOptions, RouteOptions};
use crate::request::{PreparedRequest, RequestEncoder};

/// Outcome of a call that reached the provider
///
/// `result` is present if and only if the status was 200 and the body
/// decoded successfully.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiReply<T> {
    /// Decoded response body
    pub result: Option<T>,
    /// HTTP status code returned by the provider
    pub status_code: u16,
}

impl<T> ApiReply<T> {
    /// Reply for a decoded 200 response
    #[must_use]
    pub const fn ok(result: T) -> Self {
        Self {
            result: Some(result),
            status_code: 200,
        }
    }

    /// Reply for a non-200 status
    #[must_use]
    pub const fn status(status_code: u16) -> Self {
        Self {
            result: None,
            status_code,
        }
    }

    /// Whether the reply carries a result
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.result.is_some()
    }

    /// Split into `(result, status_code)`
    pub fn into_parts(self) -> (Option<T>, u16) {
        (self.result, self.status_code)
    }
}

/// Trait for directions clients
#[async_trait]
pub trait DirectionsClient: Send + Sync {
    /// Route from `origin` to `destination` through up to five `waypoints`
    /// using the GET endpoint
    async fn directions(
        &self,
        origin: &Position,
        destination: &Position,
        waypoints: &[Position],
        options: &RouteOptions,
    ) -> Result<ApiReply<DirectionResponse>, DirectionsError>;

    /// Route through many waypoints using the POST endpoint
    async fn waypoints_directions(
        &self,
        origin: &Position,
        destination: &Position,
        waypoints: &[Position],
        options: &RouteOptions,
    ) -> Result<ApiReply<DirectionResponse>, DirectionsError>;

    /// Route from each keyed origin to a single destination
    async fn origins_directions(
        &self,
        origins: &[PositionWithKey],
        destination: &Position,
        options: &OriginsOptions,
    ) -> Result<ApiReply<MultiDirectionResponse>, DirectionsError>;
}

/// Directions client for the Kakao Mobility navigation API
///
/// Holds no mutable state; one instance can serve concurrent calls.
#[derive(Debug, Clone)]
pub struct KakaoDirectionsClient {
    client: Client,
    encoder: RequestEncoder,
    config: DirectionsConfig,
}

impl KakaoDirectionsClient {
    /// Create a new directions client
    ///
    /// # Errors
    ///
    /// Returns [`DirectionsError::InvalidApiKey`] if the key is empty, has
    /// surrounding whitespace or cannot be sent as a header, and an internal error if the base URL is
    /// invalid or the HTTP client cannot be initialized.
    pub fn new(config: &DirectionsConfig) -> Result<Self, DirectionsError> {
        let base_url = config
            .parsed_base_url()
            .map_err(DirectionsError::invalid_request)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_str())
            .default_headers(Self::default_headers(config)?)
            .build()
            .map_err(InternalError::Transport)?;

        Ok(Self {
            client,
            encoder: RequestEncoder::new(base_url),
            config: config.clone(),
        })
    }

    /// The configuration this client was built with
    #[must_use]
    pub const fn config(&self) -> &DirectionsConfig {
        &self.config
    }

    /// The encoder used to build requests
    #[must_use]
    pub const fn encoder(&self) -> &RequestEncoder {
        &self.encoder
    }

    /// Route with the configured default [`RouteOptions`]
    ///
    /// # Errors
    ///
    /// See [`DirectionsClient::directions`].
    pub async fn directions_with_defaults(
        &self,
        origin: &Position,
        destination: &Position,
        waypoints: &[Position],
    ) -> Result<ApiReply<DirectionResponse>, DirectionsError> {
        self.directions(origin, destination, waypoints, &self.config.route_defaults)
            .await
    }

    /// Multi-origin route with the configured default [`OriginsOptions`]
    ///
    /// # Errors
    ///
    /// See [`DirectionsClient::origins_directions`].
    pub async fn origins_directions_with_defaults(
        &self,
        origins: &[PositionWithKey],
        destination: &Position,
    ) -> Result<ApiReply<MultiDirectionResponse>, DirectionsError> {
        self.origins_directions(origins, destination, &self.config.origins_defaults)
            .await
    }

    fn default_headers(config: &DirectionsConfig) -> Result<HeaderMap, DirectionsError> {
        let key = config.api_key.expose_secret();
        if key.is_empty() {
            return Err(DirectionsError::InvalidApiKey(
                "API key must not be empty".to_string(),
            ));
        }
        if key.trim() != key {
            return Err(DirectionsError::InvalidApiKey(
                "API key must not have leading or trailing whitespace".to_string(),
            ));
        }

        let mut auth = HeaderValue::from_str(&format!("KakaoAK {key}")).map_err(|_| {
            DirectionsError::InvalidApiKey("API key contains invalid header characters".to_string())
        })?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        Ok(headers)
    }

    /// Send a prepared request and decode a 200 body into `T`
    async fn execute<T: DeserializeOwned>(
        &self,
        request: PreparedRequest,
    ) -> Result<ApiReply<T>, DirectionsError> {
        let PreparedRequest { method, url, body } = request;

        debug!(%method, path = url.path(), "Sending directions request");

        let mut builder = self.client.request(method, url);
        if let Some(body) = body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(|e| {
            warn!(error = %e, "Directions request failed");
            InternalError::Transport(e)
        })?;

        let status = response.status();
        if status != StatusCode::OK {
            debug!(status = status.as_u16(), "Directions request returned non-200 status");
            return Ok(ApiReply::status(status.as_u16()));
        }

        let body = response.bytes().await.map_err(InternalError::Transport)?;

        let result = decode_body::<T>(&body).inspect_err(|e| {
            warn!(error = %e, "Failed to decode directions response");
        })?;

        Ok(ApiReply::ok(result))
    }
}

#[async_trait]
impl DirectionsClient for KakaoDirectionsClient {
    #[instrument(skip_all, fields(waypoints = waypoints.len(), priority = %options.priority))]
    async fn directions(
        &self,
        origin: &Position,
        destination: &Position,
        waypoints: &[Position],
        options: &RouteOptions,
    ) -> Result<ApiReply<DirectionResponse>, DirectionsError> {
        let request = self
            .encoder
            .directions(origin, destination, waypoints, options)?;
        let reply = self.execute::<DirectionResponse>(request).await?;

        if let Some(ref response) = reply.result {
            debug!(
                trans_id = %response.trans_id,
                routes = response.routes.len(),
                "Directions found"
            );
        }
        Ok(reply)
    }

    #[instrument(skip_all, fields(waypoints = waypoints.len(), priority = %options.priority))]
    async fn waypoints_directions(
        &self,
        origin: &Position,
        destination: &Position,
        waypoints: &[Position],
        options: &RouteOptions,
    ) -> Result<ApiReply<DirectionResponse>, DirectionsError> {
        let request = self
            .encoder
            .waypoints_directions(origin, destination, waypoints, options)?;
        let reply = self.execute::<DirectionResponse>(request).await?;

        if let Some(ref response) = reply.result {
            debug!(
                trans_id = %response.trans_id,
                routes = response.routes.len(),
                "Waypoint directions found"
            );
        }
        Ok(reply)
    }

    #[instrument(skip_all, fields(origins = origins.len(), radius = options.radius))]
    async fn origins_directions(
        &self,
        origins: &[PositionWithKey],
        destination: &Position,
        options: &OriginsOptions,
    ) -> Result<ApiReply<MultiDirectionResponse>, DirectionsError> {
        let request = self
            .encoder
            .origins_directions(origins, destination, options)?;
        let reply = self.execute::<MultiDirectionResponse>(request).await?;

        if let Some(ref response) = reply.result {
            debug!(
                trans_id = %response.trans_id,
                routes = response.routes.len(),
                "Multi-origin directions found"
            );
        }
        Ok(reply)
    }
}
