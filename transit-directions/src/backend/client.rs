//! Route backend HTTP client.
//!
//! Queries the routing backend for candidate itineraries between two
//! coordinates and finalizes every returned route.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::Semaphore;
use tracing::{debug, warn};

use crate::directions::DirectionsConfig;
use crate::domain::{Coordinate, Itinerary};

use super::convert::parse_response;
use super::error::RouteError;

/// Default base URL for the routing backend.
const DEFAULT_BASE_URL: &str = "http://localhost:3000/api/v1";

/// Default maximum concurrent requests.
const DEFAULT_MAX_CONCURRENT: usize = 5;

/// Configuration for the route client.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    /// Base URL for the API
    pub base_url: String,
    /// Maximum concurrent requests
    pub max_concurrent: usize,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            max_concurrent: DEFAULT_MAX_CONCURRENT,
            timeout_secs: 30,
        }
    }
}

impl BackendConfig {
    /// Create a config pointing at the given backend.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Set maximum concurrent requests.
    pub fn with_max_concurrent(mut self, n: usize) -> Self {
        self.max_concurrent = n;
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// A route request.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteQuery {
    pub start: Coordinate,
    pub end: Coordinate,
    /// Departure time, or arrival deadline when `arrive_by` is set
    pub time: DateTime<Utc>,
    pub arrive_by: bool,
    /// Caller label for the origin; overrides the document's
    pub start_name: Option<String>,
    /// Caller label for the destination; also sent to the backend
    pub end_name: Option<String>,
}

impl RouteQuery {
    /// Depart from `start` at `time`.
    pub fn depart_at(start: Coordinate, end: Coordinate, time: DateTime<Utc>) -> Self {
        Self {
            start,
            end,
            time,
            arrive_by: false,
            start_name: None,
            end_name: None,
        }
    }

    /// Arrive at `end` no later than `time`.
    pub fn arrive_by(start: Coordinate, end: Coordinate, time: DateTime<Utc>) -> Self {
        Self {
            arrive_by: true,
            ..Self::depart_at(start, end, time)
        }
    }

    pub fn with_start_name(mut self, name: impl Into<String>) -> Self {
        self.start_name = Some(name.into());
        self
    }

    pub fn with_end_name(mut self, name: impl Into<String>) -> Self {
        self.end_name = Some(name.into());
        self
    }

    /// Query-string parameters for `GET /route`.
    fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("start", self.start.to_string()),
            ("end", self.end.to_string()),
            ("time", self.time.timestamp().to_string()),
            ("arriveBy", self.arrive_by.to_string()),
        ];
        if let Some(name) = &self.end_name {
            params.push(("destinationName", name.clone()));
        }
        params
    }
}

/// Routing backend client.
///
/// Uses a semaphore to limit concurrent requests and avoid rate limiting.
#[derive(Debug, Clone)]
pub struct RouteClient {
    http: reqwest::Client,
    base_url: String,
    semaphore: Arc<Semaphore>,
    directions: DirectionsConfig,
}

impl RouteClient {
    /// Create a new client with the given configuration.
    pub fn new(config: BackendConfig, directions: DirectionsConfig) -> Result<Self, RouteError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            semaphore: Arc::new(Semaphore::new(config.max_concurrent)),
            directions,
        })
    }

    /// The directions config applied to fetched routes.
    pub fn directions_config(&self) -> &DirectionsConfig {
        &self.directions
    }

    /// Fetch and finalize candidate itineraries for a query.
    pub async fn get_routes(&self, query: &RouteQuery) -> Result<Vec<Itinerary>, RouteError> {
        let body = self.get_routes_raw(query).await?;

        parse_response(
            &body,
            query.start_name.as_deref(),
            query.end_name.as_deref(),
            &self.directions,
        )
    }

    /// Fetch the raw route document body (for debugging/testing).
    pub async fn get_routes_raw(&self, query: &RouteQuery) -> Result<String, RouteError> {
        let _permit = self
            .semaphore
            .acquire()
            .await
            .map_err(|_| RouteError::Api {
                status: 0,
                message: "Semaphore closed".to_string(),
            })?;

        let url = format!("{}/route", self.base_url);
        debug!(%url, start = %query.start, end = %query.end, "requesting routes");

        let response = self.http.get(&url).query(&query.params()).send().await?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(RouteError::Unauthorized);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            warn!("route backend rate limit hit");
            return Err(RouteError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RouteError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        Ok(response.text().await?)
    }
}
