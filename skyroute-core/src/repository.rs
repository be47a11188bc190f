use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::error::StoreError;
use crate::routes::{Route, RouteRequest};

/// Repository trait for airport reference data
#[async_trait]
pub trait AirportRepository: Send + Sync {
    /// Full-text search over airport code, name and city, in relevance order.
    /// Documents are returned as stored, `_id` included.
    async fn autocomplete(&self, prefix: &str) -> Result<Vec<Map<String, Value>>, StoreError>;
}

/// Repository trait for route data access
#[async_trait]
pub trait RouteRepository: Send + Sync {
    /// Routes flying `origin -> destination` on the requested weekday.
    /// Returns `StoreError::Decode` when a matched document is malformed.
    async fn find_routes(&self, request: &RouteRequest) -> Result<Vec<Route>, StoreError>;
}

/// Repository trait for the route/airport/airline join
#[async_trait]
pub trait ItineraryRepository: Send + Sync {
    /// One projected row per route with the given identifier.
    async fn detailed_itinerary(&self, route_id: i64) -> Result<Vec<Value>, StoreError>;
}

/// Liveness of the backing store.
#[async_trait]
pub trait StoreHealth: Send + Sync {
    async fn ping(&self) -> Result<(), StoreError>;
}
