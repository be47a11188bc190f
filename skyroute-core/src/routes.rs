use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::borrow::Cow;
use tracing::debug;

use crate::repository::RouteRepository;
use crate::{CoreError, CoreResult, StoreError};

pub const MAX_ROUTE_PAIRS: usize = 3;

pub const ROUTES_FOUND: &str = "Routes found";
pub const NO_ROUTES_FOUND: &str = "No routes found matching the criteria";
pub const INVALID_DAY_NUMBER: &str = "Day number must be between 1 and 7";

// ============================================================================
// Request Types
// ============================================================================

/// One origin/destination/weekday lookup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RouteRequest {
    pub fromiata: String,
    pub toiata: String,
    /// 1 through 7. Kept signed so out-of-range input reaches validation.
    pub daynumber: i64,
}

impl RouteRequest {
    pub fn has_valid_day(&self) -> bool {
        (1..=7).contains(&self.daynumber)
    }

    /// Name of the weekday availability flag on route documents.
    pub fn day_field(&self) -> String {
        format!("day{}", self.daynumber)
    }
}

#[derive(Debug, Deserialize)]
pub struct FetchRoutesRequest {
    pub routes: Vec<RouteRequest>,
}

// ============================================================================
// Route Records
// ============================================================================

/// A stored route. Everything but the airport codes (flight number, weekday
/// flags, airline code, store ids) rides along in `extra` and is serialized
/// back verbatim, nulls included.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Route {
    #[serde(rename = "airportFromIATA")]
    pub airport_from_iata: String,
    #[serde(rename = "airportToIATA")]
    pub airport_to_iata: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Textual form of `flightNumber`. Missing or null is `""`.
fn flight_number_key(route: &Route) -> Cow<'_, str> {
    match route.extra.get("flightNumber") {
        None | Some(Value::Null) => Cow::Borrowed(""),
        Some(Value::String(s)) => Cow::Borrowed(s.as_str()),
        Some(other) => Cow::Owned(other.to_string()),
    }
}

/// Ascending by flight number; routes without one sort first. Stable.
pub fn sort_by_flight_number(routes: &mut [Route]) {
    routes.sort_by(|a, b| flight_number_key(a).cmp(&flight_number_key(b)));
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteResult {
    pub routes: Vec<Route>,
    pub message: String,
}

impl RouteResult {
    pub fn from_routes(mut routes: Vec<Route>) -> Self {
        if routes.is_empty() {
            return Self {
                routes,
                message: NO_ROUTES_FOUND.to_string(),
            };
        }

        sort_by_flight_number(&mut routes);
        Self {
            routes,
            message: ROUTES_FOUND.to_string(),
        }
    }

    pub fn decode_failure(detail: &str) -> Self {
        Self {
            routes: Vec::new(),
            message: format!("Error decoding JSON: {}", detail),
        }
    }

    pub fn rejected(message: &str) -> Self {
        Self {
            routes: Vec::new(),
            message: message.to_string(),
        }
    }
}

// ============================================================================
// Batch Validation
// ============================================================================

/// What to do with a batch entry whose day number is out of range.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum InvalidDayPolicy {
    /// Reject the whole batch with a validation error.
    #[default]
    AbortBatch,
    /// Report the entry on its own and keep processing its siblings.
    ReportPerItem,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RouteFinderSettings {
    #[serde(default = "default_max_pairs")]
    pub max_pairs: usize,
    #[serde(default)]
    pub invalid_day_policy: InvalidDayPolicy,
}

fn default_max_pairs() -> usize {
    MAX_ROUTE_PAIRS
}

impl Default for RouteFinderSettings {
    fn default() -> Self {
        Self {
            max_pairs: MAX_ROUTE_PAIRS,
            invalid_day_policy: InvalidDayPolicy::default(),
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum PlannedLookup<'a> {
    Query(&'a RouteRequest),
    Rejected(&'static str),
}

/// Validates the whole batch before anything touches the store.
pub fn plan_batch<'a>(
    routes: &'a [RouteRequest],
    settings: &RouteFinderSettings,
) -> CoreResult<Vec<PlannedLookup<'a>>> {
    if routes.len() > settings.max_pairs {
        return Err(CoreError::ValidationError(format!(
            "You can specify a maximum of {} 'from' and 'to' pairs.",
            settings.max_pairs
        )));
    }

    routes
        .iter()
        .map(|route| {
            if route.has_valid_day() {
                return Ok(PlannedLookup::Query(route));
            }
            match settings.invalid_day_policy {
                InvalidDayPolicy::AbortBatch => {
                    Err(CoreError::ValidationError(INVALID_DAY_NUMBER.to_string()))
                }
                InvalidDayPolicy::ReportPerItem => Ok(PlannedLookup::Rejected(INVALID_DAY_NUMBER)),
            }
        })
        .collect()
}

/// Runs every lookup in the batch, in input order.
///
/// Malformed route documents only fail their own entry; any other store
/// failure aborts the request.
pub async fn fetch_routes(
    repo: &dyn RouteRepository,
    request: &FetchRoutesRequest,
    settings: &RouteFinderSettings,
) -> CoreResult<Vec<RouteResult>> {
    let plan = plan_batch(&request.routes, settings)?;
    let mut results = Vec::with_capacity(plan.len());

    for lookup in plan {
        let result = match lookup {
            PlannedLookup::Rejected(message) => RouteResult::rejected(message),
            PlannedLookup::Query(route) => match repo.find_routes(route).await {
                Ok(routes) => {
                    debug!(
                        "{} -> {} on day {}: {} routes",
                        route.fromiata,
                        route.toiata,
                        route.daynumber,
                        routes.len()
                    );
                    RouteResult::from_routes(routes)
                }
                Err(StoreError::Decode(detail)) => {
                    tracing::warn!(
                        "Malformed route data for {} -> {}: {}",
                        route.fromiata,
                        route.toiata,
                        detail
                    );
                    RouteResult::decode_failure(&detail)
                }
                Err(e) => return Err(e.into()),
            },
        };
        results.push(result);
    }

    Ok(results)
}
