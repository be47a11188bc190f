use axum::{extract::State, routing::post, Json, Router};
use skyroute_core::routes::{self as route_finder, FetchRoutesRequest, RouteResult};

use crate::error::AppError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/fetch_routes/", post(fetch_routes))
}

/// POST /fetch_routes/
/// Up to three origin/destination/day lookups, answered in input order
pub async fn fetch_routes(
    State(state): State<AppState>,
    Json(req): Json<FetchRoutesRequest>,
) -> Result<Json<Vec<RouteResult>>, AppError> {
    tracing::debug!("Route lookup for {} pairs", req.routes.len());
    let results = route_finder::fetch_routes(state.route_repo.as_ref(), &req, &state.route_finder).await?;
    Ok(Json(results))
}
