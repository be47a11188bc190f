use axum::{extract::State, routing::post, Json, Router};
use skyroute_core::airport::{self, Airport, AutocompleteRequest};

use crate::error::AppError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/search", post(autocomplete_airports))
}

/// POST /search
/// Airport autocomplete over code, name and city
pub async fn autocomplete_airports(
    State(state): State<AppState>,
    Json(req): Json<AutocompleteRequest>,
) -> Result<Json<Vec<Airport>>, AppError> {
    let airports = airport::autocomplete(state.airport_repo.as_ref(), &req.prefix).await?;
    tracing::debug!("Autocomplete {:?}: {} airports", req.prefix, airports.len());
    Ok(Json(airports))
}
