use axum::{extract::State, routing::post, Json, Router};
use skyroute_core::itinerary::{self, DetailedItinerary, ItineraryRequest};

use crate::error::AppError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/get_detailed_itinerary", post(get_detailed_itinerary))
}

/// POST /get_detailed_itinerary
pub async fn get_detailed_itinerary(
    State(state): State<AppState>,
    Json(req): Json<ItineraryRequest>,
) -> Result<Json<Vec<DetailedItinerary>>, AppError> {
    let itineraries = itinerary::lookup_itinerary(state.itinerary_repo.as_ref(), req.route_id).await?;
    if itineraries.is_empty() {
        tracing::debug!("No route with id {}", req.route_id);
    }
    Ok(Json(itineraries))
}
