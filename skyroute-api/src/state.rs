use std::sync::Arc;
use skyroute_core::repository::{AirportRepository, ItineraryRepository, RouteRepository, StoreHealth};
use skyroute_core::routes::RouteFinderSettings;
use skyroute_store::app_config::Config;
use skyroute_store::{MongoAirportRepository, MongoClient, MongoItineraryRepository, MongoRouteRepository};

#[derive(Clone)]
pub struct AppState {
    pub airport_repo: Arc<dyn AirportRepository>,
    pub route_repo: Arc<dyn RouteRepository>,
    pub itinerary_repo: Arc<dyn ItineraryRepository>,
    pub store_health: Arc<dyn StoreHealth>,
    pub route_finder: RouteFinderSettings,
}

impl AppState {
    /// Wires every repository to the one shared client.
    pub fn from_mongo(db: &MongoClient, config: &Config) -> Self {
        let collections = &config.collections;

        Self {
            airport_repo: Arc::new(MongoAirportRepository::new(
                db,
                &collections.airports,
                &config.search.index,
            )),
            route_repo: Arc::new(MongoRouteRepository::new(db, &collections.routes)),
            itinerary_repo: Arc::new(MongoItineraryRepository::new(
                db,
                &collections.routes,
                &collections.airports,
                &collections.airlines,
            )),
            store_health: Arc::new(db.clone()),
            route_finder: config.route_finder.clone(),
        }
    }
}
