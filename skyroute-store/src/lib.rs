pub mod app_config;
pub mod database;
pub mod error;
pub mod pipeline;
pub mod airport_repo;
pub mod route_repo;
pub mod itinerary_repo;

pub use database::MongoClient;
pub use airport_repo::MongoAirportRepository;
pub use route_repo::MongoRouteRepository;
pub use itinerary_repo::MongoItineraryRepository;
