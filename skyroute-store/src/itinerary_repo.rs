use async_trait::async_trait;
use bson::Document;
use futures::TryStreamExt;
use mongodb::Collection;
use serde_json::Value;
use skyroute_core::repository::ItineraryRepository;
use skyroute_core::StoreError;

use crate::database::{to_json, MongoClient};
use crate::error::translate;
use crate::pipeline;

pub struct MongoItineraryRepository {
    routes: Collection<Document>,
    airports: String,
    airlines: String,
}

impl MongoItineraryRepository {
    pub fn new(db: &MongoClient, routes: &str, airports: &str, airlines: &str) -> Self {
        Self {
            routes: db.collection(routes),
            airports: airports.to_string(),
            airlines: airlines.to_string(),
        }
    }
}

#[async_trait]
impl ItineraryRepository for MongoItineraryRepository {
    async fn detailed_itinerary(&self, route_id: i64) -> Result<Vec<Value>, StoreError> {
        let rows: Vec<Document> = self
            .routes
            .aggregate(pipeline::itinerary(route_id, &self.airports, &self.airlines))
            .await
            .map_err(translate)?
            .try_collect()
            .await
            .map_err(translate)?;

        Ok(rows.into_iter().map(to_json).collect())
    }
}
