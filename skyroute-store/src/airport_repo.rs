use async_trait::async_trait;
use bson::Document;
use futures::TryStreamExt;
use mongodb::Collection;
use serde_json::{Map, Value};
use skyroute_core::repository::AirportRepository;
use skyroute_core::StoreError;

use crate::database::{to_json_object, MongoClient};
use crate::error::translate;
use crate::pipeline;

pub struct MongoAirportRepository {
    collection: Collection<Document>,
    search_index: String,
}

impl MongoAirportRepository {
    pub fn new(db: &MongoClient, collection: &str, search_index: &str) -> Self {
        Self {
            collection: db.collection(collection),
            search_index: search_index.to_string(),
        }
    }
}

#[async_trait]
impl AirportRepository for MongoAirportRepository {
    async fn autocomplete(&self, prefix: &str) -> Result<Vec<Map<String, Value>>, StoreError> {
        let docs: Vec<Document> = self
            .collection
            .aggregate(pipeline::airport_search(&self.search_index, prefix))
            .await
            .map_err(translate)?
            .try_collect()
            .await
            .map_err(translate)?;

        Ok(docs.into_iter().map(to_json_object).collect())
    }
}
