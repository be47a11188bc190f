use async_trait::async_trait;
use bson::Document;
use futures::TryStreamExt;
use mongodb::Collection;
use skyroute_core::repository::RouteRepository;
use skyroute_core::routes::{Route, RouteRequest};
use skyroute_core::StoreError;

use crate::database::{to_json, MongoClient};
use crate::error::translate;
use crate::pipeline;

pub struct MongoRouteRepository {
    collection: Collection<Document>,
}

impl MongoRouteRepository {
    pub fn new(db: &MongoClient, collection: &str) -> Self {
        Self {
            collection: db.collection(collection),
        }
    }
}

#[async_trait]
impl RouteRepository for MongoRouteRepository {
    async fn find_routes(&self, request: &RouteRequest) -> Result<Vec<Route>, StoreError> {
        let docs: Vec<Document> = self
            .collection
            .find(pipeline::route_filter(request))
            .await
            .map_err(translate)?
            .try_collect()
            .await
            .map_err(translate)?;

        decode_routes(docs)
    }
}

/// Decodes every matched document; the first one missing its airport codes
/// fails the lookup. All other fields pass through whatever their type.
pub fn decode_routes(docs: Vec<Document>) -> Result<Vec<Route>, StoreError> {
    docs.into_iter()
        .map(|doc| {
            serde_json::from_value::<Route>(to_json(doc))
                .map_err(|e| StoreError::Decode(e.to_string()))
        })
        .collect()
}
