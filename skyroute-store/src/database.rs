use async_trait::async_trait;
use bson::{doc, Bson, Document};
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection, Database};
use serde_json::{Map, Value};
use skyroute_core::repository::StoreHealth;
use skyroute_core::StoreError;
use std::time::Duration;
use tracing::info;

use crate::app_config::DatabaseConfig;
use crate::error::translate;

/// Handle to the flight database. Cloning shares the driver's pool.
#[derive(Clone, Debug)]
pub struct MongoClient {
    client: Client,
    database: Database,
}

impl MongoClient {
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, StoreError> {
        let mut options = ClientOptions::parse(&config.uri).await.map_err(translate)?;
        let timeout = Duration::from_secs(config.connect_timeout_seconds);
        options.app_name = Some("skyroute".to_string());
        options.connect_timeout = Some(timeout);
        options.server_selection_timeout = Some(timeout);

        let client = Client::with_options(options).map_err(translate)?;
        let database = client.database(&config.name);
        info!("MongoDB client ready for database {}", config.name);

        Ok(Self { client, database })
    }

    pub fn collection(&self, name: &str) -> Collection<Document> {
        self.database.collection::<Document>(name)
    }

    pub async fn ping(&self) -> Result<(), StoreError> {
        self.database
            .run_command(doc! { "ping": 1 })
            .await
            .map(|_| ())
            .map_err(translate)
    }

    /// Closes pooled connections. Call once the server has stopped serving.
    pub async fn shutdown(self) {
        info!("Shutting down MongoDB client...");
        self.client.shutdown().await;
    }
}

#[async_trait]
impl StoreHealth for MongoClient {
    async fn ping(&self) -> Result<(), StoreError> {
        MongoClient::ping(self).await
    }
}

/// Re-encodes a stored document as relaxed extended JSON, the form clients
/// receive (`ObjectId` becomes `{"$oid": "..."}`).
pub fn to_json(doc: Document) -> Value {
    Bson::Document(doc).into_relaxed_extjson()
}

pub fn to_json_object(doc: Document) -> Map<String, Value> {
    match to_json(doc) {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}
