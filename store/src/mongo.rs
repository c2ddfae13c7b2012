//! MongoDB-backed session store.
//!
//! One `mongodb::Client` per process lifetime: created lazily on the first
//! lookup, then reused by every subsequent caller. The client multiplexes
//! concurrent reads over its own connection pool, so no locking is needed
//! around lookups. There is no explicit teardown in normal operation.

use crate::{SessionRecord, SessionStore, StoreError};
use async_trait::async_trait;
use mongodb::bson::doc;
use mongodb::{Client, Collection};
use serde::{Deserialize, Serialize};
use tokio::sync::OnceCell;
use tracing::{debug, info};

/// Connection settings for the session store.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MongoConfig {
    /// Connection string, e.g. `mongodb://localhost:27017`.
    pub uri: String,

    #[serde(default = "default_database")]
    pub database: String,

    #[serde(default = "default_collection")]
    pub collection: String,
}

fn default_database() -> String {
    "cryptonomads-bot".to_string()
}

fn default_collection() -> String {
    "user_verifications".to_string()
}

/// Session store backed by a MongoDB collection keyed by `verifyUuid`.
pub struct MongoSessionStore {
    config: MongoConfig,
    client: OnceCell<Client>,
}

impl MongoSessionStore {
    /// Create the store. No connection is made until the first lookup.
    pub fn new(config: MongoConfig) -> Self {
        Self {
            config,
            client: OnceCell::new(),
        }
    }

    async fn collection(&self) -> Result<Collection<SessionRecord>, StoreError> {
        let client = self
            .client
            .get_or_try_init(|| async {
                info!(database = %self.config.database, "connecting to session store");
                Client::with_uri_str(&self.config.uri)
                    .await
                    .map_err(|e| StoreError::Connection(e.to_string()))
            })
            .await?;
        Ok(client
            .database(&self.config.database)
            .collection(&self.config.collection))
    }
}

#[async_trait]
impl SessionStore for MongoSessionStore {
    async fn find_by_uuid(&self, uuid: &str) -> Result<Option<SessionRecord>, StoreError> {
        let collection = self.collection().await?;
        debug!(%uuid, "session lookup");
        let record = collection
            .find_one(doc! { "verifyUuid": uuid })
            .await
            .map_err(|e| match e.kind.as_ref() {
                mongodb::error::ErrorKind::BsonDeserialization(de) => {
                    StoreError::Serialization(de.to_string())
                }
                _ => StoreError::Backend(e.to_string()),
            })?;
        Ok(record)
    }
}
