//! MongoDB-backed implementation of the seed store contract.

use async_trait::async_trait;
use mongodb::bson::{doc, oid::ObjectId, Bson};
use mongodb::{Client, Collection};

use swave_kernel::models::{Event, Promotion, Venue};
use swave_kernel::settings::DatabaseSettings;
use swave_kernel::store::{SeedStore, StoreError};

const VENUES: &str = "venues";
const EVENTS: &str = "events";
const PROMOTIONS: &str = "promotions";

/// Typed handles for the three Swave collections.
pub struct MongoStore {
    venues: Collection<Venue>,
    events: Collection<Event>,
    promotions: Collection<Promotion>,
}

impl MongoStore {
    /// Connect to the configured database and verify it is reachable.
    ///
    /// The driver connects lazily, so an explicit `ping` runs here; an
    /// unreachable server fails the run while nothing has been mutated.
    pub async fn connect(settings: &DatabaseSettings) -> Result<Self, StoreError> {
        let client = Client::with_uri_str(&settings.uri)
            .await
            .map_err(|e| StoreError::Connection(e.into()))?;
        let db = client.database(&settings.database);

        db.run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| StoreError::Connection(e.into()))?;

        tracing::debug!(database = %settings.database, "connected to MongoDB");

        Ok(Self {
            venues: db.collection(VENUES),
            events: db.collection(EVENTS),
            promotions: db.collection(PROMOTIONS),
        })
    }
}

fn write_error(collection: &'static str, source: mongodb::error::Error) -> StoreError {
    StoreError::Write {
        collection,
        source: source.into(),
    }
}

async fn clear<T: Send + Sync>(
    collection: &Collection<T>,
    name: &'static str,
) -> Result<u64, StoreError> {
    let result = collection
        .delete_many(doc! {})
        .await
        .map_err(|e| write_error(name, e))?;
    Ok(result.deleted_count)
}

#[async_trait]
impl SeedStore for MongoStore {
    async fn clear_venues(&self) -> Result<u64, StoreError> {
        clear(&self.venues, VENUES).await
    }

    async fn clear_events(&self) -> Result<u64, StoreError> {
        clear(&self.events, EVENTS).await
    }

    async fn clear_promotions(&self) -> Result<u64, StoreError> {
        clear(&self.promotions, PROMOTIONS).await
    }

    async fn insert_venues(&self, venues: &[Venue]) -> Result<Vec<ObjectId>, StoreError> {
        // The driver rejects empty batches.
        if venues.is_empty() {
            return Ok(Vec::new());
        }
        let result = self
            .venues
            .insert_many(venues)
            .await
            .map_err(|e| write_error(VENUES, e))?;

        // `inserted_ids` is keyed by input index; read it back into
        // insertion order.
        let mut ids = Vec::with_capacity(venues.len());
        for index in 0..venues.len() {
            let id = result
                .inserted_ids
                .get(&index)
                .and_then(Bson::as_object_id)
                .ok_or_else(|| StoreError::Write {
                    collection: VENUES,
                    source: anyhow::anyhow!("no object id reported for venue at index {index}"),
                })?;
            ids.push(id);
        }
        Ok(ids)
    }

    async fn insert_events(&self, events: &[Event]) -> Result<usize, StoreError> {
        if events.is_empty() {
            return Ok(0);
        }
        let result = self
            .events
            .insert_many(events)
            .await
            .map_err(|e| write_error(EVENTS, e))?;
        Ok(result.inserted_ids.len())
    }

    async fn insert_promotions(&self, promotions: &[Promotion]) -> Result<usize, StoreError> {
        if promotions.is_empty() {
            return Ok(0);
        }
        let result = self
            .promotions
            .insert_many(promotions)
            .await
            .map_err(|e| write_error(PROMOTIONS, e))?;
        Ok(result.inserted_ids.len())
    }
}
