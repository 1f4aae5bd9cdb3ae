//! Storage contract the seeding procedure runs against.

use async_trait::async_trait;
use bson::oid::ObjectId;
use thiserror::Error;

use crate::models::{Event, Promotion, Venue};

/// Errors surfaced by a seed store implementation.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store could not be reached. Raised only before any mutation.
    #[error("database unreachable")]
    Connection(#[source] anyhow::Error),

    /// A delete or insert against `collection` failed mid-run.
    #[error("write to '{collection}' failed")]
    Write {
        collection: &'static str,
        #[source]
        source: anyhow::Error,
    },
}

/// Write operations the seeder needs from a document store.
///
/// Implemented by the MongoDB store and by in-memory fakes in tests.
#[async_trait]
pub trait SeedStore: Send + Sync {
    /// Remove every venue document, returning the deleted count.
    async fn clear_venues(&self) -> Result<u64, StoreError>;

    /// Remove every event document, returning the deleted count.
    async fn clear_events(&self) -> Result<u64, StoreError>;

    /// Remove every promotion document, returning the deleted count.
    async fn clear_promotions(&self) -> Result<u64, StoreError>;

    /// Insert venues and return their store-assigned ids, one per input
    /// venue, in insertion order.
    async fn insert_venues(&self, venues: &[Venue]) -> Result<Vec<ObjectId>, StoreError>;

    async fn insert_events(&self, events: &[Event]) -> Result<usize, StoreError>;

    async fn insert_promotions(&self, promotions: &[Promotion]) -> Result<usize, StoreError>;
}
