//! The seeding procedure: a full, destructive reset of all three collections.

use std::collections::{HashMap, HashSet};

use bson::oid::ObjectId;
use swave_kernel::models::{Event, Promotion, Venue};
use swave_kernel::store::{SeedStore, StoreError};
use thiserror::Error;

use crate::fixtures::{self, EventFixture, PromotionFixture, SeedData};

/// Counts of documents written by a successful run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub venues: usize,
    pub events: usize,
    pub promotions: usize,
}

#[derive(Debug, Error)]
pub enum SeedError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("duplicate venue slug '{slug}' in fixture data")]
    DuplicateVenueSlug { slug: String },

    #[error("{record} '{name}' references unknown venue '{venue_slug}'")]
    UnknownVenue {
        record: &'static str,
        name: String,
        venue_slug: String,
    },
}

/// Reset and repopulate the three collections from the builtin dataset.
pub async fn run(store: &impl SeedStore) -> Result<SeedReport, SeedError> {
    run_with(store, fixtures::builtin()).await
}

/// Reset and repopulate the three collections from `data`.
///
/// Destructive: clears all three collections before inserting. No transaction
/// wraps the sequence; a write failure mid-run leaves earlier collections
/// populated and later ones untouched.
pub async fn run_with(store: &impl SeedStore, data: SeedData) -> Result<SeedReport, SeedError> {
    // A dataset that cannot be fully wired must fail before anything is wiped.
    check_references(&data)?;

    let cleared_venues = store.clear_venues().await?;
    let cleared_events = store.clear_events().await?;
    let cleared_promotions = store.clear_promotions().await?;
    tracing::debug!(
        venues = cleared_venues,
        events = cleared_events,
        promotions = cleared_promotions,
        "cleared existing documents"
    );

    let venue_ids = store.insert_venues(&data.venues).await?;
    let ids = index_by_slug(&data.venues, &venue_ids);

    let events = resolve_events(&data.events, &ids)?;
    let promotions = resolve_promotions(&data.promotions, &ids)?;

    let inserted_events = store.insert_events(&events).await?;
    let inserted_promotions = store.insert_promotions(&promotions).await?;

    Ok(SeedReport {
        venues: venue_ids.len(),
        events: inserted_events,
        promotions: inserted_promotions,
    })
}

/// Verify slugs are unique and every dependent record resolves to a venue.
fn check_references(data: &SeedData) -> Result<(), SeedError> {
    let mut slugs = HashSet::new();
    for venue in &data.venues {
        if !slugs.insert(venue.slug.as_str()) {
            return Err(SeedError::DuplicateVenueSlug {
                slug: venue.slug.clone(),
            });
        }
    }
    for event in &data.events {
        if !slugs.contains(event.venue_slug) {
            return Err(SeedError::UnknownVenue {
                record: "event",
                name: event.name.to_string(),
                venue_slug: event.venue_slug.to_string(),
            });
        }
    }
    for promotion in &data.promotions {
        if !slugs.contains(promotion.venue_slug) {
            return Err(SeedError::UnknownVenue {
                record: "promotion",
                name: promotion.title.to_string(),
                venue_slug: promotion.venue_slug.to_string(),
            });
        }
    }
    Ok(())
}

fn index_by_slug<'a>(venues: &'a [Venue], ids: &[ObjectId]) -> HashMap<&'a str, ObjectId> {
    venues
        .iter()
        .zip(ids)
        .map(|(venue, id)| (venue.slug.as_str(), *id))
        .collect()
}

fn lookup(
    ids: &HashMap<&str, ObjectId>,
    venue_slug: &'static str,
    record: &'static str,
    name: &str,
) -> Result<ObjectId, SeedError> {
    ids.get(venue_slug)
        .copied()
        .ok_or_else(|| SeedError::UnknownVenue {
            record,
            name: name.to_string(),
            venue_slug: venue_slug.to_string(),
        })
}

fn resolve_events(
    fixtures: &[EventFixture],
    ids: &HashMap<&str, ObjectId>,
) -> Result<Vec<Event>, SeedError> {
    fixtures
        .iter()
        .map(|fixture| {
            let venue_id = lookup(ids, fixture.venue_slug, "event", fixture.name)?;
            Ok(Event {
                name: fixture.name.to_string(),
                venue_id,
                date: fixture.date.to_string(),
                price: fixture.price,
                category: fixture.category.to_string(),
                attendees: fixture.attendees,
                image_url: fixture.image_url.to_string(),
            })
        })
        .collect()
}

fn resolve_promotions(
    fixtures: &[PromotionFixture],
    ids: &HashMap<&str, ObjectId>,
) -> Result<Vec<Promotion>, SeedError> {
    fixtures
        .iter()
        .map(|fixture| {
            let venue_id = lookup(ids, fixture.venue_slug, "promotion", fixture.title)?;
            Ok(Promotion {
                venue_id,
                title: fixture.title.to_string(),
                description: fixture.description.to_string(),
                image_url: fixture.image_url.to_string(),
                is_new: fixture.is_new,
            })
        })
        .collect()
}
