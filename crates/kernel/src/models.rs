//! Document models for the three Swave collections.
//!
//! Field names serialize in camelCase, the shape the Swave client reads.
//! Store-assigned `_id`s are never modelled here; they exist only in insert
//! results.

use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// A nightlife establishment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Venue {
    /// Stable fixture key; dependent records are wired through it at seed time.
    pub slug: String,
    pub name: String,
    pub rating: f64,
    pub category: String,
    pub location: String,
    pub coordinates: Coordinates,
    /// Display label, e.g. "0.5 km".
    pub distance: String,
    /// Display label, e.g. "04:00 AM".
    pub open_until: String,
    pub image_url: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reviews: Vec<Review>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// A guest review embedded in its venue document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub user_name: String,
    pub user_initial: String,
    pub rating: f64,
    pub date: String,
    pub text: String,
}

/// A scheduled event hosted by a venue.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub name: String,
    /// Store-assigned id of the hosting venue, captured at insertion time.
    pub venue_id: ObjectId,
    pub date: String,
    pub price: f64,
    pub category: String,
    pub attendees: u32,
    pub image_url: String,
}

/// A running promotion at a venue.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Promotion {
    /// Store-assigned id of the promoting venue, captured at insertion time.
    pub venue_id: ObjectId,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub is_new: bool,
}
