//! Seeding tool for the Swave nightlife-discovery database.
//!
//! Resets the `venues`, `events`, and `promotions` collections and
//! repopulates them from a fixed dataset, wiring cross-collection references
//! to the ids the store assigns at insertion time.

pub mod fixtures;
pub mod seeder;

pub use seeder::{run, run_with, SeedError, SeedReport};
