//! Core settings, document models, and the store contract for the Swave
//! seeder.

pub mod models;
pub mod settings;
pub mod store;

pub use models::{Coordinates, Event, Promotion, Review, Venue};
pub use store::{SeedStore, StoreError};
