//! Literal fixture data for the three Swave collections.
//!
//! Venues carry a stable slug; event and promotion fixtures reference venues
//! through those slugs and are resolved to store-assigned ids at seed time.

use swave_kernel::models::{Coordinates, Review, Venue};

/// One seeding run's worth of data for all three collections.
#[derive(Debug, Clone)]
pub struct SeedData {
    pub venues: Vec<Venue>,
    pub events: Vec<EventFixture>,
    pub promotions: Vec<PromotionFixture>,
}

/// An event awaiting venue-id resolution.
#[derive(Debug, Clone)]
pub struct EventFixture {
    pub name: &'static str,
    pub venue_slug: &'static str,
    pub date: &'static str,
    pub price: f64,
    pub category: &'static str,
    pub attendees: u32,
    pub image_url: &'static str,
}

/// A promotion awaiting venue-id resolution.
#[derive(Debug, Clone)]
pub struct PromotionFixture {
    pub venue_slug: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub image_url: &'static str,
    pub is_new: bool,
}

/// The builtin dataset: five venues, two events, one promotion.
pub fn builtin() -> SeedData {
    SeedData {
        venues: venues(),
        events: events(),
        promotions: promotions(),
    }
}

fn venues() -> Vec<Venue> {
    vec![
        Venue {
            slug: "neon-nights".to_string(),
            name: "Neon Nights".to_string(),
            rating: 4.7,
            category: "Electronic".to_string(),
            location: "Downtown District".to_string(),
            coordinates: Coordinates {
                lat: 40.7149,
                lng: -74.0051,
            },
            distance: "0.5 km".to_string(),
            open_until: "04:00 AM".to_string(),
            image_url: "https://images.unsplash.com/photo-1516450360452-9312f5e86fc7?auto=format&fit=crop&w=800&q=80".to_string(),
            description: "Experience the ultimate neon-lit nightlife at Neon Nights. Featuring world-class DJs, state-of-the-art sound systems, and an atmosphere that will keep you dancing until dawn.".to_string(),
            reviews: vec![Review {
                user_name: "Chris P.".to_string(),
                user_initial: "C".to_string(),
                rating: 5.0,
                date: "Nov 10, 2025".to_string(),
                text: "Amazing atmosphere! The music was spot on and the service was excellent."
                    .to_string(),
            }],
        },
        Venue {
            slug: "neon-pulse".to_string(),
            name: "Neon Pulse".to_string(),
            rating: 4.8,
            category: "Electronic".to_string(),
            location: "123 Techno Lane, Night City".to_string(),
            coordinates: Coordinates {
                lat: 40.7211,
                lng: -74.0093,
            },
            distance: "1.2 km".to_string(),
            open_until: "04:00 AM".to_string(),
            image_url: "https://images.unsplash.com/photo-1516450360452-9312f5e86fc7?auto=format&fit=crop&w=800&q=80".to_string(),
            description: "The ultimate electronic music experience with state-of-the-art lighting."
                .to_string(),
            reviews: vec![],
        },
        Venue {
            slug: "velvet-lounge".to_string(),
            name: "Velvet Lounge".to_string(),
            rating: 4.5,
            category: "Jazz".to_string(),
            location: "456 Smooth Ave, Downtown".to_string(),
            coordinates: Coordinates {
                lat: 40.7075,
                lng: -73.9988,
            },
            distance: "2.5 km".to_string(),
            open_until: "02:00 AM".to_string(),
            image_url: "https://images.unsplash.com/photo-1514525253344-ad715d730a89?auto=format&fit=crop&w=800&q=80".to_string(),
            description: "Sophisticated jazz and cocktails in a luxurious setting.".to_string(),
            reviews: vec![],
        },
        Venue {
            slug: "the-bassment".to_string(),
            name: "The Bassment".to_string(),
            rating: 4.6,
            category: "Hip Hop".to_string(),
            location: "789 Rhythm St, Westside".to_string(),
            coordinates: Coordinates {
                lat: 40.7183,
                lng: -74.0147,
            },
            distance: "3.1 km".to_string(),
            open_until: "03:30 AM".to_string(),
            image_url: "https://images.unsplash.com/photo-1571266028243-3716f02d2d2e?auto=format&fit=crop&w=800&q=80".to_string(),
            description: "Raw energy and the best hip hop beats in the city.".to_string(),
            reviews: vec![],
        },
        Venue {
            slug: "elysium-house".to_string(),
            name: "Elysium House".to_string(),
            rating: 4.9,
            category: "House".to_string(),
            location: "101 Cloud Blvd, Uptown".to_string(),
            coordinates: Coordinates {
                lat: 40.7102,
                lng: -74.0021,
            },
            distance: "0.8 km".to_string(),
            open_until: "05:00 AM".to_string(),
            image_url: "https://images.unsplash.com/photo-1574391884720-bbc37bb15932?auto=format&fit=crop&w=800&q=80".to_string(),
            description: "Heavenly house music and an ethereal atmosphere.".to_string(),
            reviews: vec![],
        },
    ]
}

fn events() -> Vec<EventFixture> {
    vec![
        EventFixture {
            name: "Electric Dreams Festival",
            venue_slug: "neon-nights",
            date: "Sat, Jan 20",
            price: 45.0,
            category: "Electronic",
            attendees: 1200,
            image_url: "https://images.unsplash.com/photo-1492684223066-81342ee5ff30?auto=format&fit=crop&w=800&q=80",
        },
        EventFixture {
            name: "Cyber Techno Rave",
            venue_slug: "neon-pulse",
            date: "Sat, Jan 14",
            price: 35.0,
            category: "Electronic",
            attendees: 850,
            image_url: "https://images.unsplash.com/photo-1505236858219-8359eb29e329?auto=format&fit=crop&w=800&q=80",
        },
    ]
}

fn promotions() -> Vec<PromotionFixture> {
    vec![PromotionFixture {
        venue_slug: "velvet-lounge",
        title: "2-for-1 Cocktails",
        description: "Enjoy 2-for-1 cocktails all night at Velvet Lounge every Thursday!",
        image_url: "https://images.unsplash.com/photo-1572116469696-31de0f17cc34",
        is_new: true,
    }]
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn builtin_counts_match_the_dataset() {
        let data = builtin();
        assert_eq!(data.venues.len(), 5);
        assert_eq!(data.events.len(), 2);
        assert_eq!(data.promotions.len(), 1);
    }

    #[test]
    fn venue_slugs_are_unique() {
        let data = builtin();
        let slugs: HashSet<&str> = data.venues.iter().map(|v| v.slug.as_str()).collect();
        assert_eq!(slugs.len(), data.venues.len());
    }

    #[test]
    fn every_event_references_a_known_venue() {
        let data = builtin();
        let slugs: HashSet<&str> = data.venues.iter().map(|v| v.slug.as_str()).collect();
        for event in &data.events {
            assert!(slugs.contains(event.venue_slug), "event '{}'", event.name);
        }
    }

    #[test]
    fn every_promotion_references_a_known_venue() {
        let data = builtin();
        let slugs: HashSet<&str> = data.venues.iter().map(|v| v.slug.as_str()).collect();
        for promotion in &data.promotions {
            assert!(
                slugs.contains(promotion.venue_slug),
                "promotion '{}'",
                promotion.title
            );
        }
    }

    #[test]
    fn neon_nights_carries_the_embedded_review() {
        let data = builtin();
        let neon_nights = data
            .venues
            .iter()
            .find(|v| v.slug == "neon-nights")
            .unwrap();
        assert_eq!(neon_nights.reviews.len(), 1);
        assert_eq!(neon_nights.reviews[0].user_name, "Chris P.");
    }
}
