use async_trait::async_trait;
use anyhow::Result;
use tracing::info;

use super::traits::PropertyDirectory;
use crate::models::Property;

/// The compiled-in list of tiny houses
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    properties: Vec<Property>,
}

impl StaticCatalog {
    pub fn new() -> Self {
        Self {
            properties: tiny_houses(),
        }
    }

    /// Catalog over an arbitrary list, mostly for tests and demos
    pub fn with_properties(properties: Vec<Property>) -> Self {
        Self { properties }
    }

    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    pub fn find(&self, id: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.id == id)
    }
}

impl Default for StaticCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PropertyDirectory for StaticCatalog {
    async fn list_properties(&self) -> Result<Vec<Property>> {
        info!("📋 Serving {} properties from the built-in catalog", self.properties.len());
        Ok(self.properties.clone())
    }

    fn source_name(&self) -> &'static str {
        "built-in"
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn gallery(ids: &[u32]) -> Vec<String> {
    ids.iter()
        .map(|id| format!("https://picsum.photos/id/{id}/800/600"))
        .collect()
}

#[allow(clippy::too_many_arguments)]
fn house(
    id: &str,
    name: &str,
    description: &str,
    location: &str,
    images: &[u32],
    price: f64,
    amenities: &[&str],
    reviews: &[&str],
    (capacity, bedrooms, bathrooms): (u32, u32, u32),
) -> Property {
    Property {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        location: location.to_string(),
        image_urls: gallery(images),
        price,
        amenities: strings(amenities),
        capacity,
        bedrooms,
        bathrooms,
        owner_contact: "Hosts: +1 555 0100".to_string(),
        booking_email: "bookings@tinyhavens.example".to_string(),
        reviews: strings(reviews),
    }
}

fn tiny_houses() -> Vec<Property> {
    vec![
        house(
            "1",
            "Secluded Mountain Cabin",
            "Escape to this cozy cabin tucked away in the mountains. Enjoy breathtaking views and a peaceful setting.",
            "Asheville, NC",
            &[30, 31, 32],
            175.0,
            &["WiFi", "Kitchen", "Fireplace", "Hot tub"],
            &["Amazing location", "Very clean and well kept"],
            (4, 2, 1),
        ),
        house(
            "2",
            "Ocean-View Beach House",
            "Relax in this stunning beach house with panoramic ocean views. Perfect for a family getaway or a romantic escape.",
            "Malibu, CA",
            &[40, 41, 42],
            250.0,
            &["WiFi", "Beach access", "Balcony", "Pets allowed"],
            &["Incredible view", "Perfect for families", "Great value for money"],
            (6, 3, 2),
        ),
        house(
            "3",
            "Charming Lakeside Cottage",
            "Experience the calm of lakeside living in this charming cottage. Swim, fish and go boating right from your door.",
            "Lake Tahoe, CA",
            &[50, 51],
            200.0,
            &["WiFi", "Kitchen", "Dock", "Kayaks"],
            &["Beautiful lake", "Quiet and restful", "Well equipped"],
            (4, 2, 1),
        ),
        house(
            "4",
            "Rustic Desert Retreat",
            "Discover the beauty of the desert in this rustic retreat. Stargaze, hike and explore a unique landscape.",
            "Sedona, AZ",
            &[60, 61, 62],
            150.0,
            &["WiFi", "Kitchen", "Fire pit", "Hiking trails"],
            &["Incredible stargazing", "Peaceful and secluded", "Great hiking"],
            (2, 1, 1),
        ),
        house(
            "5",
            "Chic Urban Apartment",
            "Enjoy city life in this elegant, modern apartment with easy access to restaurants, shops and attractions.",
            "New York, NY",
            &[70, 71],
            300.0,
            &["WiFi", "Gym", "Concierge", "City views"],
            &["Great location", "Elegant and modern", "Excellent amenities"],
            (2, 1, 1),
        ),
        house(
            "6",
            "Tropical Island Bungalow",
            "Escape to paradise in this charming island bungalow. White sand beaches, crystal-clear water and lush greenery.",
            "Maui, HI",
            &[80, 81, 82],
            275.0,
            &["WiFi", "Beach access", "Snorkeling", "Hammock"],
            &["Paradise found", "Amazing snorkeling", "Relaxing atmosphere"],
            (4, 2, 1),
        ),
    ]
}
