use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::amenities;
use crate::models::Property;

/// Location value meaning "no location filter"
pub const ALL_LOCATIONS: &str = "all";

/// Filter for the listing grid
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PropertyFilter {
    /// Exact location, or `None` / "all" for every location
    pub location: Option<String>,
    /// Highest acceptable nightly rate
    pub max_price: Option<f64>,
    /// Labels the property must offer, compared after normalization
    pub amenities: Vec<String>,
}

impl PropertyFilter {
    pub fn by_location(location: impl Into<String>) -> Self {
        Self {
            location: Some(location.into()),
            ..Self::default()
        }
    }

    pub fn matches(&self, property: &Property) -> bool {
        if let Some(location) = self.location.as_deref() {
            if location != ALL_LOCATIONS && property.location != location {
                return false;
            }
        }

        if let Some(max_price) = self.max_price {
            if property.price > max_price {
                return false;
            }
        }

        self.amenities.iter().all(|wanted| {
            let wanted = amenities::normalize(wanted);
            property
                .amenities
                .iter()
                .any(|offered| amenities::normalize(offered) == wanted)
        })
    }

    /// Matching properties, in catalog order
    pub fn apply(&self, properties: &[Property]) -> Vec<Property> {
        properties
            .iter()
            .filter(|p| self.matches(p))
            .cloned()
            .collect()
    }
}

/// Distinct locations, in catalog order, for the location picker
pub fn locations(properties: &[Property]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for property in properties {
        if !seen.contains(&property.location) {
            seen.push(property.location.clone());
        }
    }
    seen
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RequestError {
    #[error("Please fill in the {0} field")]
    MissingRecommendationField(&'static str),
}

/// Preferences sent to the recommendation flow
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecommendationRequest {
    pub location: String,
    pub budget: f64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub amenities: Vec<String>,
}

impl RecommendationRequest {
    /// Builds a request from raw form input. Amenities are comma separated.
    pub fn parse(
        location: &str,
        budget: Option<f64>,
        amenities_csv: &str,
    ) -> Result<Self, RequestError> {
        let location = location.trim();
        if location.is_empty() {
            return Err(RequestError::MissingRecommendationField("location"));
        }
        let budget = match budget {
            Some(b) if b > 0.0 => b,
            _ => return Err(RequestError::MissingRecommendationField("budget")),
        };

        let amenities = amenities_csv
            .split(',')
            .map(str::trim)
            .filter(|a| !a.is_empty())
            .map(str::to_string)
            .collect();

        Ok(Self {
            location: location.to_string(),
            budget,
            amenities,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::StaticCatalog;

    #[test]
    fn test_all_location_keeps_everything() {
        let properties = StaticCatalog::new().properties().to_vec();
        assert_eq!(
            PropertyFilter::by_location(ALL_LOCATIONS).apply(&properties).len(),
            properties.len()
        );
        assert_eq!(PropertyFilter::default().apply(&properties).len(), properties.len());
    }

    #[test]
    fn test_location_and_budget() {
        let properties = StaticCatalog::new().properties().to_vec();
        let malibu = PropertyFilter::by_location("Malibu, CA").apply(&properties);
        assert_eq!(malibu.len(), 1);
        assert_eq!(malibu[0].id, "2");

        let cheap = PropertyFilter {
            max_price: Some(180.0),
            ..PropertyFilter::default()
        }
        .apply(&properties);
        let ids: Vec<_> = cheap.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "4"]);
    }

    #[test]
    fn test_amenities_compared_normalized() {
        let properties = StaticCatalog::new().properties().to_vec();
        let filter = PropertyFilter {
            amenities: vec!["beach-access".to_string(), "wifi".to_string()],
            ..PropertyFilter::default()
        };
        let ids: Vec<_> = filter.apply(&properties).into_iter().map(|p| p.id).collect();
        assert_eq!(ids, vec!["2", "6"]);
    }

    #[test]
    fn test_locations_are_distinct_and_ordered() {
        let properties = StaticCatalog::new().properties().to_vec();
        let found = locations(&properties);
        assert_eq!(found.len(), 6);
        assert_eq!(found[0], "Asheville, NC");
    }

    #[test]
    fn test_parse_recommendation_request() {
        let request =
            RecommendationRequest::parse(" Sedona, AZ ", Some(150.0), "WiFi, , Hot tub ")
                .unwrap();
        assert_eq!(request.location, "Sedona, AZ");
        assert_eq!(request.amenities, vec!["WiFi", "Hot tub"]);

        assert_eq!(
            RecommendationRequest::parse("", Some(100.0), ""),
            Err(RequestError::MissingRecommendationField("location"))
        );
        assert_eq!(
            RecommendationRequest::parse("Maui", None, ""),
            Err(RequestError::MissingRecommendationField("budget"))
        );
        assert_eq!(
            RecommendationRequest::parse("Maui", Some(0.0), ""),
            Err(RequestError::MissingRecommendationField("budget"))
        );
    }
}
